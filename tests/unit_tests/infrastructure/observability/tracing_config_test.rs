use docsift::infrastructure::observability::TracingConfig;
use docsift::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_json_logging_setting_when_building_config_then_json_is_enabled() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "Prod");
}

#[test]
fn given_level_when_building_filter_then_crate_and_http_are_debug() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Local);

    assert_eq!(
        config.default_filter(),
        "warn,docsift=debug,tower_http=debug"
    );
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert_eq!(config.level, "info");
}
