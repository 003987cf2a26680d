use std::sync::Arc;

use crate::application::services::ParseService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub parse_service: Arc<ParseService>,
    pub settings: Settings,
}
