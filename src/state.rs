use crate::config::Config;
use crate::services::quidax::QuidaxService;

#[derive(Clone)]
pub struct AppState {
    pub quidax: QuidaxService,
}

impl AppState {
    pub fn new(quidax: QuidaxService) -> Self {
        Self { quidax }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(QuidaxService::with_base_url(config.base_url.clone()))
    }
}
