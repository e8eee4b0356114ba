use std::sync::Arc;

use registry_core::services::UserService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub app_name: Arc<str>,
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(app_name: impl Into<Arc<str>>, users: UserService) -> Self {
        Self {
            app_name: app_name.into(),
            users: Arc::new(users),
        }
    }
}
