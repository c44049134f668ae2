use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::store::QuizStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuizStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: QuizStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<QuizStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
