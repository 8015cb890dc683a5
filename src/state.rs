use std::sync::Arc;

use crate::database::ListStore;

/// Shared handler state: the list store behind its trait seam
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }
}
