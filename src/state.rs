//! Shared application state handed to the route handlers.

use crate::modules::books::store::SharedBookStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Store backing the book routes
    pub store: SharedBookStore,
}

impl AppState {
    pub fn new(store: SharedBookStore) -> Self {
        Self { store }
    }
}
