//! Venue, artist and show booking directory served over HTTP.

use std::sync::Arc;

pub mod config;
pub mod directory;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod utils;

use repository::Repository;
use utils::clock::Clock;

/// Shared by every handler: the store and the source of "now".
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn Repository>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(repository: Arc<dyn Repository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}
