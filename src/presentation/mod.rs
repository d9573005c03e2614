pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use router::{API_PREFIX, create_router, cors_layer};
pub use state::AppState;
