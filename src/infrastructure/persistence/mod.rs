mod pg_pool;
mod repositories;

pub use repositories::InMemoryStatusCheckRepository;
pub use repositories::PgStatusCheckRepository;

pub use pg_pool::{create_pool, run_migrations};
