mod in_memory_status_check_repository;
mod pg_status_check_repository;

pub use in_memory_status_check_repository::InMemoryStatusCheckRepository;
pub use pg_status_check_repository::PgStatusCheckRepository;
