//! PostgreSQL adapters - implementations of the persistence ports.

mod list_reader;
mod share_repository;

pub use list_reader::PostgresListReader;
pub use share_repository::PostgresShareRepository;
