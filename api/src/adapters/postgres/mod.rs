//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod owner_repo;

#[cfg(test)]
mod integration_tests;

pub use owner_repo::PostgresOwnerRepository;
