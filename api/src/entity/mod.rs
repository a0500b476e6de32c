//! SeaORM entities
//!
//! Table mappings for the PostgreSQL adapters. Domain code never sees these;
//! the adapters convert them into `domain::entities` types.

pub mod owners;
pub mod pets;
pub mod types;
