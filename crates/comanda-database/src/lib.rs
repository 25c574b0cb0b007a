//! # comanda-database
//!
//! PostgreSQL connection management, migrations, the exclusive row-lock
//! fetch helper, and concrete repository implementations for all Comanda
//! entities.

pub mod connection;
pub mod locking;
pub mod migration;
pub mod repositories;
