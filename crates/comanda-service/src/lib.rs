//! # comanda-service
//!
//! Business services that orchestrate repositories and auth primitives:
//! account flows (login, registration, admin bootstrap) and the cached
//! menu catalog.

pub mod account;
pub mod catalog;

pub use account::AccountService;
pub use catalog::CatalogService;
