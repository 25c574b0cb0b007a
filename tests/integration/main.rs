//! Integration tests for the Comanda HTTP API.
//!
//! These tests need a PostgreSQL instance; set `COMANDA_TEST_DATABASE_URL`
//! to run them. Without it every test self-skips.

mod helpers;

mod auth_test;
mod lock_test;
mod policy_test;
