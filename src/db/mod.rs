//! Provides database interaction functionalities.
//!
//! `Repository` is the only boundary between the menu and persistence;
//! `PgRepository` implements it on PostgreSQL via `sqlx`.

mod postgres;
mod repository;

pub use postgres::*;
pub use repository::*;
