//! Defines the data structures and models used throughout the application.
//!
//! This includes rows stored in the database, the joined views rendered by the
//! menu, and the input records collected by the prompt forms.

mod tracker;

pub use tracker::*;
