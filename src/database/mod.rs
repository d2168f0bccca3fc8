//! Hub for the database accessors. Each submodule owns the queries for one
//! concern and takes the shared `PgPool`; a connection is checked out per
//! query and returned on every exit path.

pub mod init;
pub mod models;
pub mod progress;
pub mod users;
pub mod words;
