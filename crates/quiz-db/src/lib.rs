//! Data-access layer for the quiz domain model.
//!
//! Entity DAOs implement the [`dao::GenericDao`] CRUD contract by supplying
//! SQL text, parameter binding, and row mapping to a shared execution base;
//! see [`dao`] for the mechanics and [`dao::QuestionDao`] for the concrete
//! question DAO.
//!
//! The layer does not own the database: callers hand each DAO a
//! [`sqlx::SqlitePool`] and keep responsibility for schema setup and pooling
//! policy.

pub mod dao;
pub mod error;
pub mod models;
pub mod schema;

use anyhow::Context;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a SQLite connection pool.
pub async fn create_pool(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}
