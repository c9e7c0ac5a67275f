//! DAO (Data Access Object) layer.
//!
//! [`GenericDao`] is the CRUD contract shared by every entity DAO.
//! [`SqliteDao`] is the execution base behind it: an entity DAO supplies SQL
//! text, parameter binding, and row mapping, and the blanket impl below runs
//! the statements, checks affected rows, and translates driver failures into
//! [`DaoError`](crate::error::DaoError).

use async_trait::async_trait;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DaoError, DaoResult};

pub mod question;

pub use question::QuestionDao;

/// A parameterized SQLite statement under construction.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A mutating statement must touch at least this many rows to count as done.
const ROWS_AFFECTED_ON_SUCCESS: u64 = 1;

/// Generic CRUD contract for entity DAOs.
///
/// `T` is the entity type, `K` the type of its primary key.
#[async_trait]
pub trait GenericDao<T, K> {
    /// Persists a new entity.
    async fn save(&self, entity: &T) -> DaoResult<()>;

    /// Retrieves an entity by its primary key. A missing row is `Ok(None)`,
    /// never an error.
    async fn get_by_id(&self, id: K) -> DaoResult<Option<T>>;

    /// Persists changes to an existing entity, keyed by its id.
    async fn update(&self, entity: &T) -> DaoResult<()>;

    /// Removes the row for the primary key.
    async fn delete_by_id(&self, id: K) -> DaoResult<()>;
}

/// Extension points an entity DAO supplies to the shared execution skeleton.
///
/// Implementing this trait is all it takes to get the four [`GenericDao`]
/// operations: the blanket impl below owns statement construction, pool
/// round-trips, affected-row checks, and error translation.
pub trait SqliteDao: Send + Sync {
    /// The entity this DAO persists.
    type Entity: Send + Sync + 'static;
    /// The entity's primary-key type.
    type Key: Send + Sync + 'static;

    /// Connection pool every statement executes on.
    fn pool(&self) -> &SqlitePool;

    /// SQL text for inserting `entity`.
    fn save_query(&self, entity: &Self::Entity) -> &str;

    /// SQL text for updating an existing row.
    fn update_query(&self) -> &str;

    /// SQL text for selecting one row by primary key.
    fn by_id_query(&self) -> &str;

    /// SQL text for deleting one row by primary key.
    fn delete_query(&self) -> &str;

    /// Binds the primary key into a statement.
    fn bind_id<'q>(&self, query: SqliteQuery<'q>, id: &Self::Key) -> SqliteQuery<'q>;

    /// Binds the entity's fields into a save/update statement.
    ///
    /// Entity validation happens here, before anything reaches the database.
    fn bind_entity<'q>(
        &self,
        query: SqliteQuery<'q>,
        entity: &Self::Entity,
    ) -> DaoResult<SqliteQuery<'q>>;

    /// Maps one result row into an entity.
    fn map_row(&self, row: &SqliteRow) -> DaoResult<Self::Entity>;
}

#[async_trait]
impl<D> GenericDao<D::Entity, D::Key> for D
where
    D: SqliteDao,
{
    async fn save(&self, entity: &D::Entity) -> DaoResult<()> {
        debug!("saving entity");

        let statement = self.bind_entity(sqlx::query(self.save_query(entity)), entity)?;
        let outcome = statement
            .execute(self.pool())
            .await
            .map_err(|e| DaoError::database("Database error while saving object", e))?;

        if outcome.rows_affected() < ROWS_AFFECTED_ON_SUCCESS {
            return Err(DaoError::failed("Failed to save the object!"));
        }

        Ok(())
    }

    async fn get_by_id(&self, id: D::Key) -> DaoResult<Option<D::Entity>> {
        debug!("fetching entity by id");

        let row = self
            .bind_id(sqlx::query(self.by_id_query()), &id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DaoError::database("Database error while fetching object by ID", e))?;

        row.as_ref().map(|row| self.map_row(row)).transpose()
    }

    async fn update(&self, entity: &D::Entity) -> DaoResult<()> {
        debug!("updating entity");

        let statement = self.bind_entity(sqlx::query(self.update_query()), entity)?;
        let outcome = statement
            .execute(self.pool())
            .await
            .map_err(|e| DaoError::database("Database error while updating object", e))?;

        if outcome.rows_affected() < ROWS_AFFECTED_ON_SUCCESS {
            return Err(DaoError::failed("Failed to update the object"));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: D::Key) -> DaoResult<()> {
        debug!("deleting entity by id");

        let outcome = self
            .bind_id(sqlx::query(self.delete_query()), &id)
            .execute(self.pool())
            .await
            .map_err(|e| DaoError::database("Database error while deleting object", e))?;

        if outcome.rows_affected() < ROWS_AFFECTED_ON_SUCCESS {
            return Err(DaoError::failed("Failed to delete the object"));
        }

        Ok(())
    }
}
