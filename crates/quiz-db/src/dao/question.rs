//! Question DAO.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::dao::{SqliteDao, SqliteQuery};
use crate::error::{DaoError, DaoResult};
use crate::models::{Question, Topic};

const SAVE_QUERY: &str =
    "INSERT INTO questions (difficulty, content, topic_id, id) VALUES (?,?,?,?);";

const UPDATE_QUERY: &str =
    "UPDATE questions SET difficulty = ?, content = ?, topic_id = ? WHERE id = ?;";

const BY_ID_QUERY: &str = "SELECT questions.*, topics.id AS topic_id, topics.name AS topic_name \
     FROM questions \
     LEFT JOIN topics ON questions.topic_id = topics.id \
     WHERE questions.id = ?;";

const FIND_BY_TOPIC_QUERY: &str =
    "SELECT questions.*, topics.id AS topic_id, topics.name AS topic_name \
     FROM questions \
     LEFT JOIN topics ON questions.topic_id = topics.id \
     WHERE topics.name = ?;";

const DELETE_QUERY: &str = "DELETE FROM questions WHERE id = ?";

/// DAO persisting [`Question`]s, with their [`Topic`] joined in on every read.
#[derive(Debug, Clone)]
pub struct QuestionDao {
    pool: SqlitePool,
}

impl QuestionDao {
    /// Creates a `QuestionDao` storing and retrieving question data through
    /// the given pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Retrieves every question associated with the named topic.
    ///
    /// Returns an empty vec when no question matches; that is not an error.
    pub async fn find_by_topic(&self, topic_name: &str) -> DaoResult<Vec<Question>> {
        debug!(topic = topic_name, "fetching questions by topic");

        let rows = sqlx::query(FIND_BY_TOPIC_QUERY)
            .bind(topic_name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DaoError::database("Error while fetching questions by topic", e))?;

        rows.iter().map(|row| self.map_row(row)).collect()
    }
}

impl SqliteDao for QuestionDao {
    type Entity = Question;
    type Key = i64;

    fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn save_query(&self, _question: &Question) -> &str {
        SAVE_QUERY
    }

    fn update_query(&self) -> &str {
        UPDATE_QUERY
    }

    fn by_id_query(&self) -> &str {
        BY_ID_QUERY
    }

    fn delete_query(&self) -> &str {
        DELETE_QUERY
    }

    fn bind_id<'q>(&self, query: SqliteQuery<'q>, id: &i64) -> SqliteQuery<'q> {
        query.bind(*id)
    }

    fn bind_entity<'q>(
        &self,
        query: SqliteQuery<'q>,
        question: &Question,
    ) -> DaoResult<SqliteQuery<'q>> {
        let topic_id = question
            .topic
            .as_ref()
            .and_then(|topic| topic.id)
            .ok_or_else(|| DaoError::InvalidEntity("Question must have a valid topic".into()))?;

        // Trailing id parameter: the caller-supplied insert id (NULL lets the
        // database assign one) or the WHERE key on update.
        Ok(query
            .bind(question.difficulty)
            .bind(question.content.clone())
            .bind(topic_id)
            .bind(question.id))
    }

    fn map_row(&self, row: &SqliteRow) -> DaoResult<Question> {
        let topic = Topic {
            id: row.try_get("topic_id")?,
            name: row.try_get("topic_name")?,
        };

        Ok(Question {
            id: row.try_get("id")?,
            difficulty: row.try_get("difficulty")?,
            content: row.try_get("content")?,
            topic: Some(topic),
        })
    }
}
