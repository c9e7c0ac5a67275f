/// Database schema definitions for the quiz tables
///
/// Identifiers are assigned by the database: `INTEGER PRIMARY KEY` makes the
/// column an alias of SQLite's rowid, so inserting NULL produces a fresh id
/// while an explicitly bound id is honored as-is.

/// SQL schema for the topics table
pub const TOPICS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS topics (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);
"#;

/// SQL schema for the questions table
pub const QUESTIONS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY,
    difficulty INTEGER NOT NULL,
    content TEXT NOT NULL,
    topic_id INTEGER NOT NULL,
    CONSTRAINT fk_questions_topic FOREIGN KEY (topic_id) REFERENCES topics(id)
);
"#;
