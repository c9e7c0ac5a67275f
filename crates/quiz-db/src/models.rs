use serde::{Deserialize, Serialize};

/// Topic model - groups questions by subject area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique topic identifier, assigned by the database on insert
    pub id: Option<i64>,
    /// Topic name (e.g. "Science", "History")
    pub name: String,
}

/// Question model - a single quiz question tied to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique question identifier, assigned by the database on insert
    pub id: Option<i64>,
    /// Difficulty rating for the question
    pub difficulty: i32,
    /// Question text
    pub content: String,
    /// Topic this question belongs to; must carry a valid id before the
    /// question can be persisted
    pub topic: Option<Topic>,
}

/// Quiz model - a named, ordered selection of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique quiz identifier, assigned by the database on insert
    pub id: Option<i64>,
    /// Quiz name
    pub name: String,
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

/// Response model - an answer given to a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Unique response identifier, assigned by the database on insert
    pub id: Option<i64>,
    /// Question this response answers
    pub question_id: i64,
    /// Whether the response was correct
    pub is_correct: bool,
    /// Response text
    pub text: String,
}
