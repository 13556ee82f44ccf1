use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    /// The author, if known.
    pub person_id: Option<i64>,
    pub text: String,
    pub created_ts: i64,
    pub target: CommentTarget,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NewComment {
    pub person_id: Option<i64>,
    pub text: String,
    pub target: CommentTarget,
}

/// What the comment was made on, with the id of that entity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", content = "id")]
pub enum CommentTarget {
    Task(i64),
    Animal(i64),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Comments(Vec<Comment>);

mod impls;
pub mod traits;
