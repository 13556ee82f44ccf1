use std::ops::Deref;
use super::*;

impl CommentTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            CommentTarget::Task(_) => "task",
            CommentTarget::Animal(_) => "animal",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            CommentTarget::Task(id) | CommentTarget::Animal(id) => *id,
        }
    }
}

impl From<Vec<Comment>> for Comments {
    fn from(args: Vec<Comment>) -> Self {
        Self(args)
    }
}

impl Deref for Comments {
    type Target = Vec<Comment>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
