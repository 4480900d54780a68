//! Forum route DTOs (v2 scheme).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumCategory {
    pub id: i64,
    pub title: String,
    pub acronym: String,
    pub threads: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumAuthor {
    pub id: i64,
    pub username: String,
    pub karma: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumThread {
    pub id: i64,
    pub title: String,
    pub forum_id: i64,
    pub posts: i64,
    pub rating: i64,
    pub views: i64,
    pub author: Option<ForumAuthor>,
    pub last_poster: Option<ForumAuthor>,
    pub first_post_time: i64,
    pub last_post_time: Option<i64>,
    pub has_poll: bool,
    pub is_locked: bool,
    pub is_sticky: bool,
}

/// A thread with its opening post and poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumThreadDetail {
    #[serde(flatten)]
    pub thread: ForumThread,
    pub content: String,
    pub content_raw: Option<String>,
    pub poll: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumPost {
    pub id: i64,
    pub thread_id: i64,
    pub author: ForumAuthor,
    pub is_legacy: bool,
    pub is_topic: bool,
    pub is_edited: bool,
    pub is_pinned: bool,
    pub created_time: i64,
    pub edited_by: Option<i64>,
    pub has_quote: bool,
    pub quoted_post_id: Option<i64>,
    pub content: String,
    pub likes: i64,
    pub dislikes: i64,
}

/// One page of posts plus the paging metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumPosts {
    pub posts: Vec<ForumPost>,
    #[serde(rename = "_metadata")]
    pub metadata: Value,
}

/// How post bodies are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostContentType {
    Plain,
    Raw,
}

impl fmt::Display for PostContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostContentType::Plain => write!(f, "plain"),
            PostContentType::Raw => write!(f, "raw"),
        }
    }
}
