use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - one text entry published to the feeds.
///
/// `id`, `author_id` and `pub_date` are assigned at creation and never
/// change afterwards; edits only touch `text` and `group_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    /// Group the post is published under, if any.
    pub group_id: Option<Uuid>,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated id and the current time as its
    /// publication timestamp.
    pub fn new(author_id: Uuid, text: String, group_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            group_id,
            text,
            pub_date: Utc::now(),
        }
    }

    /// The first `max_chars` characters of the text, cut on a character
    /// boundary. Used where a short handle for a post is wanted, e.g. logs.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}
