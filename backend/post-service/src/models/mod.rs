/// Data models for post-service
///
/// A `Post` is a self-contained document: the liker-id array and the comment
/// sequence are embedded in the row as JSONB, both ordered most-recent-first.
/// Author `name`/`avatar` fields are snapshots taken at write time and are
/// never re-joined against the `users` table on read.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// A comment embedded in a post document. Independently owned and deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// A user-authored post with embedded likes and comments.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub likes: Json<Vec<Uuid>>,
    pub comments: Json<Vec<Comment>>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Toggle the caller's like: prepend when absent, remove every
    /// occurrence when present. Calling twice with the same user restores
    /// the original array, order included.
    pub fn toggle_like(&mut self, user_id: Uuid) {
        if self.likes.0.contains(&user_id) {
            self.likes.0.retain(|id| *id != user_id);
        } else {
            self.likes.0.insert(0, user_id);
        }
    }

    /// Insert a new comment at the head of the sequence.
    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.0.insert(0, comment);
    }
}

/// An author profile as read from the user store.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_likes(likes: Vec<Uuid>) -> Post {
        Post {
            id: Uuid::new_v4(),
            text: "hello".to_string(),
            name: "Ada".to_string(),
            avatar: None,
            user_id: Uuid::new_v4(),
            likes: Json(likes),
            comments: Json(vec![]),
            created_at: Utc::now(),
        }
    }

    fn comment(text: &str) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            text: text.to_string(),
            name: "Ada".to_string(),
            avatar: None,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn toggle_like_prepends_new_likers() {
        let existing = Uuid::new_v4();
        let mut post = post_with_likes(vec![existing]);
        let caller = Uuid::new_v4();

        post.toggle_like(caller);
        assert_eq!(post.likes.0, vec![caller, existing]);
    }

    #[test]
    fn toggle_like_is_an_involution() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut post = post_with_likes(vec![a, b]);
        let caller = Uuid::new_v4();

        post.toggle_like(caller);
        post.toggle_like(caller);
        assert_eq!(post.likes.0, vec![a, b]);
    }

    #[test]
    fn toggle_like_removes_every_occurrence() {
        let caller = Uuid::new_v4();
        let other = Uuid::new_v4();
        // Duplicates cannot be produced by toggling, but a corrupt array
        // must still converge to zero occurrences.
        let mut post = post_with_likes(vec![caller, other, caller]);

        post.toggle_like(caller);
        assert_eq!(post.likes.0, vec![other]);
    }

    #[test]
    fn prepend_comment_puts_newest_first() {
        let mut post = post_with_likes(vec![]);
        let first = comment("first");
        let second = comment("second");

        post.prepend_comment(first.clone());
        post.prepend_comment(second.clone());
        assert_eq!(post.comments.0, vec![second, first]);
    }

    #[test]
    fn wire_names_match_the_api_contract() {
        let post = post_with_likes(vec![]);
        let value = serde_json::to_value(&post).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "text", "name", "avatar", "user", "likes", "comments", "date"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("user_id"));
        assert!(!object.contains_key("created_at"));
    }

    #[test]
    fn comment_wire_names_match_the_api_contract() {
        let value = serde_json::to_value(comment("hi")).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "text", "name", "avatar", "user", "date"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert!(!object.contains_key("user_id"));
    }
}
