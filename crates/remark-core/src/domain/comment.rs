use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A persisted comment.
///
/// `id` and `created_at` are assigned by the store; a `Comment` only exists
/// after a successful create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub user_id: Uuid,
    pub post_id: String,
    pub created_at: DateTime<Utc>,
}

/// The client-supplied part of a comment, before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub user_id: Uuid,
    pub post_id: String,
}

/// Where a rejected value came from in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSource {
    Body,
    Params,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub value: String,
    pub source: FieldSource,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        value: impl Into<String>,
        source: FieldSource,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.into(),
            source,
        }
    }
}

impl NewComment {
    pub fn new(text: impl Into<String>, user_id: Uuid, post_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id,
            post_id: post_id.into(),
        }
    }

    /// Run every field check and report all failures in check order.
    ///
    /// Only zero-length values are rejected; whitespace counts as content.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut errors = Vec::new();

        if self.text.is_empty() {
            errors.push(FieldError::new(
                "text",
                "Text is required",
                &self.text,
                FieldSource::Body,
            ));
        }

        if self.post_id.is_empty() {
            errors.push(FieldError::new(
                "postId",
                "Post ID is required",
                &self.post_id,
                FieldSource::Params,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Turn the draft into a stored comment using store-assigned values.
    pub fn into_comment(self, id: Uuid, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id,
            text: self.text,
            user_id: self.user_id,
            post_id: self.post_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_names(err: DomainError) -> Vec<String> {
        match err {
            DomainError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_comment_passes() {
        let draft = NewComment::new("nice post", Uuid::new_v4(), "123");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let draft = NewComment::new("", Uuid::new_v4(), "123");
        let err = draft.validate().unwrap_err();

        match err {
            DomainError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "text");
                assert_eq!(errors[0].message, "Text is required");
                assert_eq!(errors[0].source, FieldSource::Body);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_all_failures_are_collected_in_order() {
        let draft = NewComment::new("", Uuid::new_v4(), "");
        let fields = field_names(draft.validate().unwrap_err());
        assert_eq!(fields, vec!["text".to_string(), "postId".to_string()]);
    }

    #[test]
    fn test_whitespace_text_is_accepted() {
        let draft = NewComment::new("   ", Uuid::new_v4(), "123");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_into_comment_keeps_draft_fields() {
        let user_id = Uuid::new_v4();
        let id = Uuid::new_v4();
        let now = Utc::now();

        let comment = NewComment::new("hello", user_id, "p1").into_comment(id, now);

        assert_eq!(comment.id, id);
        assert_eq!(comment.text, "hello");
        assert_eq!(comment.user_id, user_id);
        assert_eq!(comment.post_id, "p1");
        assert_eq!(comment.created_at, now);
    }
}
