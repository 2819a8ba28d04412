use ideaboard_errors::AppError;
use serde::{Deserialize, Serialize};

pub const MAX_IDEA_CHARS: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: uuid::Uuid,
    pub text: String,
    pub upvotes: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author_id: uuid::Uuid,
}

impl Idea {
    pub fn new(text: IdeaText, author_id: uuid::Uuid) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            text: text.into_inner(),
            upvotes: 0,
            created_at: chrono::Utc::now(),
            author_id,
        }
    }
}

/// Submitted idea text: trimmed, non-empty and at most [`MAX_IDEA_CHARS`]
/// code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaText(String);

impl IdeaText {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let text = raw.trim();

        if text.is_empty() {
            return Err(AppError::InvalidArgument(
                "Ideas cannot be empty.".to_string(),
            ));
        }

        if text.chars().count() > MAX_IDEA_CHARS {
            return Err(AppError::InvalidArgument(format!(
                "Ideas must be {} characters or less.",
                MAX_IDEA_CHARS
            )));
        }

        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
