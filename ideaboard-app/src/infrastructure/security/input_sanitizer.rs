use crate::domain::IdeaText;
use ideaboard_errors::AppError;
use uuid::Uuid;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Strips control characters (newlines and tabs survive), then applies
    /// the idea length rules.
    pub fn idea_text(raw: &str) -> Result<IdeaText, AppError> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();

        IdeaText::parse(&cleaned).inspect_err(|e| {
            tracing::warn!("Rejected idea text: {}", e);
        })
    }

    pub fn idea_id(raw: Option<&str>) -> Result<Uuid, AppError> {
        let raw = raw.map(str::trim).unwrap_or_default();

        if raw.is_empty() {
            return Err(AppError::InvalidArgument("ideaId is required.".to_string()));
        }

        Uuid::parse_str(raw)
            .map_err(|_| AppError::InvalidArgument("ideaId is not a valid identifier.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_idea_text() {
        let text = InputSanitizer::idea_text("  line one\nline two\t!  ").unwrap();
        assert_eq!(text.as_str(), "line one\nline two\t!");
    }

    #[test]
    fn test_control_characters_removed() {
        let text = InputSanitizer::idea_text("bell\u{7} and null\u{0}").unwrap();
        assert_eq!(text.as_str(), "bell and null");
    }

    #[test]
    fn test_only_control_characters_is_empty() {
        assert!(InputSanitizer::idea_text("\u{1b}\u{7f}").is_err());
    }

    #[test]
    fn test_idea_id() {
        let id = Uuid::new_v4();
        assert_eq!(InputSanitizer::idea_id(Some(&id.to_string())), Ok(id));
        assert!(InputSanitizer::idea_id(None).is_err());
        assert!(InputSanitizer::idea_id(Some("   ")).is_err());
        assert!(InputSanitizer::idea_id(Some("demo-1")).is_err());
    }
}
