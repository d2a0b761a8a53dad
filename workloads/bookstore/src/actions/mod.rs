//! Mutation actions: review create/delete with tag revalidation.
//!
//! Actions run as one logical unit: validate, write, invalidate. Every
//! failure is folded into an `ActionResult` for the caller to display; no
//! step after a failed one runs, so a failed write never invalidates.

mod create_review;
mod delete_review;

use std::collections::HashMap;

pub use create_review::*;
pub use delete_review::*;

/// Structured form input, as submitted by the page.
pub type FormData = HashMap<String, String>;

/// Result of a mutation action, threaded back to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResult {
    pub status: bool,
    pub message: String,
}

impl ActionResult {
    /// A successful action.
    pub fn ok() -> Self {
        Self {
            status: true,
            message: String::new(),
        }
    }

    /// A failed action with a user-facing message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
        }
    }
}

/// Extract a non-empty form field.
pub(crate) fn field<'a>(form: &'a FormData, name: &str) -> Option<&'a str> {
    form.get(name).map(|s| s.trim()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_rejects_blank_values() {
        let mut form = FormData::new();
        form.insert("author".to_string(), "  ".to_string());
        form.insert("content".to_string(), "great".to_string());

        assert_eq!(field(&form, "author"), None);
        assert_eq!(field(&form, "content"), Some("great"));
        assert_eq!(field(&form, "missing"), None);
    }
}
