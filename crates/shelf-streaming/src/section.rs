//! Section abstraction for independently streamable page parts.

use futures::future::BoxFuture;
use futures::FutureExt;

/// What to do when a section's data fetch fails.
#[derive(Debug, Clone)]
pub enum SectionFallback {
    /// Render an inline error message in place of the section.
    Inline(String),
    /// Abort the page; the failure surfaces to the enclosing error boundary.
    Propagate,
}

impl SectionFallback {
    /// Inline fallback with a user-facing message.
    pub fn inline(message: impl Into<String>) -> Self {
        Self::Inline(message.into())
    }

    /// Render the inline error markup, if this fallback renders in place.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Inline(message) => Some(format!(
                r#"<div class="section-error">{}</div>"#,
                escape_text(message)
            )),
            Self::Propagate => None,
        }
    }
}

/// A named asynchronous section: skeleton placeholder now, HTML when its
/// data dependency resolves.
pub struct SectionTask {
    /// Section name (used for slot IDs and timing).
    pub name: String,
    /// Static markup streamed immediately ahead of the slot (a heading,
    /// for instance). Does not wait for data and is never replaced.
    pub lead: String,
    /// Placeholder HTML shown while the section is pending.
    pub skeleton: String,
    /// Failure behavior.
    pub fallback: SectionFallback,
    /// The section's data-then-render future.
    pub future: BoxFuture<'static, Result<String, anyhow::Error>>,
}

impl SectionTask {
    /// Create a section task.
    pub fn new<F>(name: impl Into<String>, skeleton: impl Into<String>, future: F) -> Self
    where
        F: std::future::Future<Output = Result<String, anyhow::Error>> + Send + 'static,
    {
        Self {
            name: name.into(),
            lead: String::new(),
            skeleton: skeleton.into(),
            fallback: SectionFallback::inline("Something went wrong."),
            future: future.boxed(),
        }
    }

    /// Set static markup streamed ahead of the slot.
    pub fn with_lead(mut self, html: impl Into<String>) -> Self {
        self.lead = html.into();
        self
    }

    /// Set the failure behavior.
    pub fn with_fallback(mut self, fallback: SectionFallback) -> Self {
        self.fallback = fallback;
        self
    }
}

/// Simple text escape for user-facing messages.
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
