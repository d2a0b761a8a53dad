//! Error boundary rendering.

/// Render the error boundary shown when a propagating section fails.
///
/// Retry re-requests the page, which re-runs every fetch and clears the
/// error state.
pub fn render_error_boundary() -> String {
    r#"<section class="error-boundary" data-section="error-boundary">
    <h3>Something went wrong.</h3>
    <form method="get">
        <button type="submit">Try again</button>
    </form>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_offers_retry() {
        let html = render_error_boundary();
        assert!(html.contains("Try again"));
        assert!(html.contains("error-boundary"));
    }
}
