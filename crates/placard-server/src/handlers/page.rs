//! Demo page handler.

use axum::response::Html;

/// GET / - Serves the demo page with the `response` element and the
/// fetch-and-render script.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::RESPONSE_ELEMENT_ID;

    #[tokio::test]
    async fn test_index_contains_response_element() {
        let Html(body) = index().await;
        assert!(body.contains(&format!("id=\"{}\"", RESPONSE_ELEMENT_ID)));
        assert!(body.contains("/api/message"));
    }
}
