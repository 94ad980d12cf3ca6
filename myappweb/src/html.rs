//! HTML content helpers for the myappweb UI.
//!
//! Exports the page literals (`PAGE_TITLE`, `PAGE_COLOR`, `PAGE_MESSAGE`) and
//! the `home_page` helper which renders the greeting page. Keep HTML blobs
//! here to avoid runtime template dependencies.
//!
/// Title shown in the browser tab
pub const PAGE_TITLE: &str = "My App";

/// Background color of the greeting page
pub const PAGE_COLOR: &str = "#2b6cb0";

/// Greeting shown in the page heading
pub const PAGE_MESSAGE: &str = "Hello from my App!";

/// Render the greeting page with the configured color and message
pub fn home_page() -> String {
    format!(
        "<html>
<head>
  <title>{}</title>
</head>
<body style=\"background-color:{}; color:white; text-align:center; font-family:Arial; padding-top:50px;\">
  <h1>{}</h1>
</body>
</html>",
        PAGE_TITLE, PAGE_COLOR, PAGE_MESSAGE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_page_contains_title_message_and_color() {
        let page = home_page();
        assert!(page.contains("<title>My App</title>"));
        assert!(page.contains("<h1>Hello from my App!</h1>"));
        assert!(page.contains("background-color:#2b6cb0;"));
    }

    #[test]
    fn home_page_is_a_complete_document() {
        let page = home_page();
        assert!(page.starts_with("<html>"));
        assert!(page.ends_with("</html>"));
        assert!(page.contains("</head>"));
        assert!(page.contains("</body>"));
    }
}
