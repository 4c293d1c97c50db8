//! Rendered page view.

use axum::http::StatusCode;
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::pages::Page;
use crate::routing::history::Location;

/// A page bound to the location it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub page: Page,
    pub location: Location,
}

impl View {
    pub fn new(page: Page, location: Location) -> Self {
        Self { page, location }
    }

    /// HTTP status for serving this view.
    pub fn status(&self) -> StatusCode {
        if self.page.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::OK
        }
    }

    /// Render the HTML document that mounts this page's component.
    pub fn render_document(&self) -> String {
        format!(
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "<meta charset=\"utf-8\">\n",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
                "<title>{title}</title>\n",
                "</head>\n",
                "<body>\n",
                "<div id=\"root\" data-page=\"{component}\" data-path=\"{path}\"></div>\n",
                "</body>\n",
                "</html>\n",
            ),
            title = encode_text(self.page.title()),
            component = self.page.component_name(),
            path = encode_double_quoted_attribute(&self.location.pathname),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_page() {
        let loc = Location::parse("/x");
        assert_eq!(View::new(Page::Scoring, loc.clone()).status(), StatusCode::OK);
        assert_eq!(View::new(Page::NotFound, loc).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_document_names_component_and_path() {
        let view = View::new(Page::AnimalManagement, Location::parse("/animals/123?tab=scores"));
        let html = view.render_document();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("data-page=\"AnimalManagementPage\""));
        assert!(html.contains("data-path=\"/animals/123\""));
        assert!(html.contains("<title>MyCows · Animals</title>"));
    }

    #[test]
    fn test_path_is_attribute_escaped() {
        let location = Location {
            pathname: "/\"><script>&".to_string(),
            ..Location::default()
        };
        let view = View::new(Page::NotFound, location);
        let html = view.render_document();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("data-page=\"NotFoundPage\""));
    }
}
