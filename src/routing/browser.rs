//! In-process router owning history and URL matching.
//!
//! Every navigation event (push, replace, back, forward) goes through the
//! history and then re-resolves the current pathname against the table.

use std::sync::Arc;

use tokio::sync::watch;

use crate::pages::View;
use crate::routing::history::{History, Location};
use crate::routing::router::{RouteMatch, RouteTable};

/// Router bound to a session history.
#[derive(Debug)]
pub struct BrowserRouter {
    table: Arc<RouteTable>,
    history: History,
}

impl BrowserRouter {
    /// Start a session at `initial`.
    pub fn new(table: Arc<RouteTable>, initial: &str) -> Self {
        Self {
            table,
            history: History::new(initial),
        }
    }

    /// Navigate to `url`, adding a history entry.
    pub fn navigate(&mut self, url: &str) -> View {
        self.history.push(url);
        self.render_logged()
    }

    /// Navigate to `url` in place of the current entry.
    pub fn replace(&mut self, url: &str) -> View {
        self.history.replace(url);
        self.render_logged()
    }

    /// Go back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<View> {
        self.history.back().then(|| self.render_logged())
    }

    /// Go forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self) -> Option<View> {
        self.history.forward().then(|| self.render_logged())
    }

    /// Match for the current location.
    pub fn current(&self) -> RouteMatch {
        self.table.resolve(&self.history.location().pathname)
    }

    /// Render the current location.
    pub fn render(&self) -> View {
        View::new(self.current().page, self.history.location().clone())
    }

    pub fn location(&self) -> &Location {
        self.history.location()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Subscribe to location changes.
    pub fn listen(&self) -> watch::Receiver<Location> {
        self.history.listen()
    }

    /// Build an href for `page` from the bound table.
    pub fn link_to(&self, page: crate::pages::Page) -> Option<&str> {
        self.table.path_for(page)
    }

    fn render_logged(&self) -> View {
        let view = self.render();
        tracing::debug!(
            path = %view.location.pathname,
            page = view.page.as_str(),
            action = ?self.history.last_action(),
            "Navigation"
        );
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;

    fn router() -> BrowserRouter {
        BrowserRouter::new(Arc::new(RouteTable::default()), "/")
    }

    #[test]
    fn test_initial_render() {
        let router = router();
        assert_eq!(router.render().page, Page::Home);
    }

    #[test]
    fn test_navigate_renders_each_page() {
        let mut router = router();
        assert_eq!(router.navigate("/animals").page, Page::AnimalManagement);
        assert_eq!(router.navigate("/animals/123").page, Page::AnimalManagement);
        assert_eq!(router.navigate("/scoring").page, Page::Scoring);
        assert_eq!(router.navigate("/dashboard").page, Page::Dashboard);
        assert_eq!(router.navigate("/unknown").page, Page::NotFound);
        assert_eq!(router.navigate("/").page, Page::Home);
    }

    #[test]
    fn test_query_and_hash_do_not_affect_matching() {
        let mut router = router();
        let view = router.navigate("/scoring?animal=4#criteria");
        assert_eq!(view.page, Page::Scoring);
        assert_eq!(view.location.search, "?animal=4");
    }

    #[test]
    fn test_redirect_query_does_not_change_page() {
        let mut router = router();
        let view = router.navigate("/animals?next=https://mycows.example/x");
        assert_eq!(view.page, Page::AnimalManagement);
        assert_eq!(view.location.pathname, "/animals");
    }

    #[test]
    fn test_back_and_forward_rerender() {
        let mut router = router();
        router.navigate("/animals");
        router.navigate("/dashboard");

        assert_eq!(router.back().map(|v| v.page), Some(Page::AnimalManagement));
        assert_eq!(router.back().map(|v| v.page), Some(Page::Home));
        assert!(router.back().is_none());
        assert_eq!(router.forward().map(|v| v.page), Some(Page::AnimalManagement));
    }

    #[test]
    fn test_replace() {
        let mut router = router();
        router.navigate("/animals");
        assert_eq!(router.replace("/oops").page, Page::NotFound);
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_link_to() {
        let router = router();
        assert_eq!(router.link_to(Page::Scoring), Some("/scoring"));
    }
}
