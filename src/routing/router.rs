//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the page for a pathname, first match wins
//! - Reverse lookup: link target for a page
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, swapped whole on reload)
//! - O(n) scan: the table is a handful of entries
//! - A table without a fallback still resolves to NotFound

use serde::Serialize;

use crate::config::RouteConfig;
use crate::pages::Page;
use crate::routing::matcher::{
    trim_trailing_slash, CatchAllMatcher, ExactPathMatcher, Matcher, PathPrefixMatcher,
};

/// A compiled route.
#[derive(Debug)]
pub struct Route {
    pub name: String,
    pub page: Page,
    matcher: Box<dyn Matcher>,
}

impl Route {
    pub fn new(name: impl Into<String>, matcher: Box<dyn Matcher>, page: Page) -> Self {
        Self {
            name: name.into(),
            page,
            matcher,
        }
    }

    /// Compile a route from its config entry.
    pub fn from_config(config: &RouteConfig) -> Self {
        let matcher: Box<dyn Matcher> = match &config.path {
            None => Box::new(CatchAllMatcher),
            Some(path) if config.exact => {
                Box::new(ExactPathMatcher::new(path.as_str()).case_sensitive(config.sensitive))
            }
            Some(path) => {
                Box::new(PathPrefixMatcher::new(path.as_str()).case_sensitive(config.sensitive))
            }
        };
        Self::new(config.name.clone(), matcher, config.page)
    }

    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    pub fn is_fallback(&self) -> bool {
        self.matcher.pattern().is_none()
    }
}

/// Result of resolving a pathname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Name of the route that matched.
    pub route: String,
    pub page: Page,
    /// Portion of the pathname the route consumed.
    pub matched: String,
    /// Whether the match covered the whole pathname.
    pub exact: bool,
}

impl RouteMatch {
    fn not_found(path: &str) -> Self {
        Self {
            route: "not_found".to_string(),
            page: Page::NotFound,
            matched: path.to_string(),
            exact: true,
        }
    }
}

/// Ordered route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Compile config entries, keeping their order.
    pub fn from_config(routes: &[RouteConfig]) -> Self {
        Self::new(routes.iter().map(Route::from_config).collect())
    }

    /// Find the first route matching `path`.
    pub fn try_resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            let matched = route.matcher.match_path(path)?;
            let exact = route.is_fallback()
                || matched.len() == trim_trailing_slash(path).len();
            Some(RouteMatch {
                route: route.name.clone(),
                page: route.page,
                matched: matched.to_string(),
                exact,
            })
        })
    }

    /// Find the page for `path`. Unmatched paths resolve to NotFound.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        self.try_resolve(path).unwrap_or_else(|| {
            tracing::warn!(path = %path, "No route matched and table has no fallback");
            RouteMatch::not_found(path)
        })
    }

    /// Link target of the first route rendering `page`.
    pub fn path_for(&self, page: Page) -> Option<&str> {
        self.routes
            .iter()
            .filter(|r| r.page == page)
            .find_map(|r| r.matcher.pattern())
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&crate::config::schema::default_routes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_for(path: &str) -> Page {
        RouteTable::default().resolve(path).page
    }

    #[test]
    fn test_default_table_dispatch() {
        assert_eq!(page_for("/"), Page::Home);
        assert_eq!(page_for("/animals"), Page::AnimalManagement);
        assert_eq!(page_for("/animals/123"), Page::AnimalManagement);
        assert_eq!(page_for("/scoring"), Page::Scoring);
        assert_eq!(page_for("/dashboard"), Page::Dashboard);
        assert_eq!(page_for("/unknown"), Page::NotFound);
    }

    #[test]
    fn test_home_is_exact() {
        assert_eq!(page_for("/home"), Page::NotFound);
        assert_eq!(page_for("/scoringx"), Page::NotFound);
    }

    #[test]
    fn test_match_details() {
        let table = RouteTable::default();

        let m = table.resolve("/animals/123");
        assert_eq!(m.route, "animals");
        assert_eq!(m.matched, "/animals");
        assert!(!m.exact);

        let m = table.resolve("/animals/");
        assert!(m.exact);
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            Route::new("wide", Box::new(PathPrefixMatcher::new("/animals")), Page::AnimalManagement),
            Route::new("narrow", Box::new(PathPrefixMatcher::new("/animals/scores")), Page::Scoring),
            Route::new("fallback", Box::new(CatchAllMatcher), Page::NotFound),
        ]);

        assert_eq!(table.resolve("/animals/scores").route, "wide");
    }

    #[test]
    fn test_table_without_fallback_still_resolves() {
        let table = RouteTable::new(vec![Route::new(
            "home",
            Box::new(ExactPathMatcher::new("/")),
            Page::Home,
        )]);

        assert!(table.try_resolve("/nope").is_none());
        assert_eq!(table.resolve("/nope").page, Page::NotFound);
    }

    #[test]
    fn test_path_for() {
        let table = RouteTable::default();
        assert_eq!(table.path_for(Page::Home), Some("/"));
        assert_eq!(table.path_for(Page::Dashboard), Some("/dashboard"));
        assert_eq!(table.path_for(Page::NotFound), None);
    }

    #[test]
    fn test_exactly_one_fallback_last() {
        let table = RouteTable::default();
        let fallbacks: Vec<_> = table.routes().filter(|r| r.is_fallback()).collect();
        assert_eq!(fallbacks.len(), 1);
        assert!(table.routes().last().unwrap().is_fallback());
    }
}
