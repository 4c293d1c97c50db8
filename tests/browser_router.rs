//! Session-level routing through the in-process router.

use std::sync::Arc;

use mycows_web::config::schema::default_routes;
use mycows_web::config::RouteConfig;
use mycows_web::{BrowserRouter, Page, RouteTable};

fn router_at(path: &str) -> BrowserRouter {
    BrowserRouter::new(Arc::new(RouteTable::default()), path)
}

#[test]
fn test_deep_link_start() {
    let router = router_at("/animals/42");
    assert_eq!(router.render().page, Page::AnimalManagement);
    assert_eq!(router.current().matched, "/animals");
}

#[test]
fn test_session_walk() {
    let mut router = router_at("/");

    let pages: Vec<Page> = ["/animals", "/scoring", "/dashboard", "/unknown"]
        .iter()
        .map(|p| router.navigate(p).page)
        .collect();
    assert_eq!(
        pages,
        vec![
            Page::AnimalManagement,
            Page::Scoring,
            Page::Dashboard,
            Page::NotFound
        ]
    );

    assert_eq!(router.back().unwrap().page, Page::Dashboard);
    assert_eq!(router.navigate("/").page, Page::Home);
    assert!(router.forward().is_none());
}

#[test]
fn test_prefix_boundaries_and_case() {
    let mut router = router_at("/");
    assert_eq!(router.navigate("/animalsx").page, Page::NotFound);
    assert_eq!(router.navigate("/ANIMALS").page, Page::AnimalManagement);
    assert_eq!(router.navigate("/dashboard/").page, Page::Dashboard);
}

#[test]
fn test_rendered_document_reflects_location() {
    let mut router = router_at("/");
    let html = router.navigate("/scoring/17?round=2").render_document();
    assert!(html.contains("data-page=\"ScoringPage\""));
    assert!(html.contains("data-path=\"/scoring/17\""));
}

#[tokio::test]
async fn test_listener_observes_navigation() {
    let mut router = router_at("/");
    let mut rx = router.listen();

    router.navigate("/dashboard");
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().pathname, "/dashboard");

    router.back();
    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().pathname, "/");
}

#[test]
fn test_custom_table_fallback_first_is_total_404() {
    // A fallback placed first swallows everything: first match wins.
    let mut routes = default_routes();
    let fallback = routes.pop().unwrap();
    routes.insert(0, fallback);
    let table = RouteTable::from_config(&routes);

    assert_eq!(table.resolve("/").page, Page::NotFound);
    assert_eq!(table.resolve("/animals").page, Page::NotFound);
}

#[test]
fn test_sensitive_route() {
    let routes = vec![
        RouteConfig {
            sensitive: true,
            ..RouteConfig::prefix("scoring", "/scoring", Page::Scoring)
        },
        RouteConfig::fallback("not_found", Page::NotFound),
    ];
    let mut router = BrowserRouter::new(Arc::new(RouteTable::from_config(&routes)), "/");
    assert_eq!(router.navigate("/Scoring").page, Page::NotFound);
    assert_eq!(router.navigate("/scoring").page, Page::Scoring);
}
