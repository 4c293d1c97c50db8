//! Response construction.
//!
//! # Responsibilities
//! - Turn a rendered view into an HTML response
//! - Add security response headers (optional)
//!
//! # Design Decisions
//! - The not-found page is served with 404, body included
//! - Security headers never override a header already set

use axum::{
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::pages::View;

/// HTML response for a rendered view.
pub fn document_response(view: &View) -> Response {
    (view.status(), Html(view.render_document())).into_response()
}

/// Wrap the router with hardening headers.
pub fn with_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
}
