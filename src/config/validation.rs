//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Route table shape: exactly one fallback, and it comes last
//! - Path sanity: leading slash, no duplicates, no unreachable routes
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SpaConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouteConfig, SpaConfig};
use crate::routing::matcher::{trim_trailing_slash, Matcher, PathPrefixMatcher};

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route table is empty")]
    NoRoutes,

    #[error("route table has no fallback entry (a route without `path`)")]
    MissingFallback,

    #[error("fallback route `{0}` must be the last entry")]
    FallbackNotLast(String),

    #[error("more than one fallback route: {0:?}")]
    MultipleFallbacks(Vec<String>),

    #[error("fallback route `{0}` cannot be exact")]
    ExactFallback(String),

    #[error("route `{route}` has invalid path `{path}` (must start with `/`)")]
    InvalidPath { route: String, path: String },

    #[error("route `{second}` repeats path `{path}` of route `{first}`")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("route `{route}` is unreachable behind prefix route `{by}`")]
    ShadowedRoute { route: String, by: String },

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("{field} `{value}` is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a parsed config.
pub fn validate_config(config: &SpaConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_routes(&config.routes);

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the route table alone.
pub fn validate_routes(routes: &[RouteConfig]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
        return errors;
    }

    let fallbacks: Vec<&RouteConfig> = routes.iter().filter(|r| r.is_fallback()).collect();
    match fallbacks.as_slice() {
        [] => errors.push(ValidationError::MissingFallback),
        [only] => {
            if routes.last().map(|r| r.name.as_str()) != Some(only.name.as_str()) {
                errors.push(ValidationError::FallbackNotLast(only.name.clone()));
            }
        }
        many => errors.push(ValidationError::MultipleFallbacks(
            many.iter().map(|r| r.name.clone()).collect(),
        )),
    }

    let mut names: HashMap<&str, usize> = HashMap::new();
    for route in routes {
        *names.entry(route.name.as_str()).or_default() += 1;
    }
    // Report in declaration order.
    for route in routes {
        if names.remove(route.name.as_str()).is_some_and(|n| n > 1) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }
    }

    for route in fallbacks.iter().filter(|r| r.exact) {
        errors.push(ValidationError::ExactFallback(route.name.clone()));
    }

    let mut seen: Vec<(&str, bool, &str)> = Vec::new();
    for (idx, route) in routes.iter().enumerate() {
        let Some(path) = &route.path else { continue };

        if !path.starts_with('/') {
            errors.push(ValidationError::InvalidPath {
                route: route.name.clone(),
                path: path.clone(),
            });
            continue;
        }

        let trimmed = trim_trailing_slash(path);
        let duplicate = seen.iter().find(|(other, sensitive, _)| {
            if *sensitive || route.sensitive {
                *other == trimmed
            } else {
                other.eq_ignore_ascii_case(trimmed)
            }
        });
        if let Some((_, _, first)) = duplicate {
            errors.push(ValidationError::DuplicatePath {
                path: path.clone(),
                first: first.to_string(),
                second: route.name.clone(),
            });
            continue;
        }
        seen.push((trimmed, route.sensitive, route.name.as_str()));

        if let Some(by) = shadowing_route(&routes[..idx], route) {
            errors.push(ValidationError::ShadowedRoute {
                route: route.name.clone(),
                by: by.to_string(),
            });
        }
    }

    errors
}

/// An earlier insensitive prefix route that captures every path `route` could match.
fn shadowing_route<'a>(earlier: &'a [RouteConfig], route: &RouteConfig) -> Option<&'a str> {
    let path = route.path.as_deref()?;
    earlier
        .iter()
        .filter(|r| !r.exact && !r.sensitive)
        .find(|r| {
            r.path
                .as_deref()
                .is_some_and(|prefix| PathPrefixMatcher::new(prefix).matches(path))
        })
        .map(|r| r.name.as_str())
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
