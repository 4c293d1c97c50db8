//! MyCows single-page application host.
//!
//! Maps browser paths to the client's page components:
//!
//! | path          | page                 |
//! |---------------|----------------------|
//! | `/` (exact)   | HomePage             |
//! | `/animals/…`  | AnimalManagementPage |
//! | `/scoring/…`  | ScoringPage          |
//! | `/dashboard/…`| DashboardPage        |
//! | anything else | NotFoundPage         |
//!
//! The table is served over HTTP (`http`) and driven in-process by a
//! history-owning [`routing::BrowserRouter`].

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::schema::SpaConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pages::{Page, View};
pub use routing::{BrowserRouter, RouteTable};
