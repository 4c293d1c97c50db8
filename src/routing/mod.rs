//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (push / replace / back / forward) or HTTP GET
//!     → history.rs (parse URL, update entry stack)
//!     → router.rs (route lookup over the ordered table)
//!     → matcher.rs (exact / prefix / catch-all conditions)
//!     → Return: RouteMatch → pages::View
//!
//! Route Compilation (at startup and on config reload):
//!     RouteConfig[]
//!     → Compile matchers, keep declaration order
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at runtime
//! - No regex in hot path (exact and prefix comparisons only)
//! - Deterministic: same path always resolves to the same page
//! - First match wins (declaration order), fallback last

pub mod browser;
pub mod history;
pub mod matcher;
pub mod router;

pub use browser::BrowserRouter;
pub use history::{History, Location};
pub use router::{Route, RouteMatch, RouteTable};
