//! The admin console, headless.
//!
//! Wires the stores, the API client and the route table together. A "page
//! render" is the outcome of running a route's gates; redirects land in the
//! console's navigator.

pub mod app;
pub mod config;
pub mod error;
pub mod navigation;
pub mod resources;
pub mod routes;

pub use app::{Console, PageOutcome};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use navigation::HistoryNavigator;
pub use resources::ResourceKind;
pub use routes::{Protection, Route, RouteTable};
