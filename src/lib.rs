//! # envshell
//!
//! A minimal client-side application shell: a routing core plus the view
//! composition for a page that displays runtime-injected configuration.
//!
//! The core is deliberately free of browser and UI dependencies. Route
//! matching is a pure function of an ordered route table and the current
//! location, and views produce an abstract [`node::Node`] tree that an
//! external rendering engine (the `envshell_web` crate) turns into DOM.
//!
//! ## Quick Start
//!
//! ```
//! use envshell::prelude::*;
//!
//! let env = EnvConfig::from_pairs([("API_URL", "https://example.com")]);
//! let shell = AppShell::routed(env);
//!
//! // The root view interpolates the runtime config value.
//! let page = shell.render("/");
//! assert!(page.text_content().contains("https://example.com"));
//!
//! // Unknown locations fall through to the catch-all entry.
//! let page = shell.render("/no/such/page");
//! assert!(page.text_content().contains("Not Found"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization for config types and JSON decoding of
//!   the runtime env object

#[path = "core/config.rs"]
pub mod config;

#[path = "core/node.rs"]
pub mod node;

#[path = "core/route.rs"]
pub mod route;

#[path = "core/shell.rs"]
pub mod shell;

#[path = "core/view.rs"]
pub mod view;

pub mod prelude {
    pub use crate::config::EnvConfig;
    pub use crate::node::Node;
    pub use crate::route::{PathPattern, Route, RouteTable};
    pub use crate::shell::AppShell;
    pub use crate::view::ViewDescriptor;
}
