//! The composed application shell.
//!
//! An [`AppShell`] owns the decoded env snapshot and the route inventory, and
//! renders the node tree for a location in one pure step. Two constructors
//! cover the two historical shells: [`AppShell::routed`] is the canonical app,
//! [`AppShell::minimal`] the non-routed page it grew out of (a table with a
//! single exact root entry).

use crate::config::EnvConfig;
use crate::node::Node;
use crate::route::{PathPattern, RouteTable};
use crate::view::ViewDescriptor;

pub struct AppShell {
    env: EnvConfig,
    routes: RouteTable<ViewDescriptor>,
}

impl AppShell {
    /// The routed shell: root, nestable branch, and a catch-all.
    pub fn routed(env: EnvConfig) -> Self {
        Self {
            env,
            routes: routed_table(),
        }
    }

    /// The degenerate variant: one exact root entry, nothing else.
    pub fn minimal(env: EnvConfig) -> Self {
        Self {
            env,
            routes: RouteTable::new().route(PathPattern::exact("/"), ViewDescriptor::ConfigDisplay),
        }
    }

    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    pub fn routes(&self) -> &RouteTable<ViewDescriptor> {
        &self.routes
    }

    /// Resolve and render `location`. Pure; each navigation event calls this
    /// afresh with whatever location is current at that moment.
    pub fn render(&self, location: &str) -> Node {
        self.routes
            .resolve(location)
            .map(|view| view.render(&self.env, location))
            .unwrap_or(Node::Empty)
    }
}

fn routed_table() -> RouteTable<ViewDescriptor> {
    RouteTable::new()
        .route(PathPattern::exact("/"), ViewDescriptor::ConfigDisplay)
        .route(
            PathPattern::prefix("/nestable"),
            ViewDescriptor::Nested(
                RouteTable::new()
                    .route(
                        PathPattern::exact("/nestable"),
                        ViewDescriptor::Page { title: "Nestable" },
                    )
                    .route(
                        PathPattern::prefix("/nestable/nested"),
                        ViewDescriptor::Page { title: "Nested" },
                    ),
            ),
        )
        .fallback(ViewDescriptor::Page { title: "Not Found" })
}
