//! View descriptors and their render dispatch.
//!
//! The source shells bound closures to routes; here each route carries a
//! data-only [`ViewDescriptor`] variant instead, and an explicit `render`
//! dispatch turns the matched descriptor into a [`Node`] tree. A descriptor
//! can itself hold a nested route table, which is evaluated against the same
//! location with its patterns written as full sub-paths of the parent prefix.

use crate::config::EnvConfig;
use crate::node::Node;
use crate::route::RouteTable;

/// Everything a shell view can be.
#[derive(Debug, Clone)]
pub enum ViewDescriptor {
    /// The stock landing view: logo plus the interpolated `API_URL` value.
    ConfigDisplay,
    /// A static page with a heading.
    Page { title: &'static str },
    /// A second route table rendered inside the matched parent route.
    Nested(RouteTable<ViewDescriptor>),
}

impl ViewDescriptor {
    /// Render this descriptor for `location` under the given config.
    ///
    /// `location` only participates in `Nested` dispatch; leaf views are pure
    /// in the config alone. A nested table with no matching entry renders
    /// [`Node::Empty`], never an error.
    pub fn render(&self, env: &EnvConfig, location: &str) -> Node {
        match self {
            ViewDescriptor::ConfigDisplay => config_display(env),
            ViewDescriptor::Page { title } => page(title),
            ViewDescriptor::Nested(table) => table
                .resolve(location)
                .map(|view| view.render(env, location))
                .unwrap_or(Node::Empty),
        }
    }
}

/// Container → header → image + text, with the stock style classes.
fn config_display(env: &EnvConfig) -> Node {
    Node::Container {
        class: "App",
        children: vec![Node::Header {
            class: "App-header",
            children: vec![
                Node::Image {
                    src: "logo.svg",
                    class: "App-logo",
                    alt: "logo",
                },
                Node::text(format!("API_URL: {}", env.api_url().unwrap_or_default())),
            ],
        }],
    }
}

fn page(title: &str) -> Node {
    Node::Container {
        class: "App",
        children: vec![Node::Header {
            class: "App-header",
            children: vec![Node::text(title)],
        }],
    }
}
