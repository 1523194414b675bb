//! Mapping the core's renderable-node tree onto Leptos views.

use envshell::node::Node;
use leptos::prelude::*;

pub(super) fn node_view(node: Node) -> AnyView {
    match node {
        Node::Container { class, children } => view! {
            <div class=class>{children.into_iter().map(node_view).collect_view()}</div>
        }
        .into_any(),
        Node::Header { class, children } => view! {
            <header class=class>{children.into_iter().map(node_view).collect_view()}</header>
        }
        .into_any(),
        Node::Image { src, class, alt } => view! { <img src=src class=class alt=alt /> }.into_any(),
        Node::Text(text) => text.into_any(),
        Node::Empty => ().into_any(),
    }
}
