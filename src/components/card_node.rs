//! Card Node View
//!
//! Turns renderer node descriptions into Leptos views.

use leptos::prelude::*;
use today_cards_core::{Node, NodeTag};

/// Recursively build the view for `node`. Buttons carry no handlers.
pub fn node_view(node: Node) -> AnyView {
    let Node { tag, class, text, children } = node;
    let children = children.into_iter().map(node_view).collect_view();

    match tag {
        NodeTag::Container => view! { <div class=class>{text}{children}</div> }.into_any(),
        NodeTag::Heading => view! { <h4 class=class>{text}{children}</h4> }.into_any(),
        NodeTag::Paragraph => view! { <p class=class>{text}{children}</p> }.into_any(),
        NodeTag::Button => view! { <button type="button" class=class>{text}{children}</button> }.into_any(),
    }
}
