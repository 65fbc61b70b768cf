//! Card Renderer
//!
//! Pure mapping from cards to node-tree descriptions. Turning nodes into
//! real DOM is left to the view layer.

use crate::models::Card;

pub const CARD_CLASS: &str = "today-card";
pub const TITLE_CLASS: &str = "today-card__title";
pub const DESCRIPTION_CLASS: &str = "today-card__description";
pub const BUTTONS_CLASS: &str = "today-card__buttons";
pub const EDIT_BUTTON_CLASS: &str = "today-card__button_edit";
pub const DELETE_BUTTON_CLASS: &str = "today-card__button_delete";
pub const ERROR_CLASS: &str = "error-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag {
    Container,
    Heading,
    Paragraph,
    Button,
}

impl NodeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeTag::Container => "div",
            NodeTag::Heading => "h4",
            NodeTag::Paragraph => "p",
            NodeTag::Button => "button",
        }
    }
}

/// Element description: tag, class, optional text, children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: NodeTag,
    pub class: String,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: NodeTag, class: &str) -> Self {
        Self {
            tag,
            class: class.to_string(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }

    /// Depth-first search for the first node carrying `class`
    pub fn find(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }
}

/// Build the subtree for one card. Edit and delete buttons are rendered
/// without handlers.
pub fn render_card(card: &Card, placeholder: &str) -> Node {
    let description = if card.description.trim().is_empty() {
        placeholder
    } else {
        card.description.as_str()
    };

    Node::new(NodeTag::Container, CARD_CLASS)
        .child(Node::new(NodeTag::Heading, TITLE_CLASS).text(card.title.as_str()))
        .child(Node::new(NodeTag::Paragraph, DESCRIPTION_CLASS).text(description))
        .child(
            Node::new(NodeTag::Container, BUTTONS_CLASS)
                .child(Node::new(NodeTag::Button, EDIT_BUTTON_CLASS).text("Edit card"))
                .child(Node::new(NodeTag::Button, DELETE_BUTTON_CLASS).text("Delete card")),
        )
}

pub fn render_error(message: &str) -> Node {
    Node::new(NodeTag::Paragraph, ERROR_CLASS).text(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "Click to add description";

    #[test]
    fn test_card_structure() {
        let node = render_card(&Card::with_description("Buy milk", "2 litres"), PLACEHOLDER);

        assert_eq!(node.tag, NodeTag::Container);
        assert!(node.has_class(CARD_CLASS));
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.find(TITLE_CLASS).and_then(|n| n.text.as_deref()), Some("Buy milk"));
        assert_eq!(node.find(DESCRIPTION_CLASS).and_then(|n| n.text.as_deref()), Some("2 litres"));

        let buttons = node.find(BUTTONS_CLASS).unwrap();
        let labels: Vec<_> = buttons.children.iter().map(|b| (b.tag, b.text.as_deref())).collect();
        assert_eq!(labels, vec![
            (NodeTag::Button, Some("Edit card")),
            (NodeTag::Button, Some("Delete card")),
        ]);
    }

    #[test]
    fn test_empty_description_uses_placeholder() {
        let card = Card::new("Write report");
        let node = render_card(&card, PLACEHOLDER);

        assert_eq!(node.find(DESCRIPTION_CLASS).and_then(|n| n.text.as_deref()), Some(PLACEHOLDER));
        // input untouched
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_error_node() {
        let node = render_error("Error! Cards for today were not loaded...");
        assert_eq!(node.tag.as_str(), "p");
        assert!(node.has_class(ERROR_CLASS));
        assert!(node.children.is_empty());
    }
}
