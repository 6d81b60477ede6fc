/// Minimal DOM description handed to the platform, which builds it with
/// `createElement` and text nodes. Server strings only ever become text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element {
        tag: &'static str,
        class: Option<&'static str>,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn element(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            class: None,
            children,
        }
    }

    pub fn classed(tag: &'static str, class: &'static str, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            class: Some(class),
            children,
        }
    }

    /// Concatenated text, as `textContent` would report it.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(value) => value.clone(),
            Node::Element { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }
}
