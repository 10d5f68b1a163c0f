use super::span::Span;

/// A parsed inline node.
///
/// Composite variants own their children; leaf variants own their literal
/// value. Every node records the source span it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text, with adjacent fragments and soft breaks already merged.
    Text { value: String, span: Span },
    Emphasis { children: Vec<InlineNode>, span: Span },
    Strong { children: Vec<InlineNode>, span: Span },
    /// Strikethrough (`~~text~~`).
    Delete { children: Vec<InlineNode>, span: Span },
    /// A code span. `value` excludes the backtick delimiters.
    InlineCode { value: String, span: Span },
    /// An inline link, autolink or email link with its destination.
    Link {
        url: String,
        children: Vec<InlineNode>,
        span: Span,
    },
    /// A reference-style link (`[text][id]`, `[text][]` or `[text]`).
    LinkReference { children: Vec<InlineNode>, span: Span },
    /// An image. The alt text is kept flattened.
    Image { url: String, alt: String, span: Span },
    /// Raw inline HTML.
    Html { value: String, span: Span },
    FootnoteReference { label: String, span: Span },
    /// A hard line break.
    Break { span: Span },
}

/// The kind tag of an [`InlineNode`], used by the static allow-sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Link,
    LinkReference,
    Image,
    Html,
    FootnoteReference,
    Break,
}

impl InlineNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            InlineNode::Text { .. } => NodeKind::Text,
            InlineNode::Emphasis { .. } => NodeKind::Emphasis,
            InlineNode::Strong { .. } => NodeKind::Strong,
            InlineNode::Delete { .. } => NodeKind::Delete,
            InlineNode::InlineCode { .. } => NodeKind::InlineCode,
            InlineNode::Link { .. } => NodeKind::Link,
            InlineNode::LinkReference { .. } => NodeKind::LinkReference,
            InlineNode::Image { .. } => NodeKind::Image,
            InlineNode::Html { .. } => NodeKind::Html,
            InlineNode::FootnoteReference { .. } => NodeKind::FootnoteReference,
            InlineNode::Break { .. } => NodeKind::Break,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text { span, .. }
            | InlineNode::Emphasis { span, .. }
            | InlineNode::Strong { span, .. }
            | InlineNode::Delete { span, .. }
            | InlineNode::InlineCode { span, .. }
            | InlineNode::Link { span, .. }
            | InlineNode::LinkReference { span, .. }
            | InlineNode::Image { span, .. }
            | InlineNode::Html { span, .. }
            | InlineNode::FootnoteReference { span, .. }
            | InlineNode::Break { span } => *span,
        }
    }

    /// The literal value of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InlineNode::Text { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_link_like(&self) -> bool {
        matches!(
            self,
            InlineNode::Link { .. } | InlineNode::LinkReference { .. }
        )
    }

    /// Appends the visible text of this node to `out`.
    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { value, .. }
            | InlineNode::InlineCode { value, .. }
            | InlineNode::Html { value, .. } => out.push_str(value),
            InlineNode::Image { alt, .. } => out.push_str(alt),
            InlineNode::Break { .. } => out.push('\n'),
            InlineNode::FootnoteReference { .. } => {}
            InlineNode::Emphasis { children, .. }
            | InlineNode::Strong { children, .. }
            | InlineNode::Delete { children, .. }
            | InlineNode::Link { children, .. }
            | InlineNode::LinkReference { children, .. } => {
                for child in children {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// Flattens a sequence of nodes to the text a reader would see.
///
/// Code spans contribute their content without backticks and images their
/// alt text; footnote references contribute nothing.
pub fn to_plain_text(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_plain_text(&mut out);
    }
    out
}
