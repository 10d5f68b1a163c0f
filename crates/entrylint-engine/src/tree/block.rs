use super::{inline::InlineNode, span::Span};

/// A parsed markdown document: the block tree of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Block-level content. Only the shapes the linter inspects are modelled;
/// everything else collapses into [`Block::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        depth: u8,
        children: Vec<InlineNode>,
        span: Span,
    },
    Paragraph {
        children: Vec<InlineNode>,
        span: Span,
    },
    List(List),
    /// Code blocks, quotes, tables, rules and similar. Quotes keep their
    /// nested blocks so lists inside them are still reachable.
    Other { children: Vec<Block>, span: Span },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub items: Vec<ListItem>,
    pub span: Span,
}

/// One entry of a list. Holds the entry's blocks, normally a leading
/// paragraph optionally followed by nested lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub children: Vec<Block>,
    pub span: Span,
}

impl Block {
    pub fn span(&self) -> Span {
        match self {
            Block::Heading { span, .. }
            | Block::Paragraph { span, .. }
            | Block::Other { span, .. } => *span,
            Block::List(list) => list.span,
        }
    }
}
