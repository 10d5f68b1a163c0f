//! # Document tree
//!
//! The read-only tree the rules walk over: block containers (headings,
//! paragraphs, lists) holding inline nodes (text, links, code spans…).
//!
//! - **`span`**: byte ranges into the source
//! - **`inline`**: `InlineNode`, its `NodeKind` tag and plain-text flattening
//! - **`block`**: `Document`, `Block`, `List`, `ListItem`
//! - **`builder`**: `parse_markdown()`, driving pulldown-cmark

pub mod block;
pub mod builder;
pub mod inline;
pub mod span;

pub use block::{Block, Document, List, ListItem};
pub use builder::parse_markdown;
pub use inline::{InlineNode, NodeKind, to_plain_text};
pub use span::Span;
