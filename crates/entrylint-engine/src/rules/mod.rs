//! # Entry rules
//!
//! The validation pipeline for a single list entry:
//!
//! 1. **`entry`**: split the entry into a link candidate and a description
//! 2. **`link`**: the candidate must be a well-formed link
//! 3. **`description`**: dash separator, badges, ending punctuation and
//!    node kinds of the description
//! 4. **`first_word`**: casing of the description's first word
//!
//! Every step returns a [`RuleResult`]. The first `Err` for an entry is the
//! one diagnostic reported for it; the remaining steps are skipped.

pub mod description;
pub mod entry;
pub mod first_word;
pub mod link;
pub mod punctuation;

use serde::Serialize;
use thiserror::Error;

use crate::{
    text::{CaseClassifier, EmojiMatcher, IdentifierAllowList, UrlCheck},
    tree::{ListItem, NodeKind, Span},
};

pub use entry::{Entry, decompose};

/// Node kinds allowed as direct children of an entry's link.
pub const LINK_CHILD_KINDS: &[NodeKind] =
    &[NodeKind::Emphasis, NodeKind::InlineCode, NodeKind::Text];

/// Node kinds allowed anywhere in a description made of mixed markup.
pub const DESCRIPTION_KINDS: &[NodeKind] = &[
    NodeKind::Emphasis,
    NodeKind::FootnoteReference,
    NodeKind::Html,
    NodeKind::Image,
    NodeKind::InlineCode,
    NodeKind::Link,
    NodeKind::LinkReference,
    NodeKind::Strong,
    NodeKind::Text,
];

/// Node kinds a description may end with (before any badges).
pub const DESCRIPTION_TERMINAL_KINDS: &[NodeKind] = &[
    NodeKind::Emphasis,
    NodeKind::Html,
    NodeKind::Image,
    NodeKind::Link,
    NodeKind::Strong,
    NodeKind::Text,
];

/// Why an entry was rejected. The display text is the diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    #[error("Invalid list item")]
    InvalidEntry,
    #[error("Invalid list item link")]
    InvalidLink,
    #[error("Invalid list item link URL")]
    InvalidLinkUrl,
    #[error("Invalid list item link text")]
    InvalidLinkText,
    #[error("List item link and description must be separated by a dash with single spaces around it")]
    SeparatorWhitespace,
    #[error("List item link and description separated by invalid en-dash or em-dash")]
    SeparatorDashVariant,
    #[error("List item link and description must be separated with a dash")]
    MissingSeparator,
    #[error("List item description must not consist only of badges")]
    OnlyBadges,
    #[error("List item description must end with proper punctuation")]
    MissingPunctuation,
    #[error("List item description must start with a non-empty string")]
    EmptyStart,
    #[error("List item description must start with valid casing")]
    InvalidCasing,
    #[error("List item description contains invalid markdown")]
    InvalidMarkup,
}

/// A rejected entry: what is wrong and which node it is wrong at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub span: Span,
}

impl Violation {
    pub fn new(kind: ViolationKind, span: Span) -> Self {
        Self { kind, span }
    }
}

pub type RuleResult = Result<(), Violation>;

/// The collaborators the rules consult.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub urls: &'a dyn UrlCheck,
    pub emoji: &'a dyn EmojiMatcher,
    pub casing: &'a dyn CaseClassifier,
    pub identifiers: &'a dyn IdentifierAllowList,
}

/// Runs the whole pipeline over one list entry.
pub fn validate_entry(cx: &RuleContext<'_>, item: &ListItem) -> RuleResult {
    match decompose(item)? {
        Entry::TextLed => Ok(()),
        Entry::Parts { link, description } => {
            link::validate_link(cx, link)?;
            description::validate_description(cx, description)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RuleContext;
    use crate::text::{AbsoluteUrl, Identifiers, UnicodeEmoji, WordCaseClassifier};
    use crate::tree::{InlineNode, Span};
    use std::sync::LazyLock;

    static IDENTIFIERS: LazyLock<Identifiers> = LazyLock::new(Identifiers::default);

    pub fn context() -> RuleContext<'static> {
        RuleContext {
            urls: &AbsoluteUrl,
            emoji: &UnicodeEmoji,
            casing: &WordCaseClassifier,
            identifiers: &*IDENTIFIERS,
        }
    }

    pub fn text(value: &str) -> InlineNode {
        InlineNode::Text {
            value: value.to_string(),
            span: Span::default(),
        }
    }

    pub fn code(value: &str) -> InlineNode {
        InlineNode::InlineCode {
            value: value.to_string(),
            span: Span::default(),
        }
    }

    pub fn link(url: &str, children: Vec<InlineNode>) -> InlineNode {
        InlineNode::Link {
            url: url.to_string(),
            children,
            span: Span::default(),
        }
    }
}
