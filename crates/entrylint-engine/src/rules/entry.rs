use crate::tree::{Block, InlineNode, ListItem};

use super::{Violation, ViolationKind};

/// A list entry split into the parts the other rules check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    /// The entry starts with plain text (a category label or free-form
    /// preamble) and is accepted as-is.
    TextLed,
    Parts {
        /// The node expected to be the entry's link.
        link: &'a InlineNode,
        /// Everything after the link. May be empty.
        description: &'a [InlineNode],
    },
}

/// Splits an entry into its link candidate and description.
///
/// Leading non-link nodes such as images or badge text are skipped while
/// more than one description node remains, so filler can never consume the
/// whole description.
pub fn decompose(item: &ListItem) -> Result<Entry<'_>, Violation> {
    let invalid = |span| Violation::new(ViolationKind::InvalidEntry, span);

    let inlines = match item.children.first() {
        Some(Block::Paragraph { children, span }) => {
            if children.is_empty() {
                return Err(invalid(*span));
            }
            children
        }
        Some(other) => return Err(invalid(other.span())),
        None => return Err(invalid(item.span)),
    };

    let Some((mut link, mut description)) = inlines.split_first() else {
        return Err(invalid(item.span));
    };
    if matches!(link, InlineNode::Text { .. }) {
        return Ok(Entry::TextLed);
    }

    while !link.is_link_like() && description.len() > 1 {
        link = &description[0];
        description = &description[1..];
    }

    Ok(Entry::Parts { link, description })
}
