use std::{slice, sync::LazyLock};

use regex::Regex;

use crate::{
    text::{ends_with_emoji, strip_emoji},
    tree::{InlineNode, to_plain_text},
};

use super::{
    DESCRIPTION_KINDS, DESCRIPTION_TERMINAL_KINDS, RuleContext, RuleResult, Violation,
    ViolationKind, first_word::check_first_word, punctuation::ending_is_valid,
};

/// The separator between an entry's link and its description.
pub const DASH_SEPARATOR: &str = " - ";

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s?\([^)]+\)\s*$").expect("valid regex"));

static LOOSE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\([^)]+\)\s*$").expect("valid regex"));

static WHITESPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-").expect("valid regex"));

static EN_EM_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[–—]").expect("valid regex"));

/// Checks an entry's description: everything after its link.
pub fn validate_description(cx: &RuleContext<'_>, description: &[InlineNode]) -> RuleResult {
    let Some(first) = description.first() else {
        return Ok(());
    };
    let text = to_plain_text(description);

    if is_special_case(cx, &text) {
        return Ok(());
    }

    let dash = check_separator(cx, description, &text)?;

    let Some((before_badges, has_badges)) = split_badges(description) else {
        return Err(Violation::new(ViolationKind::OnlyBadges, first.span()));
    };
    let Some(last) = before_badges.last() else {
        return Err(Violation::new(ViolationKind::OnlyBadges, first.span()));
    };

    if !DESCRIPTION_TERMINAL_KINDS.contains(&last.kind()) {
        return Err(Violation::new(ViolationKind::MissingPunctuation, last.span()));
    }

    if let Some(suffix) = last.as_text() {
        let mut full = to_plain_text(before_badges);
        let mut suffix = suffix;
        if has_badges {
            full.truncate(full.trim_end().len());
            suffix = suffix.trim_end();
        }
        if !ending_is_valid(cx.emoji, &full, suffix) {
            return Err(Violation::new(ViolationKind::MissingPunctuation, last.span()));
        }
    }

    if before_badges.len() == 1 {
        // The dash text is the whole description.
        return check_first_word(cx, dash, first.span());
    }

    if let Some(node) = before_badges
        .iter()
        .find(|node| !DESCRIPTION_KINDS.contains(&node.kind()))
    {
        return Err(Violation::new(ViolationKind::InvalidMarkup, node.span()));
    }

    if dash.chars().count() > DASH_SEPARATOR.len() {
        check_first_word(cx, dash, first.span())?;
    }

    Ok(())
}

/// Descriptions exempt from the separator, punctuation and casing rules:
/// emoji only, or a single parenthetical with or without emoji.
///
/// Text that already starts with the dash separator never qualifies.
pub fn is_special_case(cx: &RuleContext<'_>, text: &str) -> bool {
    if text.starts_with(DASH_SEPARATOR) {
        return false;
    }

    let without_emoji = strip_emoji(cx.emoji, text);
    if without_emoji.trim().is_empty() {
        return true;
    }

    if PARENTHETICAL.is_match(text) {
        return true;
    }

    without_emoji.len() != text.len() && LOOSE_PARENTHETICAL.is_match(&without_emoji)
}

/// Requires the description to open with the dash separator and returns the
/// separator node's text.
///
/// A lone dash node ending in an emoji (`-🔥`) also passes when it is the
/// entire description. Failures distinguish stray whitespace around the
/// dash, en/em dashes, and a missing dash.
fn check_separator<'a>(
    cx: &RuleContext<'_>,
    description: &'a [InlineNode],
    text: &str,
) -> Result<&'a str, Violation> {
    let first = &description[0];

    if let Some(dash) = first.as_text() {
        if dash.starts_with(DASH_SEPARATOR) {
            return Ok(dash);
        }
        if dash == text && dash.trim_start().starts_with('-') && ends_with_emoji(cx.emoji, dash) {
            return Ok(dash);
        }
    }

    if description.iter().all(is_badge) {
        return Err(Violation::new(ViolationKind::OnlyBadges, first.span()));
    }

    let prefix = to_plain_text(slice::from_ref(first));
    let kind = if WHITESPACE_DASH.is_match(&prefix) {
        ViolationKind::SeparatorWhitespace
    } else if EN_EM_DASH.is_match(&prefix) {
        ViolationKind::SeparatorDashVariant
    } else {
        ViolationKind::MissingSeparator
    };
    Err(Violation::new(kind, first.span()))
}

/// A trailing annotation: a code span or whitespace-only text.
fn is_badge(node: &InlineNode) -> bool {
    match node {
        InlineNode::InlineCode { .. } => true,
        InlineNode::Text { value, .. } => value.trim().is_empty(),
        _ => false,
    }
}

/// Splits trailing badges off a description.
///
/// Returns the nodes before the badges and whether any badge was removed,
/// or `None` when every node is a badge.
pub fn split_badges(description: &[InlineNode]) -> Option<(&[InlineNode], bool)> {
    let last = description.iter().rposition(|node| !is_badge(node))?;
    Some((&description[..=last], last + 1 < description.len()))
}
