use crate::{
    text::{CaseStyle, words},
    tree::Span,
};

use super::{RuleContext, RuleResult, Violation, ViolationKind};

/// Casing styles accepted for the first word of a description.
pub const ACCEPTED_CASES: &[CaseStyle] = &[
    CaseStyle::Camel,
    CaseStyle::Capital,
    CaseStyle::Constant,
    CaseStyle::Pascal,
    CaseStyle::Upper,
];

/// Characters that exempt a first word from the casing rule when it starts with them.
const QUOTE_OPENERS: [char; 5] = ['"', '\'', '“', '‘', '('];

/// Checks the casing of the first word after the `" - "` marker in `dash`.
///
/// Words containing a digit, starting with a quote or parenthesis, or found
/// in the identifier allow-list are accepted whatever their casing.
pub fn check_first_word(cx: &RuleContext<'_>, dash: &str, span: Span) -> RuleResult {
    let rest = dash.char_indices().nth(3).map_or("", |(i, _)| &dash[i..]);
    let Some(word) = words(rest).next() else {
        return Err(Violation::new(ViolationKind::EmptyStart, span));
    };

    if word.starts_with(QUOTE_OPENERS)
        || word.chars().any(|c| c.is_ascii_digit())
        || cx.identifiers.contains(word)
    {
        return Ok(());
    }

    // Unicode letters count as word characters, so accented capitals survive.
    let bare: String = word
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if ACCEPTED_CASES.contains(&cx.casing.classify(&bare)) {
        Ok(())
    } else {
        Err(Violation::new(ViolationKind::InvalidCasing, span))
    }
}
