//! Ending-punctuation predicates for descriptions.
//!
//! `full` is the flattened description up to its last non-badge node and
//! `suffix` is the literal text of that last node. [`ending_is_valid`]
//! applies the predicates in order; the first one that decides wins.

use crate::text::{EmojiMatcher, ends_with_emoji, words};

/// Sentence-ending marks.
const TERMINAL_MARKS: [char; 4] = ['.', '!', '?', '…'];

const CLOSING_DOUBLE_QUOTES: [char; 2] = ['"', '”'];

const CLOSING_QUOTES: [char; 4] = ['"', '”', '\'', '’'];

fn is_terminal(c: char) -> bool {
    TERMINAL_MARKS.contains(&c)
}

/// The whole text is one backtick code span, optionally followed by
/// terminal marks. Several distinct spans (`` `a` or `b` ``) do not count.
pub fn is_single_code_span(text: &str) -> bool {
    let body = text.trim_end_matches(is_terminal);
    let opening = body.len() - body.trim_start_matches('`').len();
    let closing = body.len() - body.trim_end_matches('`').len();
    if opening == 0 || opening != closing || body.len() <= opening * 2 {
        return false;
    }

    let inner = &body[opening..body.len() - closing];
    !inner
        .split(|c| c != '`')
        .any(|run| run.len() == opening)
}

/// Verdict for text ending in a double quote that directly follows a
/// terminal mark (`…thing."`): valid unless two marks precede the quote.
/// `None` when the text does not end that way.
pub fn quote_after_terminal(text: &str) -> Option<bool> {
    let mut rev = text.chars().rev();
    if !CLOSING_DOUBLE_QUOTES.contains(&rev.next()?) {
        return None;
    }
    if !is_terminal(rev.next()?) {
        return None;
    }
    Some(!rev.next().is_some_and(is_terminal))
}

/// Text ends in a terminal mark, optionally followed by one closing quote.
pub fn ends_with_terminal(text: &str) -> bool {
    let trimmed = text.strip_suffix(CLOSING_QUOTES).unwrap_or(text);
    trimmed.ends_with(TERMINAL_MARKS)
}

pub fn has_terminal(text: &str) -> bool {
    text.contains(TERMINAL_MARKS)
}

/// At most two words, the last one ending in an emoji (`Done ✅`).
pub fn is_short_emoji_ending(emoji: &dyn EmojiMatcher, text: &str) -> bool {
    let words: Vec<&str> = words(text).collect();
    words.len() <= 2 && words.last().is_some_and(|last| ends_with_emoji(emoji, last))
}

/// The last node closes a parenthetical or ends with an emoji.
pub fn is_open_ended_suffix(emoji: &dyn EmojiMatcher, suffix: &str) -> bool {
    suffix.ends_with(')') || ends_with_emoji(emoji, suffix)
}

/// Decides whether a description ends acceptably.
pub fn ending_is_valid(emoji: &dyn EmojiMatcher, full: &str, suffix: &str) -> bool {
    if is_single_code_span(full) {
        return false;
    }
    if let Some(valid) = quote_after_terminal(full) {
        return valid;
    }
    if ends_with_terminal(full) {
        return true;
    }
    if !has_terminal(full) {
        return is_short_emoji_ending(emoji, full);
    }
    is_open_ended_suffix(emoji, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::UnicodeEmoji;
    use rstest::rstest;

    #[rstest]
    #[case("`foo`", true)]
    #[case("`foo`.", true)]
    #[case("``a`b``!", true)]
    #[case("`foo` and `bar`", false)]
    #[case("`foo` bar.", false)]
    #[case("``", false)]
    #[case("plain text.", false)]
    fn single_code_span(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_single_code_span(text), expected);
    }

    #[rstest]
    #[case(" - \"Quoted thing.\"", Some(true))]
    #[case(" - Called “Thing!”", Some(true))]
    #[case(" - \"Really?!\"", Some(false))]
    #[case(" - \"Quoted\".", None)]
    #[case(" - Quoted\"", None)]
    #[case("\"", None)]
    fn quote_after_terminal_mark(#[case] text: &str, #[case] expected: Option<bool>) {
        assert_eq!(quote_after_terminal(text), expected);
    }

    #[rstest]
    #[case(" - A tool.", true)]
    #[case(" - A tool!", true)]
    #[case(" - Wait for it…", true)]
    #[case(" - It's 'quoted.'", true)]
    #[case(" - A tool", false)]
    #[case(" - A tool.)", false)]
    fn terminal_ending(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(ends_with_terminal(text), expected);
    }

    #[rstest]
    #[case(" - Done ✅", true)]
    #[case(" - ✅", true)]
    #[case(" - All done ✅", false)]
    #[case(" - Done", false)]
    #[case(" - ", false)]
    fn short_emoji_ending(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_short_emoji_ending(&UnicodeEmoji, text), expected);
    }

    #[rstest]
    #[case(" - A tool.", " - A tool.", true)]
    #[case(" - Done ✅", " - Done ✅", true)]
    #[case(" - A tool", " - A tool", false)]
    #[case(" - `code`", " - `code`", false)]
    #[case("`code`.", "`code`.", false)]
    #[case(" - A tool. Really (beta)", " - A tool. Really (beta)", true)]
    #[case(" - A tool. Really 🚀", " - A tool. Really 🚀", true)]
    #[case(" - A tool. Really", " - A tool. Really", false)]
    #[case(" - Says \"hi.\"", " - Says \"hi.\"", true)]
    #[case(" - Says \"hi!.\"", " - Says \"hi!.\"", false)]
    fn description_endings(#[case] full: &str, #[case] suffix: &str, #[case] expected: bool) {
        assert_eq!(ending_is_valid(&UnicodeEmoji, full, suffix), expected);
    }
}
