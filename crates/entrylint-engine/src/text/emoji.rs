use std::{ops::Range, sync::LazyLock};

use regex::Regex;

/// One emoji (including joined and modified sequences).
const EMOJI_ATOM: &str = r"(?:\p{Extended_Pictographic}|\p{Emoji_Presentation})(?:\x{FE0F}|\p{Emoji_Modifier})?(?:[\x{E0020}-\x{E007E}]+\x{E007F})?";

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"\p{{Regional_Indicator}}\p{{Regional_Indicator}}|[#*0-9]\x{{FE0F}}?\x{{20E3}}|{EMOJI_ATOM}(?:\x{{200D}}{EMOJI_ATOM})*"
    );
    Regex::new(&pattern).expect("emoji pattern is valid")
});

/// Finds emoji in text.
pub trait EmojiMatcher {
    /// Byte ranges of all non-overlapping emoji, in order.
    fn find_matches(&self, text: &str) -> Vec<Range<usize>>;
}

/// [`EmojiMatcher`] backed by the Unicode emoji properties: pictographs,
/// presentation selectors, skin-tone modifiers, ZWJ sequences, keycaps,
/// regional-indicator flags and tag sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiMatcher for UnicodeEmoji {
    fn find_matches(&self, text: &str) -> Vec<Range<usize>> {
        EMOJI.find_iter(text).map(|m| m.range()).collect()
    }
}

/// True if the last emoji in `text` runs to the very end of it.
pub fn ends_with_emoji(matcher: &dyn EmojiMatcher, text: &str) -> bool {
    matcher
        .find_matches(text)
        .last()
        .is_some_and(|m| m.end == text.len())
}

/// Removes every emoji from `text`.
pub fn strip_emoji(matcher: &dyn EmojiMatcher, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in matcher.find_matches(text) {
        out.push_str(&text[last..m.start]);
        last = m.end;
    }
    out.push_str(&text[last..]);
    out
}
