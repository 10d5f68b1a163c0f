//! Text-level helpers shared by the rules: emoji detection, word casing,
//! the identifier allow-list and URL syntax.

pub mod casing;
pub mod emoji;
pub mod identifiers;
pub mod url_check;

pub use casing::{CaseClassifier, CaseStyle, WordCaseClassifier};
pub use emoji::{EmojiMatcher, UnicodeEmoji, ends_with_emoji, strip_emoji};
pub use identifiers::{IdentifierAllowList, Identifiers};
pub use url_check::{AbsoluteUrl, UrlCheck};

/// Characters that separate words in a description.
const WORD_SEPARATORS: [char; 5] = ['-', ';', '.', '/', '\''];

/// Splits `text` into words on dashes, whitespace, semicolons, periods,
/// slashes and apostrophes. Empty pieces are dropped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || WORD_SEPARATORS.contains(&c))
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_split_on_separators() {
        let split: Vec<_> = words(" - Don't use/abuse; it.  Ok").collect();
        assert_eq!(split, vec!["Don", "t", "use", "abuse", "it", "Ok"]);
    }

    #[test]
    fn words_of_blank_text_is_empty() {
        assert_eq!(words(" - ").count(), 0);
    }
}
