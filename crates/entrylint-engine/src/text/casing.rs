use std::fmt;

/// Casing style of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// `iPhone`, `jQuery`
    Camel,
    /// `GitHub`, `JavaScript`
    Pascal,
    /// `HTTP`, `A`
    Upper,
    /// `MAX_SIZE`
    Constant,
    /// `Hello`
    Capital,
    /// `hello`
    Lower,
    /// `snake_case`
    Snake,
    /// Anything else, including words without letters.
    Other,
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Upper => "upper",
            CaseStyle::Constant => "constant",
            CaseStyle::Capital => "capital",
            CaseStyle::Lower => "lower",
            CaseStyle::Snake => "snake",
            CaseStyle::Other => "other",
        };
        f.write_str(name)
    }
}

/// Classifies the casing of a word.
pub trait CaseClassifier {
    fn classify(&self, word: &str) -> CaseStyle;
}

/// [`CaseClassifier`] that looks only at the letters of a word and where
/// the uppercase ones sit. Underscores separate words; digits are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCaseClassifier;

impl CaseClassifier for WordCaseClassifier {
    fn classify(&self, word: &str) -> CaseStyle {
        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
        let Some(&first) = letters.first() else {
            return CaseStyle::Other;
        };
        let has_underscore = word.contains('_');
        let any_upper = letters.iter().any(|c| c.is_uppercase());
        let any_lower = letters.iter().any(|c| c.is_lowercase());
        let rest_upper = letters[1..].iter().any(|c| c.is_uppercase());

        match (any_upper, any_lower) {
            (false, true) if has_underscore => CaseStyle::Snake,
            (false, true) => CaseStyle::Lower,
            (true, false) if has_underscore => CaseStyle::Constant,
            (true, false) => CaseStyle::Upper,
            (true, true) if has_underscore => CaseStyle::Other,
            (true, true) if first.is_uppercase() && !rest_upper => CaseStyle::Capital,
            (true, true) if first.is_uppercase() => CaseStyle::Pascal,
            (true, true) => CaseStyle::Camel,
            // Letters without case (CJK and similar scripts).
            (false, false) => CaseStyle::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello", CaseStyle::Capital)]
    #[case("GitHub", CaseStyle::Pascal)]
    #[case("iPhone", CaseStyle::Camel)]
    #[case("HTTP", CaseStyle::Upper)]
    #[case("A", CaseStyle::Upper)]
    #[case("MAX_SIZE", CaseStyle::Constant)]
    #[case("hello", CaseStyle::Lower)]
    #[case("snake_case", CaseStyle::Snake)]
    #[case("Mixed_case", CaseStyle::Other)]
    #[case("1234", CaseStyle::Other)]
    #[case("", CaseStyle::Other)]
    #[case("漢字", CaseStyle::Other)]
    #[case("Élan", CaseStyle::Capital)]
    fn classifies_words(#[case] word: &str, #[case] expected: CaseStyle) {
        assert_eq!(WordCaseClassifier.classify(word), expected);
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(CaseStyle::Pascal.to_string(), "pascal");
    }
}
