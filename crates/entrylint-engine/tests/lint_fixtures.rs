use entrylint_engine::{Diagnostic, Linter, ViolationKind};

fn lint_fixture(name: &str) -> Vec<Diagnostic> {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    Linter::new().lint_str(&md)
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}: {}", d.line, d.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn fixture_awesome() {
    let diagnostics = lint_fixture("awesome");

    insta::assert_snapshot!(render(&diagnostics), @r"
    13: List item description must start with valid casing
    14: List item link and description separated by invalid en-dash or em-dash
    18: List item description must end with proper punctuation
    21: List item description must end with proper punctuation
    26: Invalid list item link URL
    30: List item description contains invalid markdown
    ");
}

#[test]
fn fixture_clean() {
    assert!(lint_fixture("clean").is_empty());
}

#[test]
fn parenthetical_ending_needs_earlier_punctuation() {
    let diagnostics = lint_fixture("awesome");
    let omicron = diagnostics.iter().find(|d| d.line == 21).unwrap();

    assert_eq!(omicron.kind, ViolationKind::MissingPunctuation);
    // The description text starts after `- [Omicron](https://example.com/omicron)`.
    assert_eq!(omicron.column, 41);
}

#[test]
fn fixture_is_linted_identically_twice() {
    assert_eq!(lint_fixture("awesome"), lint_fixture("awesome"));
}

#[test]
fn nested_markup_is_reported_at_the_node() {
    let diagnostics = lint_fixture("awesome");
    let markup = diagnostics.last().unwrap();

    // `~~old~~` starts after `  - [Xi](https://example.com/xi) - Uses `.
    assert_eq!((markup.line, markup.column), (30, 41));
}
