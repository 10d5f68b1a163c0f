//! Chooses which lists of a document get validated.

use std::sync::LazyLock;

use regex::Regex;

use crate::tree::{Block, Document, List, to_plain_text};

/// Heading text that marks a table of contents.
pub const CONTENTS_HEADING: &str = "Contents";

static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// A heading or list, in document order.
enum Landmark<'a> {
    Heading { depth: u8, text: String },
    List(&'a List),
}

/// Returns the lists to validate, in document order.
///
/// Every list is returned, nested lists included, unless
/// `respect_contents` is set and the document has a `Contents` heading. In
/// that case only lists after the next heading of the same depth are
/// returned, which skips the table of contents itself.
pub fn select_lists(doc: &Document, respect_contents: bool) -> Vec<&List> {
    let mut landmarks = Vec::new();
    collect_landmarks(&doc.blocks, &mut landmarks);

    let start = if respect_contents {
        match contents_end(&landmarks) {
            Some(start) => start,
            None => return Vec::new(),
        }
    } else {
        0
    };

    landmarks[start..]
        .iter()
        .filter_map(|landmark| match landmark {
            Landmark::List(list) => Some(*list),
            Landmark::Heading { .. } => None,
        })
        .collect()
}

/// Index of the first landmark after the table of contents section.
///
/// `Some(0)` when there is no contents heading; `None` when the contents
/// section runs to the end of the document.
fn contents_end(landmarks: &[Landmark<'_>]) -> Option<usize> {
    let Some((toc_index, toc_depth)) = landmarks.iter().enumerate().find_map(|(i, l)| match l {
        Landmark::Heading { depth, text } if text == CONTENTS_HEADING => Some((i, *depth)),
        _ => None,
    }) else {
        return Some(0);
    };

    let next = landmarks[toc_index + 1..]
        .iter()
        .position(|l| matches!(l, Landmark::Heading { depth, .. } if *depth == toc_depth));

    match next {
        Some(offset) => Some(toc_index + 1 + offset),
        None => {
            log::debug!("no heading follows the contents section; nothing to validate");
            None
        }
    }
}

fn collect_landmarks<'a>(blocks: &'a [Block], out: &mut Vec<Landmark<'a>>) {
    for block in blocks {
        match block {
            Block::Heading {
                depth, children, ..
            } => {
                let plain = to_plain_text(children);
                let text = HTML_COMMENT.replace_all(&plain, "");
                out.push(Landmark::Heading {
                    depth: *depth,
                    text: text.trim().to_string(),
                });
            }
            Block::List(list) => {
                out.push(Landmark::List(list));
                for item in &list.items {
                    collect_landmarks(&item.children, out);
                }
            }
            Block::Other { children, .. } => collect_landmarks(children, out),
            Block::Paragraph { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::parse_markdown;
    use pretty_assertions::assert_eq;

    fn first_texts(lists: &[&List]) -> Vec<String> {
        lists
            .iter()
            .map(|list| match &list.items[0].children[0] {
                Block::Paragraph { children, .. } => to_plain_text(children),
                _ => String::new(),
            })
            .collect()
    }

    #[test]
    fn all_lists_including_nested() {
        let doc = parse_markdown("- One\n  - Nested\n\ntext\n\n- Two\n");
        let lists = select_lists(&doc, true);

        assert_eq!(first_texts(&lists), vec!["One", "Nested", "Two"]);
    }

    #[test]
    fn contents_section_is_skipped() {
        let md = "# Awesome\n\n## Contents\n\n- [Tools](#tools)\n\n\
                  ## Tools\n\n- Tool list\n\n## More\n\n- More list\n";
        let doc = parse_markdown(md);

        assert_eq!(
            first_texts(&select_lists(&doc, true)),
            vec!["Tool list", "More list"]
        );
        assert_eq!(
            first_texts(&select_lists(&doc, false)),
            vec!["Tools", "Tool list", "More list"]
        );
    }

    #[test]
    fn contents_heading_ignores_html_comments() {
        let md = "## Contents <!-- omit in toc -->\n\n- [A](#a)\n\n## A\n\n- Entry\n";
        let doc = parse_markdown(md);

        assert_eq!(first_texts(&select_lists(&doc, true)), vec!["Entry"]);
    }

    #[test]
    fn deeper_headings_stay_in_the_contents_section() {
        let md = "## Contents\n\n### Sub\n\n- [A](#a)\n\n## A\n\n- Entry\n";
        let doc = parse_markdown(md);

        assert_eq!(first_texts(&select_lists(&doc, true)), vec!["Entry"]);
    }

    #[test]
    fn contents_at_the_end_selects_nothing() {
        let md = "## Intro\n\n- Intro list\n\n## Contents\n\n- [A](#a)\n";
        let doc = parse_markdown(md);

        assert!(select_lists(&doc, true).is_empty());
    }

    #[test]
    fn lists_inside_quotes_are_found() {
        let doc = parse_markdown("> - Quoted\n");
        let lists = select_lists(&doc, true);

        assert_eq!(lists.len(), 1);
        assert_eq!(first_texts(&lists), vec!["Quoted"]);
    }
}
