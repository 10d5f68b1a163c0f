use crate::tree::{InlineNode, to_plain_text};

use super::{LINK_CHILD_KINDS, RuleContext, RuleResult, Violation, ViolationKind};

/// Checks an entry's link candidate.
///
/// Reference links are accepted as they are; whether their definition
/// exists is a separate concern. Direct links need an absolute URL,
/// non-empty text, and only plain, emphasised or code children.
pub fn validate_link(cx: &RuleContext<'_>, link: &InlineNode) -> RuleResult {
    let (url, children) = match link {
        InlineNode::LinkReference { .. } => return Ok(()),
        InlineNode::Link { url, children, .. } => (url, children),
        other => return Err(Violation::new(ViolationKind::InvalidLink, other.span())),
    };

    if !cx.urls.is_absolute_url(url) {
        return Err(Violation::new(ViolationKind::InvalidLinkUrl, link.span()));
    }

    if to_plain_text(children).is_empty() {
        return Err(Violation::new(ViolationKind::InvalidLinkText, link.span()));
    }

    match children
        .iter()
        .find(|child| !LINK_CHILD_KINDS.contains(&child.kind()))
    {
        Some(child) => Err(Violation::new(ViolationKind::InvalidLink, child.span())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{code, context, link, text};
    use crate::tree::Span;

    #[test]
    fn plain_link_is_valid() {
        let node = link("https://example.com", vec![text("Foo")]);
        assert_eq!(validate_link(&context(), &node), Ok(()));
    }

    #[test]
    fn link_reference_is_always_valid() {
        let node = InlineNode::LinkReference {
            children: vec![],
            span: Span::default(),
        };
        assert_eq!(validate_link(&context(), &node), Ok(()));
    }

    #[test]
    fn non_link_candidate_is_rejected() {
        let err = validate_link(&context(), &code("foo")).unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLink);
    }

    #[test]
    fn relative_url_is_rejected() {
        let node = link("./docs/readme.md", vec![text("Docs")]);
        let err = validate_link(&context(), &node).unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLinkUrl);
    }

    #[test]
    fn empty_link_text_is_rejected() {
        let node = link("https://example.com", vec![]);
        let err = validate_link(&context(), &node).unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLinkText);
    }

    #[test]
    fn url_is_checked_before_text() {
        let node = link("nope", vec![]);
        let err = validate_link(&context(), &node).unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLinkUrl);
    }

    #[test]
    fn emphasis_and_code_children_are_allowed() {
        let node = link(
            "https://example.com",
            vec![
                InlineNode::Emphasis {
                    children: vec![text("Foo")],
                    span: Span::default(),
                },
                code("bar"),
            ],
        );
        assert_eq!(validate_link(&context(), &node), Ok(()));
    }

    #[test]
    fn strong_child_is_reported_at_the_child() {
        let node = link(
            "https://example.com",
            vec![
                text("Foo "),
                InlineNode::Strong {
                    children: vec![text("bar")],
                    span: Span::new(7, 14),
                },
            ],
        );

        let err = validate_link(&context(), &node).unwrap_err();
        assert_eq!(err.kind, ViolationKind::InvalidLink);
        assert_eq!(err.span, Span::new(7, 14));
    }
}
