//! Builds the [`Document`] tree from `pulldown_cmark` events.
//!
//! # Event flow
//!
//! pulldown-cmark reports a flat stream of `Start`/`End` pairs with leaf
//! events in between. Nested lists appear inside their parent item, after the
//! item's own text and before the item's `End(Item)`:
//!
//! ```markdown
//! - Parent
//!   - Child
//! ```
//!
//! 1. `Start(List)`, `Start(Item)`, `Text("Parent")`
//! 2. `Start(List)`, `Start(Item)`, `Text("Child")`, `End(Item)`, `End(List)`
//! 3. `End(Item)`, `End(List)`
//!
//! Items of a tight list carry their inline events directly, without a
//! `Start(Paragraph)`. The builder wraps those in an implicit paragraph so
//! every entry has the same shape regardless of list spacing.
//!
//! Two stacks track the state: `blocks` for open block containers (root,
//! lists, items, quotes) and `inlines` for open inline containers
//! (paragraphs, headings, emphasis, links and images).

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

use super::{
    block::{Block, Document, List, ListItem},
    inline::{InlineNode, to_plain_text},
    span::Span,
};

/// Parses markdown source into a [`Document`].
///
/// Tables, strikethrough and footnotes are enabled so that GitHub-flavoured
/// list documents produce the node kinds the rules expect.
pub fn parse_markdown(source: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        builder.process_event(event, Span::from(range));
    }
    builder.finish()
}

/// An open block container.
enum BlockFrame {
    Root(Vec<Block>),
    List { items: Vec<ListItem>, span: Span },
    Item { children: Vec<Block>, span: Span },
    /// Block quotes and footnote definitions.
    Container { children: Vec<Block>, span: Span },
}

/// What an open inline container becomes once closed.
enum InlineKind {
    Paragraph { implicit: bool },
    Heading(u8),
    Emphasis,
    Strong,
    Delete,
    Link { url: String },
    LinkReference,
    Image { url: String },
    /// Superscript, subscript and the like: children are spliced into the parent.
    Transparent,
}

struct InlineFrame {
    kind: InlineKind,
    children: Vec<InlineNode>,
    span: Span,
}

struct TreeBuilder {
    blocks: Vec<BlockFrame>,
    inlines: Vec<InlineFrame>,
    /// Nesting depth inside content the linter never inspects (code blocks,
    /// HTML blocks, tables, metadata). Zero when not inside one.
    opaque_depth: usize,
    opaque_span: Span,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            blocks: vec![BlockFrame::Root(Vec::new())],
            inlines: Vec::new(),
            opaque_depth: 0,
            opaque_span: Span::default(),
        }
    }

    fn process_event(&mut self, event: Event<'_>, span: Span) {
        if self.opaque_depth > 0 {
            match event {
                Event::Start(_) => self.opaque_depth += 1,
                Event::End(_) => {
                    self.opaque_depth -= 1;
                    if self.opaque_depth == 0 {
                        let span = self.opaque_span;
                        self.push_block(Block::Other {
                            children: Vec::new(),
                            span,
                        });
                    }
                }
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start_tag(tag, span),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.push_text(&text, span),
            Event::SoftBreak => self.push_text("\n", span),
            Event::HardBreak => self.push_inline(InlineNode::Break { span }),
            Event::Code(code) => self.push_inline(InlineNode::InlineCode {
                value: code.to_string(),
                span,
            }),
            Event::InlineHtml(html) | Event::Html(html) => self.push_inline(InlineNode::Html {
                value: html.to_string(),
                span,
            }),
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push_text(&math, span)
            }
            Event::FootnoteReference(label) => {
                self.push_inline(InlineNode::FootnoteReference {
                    label: label.to_string(),
                    span,
                })
            }
            Event::Rule => self.push_block(Block::Other {
                children: Vec::new(),
                span,
            }),
            Event::TaskListMarker(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>, span: Span) {
        match tag {
            Tag::Paragraph => {
                self.close_implicit_paragraph();
                self.open_inline(InlineKind::Paragraph { implicit: false }, span);
            }
            Tag::Heading { level, .. } => {
                self.close_implicit_paragraph();
                self.open_inline(InlineKind::Heading(level as u8), span);
            }
            Tag::List(_) => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::List {
                    items: Vec::new(),
                    span,
                });
            }
            Tag::Item => self.blocks.push(BlockFrame::Item {
                children: Vec::new(),
                span,
            }),
            Tag::BlockQuote(_) | Tag::FootnoteDefinition(_) => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::Container {
                    children: Vec::new(),
                    span,
                });
            }
            Tag::CodeBlock(_) | Tag::HtmlBlock | Tag::Table(_) | Tag::MetadataBlock(_) => {
                self.close_implicit_paragraph();
                self.opaque_depth = 1;
                self.opaque_span = span;
            }
            Tag::DefinitionList | Tag::DefinitionListTitle | Tag::DefinitionListDefinition => {
                self.close_implicit_paragraph();
                self.blocks.push(BlockFrame::Container {
                    children: Vec::new(),
                    span,
                });
            }
            Tag::TableHead | Tag::TableRow | Tag::TableCell => {}
            Tag::Emphasis => self.open_inline(InlineKind::Emphasis, span),
            Tag::Strong => self.open_inline(InlineKind::Strong, span),
            Tag::Strikethrough => self.open_inline(InlineKind::Delete, span),
            Tag::Superscript | Tag::Subscript => self.open_inline(InlineKind::Transparent, span),
            Tag::Link {
                link_type,
                dest_url,
                ..
            } => {
                let kind = if is_reference(link_type) {
                    InlineKind::LinkReference
                } else {
                    InlineKind::Link {
                        url: dest_url.to_string(),
                    }
                };
                self.open_inline(kind, span);
            }
            Tag::Image { dest_url, .. } => self.open_inline(
                InlineKind::Image {
                    url: dest_url.to_string(),
                },
                span,
            ),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph
            | TagEnd::Heading(_)
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Superscript
            | TagEnd::Subscript
            | TagEnd::Link
            | TagEnd::Image => self.close_inline(),
            TagEnd::List(_) => {
                self.close_implicit_paragraph();
                if let Some(BlockFrame::List { items, span }) = self.blocks.pop() {
                    self.push_block(Block::List(List { items, span }));
                }
            }
            TagEnd::Item => {
                self.close_implicit_paragraph();
                if let Some(BlockFrame::Item { children, span }) = self.blocks.pop()
                    && let Some(BlockFrame::List { items, .. }) = self.blocks.last_mut()
                {
                    items.push(ListItem { children, span });
                }
            }
            TagEnd::BlockQuote(_)
            | TagEnd::FootnoteDefinition
            | TagEnd::DefinitionList
            | TagEnd::DefinitionListTitle
            | TagEnd::DefinitionListDefinition => {
                self.close_implicit_paragraph();
                if let Some(BlockFrame::Container { children, span }) = self.blocks.pop() {
                    self.push_block(Block::Other { children, span });
                }
            }
            TagEnd::CodeBlock
            | TagEnd::HtmlBlock
            | TagEnd::Table
            | TagEnd::TableHead
            | TagEnd::TableRow
            | TagEnd::TableCell
            | TagEnd::MetadataBlock(_) => {}
        }
    }

    fn open_inline(&mut self, kind: InlineKind, span: Span) {
        if self.inlines.is_empty()
            && !matches!(kind, InlineKind::Paragraph { .. } | InlineKind::Heading(_))
        {
            self.open_implicit_paragraph(span);
        }
        self.inlines.push(InlineFrame {
            kind,
            children: Vec::new(),
            span,
        });
    }

    fn open_implicit_paragraph(&mut self, span: Span) {
        self.inlines.push(InlineFrame {
            kind: InlineKind::Paragraph { implicit: true },
            children: Vec::new(),
            span,
        });
    }

    fn close_implicit_paragraph(&mut self) {
        if matches!(
            self.inlines.last(),
            Some(InlineFrame {
                kind: InlineKind::Paragraph { implicit: true },
                ..
            })
        ) {
            self.close_inline();
        }
    }

    /// Closes the innermost inline container and attaches the result to its
    /// parent (or to the enclosing block for paragraphs and headings).
    fn close_inline(&mut self) {
        let Some(InlineFrame {
            kind,
            children,
            span,
        }) = self.inlines.pop()
        else {
            return;
        };

        match kind {
            InlineKind::Paragraph { .. } => self.push_block(Block::Paragraph { children, span }),
            InlineKind::Heading(depth) => self.push_block(Block::Heading {
                depth,
                children,
                span,
            }),
            InlineKind::Emphasis => self.push_inline(InlineNode::Emphasis { children, span }),
            InlineKind::Strong => self.push_inline(InlineNode::Strong { children, span }),
            InlineKind::Delete => self.push_inline(InlineNode::Delete { children, span }),
            InlineKind::Link { url } => self.push_inline(InlineNode::Link {
                url,
                children,
                span,
            }),
            InlineKind::LinkReference => {
                self.push_inline(InlineNode::LinkReference { children, span })
            }
            InlineKind::Image { url } => self.push_inline(InlineNode::Image {
                url,
                alt: to_plain_text(&children),
                span,
            }),
            InlineKind::Transparent => {
                for child in children {
                    self.push_inline(child);
                }
            }
        }
    }

    /// Appends text, merging with a directly preceding text node.
    fn push_text(&mut self, text: &str, span: Span) {
        if let Some(frame) = self.inlines.last_mut()
            && let Some(InlineNode::Text {
                value,
                span: last_span,
            }) = frame.children.last_mut()
        {
            value.push_str(text);
            *last_span = last_span.cover(span);
            frame.span = frame.span.cover(span);
            return;
        }
        self.push_inline(InlineNode::Text {
            value: text.to_string(),
            span,
        });
    }

    fn push_inline(&mut self, node: InlineNode) {
        if self.inlines.is_empty() {
            self.open_implicit_paragraph(node.span());
        }
        if let Some(frame) = self.inlines.last_mut() {
            frame.span = frame.span.cover(node.span());
            frame.children.push(node);
        }
    }

    fn push_block(&mut self, block: Block) {
        match self.blocks.last_mut() {
            Some(BlockFrame::Root(children))
            | Some(BlockFrame::Item { children, .. })
            | Some(BlockFrame::Container { children, .. }) => children.push(block),
            Some(BlockFrame::List { .. }) | None => {
                debug_assert!(false, "block pushed outside of a block container");
            }
        }
    }

    fn finish(mut self) -> Document {
        while !self.inlines.is_empty() {
            self.close_inline();
        }
        let mut blocks = Vec::new();
        while let Some(frame) = self.blocks.pop() {
            if let BlockFrame::Root(children) = frame {
                blocks = children;
            }
        }
        Document { blocks }
    }
}

fn is_reference(link_type: LinkType) -> bool {
    matches!(
        link_type,
        LinkType::Reference
            | LinkType::ReferenceUnknown
            | LinkType::Collapsed
            | LinkType::CollapsedUnknown
            | LinkType::Shortcut
            | LinkType::ShortcutUnknown
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use pretty_assertions::assert_eq;

    fn first_list(doc: &Document) -> &List {
        doc.blocks
            .iter()
            .find_map(|b| match b {
                Block::List(list) => Some(list),
                _ => None,
            })
            .expect("document has a list")
    }

    fn entry_inlines(item: &ListItem) -> &[InlineNode] {
        match &item.children[0] {
            Block::Paragraph { children, .. } => children,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    fn kinds(nodes: &[InlineNode]) -> Vec<NodeKind> {
        nodes.iter().map(InlineNode::kind).collect()
    }

    #[test]
    fn tight_list_items_get_a_paragraph() {
        let doc = parse_markdown("- [Foo](https://example.com) - A tool.\n- Bar\n");
        let list = first_list(&doc);

        assert_eq!(list.items.len(), 2);
        let inlines = entry_inlines(&list.items[0]);
        assert_eq!(kinds(inlines), vec![NodeKind::Link, NodeKind::Text]);
        assert_eq!(inlines[1].as_text(), Some(" - A tool."));
    }

    #[test]
    fn loose_list_items_keep_their_paragraph() {
        let doc = parse_markdown("- [Foo](https://example.com) - A tool.\n\n- Bar\n");
        let list = first_list(&doc);

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[1].children.len(), 1);
        assert_eq!(entry_inlines(&list.items[1])[0].as_text(), Some("Bar"));
    }

    #[test]
    fn link_carries_url_and_children() {
        let doc = parse_markdown("- [*Foo* `bar`](https://example.com/x)\n");
        let inlines = entry_inlines(&first_list(&doc).items[0]);

        match &inlines[0] {
            InlineNode::Link { url, children, .. } => {
                assert_eq!(url, "https://example.com/x");
                assert_eq!(
                    kinds(children),
                    vec![NodeKind::Emphasis, NodeKind::Text, NodeKind::InlineCode]
                );
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn reference_links_become_link_references() {
        let doc = parse_markdown("- [Foo][foo] - A tool.\n\n[foo]: https://example.com\n");
        let inlines = entry_inlines(&first_list(&doc).items[0]);

        assert_eq!(inlines[0].kind(), NodeKind::LinkReference);
    }

    #[test]
    fn adjacent_text_fragments_merge() {
        let doc =
            parse_markdown("- [Foo](https://example.com) - Uses [brackets] & more\n  text.\n");
        let inlines = entry_inlines(&first_list(&doc).items[0]);

        assert_eq!(inlines.len(), 2);
        assert_eq!(
            inlines[1].as_text(),
            Some(" - Uses [brackets] & more\ntext.")
        );
    }

    #[test]
    fn nested_lists_live_inside_their_item() {
        let doc = parse_markdown("- Parent\n  - [Child](https://example.com) - Nested.\n");
        let list = first_list(&doc);

        assert_eq!(list.items.len(), 1);
        let parent = &list.items[0];
        assert_eq!(parent.children.len(), 2);
        assert!(matches!(&parent.children[1], Block::List(nested) if nested.items.len() == 1));
    }

    #[test]
    fn headings_record_depth() {
        let doc = parse_markdown("## Contents\n\ntext\n");

        assert!(matches!(
            &doc.blocks[0],
            Block::Heading { depth: 2, children, .. } if children[0].as_text() == Some("Contents")
        ));
        assert!(matches!(&doc.blocks[1], Block::Paragraph { .. }));
    }

    #[test]
    fn code_blocks_are_opaque() {
        let doc = parse_markdown("```\n- not a list\n```\n");

        assert_eq!(doc.blocks.len(), 1);
        assert!(matches!(&doc.blocks[0], Block::Other { children, .. } if children.is_empty()));
    }

    #[test]
    fn empty_item_has_no_children() {
        let doc = parse_markdown("- \n- Foo\n");
        let list = first_list(&doc);

        assert!(list.items[0].children.is_empty());
    }

    #[test]
    fn text_spans_point_into_source() {
        let source = "- [Foo](https://example.com) - A tool.\n";
        let doc = parse_markdown(source);
        let inlines = entry_inlines(&first_list(&doc).items[0]);

        let span = inlines[1].span();
        assert_eq!(&source[span.start..span.end], " - A tool.");
    }
}
