//! Document-level parsing tests: block recursion, fallbacks and the tree
//! invariants.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, Document, List, ListItem},
    inline::Inline,
    invariants, parse_document,
};

fn parse(src: &str) -> Document {
    let doc = parse_document(src);
    invariants::check(&doc);
    doc
}

fn para(text: &str) -> Block {
    Block::paragraph(vec![Inline::text(text)])
}

#[test]
fn empty_document() {
    assert!(parse("").children.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n\n").children.is_empty());
}

#[test]
fn list_nested_in_panel() {
    let doc = parse("{panel}\n* level 1\n** level 2\n{panel}");
    assert_eq!(
        doc.children,
        vec![Block::Panel {
            title: None,
            children: vec![Block::List(List {
                ordered: false,
                items: vec![ListItem {
                    children: vec![
                        para("level 1"),
                        Block::List(List {
                            ordered: false,
                            items: vec![ListItem {
                                children: vec![para("level 2")],
                            }],
                        }),
                    ],
                }],
            })],
        }]
    );
}

#[test]
fn quote_holds_blocks() {
    let doc = parse("{quote}\nh1. Title\ntext\n{quote}");
    assert_eq!(
        doc.children,
        vec![Block::Blockquote {
            children: vec![
                Block::Heading {
                    level: 1,
                    inlines: vec![Inline::text("Title")],
                },
                para("text"),
            ],
        }]
    );
}

#[test]
fn unclosed_quote_is_text() {
    let doc = parse("{quote}\nquoted");
    assert_eq!(doc.children, vec![para("{quote}"), para("quoted")]);
}

#[test]
fn table_without_cells_falls_back_to_paragraph() {
    let doc = parse("||\n\nnext");
    assert_eq!(doc.children, vec![para("||"), para("next")]);
}

#[test]
fn table_ends_at_blank_line() {
    let doc = parse("|a|\n\nafter");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(doc.children[0], Block::Table(_)));
    assert_eq!(doc.children[1], para("after"));
}

#[test]
fn code_in_list_continuation_is_not_swallowed() {
    let doc = parse("* item\n{code}\nx\n{code}");
    assert_eq!(doc.children.len(), 2);
    assert!(matches!(doc.children[0], Block::List(_)));
    assert_eq!(
        doc.children[1],
        Block::CodeFence {
            lang: None,
            content: "x".into(),
        }
    );
}

#[test]
fn differing_list_markers_make_two_lists() {
    let doc = parse("* bullet\n# number");
    assert!(matches!(
        doc.children.as_slice(),
        [
            Block::List(List { ordered: false, .. }),
            Block::List(List { ordered: true, .. })
        ]
    ));
}

#[test]
fn rule_needs_its_own_line() {
    let doc = parse("----\ntext ---- more");
    assert_eq!(doc.children[0], Block::HorizontalRule);
    assert!(matches!(doc.children[1], Block::Paragraph { .. }));
}

#[test]
fn panel_in_table_cell() {
    let doc = parse("|{panel:title=T}inside{panel}|b|");
    let Block::Table(table) = &doc.children[0] else {
        panic!("expected Table, got {:?}", doc.children[0]);
    };
    assert_eq!(table.rows[0].cells.len(), 2);
    assert!(matches!(
        table.rows[0].cells[0].content[0],
        Block::Panel { title: Some(_), .. }
    ));
}

#[test]
fn tree_serializes_with_type_tags() {
    let doc = parse("h2. *Hi*");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "children": [{
                "type": "Heading",
                "level": 2,
                "inlines": [{ "type": "Strong", "children": [{ "type": "Text", "value": "Hi" }] }],
            }]
        })
    );
}
