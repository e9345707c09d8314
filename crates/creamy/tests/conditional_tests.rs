/*
 * conditional_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tests for @if / @else-if / @else inside rendered components.
 */

use creamy::{Creamy, RenderError};
use pretty_assertions::assert_eq;

const ITEM_AND_MESSAGE: &str = r#"
    <div @name="item">
      <div @if="{details}">{details}</div>
    </div>

    <div @name="message" @if="{show}">
      <div>Details: {details}</div>
    </div>
  "#;

const RANKING_WITH_ELSE: &str = r#"
    <div @name="ranking">
      <div @if="{rank}==1">First</div>
      <div @else-if="{rank}==2">Second</div>
      <div @else-if="{rank}==3">Third</div>
      <div @else-if="{rank}==4">Fourth</div>
      <div @else-if="{rank}==5">Fifth</div>
      <div @else>??</div>
    </div>
  "#;

/// Helper to build an engine with the given component declarations
fn engine(components: &str) -> Creamy {
    let mut creamy = Creamy::new();
    creamy.register_component(components).unwrap();
    creamy
}

#[test]
fn test_truthy_conditions_render() {
    let creamy = engine(ITEM_AND_MESSAGE);

    insta::assert_snapshot!(
        creamy.render(r#"<Message show="true" details="hello" />"#).unwrap(),
        @"<div><div>Details: hello</div></div>"
    );
    insta::assert_snapshot!(
        creamy.render(r#"<Item details="hello" />"#).unwrap(),
        @"<div><div>hello</div></div>"
    );
}

#[test]
fn test_falsy_conditions_remove_elements() {
    let creamy = engine(ITEM_AND_MESSAGE);

    assert_eq!(
        creamy.render(r#"<Message show="false" details="hello" />"#).unwrap(),
        ""
    );
    for details in ["0", "false", ""] {
        let template = format!(r#"<Item details="{details}" />"#);
        assert_eq!(creamy.render(&template).unwrap(), "<div></div>", "details={details:?}");
    }
}

#[test]
fn test_missing_prop_is_falsy() {
    let creamy = engine(ITEM_AND_MESSAGE);
    assert_eq!(creamy.render("<Item/>").unwrap(), "<div></div>");
}

#[test]
fn test_string_comparison() {
    let creamy = engine(
        r#"
    <div @name="item" @if="{language}==en">
      <div>Hello, {language}</div>
    </div>
  "#,
    );

    assert_eq!(
        creamy.render(r#"<Item language="en" />"#).unwrap(),
        "<div><div>Hello, en</div></div>"
    );
    assert_eq!(creamy.render(r#"<Item language="ja" />"#).unwrap(), "");
}

#[test]
fn test_if_selected_removes_alternatives() {
    let creamy = engine(RANKING_WITH_ELSE);
    assert_eq!(
        creamy.render(r#"<Ranking rank="1" />"#).unwrap(),
        "<div><div>First</div></div>"
    );
}

#[test]
fn test_else_if_selected() {
    let creamy = engine(RANKING_WITH_ELSE);
    assert_eq!(
        creamy.render(r#"<Ranking rank="4" />"#).unwrap(),
        "<div><div>Fourth</div></div>"
    );
}

#[test]
fn test_else_selected() {
    let creamy = engine(RANKING_WITH_ELSE);
    assert_eq!(
        creamy.render(r#"<Ranking rank="9" />"#).unwrap(),
        "<div><div>??</div></div>"
    );
}

#[test]
fn test_unrelated_sibling_is_kept() {
    let creamy = engine(
        r#"
    <div @name="ranking">
      <div @if="{rank}==1">First</div>
      <div @else-if="{rank}==2">Second</div>
      <div @else-if="{rank}==3">Third</div>
      <div>Should not delete</div>
    </div>
  "#,
    );

    assert_eq!(
        creamy.render(r#"<Ranking rank="10" />"#).unwrap(),
        "<div><div>Should not delete</div></div>"
    );
    assert_eq!(
        creamy.render(r#"<Ranking rank="2" />"#).unwrap(),
        "<div><div>Second</div><div>Should not delete</div></div>"
    );
}

#[test]
fn test_numeric_comparisons_in_templates() {
    let creamy = engine(
        r#"
    <p @name="stock">
      <span @if="{count} <= 0">Sold out</span>
      <span @else-if="{count} < 5">Only {count} left</span>
      <span @else>In stock</span>
    </p>
  "#,
    );

    assert_eq!(
        creamy.render(r#"<Stock count="0"/>"#).unwrap(),
        "<p><span>Sold out</span></p>"
    );
    assert_eq!(
        creamy.render(r#"<Stock count="3"/>"#).unwrap(),
        "<p><span>Only 3 left</span></p>"
    );
    assert_eq!(
        creamy.render(r#"<Stock count="12"/>"#).unwrap(),
        "<p><span>In stock</span></p>"
    );
}

#[test]
fn test_conditions_on_usages() {
    let creamy = engine(r#"<b @name="badge">{label}</b>"#);
    let rendered = creamy
        .render(r#"<Badge @if="0" label="a"/><Badge @else label="b"/>"#)
        .unwrap();
    assert_eq!(rendered, "<b>b</b>");
}

#[test]
fn test_conditions_in_plain_templates() {
    let creamy = Creamy::new();
    assert_eq!(
        creamy
            .render("<ul><li @if=\"2 >= 3\">a</li>\n<li @else>b</li></ul>")
            .unwrap(),
        "<ul><li>b</li></ul>"
    );
}

#[test]
fn test_dangling_else_is_an_error() {
    let creamy = Creamy::new();
    let err = creamy.render("<p>x</p><p @else>y</p>").unwrap_err();
    assert!(matches!(err, RenderError::DanglingElse { ref element } if element == "p"));
}

#[test]
fn test_dangling_else_if_inside_component() {
    let creamy = engine(r#"<div @name="broken"><i @else-if="{x}">i</i></div>"#);
    let err = creamy.render(r#"<Broken x="1"/>"#).unwrap_err();
    assert!(matches!(
        err,
        RenderError::DanglingElseIf { ref condition, .. } if condition == "1"
    ));
}

#[test]
fn test_conflicting_directives_are_rejected() {
    let mut creamy = Creamy::new();
    let err = creamy
        .register_component(r#"<div @name="x" @if="1" @else>y</div>"#)
        .unwrap_err();
    assert!(matches!(err, RenderError::Markup(_)));
}

#[test]
fn test_removed_usage_is_never_expanded() {
    let creamy = engine(r#"<div @name="loop"><Loop/></div>"#);
    assert_eq!(
        creamy.render(r#"<Loop @if="0"/><p @else>fallback</p>"#).unwrap(),
        "<p>fallback</p>"
    );
    assert!(matches!(
        creamy.render(r#"<Loop @if="1"/>"#),
        Err(RenderError::ComponentCycle { .. })
    ));
}
