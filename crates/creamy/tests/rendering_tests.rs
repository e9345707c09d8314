/*
 * rendering_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * End-to-end tests for component registration and rendering.
 */

use creamy::{Creamy, RenderError, RenderOptions};
use pretty_assertions::assert_eq;

/// Helper to build an engine with the given component declarations
fn engine(components: &str) -> Creamy {
    let mut creamy = Creamy::new();
    creamy
        .register_component(components)
        .expect("component declarations should parse");
    creamy
}

#[test]
fn test_render_components() {
    let creamy = engine(
        r#"
    <div @name="one">1</div>
    <div @name="two">2</div>
    <div @name="three">3</div>
  "#,
    );

    let rendered = creamy
        .render(
            r#"
    <One/><Two/><Three/>
  "#,
        )
        .unwrap();
    insta::assert_snapshot!(rendered, @"<div>1</div><div>2</div><div>3</div>");
}

#[test]
fn test_pascal_case_usage_is_rendered() {
    let creamy = engine(r#"<button @name="button">{children}</button>"#);
    let rendered = creamy.render("\n    <Button>Custom Button</Button>\n").unwrap();
    insta::assert_snapshot!(rendered, @"<button>Custom Button</button>");
}

#[test]
fn test_native_tag_is_not_a_usage() {
    let creamy = engine(r#"<button class="font-bold" @name="button">{children}</button>"#);
    let rendered = creamy
        .render("\n      <button>Native Button</button>\n")
        .unwrap();
    insta::assert_snapshot!(rendered, @"<button>Native Button</button>");
}

#[test]
fn test_props_are_interpolated() {
    let creamy = engine(r#"<div @name="one">{greetings}</div>"#);
    let rendered = creamy.render(r#"<One greetings="hello" />"#).unwrap();
    insta::assert_snapshot!(rendered, @"<div>hello</div>");
}

#[test]
fn test_raw_props_are_not_escaped() {
    let creamy = engine(r#"<div @name="one">{greetings!}</div>"#);
    let rendered = creamy
        .render(r#"<One greetings="<div>Element</div>" />"#)
        .unwrap();
    insta::assert_snapshot!(rendered, @"<div><div>Element</div></div>");
}

#[test]
fn test_props_are_escaped() {
    let creamy = engine(r#"<div @name="one">{greetings}</div>"#);
    let rendered = creamy
        .render(r#"<One greetings="<script>alert('xss')</script>" />"#)
        .unwrap();
    insta::assert_snapshot!(
        rendered,
        @"<div>&lt;script&gt;alert(&#x27;xss&#x27;)&lt;&#x2F;script&gt;</div>"
    );
}

#[test]
fn test_raw_and_escaped_props_differ_on_same_input() {
    let creamy = engine(
        r#"
    <div @name="raw">{v!}</div>
    <div @name="escaped">{v}</div>
  "#,
    );
    let value = "<script>alert('xss')</script>";

    let raw = creamy.render(&format!(r#"<Raw v="{value}"/>"#)).unwrap();
    let escaped = creamy.render(&format!(r#"<Escaped v="{value}"/>"#)).unwrap();

    assert_eq!(raw, "<div><script>alert('xss')</script></div>");
    assert_eq!(
        escaped,
        "<div>&lt;script&gt;alert(&#x27;xss&#x27;)&lt;&#x2F;script&gt;</div>"
    );
}

#[test]
fn test_missing_prop_renders_empty() {
    let creamy = engine(r#"<div @name="one">{unknown}</div>"#);
    let rendered = creamy.render(r#"<One greetings="hello" />"#).unwrap();
    assert_eq!(rendered, "<div></div>");
}

#[test]
fn test_children_text() {
    let creamy = engine(r#"<div @name="one">{children}</div>"#);
    let rendered = creamy.render("<One>Children rendered</One>").unwrap();
    assert_eq!(rendered, "<div>Children rendered</div>");
}

#[test]
fn test_children_components() {
    let creamy = engine(
        r#"
    <div @name="parent">{children}</div>
    <div @name="child">Child</div>
  "#,
    );
    let rendered = creamy.render("<Parent><Child/></Parent>").unwrap();
    assert_eq!(rendered, "<div><div>Child</div></div>");
}

#[test]
fn test_children_entities_are_kept() {
    let creamy = engine(r#"<p @name="quote">{children}</p>"#);
    let rendered = creamy.render("<Quote>Tom &amp; Jerry</Quote>").unwrap();
    assert_eq!(rendered, "<p>Tom &amp; Jerry</p>");
}

#[test]
fn test_props_passed_through_nested_components_escape_once() {
    let creamy = engine(
        r#"
    <section @name="panel"><Badge label="{title}"/></section>
    <b @name="badge">{label}</b>
  "#,
    );
    let rendered = creamy.render(r#"<Panel title="A &amp; B"/>"#).unwrap();
    assert_eq!(rendered, "<section><b>A &amp; B</b></section>");
}

#[test]
fn test_unknown_tags_pass_through() {
    let creamy = engine(r#"<div @name="one">1</div>"#);
    let rendered = creamy
        .render(r#"<Unknown data-x="1"><One/></Unknown>"#)
        .unwrap();
    assert_eq!(rendered, r#"<Unknown data-x="1"><div>1</div></Unknown>"#);
}

#[test]
fn test_key_normalization_applies_to_declarations() {
    let creamy = engine(
        r#"
    <nav @name="nav-bar">nav</nav>
    <aside @name="side_panel">side</aside>
  "#,
    );
    assert_eq!(creamy.registry().keys(), ["NavBar", "SidePanel"]);
    assert_eq!(
        creamy.render("<NavBar/><SidePanel/>").unwrap(),
        "<nav>nav</nav><aside>side</aside>"
    );
    // Usages must be written in the canonical spelling.
    assert_eq!(
        creamy.render("<nav-bar></nav-bar>").unwrap(),
        "<nav-bar></nav-bar>"
    );
}

#[test]
fn test_acronym_named_component() {
    let creamy = engine(
        r#"
    <b @name="HTMLParser">parser</b>
    <i @name="FOO">foo</i>
  "#,
    );
    assert_eq!(creamy.registry().keys(), ["FOO", "HTMLParser"]);
    assert_eq!(
        creamy.render("<HTMLParser/><FOO/>").unwrap(),
        "<b>parser</b><i>foo</i>"
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let creamy = engine(r#"<em @name="tag">{text}</em>"#);
    let template = r#"<p><Tag text="a"/> and <Tag text="b"/></p>"#;

    let first = creamy.render(template).unwrap();
    let second = creamy.render(template).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "<p><em>a</em> and <em>b</em></p>");

    // Output without usages renders to itself.
    assert_eq!(creamy.render(&first).unwrap(), first);
}

#[test]
fn test_concurrent_renders_share_one_engine() {
    let creamy = engine(r#"<li @name="item">{n}</li>"#);

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let creamy = &creamy;
                scope.spawn(move || creamy.render(&format!(r#"<Item n="{n}"/>"#)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (n, output) in outputs.iter().enumerate() {
        assert_eq!(output, &format!("<li>{n}</li>"));
    }
}

#[test]
fn test_whitespace_kept_when_compaction_disabled() {
    let mut creamy = Creamy::with_options(RenderOptions {
        compact_whitespace: false,
        ..RenderOptions::default()
    });
    creamy
        .register_component(r#"<div @name="one">1</div>"#)
        .unwrap();

    assert_eq!(
        creamy.render("<One/>\n<p> x </p>").unwrap(),
        "<div>1</div>\n<p> x </p>"
    );
}

#[test]
fn test_doctype_is_preserved() {
    let creamy = engine(r#"<title @name="page-title">{text}</title>"#);
    let rendered = creamy
        .render(r#"<!DOCTYPE html><html><head><PageTitle text="Home"/></head></html>"#)
        .unwrap();
    assert_eq!(
        rendered,
        "<!DOCTYPE html><html><head><title>Home</title></head></html>"
    );
}

#[test]
fn test_html_text_is_accepted() {
    let creamy = engine(r#"<div @name="widget"><script>if (a<b) {}</script>{children}</div>"#);

    assert_eq!(creamy.render("<p>1 < 2</p>").unwrap(), "<p>1 < 2</p>");
    assert_eq!(
        creamy.render("<Widget>hi</Widget>").unwrap(),
        "<div><script>if (a<b) {}</script>hi</div>"
    );
}

#[test]
fn test_malformed_template_is_an_error() {
    let creamy = Creamy::new();
    let err = creamy.render("<div><span></div>").unwrap_err();
    assert!(matches!(err, RenderError::Markup(_)), "got {err:?}");
}

#[test]
fn test_component_cycle_is_reported() {
    let creamy = engine(
        r#"
    <div @name="ping"><Pong/></div>
    <div @name="pong"><Ping/></div>
  "#,
    );
    let err = creamy.render("<Ping/>").unwrap_err();
    assert!(matches!(err, RenderError::ComponentCycle { max_depth: 32, .. }));
    assert!(err.to_string().contains("Component cycle detected"));
}
