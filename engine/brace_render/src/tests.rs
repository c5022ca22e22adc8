use brace_ir::SectionBuilder;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use super::*;

fn section(name: &str, children: Vec<Node>) -> Section {
    let mut builder = SectionBuilder::new(name);
    for child in children {
        builder.push(child);
    }
    builder.freeze()
}

fn root(children: Vec<Node>) -> Section {
    section("", children)
}

fn content(text: &str) -> Node {
    Node::Content(text.to_string())
}

fn var(name: &str) -> Node {
    Node::EscapedVar(name.to_string())
}

fn raw(name: &str) -> Node {
    Node::UnescapedVar(name.to_string())
}

// === Variables ===

#[test]
fn content_passes_through() {
    let tree = root(vec![content("hello")]);
    assert_eq!(render(&tree, &json!({})).unwrap(), "hello");
}

#[test]
fn escaped_variables_html_encode() {
    let tree = root(vec![var("x")]);
    let data = json!({"x": "<i> & 'q'"});
    assert_eq!(render(&tree, &data).unwrap(), "&lt;i&gt; &amp; &#39;q&#39;");
}

#[test]
fn unescaped_variables_emit_verbatim() {
    let tree = root(vec![raw("x")]);
    let data = json!({"x": "<i>"});
    assert_eq!(render(&tree, &data).unwrap(), "<i>");
}

#[test]
fn missing_variables_render_empty() {
    let tree = root(vec![content("a"), var("gone"), content("b")]);
    assert_eq!(render(&tree, &json!({})).unwrap(), "ab");
}

#[test]
fn scalar_variables_use_textual_forms() {
    let tree = root(vec![
        var("n"),
        content("|"),
        var("f"),
        content("|"),
        var("nothing"),
        content("|"),
        var("list"),
    ]);
    let data = json!({"n": 10000, "f": false, "nothing": null, "list": [1, 2]});
    assert_eq!(render(&tree, &data).unwrap(), "10000|false||[1,2]");
}

// === Section gating ===

#[test]
fn absent_sections_render_nothing() {
    let tree = root(vec![
        content("a"),
        Node::Section(section("gone", vec![content("x")])),
        content("b"),
    ]);
    assert_eq!(render(&tree, &json!({})).unwrap(), "ab");
}

#[test]
fn false_sections_render_nothing() {
    let tree = root(vec![Node::Section(section("flag", vec![content("x")]))]);
    let data = json!({"flag": false});
    assert_eq!(render(&tree, &data).unwrap(), "");
}

#[test]
fn true_sections_render_once_with_outer_lookups() {
    // The pushed boolean owns no properties, so lookups inside the block
    // fall back to the enclosing object.
    let tree = root(vec![Node::Section(section(
        "flag",
        vec![content("["), var("name"), content("]")],
    ))]);
    let data = json!({"flag": true, "name": "x"});
    assert_eq!(render(&tree, &data).unwrap(), "[x]");
}

#[test]
fn empty_arrays_render_nothing() {
    let tree = root(vec![Node::Section(section("items", vec![content("x")]))]);
    let data = json!({"items": []});
    assert_eq!(render(&tree, &data).unwrap(), "");
}

#[test]
fn arrays_fan_out_in_order() {
    let tree = root(vec![Node::Section(section(
        "items",
        vec![content("<"), var("x"), content(">")],
    ))]);
    let data = json!({"items": [{"x": "a"}, {"x": "b"}, {"x": "c"}]});
    assert_eq!(render(&tree, &data).unwrap(), "<a><b><c>");
}

#[test]
fn element_frames_shadow_and_pop() {
    let tree = root(vec![
        Node::Section(section("items", vec![var("x")])),
        var("x"),
    ]);
    let data = json!({"x": "outer", "items": [{"x": "inner"}, {}]});
    // Second element lacks "x" and falls back to the root value; after the
    // section the frame is gone again.
    assert_eq!(render(&tree, &data).unwrap(), "innerouterouter");
}

#[test]
fn section_lookup_never_falls_back() {
    // "inner" exists on the root, but the element frame does not own it;
    // sections read the top frame only, so the block is skipped.
    let tree = root(vec![Node::Section(section(
        "items",
        vec![Node::Section(section("inner", vec![content("x")]))],
    ))]);
    let data = json!({"inner": true, "items": [{}]});
    assert_eq!(render(&tree, &data).unwrap(), "");
}

#[test]
fn sections_inside_boolean_frames_are_skipped() {
    // The pushed boolean owns nothing, so the nested section is absent.
    let tree = root(vec![Node::Section(section(
        "flag",
        vec![Node::Section(section("flag", vec![content("x")]))],
    ))]);
    let data = json!({"flag": true});
    assert_eq!(render(&tree, &data).unwrap(), "");
}

#[test]
fn nested_arrays_compose() {
    let tree = root(vec![Node::Section(section(
        "outer",
        vec![
            var("name"),
            Node::Section(section("inner", vec![content("."), var("name")])),
        ],
    ))]);
    let data = json!({
        "outer": [
            {"name": "a", "inner": [{"name": "a1"}, {"name": "a2"}]},
            {"name": "b"},
        ]
    });
    assert_eq!(render(&tree, &data).unwrap(), "a.a1.a2b");
}

// === Errors ===

#[test]
fn scalar_section_values_are_fatal() {
    let tree = root(vec![Node::Section(section("s", vec![content("x")]))]);
    let data = json!({"s": "text"});
    assert_eq!(
        render(&tree, &data),
        Err(RenderError::UnsupportedSectionValue {
            name: "s".to_string(),
            kind: DocumentKind::String,
        })
    );
}

#[test]
fn other_non_gating_section_values_are_fatal() {
    let tree = root(vec![Node::Section(section("s", vec![]))]);
    for (data, kind) in [
        (json!({"s": {}}), DocumentKind::Object),
        (json!({"s": 1}), DocumentKind::Number),
        (json!({"s": null}), DocumentKind::Null),
    ] {
        assert_eq!(
            render(&tree, &data),
            Err(RenderError::UnsupportedSectionValue {
                name: "s".to_string(),
                kind,
            })
        );
    }
}

#[test]
fn non_object_roots_are_rejected() {
    let tree = root(vec![content("x")]);
    for (data, kind) in [
        (json!([1, 2]), DocumentKind::Array),
        (json!("text"), DocumentKind::String),
        (json!(null), DocumentKind::Null),
    ] {
        assert_eq!(render(&tree, &data), Err(RenderError::InvalidRoot { kind }));
    }
}

#[test]
fn error_messages_name_the_offender() {
    let err = RenderError::UnsupportedSectionValue {
        name: "s".to_string(),
        kind: DocumentKind::Number,
    };
    assert_eq!(
        err.to_string(),
        "section \"s\" is bound to a number value; sections gate on booleans and arrays"
    );
    let err = RenderError::InvalidRoot {
        kind: DocumentKind::Array,
    };
    assert_eq!(
        err.to_string(),
        "root data value is array; templates render against an object"
    );
}

// === Reuse ===

#[test]
fn one_tree_serves_many_data_values() {
    let tree = root(vec![content("hi "), var("name")]);
    let first: Value = json!({"name": "a"});
    let second: Value = json!({"name": "b"});
    assert_eq!(render(&tree, &first).unwrap(), "hi a");
    assert_eq!(render(&tree, &second).unwrap(), "hi b");
    assert_eq!(render(&tree, &first).unwrap(), "hi a");
}

#[test]
fn empty_tree_renders_empty() {
    assert_eq!(render(&root(vec![]), &json!({"a": 1})).unwrap(), "");
}
