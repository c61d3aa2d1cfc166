use aotui_core::attrs::Attributes;
use aotui_core::markup;
use aotui_core::node::{Element, Node, TreeBuilder};
use aotui_encoder::*;
use serde::Serialize;
use serde::ser::{Error as _, SerializeStruct};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn element(node: &Node) -> &Element {
    node.as_element().expect("expected an element node")
}

fn attr_pairs(node: &Node) -> Vec<(String, String)> {
    element(node)
        .attributes
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[test]
fn test_view_name_then_extras_then_children() {
    let node = view(
        ViewProps::new("Conversations")
            .attr("id", "main")
            .attr("lang", "en"),
        vec![Node::text("body")],
    );
    let el = element(&node);
    assert_eq!(el.tag, "div");
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("view", "Conversations"), ("id", "main"), ("lang", "en")])
    );
    assert_eq!(el.children, vec![Node::text("body")]);
}

#[test]
fn test_view_extra_named_view_replaces_in_place() {
    let node = view(
        ViewProps::new("Inbox").attr("id", "main").attr("view", "Archive"),
        Vec::new(),
    );
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("view", "Archive"), ("id", "main")])
    );
}

#[test]
fn test_view_is_idempotent() {
    let props = ViewProps::new("Inbox").attr("data-x", 1);
    let a = view(props.clone(), vec![Node::text("x")]);
    let b = view(props, vec![Node::text("x")]);
    assert_eq!(a, b);
    assert_eq!(markup::to_markup(&a), markup::to_markup(&b));
}

#[test]
fn test_view_empty_name_passes_through() {
    let node = view(ViewProps::new(""), Vec::new());
    assert_eq!(element(&node).attr("view"), Some(""));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn test_list_default_tag_and_attributes() {
    let node = list(ListProps::new("messages", "message"), Vec::new());
    assert_eq!(element(&node).tag, "ul");
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("list", "messages"), ("item-type", "message")])
    );
}

#[test]
fn test_list_attribute_order_with_extras() {
    let node = list(
        ListProps::new("tasks", "task")
            .attr("aria-label", "Tasks")
            .attr("class", "compact"),
        Vec::new(),
    );
    let keys: Vec<String> = attr_pairs(&node).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["list", "item-type", "aria-label", "class"]);
}

#[test]
fn test_list_extra_vocabulary_names_replace_in_place() {
    let node = list(
        ListProps::new("tasks", "task")
            .attr("class", "compact")
            .attr("item-type", "todo")
            .attr("list", "chores"),
        Vec::new(),
    );
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("list", "chores"), ("item-type", "todo"), ("class", "compact")])
    );
}

#[test]
fn test_list_render_as_override() {
    let ordered = list(ListProps::new("steps", "step").render_as("ol"), Vec::new());
    assert_eq!(element(&ordered).tag, "ol");

    let empty = list(ListProps::new("steps", "step").render_as(""), Vec::new());
    assert_eq!(element(&empty).tag, "ul");
}

#[test]
fn test_list_render_as_not_leaked_into_attributes() {
    let node = list(ListProps::new("steps", "step").render_as("ol"), Vec::new());
    assert!(!element(&node).attributes.contains_key("as"));
}

#[test]
fn test_list_uses_configured_default_tag() {
    let encoder = SemanticEncoder::new().with_settings(EncoderSettings {
        collection_tag: "ol".to_string(),
        ..EncoderSettings::default()
    });
    let node = encoder.list(ListProps::new("steps", "step"), Vec::new());
    assert_eq!(element(&node).tag, "ol");
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct Message {
    text: &'static str,
    id: u32,
}

#[test]
fn test_item_data_is_canonical_json() {
    let node = item(
        ItemProps::new().data(Message { text: "hi", id: 1 }),
        Vec::new(),
    )
    .unwrap();
    assert_eq!(element(&node).tag, "li");
    assert_eq!(
        element(&node).attr("data-value"),
        Some(r#"{"id":1,"text":"hi"}"#)
    );
}

#[test]
fn test_item_without_data_has_no_data_value() {
    let node = item(ItemProps::new().attr("class", "row"), Vec::new()).unwrap();
    assert!(!element(&node).attributes.contains_key("data-value"));
    assert_eq!(attr_pairs(&node), pairs(&[("class", "row")]));
}

#[test]
fn test_item_falsy_payloads_are_still_present() {
    for payload in [json!(0), json!(""), json!(false), json!(null)] {
        let expected = payload.to_string();
        let node = item(ItemProps::new().data(payload), Vec::new()).unwrap();
        assert_eq!(element(&node).attr("data-value"), Some(expected.as_str()));
    }
}

#[test]
fn test_item_data_value_roundtrips() {
    let payloads = vec![
        json!({"id": 7, "author": {"name": "ada", "roles": ["admin", "dev"]}, "read": false}),
        json!([1, 2.5, "three", null, {"nested": [true]}]),
        json!("plain string with \"quotes\" and\nnewline"),
        json!(-42),
    ];
    for payload in payloads {
        let node = item(ItemProps::new().data(&payload), Vec::new()).unwrap();
        let text = element(&node).attr("data-value").unwrap();
        let back: Value = serde_json::from_str(text).unwrap();
        assert_eq!(back, payload);
    }
}

#[test]
fn test_item_data_is_deterministic_for_maps() {
    let mut a: HashMap<String, i32> = HashMap::new();
    let mut b: HashMap<String, i32> = HashMap::new();
    for i in 0..32 {
        a.insert(format!("k{}", i), i);
    }
    for i in (0..32).rev() {
        b.insert(format!("k{}", i), i);
    }
    let na = item(ItemProps::new().data(&a), Vec::new()).unwrap();
    let nb = item(ItemProps::new().data(&b), Vec::new()).unwrap();
    assert_eq!(na, nb);
}

#[test]
fn test_item_data_precedes_extras_and_key_is_separate() {
    let node = item(
        ItemProps::new()
            .key("msg_1")
            .data(json!({"id": 1}))
            .attr("class", "unread"),
        Vec::new(),
    )
    .unwrap();
    let el = element(&node);
    assert_eq!(el.key.as_deref(), Some("msg_1"));
    assert!(!el.attributes.contains_key("key"));
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("data-value", r#"{"id":1}"#), ("class", "unread")])
    );
}

#[test]
fn test_item_extra_data_value_overrides_payload() {
    let node = item(
        ItemProps::new()
            .data(json!({"id": 1}))
            .attr("data-value", "manual"),
        Vec::new(),
    )
    .unwrap();
    assert_eq!(attr_pairs(&node), pairs(&[("data-value", "manual")]));
}

/// A linked node whose `next` may point back at itself.
struct Link {
    label: &'static str,
    next: RefCell<Option<Rc<Link>>>,
}

impl Serialize for Link {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Link", 2)?;
        st.serialize_field("label", self.label)?;
        match &*self.next.borrow() {
            Some(next) => st.serialize_field("next", next.as_ref())?,
            None => st.serialize_field("next", &())?,
        }
        st.end()
    }
}

#[test]
fn test_item_self_reference_fails() {
    let link = Rc::new(Link {
        label: "loop",
        next: RefCell::new(None),
    });
    *link.next.borrow_mut() = Some(Rc::clone(&link));

    let result = item(ItemProps::new().data(link.as_ref()), Vec::new());
    assert!(matches!(
        result,
        Err(SerializationError::DepthExceeded { .. })
    ));

    // Break the cycle so the Rc is freed.
    *link.next.borrow_mut() = None;
}

#[test]
fn test_item_acyclic_link_serializes() {
    let tail = Rc::new(Link {
        label: "tail",
        next: RefCell::new(None),
    });
    let head = Link {
        label: "head",
        next: RefCell::new(Some(tail)),
    };
    let node = item(ItemProps::new().data(&head), Vec::new()).unwrap();
    assert_eq!(
        element(&node).attr("data-value"),
        Some(r#"{"label":"head","next":{"label":"tail","next":null}}"#)
    );
}

/// Stands in for a value with no data representation, like a callback.
struct Callback;

impl Serialize for Callback {
    fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("functions cannot be serialized"))
    }
}

#[derive(Serialize)]
struct WithCallback {
    id: u32,
    on_click: Callback,
}

#[test]
fn test_item_unsupported_value_fails() {
    let err = item(
        ItemProps::new().data(WithCallback {
            id: 1,
            on_click: Callback,
        }),
        Vec::new(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        SerializationError::Unsupported("functions cannot be serialized".to_string())
    );
}

#[test]
fn test_item_respects_configured_depth() {
    let encoder = SemanticEncoder::new().with_settings(EncoderSettings {
        max_depth: 2,
        ..EncoderSettings::default()
    });
    let shallow = encoder.item(ItemProps::new().data(json!({"a": {"b": 1}})), Vec::new());
    assert!(shallow.is_ok());
    let deep = encoder.item(
        ItemProps::new().data(json!({"a": {"b": {"c": 1}}})),
        Vec::new(),
    );
    assert_eq!(
        deep.unwrap_err(),
        SerializationError::DepthExceeded { limit: 2 }
    );
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

#[test]
fn test_operation_default_tag() {
    let node = operation(OperationProps::new("send_message"), Vec::new());
    assert_eq!(element(&node).tag, "button");
    assert_eq!(attr_pairs(&node), pairs(&[("operation", "send_message")]));
}

#[test]
fn test_operation_override_extras_and_children() {
    let child = param(ParamProps::new("content", "string"));
    let node = operation(
        OperationProps::new("delete")
            .render_as("div")
            .attr("title", "Delete"),
        vec![child.clone()],
    );
    let el = element(&node);
    assert_eq!(el.tag, "div");
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("operation", "delete"), ("title", "Delete")])
    );
    assert_eq!(el.children, vec![child]);
}

// ---------------------------------------------------------------------------
// Param
// ---------------------------------------------------------------------------

#[test]
fn test_param_required_true() {
    let node = param(ParamProps::new("content", "string").required(true));
    let el = element(&node);
    assert_eq!(el.tag, "param");
    assert!(el.children.is_empty());
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("name", "content"), ("type", "string"), ("required", "true")])
    );
}

#[test]
fn test_param_required_false_is_emitted() {
    let node = param(ParamProps::new("silent", "boolean").required(false));
    assert_eq!(element(&node).attr("required"), Some("false"));
}

#[test]
fn test_param_absent_fields_emit_nothing() {
    let node = param(ParamProps::new("content", "string"));
    assert_eq!(
        attr_pairs(&node),
        pairs(&[("name", "content"), ("type", "string")])
    );
}

#[test]
fn test_param_default_value_verbatim() {
    let text = param(ParamProps::new("tone", "string").default_value("friendly"));
    assert_eq!(element(&text).attr("default"), Some("friendly"));
    assert!(!element(&text).attributes.contains_key("defaultValue"));

    let number = param(ParamProps::new("limit", "number").default_value(20));
    assert_eq!(element(&number).attr("default"), Some("20"));

    let flag = param(ParamProps::new("notify", "boolean").default_value(false));
    assert_eq!(element(&flag).attr("default"), Some("false"));
}

#[test]
fn test_param_default_number_forms_kept() {
    let wide = param(ParamProps::new("id", "number").default_value(u64::MAX));
    assert_eq!(element(&wide).attr("default"), Some("18446744073709551615"));

    let count = param(ParamProps::new("count", "number").default_value(5usize));
    assert_eq!(element(&count).attr("default"), Some("5"));

    let sep = param(ParamProps::new("sep", "string").default_value(';'));
    assert_eq!(element(&sep).attr("default"), Some(";"));
}

#[test]
fn test_param_emission_order() {
    let node = param(
        ParamProps::new("limit", "number")
            .attr("min", 1)
            .required(false)
            .default_value(10),
    );
    assert_eq!(
        attr_pairs(&node),
        pairs(&[
            ("name", "limit"),
            ("type", "number"),
            ("min", "1"),
            ("required", "false"),
            ("default", "10"),
        ])
    );
}

#[test]
fn test_param_explicit_required_wins_over_extra() {
    let node = param(
        ParamProps::new("q", "string")
            .attr("required", "maybe")
            .required(true),
    );
    assert_eq!(element(&node).attr("required"), Some("true"));
}

// ---------------------------------------------------------------------------
// Custom tree builders
// ---------------------------------------------------------------------------

/// Writes markup straight into strings.
struct StringBuilder;

impl TreeBuilder for StringBuilder {
    type Children = String;
    type Node = String;

    fn build(&self, tag: &str, key: Option<&str>, attributes: Attributes, children: String) -> String {
        let mut out = format!("<{}", tag);
        if let Some(key) = key {
            out.push_str(&format!(" #{}", key));
        }
        for (k, v) in attributes.iter() {
            out.push_str(&format!(" {}={}", k, v));
        }
        out.push('>');
        out.push_str(&children);
        out.push_str(&format!("</{}>", tag));
        out
    }
}

#[test]
fn test_custom_builder_receives_vocabulary() {
    let encoder = SemanticEncoder::with_builder(StringBuilder);
    let params = encoder.param(ParamProps::new("content", "string").required(true));
    let op = encoder.operation(OperationProps::new("send"), params);
    assert_eq!(
        op,
        "<button operation=send><param name=content type=string required=true></param></button>"
    );

    let li = encoder
        .item(ItemProps::new().key("m1").data(json!([1])), String::new())
        .unwrap();
    assert_eq!(li, "<li #m1 data-value=[1]></li>");
}

#[test]
fn test_encoder_usable_across_threads() {
    let encoder = std::sync::Arc::new(SemanticEncoder::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let encoder = std::sync::Arc::clone(&encoder);
            std::thread::spawn(move || {
                let node = encoder
                    .item(ItemProps::new().data(json!({"b": i, "a": 0})), Vec::new())
                    .unwrap();
                markup::to_markup(&node)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let out = handle.join().unwrap();
        assert!(out.contains(&format!("{{&quot;a&quot;:0,&quot;b&quot;:{}}}", i)));
    }
}
