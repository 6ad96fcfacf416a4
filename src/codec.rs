//! Node codec: converts content nodes to and from their JSON wire shape
//!
//! Wire shape of a node sequence:
//!
//! ```text
//! [ "text" | { "tag": string, "attrs"?: {string: string}, "children"?: [node, ...] }, ... ]
//! ```
//!
//! Text nodes become bare strings. Elements become objects whose `attrs`
//! and `children` keys are left out entirely when empty. Decoding picks the
//! variant from the JSON shape and fills omitted keys with empty values, so
//! callers never see a difference between "omitted" and "empty".

use crate::error::{Result, TelegraphError};
use crate::node::{Element, Node};
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Root label used in decode error positions
const ROOT: &str = "content";

/// Free stack below which recursive walks move to a fresh segment
const RED_ZONE: usize = 64 * 1024;
/// Size of each extra stack segment
const STACK_SEGMENT: usize = 1024 * 1024;

/// Encode a node sequence as a JSON array
///
/// # Example
///
/// ```
/// use telegraph_rs::{codec, Element, Node};
/// use serde_json::json;
///
/// let nodes: Vec<Node> = vec![Element::new("p").child("hello world").into()];
/// assert_eq!(
///     codec::encode_nodes(&nodes),
///     json!([{"tag": "p", "children": ["hello world"]}])
/// );
/// ```
pub fn encode_nodes(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(encode_node).collect())
}

/// Encode a single node
pub fn encode_node(node: &Node) -> Value {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || encode_node_inner(node))
}

fn encode_node_inner(node: &Node) -> Value {
    match node {
        Node::Text(text) => Value::String(text.clone()),
        Node::Element(element) => {
            let mut object = Map::new();
            object.insert("tag".to_string(), Value::String(element.tag.clone()));
            if !element.attrs.is_empty() {
                let attrs = element
                    .attrs
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                object.insert("attrs".to_string(), Value::Object(attrs));
            }
            if !element.children.is_empty() {
                object.insert("children".to_string(), encode_nodes(&element.children));
            }
            Value::Object(object)
        }
    }
}

/// Encode a node sequence as the compact JSON text sent in the `content` parameter
pub fn encode_content(nodes: &[Node]) -> Result<String> {
    serde_json::to_string(nodes).map_err(|e| TelegraphError::Encode(e.to_string()))
}

/// Decode a JSON array into a node sequence
///
/// Fails on the first position that is not a string or an element object.
pub fn decode_nodes(value: &Value) -> Result<Vec<Node>> {
    decode_sequence(value, ROOT).map_err(TelegraphError::Decode)
}

/// Decode a single node
pub fn decode_node(value: &Value) -> Result<Node> {
    decode_at(value, ROOT).map_err(TelegraphError::Decode)
}

/// Decode the compact JSON text form of a node sequence
pub fn decode_content(text: &str) -> Result<Vec<Node>> {
    let value: Value =
        from_json_slice(text.as_bytes()).map_err(|e| TelegraphError::Decode(e.to_string()))?;
    decode_nodes(&value)
}

/// Parse JSON without serde_json's nesting limit
///
/// Node trees may nest to any depth, so the parser grows the stack on
/// demand instead of failing after 128 levels.
pub(crate) fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an optional page body, reporting positions from `content`
pub(crate) fn deserialize_content<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Vec<Node>>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_sequence(&value, ROOT)
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn decode_sequence(value: &Value, path: &str) -> std::result::Result<Vec<Node>, String> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(format!(
                "{path}: expected array of nodes, found {}",
                kind(other)
            ));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_at(item, &format!("{path}[{i}]")))
        .collect()
}

fn decode_at(value: &Value, path: &str) -> std::result::Result<Node, String> {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || decode_element(value, path))
}

fn decode_element(value: &Value, path: &str) -> std::result::Result<Node, String> {
    let object = match value {
        Value::String(text) => return Ok(Node::Text(text.clone())),
        Value::Object(object) => object,
        other => {
            return Err(format!(
                "{path}: expected string or element object, found {}",
                kind(other)
            ));
        }
    };

    let tag = match object.get("tag") {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => return Err(format!("{path}.tag: expected string, found {}", kind(other))),
        None => return Err(format!("{path}: missing required field \"tag\"")),
    };

    let attrs = match object.get("attrs") {
        None | Some(Value::Null) => BTreeMap::new(),
        Some(Value::Object(attrs)) => {
            let mut out = BTreeMap::new();
            for (name, value) in attrs {
                match value {
                    Value::String(v) => {
                        out.insert(name.clone(), v.clone());
                    }
                    other => {
                        return Err(format!(
                            "{path}.attrs.{name}: expected string, found {}",
                            kind(other)
                        ));
                    }
                }
            }
            out
        }
        Some(other) => {
            return Err(format!(
                "{path}.attrs: expected object, found {}",
                kind(other)
            ));
        }
    };

    let children = match object.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(children) => decode_sequence(children, &format!("{path}.children"))?,
    };

    Ok(Node::Element(Element {
        tag,
        attrs,
        children,
    }))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => serializer.serialize_str(text),
            Node::Element(element) => element.serialize(serializer),
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.serialize_fields(serializer))
    }
}

impl Element {
    fn serialize_fields<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = 1 + usize::from(!self.attrs.is_empty()) + usize::from(!self.children.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("tag", &self.tag)?;
        if !self.attrs.is_empty() {
            map.serialize_entry("attrs", &self.attrs)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry("children", &self.children)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_at(&value, "node").map_err(D::Error::custom)
    }
}
