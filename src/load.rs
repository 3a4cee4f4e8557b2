//! Copies live DOM trees into owned [`Node`]s, using the browser's own HTML parser.

use crate::node::{Attribute, Element, Node};
use tracing::{instrument, trace};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Attr, DomParser, Element as wElement, NamedNodeMap, Node as wNode, NodeList, SupportedType, Text};

pub fn load_node(node: &wNode) -> Node {
	if let Some(element) = node.dyn_ref::<wElement>() {
		Node::Element(load_element(element))
	} else if let Some(text) = node.dyn_ref::<Text>() {
		Node::Text(text.data())
	} else {
		trace!(node_type = node.node_type(), "Loading unconverted node.");
		Node::Other
	}
}

pub fn load_child_nodes(child_nodes: &NodeList) -> Vec<Node> {
	(0..child_nodes.length()).filter_map(|i| child_nodes.item(i)).map(|child| load_node(&child)).collect()
}

pub fn load_element(element: &wElement) -> Element {
	let node: &wNode = element.as_ref();
	Element {
		tag: element.tag_name(),
		attributes: load_attributes(&element.attributes()),
		children: load_child_nodes(&node.child_nodes()),
	}
}

pub fn load_attributes(attributes: &NamedNodeMap) -> Vec<Attribute> {
	(0..attributes.length()).filter_map(|i| attributes.item(i)).map(|attribute| load_attribute(&attribute)).collect()
}

pub fn load_attribute(attribute: &Attr) -> Attribute {
	Attribute {
		name: attribute.name(),
		value: attribute.value(),
	}
}

/// Parses `markup` as the content of an HTML document's body and loads the body's element children.
///
/// Text directly inside the body is not included.
///
/// # Errors
///
/// Iff the browser fails to create a [`DomParser`] or to parse the document.
#[instrument(skip(markup), fields(len = markup.len()))]
pub fn parse_body_fragment(markup: &str) -> Result<Vec<Node>, JsValue> {
	let parser = DomParser::new()?;
	let document = parser.parse_from_string(&format!("<!DOCTYPE html><html><body>{}</body></html>", markup), SupportedType::TextHtml)?;
	let body = document.body().ok_or_else(|| JsValue::from_str("dom-codegen: Parsed document has no body."))?;
	let children = body.children();
	Ok((0..children.length()).filter_map(|i| children.item(i)).map(|element| Node::Element(load_element(&element))).collect())
}
