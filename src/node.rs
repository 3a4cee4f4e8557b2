//! The owned markup tree the converter walks.
//!
//! Trees are usually copied out of a live document through [`crate::load`],
//! but can just as well be built by hand.

/// A markup tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
	/// Comments, processing instructions and anything else that isn't rebuilt.
	Other,
}

/// An element with its attributes and child nodes, both in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// The tag name as reported by the parser (HTML parsers report it upper-case).
	pub tag: String,
	pub attributes: Vec<Attribute>,
	pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub value: String,
}

impl Node {
	#[must_use]
	pub fn element(tag: impl Into<String>) -> Element {
		Element::new(tag)
	}

	#[must_use]
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// The concatenated data of all descendant text nodes, like [***textContent***](https://developer.mozilla.org/en-US/docs/Web/API/Node/textContent).
	#[must_use]
	pub fn text_content(&self) -> String {
		let mut text = String::new();
		self.collect_text(&mut text);
		text
	}

	fn collect_text(&self, text: &mut String) {
		match self {
			Node::Element(element) => element.children.iter().for_each(|child| child.collect_text(text)),
			Node::Text(data) => text.push_str(data),
			Node::Other => (),
		}
	}
}

impl Element {
	#[must_use]
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.push(Attribute {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	#[must_use]
	pub fn with_child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// The value of the first attribute called `name`, if there is one.
	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|attribute| attribute.name == name).map(|attribute| attribute.value.as_str())
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}
