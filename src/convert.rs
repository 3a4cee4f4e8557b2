//! The tree walk that turns [`Node`]s into [`Statement`]s.

use crate::{
	attribute::AttributeConverterChain,
	error::Error,
	node::{Element, Node},
	statement::{render, Statement},
};
use hashbrown::HashSet;
use tracing::{debug, error, instrument, trace};

/// Identifier of the wrapper created by [`ElementConverter::convert_with_fragment`].
pub const FRAGMENT_NAME: &str = "fragment";

/// Elements with a ***name*** property, i.e. those whose `name` attribute is used for their identifier.
const NAMED_ELEMENTS: &[&str] = &[
	"a", "button", "embed", "fieldset", "form", "frame", "iframe", "img", "input", "map", "meta", "object", "output", "param", "select", "slot", "textarea",
];

/// Whitespace as understood by JavaScript's `trim()`.
fn is_js_whitespace(c: char) -> bool {
	c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
	/// Skip whitespace-only text and trim all other text before emitting it.
	pub ignore_whitespaces: bool,
}
impl Settings {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn ignore_whitespaces(mut self, ignore_whitespaces: bool) -> Self {
		self.ignore_whitespaces = ignore_whitespaces;
		self
	}

	/// The text to emit for `text`, or [`None`] if it should be skipped.
	fn effective_text<'a>(&self, text: &'a str) -> Option<&'a str> {
		let text = if self.ignore_whitespaces { text.trim_matches(is_js_whitespace) } else { text };
		if text.is_empty() {
			None
		} else {
			Some(text)
		}
	}
}

/// One conversion session.
///
/// Identifiers stay reserved for the lifetime of the instance, so converting unrelated trees with the same converter
/// makes them avoid each other's names. Create a new converter for an independent namespace.
#[derive(Debug)]
pub struct ElementConverter {
	settings: Settings,
	attribute_converters: AttributeConverterChain,
	used_names: HashSet<String>,
	/// Names added by the running conversion, released again if it fails.
	claimed: Vec<String>,
}

impl Default for ElementConverter {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}

impl ElementConverter {
	#[must_use]
	pub fn new(settings: Settings) -> Self {
		Self {
			settings,
			attribute_converters: AttributeConverterChain::default(),
			used_names: HashSet::new(),
			claimed: Vec::new(),
		}
	}

	#[must_use]
	pub fn settings(&self) -> Settings {
		self.settings
	}

	#[must_use]
	pub fn used_names(&self) -> &HashSet<String> {
		&self.used_names
	}

	/// Marks `name` as taken, e.g. for an identifier declared by surrounding code.
	///
	/// Returns `false` if it already was.
	pub fn reserve_name(&mut self, name: impl Into<String>) -> bool {
		self.used_names.insert(name.into())
	}

	/// Converts `node` and its descendants.
	///
	/// With `append_to`, the result attaches the node to that (already declared) identifier.
	/// `name` overrides the identifier that would otherwise be derived from the node.
	///
	/// # Errors
	///
	/// [`Error::NameResolution`] if an element in the subtree yields no identifier.
	/// The session is left as it was before the call in that case.
	#[instrument(skip(self, node))]
	pub fn convert(&mut self, node: &Node, append_to: Option<&str>, name: Option<&str>) -> Result<Vec<Statement>, Error> {
		self.atomically(|this| this.convert_node(node, append_to, name))
	}

	/// Converts each of `roots` in order, all appended to `append_to` if given.
	///
	/// # Errors
	///
	/// [`Error::NameResolution`] as for [`convert`](`ElementConverter::convert`).
	/// No statements are returned for any root in that case.
	#[instrument(skip(self, roots), fields(roots = roots.len()))]
	pub fn convert_forest(&mut self, roots: &[Node], append_to: Option<&str>) -> Result<Vec<Statement>, Error> {
		self.atomically(|this| this.convert_all(roots, append_to, Vec::new()))
	}

	/// Like [`convert_forest`](`ElementConverter::convert_forest`), but first declares a ***DocumentFragment*** that all roots are appended to.
	///
	/// # Errors
	///
	/// [`Error::NameResolution`] as for [`convert`](`ElementConverter::convert`).
	#[instrument(skip(self, roots), fields(roots = roots.len()))]
	pub fn convert_with_fragment(&mut self, roots: &[Node]) -> Result<Vec<Statement>, Error> {
		self.atomically(|this| {
			let fragment = this.unique_name(FRAGMENT_NAME);
			this.claim(fragment.clone());
			let declaration = Statement::DeclareFragment { name: fragment.clone() };
			this.convert_all(roots, Some(&fragment), vec![declaration])
		})
	}

	/// Runs `conversion`, releasing every name it claimed if it fails.
	fn atomically<T>(&mut self, conversion: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
		self.claimed.clear();
		let result = conversion(self);
		if result.is_err() {
			debug!(released = self.claimed.len(), "Conversion failed. Releasing claimed names.");
			for name in self.claimed.drain(..) {
				self.used_names.remove(&name);
			}
		}
		self.claimed.clear();
		result
	}

	fn claim(&mut self, name: String) {
		if self.used_names.insert(name.clone()) {
			self.claimed.push(name);
		}
	}

	fn convert_all(&mut self, roots: &[Node], append_to: Option<&str>, mut statements: Vec<Statement>) -> Result<Vec<Statement>, Error> {
		for root in roots {
			statements.extend(self.convert_node(root, append_to, None)?);
		}
		Ok(statements)
	}

	#[instrument(level = "trace", skip(self, node))]
	fn convert_node(&mut self, node: &Node, append_to: Option<&str>, name: Option<&str>) -> Result<Vec<Statement>, Error> {
		match node {
			Node::Element(element) => self.convert_element(node, element, append_to, name),
			Node::Text(text) => self.convert_text(node, text, append_to, name),
			Node::Other => Ok(vec![]),
		}
	}

	fn convert_text(&mut self, node: &Node, text: &str, append_to: Option<&str>, name: Option<&str>) -> Result<Vec<Statement>, Error> {
		let text = match self.settings.effective_text(text) {
			Some(text) => text,
			None => {
				trace!("Skipping empty text node.");
				return Ok(vec![]);
			}
		};
		trace_text("Converting text node.", text);

		if let Some(parent) = append_to {
			return Ok(vec![Statement::AppendNewText {
				parent: parent.to_owned(),
				text: text.to_owned(),
			}]);
		}

		let name = self.claim_name(node, name)?;
		Ok(vec![Statement::DeclareText { name, text: text.to_owned() }])
	}

	fn convert_element(&mut self, node: &Node, element: &Element, append_to: Option<&str>, name: Option<&str>) -> Result<Vec<Statement>, Error> {
		let name = match name {
			Some(name) => name.to_owned(),
			None => self.get_valid_name(node)?,
		};
		let tag = element.tag.to_lowercase();

		if let Some(parent) = append_to {
			if element.attributes.is_empty() && element.children.is_empty() {
				trace!(%tag, parent, "Appending empty element inline.");
				return Ok(vec![Statement::AppendNewElement { parent: parent.to_owned(), tag }]);
			}
		}

		self.claim(name.clone());
		trace!(%tag, %name, "Declaring element.");
		let mut statements = vec![Statement::DeclareElement { name: name.clone(), tag }];

		for attribute in &element.attributes {
			statements.extend(self.attribute_converters.convert(&name, &attribute.name, &attribute.value));
		}

		if let Some(parent) = append_to {
			statements.push(Statement::Append {
				parent: parent.to_owned(),
				child: name.clone(),
			});
		}

		if let [Node::Text(_)] = element.children.as_slice() {
			let text_content = node.text_content();
			if let Some(text) = self.settings.effective_text(&text_content) {
				trace_text("Setting text content.", text);
				statements.push(Statement::SetTextContent { target: name, text: text.to_owned() });
			}
			return Ok(statements);
		}

		for child in &element.children {
			statements.extend(self.convert_node(child, Some(&name), None)?);
		}
		Ok(statements)
	}

	/// Uses `name` or derives one from `node`, and marks it as used.
	fn claim_name(&mut self, node: &Node, name: Option<&str>) -> Result<String, Error> {
		let name = match name {
			Some(name) => name.to_owned(),
			None => self.get_valid_name(node)?,
		};
		self.claim(name.clone());
		Ok(name)
	}

	/// Derives an identifier for `node` that isn't used yet in this session, without reserving it.
	///
	/// Elements are named after their `name` attribute (form controls and other elements with a ***name*** property only),
	/// then their `id`, then their tag, whichever normalizes first.
	///
	/// # Errors
	///
	/// [`Error::NameResolution`] if none of these candidates normalizes to an identifier.
	pub fn get_valid_name(&self, node: &Node) -> Result<String, Error> {
		let base = match node {
			Node::Element(element) => [form_name(element), element.attribute("id"), Some(element.tag.as_str())]
				.iter()
				.flatten()
				.find_map(|candidate| normalize_node_name(candidate)),
			Node::Text(_) => normalize_node_name("#text"),
			Node::Other => normalize_node_name("#comment"),
		};

		match base {
			Some(base) => Ok(self.unique_name(&base)),
			None => {
				let tag = match node {
					Node::Element(element) => element.tag.clone(),
					Node::Text(_) => "#text".to_owned(),
					Node::Other => "#comment".to_owned(),
				};
				error!(%tag, "Unable to find a valid name.");
				Err(Error::NameResolution { tag })
			}
		}
	}

	/// `base`, or `base` followed by the smallest positive number that isn't used yet.
	fn unique_name(&self, base: &str) -> String {
		if !self.used_names.contains(base) {
			return base.to_owned();
		}

		let mut i = 1_usize;
		loop {
			let candidate = format!("{}{}", base, i);
			if !self.used_names.contains(&candidate) {
				debug!(base, %candidate, "Resolved name collision.");
				return candidate;
			}
			i += 1;
		}
	}
}

fn form_name(element: &Element) -> Option<&str> {
	let tag = element.tag.to_lowercase();
	if NAMED_ELEMENTS.contains(&tag.as_str()) {
		element.attribute("name")
	} else {
		None
	}
}

/// Turns `name` into a camel-case identifier, or [`None`] if nothing usable remains.
///
/// All-caps input (like HTML tag names) is lowercased first. Anything but ASCII word characters and `-` is dropped,
/// and `-x`/`_x` becomes `X`. The first character is always lowercase.
#[must_use]
pub fn normalize_node_name(name: &str) -> Option<String> {
	let lowercase;
	let name = if name.bytes().any(|b| b.is_ascii_lowercase()) {
		name
	} else {
		lowercase = name.to_lowercase();
		&lowercase
	};

	let mut normalized = String::with_capacity(name.len());
	let mut chars = name.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-');
	while let Some(c) = chars.next() {
		match c {
			'-' | '_' => match chars.next() {
				Some(next) => normalized.extend(next.to_uppercase()),
				None => normalized.push(c),
			},
			c => normalized.push(c),
		}
	}

	let mut chars = normalized.chars();
	let first = chars.next()?;
	Some(first.to_lowercase().chain(chars).collect())
}

/// Converts `roots` with a fresh converter and renders the result as a script.
///
/// # Errors
///
/// [`Error::NameResolution`] if an element yields no identifier.
pub fn convert_nodes(roots: &[Node], settings: Settings, wrap_in_fragment: bool) -> Result<String, Error> {
	let mut converter = ElementConverter::new(settings);
	let statements = if wrap_in_fragment {
		converter.convert_with_fragment(roots)?
	} else {
		converter.convert_forest(roots, None)?
	};
	Ok(render(&statements))
}

#[cfg(feature = "dangerous-logging")]
fn trace_text(message: &str, text: &str) {
	trace!(text, "{}", message);
}

#[cfg(not(feature = "dangerous-logging"))]
fn trace_text(message: &str, text: &str) {
	trace!(len = text.len(), "{}", message);
}
