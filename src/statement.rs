//! Generated statements and their JavaScript rendering.

use core::fmt::{self, Display, Formatter};
use serde_json::Value;

/// One line of DOM-building code.
///
/// Identifiers are stored as given; string data is kept raw and only escaped while [rendering](`Display`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// `let name = new DocumentFragment();`
	DeclareFragment { name: String },
	/// `let name = document.createElement("tag");`
	DeclareElement { name: String, tag: String },
	/// `let name = document.createTextNode("text");`
	DeclareText { name: String, text: String },
	/// `parent.appendChild(document.createElement("tag"));`
	AppendNewElement { parent: String, tag: String },
	/// `parent.appendChild(document.createTextNode("text"));`
	AppendNewText { parent: String, text: String },
	/// `parent.appendChild(child);`
	Append { parent: String, child: String },
	/// `target.property = value;`
	SetProperty { target: String, property: String, value: PropertyValue },
	/// `target.setAttribute("name", "value");`
	SetAttribute { target: String, name: String, value: String },
	/// `target.classList.add("a", "b");`
	AddClasses { target: String, classes: Vec<String> },
	/// `target.textContent = "text";`
	SetTextContent { target: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
	String(String),
	Bool(bool),
}

impl Statement {
	/// The identifier this statement introduces, if any.
	#[must_use]
	pub fn declared_name(&self) -> Option<&str> {
		match self {
			Statement::DeclareFragment { name } | Statement::DeclareElement { name, .. } | Statement::DeclareText { name, .. } => Some(name.as_str()),
			_ => None,
		}
	}

	/// Identifiers this statement reads, which must have been declared earlier.
	#[must_use]
	pub fn referenced_names(&self) -> Vec<&str> {
		match self {
			Statement::DeclareFragment { .. } | Statement::DeclareElement { .. } | Statement::DeclareText { .. } => vec![],
			Statement::AppendNewElement { parent, .. } | Statement::AppendNewText { parent, .. } => vec![parent.as_str()],
			Statement::Append { parent, child } => vec![parent.as_str(), child.as_str()],
			Statement::SetProperty { target, .. } | Statement::SetAttribute { target, .. } | Statement::AddClasses { target, .. } | Statement::SetTextContent { target, .. } => vec![target.as_str()],
		}
	}
}

/// A JavaScript string literal.
fn literal(text: &str) -> Value {
	Value::String(text.to_owned())
}

impl Display for PropertyValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			PropertyValue::String(text) => write!(f, "{}", literal(text)),
			PropertyValue::Bool(value) => write!(f, "{}", value),
		}
	}
}

impl Display for Statement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Statement::DeclareFragment { name } => write!(f, "let {} = new DocumentFragment();", name),
			Statement::DeclareElement { name, tag } => write!(f, "let {} = document.createElement({});", name, literal(tag)),
			Statement::DeclareText { name, text } => write!(f, "let {} = document.createTextNode({});", name, literal(text)),
			Statement::AppendNewElement { parent, tag } => write!(f, "{}.appendChild(document.createElement({}));", parent, literal(tag)),
			Statement::AppendNewText { parent, text } => write!(f, "{}.appendChild(document.createTextNode({}));", parent, literal(text)),
			Statement::Append { parent, child } => write!(f, "{}.appendChild({});", parent, child),
			Statement::SetProperty { target, property, value } => write!(f, "{}.{} = {};", target, property, value),
			Statement::SetAttribute { target, name, value } => write!(f, "{}.setAttribute({}, {});", target, literal(name), literal(value)),
			Statement::AddClasses { target, classes } => {
				write!(f, "{}.classList.add(", target)?;
				for (i, class) in classes.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", literal(class))?;
				}
				f.write_str(");")
			}
			Statement::SetTextContent { target, text } => write!(f, "{}.textContent = {};", target, literal(text)),
		}
	}
}

/// Renders `statements` as a script, one statement per line.
#[must_use]
pub fn render(statements: &[Statement]) -> String {
	statements.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}
