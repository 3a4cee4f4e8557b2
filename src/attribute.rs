//! Strategies that turn one markup attribute into statements on an element reference.
//!
//! [`AttributeConverterChain::default`] asks its converters in priority order and uses the first one that accepts
//! the attribute name. [`GenericAttributeConverter`] accepts everything and always comes last.

use crate::statement::{PropertyValue, Statement};

pub trait AttributeConverter {
	fn can_convert(&self, name: &str) -> bool;

	/// Statements setting attribute `name` to `value` on the element bound to `target`.
	fn apply(&self, target: &str, name: &str, value: &str) -> Vec<Statement>;
}

/// Attributes whose DOM property has a different name.
#[derive(Debug, Default, Clone, Copy)]
pub struct MappedPropertyConverter;
impl MappedPropertyConverter {
	const MAPPED_PROPERTIES: &'static [(&'static str, &'static str)] = &[("for", "htmlFor")];

	fn property(name: &str) -> Option<&'static str> {
		Self::MAPPED_PROPERTIES.iter().find(|(attribute, _)| *attribute == name).map(|(_, property)| *property)
	}
}
impl AttributeConverter for MappedPropertyConverter {
	fn can_convert(&self, name: &str) -> bool {
		Self::property(name).is_some()
	}

	fn apply(&self, target: &str, name: &str, value: &str) -> Vec<Statement> {
		Self::property(name)
			.map(|property| Statement::SetProperty {
				target: target.to_owned(),
				property: property.to_owned(),
				value: PropertyValue::String(value.to_owned()),
			})
			.into_iter()
			.collect()
	}
}

/// Attributes reflected by a string property of the same name.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringPropertyConverter;
impl StringPropertyConverter {
	const PROPERTIES: &'static [&'static str] = &["name", "value", "id", "lang", "style", "title", "label", "type"];
}
impl AttributeConverter for StringPropertyConverter {
	fn can_convert(&self, name: &str) -> bool {
		Self::PROPERTIES.contains(&name)
	}

	fn apply(&self, target: &str, name: &str, value: &str) -> Vec<Statement> {
		vec![Statement::SetProperty {
			target: target.to_owned(),
			property: name.to_owned(),
			value: PropertyValue::String(value.to_owned()),
		}]
	}
}

/// Boolean attributes. Presence means `true`, so the value is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanPropertyConverter;
impl BooleanPropertyConverter {
	const PROPERTIES: &'static [&'static str] = &["checked", "disabled", "selected", "readonly"];
}
impl AttributeConverter for BooleanPropertyConverter {
	fn can_convert(&self, name: &str) -> bool {
		Self::PROPERTIES.contains(&name)
	}

	fn apply(&self, target: &str, name: &str, _value: &str) -> Vec<Statement> {
		vec![Statement::SetProperty {
			target: target.to_owned(),
			property: name.to_owned(),
			value: PropertyValue::Bool(true),
		}]
	}
}

/// `class`, added token by token through ***classList***.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassListConverter;
impl AttributeConverter for ClassListConverter {
	fn can_convert(&self, name: &str) -> bool {
		name == "class"
	}

	fn apply(&self, target: &str, _name: &str, value: &str) -> Vec<Statement> {
		let classes: Vec<String> = value.split_whitespace().map(str::to_owned).collect();
		if classes.is_empty() {
			return vec![];
		}
		vec![Statement::AddClasses { target: target.to_owned(), classes }]
	}
}

/// Fallback: `setAttribute` with the literal name and value.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericAttributeConverter;
impl AttributeConverter for GenericAttributeConverter {
	fn can_convert(&self, _name: &str) -> bool {
		true
	}

	fn apply(&self, target: &str, name: &str, value: &str) -> Vec<Statement> {
		vec![Statement::SetAttribute {
			target: target.to_owned(),
			name: name.to_owned(),
			value: value.to_owned(),
		}]
	}
}

pub struct AttributeConverterChain {
	converters: Vec<Box<dyn AttributeConverter>>,
}

impl Default for AttributeConverterChain {
	fn default() -> Self {
		Self {
			converters: vec![
				Box::new(MappedPropertyConverter),
				Box::new(StringPropertyConverter),
				Box::new(BooleanPropertyConverter),
				Box::new(ClassListConverter),
				Box::new(GenericAttributeConverter),
			],
		}
	}
}

impl core::fmt::Debug for AttributeConverterChain {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("AttributeConverterChain").field("converters", &self.converters.len()).finish()
	}
}

impl AttributeConverterChain {
	/// The first converter that accepts `name`.
	///
	/// The chain ends with [`GenericAttributeConverter`], so there always is one.
	#[must_use]
	pub fn find(&self, name: &str) -> &dyn AttributeConverter {
		self.converters.iter().find(|converter| converter.can_convert(name)).map_or(&GenericAttributeConverter as &dyn AttributeConverter, |converter| &**converter)
	}

	/// Converts one attribute with the first matching converter.
	#[must_use]
	pub fn convert(&self, target: &str, name: &str, value: &str) -> Vec<Statement> {
		self.find(name).apply(target, name, value)
	}
}
