use dom_codegen::{
	attribute::{AttributeConverter, AttributeConverterChain, BooleanPropertyConverter, ClassListConverter, GenericAttributeConverter, MappedPropertyConverter, StringPropertyConverter},
	PropertyValue, Statement,
};

fn property(target: &str, property: &str, value: PropertyValue) -> Statement {
	Statement::SetProperty {
		target: target.to_owned(),
		property: property.to_owned(),
		value,
	}
}

#[test]
fn for_maps_to_html_for() {
	let chain = AttributeConverterChain::default();
	assert_eq!(chain.convert("label", "for", "name"), vec![property("label", "htmlFor", PropertyValue::String("name".to_owned()))]);
	assert!(GenericAttributeConverter.can_convert("for"));
}

#[test]
fn string_properties() {
	let chain = AttributeConverterChain::default();
	for name in &["name", "value", "id", "lang", "style", "title", "label", "type"] {
		assert_eq!(chain.convert("e", name, "v"), vec![property("e", name, PropertyValue::String("v".to_owned()))]);
	}
}

#[test]
fn boolean_properties_ignore_value() {
	let chain = AttributeConverterChain::default();
	for name in &["checked", "disabled", "selected", "readonly"] {
		assert_eq!(chain.convert("e", name, "false"), vec![property("e", name, PropertyValue::Bool(true))]);
	}
}

#[test]
fn class_list() {
	let chain = AttributeConverterChain::default();
	assert_eq!(
		chain.convert("e", "class", "a  b"),
		vec![Statement::AddClasses {
			target: "e".to_owned(),
			classes: vec!["a".to_owned(), "b".to_owned()],
		}]
	);
	assert!(chain.convert("e", "class", "   ").is_empty());
	assert!(chain.convert("e", "class", "").is_empty());
}

#[test]
fn generic_fallback() {
	let chain = AttributeConverterChain::default();
	assert_eq!(
		chain.convert("e", "data-x", "1"),
		vec![Statement::SetAttribute {
			target: "e".to_owned(),
			name: "data-x".to_owned(),
			value: "1".to_owned(),
		}]
	);
	assert_eq!(chain.convert("e", "data-x", "1")[0].to_string(), r#"e.setAttribute("data-x", "1");"#);
}

#[test]
fn specific_converters_are_selective() {
	assert!(!MappedPropertyConverter.can_convert("id"));
	assert!(!StringPropertyConverter.can_convert("checked"));
	assert!(!BooleanPropertyConverter.can_convert("class"));
	assert!(!ClassListConverter.can_convert("for"));
}

#[test]
fn lookup_always_finds_a_converter() {
	let chain = AttributeConverterChain::default();
	assert_eq!(
		chain.find("anything").apply("e", "anything", "v"),
		vec![Statement::SetAttribute {
			target: "e".to_owned(),
			name: "anything".to_owned(),
			value: "v".to_owned(),
		}]
	);
	assert_eq!(chain.find("for").apply("e", "for", "v"), vec![property("e", "htmlFor", PropertyValue::String("v".to_owned()))]);
}
