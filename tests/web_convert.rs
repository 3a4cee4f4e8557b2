#![cfg(target_arch = "wasm32")]

use dom_codegen::{
	load::{load_node, parse_body_fragment},
	web::html_to_dom_js,
	Node,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::window;

wasm_bindgen_test_configure!(run_in_browser);

static mut LOG_INITIALIZED: bool = false;

fn init_log() {
	unsafe {
		if !LOG_INITIALIZED {
			tracing_wasm::set_as_global_default();
			LOG_INITIALIZED = true;
		}
	}
}

#[wasm_bindgen_test]
fn parse() {
	init_log();

	let roots = parse_body_fragment(r#"<div id="x"><span>Hi</span><!-- note --></div> loose text <p></p>"#).unwrap();
	let expected: Vec<Node> = vec![
		Node::element("DIV")
			.with_attribute("id", "x")
			.with_child(Node::element("SPAN").with_child(Node::text("Hi")))
			.with_child(Node::Other)
			.into(),
		Node::element("P").into(),
	];
	assert_eq!(roots, expected);
}

#[wasm_bindgen_test]
fn load_live_element() {
	init_log();

	let document = window().unwrap().document().unwrap();
	let label = document.create_element("label").unwrap();
	label.set_attribute("for", "mail").unwrap();
	label.append_child(&document.create_text_node("Mail")).unwrap();

	assert_eq!(
		load_node(label.unchecked_ref()),
		Node::from(Node::element("LABEL").with_attribute("for", "mail").with_child(Node::text("Mail")))
	);
}

#[wasm_bindgen_test]
fn convert_markup() {
	init_log();

	assert_eq!(
		html_to_dom_js("<input type=\"checkbox\" checked>\n<br>", true, true).unwrap(),
		"let fragment = new DocumentFragment();\n\
		let input = document.createElement(\"input\");\n\
		input.type = \"checkbox\";\n\
		input.checked = true;\n\
		fragment.appendChild(input);\n\
		fragment.appendChild(document.createElement(\"br\"));"
	);
}
