use crate::{
	convert::{convert_nodes, Settings},
	load::parse_body_fragment,
};
use tracing::trace_span;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

/// Parses `markup` as body content and returns JavaScript that rebuilds its elements.
///
/// # Errors
///
/// Throws if parsing fails, or a [***Error***](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Error)
/// if an element can't be named.
#[wasm_bindgen(js_name = htmlToDomJs)]
pub fn html_to_dom_js(markup: &str, ignore_whitespaces: bool, add_fragment: bool) -> Result<String, JsValue> {
	let span = trace_span!("html_to_dom_js", len = markup.len(), ignore_whitespaces, add_fragment);
	let _enter = span.enter();

	let roots = parse_body_fragment(markup)?;
	convert_nodes(&roots, Settings::new().ignore_whitespaces(ignore_whitespaces), add_fragment).map_err(|error| js_sys::Error::new(&error.to_string()).into())
}
