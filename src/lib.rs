//! Generates JavaScript that rebuilds parsed HTML through the DOM API.
//!
//! See [`convert::ElementConverter`] for the conversion itself, [`load`] for reading trees out of the browser
//! and [`web::html_to_dom_js`] for the JavaScript entry point.

#![doc(html_root_url = "https://docs.rs/dom-codegen/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod attribute;
pub mod convert;
pub mod error;
pub mod load;
pub mod node;
pub mod statement;
pub mod web;

pub use crate::{
	convert::{convert_nodes, ElementConverter, Settings},
	error::Error,
	node::{Attribute, Element, Node},
	statement::{render, PropertyValue, Statement},
};
