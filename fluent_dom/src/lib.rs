// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A chainable builder over native DOM elements.
//!
//! [`Element`] wraps exactly one native element handle and exposes setters, appenders and
//! getters that delegate straight to the native layer. Every mutator returns the same
//! [`Element`], so calls can be chained:
//!
//! ```no_run
//! use fluent_dom::web;
//!
//! # fn main() -> Result<(), wasm_bindgen::JsValue> {
//! let div = web::element("div")?;
//! div.set_attribute("id", "test")?
//!     .add_class(["test", "test2"])?
//!     .add_children([web::element("p")?.set_inner_text("Hallo")])?;
//! div.render()?;
//! # Ok(())
//! # }
//! ```
//!
//! Whole trees can also be described declaratively with [`ElementParams`] and built in one
//! go by [`element`] (or [`element_from_params`]):
//!
//! ```no_run
//! use fluent_dom::{ElementParams, web};
//!
//! # fn main() -> Result<(), wasm_bindgen::JsValue> {
//! let list = web::element(
//!     ElementParams::new("ul")
//!         .id("List")
//!         .style("padding", "2rem")
//!         .child(ElementParams::new("li").inner_text("Hello"))
//!         .inner_text("Test")
//!         .child_after(ElementParams::new("li").inner_text("World")),
//! )?;
//! list.render()?;
//! # Ok(())
//! # }
//! ```
//!
//! The builder is generic over the native layer through the [`DomNode`] and [`Document`]
//! traits. The [`web`] module implements them for [`web_sys`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET

mod build;
mod class;
mod element;
mod entries;
mod node;
mod params;

pub mod web;

pub use build::{ElementArgs, element, element_from_params, element_with_children};
pub use class::ClassIter;
pub use element::Element;
pub use entries::EntryIter;
pub use node::{Document, DomNode, ListenerOptions};
pub use params::{Attribute, ElementParams};

/// The error type of the native layer behind the node `N`.
pub type NodeError<N> = <N as DomNode>::Error;
