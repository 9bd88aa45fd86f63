// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The [`web_sys`] backend: [`DomNode`] for [`HtmlElement`] and [`Document`] for [`web_sys::Document`].
//!
//! Each method is a direct call of the corresponding DOM API, errors are the thrown [`JsValue`].

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{AddEventListenerOptions, HtmlElement, js_sys};

use crate::{Document, DomNode, Element, ElementArgs, ListenerOptions};

impl DomNode for HtmlElement {
    type Error = JsValue;
    type Event = web_sys::Event;

    fn attribute(&self, key: &str) -> Option<String> {
        web_sys::Element::get_attribute(self, key)
    }

    fn set_attribute(&self, key: &str, value: &str) -> Result<(), JsValue> {
        web_sys::Element::set_attribute(self, key, value)
    }

    fn set_id(&self, id: &str) {
        web_sys::Element::set_id(self, id);
    }

    fn set_class_name(&self, class_name: &str) {
        web_sys::Element::set_class_name(self, class_name);
    }

    fn add_classes(&self, classes: &[&str]) -> Result<(), JsValue> {
        let tokens: js_sys::Array = classes.iter().map(|c| JsValue::from_str(c)).collect();
        web_sys::Element::class_list(self).add(&tokens)
    }

    fn inner_text(&self) -> String {
        HtmlElement::inner_text(self)
    }

    fn set_inner_text(&self, text: &str) {
        HtmlElement::set_inner_text(self, text);
    }

    fn inner_html(&self) -> String {
        web_sys::Element::inner_html(self)
    }

    fn set_inner_html(&self, html: &str) {
        web_sys::Element::set_inner_html(self, html);
    }

    // Unlike `innerHTML += html`, this keeps the existing children (and their listeners) alive.
    fn append_html(&self, html: &str) -> Result<(), JsValue> {
        web_sys::Element::insert_adjacent_html(self, "beforeend", html)
    }

    fn text_content(&self) -> String {
        web_sys::Node::text_content(self).unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        web_sys::Node::set_text_content(self, Some(text));
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), JsValue> {
        js_sys::Reflect::set(self, &JsValue::from_str(name), &JsValue::from_str(value)).map(drop)
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), JsValue> {
        HtmlElement::style(self).set_property(name, value)
    }

    fn clear_children(&self) {
        web_sys::Element::replace_children_with_node_0(self);
    }

    fn append_child(&self, child: &Self) -> Result<(), JsValue> {
        web_sys::Node::append_child(self, child).map(drop)
    }

    fn add_event_listener(
        &self,
        kind: &str,
        callback: Box<dyn FnMut(web_sys::Event)>,
        options: ListenerOptions,
    ) -> Result<(), JsValue> {
        let listener_options = AddEventListenerOptions::new();
        listener_options.set_capture(options.capture);
        listener_options.set_once(options.once);
        if let Some(passive) = options.passive {
            listener_options.set_passive(passive);
        }
        // The garbage collector owns the closure from here on.
        let callback = Closure::wrap(callback).into_js_value();
        web_sys::EventTarget::add_event_listener_with_callback_and_add_event_listener_options(
            self,
            kind,
            callback.unchecked_ref(),
            &listener_options,
        )
    }

    fn default_root(&self) -> Result<Self, JsValue> {
        web_sys::Node::owner_document(self)
            .and_then(|document| document.body())
            .ok_or_else(|| JsValue::from_str("document has no body"))
    }
}

impl Document for web_sys::Document {
    type Node = HtmlElement;

    fn create_element(&self, kind: &str) -> Result<HtmlElement, JsValue> {
        web_sys::Document::create_element(self, wasm_bindgen::intern(kind))
            .map(JsCast::unchecked_into)
    }
}

/// Helper to get the HTML document
pub fn document() -> web_sys::Document {
    let window = web_sys::window().expect("no global `window` exists");
    window.document().expect("should have a document on window")
}

/// Helper to wrap the HTML element with the given id, if there is one.
pub fn get_element_by_id(id: &str) -> Option<Element<HtmlElement>> {
    document()
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(Element::new)
}

/// Creates an element in the global HTML document, see [`element`](crate::element).
pub fn element(args: impl Into<ElementArgs<HtmlElement>>) -> Result<Element<HtmlElement>, JsValue> {
    crate::element(&document(), args)
}
