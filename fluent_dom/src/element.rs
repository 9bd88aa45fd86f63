// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Borrow;

use crate::{ClassIter, DomNode, EntryIter, ListenerOptions};

/// A chainable wrapper around a single native element handle.
///
/// The handle is set once in [`Element::new`] and never replaced, all methods mutate the native
/// element in place and return the same `Element` again. Nothing is validated here, errors are
/// whatever the native layer returns.
///
/// Adding an element as a child of another one, or [rendering](Element::render) it, hands the
/// native element over to the document tree, the wrapper keeps referencing it though.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<N> {
    node: N,
}

impl<N: DomNode> Element<N> {
    /// Wraps an existing native element.
    pub fn new(node: N) -> Self {
        Self { node }
    }

    /// Returns the wrapped native element.
    pub fn element(&self) -> &N {
        &self.node
    }

    /// Unwraps the native element.
    pub fn into_element(self) -> N {
        self.node
    }

    /// Returns the value of the attribute `key`, or `None` when it isn't set.
    pub fn attr(&self, key: &str) -> Option<String> {
        self.node.attribute(key)
    }

    /// The rendered text of this element.
    pub fn inner_text(&self) -> String {
        self.node.inner_text()
    }

    /// The markup of the children of this element.
    pub fn inner_html(&self) -> String {
        self.node.inner_html()
    }

    /// The raw text content of this element.
    pub fn text_content(&self) -> String {
        self.node.text_content()
    }

    /// Sets or overwrites the attribute `key`.
    pub fn set_attribute(&self, key: &str, value: &str) -> Result<&Self, N::Error> {
        self.node.set_attribute(key, value)?;
        Ok(self)
    }

    /// Sets every attribute of `attributes`, in iteration order.
    ///
    /// Multiple maps can be passed as a collection of maps, e.g. `[defaults, overrides]`.
    pub fn set_attributes(&self, attributes: impl EntryIter) -> Result<&Self, N::Error> {
        for (key, value) in attributes.entries_iter() {
            self.node.set_attribute(key, value)?;
        }
        Ok(self)
    }

    /// Replaces the whole class attribute with `class`.
    ///
    /// See [`Element::add_class`] to add to the existing classes.
    pub fn set_class(&self, class: &str) -> &Self {
        self.node.set_class_name(class);
        self
    }

    /// Sets the `id` attribute.
    pub fn set_id(&self, id: &str) -> &Self {
        self.node.set_id(id);
        self
    }

    /// Replaces the content with the rendered `text`.
    pub fn set_inner_text(&self, text: &str) -> &Self {
        self.node.set_inner_text(text);
        self
    }

    /// Replaces the content with the parsed `html`.
    pub fn set_inner_html(&self, html: &str) -> &Self {
        self.node.set_inner_html(html);
        self
    }

    /// Replaces the content with a single text node.
    pub fn set_text_content(&self, text: &str) -> &Self {
        self.node.set_text_content(text);
        self
    }

    /// Sets the `value` of a form control.
    ///
    /// This is forwarded to the native element as-is, whatever kind of element it is.
    pub fn set_value(&self, value: &str) -> Result<&Self, N::Error> {
        self.node.set_property("value", value)?;
        Ok(self)
    }

    /// Sets the `name` of a form control, see [`Element::set_value`].
    pub fn set_name(&self, name: &str) -> Result<&Self, N::Error> {
        self.node.set_property("name", name)?;
        Ok(self)
    }

    /// Sets each inline style property of `style`, in iteration order.
    ///
    /// Properties that aren't part of `style` keep their current value.
    pub fn set_style(&self, style: impl EntryIter) -> Result<&Self, N::Error> {
        for (name, value) in style.entries_iter() {
            self.node.set_style_property(name, value)?;
        }
        Ok(self)
    }

    /// Removes all current children, then appends `children` in order.
    pub fn set_children<I>(&self, children: I) -> Result<&Self, N::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        self.node.clear_children();
        self.add_children(children)
    }

    /// Adds each class token to the class list, tokens that are already present are skipped.
    ///
    /// When the native layer rejects any token, none of them is added.
    pub fn add_class(&self, classes: impl ClassIter) -> Result<&Self, N::Error> {
        let classes: Vec<&str> = classes.class_iter().collect();
        self.node.add_classes(&classes)?;
        Ok(self)
    }

    /// Appends `children` in order after the current last child.
    pub fn add_children<I>(&self, children: I) -> Result<&Self, N::Error>
    where
        I: IntoIterator,
        I::Item: Borrow<Self>,
    {
        for child in children {
            self.node.append_child(&child.borrow().node)?;
        }
        Ok(self)
    }

    /// Appends `text` to the rendered text, this replaces all children with the concatenated text.
    pub fn add_inner_text(&self, text: &str) -> &Self {
        let mut inner_text = self.node.inner_text();
        inner_text.push_str(text);
        self.node.set_inner_text(&inner_text);
        self
    }

    /// Appends `html` as unescaped markup after the current content.
    pub fn add_inner_html(&self, html: &str) -> Result<&Self, N::Error> {
        self.node.append_html(html)?;
        Ok(self)
    }

    /// Appends `text` to the text content, this replaces all children with the concatenated text.
    pub fn add_text_content(&self, text: &str) -> &Self {
        let mut text_content = self.node.text_content();
        text_content.push_str(text);
        self.node.set_text_content(&text_content);
        self
    }

    /// Registers `callback` for the event `kind` with default [`ListenerOptions`].
    pub fn add_event_listener(
        &self,
        kind: &str,
        callback: impl FnMut(N::Event) + 'static,
    ) -> Result<&Self, N::Error> {
        self.add_event_listener_with_options(kind, callback, ListenerOptions::default())
    }

    /// Registers `callback` for the event `kind`.
    ///
    /// `options` are forwarded to the native layer, a `bool` is taken as the capture flag.
    /// To remove the listener again, use the native API on [`Element::element`].
    pub fn add_event_listener_with_options(
        &self,
        kind: &str,
        callback: impl FnMut(N::Event) + 'static,
        options: impl Into<ListenerOptions>,
    ) -> Result<&Self, N::Error> {
        self.node
            .add_event_listener(kind, Box::new(callback), options.into())?;
        Ok(self)
    }

    /// Appends this element to the default root of its document (the `<body>` on the web).
    pub fn render(&self) -> Result<(), N::Error> {
        let root = self.node.default_root()?;
        self.render_into(&root)
    }

    /// Appends this element as last child of `to`.
    ///
    /// Rendering again moves the element, it's never duplicated.
    pub fn render_into(&self, to: &N) -> Result<(), N::Error> {
        tracing::debug!("rendering element");
        to.append_child(&self.node)
    }
}
