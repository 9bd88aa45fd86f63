// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

/// A native element handle, i.e. the mutation surface an [`Element`](crate::Element) delegates to.
///
/// Implementors are cheap handles: cloning one must yield another reference to the *same* native
/// element, and all setters take `&self`, the native layer owns the actual state.
///
/// None of these methods validate their input. Whatever the native layer rejects is returned
/// as [`DomNode::Error`] as-is.
pub trait DomNode: Clone + 'static {
    /// The error raised by the native layer, e.g. [`JsValue`](wasm_bindgen::JsValue) on the web.
    type Error;
    /// The event passed to listeners registered with [`DomNode::add_event_listener`].
    type Event;

    /// Returns the value of the attribute `key`, or `None` if it isn't set.
    fn attribute(&self, key: &str) -> Option<String>;

    /// Sets or overwrites the attribute `key`.
    fn set_attribute(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Sets the `id` of this element.
    fn set_id(&self, id: &str);

    /// Replaces the whole class attribute.
    fn set_class_name(&self, class_name: &str);

    /// Adds tokens to the class list, tokens that are already present are skipped.
    ///
    /// All tokens are checked before any is added, on failure the class list stays unchanged.
    fn add_classes(&self, classes: &[&str]) -> Result<(), Self::Error>;

    /// The rendered text of this element.
    fn inner_text(&self) -> String;

    /// Replaces all children with the rendered `text`.
    fn set_inner_text(&self, text: &str);

    /// The markup of the children of this element.
    fn inner_html(&self) -> String;

    /// Replaces all children with the parsed `html`.
    fn set_inner_html(&self, html: &str);

    /// Parses `html` and inserts the result after the last child of this element.
    fn append_html(&self, html: &str) -> Result<(), Self::Error>;

    /// The raw text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Replaces all children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Writes the untyped property `name`, e.g. `value` of a form control.
    fn set_property(&self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Sets one inline style property, leaving all others untouched.
    fn set_style_property(&self, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Removes all children.
    fn clear_children(&self);

    /// Appends `child` as the last child, moving it away from its current parent.
    fn append_child(&self, child: &Self) -> Result<(), Self::Error>;

    /// Registers `callback` for events named `kind`.
    ///
    /// The native layer takes over the callback, it lives as long as the listener does.
    fn add_event_listener(
        &self,
        kind: &str,
        callback: Box<dyn FnMut(Self::Event)>,
        options: ListenerOptions,
    ) -> Result<(), Self::Error>;

    /// The container elements are rendered into by default, i.e. the document body.
    fn default_root(&self) -> Result<Self, Self::Error>;
}

/// Creates native element handles.
pub trait Document {
    /// The handle type of elements created by this document.
    type Node: DomNode;

    /// Creates a new, detached element with the tag `kind`.
    fn create_element(&self, kind: &str) -> Result<Self::Node, <Self::Node as DomNode>::Error>;
}

/// Options forwarded to the native listener registration.
///
/// A bare `bool` converts to the `capture` flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Dispatch events to this listener in the capture phase. (default = `false`)
    pub capture: bool,
    /// Remove the listener after it was invoked once. (default = `false`)
    pub once: bool,
    /// Whether the listener is passive, `None` leaves the decision to the native layer.
    ///
    /// Passive listeners can't prevent the default action of an event.
    pub passive: Option<bool>,
}

impl ListenerOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the listener should capture the event *before* it's dispatched to any target beneath it.
    pub fn capture(mut self, value: bool) -> Self {
        self.capture = value;
        self
    }

    /// Whether the listener is removed after its first invocation.
    pub fn once(mut self, value: bool) -> Self {
        self.once = value;
        self
    }

    /// Whether the listener is passive.
    pub fn passive(mut self, value: bool) -> Self {
        self.passive = Some(value);
        self
    }
}

impl From<bool> for ListenerOptions {
    fn from(capture: bool) -> Self {
        Self::default().capture(capture)
    }
}
