// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! A tiny in-memory DOM, used to observe what the builder does to the native layer.

#![allow(dead_code, reason = "Not every test uses every helper")]

use std::{cell::RefCell, rc::Rc};

use fluent_dom::{Document, DomNode, ListenerOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TestError {
    /// A name or token contained a character the native layer doesn't accept.
    InvalidCharacter(String),
    /// A node was appended into itself or one of its descendants.
    HierarchyRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TestEvent {
    pub(crate) kind: String,
}

struct Listener {
    kind: String,
    options: ListenerOptions,
    callback: Option<Box<dyn FnMut(TestEvent)>>,
}

enum NodeData {
    Element {
        tag: String,
        /// Attributes in insertion order, `class`, `id` and `style` included.
        attributes: Vec<(String, String)>,
        /// Untyped properties, e.g. `value`.
        properties: Vec<(String, String)>,
        listeners: Vec<Listener>,
    },
    Text(String),
    /// Unparsed markup, appended via `append_html` or `set_inner_html`.
    Markup(String),
}

struct Node {
    data: NodeData,
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Default)]
struct Arena {
    nodes: Vec<Node>,
}

const BODY: usize = 0;

/// A document with a `<body>` root.
#[derive(Clone)]
pub(crate) struct TestDocument {
    arena: Rc<RefCell<Arena>>,
}

/// A handle to an element of a [`TestDocument`].
#[derive(Clone)]
pub(crate) struct TestNode {
    arena: Rc<RefCell<Arena>>,
    id: usize,
}

impl std::fmt::Debug for TestNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestNode")
            .field("id", &self.id)
            .field("html", &self.outer_html())
            .finish()
    }
}

impl PartialEq for TestNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena) && self.id == other.id
    }
}

/// A summary of a child node, for asserting the child order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Child {
    Element(String),
    Text(String),
    Markup(String),
}

fn valid_name(name: &str) -> Result<(), TestError> {
    if name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '='))
    {
        Err(TestError::InvalidCharacter(name.to_owned()))
    } else {
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn strip_tags(markup: &str) -> String {
    let mut in_tag = false;
    markup
        .chars()
        .filter(|&c| match c {
            '<' => {
                in_tag = true;
                false
            }
            '>' => {
                in_tag = false;
                false
            }
            _ => !in_tag,
        })
        .collect()
}

fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            Some((name.trim().to_owned(), value.trim().to_owned()))
        })
        .collect()
}

impl Arena {
    fn push(&mut self, data: NodeData) -> usize {
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    fn attributes_mut(&mut self, id: usize) -> &mut Vec<(String, String)> {
        match &mut self.nodes[id].data {
            NodeData::Element { attributes, .. } => attributes,
            _ => unreachable!("handles always point to elements"),
        }
    }

    fn attribute(&self, id: usize, key: &str) -> Option<String> {
        match &self.nodes[id].data {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    fn set_attribute(&mut self, id: usize, key: &str, value: &str) {
        let attributes = self.attributes_mut(id);
        match attributes.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_owned(),
            None => attributes.push((key.to_owned(), value.to_owned())),
        }
    }

    fn detach(&mut self, id: usize) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&child| child != id);
        }
    }

    fn replace_children(&mut self, id: usize, data: Option<NodeData>) {
        for child in std::mem::take(&mut self.nodes[id].children) {
            self.nodes[child].parent = None;
        }
        if let Some(data) = data {
            let child = self.push(data);
            self.append(id, child);
        }
    }

    fn append(&mut self, parent: usize, child: usize) {
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    fn is_inclusive_ancestor(&self, ancestor: usize, mut id: usize) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes[id].parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn text(&self, id: usize) -> String {
        match &self.nodes[id].data {
            NodeData::Text(text) => text.clone(),
            NodeData::Markup(markup) => strip_tags(markup),
            NodeData::Element { .. } => self.nodes[id]
                .children
                .iter()
                .map(|&child| self.text(child))
                .collect(),
        }
    }

    fn inner_html(&self, id: usize) -> String {
        self.nodes[id]
            .children
            .iter()
            .map(|&child| self.outer_html(child))
            .collect()
    }

    fn outer_html(&self, id: usize) -> String {
        match &self.nodes[id].data {
            NodeData::Text(text) => escape(text),
            NodeData::Markup(markup) => markup.clone(),
            NodeData::Element {
                tag, attributes, ..
            } => {
                let attributes: String = attributes
                    .iter()
                    .map(|(k, v)| format!(" {k}=\"{v}\""))
                    .collect();
                format!("<{tag}{attributes}>{}</{tag}>", self.inner_html(id))
            }
        }
    }
}

impl TestDocument {
    pub(crate) fn new() -> Self {
        let mut arena = Arena::default();
        let body = arena.push(NodeData::Element {
            tag: "body".into(),
            attributes: Vec::new(),
            properties: Vec::new(),
            listeners: Vec::new(),
        });
        debug_assert_eq!(body, BODY);
        Self {
            arena: Rc::new(RefCell::new(arena)),
        }
    }

    pub(crate) fn body(&self) -> TestNode {
        TestNode {
            arena: self.arena.clone(),
            id: BODY,
        }
    }
}

impl Document for TestDocument {
    type Node = TestNode;

    fn create_element(&self, kind: &str) -> Result<TestNode, TestError> {
        valid_name(kind)?;
        let id = self.arena.borrow_mut().push(NodeData::Element {
            tag: kind.to_owned(),
            attributes: Vec::new(),
            properties: Vec::new(),
            listeners: Vec::new(),
        });
        Ok(TestNode {
            arena: self.arena.clone(),
            id,
        })
    }
}

impl TestNode {
    pub(crate) fn outer_html(&self) -> String {
        self.arena.borrow().outer_html(self.id)
    }

    pub(crate) fn tag(&self) -> String {
        match &self.arena.borrow().nodes[self.id].data {
            NodeData::Element { tag, .. } => tag.clone(),
            _ => unreachable!("handles always point to elements"),
        }
    }

    pub(crate) fn parent(&self) -> Option<Self> {
        let parent = self.arena.borrow().nodes[self.id].parent?;
        Some(Self {
            arena: self.arena.clone(),
            id: parent,
        })
    }

    /// Element children, skipping text and markup.
    pub(crate) fn element_children(&self) -> Vec<Self> {
        let arena = self.arena.borrow();
        arena.nodes[self.id]
            .children
            .iter()
            .copied()
            .filter(|&id| matches!(arena.nodes[id].data, NodeData::Element { .. }))
            .map(|id| Self {
                arena: self.arena.clone(),
                id,
            })
            .collect()
    }

    pub(crate) fn children(&self) -> Vec<Child> {
        let arena = self.arena.borrow();
        arena.nodes[self.id]
            .children
            .iter()
            .map(|&id| match &arena.nodes[id].data {
                NodeData::Element { tag, .. } => Child::Element(tag.clone()),
                NodeData::Text(text) => Child::Text(text.clone()),
                NodeData::Markup(markup) => Child::Markup(markup.clone()),
            })
            .collect()
    }

    pub(crate) fn property(&self, name: &str) -> Option<String> {
        match &self.arena.borrow().nodes[self.id].data {
            NodeData::Element { properties, .. } => properties
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    pub(crate) fn style_property(&self, name: &str) -> Option<String> {
        let style = self.arena.borrow().attribute(self.id, "style")?;
        parse_style(&style)
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub(crate) fn class_list(&self) -> Vec<String> {
        self.arena
            .borrow()
            .attribute(self.id, "class")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    pub(crate) fn listener_count(&self) -> usize {
        match &self.arena.borrow().nodes[self.id].data {
            NodeData::Element { listeners, .. } => listeners.len(),
            _ => 0,
        }
    }

    /// Invokes all listeners for `kind` on this element, capture listeners first.
    ///
    /// The arena isn't borrowed while a callback runs, so callbacks may mutate the document.
    pub(crate) fn dispatch(&self, kind: &str) {
        let event = TestEvent {
            kind: kind.to_owned(),
        };
        for capture in [true, false] {
            let mut idx = 0;
            loop {
                let taken = {
                    let mut arena = self.arena.borrow_mut();
                    let NodeData::Element { listeners, .. } = &mut arena.nodes[self.id].data else {
                        return;
                    };
                    let Some(listener) = listeners.get_mut(idx) else {
                        break;
                    };
                    if listener.kind == kind && listener.options.capture == capture {
                        listener.callback.take().map(|cb| (cb, listener.options.once))
                    } else {
                        None
                    }
                };
                if let Some((mut callback, once)) = taken {
                    callback(event.clone());
                    let mut arena = self.arena.borrow_mut();
                    if let NodeData::Element { listeners, .. } = &mut arena.nodes[self.id].data {
                        if once {
                            listeners.remove(idx);
                            continue;
                        }
                        listeners[idx].callback = Some(callback);
                    }
                }
                idx += 1;
            }
        }
    }
}

impl DomNode for TestNode {
    type Error = TestError;
    type Event = TestEvent;

    fn attribute(&self, key: &str) -> Option<String> {
        self.arena.borrow().attribute(self.id, key)
    }

    fn set_attribute(&self, key: &str, value: &str) -> Result<(), TestError> {
        valid_name(key)?;
        self.arena.borrow_mut().set_attribute(self.id, key, value);
        Ok(())
    }

    fn set_id(&self, id: &str) {
        self.arena.borrow_mut().set_attribute(self.id, "id", id);
    }

    fn set_class_name(&self, class_name: &str) {
        self.arena
            .borrow_mut()
            .set_attribute(self.id, "class", class_name);
    }

    fn add_classes(&self, classes: &[&str]) -> Result<(), TestError> {
        for class in classes {
            valid_name(class)?;
        }
        let mut class_list = self.class_list();
        let len = class_list.len();
        for class in classes {
            if !class_list.iter().any(|c| c == class) {
                class_list.push((*class).to_owned());
            }
        }
        if class_list.len() == len {
            return Ok(());
        }
        self.arena
            .borrow_mut()
            .set_attribute(self.id, "class", &class_list.join(" "));
        Ok(())
    }

    fn inner_text(&self) -> String {
        self.arena.borrow().text(self.id)
    }

    fn set_inner_text(&self, text: &str) {
        self.set_text_content(text);
    }

    fn inner_html(&self) -> String {
        self.arena.borrow().inner_html(self.id)
    }

    fn set_inner_html(&self, html: &str) {
        let data = (!html.is_empty()).then(|| NodeData::Markup(html.to_owned()));
        self.arena.borrow_mut().replace_children(self.id, data);
    }

    fn append_html(&self, html: &str) -> Result<(), TestError> {
        let mut arena = self.arena.borrow_mut();
        let markup = arena.push(NodeData::Markup(html.to_owned()));
        arena.append(self.id, markup);
        Ok(())
    }

    fn text_content(&self) -> String {
        self.arena.borrow().text(self.id)
    }

    fn set_text_content(&self, text: &str) {
        let data = (!text.is_empty()).then(|| NodeData::Text(text.to_owned()));
        self.arena.borrow_mut().replace_children(self.id, data);
    }

    fn set_property(&self, name: &str, value: &str) -> Result<(), TestError> {
        if let NodeData::Element { properties, .. } =
            &mut self.arena.borrow_mut().nodes[self.id].data
        {
            match properties.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_owned(),
                None => properties.push((name.to_owned(), value.to_owned())),
            }
        }
        Ok(())
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), TestError> {
        let mut arena = self.arena.borrow_mut();
        let mut style = parse_style(&arena.attribute(self.id, "style").unwrap_or_default());
        match style.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => style.push((name.to_owned(), value.to_owned())),
        }
        let style: Vec<String> = style.iter().map(|(k, v)| format!("{k}: {v};")).collect();
        arena.set_attribute(self.id, "style", &style.join(" "));
        Ok(())
    }

    fn clear_children(&self) {
        self.arena.borrow_mut().replace_children(self.id, None);
    }

    fn append_child(&self, child: &Self) -> Result<(), TestError> {
        let mut arena = self.arena.borrow_mut();
        if arena.is_inclusive_ancestor(child.id, self.id) {
            return Err(TestError::HierarchyRequest);
        }
        arena.append(self.id, child.id);
        Ok(())
    }

    fn add_event_listener(
        &self,
        kind: &str,
        callback: Box<dyn FnMut(TestEvent)>,
        options: ListenerOptions,
    ) -> Result<(), TestError> {
        if let NodeData::Element { listeners, .. } =
            &mut self.arena.borrow_mut().nodes[self.id].data
        {
            listeners.push(Listener {
                kind: kind.to_owned(),
                options,
                callback: Some(callback),
            });
        }
        Ok(())
    }

    fn default_root(&self) -> Result<Self, TestError> {
        Ok(Self {
            arena: self.arena.clone(),
            id: BODY,
        })
    }
}
