// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Borrow;

use crate::{Document, Element, ElementParams, NodeError};

/// The arguments of [`element`], either a tag with already built children, or a description.
///
/// Usually created through one of the `From` implementations:
/// `"div"`, `("ul", vec![item])` or `ElementParams::new("div")`.
#[derive(Debug)]
pub enum ElementArgs<N> {
    /// A tag and the children the new element gets, see [`element_with_children`].
    Kind {
        /// The tag of the element, e.g. `"div"`.
        kind: String,
        /// The children, in order.
        children: Vec<Element<N>>,
    },
    /// A description of a whole element tree, see [`element_from_params`].
    Params(ElementParams),
}

impl<N> From<&str> for ElementArgs<N> {
    fn from(kind: &str) -> Self {
        kind.to_owned().into()
    }
}

impl<N> From<String> for ElementArgs<N> {
    fn from(kind: String) -> Self {
        Self::Kind {
            kind,
            children: Vec::new(),
        }
    }
}

impl<N, K: Into<String>> From<(K, Vec<Element<N>>)> for ElementArgs<N> {
    fn from((kind, children): (K, Vec<Element<N>>)) -> Self {
        Self::Kind {
            kind: kind.into(),
            children,
        }
    }
}

impl<N, K: Into<String>, const M: usize> From<(K, [Element<N>; M])> for ElementArgs<N> {
    fn from((kind, children): (K, [Element<N>; M])) -> Self {
        Self::Kind {
            kind: kind.into(),
            children: children.into(),
        }
    }
}

impl<N> From<ElementParams> for ElementArgs<N> {
    fn from(params: ElementParams) -> Self {
        Self::Params(params)
    }
}

impl<N> From<&ElementParams> for ElementArgs<N> {
    fn from(params: &ElementParams) -> Self {
        Self::Params(params.clone())
    }
}

/// Creates an element, dispatching on the shape of `args`.
///
/// A description ([`ElementArgs::Params`]) is built with [`element_from_params`], a tag
/// ([`ElementArgs::Kind`]) with [`element_with_children`].
pub fn element<D: Document>(
    document: &D,
    args: impl Into<ElementArgs<D::Node>>,
) -> Result<Element<D::Node>, NodeError<D::Node>> {
    match args.into() {
        ElementArgs::Params(params) => element_from_params(document, &params),
        ElementArgs::Kind { kind, children } => element_with_children(document, &kind, children),
    }
}

/// Creates an element with the tag `kind`, that contains exactly `children`.
pub fn element_with_children<D, I>(
    document: &D,
    kind: &str,
    children: I,
) -> Result<Element<D::Node>, NodeError<D::Node>>
where
    D: Document,
    I: IntoIterator,
    I::Item: Borrow<Element<D::Node>>,
{
    let element = create_element(document, kind)?;
    element.set_children(children)?;
    Ok(element)
}

/// Builds the element tree described by `params`.
///
/// The element is configured in this order, later steps can overwrite earlier ones
/// (e.g. an `id` entry in `attributes` wins over `id`):
///
/// 1. the element is created
/// 2. `id` is set
/// 3. `classes` are added
/// 4. `attributes` are set
/// 5. `style` properties are set
/// 6. `children` are built depth-first and appended
/// 7. `inner_text` is appended as unescaped markup, unless it's `None` or empty
/// 8. `children2` are built and appended
pub fn element_from_params<D: Document>(
    document: &D,
    params: &ElementParams,
) -> Result<Element<D::Node>, NodeError<D::Node>> {
    let element = create_element(document, &params.kind)?;
    if let Some(id) = &params.id {
        element.set_id(id);
    }
    if !params.classes.is_empty() {
        element.add_class(params.classes.as_slice())?;
    }
    if !params.attributes.is_empty() {
        element.set_attributes(params.attributes.as_slice())?;
    }
    element.set_style(params.style.as_slice())?;
    element.add_children(build_children(document, &params.children)?)?;
    if let Some(text) = params.inner_text.as_deref().filter(|text| !text.is_empty()) {
        tracing::trace!(kind = %params.kind, "appending inner text");
        element.add_inner_html(text)?;
    }
    element.add_children(build_children(document, &params.children2)?)?;
    Ok(element)
}

fn build_children<D: Document>(
    document: &D,
    children: &[ElementParams],
) -> Result<Vec<Element<D::Node>>, NodeError<D::Node>> {
    children
        .iter()
        .map(|child| element_from_params(document, child))
        .collect()
}

fn create_element<D: Document>(
    document: &D,
    kind: &str,
) -> Result<Element<D::Node>, NodeError<D::Node>> {
    tracing::trace!(kind, "creating element");
    document.create_element(kind).map(Element::new)
}
