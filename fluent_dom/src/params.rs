// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// A single attribute of an [`ElementParams`] description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute name.
    pub key: String,
    /// The attribute value.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute from a key and its value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A declarative description of an element tree, built by [`element_from_params`](crate::element_from_params).
///
/// It (de)serializes with the field names of the JavaScript parameter object, so descriptions
/// can be written as JSON:
///
/// ```
/// use fluent_dom::ElementParams;
///
/// let params = ElementParams::from_json(
///     r#"{ "kind": "button", "id": "hello", "style": { "color": "red" }, "innerText": "Click" }"#,
/// )
/// .unwrap();
/// assert_eq!(
///     params,
///     ElementParams::new("button")
///         .id("hello")
///         .style("color", "red")
///         .inner_text("Click"),
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementParams {
    /// The tag of the element, e.g. `"div"`.
    pub kind: String,
    /// The `id` of the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Classes added to the class list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes, set after `id` and `classes`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    /// Inline style properties, applied in this order.
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "ordered_map")]
    pub style: Vec<(String, String)>,
    /// Children inserted *before* the inner text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementParams>,
    /// Markup appended after `children`, an empty string adds nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_text: Option<String>,
    /// Children inserted *after* the inner text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children2: Vec<ElementParams>,
}

impl ElementParams {
    /// Creates a description of a bare element with the tag `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// Parses a description from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the `id`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds an attribute.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Adds an inline style property.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((name.into(), value.into()));
        self
    }

    /// Adds a child that is inserted before the inner text.
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the markup inserted between [`children`](Self::children) and [`children2`](Self::children2).
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.inner_text = Some(text.into());
        self
    }

    /// Adds a child that is inserted after the inner text.
    pub fn child_after(mut self, child: Self) -> Self {
        self.children2.push(child);
        self
    }
}

/// (De)serializes a list of pairs as a map, keeping the order of the entries.
mod ordered_map {
    use serde::{
        Deserializer, Serializer,
        de::{MapAccess, Visitor},
        ser::SerializeMap,
    };
    use std::fmt;

    pub(super) fn serialize<S: Serializer>(
        entries: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of style properties to their values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
