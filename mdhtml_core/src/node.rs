use derive_more::Deref;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use crate::MdHtmlError;
use crate::MdHtmlResult;

/// Attributes attached to a node, kept in insertion order.
///
/// Serialization renders them as `key="value"` pairs in the order they were
/// first inserted. Re-inserting an existing key replaces its value without
/// moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert an attribute, returning the previous value for the key if it was
	/// already present.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		let key = key.into();
		let value = value.into();

		if let Some((_, existing)) = self.0.iter_mut().find(|(name, _)| *name == key) {
			return Some(std::mem::replace(existing, value));
		}

		self.0.push((key, value));
		None
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.as_str())
	}

	/// Render as ` key="value" key2="value2"` with a single leading space, or
	/// an empty string when there are no attributes.
	fn to_html(&self) -> String {
		self.0
			.iter()
			.map(|(key, value)| format!(" {key}=\"{value}\""))
			.collect()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		for (key, value) in iter {
			attributes.insert(key, value);
		}
		attributes
	}
}

impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (key, value) in &self.0 {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

/// A terminal node. Without a tag it is raw text, with a tag it renders as a
/// single element wrapping its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeafNode {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	pub value: Option<String>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
}

impl LeafNode {
	/// A raw text leaf.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			tag: None,
			value: Some(value.into()),
			attributes: Attributes::new(),
		}
	}

	#[must_use]
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	#[must_use]
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key, value);
		self
	}

	fn write_html(&self, output: &mut String) -> MdHtmlResult<()> {
		let Some(value) = &self.value else {
			return Err(MdHtmlError::MissingValue);
		};

		match &self.tag {
			None => output.push_str(value),
			Some(tag) => {
				output.push('<');
				output.push_str(tag);
				output.push_str(&self.attributes.to_html());
				output.push('>');
				output.push_str(value);
				output.push_str("</");
				output.push_str(tag);
				output.push('>');
			}
		}

		Ok(())
	}
}

/// A node with an ordered list of children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerNode {
	pub tag: Option<String>,
	pub children: Vec<Node>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
}

impl ContainerNode {
	/// An empty container. It must receive at least one child before it can
	/// be serialized.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: Some(tag.into()),
			children: vec![],
			attributes: Attributes::new(),
		}
	}

	pub fn with_children(tag: impl Into<String>, children: Vec<Node>) -> Self {
		Self {
			children,
			..Self::new(tag)
		}
	}

	#[must_use]
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key, value);
		self
	}

	pub fn append_child(&mut self, child: impl Into<Node>) {
		self.children.push(child.into());
	}

	fn write_html(&self, output: &mut String) -> MdHtmlResult<()> {
		let Some(tag) = self.tag.as_deref().filter(|tag| !tag.is_empty()) else {
			return Err(MdHtmlError::MissingTag);
		};

		if self.children.is_empty() {
			return Err(MdHtmlError::EmptyContainer(tag.to_string()));
		}

		output.push('<');
		output.push_str(tag);
		output.push_str(&self.attributes.to_html());
		output.push('>');

		for child in &self.children {
			child.write_html(output)?;
		}

		output.push_str("</");
		output.push_str(tag);
		output.push('>');

		Ok(())
	}
}

/// A node in the generated markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
	Leaf(LeafNode),
	Container(ContainerNode),
}

impl Node {
	/// Raw text without a surrounding element.
	pub fn text(value: impl Into<String>) -> Self {
		Self::Leaf(LeafNode::new(value))
	}

	/// A leaf element such as `<b>value</b>`.
	pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Leaf(LeafNode::new(value).with_tag(tag))
	}

	pub fn container(tag: impl Into<String>, children: Vec<Node>) -> Self {
		Self::Container(ContainerNode::with_children(tag, children))
	}

	pub fn tag(&self) -> Option<&str> {
		match self {
			Self::Leaf(leaf) => leaf.tag.as_deref(),
			Self::Container(container) => container.tag.as_deref(),
		}
	}

	pub fn attributes(&self) -> &Attributes {
		match self {
			Self::Leaf(leaf) => &leaf.attributes,
			Self::Container(container) => &container.attributes,
		}
	}

	/// The children of a container, or an empty slice for a leaf.
	pub fn children(&self) -> &[Node] {
		match self {
			Self::Leaf(_) => &[],
			Self::Container(container) => &container.children,
		}
	}

	/// Append a child to a container node. Leaves cannot hold children.
	pub fn append_child(&mut self, child: impl Into<Node>) -> MdHtmlResult<()> {
		match self {
			Self::Leaf(_) => Err(MdHtmlError::LeafChildren),
			Self::Container(container) => {
				container.append_child(child);
				Ok(())
			}
		}
	}

	/// Serialize the node and all of its descendants to an html string.
	///
	/// This is the html rendering, not the derived [`serde::Serialize`] impl
	/// used for the JSON view of the tree. Values and attributes are written
	/// verbatim without escaping.
	pub fn serialize(&self) -> MdHtmlResult<String> {
		let mut output = String::new();
		self.write_html(&mut output)?;
		Ok(output)
	}

	fn write_html(&self, output: &mut String) -> MdHtmlResult<()> {
		match self {
			Self::Leaf(leaf) => leaf.write_html(output),
			Self::Container(container) => container.write_html(output),
		}
	}
}

impl From<LeafNode> for Node {
	fn from(leaf: LeafNode) -> Self {
		Self::Leaf(leaf)
	}
}

impl From<ContainerNode> for Node {
	fn from(container: ContainerNode) -> Self {
		Self::Container(container)
	}
}
