/*!
# HTMTree: Node Model.

Adapter-independent descriptions of node kinds, attributes, and the other
bits of state that flow across the `TreeAdapter` boundary.
*/

use std::{
	borrow::Cow,
	fmt,
};



/// # XHTML Namespace URI.
///
/// Elements created without an explicit namespace land here.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// # Default Element Template.
///
/// Being a `const`, every use is a brand new value, so callers can fill in
/// the blanks without any risk of sharing state between nodes.
pub const DEFAULT_ELEMENT: ElementTemplate = ElementTemplate {
	tag_name: String::new(),
	namespace_uri: Cow::Borrowed(XHTML_NAMESPACE),
	attrs: Vec::new(),
};

/// # Default Text Template.
pub const DEFAULT_TEXT: TextTemplate = TextTemplate { value: String::new() };



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Node Kind.
///
/// The discriminant shared by every adapter's node representation.
pub enum NodeKind {
	/// # Whole-Document Root.
	Document,

	/// # Fragment Root.
	DocumentFragment,

	/// # Element.
	Element,

	/// # Text.
	Text,

	/// # Comment.
	Comment,

	/// # Doctype.
	DocumentType,
}

impl AsRef<str> for NodeKind {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for NodeKind {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl NodeKind {
	#[must_use]
	/// # As Str.
	///
	/// Return the discriminant name. Elements use their tag name in
	/// practice (see `TreeAdapter::node_name`); this is the generic stand-in.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Document => "#document",
			Self::DocumentFragment => "#document-fragment",
			Self::Element => "#element",
			Self::Text => "#text",
			Self::Comment => "#comment",
			Self::DocumentType => "#documentType",
		}
	}

	#[must_use]
	/// # Is Root Kind?
	///
	/// Documents and fragments never have parents.
	pub const fn is_root(self) -> bool {
		matches!(self, Self::Document | Self::DocumentFragment)
	}

	#[must_use]
	/// # Can Have Children?
	pub const fn is_container(self) -> bool {
		matches!(self, Self::Document | Self::DocumentFragment | Self::Element)
	}
}



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Attribute.
///
/// A single name/value pair. Namespaced attributes carry their prefix in the
/// name, e.g. `xlink:href`.
pub struct Attr {
	/// # Name.
	pub name: String,

	/// # Value.
	pub value: String,
}

impl Attr {
	#[must_use]
	/// # New.
	pub fn new<K, V>(name: K, value: V) -> Self
	where K: Into<String>, V: Into<String> {
		Self { name: name.into(), value: value.into() }
	}
}

impl<K, V> From<(K, V)> for Attr
where K: Into<String>, V: Into<String> {
	#[inline]
	fn from((name, value): (K, V)) -> Self { Self::new(name, value) }
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Document Mode.
pub enum DocumentMode {
	#[default]
	/// # Standards Mode.
	NoQuirks,

	/// # Quirks Mode.
	Quirks,

	/// # Almost-Standards Mode.
	LimitedQuirks,
}

impl DocumentMode {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::NoQuirks => "no-quirks",
			Self::Quirks => "quirks",
			Self::LimitedQuirks => "limited-quirks",
		}
	}
}

impl From<html5ever::interface::QuirksMode> for DocumentMode {
	fn from(src: html5ever::interface::QuirksMode) -> Self {
		use html5ever::interface::QuirksMode;

		match src {
			QuirksMode::Quirks => Self::Quirks,
			QuirksMode::LimitedQuirks => Self::LimitedQuirks,
			QuirksMode::NoQuirks => Self::NoQuirks,
		}
	}
}



#[derive(Debug, Clone, Default, Eq, Hash, PartialEq)]
/// # Doctype Details.
pub struct Doctype {
	/// # Name.
	pub name: String,

	/// # Public ID.
	pub public_id: String,

	/// # System ID.
	pub system_id: String,
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Source Location.
///
/// Where (roughly) a node started in the original markup. Only adapters
/// that opt into location tracking ever report one.
pub struct SourceLocation {
	/// # Line Number (1-based).
	pub start_line: u64,
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Element Template.
///
/// See `DEFAULT_ELEMENT`.
pub struct ElementTemplate {
	/// # Tag Name.
	pub tag_name: String,

	/// # Namespace URI.
	pub namespace_uri: Cow<'static, str>,

	/// # Attributes.
	pub attrs: Vec<Attr>,
}

impl ElementTemplate {
	#[must_use]
	/// # With Tag Name.
	///
	/// Return a fresh copy of the default template for `tag`.
	pub fn for_tag(tag: &str) -> Self {
		Self {
			tag_name: tag.to_owned(),
			..DEFAULT_ELEMENT
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Text Template.
///
/// See `DEFAULT_TEXT`.
pub struct TextTemplate {
	/// # Value.
	pub value: String,
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_templates() {
		// Each use of the constant is its own value.
		let mut one = DEFAULT_ELEMENT;
		one.attrs.push(Attr::new("id", "one"));
		one.tag_name.push_str("div");

		let two = DEFAULT_ELEMENT;
		assert!(two.attrs.is_empty());
		assert!(two.tag_name.is_empty());
		assert_eq!(two.namespace_uri, XHTML_NAMESPACE);

		let tpl = ElementTemplate::for_tag("br");
		assert_eq!(tpl.tag_name, "br");
		assert_eq!(tpl.namespace_uri, XHTML_NAMESPACE);
		assert!(DEFAULT_TEXT.value.is_empty());
	}

	#[test]
	fn t_kind_names() {
		assert_eq!(NodeKind::Document.as_str(), "#document");
		assert_eq!(NodeKind::DocumentFragment.to_string(), "#document-fragment");
		assert!(NodeKind::DocumentFragment.is_root());
		assert!(! NodeKind::Text.is_container());
	}

	#[test]
	fn t_attr_from() {
		assert_eq!(Attr::from(("rel", "stylesheet")), Attr::new("rel", "stylesheet"));
	}
}
