/*!
# HTMTree: Serialization.

Adapter trees are fed to `html5ever`'s own HTML serializer, so escaping,
void elements, and raw-text handling all match what the parser expects.
*/

use crate::{
	Error,
	NodeKind,
	TreeAdapter,
};
use html5ever::{
	LocalName,
	Namespace,
	QualName,
	serialize::{
		Serialize,
		SerializeOpts,
		Serializer,
		TraversalScope,
	},
};
use std::{
	collections::VecDeque,
	io,
};



/// # Serialize Children.
///
/// Render the children of `node` (but not `node` itself) as HTML. Template
/// elements render their template content.
///
/// ## Errors
///
/// This will bubble up any serializer write errors, which shouldn't
/// actually happen.
pub fn serialize<A: TreeAdapter>(adapter: &A, node: &A::Node, scripting_enabled: bool)
-> Result<String, Error> {
	// Elements are passed along so their text children are escaped (or not)
	// correctly.
	let parent =
		if adapter.is_element_node(node) { Some(adapter.element_name(node)) }
		else { None };

	write(adapter, node, scripting_enabled, TraversalScope::ChildrenOnly(parent))
}

/// # Serialize Node.
///
/// Same as `serialize`, but `node` is included in the output.
///
/// ## Errors
///
/// This will bubble up any serializer write errors, which shouldn't
/// actually happen.
pub fn serialize_outer<A: TreeAdapter>(adapter: &A, node: &A::Node, scripting_enabled: bool)
-> Result<String, Error> {
	write(adapter, node, scripting_enabled, TraversalScope::IncludeNode)
}

/// # Write It.
fn write<A: TreeAdapter>(
	adapter: &A,
	node: &A::Node,
	scripting_enabled: bool,
	traversal_scope: TraversalScope,
) -> Result<String, Error> {
	let mut out = Vec::with_capacity(256);
	html5ever::serialize::serialize(
		&mut out,
		&SerializableNode { adapter, node: node.clone() },
		SerializeOpts {
			scripting_enabled,
			traversal_scope,
			..SerializeOpts::default()
		},
	)?;

	String::from_utf8(out).map_err(|_| Error::Encoding)
}

#[must_use]
/// # Attribute Name.
///
/// Attribute names are stored with their prefixes, e.g. `xlink:href`, and
/// come out the same way with the empty namespace.
fn attr_name(name: &str) -> QualName {
	QualName::new(None, Namespace::from(""), LocalName::from(name))
}



/// # Serializable Node.
///
/// A node paired with its adapter, which is everything `html5ever` needs to
/// walk it.
struct SerializableNode<'a, A: TreeAdapter> {
	/// # Adapter.
	adapter: &'a A,

	/// # Node.
	node: A::Node,
}

impl<A: TreeAdapter> SerializableNode<'_, A> {
	/// # Children.
	///
	/// Templates keep their children in a separate fragment.
	fn children(&self, node: &A::Node) -> Vec<A::Node> {
		self.adapter.template_content(node).map_or_else(
			|| self.adapter.child_nodes(node),
			|content| self.adapter.child_nodes(&content),
		)
	}
}

impl<A: TreeAdapter> Serialize for SerializableNode<'_, A> {
	fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope)
	-> io::Result<()>
	where S: Serializer {
		/// # Serialization Stage.
		enum Stage<N> {
			/// # Open Tag (or Leaf).
			Open(N),

			/// # Close Tag.
			Close(QualName),
		}

		let mut stack = VecDeque::new();
		match traversal_scope {
			TraversalScope::IncludeNode => stack.push_back(Stage::Open(self.node.clone())),
			TraversalScope::ChildrenOnly(_) =>
				stack.extend(self.children(&self.node).into_iter().map(Stage::Open)),
		}

		while let Some(op) = stack.pop_front() {
			let node = match op {
				Stage::Open(node) => node,
				Stage::Close(name) => {
					serializer.end_elem(name)?;
					continue;
				},
			};

			match self.adapter.node_kind(&node) {
				NodeKind::Element => {
					let name = self.adapter.element_name(&node);
					let attrs: Vec<(QualName, String)> = self.adapter.attr_list(&node)
						.into_iter()
						.map(|a| (attr_name(&a.name), a.value))
						.collect();

					serializer.start_elem(
						name.clone(),
						attrs.iter().map(|(k, v)| (k, v.as_str())),
					)?;

					let children = self.children(&node);
					stack.reserve(1 + children.len());
					stack.push_front(Stage::Close(name));
					for child in children.into_iter().rev() {
						stack.push_front(Stage::Open(child));
					}
				},

				// Nested roots are transparent.
				NodeKind::Document | NodeKind::DocumentFragment => {
					let children = self.children(&node);
					stack.reserve(children.len());
					for child in children.into_iter().rev() {
						stack.push_front(Stage::Open(child));
					}
				},

				NodeKind::Text => {
					let text = self.adapter.text_node_content(&node).unwrap_or_default();
					serializer.write_text(&text)?;
				},

				NodeKind::Comment => {
					let text = self.adapter.comment_node_content(&node).unwrap_or_default();
					serializer.write_comment(&text)?;
				},

				NodeKind::DocumentType => {
					let name = self.adapter.document_type_name(&node).unwrap_or_default();
					serializer.write_doctype(&name)?;
				},
			}
		}

		Ok(())
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		ArenaTreeAdapter,
		Attr,
		DefaultTreeAdapter,
		XHTML_NAMESPACE,
	};

	#[test]
	fn t_serialize() {
		let a = DefaultTreeAdapter;
		let root = a.create_document_fragment();
		let div = a.create_element("div", XHTML_NAMESPACE, vec![Attr::new("class", "a&b")]);
		let br = a.create_element("br", XHTML_NAMESPACE, Vec::new());
		a.append_child(&root, &div);
		a.append_child(&div, &br);
		a.insert_text(&div, "1 < 2");
		let comment = a.create_comment_node(" hi ");
		a.append_child(&root, &comment);

		assert_eq!(
			serialize(&a, &root, true).expect("Serialize failed."),
			r#"<div class="a&amp;b"><br>1 &lt; 2</div><!-- hi -->"#,
		);

		// Inner versus outer.
		assert_eq!(serialize(&a, &div, true).expect("Serialize failed."), "<br>1 &lt; 2");
		assert_eq!(
			serialize_outer(&a, &div, true).expect("Serialize failed."),
			r#"<div class="a&amp;b"><br>1 &lt; 2</div>"#,
		);
	}

	#[test]
	fn t_raw_text() {
		let a = ArenaTreeAdapter::new();
		let script = a.create_element("script", XHTML_NAMESPACE, Vec::new());
		a.insert_text(&script, "if (a < b) {}");

		// The parent is known even when it isn't part of the output.
		assert_eq!(serialize(&a, &script, true).expect("Serialize failed."), "if (a < b) {}");
		assert_eq!(
			serialize_outer(&a, &script, true).expect("Serialize failed."),
			"<script>if (a < b) {}</script>",
		);
	}

	#[test]
	fn t_template() {
		let a = ArenaTreeAdapter::new();
		let root = a.create_document_fragment();
		let tpl = a.create_element("template", XHTML_NAMESPACE, Vec::new());
		let content = a.create_document_fragment();
		let p = a.create_element("p", XHTML_NAMESPACE, Vec::new());
		a.set_template_content(&tpl, &content);
		a.append_child(&content, &p);
		a.append_child(&root, &tpl);

		assert_eq!(
			serialize(&a, &root, true).expect("Serialize failed."),
			"<template><p></p></template>",
		);
	}

	#[test]
	fn t_doctype() {
		let a = DefaultTreeAdapter;
		let doc = a.create_document();
		a.set_document_type(&doc, "html", "", "");
		let html = a.create_element("html", XHTML_NAMESPACE, Vec::new());
		a.append_child(&doc, &html);

		assert_eq!(
			serialize(&a, &doc, true).expect("Serialize failed."),
			"<!DOCTYPE html><html></html>",
		);
	}
}
