/*!
# HTMTree: Tree Adapters.

Everything else in this crate, right down to parsing and serialization,
talks to trees exclusively through the `TreeAdapter` trait, so any node
representation implementing it gets the whole toolkit for free.

Two representations ship with the crate:
* `DefaultTreeAdapter`: reference-counted nodes with weak parent links;
* `ArenaTreeAdapter`: index-addressed nodes living in a single arena.
*/

pub(crate) mod arena;
pub(crate) mod rc;

use crate::{
	Attr,
	DocumentMode,
	NodeKind,
	SourceLocation,
};
use html5ever::{
	LocalName,
	Namespace,
	QualName,
};

pub use arena::{
	ArenaTreeAdapter,
	NodeId,
};
pub use rc::{
	DefaultTreeAdapter,
	Handle,
	Node,
};



/// # Tree Adapter.
///
/// The capability contract between the generic tree algorithms and a
/// concrete node representation.
///
/// All methods take `&self`; implementations are expected to use interior
/// mutability for structural edits, same as `html5ever`'s `TreeSink`.
///
/// ## Structural Guarantees
///
/// Implementations must keep each node in at most one child list:
/// `append_child` and `insert_before` detach the incoming node from its
/// current parent (if any) before splicing it in, and every splice updates
/// the node's parent link in the same call.
///
/// Inserting a node into its own subtree is not checked, and will produce a
/// cycle.
pub trait TreeAdapter {
	/// # Node Handle.
	///
	/// Cloning a handle must be cheap and must refer to the same node.
	type Node: Clone;

	// Creation.

	/// # Create Document.
	fn create_document(&self) -> Self::Node;

	/// # Create Document Fragment.
	fn create_document_fragment(&self) -> Self::Node;

	/// # Create Element.
	fn create_element(&self, tag_name: &str, namespace_uri: &str, attrs: Vec<Attr>)
	-> Self::Node;

	/// # Create Text Node.
	fn create_text_node(&self, value: &str) -> Self::Node;

	/// # Create Comment Node.
	fn create_comment_node(&self, data: &str) -> Self::Node;

	// Structure.

	/// # Append Child.
	fn append_child(&self, parent: &Self::Node, child: &Self::Node);

	/// # Insert Before.
	///
	/// Splice `new_node` into `parent` immediately before `reference`. If
	/// `reference` is not a child of `parent`, nothing happens.
	fn insert_before(&self, parent: &Self::Node, new_node: &Self::Node, reference: &Self::Node);

	/// # Detach Node.
	///
	/// Remove `node` from its parent's child list and clear its parent link.
	/// Parentless nodes are left alone.
	fn detach_node(&self, node: &Self::Node);

	/// # Child Nodes.
	///
	/// Return a snapshot of the node's children, in order. Leaf nodes return
	/// an empty list.
	fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node>;

	/// # Parent Node.
	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

	/// # Same Node?
	///
	/// Identity, not equality.
	fn same_node(&self, a: &Self::Node, b: &Self::Node) -> bool;

	// Inspection.

	/// # Node Kind.
	fn node_kind(&self, node: &Self::Node) -> NodeKind;

	/// # Tag Name.
	///
	/// Returns `None` for non-elements.
	fn tag_name(&self, node: &Self::Node) -> Option<String>;

	/// # Namespace URI.
	///
	/// Returns `None` for non-elements.
	fn namespace_uri(&self, node: &Self::Node) -> Option<String>;

	#[must_use]
	/// # Element Name.
	///
	/// Return the element's qualified name, or an empty one for
	/// non-elements.
	///
	/// The parser calls this on every scope check. The default rebuilds the
	/// name from `tag_name` and `namespace_uri`; adapters storing a
	/// `QualName` should return a clone instead.
	fn element_name(&self, node: &Self::Node) -> QualName {
		let local = self.tag_name(node).unwrap_or_default();
		let ns = self.namespace_uri(node).unwrap_or_default();
		QualName::new(None, Namespace::from(ns), LocalName::from(local))
	}

	/// # Text Node Content.
	///
	/// Returns `None` for non-text nodes.
	fn text_node_content(&self, node: &Self::Node) -> Option<String>;

	/// # Comment Node Content.
	///
	/// Returns `None` for non-comment nodes.
	fn comment_node_content(&self, node: &Self::Node) -> Option<String>;

	/// # Doctype Name.
	fn document_type_name(&self, node: &Self::Node) -> Option<String>;

	/// # Doctype Public ID.
	fn document_type_public_id(&self, node: &Self::Node) -> Option<String>;

	/// # Doctype System ID.
	fn document_type_system_id(&self, node: &Self::Node) -> Option<String>;

	/// # Attribute List.
	///
	/// Return a copy of the element's attributes, in order. Non-elements
	/// return an empty list.
	fn attr_list(&self, node: &Self::Node) -> Vec<Attr>;

	// State.

	/// # Set Attribute List.
	///
	/// Replace the element's attributes wholesale. This is a no-op for
	/// non-elements.
	fn set_attr_list(&self, node: &Self::Node, attrs: Vec<Attr>);

	/// # Set Text Node Content.
	///
	/// This is a no-op for non-text nodes.
	fn set_text_node_content(&self, node: &Self::Node, value: &str);

	/// # Set Document Mode.
	fn set_document_mode(&self, document: &Self::Node, mode: DocumentMode);

	/// # Document Mode.
	fn document_mode(&self, document: &Self::Node) -> DocumentMode;

	/// # Set Document Type.
	///
	/// Update the document's doctype node, or add one if missing.
	fn set_document_type(
		&self,
		document: &Self::Node,
		name: &str,
		public_id: &str,
		system_id: &str,
	);

	/// # Set Template Content.
	fn set_template_content(&self, template: &Self::Node, content: &Self::Node);

	/// # Template Content.
	fn template_content(&self, template: &Self::Node) -> Option<Self::Node>;

	// Optional: source locations.

	/// # Node Source Location.
	///
	/// Adapters that don't track locations can leave this be.
	fn node_source_location(&self, _node: &Self::Node) -> Option<SourceLocation> { None }

	/// # Set Node Source Location.
	fn set_node_source_location(&self, _node: &Self::Node, _loc: SourceLocation) {}

	/// # Update Node Source Location.
	///
	/// By default this is the same as setting it.
	fn update_node_source_location(&self, node: &Self::Node, loc: SourceLocation) {
		self.set_node_source_location(node, loc);
	}

	// Provided.

	#[must_use]
	/// # Node Name.
	///
	/// Elements return their tag name; everything else their kind's
	/// discriminant name.
	fn node_name(&self, node: &Self::Node) -> String {
		self.tag_name(node)
			.unwrap_or_else(|| self.node_kind(node).as_str().to_owned())
	}

	#[must_use]
	/// # Is Element?
	fn is_element_node(&self, node: &Self::Node) -> bool {
		matches!(self.node_kind(node), NodeKind::Element)
	}

	#[must_use]
	/// # Is Text?
	fn is_text_node(&self, node: &Self::Node) -> bool {
		matches!(self.node_kind(node), NodeKind::Text)
	}

	#[must_use]
	/// # Is Comment?
	fn is_comment_node(&self, node: &Self::Node) -> bool {
		matches!(self.node_kind(node), NodeKind::Comment)
	}

	#[must_use]
	/// # Is Doctype?
	fn is_document_type_node(&self, node: &Self::Node) -> bool {
		matches!(self.node_kind(node), NodeKind::DocumentType)
	}

	#[must_use]
	/// # First Child.
	fn first_child(&self, node: &Self::Node) -> Option<Self::Node> {
		self.child_nodes(node).into_iter().next()
	}

	/// # Insert Text.
	///
	/// Append `text` to `parent`, merging it into the last child if that
	/// happens to be a text node already.
	fn insert_text(&self, parent: &Self::Node, text: &str) {
		if let Some(last) = self.child_nodes(parent).pop() {
			if let Some(mut old) = self.text_node_content(&last) {
				old.push_str(text);
				self.set_text_node_content(&last, &old);
				return;
			}
		}

		let node = self.create_text_node(text);
		self.append_child(parent, &node);
	}

	/// # Insert Text Before.
	///
	/// Insert `text` before `reference`, merging it into the preceding
	/// sibling if that's a text node.
	fn insert_text_before(&self, parent: &Self::Node, text: &str, reference: &Self::Node) {
		let children = self.child_nodes(parent);
		let Some(pos) = children.iter().position(|c| self.same_node(c, reference)) else {
			return;
		};

		if pos != 0 {
			if let Some(mut old) = self.text_node_content(&children[pos - 1]) {
				old.push_str(text);
				self.set_text_node_content(&children[pos - 1], &old);
				return;
			}
		}

		let node = self.create_text_node(text);
		self.insert_before(parent, &node, reference);
	}

	/// # Adopt Attributes.
	///
	/// Add any of `attrs` the element doesn't already have.
	fn adopt_attributes(&self, recipient: &Self::Node, attrs: Vec<Attr>) {
		let mut list = self.attr_list(recipient);
		let before = list.len();
		for attr in attrs {
			if ! list.iter().any(|a| a.name == attr.name) { list.push(attr); }
		}

		if list.len() != before { self.set_attr_list(recipient, list); }
	}
}
