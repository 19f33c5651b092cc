/*!
# HTMTree: Arena Adapter.

All nodes live in one contiguous `Vec`, addressed by `NodeId`. Parent and
child relationships are plain indices, so there's no reference counting at
all.

The arena never frees anything: detached nodes simply become unreachable
from their former root, and stay allocated until the adapter is dropped.
*/

use crate::{
	Attr,
	Doctype,
	DocumentMode,
	NodeKind,
	TreeAdapter,
};
use html5ever::{
	LocalName,
	Namespace,
	QualName,
};
use std::cell::RefCell;



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Node ID.
///
/// An index into an `ArenaTreeAdapter`. IDs are only meaningful for the
/// arena that issued them.
pub struct NodeId(usize);

impl NodeId {
	#[must_use]
	/// # Index.
	pub const fn index(self) -> usize { self.0 }
}



#[derive(Debug, Clone)]
/// # Arena Node.
struct ArenaNode {
	/// # Data.
	data: ArenaData,

	/// # Parent.
	parent: Option<NodeId>,

	/// # Children.
	children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
/// # Arena Node Data.
enum ArenaData {
	Document(DocumentMode),
	DocumentFragment,
	Element {
		name: QualName,
		attrs: Vec<Attr>,
		template: Option<NodeId>,
	},
	Text(String),
	Comment(String),
	Doctype(Doctype),
}

impl ArenaData {
	/// # Kind.
	const fn kind(&self) -> NodeKind {
		match self {
			Self::Document(_) => NodeKind::Document,
			Self::DocumentFragment => NodeKind::DocumentFragment,
			Self::Element { .. } => NodeKind::Element,
			Self::Text(_) => NodeKind::Text,
			Self::Comment(_) => NodeKind::Comment,
			Self::Doctype(_) => NodeKind::DocumentType,
		}
	}
}



#[derive(Debug, Default)]
/// # Arena Tree Adapter.
///
/// Unlike `DefaultTreeAdapter`, this adapter owns the tree data; node
/// handles are just `Copy` indices into it.
pub struct ArenaTreeAdapter {
	/// # Nodes.
	nodes: RefCell<Vec<ArenaNode>>,
}

impl ArenaTreeAdapter {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		Self { nodes: RefCell::new(Vec::with_capacity(capacity)) }
	}

	#[must_use]
	/// # Length.
	///
	/// The total number of nodes ever allocated, attached or not.
	pub fn len(&self) -> usize { self.nodes.borrow().len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.nodes.borrow().is_empty() }

	/// # Allocate.
	fn alloc(&self, data: ArenaData) -> NodeId {
		let mut nodes = self.nodes.borrow_mut();
		let id = NodeId(nodes.len());
		nodes.push(ArenaNode { data, parent: None, children: Vec::new() });
		id
	}

	/// # With Node.
	///
	/// Run a callback against a node's data, returning `None` if the ID is
	/// bogus.
	fn with<F, T>(&self, id: NodeId, cb: F) -> Option<T>
	where F: FnOnce(&ArenaNode) -> Option<T> {
		self.nodes.borrow().get(id.0).and_then(cb)
	}

	/// # With Node (Mutable).
	fn with_mut<F>(&self, id: NodeId, cb: F)
	where F: FnOnce(&mut ArenaNode) {
		if let Some(node) = self.nodes.borrow_mut().get_mut(id.0) { cb(node); }
	}

	/// # Child Position.
	fn position(&self, parent: NodeId, child: NodeId) -> Option<usize> {
		self.with(parent, |p| p.children.iter().position(|&c| c == child))
	}
}

impl TreeAdapter for ArenaTreeAdapter {
	type Node = NodeId;

	fn create_document(&self) -> NodeId {
		self.alloc(ArenaData::Document(DocumentMode::NoQuirks))
	}

	fn create_document_fragment(&self) -> NodeId {
		self.alloc(ArenaData::DocumentFragment)
	}

	fn create_element(&self, tag_name: &str, namespace_uri: &str, attrs: Vec<Attr>)
	-> NodeId {
		self.alloc(ArenaData::Element {
			name: QualName::new(None, Namespace::from(namespace_uri), LocalName::from(tag_name)),
			attrs,
			template: None,
		})
	}

	fn create_text_node(&self, value: &str) -> NodeId {
		self.alloc(ArenaData::Text(value.to_owned()))
	}

	fn create_comment_node(&self, data: &str) -> NodeId {
		self.alloc(ArenaData::Comment(data.to_owned()))
	}

	fn append_child(&self, parent: &NodeId, child: &NodeId) {
		self.detach_node(child);
		self.with_mut(*child, |c| c.parent = Some(*parent));
		self.with_mut(*parent, |p| p.children.push(*child));
	}

	fn insert_before(&self, parent: &NodeId, new_node: &NodeId, reference: &NodeId) {
		if new_node == reference || self.position(*parent, *reference).is_none() {
			return;
		}

		self.detach_node(new_node);
		if let Some(pos) = self.position(*parent, *reference) {
			self.with_mut(*new_node, |c| c.parent = Some(*parent));
			self.with_mut(*parent, |p| p.children.insert(pos, *new_node));
		}
	}

	fn detach_node(&self, node: &NodeId) {
		let mut parent = None;
		self.with_mut(*node, |n| { parent = n.parent.take(); });
		if let Some(parent) = parent {
			self.with_mut(parent, |p| p.children.retain(|c| c != node));
		}
	}

	fn child_nodes(&self, node: &NodeId) -> Vec<NodeId> {
		self.with(*node, |n| Some(n.children.clone())).unwrap_or_default()
	}

	fn parent_node(&self, node: &NodeId) -> Option<NodeId> {
		self.with(*node, |n| n.parent)
	}

	fn same_node(&self, a: &NodeId, b: &NodeId) -> bool { a == b }

	fn node_kind(&self, node: &NodeId) -> NodeKind {
		// Bogus IDs behave like empty fragments.
		self.with(*node, |n| Some(n.data.kind())).unwrap_or(NodeKind::DocumentFragment)
	}

	fn tag_name(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Element { ref name, .. } => Some(name.local.to_string()),
			_ => None,
		})
	}

	fn namespace_uri(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Element { ref name, .. } => Some(name.ns.to_string()),
			_ => None,
		})
	}

	fn element_name(&self, node: &NodeId) -> QualName {
		self.with(*node, |n| match n.data {
			ArenaData::Element { ref name, .. } => Some(name.clone()),
			_ => None,
		})
			.unwrap_or_else(|| QualName::new(None, Namespace::from(""), LocalName::from("")))
	}

	fn text_node_content(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Text(ref v) => Some(v.clone()),
			_ => None,
		})
	}

	fn comment_node_content(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Comment(ref v) => Some(v.clone()),
			_ => None,
		})
	}

	fn document_type_name(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Doctype(ref dt) => Some(dt.name.clone()),
			_ => None,
		})
	}

	fn document_type_public_id(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Doctype(ref dt) => Some(dt.public_id.clone()),
			_ => None,
		})
	}

	fn document_type_system_id(&self, node: &NodeId) -> Option<String> {
		self.with(*node, |n| match n.data {
			ArenaData::Doctype(ref dt) => Some(dt.system_id.clone()),
			_ => None,
		})
	}

	fn attr_list(&self, node: &NodeId) -> Vec<Attr> {
		self.with(*node, |n| match n.data {
			ArenaData::Element { ref attrs, .. } => Some(attrs.clone()),
			_ => None,
		})
			.unwrap_or_default()
	}

	fn set_attr_list(&self, node: &NodeId, new: Vec<Attr>) {
		self.with_mut(*node, |n| {
			if let ArenaData::Element { ref mut attrs, .. } = n.data { *attrs = new; }
		});
	}

	fn set_text_node_content(&self, node: &NodeId, value: &str) {
		self.with_mut(*node, |n| {
			if let ArenaData::Text(ref mut v) = n.data {
				v.clear();
				v.push_str(value);
			}
		});
	}

	fn set_document_mode(&self, document: &NodeId, mode: DocumentMode) {
		self.with_mut(*document, |n| {
			if let ArenaData::Document(ref mut m) = n.data { *m = mode; }
		});
	}

	fn document_mode(&self, document: &NodeId) -> DocumentMode {
		self.with(*document, |n| match n.data {
			ArenaData::Document(m) => Some(m),
			_ => None,
		})
			.unwrap_or_default()
	}

	fn set_document_type(
		&self,
		document: &NodeId,
		name: &str,
		public_id: &str,
		system_id: &str,
	) {
		let new = Doctype {
			name: name.to_owned(),
			public_id: public_id.to_owned(),
			system_id: system_id.to_owned(),
		};

		let existing = self.child_nodes(document)
			.into_iter()
			.find(|c| self.is_document_type_node(c));

		if let Some(id) = existing {
			self.with_mut(id, |n| n.data = ArenaData::Doctype(new));
		}
		else {
			let id = self.alloc(ArenaData::Doctype(new));
			self.append_child(document, &id);
		}
	}

	fn set_template_content(&self, template: &NodeId, content: &NodeId) {
		self.with_mut(*template, |n| {
			if let ArenaData::Element { ref mut template, .. } = n.data {
				*template = Some(*content);
			}
		});
	}

	fn template_content(&self, template: &NodeId) -> Option<NodeId> {
		self.with(*template, |n| match n.data {
			ArenaData::Element { template, .. } => template,
			_ => None,
		})
	}
}
