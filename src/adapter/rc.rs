/*!
# HTMTree: Default (Reference-Counted) Adapter.

Nodes are self-referential, so they live behind `Rc`; children are owned by
their parent's list, while the parent link is a `Weak` back-reference.
*/

use crate::{
	Attr,
	Doctype,
	DocumentMode,
	NodeKind,
	SourceLocation,
	TreeAdapter,
};
use html5ever::{
	LocalName,
	Namespace,
	QualName,
	tendril::StrTendril,
};
use std::{
	cell::{
		Cell,
		RefCell,
	},
	rc::{
		Rc,
		Weak,
	},
};



/// # Reference-Counted Node.
pub type Handle = Rc<Node>;



#[derive(Debug)]
/// # DOM Node.
///
/// This struct holds the kind-specific data for a node along with its
/// parent and children. Most code deals in `Handle` instead.
pub struct Node {
	/// # Node Kind/Data.
	inner: NodeInner,

	/// # Parent (Back-Reference).
	parent: RefCell<Option<Weak<Node>>>,

	/// # Child Node(s).
	children: RefCell<Vec<Handle>>,

	/// # Source Location.
	location: Cell<Option<SourceLocation>>,
}

impl Drop for Node {
	/// # Drop.
	///
	/// Tear subtrees down iteratively so deeply nested documents can't blow
	/// the stack.
	fn drop(&mut self) {
		let mut stack = std::mem::take(self.children.get_mut());
		if let NodeInner::Element { ref mut template, .. } = self.inner {
			stack.extend(template.get_mut().take());
		}

		while let Some(handle) = stack.pop() {
			if let Ok(mut node) = Rc::try_unwrap(handle) {
				stack.append(node.children.get_mut());
				if let NodeInner::Element { ref mut template, .. } = node.inner {
					stack.extend(template.get_mut().take());
				}
			}
		}
	}
}

impl Node {
	#[must_use]
	/// # New.
	fn new(inner: NodeInner) -> Handle {
		Rc::new(Self {
			inner,
			parent: RefCell::new(None),
			children: RefCell::new(Vec::new()),
			location: Cell::new(None),
		})
	}

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> NodeKind {
		match self.inner {
			NodeInner::Document { .. } => NodeKind::Document,
			NodeInner::DocumentFragment => NodeKind::DocumentFragment,
			NodeInner::Element { .. } => NodeKind::Element,
			NodeInner::Text { .. } => NodeKind::Text,
			NodeInner::Comment { .. } => NodeKind::Comment,
			NodeInner::Doctype { .. } => NodeKind::DocumentType,
		}
	}

	#[must_use]
	/// # Parent.
	pub fn parent(&self) -> Option<Handle> {
		self.parent.borrow().as_ref().and_then(Weak::upgrade)
	}

	#[must_use]
	/// # Children.
	pub fn children(&self) -> Vec<Handle> { self.children.borrow().clone() }
}



#[derive(Debug)]
/// # Node Kind/Data.
enum NodeInner {
	/// # Document Root.
	Document {
		/// # Quirks Mode.
		mode: Cell<DocumentMode>,
	},

	/// # Fragment Root.
	DocumentFragment,

	/// # Element.
	Element {
		/// # Qualified Name.
		name: QualName,

		/// # Attributes.
		attrs: RefCell<Vec<Attr>>,

		/// # Template Content.
		template: RefCell<Option<Handle>>,
	},

	/// # Text.
	Text {
		/// # Content.
		contents: RefCell<StrTendril>,
	},

	/// # Comment.
	Comment {
		/// # Content.
		contents: StrTendril,
	},

	/// # Doctype.
	Doctype(RefCell<Doctype>),
}



#[derive(Debug, Clone, Copy, Default)]
/// # Default Tree Adapter.
///
/// This adapter is stateless; all tree data lives in the `Handle`s
/// themselves.
pub struct DefaultTreeAdapter;

impl DefaultTreeAdapter {
	/// # Child Position.
	///
	/// Find `child` in `parent`'s list by identity.
	fn position(parent: &Handle, child: &Handle) -> Option<usize> {
		parent.children.borrow().iter().position(|v| Rc::ptr_eq(v, child))
	}

	/// # Attach.
	///
	/// Point `child` at its new parent.
	fn set_parent(parent: &Handle, child: &Handle) {
		child.parent.replace(Some(Rc::downgrade(parent)));
	}
}

impl TreeAdapter for DefaultTreeAdapter {
	type Node = Handle;

	fn create_document(&self) -> Handle {
		Node::new(NodeInner::Document { mode: Cell::new(DocumentMode::NoQuirks) })
	}

	fn create_document_fragment(&self) -> Handle {
		Node::new(NodeInner::DocumentFragment)
	}

	fn create_element(&self, tag_name: &str, namespace_uri: &str, attrs: Vec<Attr>)
	-> Handle {
		Node::new(NodeInner::Element {
			name: QualName::new(None, Namespace::from(namespace_uri), LocalName::from(tag_name)),
			attrs: RefCell::new(attrs),
			template: RefCell::new(None),
		})
	}

	fn create_text_node(&self, value: &str) -> Handle {
		Node::new(NodeInner::Text { contents: RefCell::new(StrTendril::from(value)) })
	}

	fn create_comment_node(&self, data: &str) -> Handle {
		Node::new(NodeInner::Comment { contents: StrTendril::from(data) })
	}

	fn append_child(&self, parent: &Handle, child: &Handle) {
		self.detach_node(child);
		Self::set_parent(parent, child);
		parent.children.borrow_mut().push(Rc::clone(child));
	}

	fn insert_before(&self, parent: &Handle, new_node: &Handle, reference: &Handle) {
		if Rc::ptr_eq(new_node, reference) || Self::position(parent, reference).is_none() {
			return;
		}

		// The new node might already be a sibling, so detach it _before_
		// working out where the reference is.
		self.detach_node(new_node);
		if let Some(pos) = Self::position(parent, reference) {
			Self::set_parent(parent, new_node);
			parent.children.borrow_mut().insert(pos, Rc::clone(new_node));
		}
	}

	fn detach_node(&self, node: &Handle) {
		let Some(parent) = node.parent.take().and_then(|w| w.upgrade()) else { return; };
		if let Some(pos) = Self::position(&parent, node) {
			parent.children.borrow_mut().remove(pos);
		}
	}

	fn child_nodes(&self, node: &Handle) -> Vec<Handle> { node.children() }

	fn parent_node(&self, node: &Handle) -> Option<Handle> { node.parent() }

	fn same_node(&self, a: &Handle, b: &Handle) -> bool { Rc::ptr_eq(a, b) }

	fn node_kind(&self, node: &Handle) -> NodeKind { node.kind() }

	fn tag_name(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Element { ref name, .. } = node.inner {
			Some(name.local.to_string())
		}
		else { None }
	}

	fn namespace_uri(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Element { ref name, .. } = node.inner {
			Some(name.ns.to_string())
		}
		else { None }
	}

	fn element_name(&self, node: &Handle) -> QualName {
		if let NodeInner::Element { ref name, .. } = node.inner { name.clone() }
		else { QualName::new(None, Namespace::from(""), LocalName::from("")) }
	}

	fn text_node_content(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Text { ref contents } = node.inner {
			Some(contents.borrow().to_string())
		}
		else { None }
	}

	fn comment_node_content(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Comment { ref contents } = node.inner {
			Some(contents.to_string())
		}
		else { None }
	}

	fn document_type_name(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Doctype(ref dt) = node.inner { Some(dt.borrow().name.clone()) }
		else { None }
	}

	fn document_type_public_id(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Doctype(ref dt) = node.inner { Some(dt.borrow().public_id.clone()) }
		else { None }
	}

	fn document_type_system_id(&self, node: &Handle) -> Option<String> {
		if let NodeInner::Doctype(ref dt) = node.inner { Some(dt.borrow().system_id.clone()) }
		else { None }
	}

	fn attr_list(&self, node: &Handle) -> Vec<Attr> {
		if let NodeInner::Element { ref attrs, .. } = node.inner { attrs.borrow().clone() }
		else { Vec::new() }
	}

	fn set_attr_list(&self, node: &Handle, new: Vec<Attr>) {
		if let NodeInner::Element { ref attrs, .. } = node.inner { attrs.replace(new); }
	}

	fn set_text_node_content(&self, node: &Handle, value: &str) {
		if let NodeInner::Text { ref contents } = node.inner {
			contents.replace(StrTendril::from(value));
		}
	}

	fn set_document_mode(&self, document: &Handle, new: DocumentMode) {
		if let NodeInner::Document { ref mode } = document.inner { mode.set(new); }
	}

	fn document_mode(&self, document: &Handle) -> DocumentMode {
		if let NodeInner::Document { ref mode } = document.inner { mode.get() }
		else { DocumentMode::default() }
	}

	fn set_document_type(
		&self,
		document: &Handle,
		name: &str,
		public_id: &str,
		system_id: &str,
	) {
		let new = Doctype {
			name: name.to_owned(),
			public_id: public_id.to_owned(),
			system_id: system_id.to_owned(),
		};

		// Update the existing one, if any.
		for child in document.children.borrow().iter() {
			if let NodeInner::Doctype(ref dt) = child.inner {
				dt.replace(new);
				return;
			}
		}

		let node = Node::new(NodeInner::Doctype(RefCell::new(new)));
		self.append_child(document, &node);
	}

	fn set_template_content(&self, template: &Handle, content: &Handle) {
		if let NodeInner::Element { template: ref slot, .. } = template.inner {
			slot.replace(Some(Rc::clone(content)));
		}
	}

	fn template_content(&self, template: &Handle) -> Option<Handle> {
		if let NodeInner::Element { template: ref slot, .. } = template.inner {
			slot.borrow().clone()
		}
		else { None }
	}

	fn node_source_location(&self, node: &Handle) -> Option<SourceLocation> {
		node.location.get()
	}

	fn set_node_source_location(&self, node: &Handle, loc: SourceLocation) {
		node.location.set(Some(loc));
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::XHTML_NAMESPACE;

	#[test]
	fn t_append_reparents() {
		let a = DefaultTreeAdapter;
		let one = a.create_element("div", XHTML_NAMESPACE, Vec::new());
		let two = a.create_element("div", XHTML_NAMESPACE, Vec::new());
		let child = a.create_text_node("hello");

		a.append_child(&one, &child);
		assert!(Rc::ptr_eq(&child.parent().expect("Missing parent."), &one));

		// Moving it should take it out of the first list.
		a.append_child(&two, &child);
		assert!(one.children().is_empty());
		assert_eq!(two.children().len(), 1);
		assert!(Rc::ptr_eq(&child.parent().expect("Missing parent."), &two));
	}

	#[test]
	fn t_insert_before() {
		let a = DefaultTreeAdapter;
		let parent = a.create_document_fragment();
		let x = a.create_text_node("x");
		let y = a.create_comment_node("y");
		let z = a.create_element("z", XHTML_NAMESPACE, Vec::new());
		a.append_child(&parent, &x);
		a.append_child(&parent, &y);

		// Move y in front of x.
		a.insert_before(&parent, &y, &x);
		let kids = parent.children();
		assert!(Rc::ptr_eq(&kids[0], &y));
		assert!(Rc::ptr_eq(&kids[1], &x));

		// Stray references are ignored.
		let stray = a.create_text_node("stray");
		a.insert_before(&parent, &z, &stray);
		assert_eq!(parent.children().len(), 2);
		assert!(z.parent().is_none());
	}

	#[test]
	fn t_detach() {
		let a = DefaultTreeAdapter;
		let parent = a.create_document_fragment();
		let child = a.create_text_node("x");
		a.append_child(&parent, &child);

		a.detach_node(&child);
		assert!(parent.children().is_empty());
		assert!(child.parent().is_none());

		// Again, for good measure.
		a.detach_node(&child);
		assert!(child.parent().is_none());
	}

	#[test]
	fn t_doctype() {
		let a = DefaultTreeAdapter;
		let doc = a.create_document();
		a.set_document_type(&doc, "html", "", "");
		a.set_document_type(&doc, "html", "-//W3C//DTD HTML 4.01//EN", "");

		let kids = doc.children();
		assert_eq!(kids.len(), 1);
		assert!(a.is_document_type_node(&kids[0]));
		assert_eq!(
			a.document_type_public_id(&kids[0]).as_deref(),
			Some("-//W3C//DTD HTML 4.01//EN"),
		);
	}

	#[test]
	fn t_element_name() {
		let a = DefaultTreeAdapter;
		let svg = a.create_element("svg", "http://www.w3.org/2000/svg", Vec::new());
		let name = a.element_name(&svg);
		assert_eq!(&*name.local, "svg");
		assert_eq!(&*name.ns, "http://www.w3.org/2000/svg");
		assert_eq!(a.tag_name(&svg).as_deref(), Some("svg"));
		assert_eq!(a.namespace_uri(&svg).as_deref(), Some("http://www.w3.org/2000/svg"));

		// Everything else is nameless.
		let txt = a.create_text_node("x");
		assert!(a.element_name(&txt).local.is_empty());
		assert!(a.tag_name(&txt).is_none());
	}

	#[test]
	fn t_adopt_attributes() {
		let a = DefaultTreeAdapter;
		let div = a.create_element("div", XHTML_NAMESPACE, vec![Attr::new("a", "1")]);
		a.adopt_attributes(&div, vec![Attr::new("b", "2"), Attr::new("a", "3")]);
		assert_eq!(a.attr_list(&div), [Attr::new("a", "1"), Attr::new("b", "2")]);

		// Text nodes have nothing to adopt into.
		let txt = a.create_text_node("x");
		a.adopt_attributes(&txt, vec![Attr::new("a", "1")]);
		assert!(a.attr_list(&txt).is_empty());
	}

	#[test]
	fn t_deep_drop() {
		let a = DefaultTreeAdapter;
		let root = a.create_document_fragment();
		let mut last = Rc::clone(&root);
		for _ in 0..100_000 {
			let next = a.create_element("div", XHTML_NAMESPACE, Vec::new());
			a.append_child(&last, &next);
			last = next;
		}
		drop(last);

		// This would overflow the stack if dropped recursively.
		drop(root);
	}
}
