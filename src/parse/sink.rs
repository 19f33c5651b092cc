/*!
# HTMTree: Parser Sink.
*/

use crate::{
	Attr,
	DocumentMode,
	SourceLocation,
	TreeAdapter,
};
use html5ever::{
	Attribute,
	LocalName,
	Namespace,
	QualName,
	tendril::StrTendril,
	tree_builder::{
		ElemName,
		ElementFlags,
		NodeOrText,
		QuirksMode,
		TreeSink,
	},
};
use std::{
	borrow::Cow,
	cell::Cell,
};
use tracing::{
	debug,
	trace,
};



#[derive(Debug, Clone)]
/// # Owned Element Name.
///
/// Adapters hand back owned strings, so element names can't be borrowed
/// from the tree the way `ExpandedName` would like.
pub(crate) struct OwnedElemName(pub(crate) QualName);

impl ElemName for OwnedElemName {
	#[inline]
	fn ns(&self) -> &Namespace { &self.0.ns }

	#[inline]
	fn local_name(&self) -> &LocalName { &self.0.local }
}



/// # Adapter Sink.
///
/// This is the `TreeSink` the HTML parser builds into. Every operation is
/// forwarded to the adapter, so the result is a plain adapter tree with no
/// trace of the parser left in it.
pub(crate) struct AdapterSink<'a, A: TreeAdapter> {
	/// # Adapter.
	adapter: &'a A,

	/// # Document Root.
	document: A::Node,

	/// # Record Source Locations?
	locations: bool,

	/// # Current Line.
	line: Cell<u64>,

	/// # Parse Error Count.
	errors: Cell<usize>,
}

impl<'a, A: TreeAdapter> AdapterSink<'a, A> {
	#[must_use]
	/// # New.
	pub(crate) fn new(adapter: &'a A, locations: bool) -> Self {
		Self {
			adapter,
			document: adapter.create_document(),
			locations,
			line: Cell::new(1),
			errors: Cell::new(0),
		}
	}

	/// # Tag the Location.
	fn locate(&self, node: &A::Node) {
		if self.locations {
			self.adapter.set_node_source_location(
				node,
				SourceLocation { start_line: self.line.get() },
			);
		}
	}
}

impl<A: TreeAdapter> TreeSink for AdapterSink<'_, A> {
	type Handle = A::Node;
	type Output = A::Node;
	type ElemName<'b> = OwnedElemName
	where Self: 'b;

	/// # Finish Parsing.
	///
	/// Return the document root.
	fn finish(self) -> A::Node {
		debug!(errors = self.errors.get(), "parse complete");
		self.document
	}

	/// # Parse Error.
	///
	/// The parser recovers from these on its own; they're only logged.
	fn parse_error(&self, msg: Cow<'static, str>) {
		self.errors.set(self.errors.get() + 1);
		trace!(line = self.line.get(), "parse error: {msg}");
	}

	fn get_document(&self) -> A::Node { self.document.clone() }

	/// # Element Name.
	///
	/// Non-elements come back with an empty name.
	fn elem_name<'b>(&'b self, target: &'b A::Node) -> OwnedElemName {
		OwnedElemName(self.adapter.element_name(target))
	}

	/// # Create Element.
	///
	/// Templates get a fresh fragment to hold their content.
	fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags)
	-> A::Node {
		let node = self.adapter.create_element(
			&name.local,
			&name.ns,
			attrs.into_iter().map(attr).collect(),
		);

		if flags.template {
			let content = self.adapter.create_document_fragment();
			self.adapter.set_template_content(&node, &content);
		}

		self.locate(&node);
		node
	}

	fn create_comment(&self, text: StrTendril) -> A::Node {
		let node = self.adapter.create_comment_node(&text);
		self.locate(&node);
		node
	}

	/// # Create Processing Instruction.
	///
	/// HTML has no such thing; keep the data as a comment.
	fn create_pi(&self, _target: StrTendril, data: StrTendril) -> A::Node {
		self.adapter.create_comment_node(&data)
	}

	fn append(&self, parent: &A::Node, child: NodeOrText<A::Node>) {
		match child {
			NodeOrText::AppendNode(node) => self.adapter.append_child(parent, &node),
			NodeOrText::AppendText(text) => self.adapter.insert_text(parent, &text),
		}
	}

	/// # Append Based on Parent Node.
	///
	/// Insert `child` before `element` if `element` has a parent, otherwise
	/// append it to `prev_element`.
	fn append_based_on_parent_node(
		&self,
		element: &A::Node,
		prev_element: &A::Node,
		child: NodeOrText<A::Node>,
	) {
		if self.adapter.parent_node(element).is_some() {
			self.append_before_sibling(element, child);
		}
		else { self.append(prev_element, child); }
	}

	fn append_before_sibling(&self, sibling: &A::Node, child: NodeOrText<A::Node>) {
		let Some(parent) = self.adapter.parent_node(sibling) else {
			debug!("append_before_sibling: the sibling has no parent");
			return;
		};

		match child {
			NodeOrText::AppendNode(node) =>
				self.adapter.insert_before(&parent, &node, sibling),
			NodeOrText::AppendText(text) =>
				self.adapter.insert_text_before(&parent, &text, sibling),
		}
	}

	fn append_doctype_to_document(
		&self,
		name: StrTendril,
		public_id: StrTendril,
		system_id: StrTendril,
	) {
		self.adapter.set_document_type(&self.document, &name, &public_id, &system_id);
	}

	fn get_template_contents(&self, target: &A::Node) -> A::Node {
		if let Some(content) = self.adapter.template_content(target) { content }
		else {
			let content = self.adapter.create_document_fragment();
			self.adapter.set_template_content(target, &content);
			content
		}
	}

	fn same_node(&self, x: &A::Node, y: &A::Node) -> bool { self.adapter.same_node(x, y) }

	fn set_quirks_mode(&self, mode: QuirksMode) {
		self.adapter.set_document_mode(&self.document, DocumentMode::from(mode));
	}

	fn add_attrs_if_missing(&self, target: &A::Node, attrs: Vec<Attribute>) {
		self.adapter.adopt_attributes(target, attrs.into_iter().map(attr).collect());
	}

	fn remove_from_parent(&self, target: &A::Node) { self.adapter.detach_node(target); }

	fn reparent_children(&self, node: &A::Node, new_parent: &A::Node) {
		for child in self.adapter.child_nodes(node) {
			self.adapter.append_child(new_parent, &child);
		}
	}

	fn set_current_line(&self, line: u64) { self.line.set(line); }
}



/// # Convert Attribute.
///
/// Prefixed names like `xlink:href` keep their prefix.
fn attr(src: Attribute) -> Attr {
	let Attribute { name, value } = src;
	let name = match name.prefix {
		Some(prefix) => format!("{prefix}:{}", name.local),
		None => name.local.to_string(),
	};

	Attr { name, value: value.to_string() }
}
