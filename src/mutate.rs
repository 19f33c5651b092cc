/*!
# HTMTree: Mutation.

Structural edits layered over the adapter primitives. Each of them keeps the
moved node's parent link in step with the list it lands in.

Edits that find nothing to do (say, detaching an orphan) are silent no-ops,
logged at `debug` level.
*/

use crate::{
	Error,
	TreeAdapter,
};
use tracing::debug;



/// # Append.
///
/// Make `node` the last child of `parent`, pulling it out of its old home
/// first if need be. The node is returned for convenience.
pub fn append<A: TreeAdapter>(adapter: &A, parent: &A::Node, node: &A::Node) -> A::Node {
	adapter.append_child(parent, node);
	node.clone()
}

/// # Prepend.
///
/// Make `node` the first child of `parent`. The node is returned for
/// convenience.
pub fn prepend<A: TreeAdapter>(adapter: &A, parent: &A::Node, node: &A::Node) -> A::Node {
	match adapter.first_child(parent) {
		Some(first) if ! adapter.same_node(&first, node) =>
			adapter.insert_before(parent, node, &first),
		// Already there.
		Some(_) => {},
		None => adapter.append_child(parent, node),
	}

	node.clone()
}

/// # Insert Before.
///
/// Splice `new_node` into `parent` immediately before `reference`,
/// returning the inserted node.
///
/// If `reference` is not actually a child of `parent`, nothing happens and
/// `None` is returned.
pub fn insert_before<A: TreeAdapter>(
	adapter: &A,
	parent: &A::Node,
	new_node: &A::Node,
	reference: &A::Node,
) -> Option<A::Node> {
	let owner = adapter.parent_node(reference)?;
	if ! adapter.same_node(&owner, parent) {
		debug!("insert_before: the reference node belongs to a different parent");
		return None;
	}

	adapter.insert_before(parent, new_node, reference);
	Some(new_node.clone())
}

/// # Detach.
///
/// Remove `node` from its parent. The node itself (and its subtree) is left
/// intact, ready to be inserted somewhere else.
///
/// Parentless nodes are ignored, so detaching twice is fine.
pub fn detach<A: TreeAdapter>(adapter: &A, node: &A::Node) {
	if adapter.parent_node(node).is_some() { adapter.detach_node(node); }
	else { debug!("detach: the node has no parent"); }
}

#[inline]
/// # Remove.
///
/// This is an alias of `detach`.
pub fn remove<A: TreeAdapter>(adapter: &A, node: &A::Node) { detach(adapter, node); }

/// # Replace.
///
/// Put `replacement` where `original` is, returning the replacement.
///
/// The original ends up fully detached, its parent link cleared. If it had
/// no parent to begin with, nothing happens and `None` is returned.
pub fn replace<A: TreeAdapter>(adapter: &A, original: &A::Node, replacement: &A::Node)
-> Option<A::Node> {
	let Some(parent) = adapter.parent_node(original) else {
		debug!("replace: the original node has no parent");
		return None;
	};

	if ! adapter.same_node(original, replacement) {
		adapter.insert_before(&parent, replacement, original);
		adapter.detach_node(original);
	}

	Some(replacement.clone())
}

/// # Set Text.
///
/// Throw away all of `node`'s children, replacing them with a single text
/// node holding `text` (or an empty string).
///
/// Leaf nodes like text and comments can't have children, and are left
/// alone.
pub fn set_text<A: TreeAdapter>(adapter: &A, node: &A::Node, text: Option<&str>) {
	if ! adapter.node_kind(node).is_container() {
		debug!("set_text: {} nodes cannot have children", adapter.node_kind(node));
		return;
	}

	for child in adapter.child_nodes(node) { adapter.detach_node(&child); }
	let text = adapter.create_text_node(text.unwrap_or_default());
	adapter.append_child(node, &text);
}

/// # Text Content.
///
/// Return the text of a node holding nothing but text: a node with no
/// children gives back an empty string; a node with a single text child
/// gives back that child's value.
///
/// Mixed or nested content is not flattened.
///
/// ## Errors
///
/// An error is returned if the node has more than one child, or if its only
/// child isn't text.
pub fn text_content<A: TreeAdapter>(adapter: &A, node: &A::Node) -> Result<String, Error> {
	let children = adapter.child_nodes(node);
	match children.as_slice() {
		[] => Ok(String::new()),
		[child] => adapter.text_node_content(child)
			.ok_or_else(|| Error::NotText(adapter.node_kind(child))),
		_ => Err(Error::TextShape(children.len())),
	}
}

#[inline]
/// # Text Of.
///
/// This is an alias of `text_content`.
///
/// ## Errors
///
/// See `text_content`.
pub fn text_of<A: TreeAdapter>(adapter: &A, node: &A::Node) -> Result<String, Error> {
	text_content(adapter, node)
}

#[inline]
/// # Insert Text.
///
/// Append `text` to `parent`, merging it into a trailing text child when
/// there is one.
pub fn insert_text<A: TreeAdapter>(adapter: &A, parent: &A::Node, text: &str) {
	adapter.insert_text(parent, text);
}
