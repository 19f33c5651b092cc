/*!
# HTMTree: Traversal.

Preorder, left-to-right, depth-first search driven by an explicit work
list rather than recursion, so document depth is never bounded by the call
stack.

Each node's children are snapshotted when that node is dequeued. Predicates
that mutate the tree mid-search will therefore change which nodes are
visited later on; don't do that.
*/

use crate::TreeAdapter;
use std::collections::VecDeque;



#[derive(Debug, Clone)]
/// # Search Roots.
///
/// One or more starting points for a search. Absent (`None`) entries are
/// quietly skipped.
pub struct Roots<N>(VecDeque<Option<N>>);

impl<N> Default for Roots<N> {
	#[inline]
	fn default() -> Self { Self(VecDeque::new()) }
}

impl<N: Clone> From<&N> for Roots<N> {
	#[inline]
	fn from(src: &N) -> Self { Self(VecDeque::from([Some(src.clone())])) }
}

impl<N: Clone> From<&[N]> for Roots<N> {
	#[inline]
	fn from(src: &[N]) -> Self { Self(src.iter().cloned().map(Some).collect()) }
}

impl<N: Clone> From<&Vec<N>> for Roots<N> {
	#[inline]
	fn from(src: &Vec<N>) -> Self { Self::from(src.as_slice()) }
}

impl<N> From<Vec<Option<N>>> for Roots<N> {
	#[inline]
	fn from(src: Vec<Option<N>>) -> Self { Self(src.into()) }
}

impl<N> FromIterator<N> for Roots<N> {
	fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
		Self(iter.into_iter().map(Some).collect())
	}
}

impl<N> Roots<N> {
	#[must_use]
	/// # Is Empty?
	///
	/// Note this counts absent entries too.
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }
}



/// # Work List.
///
/// The shared engine behind `find_first` and `find_all`.
struct Walk<'a, A: TreeAdapter> {
	/// # Adapter.
	adapter: &'a A,

	/// # Stack.
	stack: VecDeque<Option<A::Node>>,
}

impl<A: TreeAdapter> Iterator for Walk<'_, A> {
	type Item = A::Node;

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(next) = self.stack.pop_front() {
			// Skip holes.
			let Some(node) = next else { continue; };

			// Queue the children up front, first child first.
			let children = self.adapter.child_nodes(&node);
			self.stack.reserve(children.len());
			for child in children.into_iter().rev() {
				self.stack.push_front(Some(child));
			}

			return Some(node);
		}

		None
	}
}



/// # Find First.
///
/// Return the first node (in preorder) matching `predicate`, or `None` if
/// nothing does.
pub fn find_first<A, P, R>(adapter: &A, mut predicate: P, roots: R) -> Option<A::Node>
where
	A: TreeAdapter,
	P: FnMut(&A::Node) -> bool,
	R: Into<Roots<A::Node>>,
{
	Walk { adapter, stack: roots.into().0 }.find(|n| predicate(n))
}

/// # Find All.
///
/// Return every node (in preorder) matching `predicate`. The result may
/// be empty.
pub fn find_all<A, P, R>(adapter: &A, mut predicate: P, roots: R) -> Vec<A::Node>
where
	A: TreeAdapter,
	P: FnMut(&A::Node) -> bool,
	R: Into<Roots<A::Node>>,
{
	Walk { adapter, stack: roots.into().0 }.filter(|n| predicate(n)).collect()
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		ArenaTreeAdapter,
		XHTML_NAMESPACE,
	};

	/// # Build a Test Tree.
	///
	/// ```text
	/// #document-fragment
	/// ├─ a
	/// │  ├─ b
	/// │  └─ c
	/// │     └─ d
	/// └─ e
	/// ```
	fn tree(arena: &ArenaTreeAdapter) -> crate::NodeId {
		let root = arena.create_document_fragment();
		let mk = |tag: &str| arena.create_element(tag, XHTML_NAMESPACE, Vec::new());
		let (a, b, c, d, e) = (mk("a"), mk("b"), mk("c"), mk("d"), mk("e"));
		arena.append_child(&root, &a);
		arena.append_child(&a, &b);
		arena.append_child(&a, &c);
		arena.append_child(&c, &d);
		arena.append_child(&root, &e);
		root
	}

	#[test]
	fn t_preorder() {
		let arena = ArenaTreeAdapter::new();
		let root = tree(&arena);

		let names: Vec<String> = find_all(&arena, |_| true, &root)
			.iter()
			.map(|n| arena.node_name(n))
			.collect();
		assert_eq!(names, ["#document-fragment", "a", "b", "c", "d", "e"]);
	}

	#[test]
	fn t_find_first() {
		let arena = ArenaTreeAdapter::new();
		let root = tree(&arena);

		let found = find_first(&arena, |n| arena.is_element_node(n), &root)
			.expect("Missing element.");
		assert_eq!(arena.tag_name(&found).as_deref(), Some("a"));

		assert!(find_first(&arena, |n| arena.is_text_node(n), &root).is_none());
	}

	#[test]
	fn t_holes() {
		let arena = ArenaTreeAdapter::new();
		let root = tree(&arena);

		// Absent roots are skipped without complaint.
		let all = find_all(&arena, |_| true, vec![None, Some(root), None]);
		assert_eq!(all.len(), 6);
		assert_eq!(all[0], root);

		let first = find_first(&arena, |_| true, vec![None, Some(root)]);
		assert_eq!(first, Some(root));

		assert!(find_all(&arena, |_| true, Roots::default()).is_empty());
	}

	#[test]
	fn t_multiple_roots() {
		let arena = ArenaTreeAdapter::new();
		let one = tree(&arena);
		let two = tree(&arena);

		// The second tree comes strictly after the first.
		let all = find_all(&arena, |_| true, &[one, two][..]);
		assert_eq!(all.len(), 12);
		assert_eq!(all[0], one);
		assert_eq!(all[6], two);

		// Vectors work without slicing.
		let roots = vec![two, one];
		let all = find_all(&arena, |_| true, &roots);
		assert_eq!(all.len(), 12);
		assert_eq!(all[0], two);
		assert_eq!(all[6], one);
		let first = find_first(&arena, |n| arena.is_element_node(n), &roots)
			.expect("Missing element.");
		assert_eq!(arena.parent_node(&first), Some(two));
	}
}
