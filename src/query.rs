/*!
# HTMTree: Queries.

Convenience lookups built on the traversal engine. Matching is exact and
case-sensitive; there is no selector syntax.

The `is_*_match` factories return the same predicates the lookups use, for
callers who want to hand them to `find_first` or `find_all` directly.
*/

use crate::{
	attr,
	find_all,
	find_first,
	Roots,
	TreeAdapter,
};



/// # Tag Predicate.
///
/// Match elements whose tag name is exactly `tag`.
pub fn is_tag_match<'a, A: TreeAdapter>(adapter: &'a A, tag: &'a str)
-> impl Fn(&A::Node) -> bool + 'a {
	move |node: &A::Node|
		adapter.is_element_node(node) && &*adapter.element_name(node).local == tag
}

/// # Class Predicate.
///
/// Match elements whose class list contains `name`.
pub fn has_class_match<'a, A: TreeAdapter>(adapter: &'a A, name: &'a str)
-> impl Fn(&A::Node) -> bool + 'a {
	move |node: &A::Node| attr::class_list_of(adapter, node).iter().any(|c| c == name)
}

/// # ID Predicate.
///
/// Match elements whose `id` attribute is exactly `id`.
pub fn is_id_match<'a, A: TreeAdapter>(adapter: &'a A, id: &'a str)
-> impl Fn(&A::Node) -> bool + 'a {
	move |node: &A::Node| attr::get_attribute(adapter, node, "id").is_some_and(|v| v == id)
}



/// # All Nodes.
///
/// Flatten the tree(s) into a preorder list, roots included.
pub fn all_nodes<A, R>(adapter: &A, roots: R) -> Vec<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_all(adapter, |_| true, roots)
}

#[inline]
/// # Flatten.
///
/// This is an alias of `all_nodes`.
pub fn flatten<A, R>(adapter: &A, roots: R) -> Vec<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	all_nodes(adapter, roots)
}

/// # Nodes by Tag.
pub fn nodes_by_tag<A, R>(adapter: &A, tag: &str, roots: R) -> Vec<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_all(adapter, is_tag_match(adapter, tag), roots)
}

/// # First Node by Tag.
pub fn first_node_by_tag<A, R>(adapter: &A, tag: &str, roots: R) -> Option<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_first(adapter, is_tag_match(adapter, tag), roots)
}

/// # Nodes by Class.
pub fn nodes_by_class<A, R>(adapter: &A, name: &str, roots: R) -> Vec<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_all(adapter, has_class_match(adapter, name), roots)
}

/// # Node by ID.
///
/// IDs are supposed to be unique, but if not, the first match wins.
pub fn node_by_id<A, R>(adapter: &A, id: &str, roots: R) -> Option<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_first(adapter, is_id_match(adapter, id), roots)
}

/// # Text Nodes.
pub fn text_nodes<A, R>(adapter: &A, roots: R) -> Vec<A::Node>
where A: TreeAdapter, R: Into<Roots<A::Node>> {
	find_all(adapter, |n| adapter.is_text_node(n), roots)
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		Attr,
		DefaultTreeAdapter,
		Handle,
		XHTML_NAMESPACE,
	};

	/// # Build a Test Tree.
	///
	/// `<p class="one two"><a id="1">Hi</a><a id="2" class="two"></a></p>`
	fn tree(a: &DefaultTreeAdapter) -> Handle {
		let root = a.create_document_fragment();
		let p = a.create_element("p", XHTML_NAMESPACE, vec![Attr::new("class", "one two")]);
		let one = a.create_element("a", XHTML_NAMESPACE, vec![Attr::new("id", "1")]);
		let two = a.create_element("a", XHTML_NAMESPACE, vec![
			Attr::new("id", "2"),
			Attr::new("class", "two"),
		]);
		a.append_child(&root, &p);
		a.append_child(&p, &one);
		a.insert_text(&one, "Hi");
		a.append_child(&p, &two);
		root
	}

	#[test]
	fn t_all_nodes() {
		let a = DefaultTreeAdapter;
		let root = tree(&a);
		let all = flatten(&a, &root);
		assert_eq!(all.len(), 5);
		assert!(a.same_node(&all[0], &root));
		assert_eq!(
			all.iter().map(|n| a.node_name(n)).collect::<Vec<_>>(),
			["#document-fragment", "p", "a", "#text", "a"],
		);
	}

	#[test]
	fn t_by_tag() {
		let a = DefaultTreeAdapter;
		let root = tree(&a);
		assert_eq!(nodes_by_tag(&a, "a", &root).len(), 2);
		assert!(nodes_by_tag(&a, "A", &root).is_empty());

		let first = first_node_by_tag(&a, "a", &root).expect("Missing a.");
		assert_eq!(attr::get_attribute(&a, &first, "id").as_deref(), Some("1"));
		assert!(first_node_by_tag(&a, "span", &root).is_none());
	}

	#[test]
	fn t_by_class() {
		let a = DefaultTreeAdapter;
		let root = tree(&a);
		assert_eq!(nodes_by_class(&a, "two", &root).len(), 2);
		assert_eq!(nodes_by_class(&a, "one", &root).len(), 1);
		assert!(nodes_by_class(&a, "on", &root).is_empty());
	}

	#[test]
	fn t_by_id() {
		let a = DefaultTreeAdapter;
		let root = tree(&a);
		let two = node_by_id(&a, "2", &root).expect("Missing #2.");
		assert_eq!(a.tag_name(&two).as_deref(), Some("a"));
		assert!(node_by_id(&a, "3", &root).is_none());

		// The factories work on their own too.
		let pred = is_id_match(&a, "2");
		assert!(pred(&two));
		assert!(! pred(&root));
	}

	#[test]
	fn t_text_nodes() {
		let a = DefaultTreeAdapter;
		let root = tree(&a);
		let txt = text_nodes(&a, &root);
		assert_eq!(txt.len(), 1);
		assert_eq!(a.text_node_content(&txt[0]).as_deref(), Some("Hi"));
	}
}
