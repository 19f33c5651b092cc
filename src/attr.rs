/*!
# HTMTree: Attributes.

Conversions between an element's ordered attribute list and a name/value
mapping, plus single-attribute CRUD.

The mapping type is an `IndexMap`, so iteration follows insertion order and
`to_attribute_list(attributes_of(node))` gives back the original ordering.
*/

use crate::{
	Attr,
	TreeAdapter,
};
use indexmap::IndexMap;



/// # Attribute Mapping.
pub type AttrMap = IndexMap<String, String>;



/// # Attributes Of.
///
/// Fold the node's attribute list into a mapping. If a name appears more
/// than once, the last value wins (at the position of the first).
///
/// Non-elements produce an empty mapping.
pub fn attributes_of<A: TreeAdapter>(adapter: &A, node: &A::Node) -> AttrMap {
	adapter.attr_list(node)
		.into_iter()
		.map(|Attr { name, value }| (name, value))
		.collect()
}

#[must_use]
/// # Get Attribute.
///
/// Note that an empty value, e.g. a boolean attribute like `async`, comes back
/// as `Some("")`, not `None`.
pub fn get_attribute<A: TreeAdapter>(adapter: &A, node: &A::Node, name: &str)
-> Option<String> {
	attributes_of(adapter, node).swap_remove(name)
}

/// # Set Attribute.
///
/// If the attribute already exists, its value is changed in place, keeping
/// its position; otherwise it is added to the end.
///
/// Any later duplicates of the same name are dropped, so the element ends up
/// with exactly one.
pub fn set_attribute<A: TreeAdapter>(adapter: &A, node: &A::Node, name: &str, value: &str) {
	let mut attrs = adapter.attr_list(node);

	if let Some(pos) = attrs.iter().position(|a| a.name == name) {
		// Nothing to do?
		let dupes = attrs[pos + 1..].iter().any(|a| a.name == name);
		if attrs[pos].value == value && ! dupes { return; }

		value.clone_into(&mut attrs[pos].value);
		if dupes {
			let mut idx = 0;
			attrs.retain(|a| {
				idx += 1;
				idx <= pos + 1 || a.name != name
			});
		}
	}
	else { attrs.push(Attr::new(name, value)); }

	adapter.set_attr_list(node, attrs);
}

/// # Remove Attribute.
///
/// Absent attributes are fine; there's just nothing to do.
pub fn remove_attribute<A: TreeAdapter>(adapter: &A, node: &A::Node, name: &str) {
	let mut attrs = adapter.attr_list(node);
	let before = attrs.len();
	attrs.retain(|a| a.name != name);
	if attrs.len() != before { adapter.set_attr_list(node, attrs); }
}

/// # To Attribute List.
///
/// Convert a mapping back into an ordered attribute list. The order follows
/// whatever order the mapping iterates in, which is stable for `AttrMap`
/// (and any other ordered map), but arbitrary for a `HashMap`.
pub fn to_attribute_list<I, K, V>(map: I) -> Vec<Attr>
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: Into<String>,
{
	map.into_iter().map(Attr::from).collect()
}

#[must_use]
/// # Class List.
///
/// Split the `class` attribute on single spaces. Missing or empty values
/// produce an empty list.
pub fn class_list_of<A: TreeAdapter>(adapter: &A, node: &A::Node) -> Vec<String> {
	match get_attribute(adapter, node, "class") {
		Some(v) if ! v.is_empty() => v.split(' ').map(String::from).collect(),
		_ => Vec::new(),
	}
}
