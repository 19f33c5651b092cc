/*!
# HTMTree: Engine.
*/

use crate::{
	Attr,
	attr::{
		self,
		AttrMap,
	},
	DefaultTreeAdapter,
	ElementTemplate,
	Error,
	DEFAULT_TEXT,
	mutate,
	parse,
	query,
	Roots,
	ser,
	TreeAdapter,
};



#[derive(Debug, Clone)]
/// # Options.
///
/// Settings shared by every parse and serialize call an `Engine` makes, as
/// well as the adapter all of its operations run through.
///
/// ## Examples
///
/// ```
/// use htmtree::{ArenaTreeAdapter, Engine, Options};
///
/// let opts = Options::new()
///     .with_tree_adapter(ArenaTreeAdapter::new())
///     .with_scripting_enabled(false);
/// let engine = Engine::with_options(opts);
/// assert!(! engine.options().scripting_enabled);
/// ```
pub struct Options<A = DefaultTreeAdapter> {
	/// # Tree Adapter.
	pub tree_adapter: A,

	/// # Scripting Enabled?
	///
	/// This affects how `<noscript>` content is parsed and serialized.
	pub scripting_enabled: bool,

	/// # Exact Errors?
	///
	/// Ask the parser for more detailed (and more expensive) error messages.
	/// These only ever show up in `trace`-level logs.
	pub exact_errors: bool,

	/// # Track Source Locations?
	///
	/// Record the line each element starts on, for adapters that support
	/// it.
	pub source_locations: bool,
}

impl<A: Default> Default for Options<A> {
	fn default() -> Self {
		Self {
			tree_adapter: A::default(),
			scripting_enabled: true,
			exact_errors: false,
			source_locations: false,
		}
	}
}

impl Options {
	#[must_use]
	/// # New.
	///
	/// Default options with the default adapter.
	pub fn new() -> Self { Self::default() }
}

impl<A> Options<A> {
	#[must_use]
	/// # With Tree Adapter.
	pub fn with_tree_adapter<B>(self, tree_adapter: B) -> Options<B> {
		Options {
			tree_adapter,
			scripting_enabled: self.scripting_enabled,
			exact_errors: self.exact_errors,
			source_locations: self.source_locations,
		}
	}

	#[must_use]
	/// # With Scripting Enabled.
	pub fn with_scripting_enabled(mut self, scripting_enabled: bool) -> Self {
		self.scripting_enabled = scripting_enabled;
		self
	}

	#[must_use]
	/// # With Exact Errors.
	pub fn with_exact_errors(mut self, exact_errors: bool) -> Self {
		self.exact_errors = exact_errors;
		self
	}

	#[must_use]
	/// # With Source Locations.
	pub fn with_source_locations(mut self, source_locations: bool) -> Self {
		self.source_locations = source_locations;
		self
	}
}



#[derive(Debug, Clone, Default)]
/// # Engine.
///
/// A configured entry point to everything in this crate: parsing and
/// serialization, plus the traversal, query, attribute, and mutation
/// helpers with the adapter already filled in.
///
/// The free functions in the various modules do all the real work, so
/// there's nothing here you can't do without an engine; it's just tidier.
///
/// ## Examples
///
/// ```
/// use htmtree::Engine;
///
/// let engine = Engine::new();
/// let root = engine.parse_fragment(r#"<link rel="stylesheet">"#);
/// let link = engine.first_node_by_tag("link", &root).unwrap();
/// engine.set_attribute(&link, "href", "file.css");
///
/// assert_eq!(
///     engine.serialize(&root).unwrap(),
///     r#"<link rel="stylesheet" href="file.css">"#,
/// );
/// ```
pub struct Engine<A: TreeAdapter = DefaultTreeAdapter> {
	/// # Options.
	options: Options<A>,
}

impl Engine {
	#[must_use]
	/// # New.
	///
	/// An engine with default options, backed by `DefaultTreeAdapter`.
	pub fn new() -> Self { Self::default() }
}

impl<A: TreeAdapter> From<Options<A>> for Engine<A> {
	#[inline]
	fn from(options: Options<A>) -> Self { Self { options } }
}

/// # Setup.
impl<A: TreeAdapter> Engine<A> {
	#[must_use]
	/// # With Options.
	pub const fn with_options(options: Options<A>) -> Self { Self { options } }

	#[must_use]
	/// # Options.
	pub const fn options(&self) -> &Options<A> { &self.options }

	#[must_use]
	/// # Options (Mutable).
	pub const fn options_mut(&mut self) -> &mut Options<A> { &mut self.options }

	/// # Update Options.
	///
	/// Tweak the options in place. Changes apply to subsequent calls only;
	/// trees already built are unaffected.
	pub fn update_options<F>(&mut self, cb: F)
	where F: FnOnce(&mut Options<A>) { cb(&mut self.options); }

	#[must_use]
	/// # Adapter.
	pub const fn adapter(&self) -> &A { &self.options.tree_adapter }

	#[must_use]
	/// # Into Options.
	pub fn into_options(self) -> Options<A> { self.options }
}

/// # Parsing and Serialization.
impl<A: TreeAdapter> Engine<A> {
	#[must_use]
	/// # Parse Document.
	///
	/// Parse `html` as a complete document, missing bits and all.
	pub fn parse(&self, html: &str) -> A::Node { parse::document(&self.options, html) }

	#[must_use]
	/// # Parse Fragment.
	///
	/// Parse `html` as `<body>` content, returning a document fragment.
	pub fn parse_fragment(&self, html: &str) -> A::Node {
		parse::fragment(&self.options, html)
	}

	#[must_use]
	/// # Parse Fragment (With Context).
	///
	/// Parse `html` as if it were the content of `context`, returning a
	/// document fragment. Non-element contexts are treated like `<body>`.
	pub fn parse_fragment_with_context(&self, context: &A::Node, html: &str) -> A::Node {
		parse::fragment_with_context(&self.options, context, html)
	}

	#[must_use]
	/// # Auto Parse.
	///
	/// Parse `html` as a document if it looks like one, otherwise as a
	/// fragment. See `is_document_html`.
	pub fn auto_parse(&self, html: &str) -> A::Node { parse::auto(&self.options, html) }

	#[must_use]
	/// # Is Document HTML?
	pub fn is_document_html(&self, html: &str) -> bool { parse::is_document_html(html) }

	/// # Serialize.
	///
	/// Render the children of `node` as HTML.
	///
	/// ## Errors
	///
	/// Serialization errors are passed through, though they're not expected
	/// in practice.
	pub fn serialize(&self, node: &A::Node) -> Result<String, Error> {
		ser::serialize(self.adapter(), node, self.options.scripting_enabled)
	}

	/// # Serialize (Outer).
	///
	/// Render `node` itself, and its children, as HTML.
	///
	/// ## Errors
	///
	/// Serialization errors are passed through, though they're not expected
	/// in practice.
	pub fn serialize_outer(&self, node: &A::Node) -> Result<String, Error> {
		ser::serialize_outer(self.adapter(), node, self.options.scripting_enabled)
	}
}

/// # Creation.
impl<A: TreeAdapter> Engine<A> {
	#[must_use]
	/// # Create Document.
	pub fn create_document(&self) -> A::Node { self.adapter().create_document() }

	#[must_use]
	/// # Create Document Fragment.
	pub fn create_document_fragment(&self) -> A::Node {
		self.adapter().create_document_fragment()
	}

	#[must_use]
	/// # Create Element.
	pub fn create_element(&self, tag_name: &str, namespace_uri: &str, attrs: Vec<Attr>)
	-> A::Node {
		self.adapter().create_element(tag_name, namespace_uri, attrs)
	}

	#[must_use]
	/// # Create Element From Template.
	pub fn create_from_template(&self, template: ElementTemplate) -> A::Node {
		let ElementTemplate { tag_name, namespace_uri, attrs } = template;
		self.adapter().create_element(&tag_name, &namespace_uri, attrs)
	}

	#[must_use]
	/// # Create Node.
	///
	/// Create an XHTML element with no attributes, starting from
	/// `DEFAULT_ELEMENT`.
	pub fn create_node(&self, tag_name: &str) -> A::Node {
		self.create_from_template(ElementTemplate::for_tag(tag_name))
	}

	#[must_use]
	/// # Create Text Node.
	///
	/// Starting from `DEFAULT_TEXT`, so `None` gives an empty node.
	pub fn create_text_node(&self, value: Option<&str>) -> A::Node {
		let mut template = DEFAULT_TEXT;
		if let Some(value) = value { template.value.push_str(value); }
		self.adapter().create_text_node(&template.value)
	}

	#[must_use]
	/// # Create Comment Node.
	pub fn create_comment_node(&self, data: &str) -> A::Node {
		self.adapter().create_comment_node(data)
	}
}

/// # Traversal and Queries.
impl<A: TreeAdapter> Engine<A> {
	/// # Find First.
	///
	/// See `find_first`.
	pub fn find_first<P, R>(&self, predicate: P, roots: R) -> Option<A::Node>
	where P: FnMut(&A::Node) -> bool, R: Into<Roots<A::Node>> {
		crate::find_first(self.adapter(), predicate, roots)
	}

	/// # Find All.
	///
	/// See `find_all`.
	pub fn find_all<P, R>(&self, predicate: P, roots: R) -> Vec<A::Node>
	where P: FnMut(&A::Node) -> bool, R: Into<Roots<A::Node>> {
		crate::find_all(self.adapter(), predicate, roots)
	}

	/// # All Nodes.
	pub fn all_nodes<R: Into<Roots<A::Node>>>(&self, roots: R) -> Vec<A::Node> {
		query::all_nodes(self.adapter(), roots)
	}

	/// # Flatten.
	///
	/// This is an alias of `all_nodes`.
	pub fn flatten<R: Into<Roots<A::Node>>>(&self, roots: R) -> Vec<A::Node> {
		query::flatten(self.adapter(), roots)
	}

	/// # Nodes by Tag.
	pub fn nodes_by_tag<R: Into<Roots<A::Node>>>(&self, tag: &str, roots: R) -> Vec<A::Node> {
		query::nodes_by_tag(self.adapter(), tag, roots)
	}

	/// # First Node by Tag.
	pub fn first_node_by_tag<R: Into<Roots<A::Node>>>(&self, tag: &str, roots: R)
	-> Option<A::Node> {
		query::first_node_by_tag(self.adapter(), tag, roots)
	}

	/// # Nodes by Class.
	pub fn nodes_by_class<R: Into<Roots<A::Node>>>(&self, name: &str, roots: R)
	-> Vec<A::Node> {
		query::nodes_by_class(self.adapter(), name, roots)
	}

	/// # Node by ID.
	pub fn node_by_id<R: Into<Roots<A::Node>>>(&self, id: &str, roots: R) -> Option<A::Node> {
		query::node_by_id(self.adapter(), id, roots)
	}

	/// # Text Nodes.
	pub fn text_nodes<R: Into<Roots<A::Node>>>(&self, roots: R) -> Vec<A::Node> {
		query::text_nodes(self.adapter(), roots)
	}

	/// # Tag Predicate.
	pub fn is_tag_match<'a>(&'a self, tag: &'a str) -> impl Fn(&A::Node) -> bool + 'a {
		query::is_tag_match(self.adapter(), tag)
	}

	/// # Class Predicate.
	pub fn has_class_match<'a>(&'a self, name: &'a str) -> impl Fn(&A::Node) -> bool + 'a {
		query::has_class_match(self.adapter(), name)
	}

	/// # ID Predicate.
	pub fn is_id_match<'a>(&'a self, id: &'a str) -> impl Fn(&A::Node) -> bool + 'a {
		query::is_id_match(self.adapter(), id)
	}
}

/// # Attributes.
impl<A: TreeAdapter> Engine<A> {
	#[must_use]
	/// # Attributes Of.
	pub fn attributes_of(&self, node: &A::Node) -> AttrMap {
		attr::attributes_of(self.adapter(), node)
	}

	#[must_use]
	/// # Get Attribute.
	pub fn get_attribute(&self, node: &A::Node, name: &str) -> Option<String> {
		attr::get_attribute(self.adapter(), node, name)
	}

	/// # Set Attribute.
	pub fn set_attribute(&self, node: &A::Node, name: &str, value: &str) {
		attr::set_attribute(self.adapter(), node, name, value);
	}

	/// # Remove Attribute.
	pub fn remove_attribute(&self, node: &A::Node, name: &str) {
		attr::remove_attribute(self.adapter(), node, name);
	}

	#[must_use]
	/// # Class List.
	pub fn class_list_of(&self, node: &A::Node) -> Vec<String> {
		attr::class_list_of(self.adapter(), node)
	}
}

/// # Mutation.
impl<A: TreeAdapter> Engine<A> {
	/// # Append.
	pub fn append(&self, parent: &A::Node, node: &A::Node) -> A::Node {
		mutate::append(self.adapter(), parent, node)
	}

	/// # Prepend.
	pub fn prepend(&self, parent: &A::Node, node: &A::Node) -> A::Node {
		mutate::prepend(self.adapter(), parent, node)
	}

	/// # Insert Before.
	pub fn insert_before(&self, parent: &A::Node, new_node: &A::Node, reference: &A::Node)
	-> Option<A::Node> {
		mutate::insert_before(self.adapter(), parent, new_node, reference)
	}

	/// # Detach.
	pub fn detach(&self, node: &A::Node) { mutate::detach(self.adapter(), node); }

	/// # Remove.
	///
	/// This is an alias of `detach`.
	pub fn remove(&self, node: &A::Node) { mutate::remove(self.adapter(), node); }

	/// # Replace.
	pub fn replace(&self, original: &A::Node, replacement: &A::Node) -> Option<A::Node> {
		mutate::replace(self.adapter(), original, replacement)
	}

	/// # Set Text.
	pub fn set_text(&self, node: &A::Node, text: Option<&str>) {
		mutate::set_text(self.adapter(), node, text);
	}

	/// # Insert Text.
	pub fn insert_text(&self, parent: &A::Node, text: &str) {
		mutate::insert_text(self.adapter(), parent, text);
	}

	/// # Text Content.
	///
	/// ## Errors
	///
	/// See `mutate::text_content`.
	pub fn text_content(&self, node: &A::Node) -> Result<String, Error> {
		mutate::text_content(self.adapter(), node)
	}

	/// # Text Of.
	///
	/// This is an alias of `text_content`.
	///
	/// ## Errors
	///
	/// See `mutate::text_content`.
	pub fn text_of(&self, node: &A::Node) -> Result<String, Error> {
		mutate::text_of(self.adapter(), node)
	}

	#[must_use]
	/// # First Child.
	pub fn first_child(&self, node: &A::Node) -> Option<A::Node> {
		self.adapter().first_child(node)
	}

	#[must_use]
	/// # Parent Node.
	pub fn parent_node(&self, node: &A::Node) -> Option<A::Node> {
		self.adapter().parent_node(node)
	}

	#[must_use]
	/// # Child Nodes.
	pub fn child_nodes(&self, node: &A::Node) -> Vec<A::Node> {
		self.adapter().child_nodes(node)
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		ArenaTreeAdapter,
		NodeKind,
		XHTML_NAMESPACE,
	};

	#[test]
	fn t_options() {
		let opts = Options::new();
		assert!(opts.scripting_enabled);
		assert!(! opts.exact_errors);
		assert!(! opts.source_locations);

		let mut engine = Engine::with_options(
			opts.with_tree_adapter(ArenaTreeAdapter::new()).with_exact_errors(true)
		);
		assert!(engine.options().exact_errors);

		engine.update_options(|o| { o.scripting_enabled = false; });
		assert!(! engine.options().scripting_enabled);

		engine.options_mut().source_locations = true;
		assert!(engine.options().source_locations);
	}

	#[test]
	fn t_scripting() {
		let html = "<noscript><p>Hi</p></noscript>";

		// With scripting, noscript content is raw text.
		let mut engine = Engine::new();
		let root = engine.parse_fragment(html);
		let noscript = engine.first_node_by_tag("noscript", &root).expect("Missing noscript.");
		assert!(engine.first_node_by_tag("p", &root).is_none());
		assert_eq!(engine.text_content(&noscript).expect("Text failed."), "<p>Hi</p>");

		// Without it, it's markup.
		engine.update_options(|o| { o.scripting_enabled = false; });
		let root = engine.parse_fragment(html);
		assert!(engine.first_node_by_tag("p", &root).is_some());
		assert_eq!(engine.serialize(&root).expect("Serialize failed."), html);
	}

	#[test]
	fn t_create() {
		let engine = Engine::new();
		let br = engine.create_node("br");
		assert_eq!(engine.adapter().tag_name(&br).as_deref(), Some("br"));
		assert_eq!(engine.adapter().namespace_uri(&br).as_deref(), Some(XHTML_NAMESPACE));
		assert!(engine.attributes_of(&br).is_empty());

		let txt = engine.create_text_node(None);
		assert_eq!(engine.adapter().text_node_content(&txt).as_deref(), Some(""));

		let txt = engine.create_text_node(Some("Hi"));
		assert_eq!(engine.adapter().text_node_content(&txt).as_deref(), Some("Hi"));

		let svg = engine.create_from_template(ElementTemplate {
			tag_name: "svg".to_owned(),
			namespace_uri: "http://www.w3.org/2000/svg".into(),
			attrs: vec![Attr::new("viewBox", "0 0 1 1")],
		});
		assert_eq!(
			engine.serialize_outer(&svg).expect("Serialize failed."),
			r#"<svg viewBox="0 0 1 1"></svg>"#,
		);

		assert_eq!(engine.adapter().node_kind(&engine.create_document()), NodeKind::Document);
	}
}
