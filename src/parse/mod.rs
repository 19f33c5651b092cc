/*!
# HTMTree: Parsing.

Thin wrappers around `html5ever`'s document and fragment parsers that build
straight into whatever adapter the `Options` carry.
*/

mod sink;

use crate::{
	Options,
	TreeAdapter,
};
use html5ever::{
	LocalName,
	Namespace,
	ParseOpts,
	QualName,
	tendril::TendrilSink,
	tokenizer::TokenizerOpts,
	tree_builder::TreeBuilderOpts,
};
use regex::Regex;
use sink::AdapterSink;
use std::sync::LazyLock;
use tracing::debug;



/// # Whole-Document Markers.
///
/// Markup opening with one of these tags (or a doctype) is treated as a
/// full document rather than a fragment.
static DOCUMENT_HTML: LazyLock<Regex> = LazyLock::new(||
	Regex::new(r"(?i)^\s*<(!doctype|html|head|body)\b").unwrap()
);



#[must_use]
/// # Is Document HTML?
///
/// Guess whether `html` is a complete document by looking at how it begins.
///
/// This only looks at the raw text, so a fragment that happens to begin
/// with `<body>` (say) will be misjudged.
pub fn is_document_html(html: &str) -> bool {
	DOCUMENT_HTML.is_match(html)
}

/// # Parse Document.
pub fn document<A: TreeAdapter>(options: &Options<A>, html: &str) -> A::Node {
	let sink = AdapterSink::new(&options.tree_adapter, options.source_locations);
	html5ever::parse_document(sink, parse_opts(options)).one(html)
}

/// # Parse Fragment.
///
/// Parse `html` as if it were the contents of a `<body>` element.
pub fn fragment<A: TreeAdapter>(options: &Options<A>, html: &str) -> A::Node {
	let context = QualName::new(
		None,
		Namespace::from(crate::XHTML_NAMESPACE),
		LocalName::from("body"),
	);
	parse_fragment(options, context, Vec::new(), html)
}

/// # Parse Fragment (With Context).
///
/// Parse `html` as if it were the contents of `context`. The context's
/// attributes are taken into account too, but the context itself is not
/// changed.
///
/// If `context` isn't an element (e.g. a document), this works the same as
/// `fragment`.
pub fn fragment_with_context<A: TreeAdapter>(
	options: &Options<A>,
	context: &A::Node,
	html: &str,
) -> A::Node {
	let adapter = &options.tree_adapter;
	if ! adapter.is_element_node(context) { return fragment(options, html); }

	let attrs = adapter.attr_list(context)
		.into_iter()
		.map(|a| html5ever::Attribute {
			name: QualName::new(None, Namespace::from(""), LocalName::from(a.name)),
			value: a.value.into(),
		})
		.collect();

	parse_fragment(options, adapter.element_name(context), attrs, html)
}

/// # Auto Parse.
///
/// Parse `html` as a document or fragment, depending on what
/// `is_document_html` makes of it.
pub fn auto<A: TreeAdapter>(options: &Options<A>, html: &str) -> A::Node {
	if is_document_html(html) {
		debug!("auto_parse: treating the input as a document");
		document(options, html)
	}
	else {
		debug!("auto_parse: treating the input as a fragment");
		fragment(options, html)
	}
}

/// # Parse Fragment (Shared).
///
/// The tree builder parks fragment content under a synthetic `<html>`
/// root; this moves it over to a proper fragment instead.
fn parse_fragment<A: TreeAdapter>(
	options: &Options<A>,
	context: QualName,
	attrs: Vec<html5ever::Attribute>,
	html: &str,
) -> A::Node {
	let adapter = &options.tree_adapter;
	let sink = AdapterSink::new(adapter, options.source_locations);
	let document = html5ever::parse_fragment(sink, parse_opts(options), context, attrs)
		.one(html);

	let out = adapter.create_document_fragment();
	if let Some(root) = adapter.first_child(&document) {
		for child in adapter.child_nodes(&root) { adapter.append_child(&out, &child); }
	}

	out
}

/// # Parser Options.
fn parse_opts<A: TreeAdapter>(options: &Options<A>) -> ParseOpts {
	ParseOpts {
		tokenizer: TokenizerOpts {
			exact_errors: options.exact_errors,
			..TokenizerOpts::default()
		},
		tree_builder: TreeBuilderOpts {
			exact_errors: options.exact_errors,
			scripting_enabled: options.scripting_enabled,
			..TreeBuilderOpts::default()
		},
	}
}
