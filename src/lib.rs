/*!
# HTMTree

`HTMTree` is a small toolkit for poking at parsed HTML trees: walking them,
querying them, shuffling their nodes and attributes around, and turning them
back into markup.

Parsing and serialization are handled by [`html5ever`](https://crates.io/crates/html5ever),
but nothing else in the crate knows or cares what a node actually looks
like. Every operation goes through the [`TreeAdapter`] trait, so the same
code works on any node representation that implements it. Two ship with the
crate:

* [`DefaultTreeAdapter`]: `Rc` nodes with `Weak` parent links;
* [`ArenaTreeAdapter`]: `Copy` IDs into a single node arena.



## Use

Most things can be reached through an [`Engine`], which bundles an adapter
with the parser/serializer [`Options`]:

```
use htmtree::Engine;

let engine = Engine::new();
let root = engine.parse_fragment("<div><a></a></div>");

// Find the div and stick a <br> in front of its first child.
let div = engine.first_node_by_tag("div", &root).unwrap();
let br = engine.create_node("br");
engine.prepend(&div, &br);

assert_eq!(engine.serialize(&root).unwrap(), "<div><br><a></a></div>");
```

The engine methods are thin wrappers around the free functions in [`attr`],
[`mutate`], [`query`], and [`parse`] (plus [`find_first`] and [`find_all`]),
which take the adapter as an explicit argument instead.



## Limitations

This is not a DOM. There are no live node lists, no events, and no CSS
selectors; tag, class, and ID matching is exact and case-sensitive.

Traversal is iterative, so depth is never a problem, but mutating a tree
from inside a traversal predicate will change what gets visited next.
*/

#![warn(clippy::filetype_is_file)]
#![warn(clippy::integer_division)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::suboptimal_flops)]
#![warn(clippy::unneeded_field_pattern)]
#![warn(macro_use_extern_crate)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(unused_crate_dependencies)]



mod adapter;
pub mod attr;
mod engine;
mod error;
pub mod mutate;
mod node;
pub mod parse;
pub mod query;
mod ser;
mod traverse;

pub use adapter::{
	ArenaTreeAdapter,
	DefaultTreeAdapter,
	Handle,
	Node,
	NodeId,
	TreeAdapter,
};
pub use attr::AttrMap;
pub use engine::{
	Engine,
	Options,
};
pub use error::Error;
pub use node::{
	Attr,
	DEFAULT_ELEMENT,
	DEFAULT_TEXT,
	Doctype,
	DocumentMode,
	ElementTemplate,
	NodeKind,
	SourceLocation,
	TextTemplate,
	XHTML_NAMESPACE,
};
pub use parse::is_document_html;
pub use ser::{
	serialize,
	serialize_outer,
};
pub use traverse::{
	find_all,
	find_first,
	Roots,
};
