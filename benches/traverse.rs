/*!
# Benchmark: `htmtree`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};
use htmtree::{
	ArenaTreeAdapter,
	Engine,
	Options,
};
use std::hint::black_box;



/// # Test Markup.
///
/// A few hundred rows of the same table.
fn markup() -> String {
	let mut out = String::from("<table><tbody>");
	for i in 0..500 {
		out.push_str(&format!(
			r#"<tr id="r{i}" class="row{}"><td>{i}</td><td><a href="/{i}">Link</a></td></tr>"#,
			if i % 2 == 0 { " even" } else { "" },
		));
	}
	out.push_str("</tbody></table>");
	out
}

fn parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmtree::parse_fragment");
	let html = markup();

	let engine = Engine::new();
	group.bench_function("DefaultTreeAdapter", |b| {
		b.iter(|| engine.parse_fragment(black_box(&html)))
	});

	// The arena only grows, so start fresh each time.
	group.bench_function("ArenaTreeAdapter", |b| {
		b.iter_with_setup(
			|| Engine::with_options(Options::new().with_tree_adapter(ArenaTreeAdapter::new())),
			|e| { let _ = e.parse_fragment(black_box(&html)); }
		)
	});

	// Every start tag rescans the open-element stack.
	let nested = "<div>".repeat(2000);
	group.bench_function("DefaultTreeAdapter (nested)", |b| {
		b.iter(|| engine.parse_fragment(black_box(&nested)))
	});

	group.finish();
}

fn query(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmtree::query");
	let html = markup();

	let engine = Engine::new();
	let root = engine.parse_fragment(&html);
	group.bench_function("flatten", |b| {
		b.iter(|| engine.flatten(black_box(&root)))
	});
	group.bench_function("nodes_by_class", |b| {
		b.iter(|| engine.nodes_by_class(black_box("even"), &root))
	});
	group.bench_function("node_by_id", |b| {
		b.iter(|| engine.node_by_id(black_box("r499"), &root))
	});

	let arena = Engine::with_options(Options::new().with_tree_adapter(ArenaTreeAdapter::new()));
	let root = arena.parse_fragment(&html);
	group.bench_function("flatten (arena)", |b| {
		b.iter(|| arena.flatten(black_box(&root)))
	});

	group.finish();
}

fn serialize(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmtree::serialize");
	let html = markup();

	let engine = Engine::new();
	let root = engine.parse_fragment(&html);
	group.bench_function("DefaultTreeAdapter", |b| {
		b.iter(|| engine.serialize(black_box(&root)))
	});

	group.finish();
}



criterion_group!(
	benches,
	parse,
	query,
	serialize,
);
criterion_main!(benches);
