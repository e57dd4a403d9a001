use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dom_core::NodeId;
use sim_dom::SimDom;
use tab_scan::{ScanMode, TabOrder, scan};

const SMALL_SECTIONS: usize = 16;
const LARGE_SECTIONS: usize = 2_000;

/// A region of repeated sections: a wrapper div holding an input, a link,
/// a decorative span, and a hidden input per section.
fn make_region(sections: usize) -> (SimDom, NodeId) {
    let mut dom = SimDom::new();
    let body = dom.body();
    let region = dom.el(body, "div", &[]);
    for _ in 0..sections {
        let section = dom.el(region, "div", &[]);
        dom.el(section, "input", &[]);
        dom.el(section, "a", &[("href", "#")]);
        dom.el(section, "span", &[]);
        dom.el(section, "input", &[("style", "display:none")]);
    }
    (dom, region)
}

fn bench_scan_small(c: &mut Criterion) {
    let (dom, region) = make_region(SMALL_SECTIONS);
    c.bench_function("bench_scan_small", |b| {
        b.iter(|| {
            let candidates = scan(&dom, black_box(region), ScanMode::Tabbable);
            black_box(candidates.len());
        });
    });
}

fn bench_scan_large(c: &mut Criterion) {
    let (dom, region) = make_region(LARGE_SECTIONS);
    c.bench_function("bench_scan_large", |b| {
        b.iter(|| {
            let candidates = scan(&dom, black_box(region), ScanMode::Tabbable);
            black_box(candidates.len());
        });
    });
}

fn bench_resolve_positive_indices(c: &mut Criterion) {
    let (mut dom, region) = make_region(LARGE_SECTIONS);
    let body = dom.body();
    let shard = dom.el(body, "div", &[]);
    dom.el(shard, "input", &[("tabindex", "3")]);
    dom.el(shard, "input", &[("tabindex", "1")]);
    let roots = [region, shard];
    c.bench_function("bench_resolve_positive_indices", |b| {
        b.iter(|| {
            let order = TabOrder::resolve(&dom, black_box(&roots), true);
            black_box(order.first());
        });
    });
}

criterion_group!(
    benches,
    bench_scan_small,
    bench_scan_large,
    bench_resolve_positive_indices
);
criterion_main!(benches);
