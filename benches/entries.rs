// benches/entries.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sheet_scrape::{
    bbcode,
    config::options::RenderOptions,
    specs::{entry, sheet},
};

fn load_sample() -> String {
    std::fs::read_to_string("tests/fixtures/sheet.html")
        .expect("read tests/fixtures/sheet.html")
}

fn bench_entries(c: &mut Criterion) {
    let doc = load_sample();

    c.bench_function("sheet_parse", |b| {
        b.iter(|| {
            let cs = sheet::parse(black_box(&doc)).unwrap();
            black_box(cs.traits.len())
        })
    });

    let fragment = " Once per thread, heal <span>1d6</span> bbc_codeline HP end_bbc_codeline . ";
    c.bench_function("clean_description", |b| {
        b.iter(|| black_box(entry::clean_description(black_box(fragment))))
    });

    let cs = sheet::parse(&doc).unwrap();
    let opts = RenderOptions::default();
    c.bench_function("feature_lines", |b| {
        b.iter(|| {
            let n: usize = cs.traits.iter().map(|f| bbcode::feature_line(f, &opts).len()).sum();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_entries);
criterion_main!(benches);
