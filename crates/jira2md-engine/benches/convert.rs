use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jira2md_engine::{convert, parse_document, render};

fn generate_issue_content(sections: usize) -> String {
    let section = "h2. Section\n\nSome *bold* text with a [link|https://example.com] and [~user].\n\n* item one\n** nested {{code}}\n* item two\n\n||Key||Value||\n|a|[x|http://x.io]|\n|b|(/)|\n\n{code:rust}\nfn main() {}\n{code}\n\n{panel:title=Note}\nbq. quoted -deleted- text\n{panel}\n\n";
    section.repeat(sections)
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    for sections in [10, 100] {
        let content = generate_issue_content(sections);
        group.bench_with_input(BenchmarkId::new("convert", sections), &content, |b, s| {
            b.iter(|| std::hint::black_box(convert(std::hint::black_box(s))));
        });
    }

    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");
    group.sample_size(20);

    let content = generate_issue_content(100);
    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&content))));
    });

    let doc = parse_document(&content);
    group.bench_function("render", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&doc))));
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_phases);
criterion_main!(benches);
