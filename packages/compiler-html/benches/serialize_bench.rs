use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailforge_blocks::{Block, BlockRegistry, EmailSettings};
use mailforge_compiler_html::serialize_document;

fn newsletter_blocks() -> Vec<Block> {
    let preset = BlockRegistry::preset("newsletter").unwrap();
    preset
        .blocks
        .into_iter()
        .enumerate()
        .map(|(i, (content, style))| Block::new(format!("bench-{}", i + 1), content, style))
        .collect()
}

fn serialize_newsletter(c: &mut Criterion) {
    let blocks = newsletter_blocks();
    let settings = EmailSettings::default();

    c.bench_function("serialize_newsletter", |b| {
        b.iter(|| serialize_document(black_box(&blocks), black_box(&settings)))
    });
}

fn serialize_long_document(c: &mut Criterion) {
    let mut blocks = Vec::new();
    for round in 0..20 {
        for (i, (content, style)) in BlockRegistry::preset("newsletter")
            .unwrap()
            .blocks
            .into_iter()
            .enumerate()
        {
            blocks.push(Block::new(
                format!("bench-{}-{}", round, i),
                content,
                style,
            ));
        }
    }
    let settings = EmailSettings::default();

    c.bench_function("serialize_long_document", |b| {
        b.iter(|| serialize_document(black_box(&blocks), black_box(&settings)))
    });
}

criterion_group!(benches, serialize_newsletter, serialize_long_document);
criterion_main!(benches);
