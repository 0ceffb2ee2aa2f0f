use criterion::{criterion_group, criterion_main, Criterion};
use propclass_components::{ClassNameFactory, Props, VNode};
use std::hint::black_box;

fn text_color() -> ClassNameFactory {
    ClassNameFactory::new(
        "span",
        |p: &Props| format!("text-{}", p.get_str("variant").unwrap_or("default")),
        &["variant"],
    )
}

fn bench_normal_render(c: &mut Criterion) {
    let factory = text_color();
    let props = Props::new()
        .set("variant", "red")
        .set("id", "warning")
        .class_name("lead")
        .child("red");

    c.bench_function("render_element", |b| {
        b.iter(|| factory.render(black_box(&props), None))
    });
}

fn bench_decorate_render(c: &mut Criterion) {
    let factory = text_color();
    let props = Props::new()
        .set("variant", "blue")
        .decorate(true)
        .children((0..50).map(|i| {
            VNode::element("li")
                .with_attr("class", "item")
                .with_child(VNode::text(format!("Item {i}")))
        }));

    c.bench_function("render_decorate_50", |b| {
        b.iter(|| factory.render(black_box(&props), None))
    });
}

criterion_group!(benches, bench_normal_render, bench_decorate_render);
criterion_main!(benches);
