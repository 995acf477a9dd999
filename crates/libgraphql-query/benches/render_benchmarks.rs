use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_query::ArgumentValue;
use libgraphql_query::SelectionNode;
use libgraphql_query::field;
use libgraphql_query::named;
use libgraphql_query::operation::Query;
use libgraphql_query::variable;

fn wide_root(num_fields: usize) -> SelectionNode {
    named("WideQuery", (0..num_fields).map(|i| {
        field(format!("field{i}"))
            .with_argument("index", i as i64)
            .with_selections([field("id"), field("name")])
    }))
}

fn deep_root(depth: usize) -> SelectionNode {
    (0..depth).fold(field("leaf"), |child, i| {
        named(format!("level{i}"), [field("id"), child])
    })
}

fn input_heavy_root() -> SelectionNode {
    let filter = ArgumentValue::object([
        ("city", ArgumentValue::from("Paris")),
        ("kind", ArgumentValue::type_token("LOFT")),
        ("rooms", ArgumentValue::list([1, 2, 3, 4])),
        ("owner", ArgumentValue::object([("first", "John"), ("last", "Doe")])),
    ]);
    named("Search", [
        field("listings")
            .with_argument("filter", filter)
            .with_argument("after", variable("cursor"))
            .with_selections([field("id"), field("price")]),
    ]).with_variable_declarations([("cursor", "String")])
}

// ─── Group 1: Operation Rendering ─────────────────────────

fn operation_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("operation_render");

    let wide = Query::new(wide_root(200));
    group.bench_function("wide (200 fields)", |b| {
        b.iter(|| black_box(wide.to_graphql_string()))
    });

    let deep = Query::new(deep_root(64));
    group.bench_function("deep (64 levels)", |b| {
        b.iter(|| black_box(deep.to_graphql_string()))
    });

    let input_heavy = Query::new(input_heavy_root());
    group.bench_function("input objects", |b| {
        b.iter(|| black_box(input_heavy.to_graphql_string()))
    });

    group.finish();
}

// ─── Group 2: Request Bodies ──────────────────────────────

fn request_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_body");

    let request =
        Query::new(input_heavy_root())
            .into_request()
            .bind_variable("cursor", "abc123");
    if let Ok(request) = request {
        group.bench_function("bound variables", |b| {
            b.iter(|| black_box(request.to_request_body().to_json_string()))
        });
    }

    group.finish();
}

criterion_group!(benches, operation_render, request_body);
criterion_main!(benches);
