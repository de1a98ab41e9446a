#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Codec benchmarks: search_sync vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use search_sync::{MemoryEnvironment, QueryParams, QueryStringManager};
use std::hint::black_box;
use url::form_urlencoded;

const QUERIES: &[&str] = &[
    "param1=value1&param2=value2&param3=value3",
    "q=hello+world&lang=en&page=12&sort=-created_at",
    "name=Fran%C3%A7ois&city=S%C3%A3o%20Paulo&tag=a&tag=b&tag=c",
    "utm_source=newsletter&utm_medium=email&utm_campaign=spring_sale&ref=%2Fhome%3Fx%3D1",
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("search_sync", |b| {
        b.iter(|| {
            for query in QUERIES {
                black_box(QueryParams::parse(black_box(query)));
            }
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            for query in QUERIES {
                let pairs: Vec<(String, String)> =
                    form_urlencoded::parse(black_box(query).as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect();
                black_box(pairs);
            }
        });
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let parsed: Vec<QueryParams> = QUERIES.iter().map(|q| QueryParams::parse(q)).collect();
    let mut group = c.benchmark_group("serialize");

    group.bench_function("search_sync", |b| {
        b.iter(|| {
            for params in &parsed {
                black_box(params.to_query_string());
            }
        });
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            for params in &parsed {
                let mut serializer = form_urlencoded::Serializer::new(String::new());
                for (key, value) in params.iter() {
                    for item in value.as_slice() {
                        serializer.append_pair(key, item);
                    }
                }
                black_box(serializer.finish());
            }
        });
    });

    group.finish();
}

fn bench_manager(c: &mut Criterion) {
    let env = MemoryEnvironment::new("/items?page=1&sort=name&filter=active");
    let manager = QueryStringManager::new(&env);

    c.bench_function("set_params", |b| {
        b.iter(|| {
            black_box(manager.set_params(black_box([("page", "2"), ("view", "grid")]), None));
            env.clear_writes();
        });
    });

    c.bench_function("omit_params", |b| {
        b.iter(|| {
            black_box(manager.omit_params(
                black_box(["filter"]),
                Some("/items?page=1&sort=name&filter=active"),
            ));
            env.clear_writes();
        });
    });
}

criterion_group!(benches, bench_parse, bench_serialize, bench_manager);
criterion_main!(benches);
