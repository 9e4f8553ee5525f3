use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexi_case_search::reference::ReferenceData;
use lexi_case_search::store::{seed_records, CaseStore};
use lexi_case_search::{Config, QueryEngine, SearchCategory, SearchRequest};
use std::sync::Arc;

fn bench_search(c: &mut Criterion) {
    let engine = QueryEngine::new(
        Arc::new(Config::default()),
        Arc::new(CaseStore::new(seed_records())),
        Arc::new(ReferenceData::seed()),
    );

    let by_respondent = SearchRequest {
        state: "KA".to_string(),
        commission: "KA001".to_string(),
        query: "bank".to_string(),
        category: SearchCategory::Respondent,
    };
    c.bench_function("search_respondent", |b| {
        b.iter(|| engine.search(black_box(&by_respondent)).unwrap())
    });

    let no_match = SearchRequest {
        state: "KA".to_string(),
        commission: "KA001".to_string(),
        query: "no such party".to_string(),
        category: SearchCategory::Complainant,
    };
    c.bench_function("search_fallback", |b| {
        b.iter(|| engine.search(black_box(&no_match)).unwrap())
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
