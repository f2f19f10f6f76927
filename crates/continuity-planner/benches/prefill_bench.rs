use chrono::NaiveDate;
use continuity_planner::{
    ActionPlanMatcher, BusinessType, InMemoryCatalog, LocationProfile, PlannerConfig,
    PreFillAssembler, PreFillRequest, RiskRequest, RiskScoringEngine, RiskSnapshot,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn catalog() -> Arc<InMemoryCatalog> {
    Arc::new(InMemoryCatalog::caribbean())
}

fn bench_risk_scoring(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let catalog = catalog();
    let engine = RiskScoringEngine::new(
        catalog.clone(),
        catalog,
        Arc::new(PlannerConfig::default()),
    );
    let request = RiskRequest::new(
        "grocery_store",
        LocationProfile::new("JM")
            .with_sub_region("Kingston")
            .near_coast(true)
            .urban(true),
    );

    c.bench_function("risk_assessment", |b| {
        b.iter(|| rt.block_on(async { black_box(engine.assess(black_box(&request)).await) }))
    });
}

fn bench_action_plans(c: &mut Criterion) {
    let matcher = ActionPlanMatcher::default();
    let risks: Vec<RiskSnapshot> = [
        ("Hurricane", "Extreme"),
        ("Urban Flooding", "High"),
        ("Power Outage", "High"),
        ("Crime", "High"),
        ("Drought", "Medium"),
    ]
    .iter()
    .map(|(hazard, level)| RiskSnapshot {
        hazard: hazard.to_string(),
        risk_level: level.to_string(),
    })
    .collect();

    c.bench_function("action_plan_generation", |b| {
        b.iter(|| {
            black_box(matcher.generate_action_plans(black_box(&risks), BusinessType::Tourism))
        })
    });
}

fn bench_prefill(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let catalog = catalog();
    let assembler =
        PreFillAssembler::new(catalog.clone(), catalog, Arc::new(PlannerConfig::default()));
    let request = PreFillRequest::new("hotel", "BB")
        .with_parish("Christ Church")
        .near_coast(true)
        .as_of(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

    c.bench_function("prefill_bundle", |b| {
        b.iter(|| rt.block_on(async { black_box(assembler.generate(black_box(&request)).await) }))
    });

    c.bench_function("prefill_and_merge", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(assembler.generate_and_merge(black_box(&request)).await)
            })
        })
    });
}

criterion_group!(benches, bench_risk_scoring, bench_action_plans, bench_prefill);
criterion_main!(benches);
