use continuity_planner::prefill::fields;
use continuity_planner::{
    calculate_risk_score, get_risk_level, merge_pre_fill_data, ActionPlanMatcher, BusinessOverview,
    BusinessType, FieldValue, FormState, HazardRepository, InMemoryCatalog, Likelihood,
    LocationProfile, PlannerConfig, PreFillAssembler, PreFillRequest, RiskAssessment, RiskRating,
    RiskRequest, RiskScoringEngine, RiskSnapshot, RiskSource, ScoringScheme, Severity, StepId,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

fn engine_with(config: PlannerConfig) -> RiskScoringEngine {
    let catalog = Arc::new(InMemoryCatalog::caribbean());
    RiskScoringEngine::new(catalog.clone(), catalog, Arc::new(config))
}

fn engine() -> RiskScoringEngine {
    engine_with(PlannerConfig::default())
}

fn assembler() -> PreFillAssembler {
    let catalog = Arc::new(InMemoryCatalog::caribbean());
    PreFillAssembler::new(catalog.clone(), catalog, Arc::new(PlannerConfig::default()))
}

fn kingston() -> LocationProfile {
    LocationProfile::new("JM")
        .with_sub_region("Kingston")
        .near_coast(false)
        .urban(true)
}

fn find<'a>(risks: &'a [RiskAssessment], hazard: &str) -> Option<&'a RiskAssessment> {
    risks.iter().find(|risk| risk.hazard == hazard)
}

#[tokio::test]
async fn test_kingston_grocery_risk_list() {
    let risks = engine()
        .assess(&RiskRequest::new("grocery_store", kingston()))
        .await
        .unwrap();

    let hurricane = find(&risks, "Hurricane").expect("hurricane listed");
    assert_eq!(hurricane.likelihood, Likelihood::Likely);
    assert_eq!(hurricane.severity, Severity::Major);
    assert_eq!(hurricane.risk_score, 9);
    assert_eq!(hurricane.risk_level, RiskRating::High);

    let urban_flooding = find(&risks, "Urban Flooding").expect("urban flooding listed");
    assert_eq!(urban_flooding.risk_level, RiskRating::High);
    assert_eq!(urban_flooding.source, Some(RiskSource::Location));

    let power = find(&risks, "Power Outage").expect("power outage listed");
    let unamplified = engine_with(PlannerConfig {
        location_amplification: false,
        ..PlannerConfig::default()
    })
    .assess(&RiskRequest::new("grocery_store", kingston()))
    .await
    .unwrap();
    let base_power = find(&unamplified, "Power Outage").unwrap();
    assert!(power.risk_score > base_power.risk_score);
    assert_eq!(power.likelihood, Likelihood::AlmostCertain);

    // Ranked by score, highest first
    assert!(risks
        .windows(2)
        .all(|pair| pair[0].risk_score >= pair[1].risk_score));
}

#[tokio::test]
async fn test_unknown_country_uses_industry_only() {
    let risks = engine()
        .assess(&RiskRequest::new("restaurant", LocationProfile::new("XX")))
        .await
        .unwrap();

    assert!(!risks.is_empty());
    assert!(risks
        .iter()
        .all(|risk| risk.source == Some(RiskSource::BusinessType)));
}

#[test]
fn test_hurricane_plan_for_tourism() {
    let risks = vec![RiskSnapshot {
        hazard: "Hurricane".to_string(),
        risk_level: "High".to_string(),
    }];
    let plans = ActionPlanMatcher::default().generate_action_plans(&risks, BusinessType::Tourism);

    assert_eq!(plans.len(), 1);
    let plan = &plans[0];
    assert_eq!(plan.hazard, "Hurricane");
    assert_eq!(plan.business_type, BusinessType::Tourism);
    assert!(plan
        .resources_needed
        .contains(&"Hurricane shutters or plywood".to_string()));
    assert!(plan
        .resources_needed
        .contains(&"Guest emergency information cards".to_string()));

    let serialized = serde_json::to_value(plan).unwrap();
    assert_eq!(serialized["businessType"], json!("tourism"));
    assert_eq!(serialized["hazard"], json!("Hurricane"));
}

#[test]
fn test_likely_major_scores_high() {
    assert_eq!(calculate_risk_score(Likelihood::Likely, Severity::Major), 9);
    assert_eq!(get_risk_level(9), RiskRating::High);
    assert_eq!(get_risk_level(9).label(), "High");
}

#[tokio::test]
async fn test_merge_keeps_user_answer() {
    let bundle = assembler()
        .generate(&PreFillRequest::new("grocery_store", "JM"))
        .await
        .unwrap()
        .unwrap();
    let template = match bundle.field(StepId::BusinessOverview, fields::BUSINESS_PURPOSE) {
        Some(FieldValue::Text(text)) => text.clone(),
        other => panic!("unexpected purpose {other:?}"),
    };

    let existing: FormState =
        serde_json::from_value(json!({"BUSINESS_OVERVIEW": {"Business Purpose": "My shop"}}))
            .unwrap();
    let merged = merge_pre_fill_data(&existing, &bundle).unwrap();
    assert_eq!(
        merged["BUSINESS_OVERVIEW"]["Business Purpose"],
        json!("My shop")
    );

    let merged = merge_pre_fill_data(&FormState::new(), &bundle).unwrap();
    assert_eq!(
        merged["BUSINESS_OVERVIEW"]["Business Purpose"],
        json!(template)
    );
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let engine = engine();
    let request = RiskRequest::new(
        "hotel",
        LocationProfile::new("BB")
            .with_sub_region("St. Michael")
            .near_coast(true)
            .urban(true),
    );

    let first = engine.assess(&request).await.unwrap();
    for _ in 0..5 {
        let again = engine.assess(&request).await.unwrap();
        let scores = |risks: &[RiskAssessment]| {
            risks
                .iter()
                .map(|r| (r.hazard_id.clone(), r.risk_score))
                .collect::<Vec<_>>()
        };
        assert_eq!(scores(&first), scores(&again));
    }
}

#[tokio::test]
async fn test_no_duplicate_hazards_and_higher_level_wins() {
    let catalog = Arc::new(InMemoryCatalog::caribbean());
    let engine = engine_with(PlannerConfig {
        location_amplification: false,
        ..PlannerConfig::default()
    });

    for country in catalog.list_countries().await.unwrap() {
        for sub_region in catalog.list_sub_regions(&country).await.unwrap() {
            let location = LocationProfile::new(country.clone())
                .with_sub_region(sub_region)
                .near_coast(true)
                .urban(true);
            let risks = engine
                .assess(&RiskRequest::new("grocery_store", location))
                .await
                .unwrap();
            let ids: HashSet<_> = risks.iter().map(|r| r.hazard_id.as_str()).collect();
            assert_eq!(ids.len(), risks.len(), "duplicate hazard in {country}");
        }
    }

    // Kingston lists crime High, the urban modifier Medium, grocery Medium
    let risks = engine
        .assess(&RiskRequest::new("grocery_store", kingston()))
        .await
        .unwrap();
    let crime = risks.iter().find(|r| r.hazard_id == "crime").unwrap();
    assert_eq!(crime.likelihood, Likelihood::Likely);
    assert_eq!(crime.severity, Severity::Major);
    assert_eq!(crime.source, Some(RiskSource::Combined));
}

#[tokio::test]
async fn test_near_coast_never_lowers_coastal_scores() {
    let catalog = Arc::new(InMemoryCatalog::caribbean());
    let coastal_ids = ["hurricane", "storm_surge", "coastal_flood", "tsunami"];

    for scheme in [ScoringScheme::Standard, ScoringScheme::Matrix, ScoringScheme::Dynamic] {
        let engine = engine_with(PlannerConfig {
            scoring_scheme: scheme,
            ..PlannerConfig::default()
        });
        for country in catalog.list_countries().await.unwrap() {
            for industry in ["grocery_store", "hotel", "restaurant"] {
                let inland = engine
                    .assess(&RiskRequest::new(industry, LocationProfile::new(country.clone())))
                    .await
                    .unwrap();
                let coastal = engine
                    .assess(&RiskRequest::new(
                        industry,
                        LocationProfile::new(country.clone()).near_coast(true),
                    ))
                    .await
                    .unwrap();

                for id in coastal_ids {
                    if let Some(before) = inland.iter().find(|r| r.hazard_id == id) {
                        let after = coastal.iter().find(|r| r.hazard_id == id).unwrap();
                        assert!(
                            after.risk_score >= before.risk_score,
                            "{id} dropped in {country} under {scheme:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_severity_edit_recomputes() {
    let scheme = ScoringScheme::Standard;
    let original = RiskAssessment::new(
        "hurricane",
        "Hurricane",
        Likelihood::Likely,
        Severity::Major,
        scheme,
    );
    assert_eq!(original.risk_score, 9);

    for severity in [
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Catastrophic,
    ] {
        let edited = original.clone().with_severity(severity, scheme);
        assert_eq!(edited.likelihood, Likelihood::Likely);
        assert_eq!(edited.severity, severity);
        assert_eq!(
            edited.risk_score,
            calculate_risk_score(Likelihood::Likely, severity)
        );
        assert_eq!(edited.risk_level, get_risk_level(edited.risk_score));
    }
}

#[test]
fn test_priority_filter() {
    let labels = [
        ("Hurricane", "High", true),
        ("Fire", "EXTREME", true),
        ("Flooding", "very high", true),
        ("Power Outage", "Medium", false),
        ("Drought", "low", false),
        ("Crime", "", false),
        ("Earthquake", "Extreme", true),
    ];
    let risks: Vec<RiskSnapshot> = labels
        .iter()
        .map(|(hazard, level, _)| RiskSnapshot {
            hazard: hazard.to_string(),
            risk_level: level.to_string(),
        })
        .collect();

    let plans = ActionPlanMatcher::default().generate_action_plans(&risks, BusinessType::General);
    let planned: Vec<&str> = plans.iter().map(|p| p.hazard.as_str()).collect();
    let expected: Vec<&str> = labels
        .iter()
        .filter(|(_, _, priority)| *priority)
        .map(|(hazard, _, _)| *hazard)
        .collect();
    assert_eq!(planned, expected);
}

#[tokio::test]
async fn test_merge_fills_only_empty_fields() {
    let bundle = assembler()
        .generate(
            &PreFillRequest::new("restaurant", "TT")
                .with_parish("Port of Spain")
                .urban(true),
        )
        .await
        .unwrap()
        .unwrap();

    let existing: FormState = serde_json::from_value(json!({
        "BUSINESS_OVERVIEW": {
            "Business Purpose": "Roti shop",
            "Key Personnel": "",
            "Customer Base": null
        },
        "STRATEGIES": {
            "Prevention Strategies": ["my_own_strategy"],
            "Response Strategies": []
        }
    }))
    .unwrap();

    let merged = merge_pre_fill_data(&existing, &bundle).unwrap();

    for (step, values) in &existing {
        for (field, value) in values {
            if !continuity_planner::prefill::is_empty_value(value) {
                assert_eq!(&merged[step][field], value, "{step}/{field} overwritten");
            }
        }
    }
    for (step, values) in &bundle.pre_filled_fields {
        for (field, value) in values {
            if value.is_empty() {
                continue;
            }
            let merged_value = &merged[step][field];
            assert!(
                !continuity_planner::prefill::is_empty_value(merged_value),
                "{step}/{field} left empty"
            );
        }
    }
    assert_eq!(merged["BUSINESS_OVERVIEW"]["Business Purpose"], json!("Roti shop"));
    assert_eq!(
        merged["STRATEGIES"]["Prevention Strategies"],
        json!(["my_own_strategy"])
    );
}

#[tokio::test]
async fn test_generate_and_merge_round_trip() {
    let assembler = assembler();
    let request = PreFillRequest::new("hotel", "BS").near_coast(true);
    let first = assembler.generate_and_merge(&request).await.unwrap();

    // A second pass over the merged answers changes nothing the user sees
    let second = assembler
        .generate_and_merge(&request.clone().with_existing(first.clone()))
        .await
        .unwrap();
    assert_eq!(
        first["BUSINESS_OVERVIEW"]["Business Purpose"],
        second["BUSINESS_OVERVIEW"]["Business Purpose"]
    );
    assert_eq!(
        first["RISK_ASSESSMENT"]["Risk Assessment Matrix"],
        second["RISK_ASSESSMENT"]["Risk Assessment Matrix"]
    );
}

#[tokio::test]
async fn test_unknown_industry_merge_is_noop() {
    let existing: FormState =
        serde_json::from_value(json!({"BUSINESS_OVERVIEW": {"Business Purpose": "Boat hire"}}))
            .unwrap();
    let request = PreFillRequest::new("submarine_rental", "JM").with_existing(existing.clone());
    let merged = assembler().generate_and_merge(&request).await.unwrap();
    assert_eq!(merged, existing);
}

#[tokio::test]
async fn test_plans_from_wizard_risk_matrix() {
    let bundle = assembler()
        .generate(&PreFillRequest::new("grocery_store", "JM").with_parish("Kingston").urban(true))
        .await
        .unwrap()
        .unwrap();
    let merged = merge_pre_fill_data(&FormState::new(), &bundle).unwrap();
    let matrix = &merged["RISK_ASSESSMENT"]["Risk Assessment Matrix"];

    let overview = BusinessOverview {
        business_purpose: "Neighborhood grocery store".to_string(),
        products_services: "Groceries".to_string(),
    };
    let plans = ActionPlanMatcher::default().plans_from_value(matrix, None, &overview);
    let priority = bundle
        .hazards
        .iter()
        .filter(|h| h.risk_level.is_priority())
        .count();
    assert_eq!(plans.len(), priority);
    assert!(plans.iter().all(|p| p.business_type == BusinessType::Retail));
}

#[tokio::test]
async fn test_country_name_in_examples() {
    let catalog = InMemoryCatalog::caribbean();
    let set = catalog.get_location_hazard_set("DO").await.unwrap().unwrap();
    let bundle = assembler()
        .generate(&PreFillRequest::new("grocery_store", "DO"))
        .await
        .unwrap()
        .unwrap();
    assert!(bundle
        .examples(StepId::BusinessOverview, fields::CUSTOMER_BASE)
        .iter()
        .any(|text| text.contains(&set.country_name)));
}
