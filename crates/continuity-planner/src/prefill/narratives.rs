//! Long-form text for the strategies and action plan steps
//!
//! Output is markdown-like: bold section headers, bullet lists and pipe
//! tables. Headers are localized; body text is English.

use super::localization::{keys, Localizer};
use crate::catalog::Locale;
use crate::strategy_matcher::{normalize_hazard_name, ActionPlan, ActionTask};
use chrono::{Months, NaiveDate};
use std::fmt::Write;

/// Fixed budget rows: phase, focus, estimated range
pub const BUDGET_ROWS: &[(&str, &str, &str)] = &[
    (
        "Immediate (0-3 months)",
        "Emergency supplies, document protection and critical repairs",
        "$2,000 - $5,000",
    ),
    (
        "Short-term (3-6 months)",
        "Backup power, data backup and communication tools",
        "$5,000 - $15,000",
    ),
    (
        "Long-term (6-12 months)",
        "Structural improvements and risk reduction",
        "$10,000 - $50,000",
    ),
    (
        "Ongoing (annual)",
        "Insurance premiums, staff training and drills",
        "$1,000 - $3,000",
    ),
];

/// Drills every plan carries: activity, frequency
pub const FIXED_DRILLS: &[(&str, &str)] = &[
    ("Fire evacuation drill", "Every 6 months"),
    ("Emergency contact list check", "Quarterly"),
    ("Data backup restoration test", "Quarterly"),
    ("Full plan tabletop exercise", "Annually"),
];

/// Hazard keyword, activity, frequency
pub const HAZARD_DRILLS: &[(&str, &str, &str)] = &[
    ("hurricane", "Hurricane preparedness drill", "Annually, before June 1"),
    ("flood", "Flood response walkthrough", "Annually, before the rainy season"),
    ("power", "Generator load test", "Monthly"),
    ("cyber", "Phishing awareness test", "Quarterly"),
    ("earthquake", "Drop, cover and hold drill", "Annually"),
    ("fire", "Fire extinguisher inspection", "Monthly"),
];

fn header(out: &mut String, localizer: &dyn Localizer, locale: Locale, key: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "**{}**", localizer.text(locale, key));
}

fn task_line(out: &mut String, task: &ActionTask) {
    let _ = writeln!(
        out,
        "- {} ({}, {})",
        task.description, task.responsible, task.duration
    );
}

/// Prevention, response and recovery narrative built from the action plans
pub fn strategy_narrative(plans: &[ActionPlan], localizer: &dyn Localizer, locale: Locale) -> String {
    let mut out = String::new();

    if plans.iter().any(|p| !p.long_term_risk_reduction.is_empty()) {
        header(&mut out, localizer, locale, keys::PREVENTION_HEADER);
        for plan in plans {
            for measure in &plan.long_term_risk_reduction {
                let _ = writeln!(out, "- {}: {}", plan.hazard, measure);
            }
        }
    }

    if plans
        .iter()
        .any(|p| !p.immediate_actions.is_empty() || !p.short_term_actions.is_empty())
    {
        header(&mut out, localizer, locale, keys::RESPONSE_HEADER);
        for plan in plans {
            for task in plan.immediate_actions.iter().chain(&plan.short_term_actions) {
                task_line(&mut out, task);
            }
        }
    }

    if plans.iter().any(|p| !p.medium_term_actions.is_empty()) {
        header(&mut out, localizer, locale, keys::RECOVERY_HEADER);
        for plan in plans {
            for task in &plan.medium_term_actions {
                task_line(&mut out, task);
            }
        }
    }

    out
}

/// Hazards phased by risk level: extreme first, then high
pub fn implementation_priorities(
    plans: &[ActionPlan],
    localizer: &dyn Localizer,
    locale: Locale,
) -> String {
    let mut urgent = Vec::new();
    let mut high = Vec::new();
    for plan in plans {
        let level = plan.risk_level.to_lowercase();
        if level.contains("extreme") || level.contains("very") {
            urgent.push(plan.hazard.as_str());
        } else {
            high.push(plan.hazard.as_str());
        }
    }

    let mut out = String::new();
    header(&mut out, localizer, locale, keys::PRIORITIES_HEADER);
    if !urgent.is_empty() {
        let _ = writeln!(out, "- Phase 1 (0-3 months): {}", urgent.join(", "));
    }
    if !high.is_empty() {
        let _ = writeln!(out, "- Phase 2 (3-6 months): {}", high.join(", "));
    }
    let _ = writeln!(
        out,
        "- Phase 3 (6-12 months): Staff training, drills and long-term risk reduction"
    );
    out
}

/// Fixed budget table
pub fn budget_estimate(localizer: &dyn Localizer, locale: Locale) -> String {
    let mut out = String::new();
    header(&mut out, localizer, locale, keys::BUDGET_HEADER);
    out.push_str("| Phase | Focus | Estimated Cost (USD) |\n");
    out.push_str("|---|---|---|\n");
    for (phase, focus, cost) in BUDGET_ROWS {
        let _ = writeln!(out, "| {phase} | {focus} | {cost} |");
    }
    out
}

/// Fixed team roles
pub fn implementation_team(plans: &[ActionPlan], localizer: &dyn Localizer, locale: Locale) -> String {
    let mut out = String::new();
    header(&mut out, localizer, locale, keys::TEAM_HEADER);
    let _ = writeln!(
        out,
        "- Plan Coordinator (Owner/Manager): leads the plan and approves spending"
    );
    let _ = writeln!(
        out,
        "- Safety Officer: runs drills, inspections and evacuations"
    );
    let _ = writeln!(
        out,
        "- Communications Lead: keeps staff, customers and suppliers informed"
    );
    let _ = writeln!(
        out,
        "- Operations Lead: restores equipment, stock and services"
    );
    let _ = writeln!(
        out,
        "The team meets monthly while the {} action plan(s) are being put in place.",
        plans.len()
    );
    out
}

/// Union of action plan resources, first occurrence order
pub fn resource_requirements(plans: &[ActionPlan]) -> Vec<String> {
    let mut resources: Vec<String> = Vec::new();
    for resource in plans.iter().flat_map(|plan| &plan.resources_needed) {
        if !resources.contains(resource) {
            resources.push(resource.clone());
        }
    }
    resources
}

/// Resource union as a bullet list
pub fn resource_list(plans: &[ActionPlan], localizer: &dyn Localizer, locale: Locale) -> String {
    let mut out = String::new();
    header(&mut out, localizer, locale, keys::RESOURCES_HEADER);
    for resource in resource_requirements(plans) {
        let _ = writeln!(out, "- {resource}");
    }
    out
}

/// Tasks grouped by responsible role, roles in first-seen order
pub fn responsibility_assignments(
    plans: &[ActionPlan],
    localizer: &dyn Localizer,
    locale: Locale,
) -> String {
    let mut roles: Vec<(&str, Vec<String>)> = Vec::new();
    for plan in plans {
        let tasks = plan
            .immediate_actions
            .iter()
            .chain(&plan.short_term_actions)
            .chain(&plan.medium_term_actions);
        for task in tasks {
            let line = format!("{} ({})", task.description, plan.hazard);
            match roles.iter_mut().find(|(role, _)| *role == task.responsible) {
                Some((_, lines)) => lines.push(line),
                None => roles.push((task.responsible.as_str(), vec![line])),
            }
        }
    }

    let mut out = String::new();
    header(&mut out, localizer, locale, keys::RESPONSIBILITIES_HEADER);
    for (role, lines) in roles {
        let _ = writeln!(out, "- {role}: {}", lines.join("; "));
    }
    out
}

/// Date of the next full review
pub fn next_review_date(as_of: NaiveDate, interval_months: u32) -> NaiveDate {
    as_of
        .checked_add_months(Months::new(interval_months))
        .unwrap_or(NaiveDate::MAX)
}

/// Fixed review cadence plus the next review date
pub fn review_schedule(
    as_of: NaiveDate,
    interval_months: u32,
    localizer: &dyn Localizer,
    locale: Locale,
) -> String {
    let mut out = String::new();
    header(&mut out, localizer, locale, keys::REVIEW_HEADER);
    let _ = writeln!(out, "- Monthly: check emergency supplies and contact lists");
    let _ = writeln!(out, "- Quarterly: review risks, suppliers and insurance cover");
    let _ = writeln!(out, "- Annually: full plan review and update with all staff");
    let _ = writeln!(
        out,
        "- After any incident: update the plan with lessons learned"
    );
    let _ = writeln!(
        out,
        "Next full review: {}",
        next_review_date(as_of, interval_months).format("%Y-%m-%d")
    );
    out
}

/// Fixed drills plus one row per matched hazard keyword
pub fn testing_schedule(plans: &[ActionPlan], localizer: &dyn Localizer, locale: Locale) -> String {
    let names: Vec<String> = plans
        .iter()
        .map(|plan| normalize_hazard_name(&plan.hazard))
        .collect();

    let mut out = String::new();
    header(&mut out, localizer, locale, keys::TESTING_HEADER);
    out.push_str("| Activity | Frequency |\n");
    out.push_str("|---|---|\n");
    for (activity, frequency) in FIXED_DRILLS {
        let _ = writeln!(out, "| {activity} | {frequency} |");
    }
    for (keyword, activity, frequency) in HAZARD_DRILLS {
        if names.iter().any(|name| name.contains(keyword)) {
            let _ = writeln!(out, "| {activity} | {frequency} |");
        }
    }
    out
}
