//! Localized terms for placeholders, function descriptions and narrative headers
//!
//! Lookups fall back to English, then to the key itself, so a missing
//! translation never blocks a pre-fill.

use crate::catalog::Locale;
use tracing::debug;

/// Source of localized strings
pub trait Localizer: Send + Sync {
    /// Exact lookup without fallback
    fn lookup(&self, locale: Locale, key: &str) -> Option<&str>;

    /// Localized text, falling back to English and then to `key`
    fn text(&self, locale: Locale, key: &str) -> String {
        if let Some(text) = self.lookup(locale, key) {
            return text.to_string();
        }
        if locale != Locale::En {
            debug!("No {} translation for {}, using English", locale.as_str(), key);
            if let Some(text) = self.lookup(Locale::En, key) {
                return text.to_string();
            }
        }
        key.to_string()
    }

    /// Localized text with `{0}`, `{1}`, ... replaced by `args`
    fn format(&self, locale: Locale, key: &str, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(self.text(locale, key), |text, (index, arg)| {
                text.replace(&format!("{{{index}}}"), arg)
            })
    }
}

/// Localization keys
pub mod keys {
    /// Neighborhood when no parish is given
    pub const LOCAL_AREA: &str = "placeholder.local_area";
    /// Area phrase near the coast
    pub const COASTAL: &str = "placeholder.coastal";
    /// Area phrase inland
    pub const INLAND: &str = "placeholder.inland";
    /// Country name when the country is unknown
    pub const ISLAND: &str = "placeholder.island";

    /// Core function description
    pub const FUNCTION_CORE: &str = "function.core";
    /// Support function description
    pub const FUNCTION_SUPPORT: &str = "function.support";
    /// Administrative function description
    pub const FUNCTION_ADMINISTRATIVE: &str = "function.administrative";

    /// Narrative header
    pub const PREVENTION_HEADER: &str = "strategy.prevention";
    /// Narrative header
    pub const RESPONSE_HEADER: &str = "strategy.response";
    /// Narrative header
    pub const RECOVERY_HEADER: &str = "strategy.recovery";

    /// Narrative header
    pub const PRIORITIES_HEADER: &str = "plan.priorities";
    /// Narrative header
    pub const BUDGET_HEADER: &str = "plan.budget";
    /// Narrative header
    pub const TEAM_HEADER: &str = "plan.team";
    /// Narrative header
    pub const RESOURCES_HEADER: &str = "plan.resources";
    /// Narrative header
    pub const RESPONSIBILITIES_HEADER: &str = "plan.responsibilities";
    /// Narrative header
    pub const REVIEW_HEADER: &str = "plan.review";
    /// Narrative header
    pub const TESTING_HEADER: &str = "plan.testing";
}

struct Entry {
    key: &'static str,
    en: &'static str,
    es: Option<&'static str>,
    fr: Option<&'static str>,
}

const fn entry(
    key: &'static str,
    en: &'static str,
    es: Option<&'static str>,
    fr: Option<&'static str>,
) -> Entry {
    Entry { key, en, es, fr }
}

const ENTRIES: &[Entry] = &[
    entry(keys::LOCAL_AREA, "the local area", Some("la zona local"), Some("le quartier")),
    entry(keys::COASTAL, "coastal", Some("costera"), Some("côtière")),
    entry(keys::INLAND, "inland", Some("del interior"), Some("de l'intérieur")),
    entry(keys::ISLAND, "the island", Some("la isla"), Some("l'île")),
    entry(
        keys::FUNCTION_CORE,
        "{0}: must continue or resume within 24 hours",
        Some("{0}: debe continuar o reanudarse en 24 horas"),
        Some("{0} : doit continuer ou reprendre sous 24 heures"),
    ),
    entry(
        keys::FUNCTION_SUPPORT,
        "{0}: must resume within one week",
        Some("{0}: debe reanudarse en una semana"),
        Some("{0} : doit reprendre sous une semaine"),
    ),
    entry(
        keys::FUNCTION_ADMINISTRATIVE,
        "{0}: can be deferred for up to one month",
        Some("{0}: puede posponerse hasta un mes"),
        None,
    ),
    entry(
        keys::PREVENTION_HEADER,
        "Prevention Strategies",
        Some("Estrategias de Prevención"),
        Some("Stratégies de prévention"),
    ),
    entry(
        keys::RESPONSE_HEADER,
        "Response Strategies",
        Some("Estrategias de Respuesta"),
        Some("Stratégies de réponse"),
    ),
    entry(
        keys::RECOVERY_HEADER,
        "Recovery Strategies",
        Some("Estrategias de Recuperación"),
        Some("Stratégies de rétablissement"),
    ),
    entry(
        keys::PRIORITIES_HEADER,
        "Implementation Priorities",
        Some("Prioridades de Implementación"),
        Some("Priorités de mise en œuvre"),
    ),
    entry(
        keys::BUDGET_HEADER,
        "Budget Estimate",
        Some("Presupuesto Estimado"),
        Some("Budget estimatif"),
    ),
    entry(
        keys::TEAM_HEADER,
        "Implementation Team",
        Some("Equipo de Implementación"),
        Some("Équipe de mise en œuvre"),
    ),
    entry(
        keys::RESOURCES_HEADER,
        "Resource Requirements",
        Some("Recursos Necesarios"),
        Some("Ressources nécessaires"),
    ),
    entry(
        keys::RESPONSIBILITIES_HEADER,
        "Responsibility Assignments",
        Some("Asignación de Responsabilidades"),
        None,
    ),
    entry(
        keys::REVIEW_HEADER,
        "Plan Review Schedule",
        Some("Calendario de Revisión del Plan"),
        Some("Calendrier de révision du plan"),
    ),
    entry(
        keys::TESTING_HEADER,
        "Testing and Drill Schedule",
        Some("Calendario de Pruebas y Simulacros"),
        Some("Calendrier des tests et exercices"),
    ),
];

/// Built-in English, Spanish and French strings
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocalizer;

impl Localizer for StaticLocalizer {
    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        let entry = ENTRIES.iter().find(|entry| entry.key == key)?;
        match locale {
            Locale::En => Some(entry.en),
            Locale::Es => entry.es,
            Locale::Fr => entry.fr,
        }
    }
}
