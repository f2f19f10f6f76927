//! Reference data types shared by the hazard and industry catalogs

use crate::error::{ContinuityError, ContinuityResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Catalog risk level, totally ordered `Low < Medium < High < VeryHigh`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
    /// Very high risk
    VeryHigh,
}

impl RiskLevel {
    /// Signed distance from `other`, e.g. `High.steps_from(Medium) == 1`
    pub fn steps_from(self, other: RiskLevel) -> i32 {
        self as i32 - other as i32
    }

    /// Catalog code for the level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = ContinuityError;

    fn from_str(s: &str) -> ContinuityResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "very_high" => Ok(RiskLevel::VeryHigh),
            _ => Err(ContinuityError::InvalidRiskLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Five-point frequency scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Once in decades
    Rare,
    /// Every few years
    Unlikely,
    /// About once a year
    Possible,
    /// Several times a year
    Likely,
    /// Expected every season
    AlmostCertain,
}

impl Frequency {
    const SCALE: [Frequency; 5] = [
        Frequency::Rare,
        Frequency::Unlikely,
        Frequency::Possible,
        Frequency::Likely,
        Frequency::AlmostCertain,
    ];

    /// Ordinal rank, 1 (rare) to 5 (almost certain)
    pub fn rank(&self) -> u32 {
        *self as u32 + 1
    }

    /// Move up the scale by `steps`, capped at the maximum
    pub fn bumped(self, steps: u8) -> Self {
        let index = (self as usize + steps as usize).min(Self::SCALE.len() - 1);
        Self::SCALE[index]
    }

    /// Move `steps` up (or down when negative), clamped to the scale
    pub fn shifted(self, steps: i32) -> Self {
        let last = Self::SCALE.len() as i32 - 1;
        let index = (self as i32 + steps).clamp(0, last);
        Self::SCALE[index as usize]
    }
}

/// Five-point impact scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Negligible disruption
    Minimal,
    /// Short interruption, small losses
    Minor,
    /// Days of disruption
    Moderate,
    /// Weeks of disruption, damaged premises
    Major,
    /// Business may not reopen
    Catastrophic,
}

impl Impact {
    const SCALE: [Impact; 5] = [
        Impact::Minimal,
        Impact::Minor,
        Impact::Moderate,
        Impact::Major,
        Impact::Catastrophic,
    ];

    /// Ordinal rank, 1 (minimal) to 5 (catastrophic)
    pub fn rank(&self) -> u32 {
        *self as u32 + 1
    }

    /// Move up the scale by `steps`, capped at the maximum
    pub fn bumped(self, steps: u8) -> Self {
        let index = (self as usize + steps as usize).min(Self::SCALE.len() - 1);
        Self::SCALE[index]
    }
}

/// Hazard reference entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    /// Stable identifier, e.g. `hurricane`
    pub id: String,
    /// Display name
    pub name: String,
    /// Base risk level in this context
    pub risk_level: RiskLevel,
    /// Base frequency
    pub frequency: Frequency,
    /// Base impact
    pub impact: Impact,
}

/// Hazards that apply to one country
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationHazardSet {
    /// ISO 3166 alpha-2 code
    pub country_code: String,
    /// Display name of the country
    pub country_name: String,
    /// Hazards that apply everywhere in the country
    pub base: Vec<Hazard>,
    /// Additional hazards by parish/state/province
    #[serde(default)]
    pub sub_regions: BTreeMap<String, Vec<Hazard>>,
    /// Added when the business is near the coast
    #[serde(default)]
    pub coastal: Vec<Hazard>,
    /// Added when the business is in an urban area
    #[serde(default)]
    pub urban: Vec<Hazard>,
}

/// Where the business operates, supplied per request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    /// ISO 3166 alpha-2 code
    pub country_code: String,
    /// Parish, state or province
    #[serde(default, alias = "parish")]
    pub sub_region: Option<String>,
    /// Business is near the coast
    #[serde(default)]
    pub near_coast: bool,
    /// Business is in an urban area
    #[serde(default)]
    pub urban_area: bool,
}

impl LocationProfile {
    /// Create a profile for a country with no modifiers
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            ..Self::default()
        }
    }

    /// Set the parish/state/province
    pub fn with_sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = Some(sub_region.into());
        self
    }

    /// Mark the location as coastal
    pub fn near_coast(mut self, near_coast: bool) -> Self {
        self.near_coast = near_coast;
        self
    }

    /// Mark the location as urban
    pub fn urban(mut self, urban_area: bool) -> Self {
        self.urban_area = urban_area;
        self
    }
}

/// Industry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    /// Shops, pharmacies, hardware
    Retail,
    /// Hotels, restaurants, bars
    Hospitality,
    /// Salons, repair, professional services
    Services,
    /// Workshops and small manufacturing
    Industrial,
    /// Anything else
    Other,
}

/// Hazard an industry is typically exposed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Hazard id in the catalog
    pub hazard_id: String,
    /// Level before any location context
    pub default_risk_level: RiskLevel,
}

/// Essential business functions grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssentialFunctions {
    /// Functions the business cannot stop
    pub core: Vec<String>,
    /// Functions that keep the core running
    pub support: Vec<String>,
    /// Back-office functions
    pub administrative: Vec<String>,
}

/// Template example text; may contain `[NEIGHBORHOOD]`, `[AREA]` and `[ISLAND]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTexts {
    /// What the business does
    pub business_purpose: Vec<String>,
    /// Products and services
    pub products_services: Vec<String>,
    /// Key staff
    pub personnel: Vec<String>,
    /// Minimum resources to operate
    pub resource_needs: Vec<String>,
    /// Who buys
    pub customer_base: Vec<String>,
}

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// French
    Fr,
}

impl Locale {
    /// Language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
        }
    }
}

impl FromStr for Locale {
    type Err = ContinuityError;

    fn from_str(s: &str) -> ContinuityResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            other => Err(ContinuityError::ConfigurationError {
                message: format!("unsupported locale '{other}'"),
            }),
        }
    }
}

/// Industry (business type) reference profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryProfile {
    /// Stable identifier, e.g. `grocery_store`
    pub id: String,
    /// Display name
    pub name: String,
    /// Category used for strategy selection
    pub category: IndustryCategory,
    /// Hazards the industry is exposed to
    pub vulnerabilities: Vec<Vulnerability>,
    /// Essential functions by kind
    pub essential_functions: EssentialFunctions,
    /// Base-language example text
    pub examples: ExampleTexts,
    /// Translated example text by locale
    #[serde(default)]
    pub translations: HashMap<Locale, ExampleTexts>,
    /// Typical operating hours
    pub operating_hours: String,
}

impl IndustryProfile {
    /// Example text for `locale`, falling back to the base language
    pub fn examples_for(&self, locale: Locale) -> &ExampleTexts {
        self.translations.get(&locale).unwrap_or(&self.examples)
    }

    /// Whether a translated bundle exists for `locale`
    pub fn has_translation(&self, locale: Locale) -> bool {
        locale == Locale::En || self.translations.contains_key(&locale)
    }
}
