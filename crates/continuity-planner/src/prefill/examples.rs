//! Location-aware example text
//!
//! Industry examples carry `[NEIGHBORHOOD]`, `[AREA]` and `[ISLAND]`
//! placeholders that are filled from the request location.

use super::localization::{keys, Localizer};
use crate::catalog::{ExampleTexts, IndustryProfile, Locale, LocationProfile};
use tracing::debug;

const NEIGHBORHOOD: &str = "[NEIGHBORHOOD]";
const AREA: &str = "[AREA]";
const ISLAND: &str = "[ISLAND]";

/// Values substituted for the placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderValues {
    /// Replaces `[NEIGHBORHOOD]`: parish or the local-area phrase
    pub neighborhood: String,
    /// Replaces `[AREA]`: coastal or inland phrase
    pub area: String,
    /// Replaces `[ISLAND]`: country name
    pub island: String,
}

impl PlaceholderValues {
    /// Resolve placeholder values for a location.
    ///
    /// `country_name` is `None` when the country is not in the catalog.
    pub fn resolve(
        location: &LocationProfile,
        country_name: Option<&str>,
        localizer: &dyn Localizer,
        locale: Locale,
    ) -> Self {
        let neighborhood = location
            .sub_region
            .clone()
            .unwrap_or_else(|| localizer.text(locale, keys::LOCAL_AREA));
        let area = if location.near_coast {
            localizer.text(locale, keys::COASTAL)
        } else {
            localizer.text(locale, keys::INLAND)
        };
        let island = country_name
            .map(str::to_string)
            .unwrap_or_else(|| localizer.text(locale, keys::ISLAND));

        Self {
            neighborhood,
            area,
            island,
        }
    }

    /// Replace every placeholder in `template`
    pub fn substitute(&self, template: &str) -> String {
        template
            .replace(NEIGHBORHOOD, &self.neighborhood)
            .replace(AREA, &self.area)
            .replace(ISLAND, &self.island)
    }

    fn substitute_all(&self, templates: &[String]) -> Vec<String> {
        templates.iter().map(|t| self.substitute(t)).collect()
    }
}

/// Industry examples in `locale` with placeholders filled
pub fn localized_examples(
    profile: &IndustryProfile,
    locale: Locale,
    values: &PlaceholderValues,
) -> ExampleTexts {
    if !profile.has_translation(locale) {
        debug!(
            "No {} examples for {}, using base language",
            locale.as_str(),
            profile.id
        );
    }
    substituted(profile.examples_for(locale), values)
}

/// Fill placeholders in every example list
pub fn substituted(examples: &ExampleTexts, values: &PlaceholderValues) -> ExampleTexts {
    ExampleTexts {
        business_purpose: values.substitute_all(&examples.business_purpose),
        products_services: values.substitute_all(&examples.products_services),
        personnel: values.substitute_all(&examples.personnel),
        resource_needs: values.substitute_all(&examples.resource_needs),
        customer_base: values.substitute_all(&examples.customer_base),
    }
}
