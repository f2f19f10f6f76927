//! Read-only catalog interfaces and the in-memory implementation
//!
//! Lookups are async because a production deployment backs them with the
//! admin data store. A missing entry is `Ok(None)`; `Err` means the back end
//! itself failed.

use super::hazards::caribbean_locations;
use super::industries::caribbean_industries;
use super::types::{IndustryCategory, IndustryProfile, LocationHazardSet};
use crate::error::ContinuityResult;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Country hazard lookups
#[async_trait]
pub trait HazardRepository: Send + Sync {
    /// Hazard set for a country code
    async fn get_location_hazard_set(
        &self,
        country_code: &str,
    ) -> ContinuityResult<Option<LocationHazardSet>>;

    /// All known country codes, sorted
    async fn list_countries(&self) -> ContinuityResult<Vec<String>>;

    /// Sub-region names for a country; empty when the country is unknown
    async fn list_sub_regions(&self, country_code: &str) -> ContinuityResult<Vec<String>>;
}

/// Industry profile lookups
#[async_trait]
pub trait IndustryRepository: Send + Sync {
    /// Profile for an industry id
    async fn get_industry_profile(
        &self,
        industry_id: &str,
    ) -> ContinuityResult<Option<IndustryProfile>>;

    /// Profiles in a category, sorted by id
    async fn list_industries_by_category(
        &self,
        category: IndustryCategory,
    ) -> ContinuityResult<Vec<IndustryProfile>>;

    /// All profiles, sorted by id
    async fn list_industries(&self) -> ContinuityResult<Vec<IndustryProfile>>;
}

/// Catalog held in memory
///
/// Country codes are matched case-insensitively. The `upsert_*` methods are
/// the admin write path and may run concurrently with reads.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    locations: Arc<DashMap<String, LocationHazardSet>>,
    industries: Arc<DashMap<String, IndustryProfile>>,
}

impl InMemoryCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the built-in Caribbean data
    pub fn caribbean() -> Self {
        let catalog = Self::new();
        for location in caribbean_locations() {
            catalog.upsert_location(location);
        }
        for industry in caribbean_industries() {
            catalog.upsert_industry(industry);
        }
        catalog
    }

    /// Insert or replace a country hazard set
    pub fn upsert_location(&self, location: LocationHazardSet) {
        self.locations
            .insert(location.country_code.to_uppercase(), location);
    }

    /// Insert or replace an industry profile
    pub fn upsert_industry(&self, industry: IndustryProfile) {
        self.industries.insert(industry.id.clone(), industry);
    }

    /// Remove a country; returns whether it existed
    pub fn remove_location(&self, country_code: &str) -> bool {
        self.locations
            .remove(&country_code.to_uppercase())
            .is_some()
    }

    /// Remove an industry; returns whether it existed
    pub fn remove_industry(&self, industry_id: &str) -> bool {
        self.industries.remove(industry_id).is_some()
    }

    fn sorted_industries<F>(&self, filter: F) -> Vec<IndustryProfile>
    where
        F: Fn(&IndustryProfile) -> bool,
    {
        let mut profiles: Vec<IndustryProfile> = self
            .industries
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        profiles
    }
}

#[async_trait]
impl HazardRepository for InMemoryCatalog {
    async fn get_location_hazard_set(
        &self,
        country_code: &str,
    ) -> ContinuityResult<Option<LocationHazardSet>> {
        Ok(self
            .locations
            .get(&country_code.trim().to_uppercase())
            .map(|entry| entry.value().clone()))
    }

    async fn list_countries(&self) -> ContinuityResult<Vec<String>> {
        let mut codes: Vec<String> = self.locations.iter().map(|entry| entry.key().clone()).collect();
        codes.sort();
        Ok(codes)
    }

    async fn list_sub_regions(&self, country_code: &str) -> ContinuityResult<Vec<String>> {
        Ok(self
            .locations
            .get(&country_code.trim().to_uppercase())
            .map(|entry| entry.value().sub_regions.keys().cloned().collect())
            .unwrap_or_default())
    }
}

#[async_trait]
impl IndustryRepository for InMemoryCatalog {
    async fn get_industry_profile(
        &self,
        industry_id: &str,
    ) -> ContinuityResult<Option<IndustryProfile>> {
        Ok(self
            .industries
            .get(industry_id.trim())
            .map(|entry| entry.value().clone()))
    }

    async fn list_industries_by_category(
        &self,
        category: IndustryCategory,
    ) -> ContinuityResult<Vec<IndustryProfile>> {
        Ok(self.sorted_industries(|profile| profile.category == category))
    }

    async fn list_industries(&self) -> ContinuityResult<Vec<IndustryProfile>> {
        Ok(self.sorted_industries(|_| true))
    }
}
