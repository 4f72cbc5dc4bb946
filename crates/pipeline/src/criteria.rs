//! Filter criteria and the closed set of updates that change them.
//!
//! `FilterCriteria` is a plain owned value. Nothing mutates it in place:
//! every change goes through [`FilterCriteria::apply`], which returns the
//! next criteria and leaves the current one untouched.

use crate::filter_pipeline::FilterPipeline;
use crate::presets::Preset;
use chrono::NaiveDate;
use data_loader::{Listing, Modality, Platform, Salary, SeniorityLevel};
use serde::{Deserialize, Serialize};

/// Inclusive salary band in COP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Salary,
    pub max: Salary,
}

/// Current filter constraints for one session.
///
/// Every field defaults to "no constraint". Missing fields in stored state
/// take their defaults, so older state files keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub locations: Vec<String>,
    pub modalities: Vec<Modality>,
    pub levels: Vec<SeniorityLevel>,
    pub platforms: Vec<Platform>,
    pub sectors: Vec<String>,
    pub areas: Vec<String>,
    pub salary_range: Option<SalaryRange>,
    pub max_experience: Option<u32>,
    pub required_skills: Vec<String>,
    pub posted_from: Option<NaiveDate>,
    pub posted_to: Option<NaiveDate>,
    pub verified_only: bool,
    pub salary_only: bool,
}

/// Every way the criteria can change.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaUpdate {
    SetQuery(String),
    SetLocations(Vec<String>),
    SetModalities(Vec<Modality>),
    SetLevels(Vec<SeniorityLevel>),
    SetPlatforms(Vec<Platform>),
    SetSectors(Vec<String>),
    SetAreas(Vec<String>),
    SetSalaryRange(Option<SalaryRange>),
    SetMaxExperience(Option<u32>),
    SetRequiredSkills(Vec<String>),
    SetDateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    SetVerifiedOnly(bool),
    SetSalaryOnly(bool),
    ToggleLocation(String),
    ToggleModality(Modality),
    ToggleLevel(SeniorityLevel),
    ApplyPreset(Preset),
    Reset,
}

/// Partial criteria: `Some` fields overwrite, `None` fields are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaPatch {
    pub modalities: Option<Vec<Modality>>,
    pub levels: Option<Vec<SeniorityLevel>>,
    pub sectors: Option<Vec<String>>,
    pub max_experience: Option<u32>,
    pub salary_only: Option<bool>,
}

impl CriteriaPatch {
    /// Overlay this patch on `criteria`
    pub fn merge(self, criteria: &FilterCriteria) -> FilterCriteria {
        let mut next = criteria.clone();
        if let Some(modalities) = self.modalities {
            next.modalities = modalities;
        }
        if let Some(levels) = self.levels {
            next.levels = levels;
        }
        if let Some(sectors) = self.sectors {
            next.sectors = sectors;
        }
        if let Some(max_years) = self.max_experience {
            next.max_experience = Some(max_years);
        }
        if let Some(salary_only) = self.salary_only {
            next.salary_only = salary_only;
        }
        next
    }
}

impl FilterCriteria {
    /// Return the criteria that result from applying `update`
    pub fn apply(&self, update: CriteriaUpdate) -> FilterCriteria {
        match update {
            CriteriaUpdate::SetQuery(query) => self.with(|next| next.query = query),
            CriteriaUpdate::SetLocations(locations) => self.with(|next| next.locations = locations),
            CriteriaUpdate::SetModalities(modalities) => self.with(|next| next.modalities = modalities),
            CriteriaUpdate::SetLevels(levels) => self.with(|next| next.levels = levels),
            CriteriaUpdate::SetPlatforms(platforms) => self.with(|next| next.platforms = platforms),
            CriteriaUpdate::SetSectors(sectors) => self.with(|next| next.sectors = sectors),
            CriteriaUpdate::SetAreas(areas) => self.with(|next| next.areas = areas),
            CriteriaUpdate::SetSalaryRange(range) => self.with(|next| next.salary_range = range),
            CriteriaUpdate::SetMaxExperience(max_years) => {
                self.with(|next| next.max_experience = max_years)
            }
            CriteriaUpdate::SetRequiredSkills(skills) => self.with(|next| next.required_skills = skills),
            CriteriaUpdate::SetDateRange { from, to } => self.with(|next| {
                next.posted_from = from;
                next.posted_to = to;
            }),
            CriteriaUpdate::SetVerifiedOnly(flag) => self.with(|next| next.verified_only = flag),
            CriteriaUpdate::SetSalaryOnly(flag) => self.with(|next| next.salary_only = flag),
            CriteriaUpdate::ToggleLocation(location) => {
                self.with(|next| toggle(&mut next.locations, location))
            }
            CriteriaUpdate::ToggleModality(modality) => {
                self.with(|next| toggle(&mut next.modalities, modality))
            }
            CriteriaUpdate::ToggleLevel(level) => self.with(|next| toggle(&mut next.levels, level)),
            CriteriaUpdate::ApplyPreset(preset) => preset.patch().merge(self),
            CriteriaUpdate::Reset => FilterCriteria::default(),
        }
    }

    // A copy of `self` with `change` applied.
    fn with(&self, change: impl FnOnce(&mut FilterCriteria)) -> FilterCriteria {
        let mut next = self.clone();
        change(&mut next);
        next
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Whether `listing` satisfies every active criterion
    pub fn matches(&self, listing: &Listing) -> bool {
        FilterPipeline::from_criteria(self).matches(listing)
    }

    /// Listings satisfying every active criterion, in dataset order
    pub fn filter<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        FilterPipeline::from_criteria(self).apply(listings)
    }
}

// Adds `value` if absent, removes it if present.
fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    match values.iter().position(|existing| *existing == value) {
        Some(position) => {
            values.remove(position);
        }
        None => values.push(value),
    }
}
