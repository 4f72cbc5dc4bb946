//! Filtering of job listings against the session's criteria.
//!
//! This crate provides:
//! - Filter trait and one implementation per criterion
//! - FilterPipeline for composing filters from a `FilterCriteria`
//! - FilterCriteria with its closed set of updates and named presets
//! - FilterStore, which persists criteria between sessions
//!
//! ## Architecture
//! Criteria change only through `CriteriaUpdate`, each update producing a new
//! value. Filtering builds a pipeline holding just the active criteria, so an
//! empty criteria set keeps every listing. Filters borrow listings from the
//! index and never copy them.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CriteriaUpdate, FileStorage, FilterStore, Preset};
//!
//! let mut store = FilterStore::open(FileStorage::new(state_dir));
//! store.dispatch(CriteriaUpdate::ApplyPreset(Preset::Remote))?;
//! store.dispatch(CriteriaUpdate::SetQuery("python".into()))?;
//!
//! let visible = store.criteria().filter(index.listings());
//! ```

pub mod criteria;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod presets;
pub mod store;
pub mod traits;

// Re-export main types
pub use criteria::{CriteriaPatch, CriteriaUpdate, FilterCriteria, SalaryRange};
pub use error::{Result, StoreError};
pub use filter_pipeline::FilterPipeline;
pub use presets::{Preset, UnknownPreset};
pub use store::{FileStorage, FilterStore, MemoryStorage, StateStorage, STORAGE_KEY};
pub use traits::Filter;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use data_loader::*;

    /// An on-site analyst role in Medellín from an unverified employer
    pub fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            platform: Platform::LinkedIn,
            employer: Employer {
                name: "Grupo Éxito".to_string(),
                sector: "Financiero".to_string(),
                size: CompanySize::Large,
                location: "Medellín".to_string(),
                verified: false,
            },
            position: Position {
                title: "Analista Financiero".to_string(),
                level: Some(SeniorityLevel::Analyst),
                area: "IT".to_string(),
                modality: Some(Modality::OnSite),
                contract_type: ContractType::Permanent,
                schedule: Schedule::FullTime,
            },
            compensation: Compensation {
                salary_min: Some(3_500_000),
                salary_max: Some(4_500_000),
                currency: "COP".to_string(),
                benefits: Vec::new(),
            },
            requirements: Requirements {
                experience_years: 2,
                min_education: EducationLevel::Undergraduate,
                technical_skills: Vec::new(),
                soft_skills: Vec::new(),
                languages: Vec::new(),
            },
            metadata: ListingMetadata {
                posted_on: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
                scraped_on: NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
                url: format!("https://www.linkedin.com/jobs/view/{id}"),
                status: ListingStatus::Active,
            },
        }
    }
}
