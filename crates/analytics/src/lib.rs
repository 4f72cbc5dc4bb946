//! # Analytics Crate
//!
//! Pure aggregation over job listings. Every function takes any iterator of
//! `&Listing`, so the same code serves the full dataset and filtered views.
//!
//! ## Components
//!
//! - **counts**: group-by-count on a categorical field, "Other" for blanks
//! - **skills**: technical skill frequency, top-N
//! - **summary**: salary and experience statistics, modality breakdown
//! - **kpi**: headline indicators
//! - **report**: the aggregates each view needs, computed together
//!
//! Results are deterministic and never fail. Statistics with no qualifying
//! listings come back as zero.
//!
//! ## Example Usage
//!
//! ```ignore
//! use analytics::{category_counts, skill_frequency, summarize, CategoryField};
//!
//! let listings = index.listings();
//! let by_sector = category_counts(listings, CategoryField::Sector);
//! let top_skills = skill_frequency(listings, 8);
//! let summary = summarize(listings);
//! ```

pub mod counts;
pub mod kpi;
pub mod report;
pub mod skills;
pub mod summary;

pub use counts::{category_counts, CategoryCount, CategoryField, FALLBACK_LABEL};
pub use kpi::{compute_kpis, Kpis};
pub use report::{AnalysisReport, OverviewReport};
pub use skills::{skill_frequency, SkillCount};
pub use summary::{modality_breakdown, summarize, ModalityBreakdown, SalaryStats, ScalarSummary};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use data_loader::*;

    /// An on-site, salaried listing in Medellín; tests override what they need
    pub fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            platform: Platform::Elempleo,
            employer: Employer {
                name: "Bancolombia".to_string(),
                sector: "Financiero".to_string(),
                size: CompanySize::Large,
                location: "Medellín".to_string(),
                verified: false,
            },
            position: Position {
                title: "Analista de Datos".to_string(),
                level: Some(SeniorityLevel::Analyst),
                area: "IT".to_string(),
                modality: Some(Modality::OnSite),
                contract_type: ContractType::Permanent,
                schedule: Schedule::FullTime,
            },
            compensation: Compensation {
                salary_min: Some(4_000_000),
                salary_max: Some(5_000_000),
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
                scraped_on: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
                url: format!("https://www.elempleo.com/co/ofertas-trabajo/{id}"),
                status: ListingStatus::Active,
            },
        }
    }
}
