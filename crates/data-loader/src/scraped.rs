//! Conversion of raw scraper output into listings.
//!
//! The scrapers only capture a handful of columns per job. Anything that is
//! not an IT position is dropped, and the remaining fields are filled with
//! the defaults the dashboard has always assumed for scraped rows.

use crate::error::Result;
use crate::types::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Title keywords marking a job as an IT position (matched case-insensitively)
const IT_KEYWORDS: &[&str] = &[
    "desarrollador", "developer", "programador", "ingeniero", "engineer",
    "analista", "analyst", "soporte", "support", "datos", "data",
    "devops", "fullstack", "frontend", "backend", "python", "java",
    "javascript", "react", "angular", "vue", "node", "sql", "aws",
    "cloud", "security", "software", "web", "móvil", "mobile",
    "tester", "qa", "ux", "ui", "product", "scrum", "agile",
];

const REGION_SUFFIX: &str = ", Antioquia";
const DEFAULT_LOCATION: &str = "Medellín";
const DEFAULT_COMPANY: &str = "No especificada";

/// One row as written by the scrapers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapedJob {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_raw: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: String,
    /// Card date text as scraped; only ISO dates (`2025-01-05`) are kept
    #[serde(default)]
    pub date_posted: Option<String>,
}

impl ScrapedJob {
    /// Posting date when the card carried an ISO date, else `today`.
    ///
    /// Boards usually show relative text ("Hace 2 días"), which is not parsed.
    pub fn posted_on(&self, today: NaiveDate) -> NaiveDate {
        let Some(raw) = self.date_posted.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) else {
            return today;
        };
        match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                debug!(date_posted = raw, "unparsed posting date, using import date");
                today
            }
        }
    }
}

pub fn parse_scraped_jobs<R: Read>(reader: R) -> Result<Vec<ScrapedJob>> {
    let jobs = serde_json::from_reader(reader)?;
    Ok(jobs)
}

pub fn read_scraped_jobs(path: &Path) -> Result<Vec<ScrapedJob>> {
    let file = crate::parser::open(path)?;
    parse_scraped_jobs(std::io::BufReader::new(file))
}

pub fn is_it_position(title: &str) -> bool {
    let title = title.to_lowercase();
    IT_KEYWORDS.iter().any(|keyword| title.contains(keyword))
}

/// Keep the IT positions and turn them into listings with sequential ids.
///
/// `today` stands in for the scrape date and for a missing posting date.
pub fn transform_scraped(jobs: &[ScrapedJob], today: NaiveDate) -> Vec<Listing> {
    let listings: Vec<Listing> = jobs
        .iter()
        .filter(|job| is_it_position(&job.title))
        .enumerate()
        .map(|(position, job)| to_listing(position + 1, job, today))
        .collect();

    debug!(
        scraped = jobs.len(),
        kept = listings.len(),
        "transformed scraped jobs"
    );
    listings
}

fn to_listing(id: usize, job: &ScrapedJob, today: NaiveDate) -> Listing {
    let raw_location = job.location.as_deref().unwrap_or("");
    let location = match raw_location.replacen(REGION_SUFFIX, "", 1) {
        stripped if stripped.is_empty() => DEFAULT_LOCATION.to_string(),
        stripped => stripped,
    };
    let modality = if raw_location.to_lowercase().contains("remoto") {
        Modality::Remote
    } else {
        Modality::OnSite
    };
    let company = if job.company.is_empty() {
        DEFAULT_COMPANY.to_string()
    } else {
        job.company.clone()
    };

    Listing {
        id: id.to_string(),
        platform: crate::parser::parse_platform(&job.source).unwrap_or(Platform::Computrabajo),
        employer: Employer {
            name: company,
            sector: "Tecnología".to_string(),
            size: CompanySize::Large,
            location,
            verified: false,
        },
        position: Position {
            title: job.title.clone(),
            level: Some(SeniorityLevel::Unspecified),
            area: "IT".to_string(),
            modality: Some(modality),
            contract_type: ContractType::Unspecified,
            schedule: Schedule::FullTime,
        },
        compensation: Compensation {
            salary_min: None,
            salary_max: None,
            currency: "COP".to_string(),
            benefits: Vec::new(),
        },
        requirements: Requirements {
            experience_years: 0,
            min_education: EducationLevel::Unspecified,
            technical_skills: Vec::new(),
            soft_skills: Vec::new(),
            languages: Vec::new(),
        },
        metadata: ListingMetadata {
            posted_on: job.posted_on(today),
            scraped_on: today,
            url: job.url.clone(),
            status: ListingStatus::Active,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    fn job(title: &str, location: Option<&str>) -> ScrapedJob {
        ScrapedJob {
            title: title.to_string(),
            company: "Globant".to_string(),
            location: location.map(str::to_string),
            source: "LinkedIn".to_string(),
            url: "https://example.com/job".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_non_it_titles_are_dropped() {
        let jobs = vec![
            job("Vendedor de mostrador", None),
            job("Desarrollador Java", None),
            job("Cajero", None),
            job("QA Automation", None),
        ];

        let listings = transform_scraped(&jobs, today());
        let titles: Vec<&str> = listings.iter().map(|l| l.position.title.as_str()).collect();

        assert_eq!(titles, vec!["Desarrollador Java", "QA Automation"]);
        assert_eq!(listings[0].id, "1");
        assert_eq!(listings[1].id, "2");
    }

    #[test]
    fn test_location_and_modality_defaults() {
        let jobs = vec![
            job("Data Engineer", Some("Envigado, Antioquia")),
            job("Data Engineer", Some("Remoto")),
            job("Data Engineer", None),
        ];

        let listings = transform_scraped(&jobs, today());

        assert_eq!(listings[0].employer.location, "Envigado");
        assert_eq!(listings[0].position.modality, Some(Modality::OnSite));
        assert_eq!(listings[1].position.modality, Some(Modality::Remote));
        assert_eq!(listings[2].employer.location, "Medellín");
    }

    #[test]
    fn test_missing_fields_get_scraper_defaults() {
        let mut raw = job("Frontend React", None);
        raw.company = String::new();
        raw.source = "Bumeran".to_string();

        let listing = &transform_scraped(&[raw], today())[0];

        assert_eq!(listing.employer.name, "No especificada");
        assert_eq!(listing.platform, Platform::Computrabajo);
        assert_eq!(listing.metadata.posted_on, today());
        assert_eq!(listing.metadata.scraped_on, today());
        assert_eq!(listing.compensation.salary_min, None);
    }

    #[test]
    fn test_parse_scraped_rows_with_nulls() {
        let body = r#"[{"title":"Ingeniero DevOps","company":"EPM","location":null,
            "salary_raw":"","url":"u","source":"Computrabajo","date_posted":"2025-01-05"}]"#;

        let jobs = parse_scraped_jobs(body.as_bytes()).unwrap();
        assert_eq!(jobs[0].posted_on(today()), NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert!(jobs[0].location.is_none());
    }

    #[test]
    fn test_relative_and_missing_dates_fall_back_to_import_date() {
        let body = r#"[
            {"title":"Desarrollador Python","company":"Sura","location":"Medellín, Antioquia",
             "salary_raw":"","url":"u1","source":"Computrabajo","date_posted":"Hace 2 días"},
            {"title":"Analista de Datos","company":"EPM","location":null,
             "salary_raw":"","url":"u2","source":"LinkedIn","date_posted":null},
            {"title":"Ingeniero Cloud","company":"Globant","location":"Remoto",
             "salary_raw":"","url":"u3","source":"LinkedIn","date_posted":""}
        ]"#;

        let jobs = parse_scraped_jobs(body.as_bytes()).unwrap();
        let listings = transform_scraped(&jobs, today());

        assert_eq!(listings.len(), 3);
        assert!(listings.iter().all(|l| l.metadata.posted_on == today()));
        assert_eq!(listings[0].employer.location, "Medellín");
    }
}
