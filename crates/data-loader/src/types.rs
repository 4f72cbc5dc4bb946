//! Core domain types for the job listings dataset.
//!
//! A [`Listing`] is one job posting scraped from a Colombian job board. The
//! dataset keeps the Spanish field names and labels the scrapers produced, so
//! every struct and enum here carries serde renames mapping the Rust names
//! onto that wire format.

use chrono::NaiveDate;
use serde::de::value::StringDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a listing, unique within a loaded dataset
pub type ListingId = String;

/// Salary amount in whole currency units (COP for this dataset)
pub type Salary = u64;

// =============================================================================
// Enumerations
// =============================================================================

/// Job board a listing was scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    LinkedIn,
    Computrabajo,
    Indeed,
    Magneto365,
    Elempleo,
    MasEmpleo,
}

impl Platform {
    pub fn all() -> [Platform; 6] {
        [
            Platform::LinkedIn,
            Platform::Computrabajo,
            Platform::Indeed,
            Platform::Magneto365,
            Platform::Elempleo,
            Platform::MasEmpleo,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Computrabajo => "Computrabajo",
            Platform::Indeed => "Indeed",
            Platform::Magneto365 => "Magneto365",
            Platform::Elempleo => "Elempleo",
            Platform::MasEmpleo => "MasEmpleo",
        }
    }
}

/// Work arrangement of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "Presencial")]
    OnSite,
    #[serde(rename = "Remoto")]
    Remote,
    #[serde(rename = "Híbrido")]
    Hybrid,
}

impl Modality {
    pub fn all() -> [Modality; 3] {
        [Modality::OnSite, Modality::Remote, Modality::Hybrid]
    }

    pub fn label(self) -> &'static str {
        match self {
            Modality::OnSite => "Presencial",
            Modality::Remote => "Remoto",
            Modality::Hybrid => "Híbrido",
        }
    }
}

/// Seniority level of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Junior,
    #[serde(rename = "Semi-senior")]
    SemiSenior,
    Senior,
    #[serde(rename = "Gerente")]
    Manager,
    Director,
    #[serde(rename = "VP")]
    Vp,
    #[serde(rename = "C-Level")]
    CLevel,
    #[serde(rename = "Analista")]
    Analyst,
    #[serde(rename = "Asistente")]
    Assistant,
    #[serde(rename = "Coordinador")]
    Coordinator,
    Supervisor,
    #[serde(rename = "Jefe")]
    Head,
    #[serde(rename = "Vicepresidente")]
    VicePresident,
    #[serde(rename = "No especificado")]
    Unspecified,
}

impl SeniorityLevel {
    pub fn all() -> [SeniorityLevel; 14] {
        [
            SeniorityLevel::Junior,
            SeniorityLevel::SemiSenior,
            SeniorityLevel::Senior,
            SeniorityLevel::Manager,
            SeniorityLevel::Director,
            SeniorityLevel::Vp,
            SeniorityLevel::CLevel,
            SeniorityLevel::Analyst,
            SeniorityLevel::Assistant,
            SeniorityLevel::Coordinator,
            SeniorityLevel::Supervisor,
            SeniorityLevel::Head,
            SeniorityLevel::VicePresident,
            SeniorityLevel::Unspecified,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::SemiSenior => "Semi-senior",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Manager => "Gerente",
            SeniorityLevel::Director => "Director",
            SeniorityLevel::Vp => "VP",
            SeniorityLevel::CLevel => "C-Level",
            SeniorityLevel::Analyst => "Analista",
            SeniorityLevel::Assistant => "Asistente",
            SeniorityLevel::Coordinator => "Coordinador",
            SeniorityLevel::Supervisor => "Supervisor",
            SeniorityLevel::Head => "Jefe",
            SeniorityLevel::VicePresident => "Vicepresidente",
            SeniorityLevel::Unspecified => "No especificado",
        }
    }
}

/// Company size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "Microempresa")]
    Micro,
    #[serde(rename = "Pequeña")]
    Small,
    #[serde(rename = "Mediana")]
    Medium,
    #[serde(rename = "Gran empresa")]
    Large,
}

/// Contract type offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractType {
    #[serde(rename = "Indefinido")]
    Permanent,
    #[serde(rename = "Término fijo")]
    FixedTerm,
    #[serde(rename = "Prestacion de servicios")]
    ServiceAgreement,
    #[serde(rename = "Obra labor")]
    PerWork,
    #[serde(rename = "Temporal")]
    Temporary,
    #[serde(rename = "Contrato por proyecto")]
    Project,
    #[serde(rename = "No especificado")]
    Unspecified,
}

/// Working schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "Tiempo completo")]
    FullTime,
    #[serde(rename = "Medio tiempo")]
    PartTime,
    Freelance,
    #[serde(rename = "Por horas")]
    Hourly,
}

/// Minimum education level required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "Bachillerato")]
    HighSchool,
    #[serde(rename = "Técnico")]
    Technician,
    #[serde(rename = "Tecnólogo")]
    Technologist,
    #[serde(rename = "Pregrado")]
    Undergraduate,
    #[serde(rename = "Posgrado")]
    Postgraduate,
    #[serde(rename = "Doctorado")]
    Doctorate,
    #[serde(rename = "No especificado")]
    Unspecified,
}

impl EducationLevel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "Bachillerato",
            EducationLevel::Technician => "Técnico",
            EducationLevel::Technologist => "Tecnólogo",
            EducationLevel::Undergraduate => "Pregrado",
            EducationLevel::Postgraduate => "Posgrado",
            EducationLevel::Doctorate => "Doctorado",
            EducationLevel::Unspecified => "No especificado",
        }
    }
}

/// Publication status of a listing at scrape time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "Activa")]
    Active,
    #[serde(rename = "Cerrada")]
    Closed,
    #[serde(rename = "Pausada")]
    Paused,
}

// =============================================================================
// Listing sub-records
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(rename = "tamaño")]
    pub size: CompanySize,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "verificada", default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "titulo")]
    pub title: String,
    /// `None` when the record carries an empty or missing level
    #[serde(rename = "nivel", default, deserialize_with = "empty_as_none")]
    pub level: Option<SeniorityLevel>,
    #[serde(default)]
    pub area: String,
    /// `None` when the record carries an empty or missing modality
    #[serde(rename = "modalidad", default, deserialize_with = "empty_as_none")]
    pub modality: Option<Modality>,
    #[serde(rename = "tipo_contrato")]
    pub contract_type: ContractType,
    #[serde(rename = "jornada")]
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compensation {
    #[serde(rename = "salario_min")]
    pub salary_min: Option<Salary>,
    #[serde(rename = "salario_max")]
    pub salary_max: Option<Salary>,
    #[serde(rename = "moneda")]
    pub currency: String,
    #[serde(rename = "beneficios", default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRequirement {
    #[serde(rename = "idioma")]
    pub language: String,
    #[serde(rename = "nivel")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(rename = "experiencia_anos", default)]
    pub experience_years: u32,
    #[serde(rename = "educacion_minima")]
    pub min_education: EducationLevel,
    #[serde(rename = "habilidades_tecnicas", default)]
    pub technical_skills: Vec<String>,
    #[serde(rename = "habilidades_blandas", default)]
    pub soft_skills: Vec<String>,
    #[serde(rename = "idiomas", default)]
    pub languages: Vec<LanguageRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingMetadata {
    #[serde(rename = "fecha_publicacion")]
    pub posted_on: NaiveDate,
    #[serde(rename = "fecha_scraping")]
    pub scraped_on: NaiveDate,
    pub url: String,
    #[serde(rename = "estado")]
    pub status: ListingStatus,
}

// =============================================================================
// Listing
// =============================================================================

/// One job posting. Loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(rename = "plataforma_origen")]
    pub platform: Platform,
    #[serde(rename = "empresa")]
    pub employer: Employer,
    #[serde(rename = "cargo")]
    pub position: Position,
    #[serde(rename = "compensacion")]
    pub compensation: Compensation,
    #[serde(rename = "requisitos")]
    pub requirements: Requirements,
    pub metadata: ListingMetadata,
}

impl Listing {
    /// Minimum salary, if one was published.
    ///
    /// A zero amount is what the scrapers write when the board hides the
    /// salary, so it counts as unpublished.
    pub fn published_salary_min(&self) -> Option<Salary> {
        self.compensation.salary_min.filter(|&amount| amount > 0)
    }

    /// Upper salary bound, falling back to the minimum when only that was published
    pub fn published_salary_max(&self) -> Option<Salary> {
        self.compensation
            .salary_max
            .filter(|&amount| amount > 0)
            .or_else(|| self.published_salary_min())
    }

    pub fn modality_label(&self) -> &'static str {
        self.position.modality.map(Modality::label).unwrap_or("")
    }

    pub fn level_label(&self) -> &'static str {
        self.position.level.map(SeniorityLevel::label).unwrap_or("")
    }
}

/// Deserialize an optional enum where an empty string also means "absent"
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => {
            let inner: StringDeserializer<D::Error> = value.into_deserializer();
            T::deserialize(inner).map(Some)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A fully populated listing that tests tweak field by field
    pub fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            platform: Platform::Computrabajo,
            employer: Employer {
                name: "Bancolombia".to_string(),
                sector: "Financiero".to_string(),
                size: CompanySize::Large,
                location: "Medellín".to_string(),
                verified: true,
            },
            position: Position {
                title: "Desarrollador Backend".to_string(),
                level: Some(SeniorityLevel::SemiSenior),
                area: "IT".to_string(),
                modality: Some(Modality::Hybrid),
                contract_type: ContractType::Permanent,
                schedule: Schedule::FullTime,
            },
            compensation: Compensation {
                salary_min: Some(5_000_000),
                salary_max: Some(7_000_000),
                currency: "COP".to_string(),
                benefits: vec!["Prima extralegal".to_string()],
            },
            requirements: Requirements {
                experience_years: 3,
                min_education: EducationLevel::Undergraduate,
                technical_skills: vec!["Java".to_string(), "SQL".to_string()],
                soft_skills: vec!["Trabajo en equipo".to_string()],
                languages: vec![LanguageRequirement {
                    language: "Inglés".to_string(),
                    level: "B2".to_string(),
                }],
            },
            metadata: ListingMetadata {
                posted_on: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                scraped_on: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
                url: format!("https://co.computrabajo.com/oferta/{id}"),
                status: ListingStatus::Active,
            },
        }
    }
}
