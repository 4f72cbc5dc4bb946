//! Export of listings as structured text (JSON) or a flattened table (CSV).

use crate::error::Result;
use crate::types::Listing;
use chrono::NaiveDate;
use std::io::Write;

/// Fixed column set of the flattened table
pub const CSV_HEADERS: [&str; 13] = [
    "id",
    "plataforma",
    "empresa",
    "sector",
    "ubicacion",
    "cargo",
    "nivel",
    "modalidad",
    "salario_min",
    "salario_max",
    "experiencia",
    "educacion",
    "skills",
];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    /// File name used when the caller does not pick one
    pub fn default_file_name(self, on: NaiveDate) -> String {
        format!("empleos-antioquia-{}.{}", on.format("%Y-%m-%d"), self.extension())
    }
}

/// Write `listings` in the requested format
pub fn write_listings<'a, W, I>(format: ExportFormat, listings: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Listing>,
{
    match format {
        ExportFormat::Json => write_json(listings, writer),
        ExportFormat::Csv => write_csv(listings, writer),
    }
}

/// Pretty-printed field-for-field dump in the dataset wire format
pub fn write_json<'a, W, I>(listings: I, mut writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Listing>,
{
    let listings: Vec<&Listing> = listings.into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &listings)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Flattened table with every field quoted and skills joined by `"; "`
pub fn write_csv<'a, W, I>(listings: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Listing>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for listing in listings {
        csv_writer.write_record(csv_row(listing))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn csv_row(listing: &Listing) -> [String; 13] {
    let salary = |amount: Option<u64>| {
        amount
            .filter(|&value| value > 0)
            .map(|value| value.to_string())
            .unwrap_or_default()
    };

    [
        listing.id.clone(),
        listing.platform.label().to_string(),
        listing.employer.name.clone(),
        listing.employer.sector.clone(),
        listing.employer.location.clone(),
        listing.position.title.clone(),
        listing.level_label().to_string(),
        listing.modality_label().to_string(),
        salary(listing.compensation.salary_min),
        salary(listing.compensation.salary_max),
        listing.requirements.experience_years.to_string(),
        listing.requirements.min_education.label().to_string(),
        listing.requirements.technical_skills.join("; "),
    ]
}
