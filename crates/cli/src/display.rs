//! Terminal rendering of reports, listings and criteria.

use analytics::{AnalysisReport, CategoryCount, Kpis, ModalityBreakdown, OverviewReport, SkillCount};
use colored::Colorize;
use data_loader::{Listing, Salary};
use pipeline::FilterCriteria;

const BAR_WIDTH: usize = 30;

/// Render a COP amount as `$4.500.000`
pub fn format_cop(amount: Salary) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

fn salary_or_dash(amount: Salary) -> String {
    if amount == 0 {
        "-".to_string()
    } else {
        format_cop(amount)
    }
}

fn heading(title: &str) {
    println!("\n{}", title.bold().blue());
}

fn bar(count: usize, largest: usize) -> String {
    if largest == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(largest);
    "█".repeat(width)
}

pub fn print_counts(title: &str, counts: &[CategoryCount]) {
    heading(title);
    if counts.is_empty() {
        println!("  (no listings)");
        return;
    }
    let largest = counts.first().map_or(0, |c| c.count);
    let label_width = counts.iter().map(|c| c.label.chars().count()).max().unwrap_or(0);
    for entry in counts {
        let padding = label_width - entry.label.chars().count();
        println!(
            "  {}{} {:>4} {}",
            entry.label,
            " ".repeat(padding),
            entry.count,
            bar(entry.count, largest).cyan()
        );
    }
}

pub fn print_skills(title: &str, skills: &[SkillCount]) {
    heading(title);
    if skills.is_empty() {
        println!("  (no skills listed)");
        return;
    }
    for (rank, entry) in skills.iter().enumerate() {
        println!(
            "  {:>2}. {} ({})",
            (rank + 1).to_string().green(),
            entry.skill,
            entry.count
        );
    }
}

fn print_kpis(kpis: &Kpis) {
    heading("Indicators");
    println!("{}Listings: {}", "• ".green(), kpis.total_listings);
    println!("{}Median salary: {}", "• ".green(), salary_or_dash(kpis.median_salary));
    println!("{}Hiring companies: {}", "• ".green(), kpis.hiring_companies);
    println!(
        "{}Remote listings: {} ({}%)",
        "• ".green(),
        kpis.remote_listings,
        kpis.remote_share()
    );
    println!(
        "{}Most demanded skill: {}",
        "• ".green(),
        kpis.top_skill.as_deref().unwrap_or("-")
    );
    println!(
        "{}Leading sector: {}",
        "• ".green(),
        kpis.leading_sector.as_deref().unwrap_or("-")
    );
}

fn print_breakdown(breakdown: &ModalityBreakdown) {
    heading("Breakdown");
    println!(
        "{}Remote {} · Hybrid {} · On-site {}",
        "• ".cyan(),
        breakdown.remote,
        breakdown.hybrid,
        breakdown.on_site
    );
    println!(
        "{}With published salary: {}/{}",
        "• ".cyan(),
        breakdown.with_salary,
        breakdown.total
    );
    println!("{}Verified employers: {}/{}", "• ".cyan(), breakdown.verified, breakdown.total);
}

pub fn print_overview(report: &OverviewReport) {
    print_kpis(&report.kpis);
    print_breakdown(&report.breakdown);
    print_counts("Listings by location", &report.locations);
    print_counts("Listings by modality", &report.modalities);
    print_counts("Listings by level", &report.levels);
    print_skills("Most demanded skills", &report.top_skills);
}

pub fn print_analysis(report: &AnalysisReport) {
    let summary = &report.summary;
    heading("Summary");
    println!("{}Listings: {}", "• ".green(), summary.listing_count);
    println!(
        "{}Average salary: {} (from {} listings)",
        "• ".green(),
        salary_or_dash(summary.salary.average),
        summary.salary.sample_size
    );
    println!(
        "{}Salary range: {} - {}",
        "• ".green(),
        salary_or_dash(summary.salary.min),
        salary_or_dash(summary.salary.max)
    );
    println!(
        "{}Average experience: {:.1} years",
        "• ".green(),
        summary.average_experience
    );
    print_breakdown(&report.breakdown);
    print_counts("Listings by sector", &report.sectors);
    print_counts("Listings by modality", &report.modalities);
    print_counts("Listings by level", &report.levels);
    print_skills("Top skills", &report.top_skills);
}

fn salary_band(listing: &Listing) -> String {
    match (listing.published_salary_min(), listing.published_salary_max()) {
        (Some(min), Some(max)) if max > min => format!("{} - {}", format_cop(min), format_cop(max)),
        (Some(min), _) => format_cop(min),
        _ => "Salary not published".to_string(),
    }
}

pub fn print_listings(listings: &[&Listing], total: usize) {
    heading(&format!("Showing {} of {} listings", listings.len(), total));
    for listing in listings {
        let verified = if listing.employer.verified {
            " ✓".green().to_string()
        } else {
            String::new()
        };
        println!(
            "\n{} {}",
            format!("[{}]", listing.id).dimmed(),
            listing.position.title.bold()
        );
        println!(
            "    {}{} · {} · {}",
            listing.employer.name,
            verified,
            listing.employer.location,
            listing.platform.label()
        );
        let modality = match listing.modality_label() {
            "" => "-",
            label => label,
        };
        let level = match listing.level_label() {
            "" => "-",
            label => label,
        };
        println!(
            "    {} · {} · {} years · {}",
            modality,
            level,
            listing.requirements.experience_years,
            salary_band(listing).yellow()
        );
        if !listing.requirements.technical_skills.is_empty() {
            println!("    {}", listing.requirements.technical_skills.join(", ").cyan());
        }
    }
}

fn show_list<T: AsRef<str>>(name: &str, values: &[T]) {
    if !values.is_empty() {
        let joined: Vec<&str> = values.iter().map(AsRef::as_ref).collect();
        println!("{}{}: {}", "• ".green(), name, joined.join(", "));
    }
}

pub fn print_criteria(criteria: &FilterCriteria) {
    heading("Active filters");
    if criteria.is_empty() {
        println!("  (none)");
        return;
    }
    if !criteria.query.is_empty() {
        println!("{}Query: \"{}\"", "• ".green(), criteria.query);
    }
    show_list("Locations", &criteria.locations);
    let modalities: Vec<&str> = criteria.modalities.iter().map(|m| m.label()).collect();
    show_list("Modalities", &modalities);
    let levels: Vec<&str> = criteria.levels.iter().map(|l| l.label()).collect();
    show_list("Levels", &levels);
    let platforms: Vec<&str> = criteria.platforms.iter().map(|p| p.label()).collect();
    show_list("Platforms", &platforms);
    show_list("Sectors", &criteria.sectors);
    show_list("Areas", &criteria.areas);
    if let Some(range) = criteria.salary_range {
        println!(
            "{}Salary: {} - {}",
            "• ".green(),
            format_cop(range.min),
            format_cop(range.max)
        );
    }
    if let Some(years) = criteria.max_experience {
        println!("{}Max experience: {} years", "• ".green(), years);
    }
    show_list("Required skills", &criteria.required_skills);
    if criteria.posted_from.is_some() || criteria.posted_to.is_some() {
        let from = criteria.posted_from.map_or("…".to_string(), |d| d.to_string());
        let to = criteria.posted_to.map_or("…".to_string(), |d| d.to_string());
        println!("{}Posted: {} to {}", "• ".green(), from, to);
    }
    if criteria.verified_only {
        println!("{}Verified employers only", "• ".green());
    }
    if criteria.salary_only {
        println!("{}Published salary only", "• ".green());
    }
}
