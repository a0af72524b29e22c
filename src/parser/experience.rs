use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::ExperienceEntry;

static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*(?:EXPERIENCE|WORK EXPERIENCE|PROFESSIONAL EXPERIENCE).*?\n").unwrap()
});

// Three shapes of job entry: "Title at Company 2019 - 2022",
// "Company, Title 2019 - 2022", and title/company/date on consecutive lines.
static JOB_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?P<title>[A-Z][A-Za-z\s]+?)\s+(?:at|@)\s+(?P<company>[A-Z][A-Za-z\s]+)\s+(?P<date>\d{1,2}/\d{1,2}|\d{4}\s*[-–—]\s*(?:Present|Current|\d{4}))",
        r"(?P<company>[A-Z][A-Za-z\s]+)\s*[,|]\s*(?P<title>[A-Za-z\s]+?)\s+(?P<date>\d{1,2}/\d{1,2}|\d{4}\s*[-–—]\s*(?:Present|Current|\d{4}))",
        r"(?P<title>[A-Z][A-Za-z\s]+?)\n(?P<company>[A-Z][A-Za-z\s]+)\n(?P<date>\d{1,2}/\d{1,2}|\d{4}\s*[-–—]\s*(?:Present|Current|\d{4}))",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–—]\s*(\d{4}|Present|Current)").unwrap());

static YEARS_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\+?\s*(?:years|yrs)(?:\s+of)?\s+experience").unwrap());

/// Job entries and total years of experience.
///
/// Entries are mined from the experience section when a header exists,
/// otherwise from the whole text. A document with no structured entries falls
/// back to an explicit "N years of experience" phrase. The total is clamped
/// so malformed ranges cannot drive it negative.
pub fn extract_experience(text: &str) -> (Vec<ExperienceEntry>, f64) {
    let scope = match SECTION_RE.find(text) {
        Some(header) => {
            debug!("experience section located");
            &text[header.end()..]
        }
        None => text,
    };

    let mut entries = Vec::new();
    let mut total_years: i64 = 0;

    for job_re in JOB_RES.iter() {
        for caps in job_re.captures_iter(scope) {
            let date_str = caps["date"].trim();
            let Some(range) = RANGE_RE.captures(date_str) else {
                continue; // month/year fragments carry no usable range
            };

            let Ok(start_year) = range[1].parse::<i32>() else {
                continue;
            };
            let end_year_raw = range[2].to_string();
            let end_year = if end_year_raw.eq_ignore_ascii_case("present")
                || end_year_raw.eq_ignore_ascii_case("current")
            {
                Utc::now().year()
            } else {
                match end_year_raw.parse::<i32>() {
                    Ok(year) => year,
                    Err(_) => continue,
                }
            };

            if start_year == 0 || end_year == 0 {
                continue;
            }

            let duration_years = end_year - start_year;
            total_years += i64::from(duration_years);
            entries.push(ExperienceEntry {
                title: caps["title"].trim().to_string(),
                company: caps["company"].trim().to_string(),
                start_year,
                end_year_raw,
                duration_years,
            });
        }
    }

    if entries.is_empty() {
        if let Some(caps) = YEARS_PHRASE_RE.captures(text) {
            total_years = caps[1].parse::<i64>().unwrap_or(0);
        }
    }

    (entries, (total_years as f64).max(0.0))
}
