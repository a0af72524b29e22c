use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::EducationEntry;

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\n\s*(?:EDUCATION|ACADEMIC).*?\n").unwrap());

static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:B\.?S\.?|Bachelor of Science|Bachelor's)\b",
        r"(?i)\b(?:B\.?A\.?|Bachelor of Arts)\b",
        r"(?i)\b(?:M\.?S\.?|Master of Science|Master's)\b",
        r"(?i)\b(?:M\.?B\.?A\.?|Master of Business Administration)\b",
        r"(?i)\b(?:Ph\.?D\.?|Doctor of Philosophy|Doctorate)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"20\d\d|19\d\d").unwrap());

static UNIV_OF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:University|College|Institute|School) of [A-Za-z\s]+\b").unwrap()
});

static NAMED_UNIV_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+ (?:University|College|Institute|School)\b").unwrap());

/// Degree mentions from the whole document.
///
/// The section header only narrows logging; degree patterns are matched over
/// the entire text, and each match contributes one entry from its local
/// context window. Duplicate mentions yield duplicate entries by design.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    if let Some(header) = SECTION_RE.find(text) {
        let body = text[header.end()..].split("\n\n").next().unwrap_or("");
        debug!(section_chars = body.chars().count(), "education section located");
    }

    let mut entries = Vec::new();
    for degree_re in DEGREE_RES.iter() {
        for m in degree_re.find_iter(text) {
            let context = char_window(text, m.start(), m.end(), 30);

            let year = YEAR_RE
                .find(context)
                .map(|y| y.as_str().to_string())
                .unwrap_or_default();

            let university = UNIV_OF_RE
                .find(context)
                .or_else(|| NAMED_UNIV_RE.find(context))
                .map(|u| u.as_str().to_string())
                .unwrap_or_default();

            entries.push(EducationEntry {
                degree: m.as_str().to_string(),
                university,
                year,
            });
        }
    }
    entries
}

/// Expands the byte span `[start, end)` by up to `pad` characters on each
/// side, staying on char boundaries.
fn char_window(text: &str, start: usize, end: usize, pad: usize) -> &str {
    let mut left = start;
    for _ in 0..pad {
        match text[..left].chars().next_back() {
            Some(c) => left -= c.len_utf8(),
            None => break,
        }
    }
    let mut right = end;
    for _ in 0..pad {
        match text[right..].chars().next() {
            Some(c) => right += c.len_utf8(),
            None => break,
        }
    }
    &text[left..right]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_with_year_and_university() {
        let text = "Education\nBS, Stanford University, 2018\n";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "BS");
        assert_eq!(entries[0].university, "Stanford University");
        assert_eq!(entries[0].year, "2018");
    }

    #[test]
    fn test_university_of_pattern() {
        let text = "MS, College of Arts, 2019";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].university, "College of Arts");
        assert_eq!(entries[0].year, "2019");
    }

    #[test]
    fn test_degree_outside_education_section_still_found() {
        let text = "Summary\nPhD candidate turned engineer\n\nSkills\nrust";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "PhD");
        assert_eq!(entries[0].university, "");
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_duplicate_mentions_produce_duplicate_entries() {
        let text = "MBA 2010\nlater again MBA 2012";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].year, "2010");
        assert_eq!(entries[1].year, "2012");
    }

    #[test]
    fn test_year_outside_window_is_ignored() {
        // The year sits more than 30 characters after the degree mention.
        let text = format!("BA in History{}1999", " ".repeat(40));
        let entries = extract_education(&text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_no_degrees_yields_empty() {
        assert!(extract_education("no formal education listed").is_empty());
    }
}
