use once_cell::sync::Lazy;
use regex::Regex;

use crate::nlp::LanguageModel;

/// Technical skill vocabulary matched against every resume.
pub const COMMON_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin", "go",
    "typescript",
    // Web technologies
    "html", "css", "react", "angular", "vue", "node.js", "express", "django", "flask",
    "spring boot",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "oracle", "sqlite", "elasticsearch", "redis",
    "cassandra",
    // Cloud platforms
    "aws", "azure", "gcp", "google cloud", "heroku", "kubernetes", "docker", "terraform",
    // Data science
    "machine learning", "deep learning", "data analysis", "pandas", "numpy", "tensorflow",
    "pytorch", "scikit-learn", "r", "hadoop", "spark", "tableau", "power bi",
    "data visualization",
    // Other skills
    "git", "github", "ci/cd", "jenkins", "jira", "agile", "scrum", "devops", "restful api",
    "graphql",
];

static SKILL_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    COMMON_SKILLS
        .iter()
        .map(|skill| {
            let pattern = format!(r"\b{}\b", regex::escape(skill));
            (*skill, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\n\s*(?:SKILLS|TECHNICAL SKILLS).*?\n").unwrap());

/// Skills from the whole document plus noun phrases from the skills section.
///
/// The result has no duplicates and keeps first-seen order so repeated
/// rankings over the same record are deterministic.
pub fn extract_skills(text: &str, model: &dyn LanguageModel) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut skills: Vec<String> = Vec::new();
    for (skill, re) in SKILL_RES.iter() {
        if re.is_match(&lower) {
            skills.push((*skill).to_string());
        }
    }

    if let Some(header) = SECTION_RE.find(text) {
        let body = text[header.end()..].split("\n\n").next().unwrap_or("");
        for phrase in model.noun_phrases(body) {
            let phrase = phrase.trim().to_lowercase();
            if phrase.chars().count() > 2 && !skills.contains(&phrase) {
                skills.push(phrase);
            }
        }
    }

    skills
}
