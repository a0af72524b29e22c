use crate::nlp::LanguageModel;

const HEADER_WORDS: [&str; 4] = ["resume", "cv", "curriculum", "vitae"];

/// Candidate name, best-effort.
///
/// Scans the first five lines for a short non-header line; falls back to the
/// model's person-name recognition over the head of the document.
pub fn extract_name(text: &str, model: &dyn LanguageModel) -> String {
    for line in text.split('\n').take(5) {
        let line = line.trim();
        if line.chars().count() > 2 && line.split_whitespace().count() <= 4 {
            let lower = line.to_lowercase();
            if !HEADER_WORDS.iter().any(|w| lower.contains(w)) {
                return line.to_string();
            }
        }
    }

    // Only the beginning of the document matters for the entity pass.
    let head: String = text.chars().take(1000).collect();
    if let Some(name) = model.person_names(&head).into_iter().next() {
        return name;
    }

    "Unknown".to_string()
}
