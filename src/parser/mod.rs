//! Resume parsing pipeline.
//!
//! `ResumeParser` turns raw document bytes into a `CandidateRecord`: text
//! extraction (the only fallible step) followed by five independent
//! best-effort field extractors. Each field extractor is a total function
//! over the text; a sparse document yields a sparse record, never an error.

mod contact;
mod education;
mod experience;
mod name;
mod skills;
pub mod text;

pub use skills::COMMON_SKILLS;
pub use text::extract_text;

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::ParseError;
use crate::models::CandidateRecord;
use crate::nlp::LanguageModel;

/// Parses uploaded resume documents into structured candidate records.
///
/// Holds the shared language model; construct once and reuse across requests.
pub struct ResumeParser {
    model: Arc<dyn LanguageModel>,
}

impl ResumeParser {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        ResumeParser { model }
    }

    /// Parse one document. Fails only on an unrecognized extension or when no
    /// text could be extracted; every field below that degrades gracefully.
    pub fn parse(
        &self,
        bytes: &[u8],
        original_filename: &str,
    ) -> Result<CandidateRecord, ParseError> {
        let text = text::extract_text(bytes, original_filename)?;

        let name = name::extract_name(&text, self.model.as_ref());
        let (email, phone) = contact::extract_contact(&text);
        let education = education::extract_education(&text);
        let skills = skills::extract_skills(&text, self.model.as_ref());
        let (experience_entries, experience_years) = experience::extract_experience(&text);

        let record = CandidateRecord {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            skills,
            education,
            experience_entries,
            experience_years,
            resume_filename: original_filename.to_string(),
            parsed_at: Utc::now(),
        };

        info!(
            candidate = %record.name,
            skills = record.skills.len(),
            experience_years = record.experience_years,
            filename = original_filename,
            "resume parsed"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::HashPhraseModel;
    use std::io::Write;

    fn parser() -> ResumeParser {
        ResumeParser::new(Arc::new(HashPhraseModel::default()))
    }

    fn docx_from_lines(lines: &[&str]) -> Vec<u8> {
        let body: String = lines
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            writer
                .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf
    }

    #[test]
    fn test_full_docx_pipeline() {
        let bytes = docx_from_lines(&[
            "John Smith",
            "john.smith@example.com | 555-123-4567",
            "",
            "Skills",
            "Python, AWS, Docker",
            "",
            "Experience",
            "Software Engineer at Acme Corp 2015 - 2020",
            "",
            "Education",
            "BS, Stanford University, 2015",
        ]);

        let record = parser().parse(&bytes, "john_smith.docx").unwrap();
        assert_eq!(record.name, "John Smith");
        assert_eq!(record.email, "john.smith@example.com");
        assert_eq!(record.phone, "555-123-4567");
        for skill in ["python", "aws", "docker"] {
            assert!(record.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert_eq!(record.experience_years, 5.0);
        assert_eq!(record.experience_entries.len(), 1);
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.resume_filename, "john_smith.docx");
    }

    #[test]
    fn test_sparse_document_yields_sparse_record() {
        let bytes = docx_from_lines(&["just one odd line of prose going nowhere in particular"]);
        let record = parser().parse(&bytes, "sparse.docx").unwrap();
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.email, "");
        assert_eq!(record.phone, "");
        assert!(record.skills.is_empty());
        assert!(record.experience_entries.is_empty());
        assert_eq!(record.experience_years, 0.0);
    }

    #[test]
    fn test_unsupported_extension_propagates() {
        let err = parser().parse(b"anything", "resume.odt").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_parsed_record_round_trips_through_json() {
        let bytes = docx_from_lines(&[
            "Jane Doe",
            "jane@example.com",
            "",
            "Skills",
            "Python, SQL",
            "",
            "Experience",
            "Analyst at Globex 2018 - 2021",
        ]);
        let record = parser().parse(&bytes, "jane.docx").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let restored: CandidateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
