//! Course content export pipeline.
//!
//! Assembles authoring content (units, lessons, quiz banks, final-exam
//! forms) into Word documents. Three Florida DBPR compliance documents
//! (answer key, final exam A, final exam B) are fixed document kinds with
//! their own endpoints; the general content export is driven by an options
//! bag resolved in [`options`].

pub mod data;
pub mod docx;
pub mod html;
pub mod options;

/// MIME type for generated documents.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Build a download file name from a course title: every run of
/// non-alphanumeric characters collapses to a single `-`.
pub fn export_file_name(course_title: &str, suffix: &str) -> String {
    let mut slug = String::with_capacity(course_title.len());
    let mut last_dash = true;
    for c in course_title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        format!("course-{}.docx", suffix)
    } else {
        format!("{}-{}.docx", slug, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_replaces_non_alphanumeric_runs() {
        assert_eq!(
            export_file_name("FL 14-Hour CE (2026)", "content"),
            "FL-14-Hour-CE-2026-content.docx"
        );
    }

    #[test]
    fn file_name_survives_empty_title() {
        assert_eq!(export_file_name("???", "answer-key"), "course-answer-key.docx");
    }
}
