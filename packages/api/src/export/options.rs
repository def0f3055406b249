//! Export option resolution.
//!
//! The wire format distinguishes an absent `examForms` parameter (include
//! every available form) from an explicitly empty one (include none), so
//! the resolved options keep `Option<Vec<String>>` rather than a bare list.

use serde::Deserialize;
use utoipa::IntoParams;

/// Raw query parameters accepted by the content export endpoint.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ContentExportQuery {
    pub include_lessons: Option<bool>,
    pub include_quizzes: Option<bool>,
    pub include_videos: Option<bool>,
    pub include_descriptions: Option<bool>,
    #[serde(rename = "includeHTML")]
    pub include_html: Option<bool>,
    /// Inverse alias of `includeHTML`; wins when both are present
    #[serde(rename = "stripHTML")]
    pub strip_html: Option<bool>,
    pub exam_forms: Option<String>,
}

/// Resolved export configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub include_lessons: bool,
    pub include_quizzes: bool,
    pub include_videos: bool,
    pub include_descriptions: bool,
    pub include_html: bool,
    /// `None` means every available form; `Some(vec![])` means none.
    pub exam_forms: Option<Vec<String>>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_lessons: true,
            include_quizzes: true,
            include_videos: false,
            include_descriptions: true,
            include_html: true,
            exam_forms: None,
        }
    }
}

impl ContentExportQuery {
    pub fn resolve(self) -> ExportOptions {
        let include_html = match self.strip_html {
            Some(strip) => !strip,
            None => self.include_html.unwrap_or(true),
        };

        let exam_forms = self.exam_forms.map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_ascii_uppercase())
                .collect::<Vec<_>>()
        });

        ExportOptions {
            include_lessons: self.include_lessons.unwrap_or(true),
            include_quizzes: self.include_quizzes.unwrap_or(true),
            include_videos: self.include_videos.unwrap_or(false),
            include_descriptions: self.include_descriptions.unwrap_or(true),
            include_html,
            exam_forms,
        }
    }
}

impl ExportOptions {
    /// Should the given final-exam form be part of the export?
    pub fn wants_form(&self, form: &str) -> bool {
        match &self.exam_forms {
            None => true,
            Some(forms) => forms.iter().any(|f| f.eq_ignore_ascii_case(form)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let opts = ContentExportQuery::default().resolve();
        assert_eq!(opts, ExportOptions::default());
        assert!(opts.include_lessons);
        assert!(opts.include_quizzes);
        assert!(!opts.include_videos);
        assert!(opts.include_descriptions);
        assert!(opts.include_html);
        assert!(opts.exam_forms.is_none());
    }

    #[test]
    fn absent_exam_forms_includes_all() {
        let opts = ContentExportQuery::default().resolve();
        assert!(opts.wants_form("A"));
        assert!(opts.wants_form("B"));
    }

    #[test]
    fn empty_exam_forms_excludes_all() {
        let query = ContentExportQuery {
            exam_forms: Some(String::new()),
            ..Default::default()
        };
        let opts = query.resolve();
        assert_eq!(opts.exam_forms, Some(vec![]));
        assert!(!opts.wants_form("A"));
        assert!(!opts.wants_form("B"));
    }

    #[test]
    fn exam_form_subset_is_case_insensitive() {
        let query = ContentExportQuery {
            exam_forms: Some("a, B,".to_string()),
            ..Default::default()
        };
        let opts = query.resolve();
        assert_eq!(opts.exam_forms, Some(vec!["A".to_string(), "B".to_string()]));
        assert!(opts.wants_form("a"));
    }

    #[test]
    fn strip_html_flag_wins_over_include_html() {
        let query = ContentExportQuery {
            include_html: Some(true),
            strip_html: Some(true),
            ..Default::default()
        };
        assert!(!query.resolve().include_html);

        let query = ContentExportQuery {
            strip_html: Some(false),
            ..Default::default()
        };
        assert!(query.resolve().include_html);
    }
}
