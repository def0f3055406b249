//! Word document assembly for the export pipeline.
//!
//! Built on docx-rs. Table content is prepared as plain string rows by pure
//! functions so the document shape stays testable without unzipping OOXML.

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::entity::lesson;
use crate::error::ApiError;
use crate::export::data::{CourseExport, ExamExport, UnitExport};
use crate::export::html::strip_html;
use crate::export::options::ExportOptions;

const TITLE_SIZE: usize = 44;
const HEADING_SIZE: usize = 32;
const SUBHEADING_SIZE: usize = 26;

fn title(text: &str) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_text(text).size(TITLE_SIZE).bold())
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(HEADING_SIZE).bold())
}

fn subheading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(SUBHEADING_SIZE).bold())
}

fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn table_from_rows(rows: &[Vec<String>]) -> Table {
    let table_rows = rows
        .iter()
        .enumerate()
        .map(|(idx, cells)| {
            TableRow::new(
                cells
                    .iter()
                    .map(|cell| {
                        let mut run = Run::new().add_text(cell.as_str());
                        if idx == 0 {
                            run = run.bold();
                        }
                        TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                    })
                    .collect(),
            )
        })
        .collect();
    Table::new(table_rows)
}

/// Render authored rich text into one paragraph per line, honoring the
/// HTML-preservation flag.
fn content_paragraphs(content: &str, include_html: bool) -> Vec<Paragraph> {
    let text = if include_html {
        content.to_string()
    } else {
        strip_html(content)
    };
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(body)
        .collect()
}

/// Header row plus one row per lesson for a unit's lesson table.
pub fn lesson_table_rows(lessons: &[lesson::Model], include_videos: bool) -> Vec<Vec<String>> {
    let mut header = vec![
        "#".to_string(),
        "Lesson".to_string(),
        "Duration".to_string(),
    ];
    if include_videos {
        header.push("Video URL".to_string());
    }

    let mut rows = vec![header];
    for lesson in lessons {
        let mut row = vec![
            lesson.lesson_number.to_string(),
            lesson.title.clone(),
            lesson
                .duration_minutes
                .map(|m| format!("{} min", m))
                .unwrap_or_default(),
        ];
        if include_videos {
            row.push(lesson.video_url.clone().unwrap_or_default());
        }
        rows.push(row);
    }
    rows
}

/// Header row plus one row per question for an answer-key table.
pub fn answer_key_rows(exam: &ExamExport) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Question".to_string(),
        "Answer".to_string(),
        "Explanation".to_string(),
    ]];
    for (idx, question) in exam.questions.iter().enumerate() {
        rows.push(vec![
            format!("{}", idx + 1),
            question
                .correct_letter()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string()),
            question.explanation.clone().unwrap_or_default(),
        ]);
    }
    rows
}

fn course_header(docx: Docx, export: &CourseExport, subtitle: &str) -> Docx {
    let course = &export.course;
    let mut docx = docx
        .add_paragraph(title(&course.title))
        .add_paragraph(Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new().add_text(subtitle).size(SUBHEADING_SIZE),
        ));

    let mut meta = vec![format!("SKU: {}", course.sku)];
    meta.push(format!("CE hours: {}", course.hours_required));
    if let Some(provider) = &course.provider_number {
        meta.push(format!("Provider #: {}", provider));
    }
    if let Some(offering) = &course.course_offering_number {
        meta.push(format!("Course offering #: {}", offering));
    }
    if let Some(instructor) = &course.instructor_name {
        meta.push(format!("Instructor: {}", instructor));
    }
    docx = docx.add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(meta.join("  |  "))),
    );
    docx.add_paragraph(Paragraph::new())
}

fn add_unit(docx: Docx, unit_export: &UnitExport, opts: &ExportOptions) -> Docx {
    let unit = &unit_export.unit;
    let mut docx = docx.add_paragraph(heading(&format!(
        "Unit {}: {}",
        unit.unit_number, unit.title
    )));

    if opts.include_descriptions
        && let Some(description) = &unit.description
        && !description.is_empty()
    {
        docx = docx.add_paragraph(body(description));
    }

    if opts.include_lessons && !unit_export.lessons.is_empty() {
        docx = docx.add_table(table_from_rows(&lesson_table_rows(
            &unit_export.lessons,
            opts.include_videos,
        )));
        docx = docx.add_paragraph(Paragraph::new());

        for lesson in &unit_export.lessons {
            docx = docx.add_paragraph(subheading(&format!(
                "Lesson {}.{} — {}",
                unit.unit_number, lesson.lesson_number, lesson.title
            )));
            for paragraph in content_paragraphs(&lesson.content, opts.include_html) {
                docx = docx.add_paragraph(paragraph);
            }
        }
    }

    if opts.include_quizzes
        && let Some(quiz) = &unit_export.quiz
    {
        docx = docx.add_paragraph(subheading(&format!("Unit Quiz: {}", quiz.bank.title)));
        docx = docx.add_paragraph(body(&format!(
            "{} questions in bank, {} served per attempt, passing score {}%",
            quiz.questions.len(),
            quiz.bank.questions_per_attempt,
            quiz.bank.passing_score
        )));
        docx = add_question_list(docx, &quiz.questions, true);
    }

    docx.add_paragraph(Paragraph::new())
}

fn add_question_list(
    mut docx: Docx,
    questions: &[crate::entity::bank_question::Model],
    mark_correct: bool,
) -> Docx {
    for (idx, question) in questions.iter().enumerate() {
        docx = docx.add_paragraph(body(&format!("{}. {}", idx + 1, question.question)));
        for (letter, option) in ["A", "B", "C", "D"].iter().zip(question.options()) {
            let marker = if mark_correct
                && question.correct_letter() == letter.chars().next()
            {
                " *"
            } else {
                ""
            };
            docx = docx.add_paragraph(
                Paragraph::new()
                    .indent(Some(720), None, None, None)
                    .add_run(Run::new().add_text(format!("{}. {}{}", letter, option, marker))),
            );
        }
    }
    docx
}

/// Assemble the configurable content export.
pub fn content_document(export: &CourseExport, opts: &ExportOptions) -> Docx {
    let mut docx = course_header(Docx::new(), export, "Course Content Export");

    if opts.include_descriptions
        && let Some(description) = &export.course.description
        && !description.is_empty()
    {
        docx = docx.add_paragraph(body(description));
        docx = docx.add_paragraph(Paragraph::new());
    }

    for unit_export in &export.units {
        docx = add_unit(docx, unit_export, opts);
    }

    for exam in &export.exams {
        let form = exam.bank.exam_form.as_deref().unwrap_or("A");
        if !opts.wants_form(form) {
            continue;
        }
        docx = docx.add_paragraph(page_break());
        docx = docx.add_paragraph(heading(&format!("Final Exam — Form {}", form)));
        docx = docx.add_paragraph(body(&format!(
            "{} questions in bank, {} served per attempt, passing score {}%",
            exam.questions.len(),
            exam.bank.questions_per_attempt,
            exam.bank.passing_score
        )));
        if opts.include_quizzes {
            docx = add_question_list(docx, &exam.questions, true);
        }
    }

    docx
}

/// Assemble the Florida DBPR answer key, optionally restricted to one form.
pub fn answer_key_document(export: &CourseExport, form_filter: Option<&str>) -> Docx {
    let mut docx = course_header(Docx::new(), export, "Final Exam Answer Key");

    for exam in &export.exams {
        let form = exam.bank.exam_form.as_deref().unwrap_or("A");
        if let Some(filter) = form_filter
            && !filter.eq_ignore_ascii_case(form)
        {
            continue;
        }
        docx = docx.add_paragraph(heading(&format!("Form {}", form)));
        docx = docx.add_table(table_from_rows(&answer_key_rows(exam)));
        docx = docx.add_paragraph(Paragraph::new());
    }

    docx
}

/// Assemble one standalone printable final exam (no answers).
pub fn final_exam_document(export: &CourseExport, exam: &ExamExport) -> Docx {
    let form = exam.bank.exam_form.as_deref().unwrap_or("A");
    let mut docx = course_header(
        Docx::new(),
        export,
        &format!("Final Exam — Form {}", form),
    );

    docx = docx.add_paragraph(body("Name: ______________________________    Date: ____________"));
    let mut instructions = format!(
        "Answer all {} questions. A score of {}% or higher is required to pass.",
        exam.questions.len(),
        exam.bank.passing_score
    );
    if let Some(limit) = exam.bank.time_limit_minutes {
        instructions.push_str(&format!(" Time limit: {} minutes.", limit));
    }
    docx = docx.add_paragraph(body(&instructions));
    docx = docx.add_paragraph(Paragraph::new());

    add_question_list(docx, &exam.questions, false)
}

/// Serialize the document to bytes.
pub fn pack(docx: Docx) -> Result<Vec<u8>, ApiError> {
    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ApiError::internal(format!("Failed to pack docx: {:?}", e)))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::bank_question;
    use crate::entity::sea_orm_active_enums::QuestionDifficulty;

    fn sample_lesson(number: i32, title: &str, video: Option<&str>) -> lesson::Model {
        lesson::Model {
            id: format!("lesson-{}", number),
            unit_id: "unit-1".to_string(),
            lesson_number: number,
            title: title.to_string(),
            video_url: video.map(|v| v.to_string()),
            duration_minutes: Some(15),
            content: "<p>Body</p>".to_string(),
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    fn sample_question(correct: i32) -> bank_question::Model {
        bank_question::Model {
            id: "q-1".to_string(),
            bank_id: "bank-1".to_string(),
            question: "Which chapter governs brokers?".to_string(),
            option_a: "455".to_string(),
            option_b: "475".to_string(),
            option_c: "120".to_string(),
            option_d: "68".to_string(),
            correct_option: correct,
            explanation: Some("Chapter 475, F.S.".to_string()),
            difficulty: QuestionDifficulty::Medium,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn lesson_rows_without_videos() {
        let lessons = vec![sample_lesson(1, "Intro", Some("https://vimeo.com/1"))];
        let rows = lesson_table_rows(&lessons, false);
        assert_eq!(rows[0], vec!["#", "Lesson", "Duration"]);
        assert_eq!(rows[1], vec!["1", "Intro", "15 min"]);
    }

    #[test]
    fn lesson_rows_with_video_column() {
        let lessons = vec![sample_lesson(2, "License Law", None)];
        let rows = lesson_table_rows(&lessons, true);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(rows[1], vec!["2", "License Law", "15 min", ""]);
    }

    #[test]
    fn answer_key_rows_use_letters() {
        let exam = ExamExport {
            bank: crate::entity::question_bank::Model {
                id: "bank-1".to_string(),
                course_id: "course-1".to_string(),
                unit_id: None,
                bank_type: crate::entity::sea_orm_active_enums::BankType::FinalExam,
                exam_form: Some("A".to_string()),
                title: "Final Exam A".to_string(),
                questions_per_attempt: 100,
                passing_score: 75,
                time_limit_minutes: Some(180),
                created_at: chrono::NaiveDateTime::default(),
                updated_at: chrono::NaiveDateTime::default(),
            },
            questions: vec![sample_question(1)],
        };
        let rows = answer_key_rows(&exam);
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[1][1], "B");
        assert_eq!(rows[1][2], "Chapter 475, F.S.");
    }

    #[test]
    fn out_of_range_correct_option_renders_placeholder() {
        let mut question = sample_question(7);
        question.explanation = None;
        let exam = ExamExport {
            bank: crate::entity::question_bank::Model {
                id: "bank-1".to_string(),
                course_id: "course-1".to_string(),
                unit_id: None,
                bank_type: crate::entity::sea_orm_active_enums::BankType::FinalExam,
                exam_form: Some("B".to_string()),
                title: "Final Exam B".to_string(),
                questions_per_attempt: 100,
                passing_score: 75,
                time_limit_minutes: None,
                created_at: chrono::NaiveDateTime::default(),
                updated_at: chrono::NaiveDateTime::default(),
            },
            questions: vec![question],
        };
        let rows = answer_key_rows(&exam);
        assert_eq!(rows[1][1], "?");
        assert_eq!(rows[1][2], "");
    }

    #[test]
    fn packed_document_is_a_zip() {
        let lessons = vec![sample_lesson(1, "Intro", None)];
        let docx = Docx::new().add_table(table_from_rows(&lesson_table_rows(&lessons, false)));
        let bytes = pack(docx).expect("pack");
        // OOXML containers are ZIP archives
        assert_eq!(&bytes[..2], b"PK");
    }
}
