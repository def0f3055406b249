//! Loads the authoring content an export run operates on.

use std::collections::HashMap;

use crate::entity::{
    bank_question, course, course_unit, lesson, question_bank,
    sea_orm_active_enums::BankType,
};
use crate::error::ApiError;
use crate::not_found;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use serde::Serialize;
use utoipa::ToSchema;

pub struct QuizExport {
    pub bank: question_bank::Model,
    pub questions: Vec<bank_question::Model>,
}

pub struct UnitExport {
    pub unit: course_unit::Model,
    pub lessons: Vec<lesson::Model>,
    pub quiz: Option<QuizExport>,
}

pub struct ExamExport {
    pub bank: question_bank::Model,
    pub questions: Vec<bank_question::Model>,
}

pub struct CourseExport {
    pub course: course::Model,
    pub units: Vec<UnitExport>,
    /// Final-exam forms, ordered by form identifier
    pub exams: Vec<ExamExport>,
}

/// Metadata for one final-exam form, used by the form selector.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamFormInfo {
    pub form: String,
    pub title: String,
    pub question_count: u64,
    pub passing_score: i32,
    pub time_limit_minutes: Option<i32>,
}

pub async fn find_course(
    db: &DatabaseConnection,
    course_id: &str,
) -> Result<course::Model, ApiError> {
    course::Entity::find_by_id(course_id)
        .one(db)
        .await?
        .ok_or_else(|| not_found!("Course {} not found", course_id))
}

/// List the final-exam forms available for a course.
pub async fn list_exam_forms(
    db: &DatabaseConnection,
    course_id: &str,
) -> Result<Vec<ExamFormInfo>, ApiError> {
    let banks = question_bank::Entity::find()
        .filter(question_bank::Column::CourseId.eq(course_id))
        .filter(question_bank::Column::BankType.eq(BankType::FinalExam))
        .order_by_asc(question_bank::Column::ExamForm)
        .all(db)
        .await?;

    let mut forms = Vec::with_capacity(banks.len());
    for bank in banks {
        let question_count = bank_question::Entity::find()
            .filter(bank_question::Column::BankId.eq(&bank.id))
            .count(db)
            .await?;
        forms.push(ExamFormInfo {
            form: bank.exam_form.unwrap_or_else(|| "A".to_string()),
            title: bank.title,
            question_count,
            passing_score: bank.passing_score,
            time_limit_minutes: bank.time_limit_minutes,
        });
    }
    Ok(forms)
}

/// Load everything the content export needs in four queries, grouped in
/// memory.
pub async fn load_course_export(
    db: &DatabaseConnection,
    course_id: &str,
) -> Result<CourseExport, ApiError> {
    let course = find_course(db, course_id).await?;

    let units = course_unit::Entity::find()
        .filter(course_unit::Column::CourseId.eq(course_id))
        .order_by_asc(course_unit::Column::UnitNumber)
        .all(db)
        .await?;

    let unit_ids: Vec<String> = units.iter().map(|u| u.id.clone()).collect();
    let lessons = if unit_ids.is_empty() {
        Vec::new()
    } else {
        lesson::Entity::find()
            .filter(lesson::Column::UnitId.is_in(unit_ids))
            .order_by_asc(lesson::Column::LessonNumber)
            .all(db)
            .await?
    };

    let banks = question_bank::Entity::find()
        .filter(question_bank::Column::CourseId.eq(course_id))
        .all(db)
        .await?;

    let bank_ids: Vec<String> = banks.iter().map(|b| b.id.clone()).collect();
    let questions = if bank_ids.is_empty() {
        Vec::new()
    } else {
        bank_question::Entity::find()
            .filter(bank_question::Column::BankId.is_in(bank_ids))
            .order_by_asc(bank_question::Column::CreatedAt)
            .all(db)
            .await?
    };

    let mut questions_by_bank: HashMap<String, Vec<bank_question::Model>> = HashMap::new();
    for question in questions {
        questions_by_bank
            .entry(question.bank_id.clone())
            .or_default()
            .push(question);
    }

    let mut quiz_by_unit: HashMap<String, QuizExport> = HashMap::new();
    let mut exams = Vec::new();
    for bank in banks {
        let bank_questions = questions_by_bank.remove(&bank.id).unwrap_or_default();
        match bank.bank_type {
            BankType::FinalExam => exams.push(ExamExport {
                bank,
                questions: bank_questions,
            }),
            BankType::UnitQuiz => {
                if let Some(unit_id) = bank.unit_id.clone() {
                    quiz_by_unit.insert(
                        unit_id,
                        QuizExport {
                            bank,
                            questions: bank_questions,
                        },
                    );
                }
            }
        }
    }
    exams.sort_by(|a, b| a.bank.exam_form.cmp(&b.bank.exam_form));

    let unit_exports = units
        .into_iter()
        .map(|unit| {
            let unit_lessons: Vec<lesson::Model> = lessons
                .iter()
                .filter(|l| l.unit_id == unit.id)
                .cloned()
                .collect();
            let quiz = quiz_by_unit.remove(&unit.id);
            UnitExport {
                unit,
                lessons: unit_lessons,
                quiz,
            }
        })
        .collect();

    Ok(CourseExport {
        course,
        units: unit_exports,
        exams,
    })
}
