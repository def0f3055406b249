use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

pub mod analytics;
pub mod content;
pub mod courses;
pub mod email_templates;
pub mod finance;
pub mod media;
pub mod pages;
pub mod progress;
pub mod questions;
pub mod roles;
pub mod settings;

pub fn routes() -> Router<AppState> {
    Router::new()
        // Course catalog
        .route(
            "/courses",
            get(courses::list_courses::list_courses).post(courses::create_course::create_course),
        )
        .route(
            "/courses/{course_id}",
            get(courses::get_course::get_course)
                .patch(courses::update_course::update_course)
                .delete(courses::delete_course::delete_course),
        )
        // Content builder
        .route(
            "/courses/{course_id}/units",
            get(content::list_units::list_units).post(content::create_unit::create_unit),
        )
        .route(
            "/units/{unit_id}",
            patch(content::update_unit::update_unit)
                .delete(content::delete_unit::delete_unit),
        )
        .route(
            "/units/{unit_id}/lessons",
            get(content::list_lessons::list_lessons).post(content::create_lesson::create_lesson),
        )
        .route(
            "/lessons/{lesson_id}",
            patch(content::update_lesson::update_lesson)
                .delete(content::delete_lesson::delete_lesson),
        )
        // Media library
        .route(
            "/media",
            get(media::list_media::list_media).post(media::create_media::create_media),
        )
        // Question banks
        .route(
            "/courses/{course_id}/question-banks",
            get(questions::list_banks::list_banks).post(questions::create_bank::create_bank),
        )
        .route(
            "/question-banks/{bank_id}",
            patch(questions::update_bank::update_bank)
                .delete(questions::delete_bank::delete_bank),
        )
        .route(
            "/question-banks/{bank_id}/questions",
            get(questions::list_questions::list_questions)
                .post(questions::create_question::create_question),
        )
        .route(
            "/questions/{question_id}",
            patch(questions::update_question::update_question)
                .delete(questions::delete_question::delete_question),
        )
        // Page builder
        .route(
            "/site-pages",
            get(pages::list_pages::list_pages).post(pages::create_page::create_page),
        )
        .route(
            "/site-pages/{page_id}",
            get(pages::get_page::get_page)
                .patch(pages::update_page::update_page)
                .delete(pages::delete_page::delete_page),
        )
        .route(
            "/site-pages/{page_id}/sections",
            get(pages::list_sections::list_sections).post(pages::create_section::create_section),
        )
        .route(
            "/site-pages/{page_id}/sections/reorder",
            post(pages::reorder_sections::reorder_sections),
        )
        .route(
            "/sections/{section_id}",
            patch(pages::update_section::update_section)
                .delete(pages::delete_section::delete_section),
        )
        .route(
            "/sections/{section_id}/blocks",
            get(pages::list_blocks::list_blocks).post(pages::create_block::create_block),
        )
        .route(
            "/sections/{section_id}/blocks/reorder",
            post(pages::reorder_blocks::reorder_blocks),
        )
        .route(
            "/blocks/{block_id}",
            patch(pages::update_block::update_block)
                .delete(pages::delete_block::delete_block),
        )
        // Progress override
        .route(
            "/enrollments",
            get(progress::list_enrollments::list_enrollments),
        )
        .route(
            "/enrollments/{enrollment_id}/progress",
            get(progress::get_progress::get_progress),
        )
        .route(
            "/enrollments/{enrollment_id}/units/{unit_id}/complete",
            post(progress::complete_unit::complete_unit),
        )
        .route(
            "/unit-progress/{progress_id}",
            patch(progress::update_unit_progress::update_unit_progress),
        )
        .route(
            "/lesson-progress",
            post(progress::create_lesson_progress::create_lesson_progress),
        )
        .route(
            "/lesson-progress/{progress_id}",
            patch(progress::update_lesson_progress::update_lesson_progress),
        )
        // Finance ledger
        .route("/purchases", get(finance::list_purchases::list_purchases))
        .route(
            "/refunds",
            get(finance::list_refunds::list_refunds).post(finance::create_refund::create_refund),
        )
        .route(
            "/credits",
            get(finance::list_credits::list_credits).post(finance::create_credit::create_credit),
        )
        .route(
            "/users/{user_id}/financial",
            get(finance::user_financials::user_financials),
        )
        // Analytics
        .route("/analytics/summary", get(analytics::summary::summary))
        .route(
            "/analytics/events",
            post(analytics::record_event::record_event),
        )
        // Settings, email templates, roles
        .route(
            "/settings",
            get(settings::list_settings::list_settings)
                .put(settings::upsert_setting::upsert_setting),
        )
        .route(
            "/settings/{key}",
            delete(settings::delete_setting::delete_setting),
        )
        .route(
            "/email-templates",
            get(email_templates::list_templates::list_templates)
                .post(email_templates::create_template::create_template),
        )
        .route(
            "/email-templates/{template_id}",
            get(email_templates::get_template::get_template)
                .patch(email_templates::update_template::update_template)
                .delete(email_templates::delete_template::delete_template),
        )
        .route(
            "/email-templates/{template_id}/preview",
            post(email_templates::preview_template::preview_template),
        )
        .route(
            "/roles",
            get(roles::list_roles::list_roles).post(roles::create_role::create_role),
        )
        .route(
            "/roles/{role_id}",
            patch(roles::update_role::update_role)
                .delete(roles::delete_role::delete_role),
        )
}
