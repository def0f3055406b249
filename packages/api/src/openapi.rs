//! OpenAPI document assembled from the per-handler annotations.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Licensure Admin API",
        description = "Course authoring, content export, finance ledger, and admin surface for the licensure CE platform"
    ),
    paths(
        crate::routes::health::health,
        crate::routes::health::db_health,
        crate::routes::admin::courses::list_courses::list_courses,
        crate::routes::admin::courses::get_course::get_course,
        crate::routes::admin::courses::create_course::create_course,
        crate::routes::admin::courses::update_course::update_course,
        crate::routes::admin::courses::delete_course::delete_course,
        crate::routes::admin::content::list_units::list_units,
        crate::routes::admin::content::create_unit::create_unit,
        crate::routes::admin::content::update_unit::update_unit,
        crate::routes::admin::content::delete_unit::delete_unit,
        crate::routes::admin::content::list_lessons::list_lessons,
        crate::routes::admin::content::create_lesson::create_lesson,
        crate::routes::admin::content::update_lesson::update_lesson,
        crate::routes::admin::content::delete_lesson::delete_lesson,
        crate::routes::admin::media::list_media::list_media,
        crate::routes::admin::media::create_media::create_media,
        crate::routes::admin::questions::list_banks::list_banks,
        crate::routes::admin::questions::create_bank::create_bank,
        crate::routes::admin::questions::update_bank::update_bank,
        crate::routes::admin::questions::delete_bank::delete_bank,
        crate::routes::admin::questions::list_questions::list_questions,
        crate::routes::admin::questions::create_question::create_question,
        crate::routes::admin::questions::update_question::update_question,
        crate::routes::admin::questions::delete_question::delete_question,
        crate::routes::admin::pages::list_pages::list_pages,
        crate::routes::admin::pages::get_page::get_page,
        crate::routes::admin::pages::create_page::create_page,
        crate::routes::admin::pages::update_page::update_page,
        crate::routes::admin::pages::delete_page::delete_page,
        crate::routes::admin::pages::list_sections::list_sections,
        crate::routes::admin::pages::create_section::create_section,
        crate::routes::admin::pages::update_section::update_section,
        crate::routes::admin::pages::delete_section::delete_section,
        crate::routes::admin::pages::reorder_sections::reorder_sections,
        crate::routes::admin::pages::list_blocks::list_blocks,
        crate::routes::admin::pages::create_block::create_block,
        crate::routes::admin::pages::update_block::update_block,
        crate::routes::admin::pages::delete_block::delete_block,
        crate::routes::admin::pages::reorder_blocks::reorder_blocks,
        crate::routes::admin::progress::list_enrollments::list_enrollments,
        crate::routes::admin::progress::get_progress::get_progress,
        crate::routes::admin::progress::complete_unit::complete_unit,
        crate::routes::admin::progress::update_unit_progress::update_unit_progress,
        crate::routes::admin::progress::update_lesson_progress::update_lesson_progress,
        crate::routes::admin::progress::create_lesson_progress::create_lesson_progress,
        crate::routes::admin::finance::list_purchases::list_purchases,
        crate::routes::admin::finance::create_refund::create_refund,
        crate::routes::admin::finance::list_refunds::list_refunds,
        crate::routes::admin::finance::create_credit::create_credit,
        crate::routes::admin::finance::list_credits::list_credits,
        crate::routes::admin::finance::user_financials::user_financials,
        crate::routes::admin::analytics::summary::summary,
        crate::routes::admin::analytics::record_event::record_event,
        crate::routes::admin::settings::list_settings::list_settings,
        crate::routes::admin::settings::upsert_setting::upsert_setting,
        crate::routes::admin::settings::delete_setting::delete_setting,
        crate::routes::admin::email_templates::list_templates::list_templates,
        crate::routes::admin::email_templates::get_template::get_template,
        crate::routes::admin::email_templates::create_template::create_template,
        crate::routes::admin::email_templates::update_template::update_template,
        crate::routes::admin::email_templates::delete_template::delete_template,
        crate::routes::admin::email_templates::preview_template::preview_template,
        crate::routes::admin::roles::list_roles::list_roles,
        crate::routes::admin::roles::create_role::create_role,
        crate::routes::admin::roles::update_role::update_role,
        crate::routes::admin::roles::delete_role::delete_role,
        crate::routes::export::exam_forms::exam_forms,
        crate::routes::export::course_content::course_content,
        crate::routes::export::answer_key::answer_key,
        crate::routes::export::final_exam::final_exam_a,
        crate::routes::export::final_exam::final_exam_b,
    ),
    components(schemas(
        crate::routes::health::HealthResponse,
        crate::routes::health::DbHealthResponse,
        crate::export::data::ExamFormInfo,
        crate::routes::admin::email_templates::preview_template::PreviewTemplateResponse,
    )),
    tags(
        (name = "health", description = "Liveness and database checks"),
        (name = "admin", description = "Admin console CRUD surface"),
        (name = "export", description = "Word-document exports")
    )
)]
pub struct ApiDoc;
