use crate::{
    entity::{analytics_event, enrollment, sea_orm_active_enums::EnrollmentStatus, user},
    error::ApiError,
    middleware::jwt::AppUser,
    permission::global_permission::GlobalPermission,
    state::{ANALYTICS_SUMMARY_CACHE_KEY, AppState},
};
use axum::{Extension, Json, extract::State};
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeCount {
    pub event_type: String,
    pub count: i64,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentEvent {
    pub id: String,
    pub user_id: String,
    pub event_type: String,
    pub course_id: Option<String>,
    pub lesson_id: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    /// Pre-rendered relative-time bucket
    pub age: String,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummaryResponse {
    pub total_users: u64,
    pub total_enrollments: u64,
    pub completed_enrollments: u64,
    /// Percentage, 0-100, rounded to one decimal
    pub completion_rate: f64,
    pub events_by_type: Vec<EventTypeCount>,
    pub recent_events: Vec<RecentEvent>,
}

pub(crate) fn completion_rate(total: u64, completed: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((completed as f64 / total as f64) * 1000.0).round() / 10.0
}

#[utoipa::path(
    get,
    path = "/admin/analytics/summary",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard summary: counts, completion rate, histogram, recent feed"),
        (status = 403, description = "Forbidden")
    )
)]
#[tracing::instrument(name = "GET /admin/analytics/summary", skip(state, user))]
pub async fn summary(
    State(state): State<AppState>,
    Extension(user): Extension<AppUser>,
) -> Result<Json<AnalyticsSummaryResponse>, ApiError> {
    user.check_global_permission(&state, GlobalPermission::ViewAnalytics)
        .await?;

    if let Some(cached) = state.get_cache::<AnalyticsSummaryResponse>(ANALYTICS_SUMMARY_CACHE_KEY) {
        return Ok(Json(cached));
    }

    let total_users = user::Entity::find().count(&state.db).await?;
    let total_enrollments = enrollment::Entity::find().count(&state.db).await?;
    let completed_enrollments = enrollment::Entity::find()
        .filter(enrollment::Column::Status.eq(EnrollmentStatus::Completed))
        .count(&state.db)
        .await?;

    let events_by_type: Vec<(String, i64)> = analytics_event::Entity::find()
        .select_only()
        .column(analytics_event::Column::EventType)
        .column_as(analytics_event::Column::Id.count(), "count")
        .group_by(analytics_event::Column::EventType)
        .into_tuple()
        .all(&state.db)
        .await?;

    let recent = analytics_event::Entity::find()
        .order_by_desc(analytics_event::Column::CreatedAt)
        .limit(20)
        .all(&state.db)
        .await?;

    let now = chrono::Utc::now().naive_utc();
    let recent_events = recent
        .into_iter()
        .map(|event| {
            let age = super::format_relative_age(now - event.created_at);
            RecentEvent {
                id: event.id,
                user_id: event.user_id,
                event_type: event.event_type,
                course_id: event.course_id,
                lesson_id: event.lesson_id,
                created_at: event.created_at,
                age,
            }
        })
        .collect();

    let response = AnalyticsSummaryResponse {
        total_users,
        total_enrollments,
        completed_enrollments,
        completion_rate: completion_rate(total_enrollments, completed_enrollments),
        events_by_type: events_by_type
            .into_iter()
            .map(|(event_type, count)| EventTypeCount { event_type, count })
            .collect(),
        recent_events,
    };

    // A few seconds of staleness is fine for a 30s dashboard poll.
    state.set_cache(ANALYTICS_SUMMARY_CACHE_KEY.to_string(), response.clone());

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_rate_rounds_to_one_decimal() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(3, 1), 33.3);
        assert_eq!(completion_rate(4, 4), 100.0);
    }
}
