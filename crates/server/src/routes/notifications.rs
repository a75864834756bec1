//! Transaction-notification API routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use core_types::{ApiError, Notification, NotificationReply};

use crate::state::AppState;

/// GET /api/notifications/unanswered - transactions awaiting a decision.
pub async fn list_unanswered_notifications(
    State(state): State<AppState>,
) -> Json<Vec<Notification>> {
    Json(state.notifications.read().await.clone())
}

/// POST /api/notifications/:id/reply - confirm or reject a transaction.
pub async fn reply_notification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(reply): Json<NotificationReply>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    if state.resolve_notification(id).await {
        tracing::info!(notification_id = id, approve = reply.approve, "notification replied");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code(
                format!("Notification not found: {}", id),
                "NOT_FOUND",
            )),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replied_notification_never_listed_again() {
        let state = AppState::seeded();

        let listed = list_unanswered_notifications(State(state.clone())).await;
        let first = listed.0.first().cloned().expect("seeded notification");

        reply_notification(
            State(state.clone()),
            Path(first.notification_id),
            Json(NotificationReply { approve: true }),
        )
        .await
        .expect("reply succeeds");

        let after = list_unanswered_notifications(State(state)).await;
        assert!(
            after
                .0
                .iter()
                .all(|n| n.notification_id != first.notification_id)
        );
    }

    #[tokio::test]
    async fn test_rejection_also_removes_from_pending_set() {
        let state = AppState::seeded();

        reply_notification(
            State(state.clone()),
            Path(3),
            Json(NotificationReply { approve: false }),
        )
        .await
        .expect("reply succeeds");

        let after = list_unanswered_notifications(State(state)).await;
        assert!(after.0.iter().all(|n| n.notification_id != 3));
    }

    #[tokio::test]
    async fn test_reply_unknown_notification_is_not_found() {
        let state = AppState::seeded();

        let err = reply_notification(
            State(state),
            Path(999),
            Json(NotificationReply { approve: true }),
        )
        .await
        .expect_err("unknown id");

        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}
