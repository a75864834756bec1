//! Group-invitation API routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use core_types::{ApiError, Approval, ApprovalReply};

use crate::state::AppState;

/// GET /api/approvals - pending group invitations.
pub async fn list_approvals(State(state): State<AppState>) -> Json<Vec<Approval>> {
    Json(state.approvals.read().await.clone())
}

/// POST /api/approvals/:id/reply - accept or reject an invitation.
///
/// The record leaves the pending set whichever way the user decided.
pub async fn reply_approval(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(reply): Json<ApprovalReply>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    if state.resolve_approval(id).await {
        tracing::info!(approval_id = id, accept = reply.accept_status, "approval replied");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::with_code(
                format!("Approval not found: {}", id),
                "NOT_FOUND",
            )),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_removes_approval_from_listing() {
        let state = AppState::seeded();

        let listed = list_approvals(State(state.clone())).await;
        let first = listed.0.first().cloned().expect("seeded approval");

        let status = reply_approval(
            State(state.clone()),
            Path(first.approval_id),
            Json(ApprovalReply {
                accept_status: true,
            }),
        )
        .await
        .expect("reply succeeds");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let after = list_approvals(State(state)).await;
        assert!(
            after
                .0
                .iter()
                .all(|a| a.approval_id != first.approval_id)
        );
    }

    #[tokio::test]
    async fn test_reply_unknown_approval_is_not_found() {
        let state = AppState::seeded();

        let err = reply_approval(
            State(state),
            Path(999),
            Json(ApprovalReply {
                accept_status: false,
            }),
        )
        .await
        .expect_err("unknown id");

        assert_eq!(err.0, StatusCode::NOT_FOUND);
        assert_eq!(err.1.0.code.as_deref(), Some("NOT_FOUND"));
    }
}
