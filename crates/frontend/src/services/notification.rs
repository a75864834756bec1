//! Gateway calls for the approval/notification workflow.

use core_types::{Approval, ApprovalReply, Notification, NotificationReply};

use super::{Result, get_json, post_json};

/// Pending group invitations for the current identity.
pub async fn get_approvals() -> Result<Vec<Approval>> {
    get_json("/api/approvals").await
}

/// Pending transaction notifications awaiting a guardian decision.
pub async fn get_unanswered_notifications() -> Result<Vec<Notification>> {
    get_json("/api/notifications/unanswered").await
}

/// Accept or reject a group invitation.
pub async fn reply_approval(approval_id: i64, accept_status: bool) -> Result<()> {
    post_json(
        &format!("/api/approvals/{approval_id}/reply"),
        &ApprovalReply { accept_status },
    )
    .await
}

/// Confirm or reject a pending transaction.
pub async fn reply_notification(notification_id: i64, approve: bool) -> Result<()> {
    post_json(
        &format!("/api/notifications/{notification_id}/reply"),
        &NotificationReply { approve },
    )
    .await
}
