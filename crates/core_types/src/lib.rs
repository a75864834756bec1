//! Core types for the guardians family-safety client.
//!
//! This crate defines the shared data structures used across
//! the web client and the dev API server: pending records, the
//! session identity, and display formatting for amounts.

use serde::{Deserialize, Serialize};

/// A pending group invitation awaiting accept/reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    /// Unique approval identifier
    pub approval_id: i64,
    /// Group the invitation belongs to
    pub family_id: i64,
    /// Group display name
    pub family_name: String,
    /// Group description shown on the invite card
    pub family_description: String,
}

/// Kind of a monitored transaction.
///
/// Unknown wire tags fold into `Payment` so new backend types
/// render as a generic payment instead of failing the fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    #[serde(other)]
    Payment,
}

impl TransactionType {
    /// Korean display label for the transaction kind.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "입금",
            TransactionType::Withdrawal => "출금",
            TransactionType::Transfer => "이체",
            TransactionType::Payment => "결제",
        }
    }

    /// Deposits are highlighted differently from outgoing kinds.
    pub fn is_deposit(&self) -> bool {
        matches!(self, TransactionType::Deposit)
    }
}

/// A monitored transaction awaiting guardian confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier
    pub notification_id: i64,
    /// Account holder who made the transaction
    pub sender_name: String,
    /// Display timestamp, rendered verbatim
    pub transaction_time: String,
    /// Amount in won, non-negative
    pub transaction_balance: u64,
    /// Transaction kind
    pub transaction_type: TransactionType,
    /// Masked account number
    pub account_number: String,
}

/// Role of the authenticated identity within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Not in any group yet
    None,
    /// Monitored member (ward)
    Member,
    /// Guardian of one or more members
    Guardian,
    /// Group owner
    Owner,
}

impl Role {
    /// Only elevated roles may view pending transaction notifications.
    pub fn can_view_notifications(&self) -> bool {
        match self {
            Role::None | Role::Member => false,
            Role::Guardian | Role::Owner => true,
        }
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

/// The group the session identity belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub group_id: i64,
    pub group_name: String,
}

impl GroupMembership {
    /// Membership resulting from an accepted invite, if the reply
    /// was an acceptance and the invite carries a usable group.
    pub fn from_accepted_invite(
        accept: bool,
        family_id: i64,
        family_name: &str,
    ) -> Option<GroupMembership> {
        if accept && family_id != 0 && !family_name.is_empty() {
            Some(GroupMembership {
                group_id: family_id,
                group_name: family_name.to_string(),
            })
        } else {
            None
        }
    }
}

/// Session identity: who is logged in and which group they belong to.
///
/// Initialized at login and torn down at logout, both outside this
/// repo. The approval flow is the only writer of `group`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub group: Option<GroupMembership>,
}

impl Session {
    /// Set or overwrite the group membership.
    pub fn update_group(&mut self, group_id: i64, group_name: impl Into<String>) {
        self.group = Some(GroupMembership {
            group_id,
            group_name: group_name.into(),
        });
    }

    /// Whether the notification section is visible for this identity.
    pub fn can_view_notifications(&self) -> bool {
        self.user.role.can_view_notifications()
    }
}

/// Selected-notification state behind the confirmation modal.
///
/// The modal is visible iff a notification is selected and the open
/// flag is set; the two are only ever written together, so the pair
/// can never be observed half-set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingConfirmation {
    selected: Option<Notification>,
    open: bool,
}

impl PendingConfirmation {
    /// No notification selected, modal closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// Select a notification and open the modal.
    pub fn opened(notification: Notification) -> Self {
        Self {
            selected: Some(notification),
            open: true,
        }
    }

    pub fn visible(&self) -> bool {
        self.selected.is_some() && self.open
    }

    pub fn selected(&self) -> Option<&Notification> {
        self.selected.as_ref()
    }
}

/// Expected answer of a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Correct,
    Incorrect,
}

/// A fraud-education quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: i64,
    pub question: String,
    pub answer: Answer,
    pub explanation: String,
}

/// A member of the session identity's group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub user_id: i64,
    pub name: String,
    pub role: Role,
}

/// Group overview shown on the main page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySummary {
    pub name: String,
    pub description: String,
    /// Count of outstanding invitations for this group
    pub approval_request: i64,
    pub users: Vec<FamilyMember>,
}

/// Reply body for an approval (group invite) decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ApprovalReply {
    pub accept_status: bool,
}

/// Reply body for a notification (transaction) decision.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationReply {
    pub approve: bool,
}

/// JSON error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Relationship labels offered when inviting a group member.
pub const RELATIONSHIP_OPTIONS: [&str; 7] = [
    "할아버지",
    "할머니",
    "아버지",
    "어머니",
    "형제",
    "자녀",
    "기타",
];

/// Format an amount in won with grouped thousands, e.g. `15,000원`.
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('원');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64) -> Notification {
        Notification {
            notification_id: id,
            sender_name: "김신한".to_string(),
            transaction_time: "2024-11-21 14:02".to_string(),
            transaction_balance: 15000,
            transaction_type: TransactionType::Deposit,
            account_number: "110-123-456789".to_string(),
        }
    }

    #[test]
    fn test_accepted_invite_yields_membership() {
        let membership = GroupMembership::from_accepted_invite(true, 7, "우리가족");

        assert_eq!(
            membership,
            Some(GroupMembership {
                group_id: 7,
                group_name: "우리가족".to_string(),
            })
        );
    }

    #[test]
    fn test_rejected_invite_yields_nothing() {
        assert_eq!(
            GroupMembership::from_accepted_invite(false, 7, "우리가족"),
            None
        );
    }

    #[test]
    fn test_invite_without_usable_group_yields_nothing() {
        assert_eq!(GroupMembership::from_accepted_invite(true, 0, "우리가족"), None);
        assert_eq!(GroupMembership::from_accepted_invite(true, 7, ""), None);
    }

    #[test]
    fn test_update_group_overwrites_membership() {
        let mut session = Session {
            user: User {
                name: "김신한".to_string(),
                role: Role::Owner,
            },
            group: Some(GroupMembership {
                group_id: 1,
                group_name: "이전그룹".to_string(),
            }),
        };

        session.update_group(7, "우리가족");

        let group = session.group.expect("membership set");
        assert_eq!(group.group_id, 7);
        assert_eq!(group.group_name, "우리가족");
    }

    #[test]
    fn test_notification_visibility_by_role() {
        assert!(!Role::None.can_view_notifications());
        assert!(!Role::Member.can_view_notifications());
        assert!(Role::Guardian.can_view_notifications());
        assert!(Role::Owner.can_view_notifications());
    }

    #[test]
    fn test_confirmation_pair_never_half_set() {
        let closed = PendingConfirmation::closed();
        assert!(!closed.visible());
        assert!(closed.selected().is_none());

        let opened = PendingConfirmation::opened(notification(1));
        assert!(opened.visible());
        assert_eq!(opened.selected().map(|n| n.notification_id), Some(1));

        // visibility always tracks the selection
        assert_eq!(opened.visible(), opened.selected().is_some());
        assert_eq!(closed.visible(), closed.selected().is_some());
    }

    #[test]
    fn test_transaction_labels() {
        assert_eq!(TransactionType::Deposit.label(), "입금");
        assert_eq!(TransactionType::Withdrawal.label(), "출금");
        assert_eq!(TransactionType::Transfer.label(), "이체");
        assert_eq!(TransactionType::Payment.label(), "결제");
        assert!(TransactionType::Deposit.is_deposit());
        assert!(!TransactionType::Transfer.is_deposit());
    }

    #[test]
    fn test_unknown_transaction_type_folds_into_payment() {
        let parsed: TransactionType = serde_json::from_str("\"CARD_PAYMENT\"").unwrap();
        assert_eq!(parsed, TransactionType::Payment);
    }

    #[test]
    fn test_role_wire_tags() {
        assert_eq!(serde_json::to_string(&Role::None).unwrap(), "\"NONE\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"GUARDIAN\"").unwrap(),
            Role::Guardian
        );
    }

    #[test]
    fn test_notification_wire_shape() {
        let json = r#"{
            "notification_id": 3,
            "sender_name": "박가온",
            "transaction_time": "2024-11-21 09:30",
            "transaction_balance": 1200000,
            "transaction_type": "WITHDRAWAL",
            "account_number": "110-987-654321"
        }"#;

        let parsed: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notification_id, 3);
        assert_eq!(parsed.transaction_type, TransactionType::Withdrawal);
        assert_eq!(parsed.transaction_balance, 1_200_000);
    }

    #[test]
    fn test_format_won_groups_thousands() {
        assert_eq!(format_won(0), "0원");
        assert_eq!(format_won(500), "500원");
        assert_eq!(format_won(15000), "15,000원");
        assert_eq!(format_won(1_200_000), "1,200,000원");
    }

    #[test]
    fn test_quiz_answer_wire_tags() {
        assert_eq!(
            serde_json::to_string(&Answer::Correct).unwrap(),
            "\"correct\""
        );
        assert_eq!(
            serde_json::from_str::<Answer>("\"incorrect\"").unwrap(),
            Answer::Incorrect
        );
    }
}
