//! Application state for the dev API server.

use std::sync::Arc;

use core_types::{
    Answer, Approval, FamilyMember, FamilySummary, Notification, Question, Role, TransactionType,
};
use tokio::sync::RwLock;

/// Shared application state.
///
/// Approvals and notifications shrink as replies arrive; the quiz
/// list and family overview are static demo data.
#[derive(Clone)]
pub struct AppState {
    pub approvals: Arc<RwLock<Vec<Approval>>>,
    pub notifications: Arc<RwLock<Vec<Notification>>>,
    pub questions: Arc<Vec<Question>>,
    pub family: Arc<FamilySummary>,
}

impl AppState {
    /// Create app state over the given records.
    pub fn new(
        approvals: Vec<Approval>,
        notifications: Vec<Notification>,
        questions: Vec<Question>,
        family: FamilySummary,
    ) -> Self {
        Self {
            approvals: Arc::new(RwLock::new(approvals)),
            notifications: Arc::new(RwLock::new(notifications)),
            questions: Arc::new(questions),
            family: Arc::new(family),
        }
    }

    /// App state seeded with demo records shaped like the real backend's.
    pub fn seeded() -> Self {
        Self::new(
            seed_approvals(),
            seed_notifications(),
            seed_questions(),
            seed_family(),
        )
    }

    /// Remove an approval once it has been replied to; false if the
    /// id is unknown (already answered or never existed).
    pub async fn resolve_approval(&self, approval_id: i64) -> bool {
        let mut approvals = self.approvals.write().await;
        let before = approvals.len();
        approvals.retain(|a| a.approval_id != approval_id);
        approvals.len() != before
    }

    /// Remove a notification once it has been replied to; false if
    /// the id is unknown.
    pub async fn resolve_notification(&self, notification_id: i64) -> bool {
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.notification_id != notification_id);
        notifications.len() != before
    }
}

fn seed_approvals() -> Vec<Approval> {
    vec![
        Approval {
            approval_id: 1,
            family_id: 10,
            family_name: "우리가족".to_string(),
            family_description: "김신한 님의 가족 그룹입니다.".to_string(),
        },
        Approval {
            approval_id: 2,
            family_id: 11,
            family_name: "행복한집".to_string(),
            family_description: "박가온 님이 초대했습니다.".to_string(),
        },
    ]
}

fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            notification_id: 1,
            sender_name: "김지우".to_string(),
            transaction_time: "2024-11-21 09:30".to_string(),
            transaction_balance: 15000,
            transaction_type: TransactionType::Deposit,
            account_number: "110-123-456789".to_string(),
        },
        Notification {
            notification_id: 2,
            sender_name: "김지우".to_string(),
            transaction_time: "2024-11-21 13:05".to_string(),
            transaction_balance: 1_200_000,
            transaction_type: TransactionType::Transfer,
            account_number: "110-123-456789".to_string(),
        },
        Notification {
            notification_id: 3,
            sender_name: "이도윤".to_string(),
            transaction_time: "2024-11-22 18:44".to_string(),
            transaction_balance: 89000,
            transaction_type: TransactionType::Withdrawal,
            account_number: "110-987-654321".to_string(),
        },
    ]
}

fn seed_questions() -> Vec<Question> {
    vec![
        Question {
            question_id: 1,
            question: "금융기관은 전화로 계좌 비밀번호를 요구할 수 있다.".to_string(),
            answer: Answer::Incorrect,
            explanation: "금융기관은 어떤 경우에도 전화로 비밀번호를 요구하지 않습니다."
                .to_string(),
        },
        Question {
            question_id: 2,
            question: "출처가 불분명한 문자 속 링크는 열지 않는 것이 안전하다.".to_string(),
            answer: Answer::Correct,
            explanation: "스미싱 문자는 악성 앱 설치를 유도하므로 링크를 열지 않아야 합니다."
                .to_string(),
        },
        Question {
            question_id: 3,
            question: "검찰이나 경찰은 수사 중 안전계좌로 이체를 요구하기도 한다.".to_string(),
            answer: Answer::Incorrect,
            explanation: "수사기관은 안전계좌 이체를 요구하지 않습니다. 전형적인 보이스피싱 수법입니다."
                .to_string(),
        },
    ]
}

fn seed_family() -> FamilySummary {
    FamilySummary {
        name: "우리가족".to_string(),
        description: "김신한 님의 가족 그룹입니다.".to_string(),
        approval_request: 1,
        users: vec![
            FamilyMember {
                user_id: 1,
                name: "김신한".to_string(),
                role: Role::Owner,
            },
            FamilyMember {
                user_id: 2,
                name: "김지우".to_string(),
                role: Role::Member,
            },
            FamilyMember {
                user_id: 3,
                name: "박가온".to_string(),
                role: Role::Guardian,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_has_demo_records() {
        let state = AppState::seeded();

        assert!(!state.questions.is_empty());
        assert!(!state.family.users.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_approval_removes_record() {
        let state = AppState::seeded();

        assert!(state.resolve_approval(1).await);

        let remaining = state.approvals.read().await;
        assert!(remaining.iter().all(|a| a.approval_id != 1));
    }

    #[tokio::test]
    async fn test_resolve_approval_unknown_id() {
        let state = AppState::seeded();

        assert!(!state.resolve_approval(999).await);
    }

    #[tokio::test]
    async fn test_resolve_notification_is_one_shot() {
        let state = AppState::seeded();

        assert!(state.resolve_notification(2).await);
        // a second reply to the same id finds nothing
        assert!(!state.resolve_notification(2).await);
    }
}
