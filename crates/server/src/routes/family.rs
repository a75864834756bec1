//! Group-overview API route.

use axum::{Json, extract::State};
use core_types::FamilySummary;

use crate::state::AppState;

/// GET /api/family - overview of the session identity's group.
pub async fn get_family(State(state): State<AppState>) -> Json<FamilySummary> {
    Json(state.family.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_family_overview_lists_members() {
        let state = AppState::seeded();

        let family = get_family(State(state)).await;

        assert!(!family.0.users.is_empty());
        assert_eq!(family.0.name, "우리가족");
    }
}
