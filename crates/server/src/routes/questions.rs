//! Quiz API routes.

use axum::{Json, extract::State};
use core_types::Question;

use crate::state::AppState;

/// GET /api/questions - full quiz question list.
pub async fn list_questions(State(state): State<AppState>) -> Json<Vec<Question>> {
    Json(state.questions.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_questions_listing_matches_seed() {
        let state = AppState::seeded();
        let expected = state.questions.len();

        let listed = list_questions(State(state)).await;

        assert_eq!(listed.0.len(), expected);
    }
}
