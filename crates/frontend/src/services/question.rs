//! Gateway calls for the fraud-education quiz.

use core_types::Question;

use super::{Result, get_json};

/// Full quiz question list.
pub async fn get_questions() -> Result<Vec<Question>> {
    get_json("/api/questions").await
}
