//! Gateway call for the group overview.

use core_types::FamilySummary;

use super::{Result, get_json};

/// Overview of the session identity's group.
pub async fn get_family() -> Result<FamilySummary> {
    get_json("/api/family").await
}
