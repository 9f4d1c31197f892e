use tracing::error;

use backend_domain::UnmappedEvent;

use crate::dtos::UnmappedEventListQuery;
use crate::{AppError, AppState};

pub async fn list_unmapped_events(
    state: &AppState,
    query: UnmappedEventListQuery,
) -> Result<Vec<UnmappedEvent>, AppError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let rows = state.unmapped_repo.list(limit).await.map_err(|err| {
        error!("failed to fetch unmapped events: {}", err);
        AppError::Internal(err)
    })?;
    Ok(rows)
}
