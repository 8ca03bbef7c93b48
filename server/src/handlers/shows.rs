use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use super::RecordRef;
use crate::forms::show::ShowFormDefaults;
use crate::forms::FormFields;
use crate::models::ShowInput;
use crate::utils::error::AppError;
use crate::utils::notice::Notice;
use crate::utils::response::{outcome, success};
use crate::AppState;

pub async fn list_shows(State(state): State<AppState>) -> Result<Response, AppError> {
    let shows = state.repository.list_shows().await?;
    Ok(success(shows, "Shows retrieved").into_response())
}

pub async fn create_show_form(State(state): State<AppState>) -> Response {
    let defaults = ShowFormDefaults {
        start_time: state.clock.now(),
    };
    success(defaults, "New show form").into_response()
}

pub async fn create_show(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Response, AppError> {
    let input = ShowInput::try_from(fields)?;

    let response = match state.repository.insert_show(&input).await {
        Ok(show) => {
            info!(
                show_id = %show.id,
                artist_id = %show.artist_id,
                venue_id = %show.venue_id,
                "Show listed"
            );
            outcome(
                Some(RecordRef { id: show.id }),
                Notice::info("Show was successfully listed!"),
            )
        }
        Err(err) => {
            warn!(error = %err, "Show insert rolled back");
            outcome::<RecordRef>(None, Notice::error("An error occurred. Show could not be listed."))
        }
    };
    Ok(response)
}
