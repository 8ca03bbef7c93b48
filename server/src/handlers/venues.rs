use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use super::{RecordRef, SearchForm};
use crate::directory::{group_by_area, SearchResults, VenueDetail};
use crate::forms::{FormFields, FormPage};
use crate::models::VenueInput;
use crate::utils::error::AppError;
use crate::utils::extract::EntityId;
use crate::utils::notice::{redirect_with_notice, Flash, Notice};
use crate::utils::response::{outcome, page, success};
use crate::AppState;

pub async fn list_venues(State(state): State<AppState>) -> Result<Response, AppError> {
    let venues = state.repository.list_venues().await?;
    let shows = state.repository.list_shows().await?;
    let areas = group_by_area(venues, &shows, state.clock.now());

    Ok(success(areas, "Venues retrieved").into_response())
}

pub async fn search_venues(
    State(state): State<AppState>,
    body: Option<Form<SearchForm>>,
) -> Result<Response, AppError> {
    let form = SearchForm::from_body(body);
    let venues = state.repository.search_venues(&form.search_term).await?;
    let results = SearchResults::new(form.search_term, venues);

    Ok(success(results, "Search completed").into_response())
}

pub async fn show_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Response, AppError> {
    let venue = state
        .repository
        .find_venue(id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))?;
    let shows = state.repository.shows_at_venue(id).await?;
    let detail = VenueDetail::new(venue, shows, state.clock.now());

    Ok(page(detail, "Venue retrieved", flash))
}

pub async fn create_venue_form() -> Response {
    success(FormPage::<VenueInput>::blank(), "New venue form").into_response()
}

pub async fn create_venue(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Response, AppError> {
    let input = VenueInput::try_from(fields)?;

    let response = match state.repository.insert_venue(&input).await {
        Ok(venue) => {
            info!(venue_id = %venue.id, name = %venue.name, "Venue listed");
            outcome(
                Some(RecordRef { id: venue.id }),
                Notice::info(format!("Venue {} was successfully listed!", venue.name)),
            )
        }
        Err(err) => {
            warn!(error = %err, name = %input.name, "Venue insert rolled back");
            outcome::<RecordRef>(
                None,
                Notice::error(format!(
                    "An error occurred. Venue {} could not be listed.",
                    input.name
                )),
            )
        }
    };
    Ok(response)
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let venue = state
        .repository
        .find_venue(id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))?;

    Ok(success(FormPage::filled(id, VenueInput::from(&venue)), "Edit venue form").into_response())
}

pub async fn update_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    fields: FormFields,
) -> Result<Response, AppError> {
    let existing = state
        .repository
        .find_venue(id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", id))?;
    let input = VenueInput::try_from(fields)?;

    let notice = match state.repository.update_venue(id, &input).await {
        Ok(Some(venue)) => {
            info!(venue_id = %id, "Venue updated");
            Notice::info(format!("Venue {} was successfully updated", venue.name))
        }
        Ok(None) => return Err(AppError::not_found("Venue", id)),
        Err(err) => {
            warn!(error = %err, venue_id = %id, "Venue update rolled back");
            Notice::error(format!(
                "An error occurred. Venue {} could not be updated.",
                existing.name
            ))
        }
    };

    Ok(redirect_with_notice(&format!("/venues/{}", id), notice))
}

/// Deleting an id that does not exist is reported as not found, the same as
/// editing one. Shows booked at the venue go with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let response = match state.repository.delete_venue(id).await {
        Ok(Some(venue)) => {
            info!(venue_id = %id, name = %venue.name, "Venue deleted");
            outcome(
                Some(RecordRef { id }),
                Notice::info(format!("Venue {} was deleted successfully", venue.name)),
            )
        }
        Ok(None) => return Err(AppError::not_found("Venue", id)),
        Err(err) => {
            warn!(error = %err, venue_id = %id, "Venue delete rolled back");
            outcome::<RecordRef>(None, Notice::error("Venue could not be deleted"))
        }
    };
    Ok(response)
}
