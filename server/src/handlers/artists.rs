use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use super::{RecordRef, SearchForm};
use crate::directory::{ArtistDetail, SearchResults};
use crate::forms::{FormFields, FormPage};
use crate::models::ArtistInput;
use crate::utils::error::AppError;
use crate::utils::extract::EntityId;
use crate::utils::notice::{redirect_with_notice, Flash, Notice};
use crate::utils::response::{outcome, page, success};
use crate::AppState;

pub async fn list_artists(State(state): State<AppState>) -> Result<Response, AppError> {
    let artists = state.repository.list_artists().await?;
    Ok(success(artists, "Artists retrieved").into_response())
}

pub async fn search_artists(
    State(state): State<AppState>,
    body: Option<Form<SearchForm>>,
) -> Result<Response, AppError> {
    let form = SearchForm::from_body(body);
    let artists = state.repository.search_artists(&form.search_term).await?;
    let results = SearchResults::new(form.search_term, artists);

    Ok(success(results, "Search completed").into_response())
}

pub async fn show_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Response, AppError> {
    let artist = state
        .repository
        .find_artist(id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;
    let shows = state.repository.shows_by_artist(id).await?;
    let detail = ArtistDetail::new(artist, shows, state.clock.now());

    Ok(page(detail, "Artist retrieved", flash))
}

pub async fn create_artist_form() -> Response {
    success(FormPage::<ArtistInput>::blank(), "New artist form").into_response()
}

pub async fn create_artist(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Response, AppError> {
    let input = ArtistInput::try_from(fields)?;

    let response = match state.repository.insert_artist(&input).await {
        Ok(artist) => {
            info!(artist_id = %artist.id, name = %artist.name, "Artist listed");
            outcome(
                Some(RecordRef { id: artist.id }),
                Notice::info(format!("Artist {} was successfully listed!", artist.name)),
            )
        }
        Err(err) => {
            warn!(error = %err, name = %input.name, "Artist insert rolled back");
            outcome::<RecordRef>(
                None,
                Notice::error(format!(
                    "An error occurred. Artist {} could not be listed.",
                    input.name
                )),
            )
        }
    };
    Ok(response)
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, AppError> {
    let artist = state
        .repository
        .find_artist(id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;

    Ok(success(FormPage::filled(id, ArtistInput::from(&artist)), "Edit artist form").into_response())
}

pub async fn update_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    fields: FormFields,
) -> Result<Response, AppError> {
    let existing = state
        .repository
        .find_artist(id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", id))?;
    let input = ArtistInput::try_from(fields)?;

    let notice = match state.repository.update_artist(id, &input).await {
        Ok(Some(artist)) => {
            info!(artist_id = %id, "Artist updated");
            Notice::info(format!("Artist {} was successfully updated", artist.name))
        }
        Ok(None) => return Err(AppError::not_found("Artist", id)),
        Err(err) => {
            warn!(error = %err, artist_id = %id, "Artist update rolled back");
            Notice::error(format!(
                "An error occurred. Artist {} could not be updated.",
                existing.name
            ))
        }
    };

    Ok(redirect_with_notice(&format!("/artists/{}", id), notice))
}
