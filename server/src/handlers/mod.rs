use axum::extract::Form;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;
use crate::utils::notice::Flash;
use crate::utils::response::{page, success};

pub mod artists;
pub mod shows;
pub mod venues;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "booking-directory",
    };

    success(payload, "Health check successful").into_response()
}

#[derive(Serialize)]
struct HomePayload {
    sections: [&'static str; 3],
}

pub async fn home(flash: Flash) -> Response {
    let payload = HomePayload {
        sections: ["/venues", "/artists", "/shows"],
    };
    page(payload, "Welcome", flash)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}

/// Reference to the record a write created or removed.
#[derive(Debug, Serialize)]
pub struct RecordRef {
    pub id: uuid::Uuid,
}

/// Body of the venue and artist search forms. A request without a readable
/// form body searches for the empty term, which matches every record.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

impl SearchForm {
    pub fn from_body(body: Option<Form<SearchForm>>) -> Self {
        body.map(|Form(form)| form).unwrap_or_default()
    }
}
