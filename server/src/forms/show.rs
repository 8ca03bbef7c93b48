use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{FormError, FormFields};
use crate::models::ShowInput;

impl TryFrom<FormFields> for ShowInput {
    type Error = FormError;

    fn try_from(form: FormFields) -> Result<Self, Self::Error> {
        Ok(ShowInput {
            artist_id: form.uuid("artist_id")?,
            venue_id: form.uuid("venue_id")?,
            start_time: form.timestamp("start_time")?,
        })
    }
}

/// Defaults offered by the new show form.
#[derive(Debug, Clone, Serialize)]
pub struct ShowFormDefaults {
    pub start_time: DateTime<Utc>,
}
