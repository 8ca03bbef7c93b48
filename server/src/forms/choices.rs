use serde::Serialize;

pub const STATES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: [&str; 19] = [
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

/// Option lists offered by the venue and artist forms.
#[derive(Debug, Clone, Serialize)]
pub struct FormChoices {
    pub states: &'static [&'static str],
    pub genres: &'static [&'static str],
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            states: &STATES,
            genres: &GENRES,
        }
    }
}

pub fn is_state(code: &str) -> bool {
    STATES.contains(&code)
}

pub fn is_genre(genre: &str) -> bool {
    GENRES.contains(&genre)
}
