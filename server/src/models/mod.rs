pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistInput};
pub use show::{ArtistShow, Show, ShowInput, ShowListing, VenueShow};
pub use venue::{Venue, VenueInput};
