//! Pure shaping of repository rows into what the directory pages show.
//! Nothing here touches the store or reads the system clock.

pub mod areas;
pub mod detail;
pub mod search;
pub mod timing;

pub use areas::{group_by_area, Area, VenueSummary};
pub use detail::{ArtistDetail, VenueDetail};
pub use search::{SearchHit, SearchResults};
pub use timing::{classify, partition, ShowTiming};
