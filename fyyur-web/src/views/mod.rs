//! View mapping
//!
//! Pure transforms from persisted records into the display structures the
//! pages render. Nothing here touches the database or the clock; callers
//! pass the reference time in.

pub mod artists;
pub mod search;
pub mod shows;
pub mod venues;

pub use artists::ArtistDetail;
pub use search::{search_results, SearchHit, SearchResults};
pub use shows::{partition_shows, ShowCard, ShowSchedule};
pub use venues::{group_by_area, Area, VenueDetail};
