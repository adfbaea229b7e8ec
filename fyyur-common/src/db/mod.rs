//! Database layer shared by Fyyur binaries

pub mod init;
pub mod models;

pub use init::{init_database, initialize_schema};
pub use models::{Artist, ArtistData, ArtistSummary, ShowData, ShowListing, Venue, VenueData};
