pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod types;
pub mod view;

pub use aggregate::summarize;
pub use error::LoadError;
pub use filter::{apply, FilterController, FilterState};
pub use loader::{BaseLocation, Manifest, SessionLoader, MANIFEST_FILE};
pub use types::{
    Check, CountryStats, SessionRecord, SignalTypeCount, Statistics, Status, Summary,
    UNKNOWN_COUNTRY,
};
pub use view::{
    country_rows, last_ingest, recent_sessions, signal_type_rows, CountryRow, SignalTypeRow,
    RECENT_LIMIT,
};
