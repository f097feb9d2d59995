pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, AppResult};
pub use models::destination::{DestinationMeta, EnrichedItem};
pub use models::itinerary::{ItineraryItem, TripDay, TripRecord};
pub use models::notes::ParsedNotes;
pub use models::settings::EngineSettings;
pub use models::warning::{Warning, WarningSeverity, WarningType};
pub use services::enrichment_service::{DestinationLookup, NoDestinations};
pub use services::schedule_engine::{analyze_trip, ScheduleEngine, ScheduleReport, TripSnapshot};
pub use services::warning_aggregator::filter_dismissed;
