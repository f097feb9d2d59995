pub mod destination;
pub mod itinerary;
pub mod notes;
pub mod settings;
pub mod warning;
