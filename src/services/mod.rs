pub mod closure_checker;
pub mod conflict_detector;
pub mod density_heuristic;
pub mod enrichment_service;
pub mod itinerary_assembler;
pub mod schedule_engine;
pub mod schedule_utils;
pub mod settings_service;
pub mod warning_aggregator;
