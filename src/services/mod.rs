//! Business logic services

pub mod results_service;
pub mod scoring_service;

pub use results_service::ResultsService;
pub use scoring_service::ScoringService;
