//! Judge scoring engine
//!
//! This module holds the computational core of the service: criterion
//! catalogs, score sheets with derived totals, competition ranking with
//! tie handling, and winner publication.
//!
//! Everything except the publisher is pure, synchronous logic operating
//! on in-memory snapshots; persistence happens behind the collaborator
//! traits in [`crate::db::repositories`].

pub mod criteria;
pub mod ranking;
pub mod publisher;
pub mod sheet;

pub use criteria::CriterionCatalog;
pub use publisher::WinnerPublisher;
pub use ranking::rank_participants;
pub use sheet::{EventBoard, ScoreSheet, ScoreSheetStore, sanitize_score};
