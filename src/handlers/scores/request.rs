//! Score sheet request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_RAW_SCORE_LENGTH;

/// Enter one criterion score for a participant.
///
/// `value` carries the judge's input exactly as typed. It is sanitized
/// rather than validated: absent, malformed, or negative input stores a
/// zero so entry never fails mid-typing. Only the length is bounded.
#[derive(Debug, Deserialize, Validate)]
pub struct SetScoreRequest {
    /// Criterion position on the event's sheet
    pub criterion_index: usize,

    /// Raw score value as typed by the judge
    #[validate(length(max = MAX_RAW_SCORE_LENGTH))]
    pub value: Option<String>,
}
