//! Score sheets and the in-memory sheet store

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ParticipantMarks;

/// Parse a raw score value as typed by a judge.
///
/// Anything that is not a finite, non-negative number degrades to 0.0:
/// partially-typed input must never block entry, so there is no error
/// path here at all.
pub fn sanitize_score(raw: Option<&str>) -> f64 {
    match raw.and_then(|s| s.trim().parse::<f64>().ok()) {
        Some(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// Per-criterion scores and derived total for one participant.
///
/// Scores live in a fixed-size slot array indexed by criterion position;
/// the cached total sits outside the array, so bookkeeping can never leak
/// into the sum.
#[derive(Debug, Clone)]
pub struct ScoreSheet {
    participant_id: Uuid,
    scores: Vec<f64>,
    total: f64,
}

impl ScoreSheet {
    /// Empty sheet with one zeroed slot per criterion
    pub fn new(participant_id: Uuid, criteria_len: usize) -> Self {
        Self {
            participant_id,
            scores: vec![0.0; criteria_len],
            total: 0.0,
        }
    }

    /// Rebuild a sheet from persisted marks.
    ///
    /// The stored breakdown is resized to the current catalog length and
    /// the total is recomputed rather than trusted.
    pub fn from_marks(marks: &ParticipantMarks, criteria_len: usize) -> Self {
        let mut scores: Vec<f64> = marks
            .scores
            .iter()
            .map(|&value| if value.is_finite() && value >= 0.0 { value } else { 0.0 })
            .collect();
        scores.resize(criteria_len, 0.0);

        let mut sheet = Self {
            participant_id: marks.participant_id,
            scores,
            total: 0.0,
        };
        sheet.recompute_total();
        sheet
    }

    pub fn participant_id(&self) -> Uuid {
        self.participant_id
    }

    /// Store a sanitized score at `criterion_index` and return the
    /// recomputed total.
    ///
    /// The new total is visible to any read that follows; there is no
    /// partially-updated state. Index validity is the caller's concern
    /// (checked against the catalog at the REST boundary); an
    /// out-of-range index leaves the sheet untouched.
    pub fn set_score(&mut self, criterion_index: usize, raw: Option<&str>) -> f64 {
        if criterion_index < self.scores.len() {
            self.scores[criterion_index] = sanitize_score(raw);
            self.recompute_total();
        }
        self.total
    }

    pub fn score(&self, criterion_index: usize) -> f64 {
        self.scores.get(criterion_index).copied().unwrap_or(0.0)
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    fn recompute_total(&mut self) {
        self.total = self.scores.iter().sum();
    }
}

/// All draft score sheets for one event, keyed by participant.
///
/// Sheets are created lazily on the first score entry for a participant.
#[derive(Debug, Clone)]
pub struct EventBoard {
    event_name: String,
    criteria_len: usize,
    sheets: HashMap<Uuid, ScoreSheet>,
}

impl EventBoard {
    pub fn new(event_name: impl Into<String>, criteria_len: usize) -> Self {
        Self {
            event_name: event_name.into(),
            criteria_len,
            sheets: HashMap::new(),
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn criteria_len(&self) -> usize {
        self.criteria_len
    }

    /// Enter one criterion score, creating the sheet on first entry.
    /// Returns the participant's recomputed total.
    pub fn set_score(&mut self, participant_id: Uuid, criterion_index: usize, raw: Option<&str>) -> f64 {
        let criteria_len = self.criteria_len;
        self.sheets
            .entry(participant_id)
            .or_insert_with(|| ScoreSheet::new(participant_id, criteria_len))
            .set_score(criterion_index, raw)
    }

    /// Current total for a participant; 0.0 when nothing has been entered
    pub fn total(&self, participant_id: Uuid) -> f64 {
        self.sheets
            .get(&participant_id)
            .map(ScoreSheet::total)
            .unwrap_or(0.0)
    }

    pub fn sheet(&self, participant_id: Uuid) -> Option<&ScoreSheet> {
        self.sheets.get(&participant_id)
    }

    /// Totals snapshot for ranking
    pub fn totals(&self) -> HashMap<Uuid, f64> {
        self.sheets
            .iter()
            .map(|(id, sheet)| (*id, sheet.total()))
            .collect()
    }

    /// Overwrite draft sheets from persisted marks
    pub fn seed(&mut self, marks: &[ParticipantMarks]) {
        for entry in marks {
            self.sheets.insert(
                entry.participant_id,
                ScoreSheet::from_marks(entry, self.criteria_len),
            );
        }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Shared in-memory store of draft sheets, keyed by event name.
///
/// Held in application state and passed explicitly into the services;
/// nothing in the engine reaches for ambient state. Lock sections are
/// short and never held across awaits.
#[derive(Debug, Default)]
pub struct ScoreSheetStore {
    boards: RwLock<HashMap<String, EventBoard>>,
}

impl ScoreSheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter one criterion score, creating the event board and the sheet
    /// lazily. Returns the participant's recomputed total.
    pub async fn set_score(
        &self,
        event_name: &str,
        criteria_len: usize,
        participant_id: Uuid,
        criterion_index: usize,
        raw: Option<&str>,
    ) -> f64 {
        let mut boards = self.boards.write().await;
        boards
            .entry(event_name.to_string())
            .or_insert_with(|| EventBoard::new(event_name, criteria_len))
            .set_score(participant_id, criterion_index, raw)
    }

    /// Replace an event's draft sheets with persisted marks
    pub async fn seed(&self, event_name: &str, criteria_len: usize, marks: &[ParticipantMarks]) {
        let mut boards = self.boards.write().await;
        let board = boards
            .entry(event_name.to_string())
            .or_insert_with(|| EventBoard::new(event_name, criteria_len));
        board.seed(marks);
    }

    pub async fn total(&self, event_name: &str, participant_id: Uuid) -> f64 {
        let boards = self.boards.read().await;
        boards
            .get(event_name)
            .map(|board| board.total(participant_id))
            .unwrap_or(0.0)
    }

    pub async fn sheet(&self, event_name: &str, participant_id: Uuid) -> Option<ScoreSheet> {
        let boards = self.boards.read().await;
        boards
            .get(event_name)
            .and_then(|board| board.sheet(participant_id).cloned())
    }

    /// Totals snapshot for one event; empty when nothing has been entered
    pub async fn totals(&self, event_name: &str) -> HashMap<Uuid, f64> {
        let boards = self.boards.read().await;
        boards
            .get(event_name)
            .map(EventBoard::totals)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const CRITERIA: usize = 3;

    #[test]
    fn test_sanitize_rejects_garbage() {
        assert_eq!(sanitize_score(Some("-5")), 0.0);
        assert_eq!(sanitize_score(Some("abc")), 0.0);
        assert_eq!(sanitize_score(Some("")), 0.0);
        assert_eq!(sanitize_score(None), 0.0);
        assert_eq!(sanitize_score(Some("NaN")), 0.0);
        assert_eq!(sanitize_score(Some("inf")), 0.0);
    }

    #[test]
    fn test_sanitize_accepts_numbers() {
        assert_eq!(sanitize_score(Some("7.5")), 7.5);
        assert_eq!(sanitize_score(Some(" 10 ")), 10.0);
        assert_eq!(sanitize_score(Some("0")), 0.0);
    }

    #[test]
    fn test_total_defaults_to_zero() {
        let sheet = ScoreSheet::new(Uuid::new_v4(), CRITERIA);
        assert_eq!(sheet.total(), 0.0);
    }

    #[test]
    fn test_total_recomputed_on_every_mutation() {
        let mut sheet = ScoreSheet::new(Uuid::new_v4(), CRITERIA);
        assert_eq!(sheet.set_score(0, Some("8")), 8.0);
        assert_eq!(sheet.set_score(1, Some("6.5")), 14.5);
        assert_eq!(sheet.set_score(2, Some("oops")), 14.5);
        assert_eq!(sheet.total(), 14.5);
    }

    #[test]
    fn test_total_tracks_latest_value_per_criterion() {
        // Re-entering a criterion replaces the slot; totals never
        // accumulate across old values.
        let mut sheet = ScoreSheet::new(Uuid::new_v4(), CRITERIA);
        sheet.set_score(0, Some("9"));
        sheet.set_score(0, Some("4"));
        sheet.set_score(1, Some("-3"));
        sheet.set_score(1, Some("5"));
        assert_eq!(sheet.total(), 9.0);
    }

    #[test]
    fn test_out_of_range_index_leaves_sheet_untouched() {
        let mut sheet = ScoreSheet::new(Uuid::new_v4(), CRITERIA);
        sheet.set_score(0, Some("5"));
        assert_eq!(sheet.set_score(CRITERIA, Some("99")), 5.0);
        assert_eq!(sheet.total(), 5.0);
    }

    #[test]
    fn test_from_marks_recomputes_total() {
        let marks = ParticipantMarks {
            participant_id: Uuid::new_v4(),
            event_name: "Hackathon".to_string(),
            scores: vec![5.0, -2.0, 7.0],
            total: 999.0, // stale stored total is ignored
            saved_at: Utc::now(),
        };
        let sheet = ScoreSheet::from_marks(&marks, CRITERIA);
        assert_eq!(sheet.scores(), &[5.0, 0.0, 7.0]);
        assert_eq!(sheet.total(), 12.0);
    }

    #[test]
    fn test_board_creates_sheets_lazily() {
        let mut board = EventBoard::new("Hackathon", CRITERIA);
        let participant = Uuid::new_v4();
        assert!(board.is_empty());
        assert_eq!(board.total(participant), 0.0);

        board.set_score(participant, 0, Some("7"));
        assert_eq!(board.len(), 1);
        assert_eq!(board.total(participant), 7.0);
    }

    #[test]
    fn test_store_set_and_read() {
        tokio_test::block_on(async {
            let store = ScoreSheetStore::new();
            let participant = Uuid::new_v4();

            let total = store
                .set_score("Hackathon", CRITERIA, participant, 1, Some("6"))
                .await;
            assert_eq!(total, 6.0);
            assert_eq!(store.total("Hackathon", participant).await, 6.0);

            // Other events are untouched
            assert_eq!(store.total("Debate", participant).await, 0.0);
        });
    }

    #[test]
    fn test_store_seed_overwrites_drafts() {
        tokio_test::block_on(async {
            let store = ScoreSheetStore::new();
            let participant = Uuid::new_v4();
            store
                .set_score("Hackathon", CRITERIA, participant, 0, Some("3"))
                .await;

            let marks = vec![ParticipantMarks {
                participant_id: participant,
                event_name: "Hackathon".to_string(),
                scores: vec![8.0, 9.0, 7.0],
                total: 24.0,
                saved_at: Utc::now(),
            }];
            store.seed("Hackathon", CRITERIA, &marks).await;

            assert_eq!(store.total("Hackathon", participant).await, 24.0);
            let totals = store.totals("Hackathon").await;
            assert_eq!(totals.len(), 1);
        });
    }
}
