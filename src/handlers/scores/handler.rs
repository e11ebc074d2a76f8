//! Score sheet handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::ScoringService,
    state::AppState,
    utils::validation::validate_event_name,
};

use super::{
    request::SetScoreRequest,
    response::{
        CriteriaResponse, ParticipantTotal, SavedMarksResponse, ScoreEntryResponse, SheetResponse,
        SheetTotalsResponse,
    },
};

/// Get the criterion catalog for an event
pub async fn get_criteria(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> AppResult<Json<CriteriaResponse>> {
    check_event_name(&event)?;

    let catalog = ScoringService::criteria(state.participation(), &event).await?;

    Ok(Json(CriteriaResponse {
        event_name: event,
        criteria: catalog.labels().to_vec(),
    }))
}

/// Seed draft sheets from previously saved marks
pub async fn load_sheets(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> AppResult<Json<SheetTotalsResponse>> {
    check_event_name(&event)?;

    let totals = ScoringService::load_sheets(state.participation(), state.sheets(), &event).await?;

    Ok(Json(to_totals_response(event, totals)))
}

/// List current draft totals for an event
pub async fn list_totals(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> AppResult<Json<SheetTotalsResponse>> {
    check_event_name(&event)?;

    let totals =
        ScoringService::sheet_totals(state.participation(), state.sheets(), &event).await?;

    Ok(Json(to_totals_response(event, totals)))
}

/// Get one participant's draft sheet
pub async fn get_sheet(
    State(state): State<AppState>,
    Path((event, participant_id)): Path<(String, Uuid)>,
) -> AppResult<Json<SheetResponse>> {
    check_event_name(&event)?;

    let sheet =
        ScoringService::sheet(state.participation(), state.sheets(), &event, participant_id)
            .await?;

    Ok(Json(SheetResponse {
        participant_id,
        event_name: event,
        scores: sheet.scores().to_vec(),
        total: sheet.total(),
    }))
}

/// Enter one criterion score
pub async fn set_score(
    State(state): State<AppState>,
    Path((event, participant_id)): Path<(String, Uuid)>,
    Json(payload): Json<SetScoreRequest>,
) -> AppResult<Json<ScoreEntryResponse>> {
    check_event_name(&event)?;
    payload.validate()?;

    let total = ScoringService::enter_score(
        state.participation(),
        state.sheets(),
        &event,
        participant_id,
        payload.criterion_index,
        payload.value.as_deref(),
    )
    .await?;

    Ok(Json(ScoreEntryResponse {
        participant_id,
        criterion_index: payload.criterion_index,
        total,
    }))
}

/// Persist one participant's draft sheet
pub async fn save_marks(
    State(state): State<AppState>,
    Path((event, participant_id)): Path<(String, Uuid)>,
) -> AppResult<Json<SavedMarksResponse>> {
    check_event_name(&event)?;

    let marks =
        ScoringService::save_marks(state.marks(), state.sheets(), &event, participant_id).await?;

    Ok(Json(SavedMarksResponse {
        participant_id: marks.participant_id,
        event_name: marks.event_name,
        total: marks.total,
        saved_at: marks.saved_at,
    }))
}

fn check_event_name(event: &str) -> AppResult<()> {
    validate_event_name(event).map_err(|msg| AppError::Validation(msg.to_string()))
}

fn to_totals_response(event_name: String, totals: Vec<(crate::models::Participant, f64)>) -> SheetTotalsResponse {
    SheetTotalsResponse {
        event_name,
        totals: totals
            .into_iter()
            .map(|(participant, total)| ParticipantTotal {
                participant_id: participant.id,
                name: participant.name,
                total,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::testing::{TestHarness, participant};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn put_score(event: &str, participant_id: uuid::Uuid, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/events/{}/scores/{}", event, participant_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_criteria_roundtrip() {
        let harness = TestHarness::new("Hackathon", &["Creativity", "Execution"], vec![]);
        let app = harness.router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/events/Hackathon/criteria")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["criteria"], serde_json::json!(["Creativity", "Execution"]));
    }

    #[tokio::test]
    async fn test_unknown_event_is_404() {
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![]);
        let app = harness.router();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/events/Debate/criteria")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_score_entry_recomputes_total() {
        let alice = participant("alice", "Hackathon");
        let alice_id = alice.id;
        let harness = TestHarness::new("Hackathon", &["Creativity", "Execution"], vec![alice]);

        let response = harness
            .router()
            .oneshot(put_score(
                "Hackathon",
                alice_id,
                serde_json::json!({"criterion_index": 0, "value": "7.5"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["total"], 7.5);

        // Malformed input degrades to zero and the total stays consistent
        let response = harness
            .router()
            .oneshot(put_score(
                "Hackathon",
                alice_id,
                serde_json::json!({"criterion_index": 1, "value": "abc"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["total"], 7.5);

        let response = harness
            .router()
            .oneshot(
                Request::builder()
                    .uri(format!("/events/Hackathon/scores/{}", alice_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["scores"], serde_json::json!([7.5, 0.0]));
        assert_eq!(json["total"], 7.5);
    }

    #[tokio::test]
    async fn test_out_of_range_criterion_is_400() {
        let alice = participant("alice", "Hackathon");
        let alice_id = alice.id;
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![alice]);

        let response = harness
            .router()
            .oneshot(put_score(
                "Hackathon",
                alice_id,
                serde_json::json!({"criterion_index": 5, "value": "9"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_save_marks_reaches_the_sink() {
        let alice = participant("alice", "Hackathon");
        let alice_id = alice.id;
        let harness = TestHarness::new("Hackathon", &["Creativity", "Execution"], vec![alice]);

        harness
            .router()
            .oneshot(put_score(
                "Hackathon",
                alice_id,
                serde_json::json!({"criterion_index": 1, "value": "8"}),
            ))
            .await
            .unwrap();

        let response = harness
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/events/Hackathon/scores/{}/save", alice_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let saved = harness.marks.saved.lock().await;
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].scores, vec![0.0, 8.0]);
        assert_eq!(saved[0].total, 8.0);
    }
}
