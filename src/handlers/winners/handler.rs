//! Winner handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::{AppError, AppResult},
    services::ResultsService,
    state::AppState,
    utils::validation::validate_event_name,
};

use super::response::WinnersResponse;

/// Submit final results: rank the event and publish the winner batch
pub async fn submit_results(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> AppResult<(StatusCode, Json<WinnersResponse>)> {
    check_event_name(&event)?;

    let winners = ResultsService::finalize(
        state.participation(),
        state.winners(),
        state.sheets(),
        &event,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(WinnersResponse {
            event_name: event,
            winners,
        }),
    ))
}

/// List the published winners of an event
pub async fn list_winners(
    State(state): State<AppState>,
    Path(event): Path<String>,
) -> AppResult<Json<WinnersResponse>> {
    check_event_name(&event)?;

    let winners = ResultsService::published_winners(state.winners(), &event).await?;

    Ok(Json(WinnersResponse {
        event_name: event,
        winners,
    }))
}

fn check_event_name(event: &str) -> AppResult<()> {
    validate_event_name(event).map_err(|msg| AppError::Validation(msg.to_string()))
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

    fn submit(event: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/events/{}/results", event))
            .body(Body::empty())
            .unwrap()
    }

    async fn enter_score(harness: &TestHarness, pid: uuid::Uuid, index: usize, value: &str) {
        let response = harness
            .router()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/events/Hackathon/scores/{}", pid))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::json!({"criterion_index": index, "value": value}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_publishes_and_reads_back() {
        let alice = participant("alice", "Hackathon");
        let bob = participant("bob", "Hackathon");
        let (alice_id, bob_id) = (alice.id, bob.id);
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![alice, bob]);

        enter_score(&harness, alice_id, 0, "90").await;
        enter_score(&harness, bob_id, 0, "80").await;

        let response = harness.router().oneshot(submit("Hackathon")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["winners"][0]["name"], "alice");
        assert_eq!(json["winners"][0]["rank"], 1);
        assert_eq!(json["winners"][1]["name"], "bob");
        assert_eq!(json["winners"][1]["rank"], 2);

        let response = harness
            .router()
            .oneshot(
                Request::builder()
                    .uri("/events/Hackathon/winners")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["winners"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_second_submission_conflicts() {
        let alice = participant("alice", "Hackathon");
        let alice_id = alice.id;
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![alice]);

        enter_score(&harness, alice_id, 0, "50").await;

        let response = harness.router().oneshot(submit("Hackathon")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = harness.router().oneshot(submit("Hackathon")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ALREADY_EXISTS");

        // The first publication is untouched
        let published = harness.winners.published.lock().await;
        assert_eq!(published["Hackathon"].len(), 1);
    }

    #[tokio::test]
    async fn test_submit_unknown_event_is_404() {
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![]);

        let response = harness.router().oneshot(submit("Debate")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_winners_empty_before_publication() {
        let harness = TestHarness::new("Hackathon", &["Overall"], vec![]);

        let response = harness
            .router()
            .oneshot(
                Request::builder()
                    .uri("/events/Hackathon/winners")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["winners"], serde_json::json!([]));
    }
}
