use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::Store;
use tower::ServiceExt;
use uuid::Uuid;
use web::app;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn id_of(body: &Value, field: &str) -> Uuid {
    body[field].as_str().unwrap().parse().unwrap()
}

async fn create_user(app: &Router, username: &str) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        "/api/users",
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "name": username,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body, "user_id")
}

async fn create_event(app: &Router, organizer_id: Uuid) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        "/api/events",
        Some(json!({
            "title": "Spring Hackathon",
            "description": "48 hours of building",
            "start_date": "2026-04-10T09:00:00",
            "end_date": "2026-04-12T18:00:00",
            "organizer_id": organizer_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body, "event_id")
}

/// Registers a fresh user for the event, builds a team around them, and
/// submits a project for that team.
async fn create_project(app: &Router, event_id: Uuid, leader_name: &str) -> Uuid {
    let leader_id = create_user(app, leader_name).await;

    let (status, _) = send(
        app,
        "POST",
        "/api/registrations",
        Some(json!({ "user_id": leader_id, "event_id": event_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/api/teams",
        Some(json!({
            "name": format!("{leader_name}'s team"),
            "event_id": event_id,
            "leader_id": leader_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let team_id = id_of(&body, "team_id");

    let (status, body) = send(
        app,
        "POST",
        "/api/projects",
        Some(json!({
            "name": format!("{leader_name}'s project"),
            "description": "A weekend build",
            "event_id": event_id,
            "team_id": team_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body, "project_id")
}

async fn add_judge(app: &Router, event_id: Uuid, username: &str) -> Uuid {
    let user_id = create_user(app, username).await;
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/events/{event_id}/judges"),
        Some(json!({ "user_id": user_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body, "judge_id")
}

async fn add_criterion(app: &Router, event_id: Uuid, name: &str, weight: i32) -> Uuid {
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/events/{event_id}/criteria"),
        Some(json!({ "name": name, "weight": weight })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body, "criterion_id")
}

#[tokio::test]
async fn listing_users_returns_everyone_created() {
    let app = app(Store::new());
    create_user(&app, "ada").await;
    create_user(&app, "grace").await;

    let (status, users) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "ada");
    assert_eq!(users[1]["username"], "grace");
}

#[tokio::test]
async fn submitting_a_score_creates_then_overwrites() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    let judge_id = add_judge(&app, event_id, "judge_grace").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let uri = format!("/api/projects/{project_id}/scores");
    let (status, first) = send(
        &app,
        "POST",
        &uri,
        Some(json!({
            "judge_id": judge_id,
            "criterion_id": criterion_id,
            "score": 8,
            "comment": "solid demo",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["score"], 8);

    let (status, second) = send(
        &app,
        "POST",
        &uri,
        Some(json!({
            "judge_id": judge_id,
            "criterion_id": criterion_id,
            "score": 6,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["score"], 6);
    assert_eq!(second["score_id"], first["score_id"]);

    let (status, scores) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scores.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_range_score_is_rejected() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    let judge_id = add_judge(&app, event_id, "judge_grace").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/projects/{project_id}/scores"),
        Some(json!({
            "judge_id": judge_id,
            "criterion_id": criterion_id,
            "score": 11,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

#[tokio::test]
async fn judge_from_another_event_cannot_score() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let other_event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    let outsider_id = add_judge(&app, other_event_id, "outsider").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/projects/{project_id}/scores"),
        Some(json!({
            "judge_id": outsider_id,
            "criterion_id": criterion_id,
            "score": 5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, scores) = send(&app, "GET", &format!("/api/projects/{project_id}/scores"), None).await;
    assert!(scores.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unscored_project_summary_reports_null_average() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, summary) = send(
        &app,
        "GET",
        &format!("/api/projects/{project_id}/score-summary"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["score_count"], 0);
    assert!(summary["average"].is_null());
    assert!(summary["weighted_average"].is_null());
    assert!(summary["criteria"][0]["average"].is_null());
}

#[tokio::test]
async fn summary_rounds_averages_to_one_decimal() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    let judge_x = add_judge(&app, event_id, "judge_x").await;
    let judge_y = add_judge(&app, event_id, "judge_y").await;
    let c1 = add_criterion(&app, event_id, "Innovation", 1).await;
    let c2 = add_criterion(&app, event_id, "Execution", 1).await;

    let uri = format!("/api/projects/{project_id}/scores");
    for (judge_id, criterion_id, score) in [
        (judge_x, c1, 9),
        (judge_y, c1, 7),
        (judge_y, c2, 8),
        (judge_x, c2, 9),
    ] {
        let (status, _) = send(
            &app,
            "POST",
            &uri,
            Some(json!({ "judge_id": judge_id, "criterion_id": criterion_id, "score": score })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, summary) = send(
        &app,
        "GET",
        &format!("/api/projects/{project_id}/score-summary"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["score_count"], 4);
    // (9+7+8+9)/4 = 8.25, half-up to 8.3
    assert_eq!(summary["average"], json!("8.3"));
}

#[tokio::test]
async fn judging_progress_counts_touched_projects() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let scored = create_project(&app, event_id, "ada").await;
    create_project(&app, event_id, "grace").await;
    let judge_id = add_judge(&app, event_id, "judge_x").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/projects/{scored}/scores"),
        Some(json!({ "judge_id": judge_id, "criterion_id": criterion_id, "score": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, progress) = send(
        &app,
        "GET",
        &format!("/api/events/{event_id}/judging-progress"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["total_projects"], 2);
    assert_eq!(progress["judged_projects"], 1);
    assert_eq!(progress["completion_ratio"], json!("0.5"));

    let (status, personal) = send(&app, "GET", &format!("/api/judges/{judge_id}/progress"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(personal["scored_projects"], 1);
}

#[tokio::test]
async fn scoring_an_unknown_project_is_not_found() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let judge_id = add_judge(&app, event_id, "judge_x").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/projects/{}/scores", Uuid::new_v4()),
        Some(json!({ "judge_id": judge_id, "criterion_id": criterion_id, "score": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn scored_criterion_cannot_be_deleted() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let project_id = create_project(&app, event_id, "ada").await;
    let judge_id = add_judge(&app, event_id, "judge_x").await;
    let criterion_id = add_criterion(&app, event_id, "Innovation", 1).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/projects/{project_id}/scores"),
        Some(json!({ "judge_id": judge_id, "criterion_id": criterion_id, "score": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "DELETE", &format!("/api/criteria/{criterion_id}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = app(Store::new());
    let organizer = create_user(&app, "organizer").await;
    let event_id = create_event(&app, organizer).await;
    let user_id = create_user(&app, "ada").await;

    let body = json!({ "user_id": user_id, "event_id": event_id });
    let (status, _) = send(&app, "POST", "/api/registrations", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/api/registrations", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn recruitment_search_only_returns_searchable_matches() {
    let app = app(Store::new());
    let visible = create_user(&app, "visible").await;
    let hidden = create_user(&app, "hidden").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/recruitment-profiles",
        Some(json!({ "user_id": visible, "experience_level": "senior" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/recruitment-profiles",
        Some(json!({ "user_id": hidden, "is_searchable": false })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, results) = send(&app, "GET", "/api/recruitment-profiles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results.as_array().unwrap().len(), 1);

    let (status, results) = send(
        &app,
        "GET",
        "/api/recruitment-profiles?experience_level=senior",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results[0]["user"]["username"], "visible");
}
