use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use nestegg_server::api::app_router;
use nestegg_server::build_state;
use nestegg_server::config::Config;

async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        secret_key: b"an-integration-test-signing-key!".to_vec(),
        token_ttl_minutes: 45,
        cors_origins: vec!["http://localhost:5173".to_string()],
        price_refresh_hours: 24,
        price_refresh_delay_secs: 60,
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Signs up and logs in a fresh user, returning a bearer token.
async fn signup_and_login(app: &axum::Router, email: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({
            "name": "Test Investor",
            "email": email,
            "password": "hunter2hunter2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": "hunter2hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "bearer");
    body["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_open_and_everything_else_is_guarded() {
    let (app, _tmp) = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    for uri in [
        "/api/v1/goals",
        "/api/v1/investments",
        "/api/v1/transactions",
        "/api/v1/dashboard/summary",
        "/api/v1/recommendations",
    ] {
        let (status, _) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} should be guarded");
    }
}

#[tokio::test]
async fn signup_login_and_me_round_trip() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "alice@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["riskProfile"], "moderate");
    assert_eq!(body["profileCompleted"], false);

    // Duplicate signup is rejected with a friendly message
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({
            "name": "Alice Again",
            "email": "alice@example.com",
            "password": "hunter2hunter2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already registered"));

    // Wrong password is a 401
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "alice@example.com", "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn short_password_is_rejected_at_signup() {
    let (app, _tmp) = build_test_router().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/signup",
        None,
        Some(json!({
            "name": "Bob",
            "email": "bob@example.com",
            "password": "short"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn buy_then_sell_reconciles_the_position() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "carol@example.com").await;

    // Buy 10 @ 100 with a 5 fee
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({
            "symbol": "AAPL",
            "side": "buy",
            "quantity": 10,
            "price": 100,
            "fees": 5,
            "assetType": "stock"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/api/v1/investments", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let positions = body.as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["symbol"], "AAPL");
    assert_eq!(positions[0]["units"].as_f64().unwrap(), 10.0);
    assert_eq!(positions[0]["costBasis"].as_f64().unwrap(), 1005.0);
    assert_eq!(positions[0]["avgBuyPrice"].as_f64().unwrap(), 100.5);

    // Sell 4 @ 120: proportional basis reduction, avg untouched
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({
            "symbol": "AAPL",
            "side": "sell",
            "quantity": 4,
            "price": 120
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/api/v1/investments", Some(&token), None).await;
    let positions = body.as_array().unwrap();
    assert_eq!(positions[0]["units"].as_f64().unwrap(), 6.0);
    assert_eq!(positions[0]["costBasis"].as_f64().unwrap(), 603.0);
    assert_eq!(positions[0]["avgBuyPrice"].as_f64().unwrap(), 100.5);
    assert_eq!(positions[0]["currentValue"].as_f64().unwrap(), 720.0);

    // Transaction history has both events, newest first
    let (_, body) = send(&app, Method::GET, "/api/v1/transactions", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/transactions/summary",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["totalTransactions"], 2);
    assert_eq!(body["totalBought"].as_f64().unwrap(), 1000.0);
    assert_eq!(body["totalSold"].as_f64().unwrap(), 480.0);
    assert_eq!(body["totalFees"].as_f64().unwrap(), 5.0);
}

#[tokio::test]
async fn oversell_is_rejected_and_nothing_changes() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "dave@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({
            "symbol": "VTI",
            "side": "sell",
            "quantity": 1,
            "price": 200
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Insufficient units"));

    // The rejected event must not appear in the history
    let (_, body) = send(&app, Method::GET, "/api/v1/transactions", Some(&token), None).await;
    assert!(body.as_array().unwrap().is_empty());

    // Partial state: buy then oversell
    send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({ "symbol": "VTI", "side": "buy", "quantity": 5, "price": 200 })),
    )
    .await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({ "symbol": "VTI", "side": "sell", "quantity": 6, "price": 210 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, Method::GET, "/api/v1/investments", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap()[0]["units"].as_f64().unwrap(), 5.0);
}

#[tokio::test]
async fn selling_everything_deletes_the_position() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "erin@example.com").await;

    send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({ "symbol": "MSFT", "side": "buy", "quantity": 3, "price": 400 })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({ "symbol": "MSFT", "side": "sell", "quantity": 3, "price": 410 })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/api/v1/investments", Some(&token), None).await;
    assert!(body.as_array().unwrap().is_empty());

    // Both events survive in the append-only history
    let (_, body) = send(&app, Method::GET, "/api/v1/transactions", Some(&token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn simulation_round_trip_matches_the_reference_scenario() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "frank@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/simulations",
        Some(&token),
        Some(json!({
            "scenario_name": "Retire at 55",
            "initial_amount": 10000.0,
            "monthly_contribution": 500.0,
            "time_horizon_years": 10,
            "expected_return_rate": 7.0,
            "inflation_rate": 3.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let summary = &body["results"]["summary"];
    assert_eq!(summary["total_invested"].as_f64().unwrap(), 70000.0);
    assert!(summary["future_value_nominal"].as_f64().unwrap() > 70000.0);
    assert!(
        summary["future_value_real"].as_f64().unwrap()
            < summary["future_value_nominal"].as_f64().unwrap()
    );
    // month 0 plus one snapshot per year
    assert_eq!(body["results"]["chart_data"].as_array().unwrap().len(), 11);

    let (_, list) = send(&app, Method::GET, "/api/v1/simulations", Some(&token), None).await;
    let simulations = list.as_array().unwrap();
    assert_eq!(simulations.len(), 1);
    let sim_id = simulations[0]["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/simulations/{sim_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Zero-year horizon is rejected at the boundary
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/simulations",
        Some(&token),
        Some(json!({
            "scenario_name": "Degenerate",
            "initial_amount": 1000.0,
            "monthly_contribution": 0.0,
            "time_horizon_years": 0,
            "expected_return_rate": 5.0,
            "inflation_rate": 2.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn risk_assessment_updates_the_user_profile() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "grace@example.com").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/risk/questions", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 5, "seeded questionnaire");
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 3);

    // Max score on every question: 5 x 6 = 30 -> aggressive
    let answers: Vec<Value> = (1..=5)
        .map(|i| json!({ "questionId": i, "score": 6 }))
        .collect();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/risk/assessment",
        Some(&token),
        Some(json!({ "answers": answers, "kycStatus": "verified" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskScore"], 30);
    assert_eq!(body["riskProfile"], "aggressive");

    let (_, me) = send(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(me["riskProfile"], "aggressive");
    assert_eq!(me["kycStatus"], "verified");
    assert_eq!(me["profileCompleted"], true);
    assert_eq!(me["riskScore"], 30);
}

#[tokio::test]
async fn goals_crud_and_dashboard_progress() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "heidi@example.com").await;

    let (status, goal) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(&token),
        Some(json!({
            "goalType": "home",
            "targetAmount": 60000.0,
            "targetDate": "2032-06-01",
            "monthlyContribution": 1000.0,
            "status": "active"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let (_, progress) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/goals-progress",
        Some(&token),
        None,
    )
    .await;
    let entries = progress.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Home");
    assert_eq!(entries[0]["target"].as_f64().unwrap(), 60000.0);
    // Fresh goal: one month of contributions assumed
    assert_eq!(entries[0]["current"].as_f64().unwrap(), 1000.0);

    // Pausing removes it from the progress list
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/goals/{goal_id}"),
        Some(&token),
        Some(json!({
            "goalType": "home",
            "targetAmount": 60000.0,
            "targetDate": "2032-06-01",
            "monthlyContribution": 1000.0,
            "status": "paused"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, progress) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/goals-progress",
        Some(&token),
        None,
    )
    .await;
    assert!(progress.as_array().unwrap().is_empty());

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/goals/{goal_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/goals/{goal_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_reflects_positions_and_recommendations_see_drift() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "ivan@example.com").await;

    send(
        &app,
        Method::POST,
        "/api/v1/transactions",
        Some(&token),
        Some(json!({ "symbol": "VTI", "side": "buy", "quantity": 10, "price": 100, "assetType": "etf" })),
    )
    .await;

    let (_, summary) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/summary",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(summary["invested"].as_f64().unwrap(), 1000.0);
    assert_eq!(summary["current"].as_f64().unwrap(), 1000.0);

    let (_, allocation) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/allocation",
        Some(&token),
        None,
    )
    .await;
    let slices = allocation.as_array().unwrap();
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0]["name"], "Etf");
    assert_eq!(slices[0]["percent"].as_f64().unwrap(), 100.0);

    // No history rows yet: one synthetic point from current holdings
    let (_, history) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/history?period=1M",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(history.as_array().unwrap().len(), 1);

    // 100% equity vs the moderate 50/40/10 target
    let (_, recs) = send(&app, Method::GET, "/api/v1/recommendations", Some(&token), None).await;
    assert_eq!(recs["riskProfile"], "moderate");
    assert_eq!(recs["totalPortfolioValue"].as_f64().unwrap(), 1000.0);
    let suggestions = recs["suggestions"].as_array().unwrap();
    assert!(suggestions.iter().any(|s| s["category"] == "equity" && s["action"] == "Reduce"));
    assert!(suggestions.iter().any(|s| s["category"] == "debt" && s["action"] == "Increase"));

    let (_, inv_summary) = send(
        &app,
        Method::GET,
        "/api/v1/investments/summary",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(inv_summary["totalInvestments"], 1);
    assert_eq!(inv_summary["totalInvested"].as_f64().unwrap(), 1000.0);
}

#[tokio::test]
async fn profile_update_and_password_change() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "judy@example.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/profile",
        Some(&token),
        Some(json!({ "name": "Judy Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Judy Renamed");

    // Wrong current password
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/profile/password",
        Some(&token),
        Some(json!({ "currentPassword": "nope", "newPassword": "newpassword1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/profile/password",
        Some(&token),
        Some(json!({ "currentPassword": "hunter2hunter2", "newPassword": "newpassword1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Old password no longer works, new one does
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "judy@example.com", "password": "hunter2hunter2" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "judy@example.com", "password": "newpassword1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn scheduler_status_reports_idle_before_start() {
    let (app, _tmp) = build_test_router().await;
    let token = signup_and_login(&app, "ken@example.com").await;

    // The test router never starts the background scheduler
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/investments/scheduler/status",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], false);
    assert!(body["lastRunAt"].is_null());
}
