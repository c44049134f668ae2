// tests/api_tests.rs

use quiz_backend::{config::Config, routes, state::AppState, store::QuizStore};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL of the quiz API (e.g., "http://127.0.0.1:12345/api/quiz").
async fn spawn_app(store: QuizStore) -> String {
    let config = Config {
        rust_log: "error".to_string(),
        ..Config::default()
    };

    let state = AppState::new(store, config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}/api/quiz", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn spawn_seeded_app() -> String {
    spawn_app(QuizStore::with_sample_questions().expect("sample catalog")).await
}

fn unique_email() -> String {
    format!("u_{}@example.com", &uuid::Uuid::new_v4().to_string()[..8])
}

async fn add_question(client: &reqwest::Client, address: &str, category: &str, correct: usize) -> Value {
    let response = client
        .post(format!("{}/questions", address))
        .json(&json!({
            "questionText": format!("A {} question", category),
            "options": ["zero", "one", "two", "three"],
            "correctAnswer": correct,
            "category": category,
            "difficulty": "Easy"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

async fn submit(
    client: &reqwest::Client,
    address: &str,
    email: &str,
    category: &str,
    answers: Value,
    ids: Value,
) -> reqwest::Response {
    client
        .post(format!("{}/submit", address))
        .json(&json!({
            "userName": "Tester",
            "userEmail": email,
            "category": category,
            "difficulty": "Easy",
            "timeTaken": 42,
            "userAnswers": answers,
            "questionIds": ids
        }))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn unknown_path_404() {
    let address = spawn_seeded_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn welcome_reports_question_count() {
    let address = spawn_seeded_app().await;

    let body = reqwest::get(&address).await.unwrap().text().await.unwrap();

    assert_eq!(body, "🎯 Quiz Application API is running! Total questions: 44");
}

#[tokio::test]
async fn seeded_catalog_is_listed() {
    let address = spawn_seeded_app().await;
    let client = reqwest::Client::new();

    let questions: Vec<Value> = client
        .get(format!("{}/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(questions.len(), 44);
    assert_eq!(questions[0]["id"], 1);
    assert!(questions[0]["questionText"].is_string());

    let categories: Vec<String> = client
        .get(format!("{}/categories", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        categories,
        vec!["Geography", "History", "Mathematics", "Programming", "Science"]
    );
}

#[tokio::test]
async fn category_filters_ignore_case() {
    let address = spawn_seeded_app().await;
    let client = reqwest::Client::new();

    let science: Vec<Value> = client
        .get(format!("{}/questions/category/science", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(science.len(), 10);
    assert!(science.iter().all(|q| q["category"] == "Science"));

    let hard: Vec<Value> = client
        .get(format!(
            "{}/questions/category/MATHEMATICS/difficulty/hard",
            address
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hard.len(), 2);

    let none: Vec<Value> = client
        .get(format!("{}/questions/category/Astrology", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn question_lifecycle() {
    let address = spawn_app(QuizStore::new()).await;
    let client = reqwest::Client::new();

    let created = add_question(&client, &address, "Math", 2).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["correctAnswer"], 2);

    let fetched: Value = client
        .get(format!("{}/questions/1", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let deleted = client
        .delete(format!("{}/questions/1", address))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 204);

    // Deleting again is a no-op
    let deleted_again = client
        .delete(format!("{}/questions/1", address))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted_again.status().as_u16(), 204);

    let missing = client
        .get(format!("{}/questions/1", address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    // Ids are not reused after deletion
    let next = add_question(&client, &address, "Math", 0).await;
    assert_eq!(next["id"], 2);
}

#[tokio::test]
async fn invalid_question_is_rejected() {
    let address = spawn_app(QuizStore::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/questions", address))
        .json(&json!({
            "questionText": "Out of range answer",
            "options": ["a", "b"],
            "correctAnswer": 5,
            "category": "Math",
            "difficulty": "Easy"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn submit_scores_and_records_attempt() {
    let address = spawn_app(QuizStore::new()).await;
    let client = reqwest::Client::new();
    let a = add_question(&client, &address, "Math", 0).await;
    let b = add_question(&client, &address, "Math", 2).await;
    let email = unique_email();

    let response = submit(
        &client,
        &address,
        &email,
        "Math",
        json!([0, 1]),
        json!([a["id"], b["id"]]),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let outcome: Value = response.json().await.unwrap();
    assert_eq!(outcome["score"], 1);
    assert_eq!(outcome["total"], 2);
    assert_eq!(outcome["percentage"], 50.0);
    assert_eq!(outcome["passed"], true);
    assert_eq!(outcome["message"], "Good effort! 👍");

    let history: Vec<Value> = client
        .get(format!("{}/results/user/{}", address, email.to_uppercase()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["score"], 1);
    assert_eq!(history[0]["totalQuestions"], 2);
    assert_eq!(history[0]["timeTaken"], 42);
    assert_eq!(history[0]["percentage"], 50.0);
}

#[tokio::test]
async fn malformed_submissions_are_rejected() {
    let address = spawn_seeded_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    // Fewer answers than questions
    let mismatched = submit(&client, &address, &email, "Math", json!([0]), json!([1, 2])).await;
    assert_eq!(mismatched.status().as_u16(), 400);

    // No questions at all
    let empty = submit(&client, &address, &email, "Math", json!([]), json!([])).await;
    assert_eq!(empty.status().as_u16(), 400);

    // Wrong types
    let wrong_types = client
        .post(format!("{}/submit", address))
        .json(&json!({
            "userName": "Tester",
            "userEmail": email,
            "userAnswers": "zero",
            "questionIds": [1]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_types.status().as_u16(), 400);

    // Missing category, difficulty and timeTaken
    let missing_fields = client
        .post(format!("{}/submit", address))
        .json(&json!({
            "userName": "Tester",
            "userEmail": email,
            "userAnswers": [0],
            "questionIds": [1]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_fields.status().as_u16(), 400);

    let stats: Value = client
        .get(format!("{}/stats", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["totalAttempts"], 0);
}

#[tokio::test]
async fn leaderboard_ranks_by_score_then_recency() {
    let address = spawn_app(QuizStore::new()).await;
    let client = reqwest::Client::new();
    let ids: Vec<Value> = {
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(add_question(&client, &address, "Math", 0).await["id"].clone());
        }
        ids
    };

    let low = unique_email();
    let first_high = unique_email();
    let second_high = unique_email();
    for (email, answers) in [
        (&low, json!([0, 1, 1, 1])),
        (&first_high, json!([0, 0, 0, 1])),
        (&second_high, json!([0, 0, 0, 1])),
    ] {
        let response = submit(&client, &address, email, "Math", answers, json!(ids)).await;
        assert_eq!(response.status().as_u16(), 200);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let board: Vec<Value> = client
        .get(format!("{}/leaderboard", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let emails: Vec<&str> = board
        .iter()
        .map(|r| r["userEmail"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec![second_high.as_str(), first_high.as_str(), low.as_str()]);

    let limited: Vec<Value> = client
        .get(format!("{}/leaderboard?limit=1", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);

    let by_category: Vec<Value> = client
        .get(format!("{}/leaderboard/category/math", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_category.len(), 3);

    let other_category: Vec<Value> = client
        .get(format!("{}/leaderboard/category/Science", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(other_category.is_empty());

    let all: Vec<Value> = client
        .get(format!("{}/results", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn stats_reflect_store_contents() {
    let address = spawn_seeded_app().await;
    let client = reqwest::Client::new();

    let response = submit(
        &client,
        &address,
        &unique_email(),
        "Science",
        json!([1]),
        json!([14]),
    )
    .await;
    assert_eq!(response.status().as_u16(), 200);

    let stats: Value = client
        .get(format!("{}/stats", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["totalQuestions"], 44);
    assert_eq!(stats["totalCategories"], 5);
    assert_eq!(stats["categories"].as_array().unwrap().len(), 5);
    assert_eq!(stats["totalAttempts"], 1);
}
