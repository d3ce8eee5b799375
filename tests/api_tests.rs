use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use tfidf_search::api::{self, AppState};
use tfidf_search::{Normalizer, Retriever};

fn state(max_tokens: usize) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        Retriever::new(Normalizer::english()).with_max_tokens(max_tokens),
    ))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state).configure(api::configure)).await
    };
}

#[actix_web::test]
async fn test_index() {
    let app = app!(state(1000));
    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, web::Bytes::from_static(b"TF-IDF retrieval API"));
}

#[actix_web::test]
async fn test_rank_block() {
    let app = app!(state(1000));
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({
            "documents": "The dog barks loudly.\nThe cat meows at night.\nThe dog and the cat play together.",
            "query": "Who is playing?"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["best_match"]["ordinal"], 3);
    assert_eq!(body["matched_query_terms"], json!(["play"]));
    assert_eq!(body["ranked_results"].as_array().unwrap().len(), 3);
    assert_eq!(body["weight_matrix"]["rows"], json!([1, 2, 3]));
    assert!(body["weight_matrix"]["columns"]
        .as_array()
        .unwrap()
        .contains(&json!("play")));
}

#[actix_web::test]
async fn test_rank_lines() {
    let app = app!(state(1000));
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({ "documents": ["", "  ", "cat"], "query": "cats" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["weight_matrix"]["columns"], json!(["cat"]));
    assert_eq!(body["best_match"]["text"], "cat");
    assert_eq!(body["best_match"]["score"], 1.0);
}

#[actix_web::test]
async fn test_empty_documents_rejected() {
    let app = app!(state(1000));
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({ "documents": "\n \n", "query": "cat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no documents"));
}

#[actix_web::test]
async fn test_token_limit() {
    let app = app!(state(2));
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({ "documents": "dog cat bird", "query": "cat" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[actix_web::test]
async fn test_input_bytes_limit() {
    let state = web::Data::new(AppState::new(
        Retriever::new(Normalizer::english()).with_max_bytes(16),
    ));
    let app = app!(state);
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({ "documents": "dog ".repeat(1000), "query": "dog" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("above the limit of 16"));
}

#[actix_web::test]
async fn test_malformed_request() {
    let app = app!(state(1000));
    let req = test::TestRequest::post()
        .uri("/rank")
        .set_json(json!({ "documents": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_normalizer_info() {
    let app = app!(state(500));
    let req = test::TestRequest::get().uri("/normalizer").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["stemmer"], "snowball");
    assert_eq!(body["min_token_len"], 2);
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["max_bytes"], 4 * 1024 * 1024);
    assert!(body["stop_words"].as_u64().unwrap() > 300);
}
