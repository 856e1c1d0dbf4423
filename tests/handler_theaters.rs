mod common;

use axum::http::{Method, StatusCode};
use movie_aggregator::domain::entities::Theater;
use std::sync::Arc;

#[tokio::test]
async fn test_theaters_showing_movie() {
    let server = common::theaters_server(Arc::new(common::sample_repository()));

    let response = server.get("/theaters").add_query_param("name", "Dune").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Vec<Theater>>(),
        vec![Theater::new("Imax"), Theater::new("Odeon")]
    );
}

#[tokio::test]
async fn test_unknown_movie_returns_empty_array() {
    let server = common::theaters_server(Arc::new(common::sample_repository()));

    let response = server.get("/theaters").add_query_param("name", "Tenet").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "[]");
}

#[tokio::test]
async fn test_missing_or_empty_name_rejected() {
    let repository = Arc::new(common::CountingRepository::new(common::sample_repository()));
    let server = common::theaters_server(repository.clone());

    server
        .get("/theaters")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .get("/theaters")
        .add_query_param("name", "")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(repository.calls(), 0);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let server = common::theaters_server(Arc::new(common::FailingRepository));

    let response = server.get("/theaters").add_query_param("name", "Dune").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_non_get_rejected() {
    let repository = Arc::new(common::CountingRepository::new(common::sample_repository()));
    let server = common::theaters_server(repository.clone());

    server
        .put("/theaters")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .method(Method::HEAD, "/theaters")
        .add_query_param("name", "Dune")
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(repository.calls(), 0);
}

#[tokio::test]
async fn test_repeated_name_uses_first_value() {
    let server = common::theaters_server(Arc::new(common::sample_repository()));

    let response = server
        .get("/theaters")
        .add_query_param("name", "Dune")
        .add_query_param("name", "Alien")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Vec<Theater>>(),
        vec![Theater::new("Imax"), Theater::new("Odeon")]
    );
}

#[tokio::test]
async fn test_repeated_name_with_empty_first_value_rejected() {
    let server = common::theaters_server(Arc::new(common::sample_repository()));

    server
        .get("/theaters")
        .add_query_param("name", "")
        .add_query_param("name", "Dune")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
