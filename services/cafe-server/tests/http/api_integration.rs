//! Integration tests for the cafe REST API
//!
//! Drives the full router (middleware, extractors, error rendering)
//! with in-memory requests.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use cafe_service::core::config::Config;
use cafe_service::core::directory::CafeDirectory;
use cafe_service::core::services::Services;
use cafe_service::http;
use tower::ServiceExt as TowerServiceExt;

/// Create a test application backed by the seed directory
fn create_test_app() -> Router {
    http::router(Services::new(Config::default()))
}

/// Send a GET request and return status and body text
async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Split a comma-joined body into names
fn names(body: &str) -> Vec<&str> {
    if body.is_empty() {
        Vec::new()
    } else {
        body.split(',').collect()
    }
}

#[tokio::test]
async fn test_negative_requests() {
    let cases = [
        ("/cafe", "unknown city"),
        ("/cafe?city=omsk", "unknown city"),
        ("/cafe?city=Moscow", "unknown city"),
        ("/cafe?city=tula&count=na", "incorrect count"),
        ("/cafe?city=tula&count=-1", "incorrect count"),
        ("/cafe?count=na", "unknown city"),
    ];

    for (uri, message) in cases {
        let (status, body) = get(create_test_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body.trim(), message, "{uri}");
    }
}

#[tokio::test]
async fn test_ok_requests() {
    let uris = [
        "/cafe?count=2&city=moscow",
        "/cafe?city=tula",
        "/cafe?city=moscow&search=%D0%BB%D0%BE%D0%B6%D0%BA%D0%B0",
    ];

    for uri in uris {
        let (status, _) = get(create_test_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_full_list_in_order() {
    let (status, body) = get(create_test_app(), "/cafe?city=moscow").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec![
            "Мир кофе",
            "Сладкоежка",
            "Кофе и завтраки",
            "Сытый студент",
            "Ложка и вилка"
        ]
    );
}

#[tokio::test]
async fn test_count() {
    let total = CafeDirectory::seeded().get("moscow").unwrap().len();

    for (count, want) in [(0, 0), (1, 1), (2, 2), (100, total)] {
        let uri = format!("/cafe?city=moscow&count={count}");
        let (status, body) = get(create_test_app(), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body).len(), want, "count={count}");
    }
}

#[tokio::test]
async fn test_count_exceeding_directory_returns_all() {
    let (status, body) = get(create_test_app(), "/cafe?city=tula&count=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body).len(), 3);
}

#[tokio::test]
async fn test_search() {
    let cases = [
        ("%D1%84%D0%B0%D1%81%D0%BE%D0%BB%D1%8C", "фасоль", 0),
        ("%D0%BA%D0%BE%D1%84%D0%B5", "кофе", 2),
        ("%D0%B2%D0%B8%D0%BB%D0%BA%D0%B0", "вилка", 1),
        ("%D0%9A%D0%9E%D0%A4%D0%95", "кофе", 2),
    ];

    for (encoded, needle, want) in cases {
        let uri = format!("/cafe?city=moscow&search={encoded}");
        let (status, body) = get(create_test_app(), &uri).await;

        assert_eq!(status, StatusCode::OK);
        let found = names(&body);
        assert_eq!(found.len(), want, "search={needle}");
        assert!(found
            .iter()
            .all(|name| name.to_lowercase().contains(needle)));
    }
}

#[tokio::test]
async fn test_search_and_count_combined() {
    let uri = "/cafe?city=moscow&search=%D0%BA%D0%BE%D1%84%D0%B5&count=1";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Мир кофе");
}

#[tokio::test]
async fn test_empty_result_has_empty_body() {
    let (status, body) = get(create_test_app(), "/cafe?city=moscow&count=0").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_plain_text_content_type() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/cafe?city=tula")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_configured_directory_and_delimiter() {
    let mut cities = BTreeMap::new();
    cities.insert(
        "omsk".to_string(),
        vec!["Пирожковая".to_string(), "Сибирский кофе".to_string()],
    );

    let mut config = Config::default();
    config.response.delimiter = ";".to_string();
    config.cities = Some(cities);
    let app = http::router(Services::new(config));

    let (status, body) = get(app.clone(), "/cafe?city=omsk").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Пирожковая;Сибирский кофе");

    let (status, body) = get(app, "/cafe?city=moscow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "unknown city");
}

#[tokio::test]
async fn test_repeated_parameters_use_first_value() {
    let cases = [
        ("/cafe?city=moscow&city=tula&count=2", "Мир кофе,Сладкоежка"),
        ("/cafe?city=tula&count=1&count=2", "Чайная"),
        ("/cafe?city=tula&count=1&count=na", "Чайная"),
        (
            "/cafe?city=moscow&search=%D0%9A%D0%9E%D0%A4%D0%95&search=x",
            "Мир кофе,Кофе и завтраки",
        ),
    ];

    for (uri, want) in cases {
        let (status, body) = get(create_test_app(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, want, "{uri}");
    }
}

#[tokio::test]
async fn test_repeated_parameters_keep_fixed_errors() {
    let cases = [
        ("/cafe?city=omsk&city=moscow", "unknown city"),
        ("/cafe?city=tula&count=na&count=1", "incorrect count"),
    ];

    for (uri, message) in cases {
        let (status, body) = get(create_test_app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, message, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get(create_test_app(), "/cafes?city=moscow").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
