//! Integration tests for `HttpTransport` and `SearchWidget` against a live
//! in-process backend.

mod helpers;

use axum::http::StatusCode;
use helpers::{dead_origin, MockBackend, Reply};
use serde_json::json;

use vitrine_core::render::{cards, ProductCard};
use vitrine_core::widget::Grid;
use vitrine_core::{ConnectionError, HttpTransport, Query, SearchTransport, SearchWidget, UiState, WidgetConfig};

fn galaxy_reply() -> Reply {
    Reply::Json(json!([{
        "name": "Galaxy",
        "category": "Phones",
        "price": "50000 DA",
        "image": "http://x/img.png",
        "score": 92
    }]))
}

fn transport_for(origin: &str) -> HttpTransport {
    HttpTransport::from_config(&WidgetConfig::default(), origin).expect("valid endpoint")
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[tokio::test]
async fn posts_query_as_json() {
    let backend = MockBackend::spawn(galaxy_reply()).await;
    let transport = transport_for(&backend.origin());

    let products = transport.search(&Query::parse("samsung").unwrap()).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Galaxy");

    let received = backend.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(received[0].body, json!({ "query": "samsung" }));
}

#[tokio::test]
async fn extra_fields_are_tolerated() {
    let backend = MockBackend::spawn(Reply::Json(json!([{
        "name": "ZTE Blade A54",
        "category": "Smartphone",
        "price": "17900 DA",
        "image": "https://via.placeholder.com/150?text=No+Image",
        "score": 81,
        "description": "Blade A54 4G",
        "stock": 3
    }])))
    .await;
    let transport = transport_for(&backend.origin());

    let products = transport.search(&Query::parse("zte").unwrap()).await.unwrap();
    assert_eq!(products[0].description.as_deref(), Some("Blade A54 4G"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn server_error_status_is_a_connection_error() {
    let backend = MockBackend::spawn(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let transport = transport_for(&backend.origin());

    let err = transport.search(&Query::parse("samsung").unwrap()).await.unwrap_err();
    assert_eq!(err, ConnectionError::Status(500));
}

#[tokio::test]
async fn non_json_body_is_a_connection_error() {
    let backend = MockBackend::spawn(Reply::Html("<html>oops</html>")).await;
    let transport = transport_for(&backend.origin());

    let err = transport.search(&Query::parse("samsung").unwrap()).await.unwrap_err();
    assert!(matches!(err, ConnectionError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn wrong_json_shape_is_a_connection_error() {
    let backend = MockBackend::spawn(Reply::Json(json!({ "error": "no model" }))).await;
    let transport = transport_for(&backend.origin());

    let err = transport.search(&Query::parse("samsung").unwrap()).await.unwrap_err();
    assert!(matches!(err, ConnectionError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_connection_error() {
    let transport = transport_for(&dead_origin().await);

    let err = transport.search(&Query::parse("samsung").unwrap()).await.unwrap_err();
    assert!(matches!(err, ConnectionError::Transport(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// Widget end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn widget_renders_one_card_for_samsung() {
    let backend = MockBackend::spawn(galaxy_reply()).await;
    let mut widget = SearchWidget::new(transport_for(&backend.origin()));
    widget.set_input("samsung");

    assert_eq!(widget.perform_search().await, Some(UiState::ResultsShown));
    assert!(widget.state().header_visible());
    assert_eq!(widget.state().count_label(), "1 produits trouvés");

    let drawn: Vec<ProductCard> = cards(widget.state(), "http://fallback");
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].name, "Galaxy");
    assert_eq!(drawn[0].category, "Phones");
    assert_eq!(drawn[0].match_label, "Match 92%");
    assert_eq!(drawn[0].price, "50000 DA");
}

#[tokio::test]
async fn widget_shows_no_results_for_empty_array() {
    let backend = MockBackend::spawn(Reply::Json(json!([]))).await;
    let mut widget = SearchWidget::new(transport_for(&backend.origin()));

    assert_eq!(widget.fill_search("licorne").await, Some(UiState::Empty));
    assert!(!widget.state().header_visible());
    assert_eq!(widget.state().count_label(), "");
    assert_eq!(
        widget.state().grid(),
        &Grid::NoResults { message: "Aucun résultat trouvé pour \"licorne\".".into() }
    );
}

#[tokio::test]
async fn widget_shows_connection_error_when_server_is_down() {
    let mut widget = SearchWidget::new(transport_for(&dead_origin().await));

    assert_eq!(widget.fill_search("samsung").await, Some(UiState::Error));
    assert!(!widget.state().is_loading());
    assert_eq!(
        widget.state().grid(),
        &Grid::Error { message: "Erreur de connexion au serveur.".into() }
    );
}

#[tokio::test]
async fn blank_query_never_reaches_the_server() {
    let backend = MockBackend::spawn(galaxy_reply()).await;
    let mut widget = SearchWidget::new(transport_for(&backend.origin()));

    assert_eq!(widget.fill_search("   ").await, None);
    assert!(backend.received().is_empty());
    assert_eq!(widget.state().ui_state(), UiState::Idle);
}

#[tokio::test]
async fn null_image_falls_back_to_placeholder() {
    let backend = MockBackend::spawn(Reply::Json(json!([
        {
            "name": "Galaxy",
            "category": "Phones",
            "price": "50000 DA",
            "image": "http://x/img.png",
            "score": 92
        },
        {
            "name": "Modem 4G",
            "category": "Modems",
            "price": "6500 DA",
            "image": null,
            "score": 64
        }
    ])))
    .await;
    let mut widget = SearchWidget::new(transport_for(&backend.origin()));

    assert_eq!(widget.fill_search("phone").await, Some(UiState::ResultsShown));
    assert_eq!(widget.state().count_label(), "2 produits trouvés");

    let drawn = cards(widget.state(), "http://fallback");
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].image, "http://x/img.png");
    assert_eq!(drawn[1].name, "Modem 4G");
    assert_eq!(drawn[1].image, "http://fallback");
}
