use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use motorpool_core::models::Profile;

use crate::integration::common::{TestApp, bearer, setup_test_app};

async fn create_vehicle(app: &TestApp, name: &str, brand: &str, year: i32) -> String {
    let create_body = serde_json::json!({
        "name": name,
        "brand": brand,
        "year": year
    });

    let response = app
        .router
        .clone()
        .oneshot(
            Request::post("/vehicles")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn create_and_get_vehicle() {
    let app = setup_test_app().await;

    let id = create_vehicle(&app, "Uno", "Fiat", 1995).await;

    let response = app
        .router
        .oneshot(
            Request::get(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["name"], "Uno");
    assert_eq!(json["brand"], "Fiat");
    assert_eq!(json["year"], 1995);
}

#[tokio::test]
async fn create_vehicle_collects_every_violation_in_order() {
    let app = setup_test_app().await;

    let create_body = serde_json::json!({
        "name": "",
        "brand": "",
        "year": 1800
    });

    let response = app
        .router
        .oneshot(
            Request::post("/vehicles")
                .header("authorization", bearer(&app.tokens, Profile::Admin))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json["messages"],
        serde_json::json!([
            "Name cannot be empty",
            "Brand cannot be empty",
            "Year must be 1950 or later",
        ])
    );
}

#[tokio::test]
async fn vehicle_year_boundary() {
    let app = setup_test_app().await;

    // 1950 is the oldest accepted model year
    create_vehicle(&app, "Beetle", "Volkswagen", 1950).await;

    let create_body = serde_json::json!({
        "name": "Beetle",
        "brand": "Volkswagen",
        "year": 1949
    });

    let response = app
        .router
        .oneshot(
            Request::post("/vehicles")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_vehicles_is_paged() {
    let app = setup_test_app().await;

    for i in 0..11 {
        create_vehicle(&app, &format!("Model {i}"), "Generic", 1990 + i).await;
    }

    let response = app
        .router
        .clone()
        .oneshot(
            Request::get("/vehicles")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 10);
    assert_eq!(json["vehicles"][0]["name"], "Model 0");

    let response = app
        .router
        .oneshot(
            Request::get("/vehicles?page=2")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["vehicles"][0]["name"], "Model 10");
}

#[tokio::test]
async fn vehicles_filtered_by_name_and_brand() {
    let app = setup_test_app().await;

    create_vehicle(&app, "Uno", "Fiat", 1995).await;
    create_vehicle(&app, "Palio", "Fiat", 2001).await;
    create_vehicle(&app, "Gol", "Volkswagen", 1999).await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::get("/vehiclesName/uno")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["vehicles"][0]["name"], "Uno");

    let response = app
        .router
        .oneshot(
            Request::get("/vehiclesBrand/fiat")
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["total"], 2);
}

#[tokio::test]
async fn get_unknown_vehicle_returns_404() {
    let app = setup_test_app().await;

    let response = app
        .router
        .oneshot(
            Request::get(format!("/vehicle/{}", uuid::Uuid::new_v4()))
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_vehicle_as_editor_returns_403() {
    let app = setup_test_app().await;

    let id = create_vehicle(&app, "Uno", "Fiat", 1995).await;

    let update_body = serde_json::json!({
        "name": "Uno Mille",
        "brand": "Fiat",
        "year": 1996
    });

    let response = app
        .router
        .oneshot(
            Request::put(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&update_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn update_unknown_vehicle_returns_404_before_validation() {
    let app = setup_test_app().await;

    // Invalid payload on a missing id: the lookup miss wins.
    let update_body = serde_json::json!({
        "name": "",
        "brand": "",
        "year": 1800
    });

    let response = app
        .router
        .oneshot(
            Request::put(format!("/vehicle/{}", uuid::Uuid::new_v4()))
                .header("authorization", bearer(&app.tokens, Profile::Admin))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&update_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_vehicle_as_admin_replaces_fields() {
    let app = setup_test_app().await;

    let id = create_vehicle(&app, "Uno", "Fiat", 1995).await;

    let update_body = serde_json::json!({
        "name": "Uno Mille",
        "brand": "Fiat",
        "year": 1996
    });

    let response = app
        .router
        .oneshot(
            Request::put(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Admin))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&update_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["name"], "Uno Mille");
    assert_eq!(json["year"], 1996);
}

#[tokio::test]
async fn delete_vehicle_is_admin_only() {
    let app = setup_test_app().await;

    let id = create_vehicle(&app, "Uno", "Fiat", 1995).await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::delete(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Editor))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::delete(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Admin))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .router
        .oneshot(
            Request::delete(format!("/vehicle/{id}"))
                .header("authorization", bearer(&app.tokens, Profile::Admin))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
