//! Tests for message template CRUD.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use curbside::{
    model::template::{MessageTemplateDto, UpsertTemplateDto},
    server::{
        controller::admin::template::{
            create_template, delete_template, list_templates, update_template,
        },
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;
use entity::message_template::MessageChannel;

use crate::controller::admin_headers;

fn upsert_request(name: &str) -> UpsertTemplateDto {
    UpsertTemplateDto {
        name: name.to_string(),
        channel: "SMS".to_string(),
        subject: None,
        body: "Hi {first_name}, see you at {appointment_time}.".to_string(),
    }
}

#[tokio::test]
/// Expect create then list to round-trip the template
async fn create_and_list_templates() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let created = create_template(
        State(test.state::<AppState>()),
        admin_headers(),
        Json(upsert_request("appointment_reminder")),
    )
    .await;

    assert!(created.is_ok());
    let resp = created.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = list_templates(State(test.state::<AppState>()), admin_headers()).await;
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dtos: Vec<MessageTemplateDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dtos.len(), 1);
    assert_eq!(dtos[0].name, "appointment_reminder");
    assert_eq!(dtos[0].channel, "SMS");

    Ok(())
}

#[tokio::test]
/// Expect 400 for an unknown channel value
async fn create_rejects_unknown_channel() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let mut request = upsert_request("appointment_reminder");
    request.channel = "CARRIER_PIGEON".to_string();

    let result = create_template(
        State(test.state::<AppState>()),
        admin_headers(),
        Json(request),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect update to change the stored body
async fn update_changes_body() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let template = test
        .shop()
        .insert_template("appointment_reminder", MessageChannel::Sms, "old body")
        .await?;

    let mut request = upsert_request("appointment_reminder");
    request.body = "new body".to_string();

    let result = update_template(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(template.id),
        Json(request),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: MessageTemplateDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.body, "new body");

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting a template twice
async fn delete_missing_template_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let template = test
        .shop()
        .insert_template("appointment_reminder", MessageChannel::Sms, "body")
        .await?;

    let first = delete_template(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(template.id),
    )
    .await;
    let resp = first.into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let second = delete_template(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(template.id),
    )
    .await;
    let resp = second.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
