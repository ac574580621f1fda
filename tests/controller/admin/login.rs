//! Tests for the admin login endpoint.

use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use curbside::{
    model::auth::{AdminLoginDto, TokenDto},
    server::{
        controller::admin::login::login,
        model::{app::AppState, auth::AdminClaims},
    },
};
use curbside_test_utils::{
    constant::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME, TEST_JWT_SECRET},
    prelude::*,
};

#[tokio::test]
/// Expect a decodable bearer token for valid credentials
async fn login_issues_token() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let account = test
        .shop()
        .insert_admin_account(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .await?;

    let result = login(
        State(test.state::<AppState>()),
        Json(AdminLoginDto {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let token: TokenDto = serde_json::from_slice(&body).unwrap();

    let claims = AdminClaims::decode(&token.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, account.id);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    test.shop()
        .insert_admin_account(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .await?;

    let result = login(
        State(test.state::<AppState>()),
        Json(AdminLoginDto {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: "not-the-password".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unknown username
async fn login_rejects_unknown_username() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = login(
        State(test.state::<AppState>()),
        Json(AdminLoginDto {
            username: "nobody".to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
