//! Token exchange tests against a stubbed token endpoint.

use chrono::Utc;
use jwt_bearer_client::{
    AssertionBuilder, BearerFlow, BearerFlowError, CredentialContext, ExchangeRequest,
    Rs256Signer, TokenExchangeClient,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PRIVATE_KEY_PEM: &[u8] = include_bytes!("data/rsa_test_key.pem");

fn context_for(audience: &str) -> CredentialContext {
    CredentialContext::new("user@example.com", "consumer-key", audience).unwrap()
}

fn signed_request(context: &CredentialContext) -> ExchangeRequest {
    let builder = AssertionBuilder::new(Rs256Signer::from_rsa_pem(PRIVATE_KEY_PEM).unwrap());
    let assertion = builder.build_assertion(context, Utc::now()).unwrap();
    ExchangeRequest::new(context.token_endpoint().clone(), assertion)
}

#[tokio::test]
async fn exchange_returns_granted_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "token_type": "Bearer",
            "instance_url": "https://na1.salesforce.com",
        })))
        .mount(&server)
        .await;

    let context = context_for(&server.uri());
    let client = TokenExchangeClient::new().unwrap();
    let exchange = client.exchange(signed_request(&context)).await.unwrap();

    assert_eq!(exchange.grant.access_token(), "abc123");
    assert_eq!(exchange.grant.token_type(), Some("Bearer"));
    assert_eq!(exchange.response.status, 200);
}

#[tokio::test]
async fn exchange_sends_bearer_grant_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .and(body_string_contains("assertion="))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "abc123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server.uri());
    let client = TokenExchangeClient::new().unwrap();
    client.exchange(signed_request(&context)).await.unwrap();
}

#[tokio::test]
async fn provider_denial_is_a_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "user hasn't approved this consumer",
        })))
        .mount(&server)
        .await;

    let context = context_for(&server.uri());
    let client = TokenExchangeClient::new().unwrap();
    let err = client
        .exchange(signed_request(&context))
        .await
        .unwrap_err();

    match err {
        BearerFlowError::Provider {
            status,
            code,
            description,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "invalid_grant");
            assert_eq!(
                description.as_deref(),
                Some("user hasn't approved this consumer")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let context = context_for(&server.uri());
    let client = TokenExchangeClient::new().unwrap();
    let err = client
        .exchange(signed_request(&context))
        .await
        .unwrap_err();

    match err {
        BearerFlowError::MalformedResponse { status, body } => {
            assert_eq!(status, 200);
            assert_eq!(body, "not json");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Discard port on localhost: the connection is refused immediately.
    let context = context_for("http://127.0.0.1:9");
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .connect_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let client = TokenExchangeClient::with_client(http);

    let err = client
        .exchange(signed_request(&context))
        .await
        .unwrap_err();
    assert!(matches!(err, BearerFlowError::Transport { .. }));
}

#[tokio::test]
async fn flow_authenticates_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "token_type": "Bearer",
            "scope": "api",
        })))
        .mount(&server)
        .await;

    let signer = Rs256Signer::from_rsa_pem(PRIVATE_KEY_PEM).unwrap();
    let mut flow = BearerFlow::new(context_for(&server.uri()), signer)
        .unwrap()
        .with_validity(Duration::from_secs(120));

    let exchange = flow.authenticate().await.unwrap();
    assert_eq!(exchange.grant.access_token(), "abc123");
    assert_eq!(exchange.grant.scope(), Some("api"));
    // The raw request is inspectable after the fact.
    assert!(exchange.request.body().starts_with("grant_type="));
}

#[tokio::test]
async fn provider_metadata_passes_through_opaquely() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "id": "https://login.salesforce.com/id/00D/005",
            "issued_at": "1700000000000",
        })))
        .mount(&server)
        .await;

    let context = context_for(&server.uri());
    let client = TokenExchangeClient::new().unwrap();
    let exchange = client.exchange(signed_request(&context)).await.unwrap();

    assert_eq!(
        exchange.grant.metadata()["id"],
        "https://login.salesforce.com/id/00D/005"
    );
    assert_eq!(exchange.grant.metadata()["issued_at"], "1700000000000");
}
