/// Contact relay request flow through the axum router
#[path = "common/mod.rs"]
mod common;

use axum::http::{Method, StatusCode};
use common::{MockProvider, MockReply, VALID_BODY, assert_cors, call, context, test_config};
use contact_relay_api::RelayContext;
use contact_relay_core::RelayConfig;

#[tokio::test]
async fn test_valid_submission_is_relayed() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let response = call(context(provider.clone()), Method::POST, VALID_BODY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["id"], "abc123");
    assert_eq!(response.body["message"], "Mensaje enviado correctamente");
    assert_cors(&response.headers);

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.to, vec!["owner@example.com".to_string()]);
    assert_eq!(email.from, "BJM Portfolio <noreply@bjmdesigns.com>");
    assert_eq!(email.reply_to, "ana@example.com");
    assert_eq!(email.subject, "Nuevo mensaje de Ana Pérez desde tu portfolio");
    assert!(email.html.contains("Hola<br>Quisiera un presupuesto"));
    assert!(email.html.contains("mailto:ana@example.com"));
}

#[tokio::test]
async fn test_success_without_provider_id_omits_id() {
    let provider = MockProvider::new(MockReply::Sent(None));
    let response = call(context(provider), Method::POST, VALID_BODY).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(response.body.get("id").is_none());
}

#[tokio::test]
async fn test_provider_error_is_not_exposed() {
    let provider = MockProvider::new(MockReply::Fail("API key is invalid".to_string()));
    let response = call(context(provider.clone()), Method::POST, VALID_BODY).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Error interno del servidor");
    assert!(!response.body.to_string().contains("API key is invalid"));
    assert_cors(&response.headers);
    assert_eq!(provider.sent().len(), 1);
}

#[tokio::test]
async fn test_missing_credential_is_server_error() {
    let ctx = RelayContext::from_config(RelayConfig::default()).unwrap();

    for method in [Method::POST, Method::GET, Method::OPTIONS] {
        let response = call(ctx.clone(), method.clone(), VALID_BODY).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{method}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "Configuración del servidor incompleta");
        assert!(!response.body.to_string().contains("RESEND_API_KEY"));
        assert_cors(&response.headers);
    }
}

#[tokio::test]
async fn test_credential_required_even_with_provider() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let config = RelayConfig {
        api_key: None,
        ..test_config()
    };
    let ctx = RelayContext::with_provider(config, provider.clone());

    let response = call(ctx, Method::POST, VALID_BODY).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_non_post_methods_rejected() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let ctx = context(provider.clone());

    for method in [
        Method::GET,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ] {
        let response = call(ctx.clone(), method.clone(), VALID_BODY).await;
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(response.body["message"], "Method not allowed");
        assert_cors(&response.headers);
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_preflight_answered_when_enabled() {
    let provider = MockProvider::new(MockReply::Sent(None));
    let config = RelayConfig {
        answer_preflight: true,
        ..test_config()
    };
    let ctx = RelayContext::with_provider(config, provider.clone());

    let response = call(ctx.clone(), Method::OPTIONS, "").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_null());
    assert_cors(&response.headers);

    // Other methods are still gated
    let response = call(ctx, Method::GET, "").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let ctx = context(provider.clone());

    let bodies = [
        r#"{"email":"ana@example.com","mensaje":"Hola"}"#,
        r#"{"nombre":"Ana","mensaje":"Hola"}"#,
        r#"{"nombre":"Ana","email":"ana@example.com"}"#,
        r#"{"nombre":"","email":"ana@example.com","mensaje":"Hola"}"#,
        r#"{"nombre":"Ana","email":"ana@example.com","mensaje":null}"#,
        r#"{}"#,
    ];

    for body in bodies {
        let response = call(ctx.clone(), Method::POST, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "Todos los campos son requeridos");
        assert_cors(&response.headers);
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let ctx = context(provider.clone());

    for email in ["ana", "ana@example", "ana.example.com", "ana @example.com", "@example.com"] {
        let body = serde_json::json!({
            "nombre": "Ana",
            "email": email,
            "mensaje": "Hola",
        })
        .to_string();

        let response = call(ctx.clone(), Method::POST, &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{email}");
        assert_eq!(response.body["message"], "Email inválido");
        assert_cors(&response.headers);
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_server_error() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let ctx = context(provider.clone());

    for body in ["", "{", "nombre=Ana", "null", r#"{"nombre":"Ana","#] {
        let response = call(ctx.clone(), Method::POST, body).await;
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "Error interno del servidor");
        assert_cors(&response.headers);
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_positional_array_is_not_relayed() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let response = call(
        context(provider.clone()),
        Method::POST,
        r#"["Ana","ana@example.com","Hola"]"#,
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Todos los campos son requeridos");
    assert_cors(&response.headers);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_non_object_json_is_missing_fields() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let ctx = context(provider.clone());

    let bodies = [
        "[]",
        r#""texto""#,
        "42",
        "false",
        r#"{"nombre":0,"email":"ana@example.com","mensaje":"Hola"}"#,
        r#"{"nombre":"Ana","email":false,"mensaje":"Hola"}"#,
    ];

    for body in bodies {
        let response = call(ctx.clone(), Method::POST, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(response.body["message"], "Todos los campos son requeridos");
        assert_cors(&response.headers);
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_duplicate_key_uses_last_value() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let body = r#"{"nombre":"Ana","email":"ana@example.com","mensaje":"Hola","nombre":"Luis"}"#;

    let response = call(context(provider.clone()), Method::POST, body).await;

    assert_eq!(response.status, StatusCode::OK);
    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Nuevo mensaje de Luis desde tu portfolio");
}

#[tokio::test]
async fn test_oversized_body_is_server_error() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let body = serde_json::json!({
        "nombre": "Ana",
        "email": "ana@example.com",
        "mensaje": "x".repeat(contact_relay_core::constants::MAX_BODY_BYTES),
    })
    .to_string();

    let response = call(context(provider.clone()), Method::POST, &body).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response.headers);
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn test_html_injection_is_escaped() {
    let provider = MockProvider::new(MockReply::Sent(Some("abc123".to_string())));
    let body = serde_json::json!({
        "nombre": "<b>Ana</b>",
        "email": "ana@example.com",
        "mensaje": "<script>alert(1)</script>",
    })
    .to_string();

    let response = call(context(provider.clone()), Method::POST, &body).await;
    assert_eq!(response.status, StatusCode::OK);

    let html = &provider.sent()[0].html;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;b&gt;Ana&lt;/b&gt;"));
}
