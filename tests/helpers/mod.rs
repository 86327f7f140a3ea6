#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use jamboagri::{
    AppState, Config,
    config::{EmailConfig, ObservabilityConfig, ServerConfig, SiteConfig},
};
use jamboagri_contact::{DeliveryProvider, ProviderError, SendRequest};
use tower::ServiceExt;

/// Provider double that stores what would have been emailed.
#[derive(Default)]
pub struct OutboxProvider {
    pub fail_send: bool,
    pub outbox: Mutex<Vec<SendRequest>>,
}

impl OutboxProvider {
    pub fn failing() -> Self {
        Self {
            fail_send: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SendRequest> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for OutboxProvider {
    fn init(&self, _public_key: &str) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn send(&self, request: &SendRequest) -> Result<(), ProviderError> {
        self.outbox.lock().unwrap().push(request.clone());

        if self.fail_send {
            return Err(ProviderError::Rejected {
                status: 500,
                body: "upstream unavailable".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig {
            public_dir: "does-not-exist".to_owned(),
        },
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn configured() -> Config {
    let mut config = config();
    config.email.public_key = Some("public_key".to_owned());
    config.email.service_id = Some("service_jambo".to_owned());
    config.email.template_id = Some("template_inquiry".to_owned());
    config
}

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<OutboxProvider>,
}

pub fn test_app(config: Config, provider: OutboxProvider) -> TestApp {
    let provider = Arc::new(provider);
    let state = AppState::new(config, provider.clone());

    TestApp {
        router: jamboagri::router(state, jamboagri::register_routes),
        provider,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn expect_page(response: Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::OK);
    body_string(response).await
}

pub const VALID_INQUIRY: [(&str, &str); 5] = [
    ("name", "Wanjiru Kamau"),
    ("email", "wanjiru@example.com"),
    ("phone", "0712345678"),
    ("location", "Kerugoya"),
    ("message", "Need 200 banana plantlets for next season"),
];
