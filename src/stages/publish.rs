// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 specflow contributors

//! Publish stage
//!
//! Submits the publication request to Echidna, the W3C /TR/ publication
//! service. Pull-request runs never publish: the stage short-circuits to
//! success without touching the network.
//!
//! Echidna reports most problems out-of-band (to the TR notifications
//! list), so the response body is logged verbatim and not interpreted.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::Stage;
use crate::config::Config;
use crate::console::print_info;
use crate::errors::SpecflowError;
use crate::http::{HttpClient, RequestOptions};

/// Echidna publication endpoint
pub const ECHIDNA_ENDPOINT: &str = "https://labs.w3.org/echidna/api/request";

/// Form body for an Echidna publication request.
/// Field order is the wire order; every key is sent even when empty.
#[derive(Serialize)]
struct PublicationRequest<'a> {
    url: &'a str,
    decision: &'a str,
    token: &'a str,
    cc: &'a str,
}

/// Requests publication of the validated document
pub struct PublishStage {
    client: Box<dyn HttpClient>,
}

impl PublishStage {
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self { client }
    }

    fn build_body(config: &Config) -> Result<String, SpecflowError> {
        serde_urlencoded::to_string(PublicationRequest {
            url: &config.manifest_url,
            decision: &config.decision_url,
            token: &config.token,
            cc: &config.cc,
        })
        .map_err(|e| SpecflowError::FormEncode { source: e })
    }
}

#[async_trait]
impl Stage for PublishStage {
    fn name(&self) -> &str {
        "Publish to /TR/"
    }

    async fn run(&self, config: &Config) -> Result<(), SpecflowError> {
        if config.event.is_pull_request() {
            print_info("Pull request run; skipping publication.");
            return Ok(());
        }

        print_info(
            "If publication fails, check \
             https://lists.w3.org/Archives/Public/public-tr-notifications/",
        );

        let options = RequestOptions {
            method: Method::POST,
            headers: vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            )],
            body: Some(Self::build_body(config)?),
        };

        let response = self.client.request(ECHIDNA_ENDPOINT, options).await?;
        println!("{}", response);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigArgs;
    use crate::http::ResponseBody;
    use std::sync::{Arc, Mutex};

    fn make_config(event: &str) -> Config {
        Config::from_args(ConfigArgs {
            file: Some("spec.html".into()),
            manifest_url: "https://example.org/spec/ECHIDNA".into(),
            decision_url: "https://example.org/minutes#decision".into(),
            token: "secret token".into(),
            cc: "a@example.org,b@example.org".into(),
            event: event.into(),
        })
    }

    /// Records every request instead of touching the network
    struct RecordingClient {
        requests: Arc<Mutex<Vec<(String, RequestOptions)>>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn request(
            &self,
            url: &str,
            options: RequestOptions,
        ) -> Result<ResponseBody, SpecflowError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), options));
            Ok(ResponseBody::Text("OK".to_string()))
        }
    }

    #[tokio::test]
    async fn test_pull_request_runs_never_publish() {
        let client = RecordingClient::new();
        let requests = client.requests.clone();

        let stage = PublishStage::new(Box::new(client));
        stage.run(&make_config("pull_request")).await.unwrap();

        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_push_runs_post_the_form_to_echidna() {
        let client = RecordingClient::new();
        let requests = client.requests.clone();

        let stage = PublishStage::new(Box::new(client));
        stage.run(&make_config("push")).await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);

        let (url, options) = &requests[0];
        assert_eq!(url, ECHIDNA_ENDPOINT);
        assert_eq!(options.method, Method::POST);
        assert_eq!(
            options.headers,
            vec![(
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string()
            )]
        );
        assert_eq!(
            options.body.as_deref(),
            Some(
                "url=https%3A%2F%2Fexample.org%2Fspec%2FECHIDNA\
                 &decision=https%3A%2F%2Fexample.org%2Fminutes%23decision\
                 &token=secret+token\
                 &cc=a%40example.org%2Cb%40example.org"
            )
        );
    }

    #[tokio::test]
    async fn test_empty_parameters_still_send_every_key() {
        let mut config = make_config("push");
        config.manifest_url.clear();
        config.decision_url.clear();
        config.token.clear();
        config.cc.clear();

        let client = RecordingClient::new();
        let requests = client.requests.clone();

        let stage = PublishStage::new(Box::new(client));
        stage.run(&config).await.unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(
            requests[0].1.body.as_deref(),
            Some("url=&decision=&token=&cc=")
        );
    }
}
