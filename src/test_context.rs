use crate::test_case::CaseFailure;
use anyhow::Context;
use reqwest::Method;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Captured response of a single request.
#[derive(Debug, Clone)]
pub struct ResponseData {
    pub status: u16,
    pub body: String,
    pub json: Option<Value>,
    pub exec_duration: Duration,
}

// Shared by every test case of a run: the http client and the base endpoint.
// Both are fixed at setup and only read afterwards.
#[derive(Debug)]
pub struct TestCtx {
    pub client: reqwest::blocking::Client,
    base_url: String,
}

impl TestCtx {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("failed to create http client")?;

        Ok(TestCtx {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base endpoint and a case path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client.request(method, self.url_for(path))
    }

    /// Fires the request using a blocking call and captures status and body.
    pub fn exec(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<ResponseData, CaseFailure> {
        let start = Instant::now();
        let response = request
            .send()
            .map_err(|e| CaseFailure::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CaseFailure::Transport(format!("failed to read response body: {}", e)))?;
        let exec_duration = start.elapsed();

        tracing::debug!(status, ?exec_duration, body = %body, "response received");

        // A 204 or an html error page simply has no json.
        let json = serde_json::from_str::<Value>(&body).ok();

        Ok(ResponseData {
            status,
            body,
            json,
            exec_duration,
        })
    }
}

impl ResponseData {
    pub fn print_response_info(&self) {
        println!("Response Info:");
        println!("\tStatus: {}", self.status);

        match &self.json {
            Some(json) => {
                let pretty_json = serde_json::to_string_pretty(json).unwrap_or_default();
                let indented_json = pretty_json.replace('\n', "\n\t");
                println!("\tBody: {}", indented_json);
            }
            None if self.body.is_empty() => println!("\tBody: <empty>"),
            None => println!("\tBody: {}", self.body),
        }
        println!("\tExecution Time: {:?}", self.exec_duration);
    }
}
