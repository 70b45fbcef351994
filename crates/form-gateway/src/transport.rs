//! HTTP Transport
//!
//! The gateway talks to the server only through [`Transport`], so tests can
//! script responses. [`HttpTransport`] is the reqwest implementation; compiled
//! to wasm32 it drives the browser's `fetch`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: &str, value: &str) -> Self {
        FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
}

impl Request {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: RequestBody::Empty,
        }
    }

    pub fn post(path: &str, body: RequestBody) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body,
        }
    }
}

/// Raw response: status code and body text
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network seam.
///
/// Futures are not `Send`: everything runs on the browser's single UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> GatewayResult<Response>;
}

/// reqwest-backed transport rooted at the page origin
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an endpoint path; absolute inputs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn multipart_form(parts: Vec<FormPart>) -> GatewayResult<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let file = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| GatewayError::Transport(e.to_string()))?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> GatewayResult<Response> {
        let url = self.url(&request.path);
        log::debug!("[HTTP] {:?} {}", request.method, url);

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("[HTTP] {} -> {}", url, status);
        Ok(Response { status, body })
    }
}
