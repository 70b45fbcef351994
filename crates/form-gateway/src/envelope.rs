//! Response Envelope
//!
//! Two wire shapes exist and each endpoint keeps its own:
//! - `{"status": "success"|"error", "message": ...}`
//! - `{"success": true|false, "message"|"error": ..., "redirect_url"?: ...}`
//!
//! Classic form posts answer with a redirect instead. The browser follows it,
//! so a 2xx page body (not JSON) is the success signal for those.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{GatewayError, GatewayResult};

/// Which envelope shape an endpoint answers with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeShape {
    Status,
    Success,
    /// Form post answered by a redirect; a `{status}` JSON body is still honoured
    Redirect,
}

/// Normalized envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub ok: bool,
    /// User-facing text; may be empty
    pub message: String,
    pub redirect_url: Option<String>,
    /// Endpoint-specific fields (`error_type`, counts, ids, ...)
    pub extra: Map<String, Value>,
}

impl Envelope {
    /// `error_type` hint some auth endpoints add to failures
    pub fn error_type(&self) -> Option<&str> {
        self.extra.get("error_type").and_then(Value::as_str)
    }
}

#[derive(Deserialize)]
struct StatusWire {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct SuccessWire {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    redirect_url: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl EnvelopeShape {
    /// Parse a response body. Anything that is not this shape is `Malformed`.
    pub fn parse(&self, body: &str) -> GatewayResult<Envelope> {
        match self {
            EnvelopeShape::Status => {
                let wire: StatusWire = serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
                let ok = match wire.status.as_str() {
                    "success" => true,
                    "error" => false,
                    other => return Err(GatewayError::Malformed(format!("unknown status {:?}", other))),
                };
                Ok(Envelope {
                    ok,
                    message: wire.message.unwrap_or_default(),
                    redirect_url: wire.redirect_url,
                    extra: wire.extra,
                })
            }
            EnvelopeShape::Redirect => {
                if looks_like_json(body) {
                    EnvelopeShape::Status.parse(body)
                } else {
                    Ok(Envelope {
                        ok: true,
                        message: String::new(),
                        redirect_url: None,
                        extra: Map::new(),
                    })
                }
            }
            EnvelopeShape::Success => {
                let wire: SuccessWire = serde_json::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))?;
                Ok(Envelope {
                    ok: wire.success,
                    message: wire.message.or(wire.error).unwrap_or_default(),
                    redirect_url: wire.redirect_url,
                    extra: wire.extra,
                })
            }
        }
    }
}

fn looks_like_json(body: &str) -> bool {
    body.trim_start().starts_with('{')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_shape() {
        let env = EnvelopeShape::Status
            .parse(r#"{"status":"success","message":"Employee updated successfully ✅"}"#)
            .unwrap();
        assert!(env.ok);
        assert_eq!(env.message, "Employee updated successfully ✅");

        let env = EnvelopeShape::Status.parse(r#"{"status":"error","message":"Cannot delete Admin ❌"}"#).unwrap();
        assert!(!env.ok);
    }

    #[test]
    fn test_success_shape_with_redirect_and_extra() {
        let env = EnvelopeShape::Success
            .parse(r#"{"success":true,"message":"Welcome","redirect_url":"/admin/dashboard","role":"admin"}"#)
            .unwrap();
        assert!(env.ok);
        assert_eq!(env.redirect_url.as_deref(), Some("/admin/dashboard"));
        assert_eq!(env.extra.get("role"), Some(&Value::String("admin".into())));
    }

    #[test]
    fn test_success_shape_reads_error_key() {
        let env = EnvelopeShape::Success
            .parse(r#"{"success":false,"error":"Project is closed. Cannot create tasks."}"#)
            .unwrap();
        assert!(!env.ok);
        assert_eq!(env.message, "Project is closed. Cannot create tasks.");
    }

    #[test]
    fn test_error_type_hint() {
        let env = EnvelopeShape::Success
            .parse(r#"{"success":false,"message":"Wrong password","error_type":"password"}"#)
            .unwrap();
        assert_eq!(env.error_type(), Some("password"));
    }

    #[test]
    fn test_shapes_are_not_interchangeable() {
        assert!(matches!(
            EnvelopeShape::Status.parse(r#"{"success":true,"message":"ok"}"#),
            Err(GatewayError::Malformed(_))
        ));
        assert!(matches!(
            EnvelopeShape::Success.parse(r#"{"status":"success"}"#),
            Err(GatewayError::Malformed(_))
        ));
    }

    #[test]
    fn test_garbage_and_unknown_status_are_malformed() {
        assert!(EnvelopeShape::Status.parse("<html>502</html>").is_err());
        assert!(EnvelopeShape::Status.parse(r#"{"status":"pending"}"#).is_err());
    }

    #[test]
    fn test_redirect_shape_page_body_is_success() {
        let env = EnvelopeShape::Redirect
            .parse("<!doctype html><html><title>Projects</title></html>")
            .unwrap();
        assert!(env.ok);
        assert_eq!(env.message, "");
        assert_eq!(env.redirect_url, None);

        assert!(EnvelopeShape::Redirect.parse("").unwrap().ok);
    }

    #[test]
    fn test_redirect_shape_reads_status_json() {
        let env = EnvelopeShape::Redirect
            .parse(r#"{"status":"error","message":"Project name already exists"}"#)
            .unwrap();
        assert!(!env.ok);
        assert_eq!(env.message, "Project name already exists");
        assert!(EnvelopeShape::Redirect.parse(r#"{"status":"later"}"#).is_err());
    }
}
