//! Request/response plumbing for the "try it now" console.
//!
//! Every form submission flows through [`execute`]: one network call in, one
//! [`ApiExchange`] out. Success, domain-level failure, and transport failure
//! all end in the same place, so the response view renders exactly once per
//! submission.

pub mod endpoints;

use gloo_net::http::Request;
use serde_json::Value;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const PLAYER_ID_HEADER: &str = "playerid";

/// HTTP method of a console call. The documented API only uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully built request, ready for [`execute`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Outcome of a call, keyed off the HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// HTTP 200: show the response body
    Success { body: Value },
    /// HTTP 400: domain-level failure with an application error code
    AppError { code: String, message: String },
    /// Any other status, or a transport failure (`status: None`)
    Failed { status: Option<u16>, message: String },
}

/// Everything the response view needs to render one exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiExchange {
    pub method: Method,
    pub url: String,
    /// Request headers, pretty-printed as a JSON object
    pub request_headers: String,
    /// Pretty-printed request body, `None` for body-less calls
    pub request_body: Option<String>,
    pub outcome: Outcome,
}

impl ApiExchange {
    /// Status shown in the header block; `-` when the call never got one.
    pub fn status_display(&self) -> String {
        match &self.outcome {
            Outcome::Success { .. } => "200".to_string(),
            Outcome::AppError { .. } => "400".to_string(),
            Outcome::Failed {
                status: Some(status),
                ..
            } => status.to_string(),
            Outcome::Failed { status: None, .. } => "-".to_string(),
        }
    }
}

/// Classify a parsed response by HTTP status.
///
/// Statuses other than 200 and 400 get the same treatment as a transport
/// failure (message only), but keep their number for display.
pub fn classify(status: u16, body: Value) -> Outcome {
    match status {
        200 => Outcome::Success { body },
        400 => {
            // Read the code straight off the body: a reply missing the rest
            // of the error envelope still keeps its code.
            let code = body
                .get("errorCode")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Outcome::AppError {
                code,
                message: compact(&body),
            }
        }
        other => Outcome::Failed {
            status: Some(other),
            message: compact(&body),
        },
    }
}

pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn compact(value: &Value) -> String {
    value.to_string()
}

fn headers_pretty(headers: &[(String, String)]) -> String {
    let map: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    pretty(&Value::Object(map))
}

/// Issue the call and fold every possible failure into an [`ApiExchange`].
///
/// The response body is parsed as JSON unconditionally; a reply that is not
/// JSON lands in the same branch as a rejected fetch.
pub async fn execute(call: ApiCall) -> ApiExchange {
    let request_headers = headers_pretty(&call.headers);
    let request_body = call.body.as_ref().map(pretty);

    let outcome = send(&call)
        .await
        .unwrap_or_else(|message| Outcome::Failed {
            status: None,
            message,
        });

    ApiExchange {
        method: call.method,
        url: call.url,
        request_headers,
        request_body,
        outcome,
    }
}

async fn send(call: &ApiCall) -> Result<Outcome, String> {
    let mut request = match call.method {
        Method::Get => Request::get(&call.url),
        Method::Post => Request::post(&call.url),
    };
    for (name, value) in &call.headers {
        request = request.header(name, value);
    }

    let response = match &call.body {
        Some(body) => request
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await,
        None => request.send().await,
    }
    .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    let body = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(classify(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exchange_with(outcome: Outcome) -> ApiExchange {
        ApiExchange {
            method: Method::Get,
            url: "http://localhost:4000/ping".to_string(),
            request_headers: headers_pretty(&[(
                "Content-Type".to_string(),
                CONTENT_TYPE_JSON.to_string(),
            )]),
            request_body: None,
            outcome,
        }
    }

    #[test]
    fn status_200_is_success() {
        let body = json!({"playerID": "abc123"});
        assert_eq!(
            classify(200, body.clone()),
            Outcome::Success { body }
        );
    }

    #[test]
    fn status_400_extracts_code_and_serialized_body() {
        let body = serde_json::to_value(contracts::game::ApiErrorBody {
            error_code: "BAD_FIELD".to_string(),
            message: "invalid field".to_string(),
        })
        .unwrap();
        let outcome = classify(400, body);
        assert_eq!(
            outcome,
            Outcome::AppError {
                code: "BAD_FIELD".to_string(),
                message: r#"{"errorCode":"BAD_FIELD","message":"invalid field"}"#.to_string(),
            }
        );
    }

    #[test]
    fn status_400_with_a_bare_code_still_extracts_it() {
        let outcome = classify(400, json!({"errorCode": "BAD_FIELD"}));
        match outcome {
            Outcome::AppError { code, message } => {
                assert_eq!(code, "BAD_FIELD");
                assert_eq!(message, r#"{"errorCode":"BAD_FIELD"}"#);
            }
            other => panic!("expected AppError, got {:?}", other),
        }
    }

    #[test]
    fn status_400_without_error_envelope_falls_back_to_empty_code() {
        let outcome = classify(400, json!({"detail": "nope"}));
        match outcome {
            Outcome::AppError { code, .. } => assert_eq!(code, ""),
            other => panic!("expected AppError, got {:?}", other),
        }
    }

    #[test]
    fn other_statuses_keep_their_number_in_the_failed_branch() {
        let outcome = classify(503, json!({"message": "down"}));
        assert_eq!(
            outcome,
            Outcome::Failed {
                status: Some(503),
                message: r#"{"message":"down"}"#.to_string(),
            }
        );
        assert_eq!(exchange_with(outcome).status_display(), "503");
    }

    #[test]
    fn transport_failure_displays_placeholder_status() {
        let exchange = exchange_with(Outcome::Failed {
            status: None,
            message: "Failed to send request: network error".to_string(),
        });
        assert_eq!(exchange.status_display(), "-");
    }

    #[test]
    fn success_and_app_error_display_their_statuses() {
        assert_eq!(
            exchange_with(Outcome::Success { body: json!({}) }).status_display(),
            "200"
        );
        assert_eq!(
            exchange_with(Outcome::AppError {
                code: "X".to_string(),
                message: "{}".to_string(),
            })
            .status_display(),
            "400"
        );
    }

    #[test]
    fn headers_render_as_pretty_json_object() {
        let rendered = headers_pretty(&[
            ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
            (PLAYER_ID_HEADER.to_string(), "abc123".to_string()),
        ]);
        assert_eq!(
            rendered,
            "{\n  \"Content-Type\": \"application/json\",\n  \"playerid\": \"abc123\"\n}"
        );
    }
}
