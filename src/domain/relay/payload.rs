use serde_json::{value::RawValue, Map, Value};

use super::dto::{HttpRequest, LogEntry};
use crate::utils::AppError;

/// Derive the payload excerpt shown in the Slack message.
///
/// Sources are tried in order, the first populated one wins:
/// failed HTTP request, text payload, JSON payload, proto payload.
pub fn extract_payload(entry: &LogEntry) -> Result<String, AppError> {
    if let Some(request) = entry.http_request.as_ref().filter(|r| r.status != 0) {
        return Ok(describe_request(request));
    }

    if let Some(text) = entry.text_payload.as_deref().filter(|t| !t.is_empty()) {
        return Ok(text.to_string());
    }

    if let Some(json) = &entry.json_payload {
        return extract_json_payload(json);
    }

    Ok(entry
        .proto_payload
        .as_ref()
        .map(|raw| raw.get().to_string())
        .unwrap_or_default())
}

fn describe_request(request: &HttpRequest) -> String {
    format!(
        "Error when calling \n`{} {}`\n (Status {}) (User-Agent : {}) ",
        request.request_method, request.request_url, request.status, request.user_agent
    )
}

/// Summarise a structured payload from its well-known keys.
///
/// `log_message` replaces whatever `jobName`/`url` produced, `grpc_status_code`
/// is appended last. Without any of them the raw JSON is returned in parentheses.
fn extract_json_payload(json: &RawValue) -> Result<String, AppError> {
    let raw = json.get();
    let fields: Map<String, Value> = serde_json::from_str(raw)
        .map_err(|e| AppError::extraction(raw, format!("jsonPayload is not a JSON object: {}", e)))?;

    let mut payload = String::new();
    if let Some(job_name) = string_field(&fields, "jobName", raw)? {
        payload = job_name.to_string();
    }
    if let Some(url) = string_field(&fields, "url", raw)? {
        payload.push(' ');
        payload.push_str(url);
    }
    if let Some(log_message) = string_field(&fields, "log_message", raw)? {
        payload = log_message.to_string();
    }
    if let Some(code) = string_field(&fields, "grpc_status_code", raw)? {
        payload.push(' ');
        payload.push_str(code);
    }

    if payload.is_empty() {
        return Ok(format!(" ({})", raw));
    }
    Ok(payload)
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    raw: &str,
) -> Result<Option<&'a str>, AppError> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(AppError::extraction(
            raw,
            format!("jsonPayload field `{}` is not a string: {}", key, other),
        )),
    }
}
