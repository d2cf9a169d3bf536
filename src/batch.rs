use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use ureq::{http::Method, Agent};
use uuid::Uuid;

use crate::{client, error::APIError, APIResult, SquareContext};

/// Upstream ceiling on the number of requests in a single batch submission.
pub const MAX_BATCH_REQUESTS: usize = 30;

/// An unexecuted request destined for the Submit Batch endpoint.
///
/// Constructing a descriptor performs no network I/O; it is appended to a
/// caller-managed list and submitted later with [`submit_batch`]. Each
/// descriptor carries its own access token because the batch endpoint
/// authenticates entries individually, and a random `request_id` used to
/// match the corresponding [`BatchResponse`] entry. The upstream makes no
/// guarantee that responses come back in submission order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchRequest {
    pub method: String,
    pub relative_path: String,
    pub access_token: String,
    pub body: Option<Value>,
    pub request_id: String,
}

impl BatchRequest {
    fn with_fresh_id(
        method: &Method,
        relative_path: impl Into<String>,
        access_token: impl Into<String>,
        body: Option<Value>,
    ) -> Self {
        Self {
            method: method.as_str().to_owned(),
            relative_path: relative_path.into(),
            access_token: access_token.into(),
            body,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// A body-less descriptor with an arbitrary method, for the handful of
    /// PUT association endpoints that carry no payload.
    #[must_use]
    pub fn new(
        method: Method,
        relative_path: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self::with_fresh_id(&method, relative_path, access_token, None)
    }

    #[must_use]
    pub fn get(relative_path: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_fresh_id(&Method::GET, relative_path, access_token, None)
    }

    #[must_use]
    pub fn delete(relative_path: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_fresh_id(&Method::DELETE, relative_path, access_token, None)
    }

    /// # Errors
    ///
    /// `Json` if the body cannot be serialized.
    pub fn post<B: Serialize>(
        relative_path: impl Into<String>,
        access_token: impl Into<String>,
        body: &B,
    ) -> APIResult<Self> {
        Ok(Self::with_fresh_id(
            &Method::POST,
            relative_path,
            access_token,
            Some(serde_json::to_value(body)?),
        ))
    }

    /// # Errors
    ///
    /// `Json` if the body cannot be serialized.
    pub fn put<B: Serialize>(
        relative_path: impl Into<String>,
        access_token: impl Into<String>,
        body: &B,
    ) -> APIResult<Self> {
        Ok(Self::with_fresh_id(
            &Method::PUT,
            relative_path,
            access_token,
            Some(serde_json::to_value(body)?),
        ))
    }
}

/// One entry of the Submit Batch response array.
///
/// `request_id` echoes the value assigned when the originating
/// [`BatchRequest`] was constructed; correlate on it, never on position.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct BatchResponse {
    pub status_code: u16,
    /// Important response headers, indexed by name. A paginated entry
    /// exposes its continuation under `headers["Link"]`.
    pub headers: Value,
    pub body: Value,
    pub request_id: String,
}

impl BatchResponse {
    /// Decodes the entry body into the shape the originating request expects.
    ///
    /// # Errors
    ///
    /// `Json` if the body does not match `T`.
    pub fn decode_body<T: DeserializeOwned>(&self) -> APIResult<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[derive(Serialize)]
struct SubmitBatchBody<'a> {
    requests: &'a [BatchRequest],
}

/// Submits up to [`MAX_BATCH_REQUESTS`] batched requests in one call.
///
/// # Errors
///
/// `BatchTooLarge` when more than 30 descriptors are passed; this is checked
/// before any network call is made.
pub fn submit_batch(
    ctx: &SquareContext,
    client: &Agent,
    requests: &[BatchRequest],
) -> APIResult<Vec<BatchResponse>> {
    if requests.len() > MAX_BATCH_REQUESTS {
        return Err(APIError::BatchTooLarge(requests.len()));
    }
    log::debug!("submitting batch of {} requests", requests.len());
    let (responses, _) = client::execute_request(
        ctx,
        client,
        Method::POST,
        "/v1/batch",
        Some(&SubmitBatchBody { requests }),
    )?;
    Ok(responses)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use tiny_http::{Header, Response, Server};
    use ureq::Agent;

    use super::{submit_batch, BatchRequest, BatchResponse, MAX_BATCH_REQUESTS};
    use crate::{error::APIError, Environment, SquareContext};

    #[test]
    fn constructors_assign_distinct_ids() {
        let a = BatchRequest::get("/v1/me", "tok");
        let b = BatchRequest::get("/v1/me", "tok");
        assert_eq!(a.method, "GET");
        assert!(!a.request_id.is_empty());
        assert_ne!(a.request_id, b.request_id);

        let d = BatchRequest::delete("/v1/me/timecards/tc1", "tok");
        assert_eq!(d.method, "DELETE");
        assert!(d.body.is_none());
    }

    #[test]
    fn descriptor_serializes_with_upstream_field_names() {
        let descriptor = BatchRequest::get("/v1/me/locations", "tok");
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["method"], "GET");
        assert_eq!(value["relative_path"], "/v1/me/locations");
        assert_eq!(value["access_token"], "tok");
        assert_eq!(value["request_id"], descriptor.request_id.as_str());
    }

    #[test]
    fn oversized_batch_is_rejected_without_network() {
        // A closed port: any attempted connection would fail with a
        // transport error rather than BatchTooLarge.
        let ctx = SquareContext::new(Environment::Sandbox, "tok".to_string())
            .with_base_url("http://127.0.0.1:1");
        let client = Agent::new_with_defaults();

        let requests: Vec<_> = (0..=MAX_BATCH_REQUESTS)
            .map(|i| BatchRequest::get(format!("/v1/me/employees/{i}"), "tok"))
            .collect();
        let err = submit_batch(&ctx, &client, &requests).unwrap_err();
        assert!(matches!(err, APIError::BatchTooLarge(31)));
    }

    #[test]
    fn full_batch_submits_thirty_entries_with_their_ids() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let ctx = SquareContext::new(Environment::Sandbox, "tok".to_string())
            .with_base_url(format!("http://{addr}"));

        let handle = std::thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let url = request.url().to_string();
            request
                .respond(Response::from_string("[]").with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                ))
                .unwrap();
            (url, body)
        });

        let requests: Vec<_> = (0..MAX_BATCH_REQUESTS)
            .map(|i| BatchRequest::get(format!("/v1/me/employees/{i}"), "tok"))
            .collect();
        let client = Agent::new_with_defaults();
        let responses = submit_batch(&ctx, &client, &requests).unwrap();
        assert!(responses.is_empty());

        let (url, body) = handle.join().unwrap();
        assert_eq!(url, "/v1/batch");
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        let entries = parsed["requests"].as_array().unwrap();
        assert_eq!(entries.len(), MAX_BATCH_REQUESTS);
        for (entry, descriptor) in entries.iter().zip(&requests) {
            assert_eq!(entry["request_id"], descriptor.request_id.as_str());
            assert_eq!(entry["method"], "GET");
        }
    }

    #[test]
    fn response_entries_decode_and_correlate_by_id() {
        let s = r#"[
          {
            "status_code": 200,
            "headers": {"Link": "<https://connect.squareup.com/v1/loc0/payments?batch_token=abc>;rel='next'"},
            "body": {"id": "emp1", "first_name": "Ada", "last_name": "Lovelace"},
            "request_id": "id-2"
          },
          {
            "status_code": 404,
            "headers": {},
            "body": {},
            "request_id": "id-1"
          }
        ]"#;
        let responses: Vec<BatchResponse> = serde_json::from_str(s).unwrap();
        assert_eq!(responses.len(), 2);

        // Responses arrive in arbitrary order; find ours by id.
        let ok = responses.iter().find(|r| r.request_id == "id-2").unwrap();
        assert_eq!(ok.status_code, 200);
        let employee: crate::types::Employee = ok.decode_body().unwrap();
        assert_eq!(employee.first_name, "Ada");
    }
}
