use serde::{de::DeserializeOwned, Serialize};
use ureq::{
    http::{Method, Request},
    Agent, SendBody,
};

mod context;
mod pagination;
pub use context::SquareContext;
pub use pagination::NextPage;

use crate::APIResult;

/// Paths under the OAuth API authenticate with the application secret rather
/// than a merchant access token.
fn auth_scheme(url: &str) -> &'static str {
    if url.contains("oauth2") {
        "Client"
    } else {
        "Bearer"
    }
}

pub(crate) fn build_request<B>(
    method: Method,
    url: &str,
    access_token: &str,
    body: Option<&B>,
) -> APIResult<Request<SendBody<'static>>>
where
    B: Serialize,
{
    let mut request = Request::builder()
        .method(method.clone())
        .uri(url)
        .header(
            "Authorization",
            format!("{} {access_token}", auth_scheme(url)),
        )
        .header("Accept", "application/json");

    if body.is_some() && (method == Method::POST || method == Method::PUT) {
        request = request.header("Content-Type", "application/json");
    }

    let request = match body {
        Some(body) => {
            let json_bytes = serde_json::to_vec(body)?;
            let reader = std::io::Cursor::new(json_bytes);
            request.body(SendBody::from_owned_reader(reader))
        }
        None => request.body(SendBody::none()),
    }?;

    log::debug!(
        "Built Request with params: {}-{}-{}",
        url,
        method,
        if body.is_some() {
            "With JSON Body"
        } else {
            "No JSON Body"
        },
    );

    Ok(request)
}

/// Executes a request against an absolute URL and decodes the JSON response.
///
/// Returns the decoded value together with the continuation cursor parsed
/// from the `Link` response header, if the server sent one.
pub(crate) fn dispatch<T, B>(
    client: &Agent,
    method: Method,
    url: &str,
    access_token: &str,
    body: Option<&B>,
) -> APIResult<(T, Option<NextPage>)>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = build_request(method, url, access_token, body)?;
    let response = client.run(request)?;
    let next = pagination::next_page_from_headers(response.headers(), access_token)?;
    let decoded = response.into_body().read_json::<T>()?;
    Ok((decoded, next))
}

pub(crate) fn execute_request<T, B>(
    ctx: &SquareContext,
    client: &Agent,
    method: Method,
    path: &str,
    body: Option<&B>,
) -> APIResult<(T, Option<NextPage>)>
where
    T: DeserializeOwned,
    B: Serialize,
{
    dispatch(client, method, &ctx.url_for(path), ctx.access_token(), body)
}

/// Delete endpoints return no content, so the response body is never read.
pub(crate) fn execute_delete(ctx: &SquareContext, client: &Agent, path: &str) -> APIResult<()> {
    let request =
        build_request::<()>(Method::DELETE, &ctx.url_for(path), ctx.access_token(), None)?;
    let response = client.run(request)?;
    log::debug!("DELETE {} returned {}", path, response.status());
    Ok(())
}

/// Appends percent-encoded query pairs to a relative path.
pub(crate) fn append_query(mut path: String, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path;
    }
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
        .finish();
    path.push('?');
    path.push_str(&query);
    path
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tiny_http::{Header, Response, Server};
    use ureq::{http::Method, Agent};

    use super::{append_query, execute_delete, execute_request, SquareContext};
    use crate::Environment;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Widget {
        id: String,
        name: String,
    }

    fn test_context(server: &Server) -> SquareContext {
        let addr = server.server_addr().to_ip().expect("tcp listener");
        SquareContext::new(Environment::Sandbox, "sandbox-token".to_string())
            .with_base_url(format!("http://{addr}"))
    }

    fn json_header() -> Header {
        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
    }

    #[test]
    fn get_decodes_json_response() {
        let _ = env_logger::builder().is_test(true).try_init();
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server);

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            let url = request.url().to_string();
            let response = Response::from_string(r#"{"id":"w1","name":"Widget One"}"#)
                .with_header(json_header());
            request.respond(response).unwrap();
            url
        });

        let client = Agent::new_with_defaults();
        let (widget, next): (Widget, _) =
            execute_request(&ctx, &client, Method::GET, "/v1/me", None::<&()>).unwrap();

        assert_eq!(
            widget,
            Widget {
                id: "w1".to_string(),
                name: "Widget One".to_string()
            }
        );
        assert!(next.is_none());
        assert_eq!(handle.join().unwrap(), "/v1/me");
    }

    #[test]
    fn resource_paths_use_bearer_scheme() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server);

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            request
                .respond(Response::from_string("{}").with_header(json_header()))
                .unwrap();
            auth
        });

        let client = Agent::new_with_defaults();
        let (_, _): (serde_json::Value, _) =
            execute_request(&ctx, &client, Method::GET, "/v1/me/locations", None::<&()>).unwrap();

        assert_eq!(handle.join().unwrap().as_deref(), Some("Bearer sandbox-token"));
    }

    #[test]
    fn oauth_paths_use_client_scheme() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server).with_access_token("app-secret".to_string());

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            request
                .respond(Response::from_string("{}").with_header(json_header()))
                .unwrap();
            auth
        });

        let client = Agent::new_with_defaults();
        let (_, _): (serde_json::Value, _) = execute_request(
            &ctx,
            &client,
            Method::GET,
            "/oauth2/clients/app/plans",
            None::<&()>,
        )
        .unwrap();

        assert_eq!(handle.join().unwrap().as_deref(), Some("Client app-secret"));
    }

    #[test]
    fn link_header_yields_cursor_and_its_absence_yields_none() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server);
        let addr = server.server_addr().to_ip().unwrap();
        let next_uri = format!("http://{addr}/v1/loc0/payments?batch_token=tok42");
        let link_value = format!("<{next_uri}>;rel='next'");

        let handle = std::thread::spawn(move || {
            for _ in 0..2 {
                let request = server.recv().unwrap();
                let first_page = request.url().ends_with("/payments");
                let mut response = Response::from_string("[]").with_header(json_header());
                if first_page {
                    response = response.with_header(
                        Header::from_bytes(&b"Link"[..], link_value.as_bytes()).unwrap(),
                    );
                }
                request.respond(response).unwrap();
            }
        });

        let client = Agent::new_with_defaults();
        let (_, next): (serde_json::Value, _) =
            execute_request(&ctx, &client, Method::GET, "/v1/loc0/payments", None::<&()>).unwrap();

        let next = next.expect("first page carries a continuation");
        assert_eq!(next.uri(), next_uri);

        // The terminal page has no Link header and therefore no cursor.
        let (_, after): (serde_json::Value, _) = next.fetch(&client).unwrap();
        assert!(after.is_none());
        handle.join().unwrap();
    }

    #[test]
    fn cursor_fetch_reuses_header_uri_and_original_token() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server);
        let addr = server.server_addr().to_ip().unwrap();
        let link_value = format!("<http://{addr}/v1/loc0/payments?batch_token=tok42>;rel='next'");

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            request
                .respond(
                    Response::from_string("[]")
                        .with_header(json_header())
                        .with_header(
                            Header::from_bytes(&b"Link"[..], link_value.as_bytes()).unwrap(),
                        ),
                )
                .unwrap();

            let request = server.recv().unwrap();
            let url = request.url().to_string();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            request
                .respond(Response::from_string("[]").with_header(json_header()))
                .unwrap();
            (url, auth)
        });

        let client = Agent::new_with_defaults();
        let (_, next): (serde_json::Value, _) =
            execute_request(&ctx, &client, Method::GET, "/v1/loc0/payments", None::<&()>).unwrap();
        let (_, _): (serde_json::Value, _) = next.unwrap().fetch(&client).unwrap();

        let (url, auth) = handle.join().unwrap();
        assert_eq!(url, "/v1/loc0/payments?batch_token=tok42");
        assert_eq!(auth.as_deref(), Some("Bearer sandbox-token"));
    }

    #[test]
    fn delete_skips_body_decode() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let ctx = test_context(&server);

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            // Not JSON; a delete must succeed regardless.
            request
                .respond(Response::from_string("no content here"))
                .unwrap();
        });

        let client = Agent::new_with_defaults();
        execute_delete(&ctx, &client, "/v1/me/timecards/tc1").unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn append_query_encodes_pairs() {
        assert_eq!(append_query("/v1/me/roles".to_string(), &[]), "/v1/me/roles");
        assert_eq!(
            append_query(
                "/v1/me/employees".to_string(),
                &[
                    ("order", "DESC".to_string()),
                    ("status", "ACTIVE ONLY".to_string()),
                ]
            ),
            "/v1/me/employees?order=DESC&status=ACTIVE+ONLY"
        );
    }
}
