//! OAuth helpers for the Connect API.
//!
//! Token exchange goes through the same transport as every other endpoint;
//! the `/oauth2/` path prefix switches the authorization header to the
//! `Client <application_secret>` scheme.
use serde::{Deserialize, Serialize};
use ureq::{http::Method, Agent};

use crate::{client, APIResult, Environment, SquareContext};

/// Response from [`obtain_token`] and [`renew_token`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: String,
    pub merchant_id: String,
}

#[derive(Serialize)]
struct ObtainTokenBody<'a> {
    code: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

#[derive(Serialize)]
struct RenewTokenBody<'a> {
    access_token: &'a str,
}

/// Generates a URL to send a merchant to so they can grant the application
/// access to their account.
///
/// `scope` is a space-separated list of permissions. `session`, if `false`,
/// forces the merchant to sign in even with a valid session. `locale` and
/// `state` are optional; pass an empty string to omit them. All arguments
/// are escaped here, so don't pass pre-escaped values.
#[must_use]
pub fn permission_url(
    environment: Environment,
    client_id: &str,
    scope: &str,
    session: bool,
    locale: &str,
    state: &str,
) -> String {
    let mut url = format!(
        "{}/oauth2/authorize?client_id={}&scope={}&session={session}",
        environment.endpoint_url(),
        escape(client_id),
        escape(scope),
    );
    if !locale.is_empty() {
        url.push_str("&locale=");
        url.push_str(&escape(locale));
    }
    if !state.is_empty() {
        url.push_str("&state=");
        url.push_str(&escape(state));
    }
    url
}

fn escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Exchanges a new merchant's authorization code for a first access token.
///
/// # Errors
///
/// Transport or decode failures from the token endpoint.
pub fn obtain_token(
    ctx: &SquareContext,
    client: &Agent,
    authorization_code: &str,
    application_id: &str,
    application_secret: &str,
) -> APIResult<Token> {
    let body = ObtainTokenBody {
        code: authorization_code,
        client_id: application_id,
        client_secret: application_secret,
    };
    let (token, _) = client::dispatch(
        client,
        Method::POST,
        &ctx.url_for("/oauth2/token"),
        application_secret,
        Some(&body),
    )?;
    Ok(token)
}

/// Renews an expired access token. The upstream refuses tokens older than
/// 30 days.
///
/// # Errors
///
/// Transport or decode failures from the renewal endpoint.
pub fn renew_token(
    ctx: &SquareContext,
    client: &Agent,
    expired_token: &str,
    application_id: &str,
    application_secret: &str,
) -> APIResult<Token> {
    let body = RenewTokenBody {
        access_token: expired_token,
    };
    let path = format!("/oauth2/clients/{application_id}/access-token/renew");
    let (token, _) = client::dispatch(
        client,
        Method::POST,
        &ctx.url_for(&path),
        application_secret,
        Some(&body),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use tiny_http::{Header, Response, Server};
    use ureq::Agent;

    use super::{obtain_token, permission_url};
    use crate::{Environment, SquareContext};

    #[test]
    fn permission_url_escapes_and_omits_empty_parameters() {
        let url = permission_url(
            Environment::Production,
            "app id",
            "PAYMENTS_READ PAYMENTS_WRITE",
            true,
            "",
            "",
        );
        assert_eq!(
            url,
            "https://connect.squareup.com/oauth2/authorize?client_id=app+id&scope=PAYMENTS_READ+PAYMENTS_WRITE&session=true"
        );

        let url = permission_url(
            Environment::Production,
            "app",
            "PAYMENTS_READ",
            false,
            "en-US",
            "csrf&token",
        );
        assert_eq!(
            url,
            "https://connect.squareup.com/oauth2/authorize?client_id=app&scope=PAYMENTS_READ&session=false&locale=en-US&state=csrf%26token"
        );
    }

    #[test]
    fn obtain_token_posts_code_with_client_scheme() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let ctx = SquareContext::new(Environment::Sandbox, "unused".to_string())
            .with_base_url(format!("http://{addr}"));

        let handle = std::thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let url = request.url().to_string();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            request
                .respond(
                    Response::from_string(
                        r#"{"access_token":"fresh","token_type":"bearer","expires_at":"2026-09-05T00:00:00Z","merchant_id":"m1"}"#,
                    )
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                    ),
                )
                .unwrap();
            (url, auth, body)
        });

        let client = Agent::new_with_defaults();
        let token = obtain_token(&ctx, &client, "auth-code", "app-id", "app-secret").unwrap();
        assert_eq!(token.access_token, "fresh");
        assert_eq!(token.merchant_id, "m1");

        let (url, auth, body) = handle.join().unwrap();
        assert_eq!(url, "/oauth2/token");
        assert_eq!(auth.as_deref(), Some("Client app-secret"));
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["code"], "auth-code");
        assert_eq!(parsed["client_id"], "app-id");
        assert_eq!(parsed["client_secret"], "app-secret");
    }
}
