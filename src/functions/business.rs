use square_types::Merchant;
use ureq::{http::Method, Agent};

use crate::{
    batch::BatchRequest,
    client::execute_request,
    APIResult, NextPage, SquareContext,
};

/// Provides a business's account information, such as its name and
/// associated email address.
pub fn retrieve_business(ctx: &SquareContext, client: &Agent) -> APIResult<Merchant> {
    let (merchant, _) = execute_request(ctx, client, Method::GET, "/v1/me", None::<&()>)?;
    Ok(merchant)
}

/// Provides details for a business's locations, including their IDs.
///
/// The `account_capabilities` array of each returned [`Merchant`] indicates
/// which capabilities the location has enabled.
pub fn list_locations(
    ctx: &SquareContext,
    client: &Agent,
) -> APIResult<(Vec<Merchant>, Option<NextPage>)> {
    execute_request(ctx, client, Method::GET, "/v1/me/locations", None::<&()>)
}

/// Batch descriptor equivalent of [`retrieve_business`].
#[must_use]
pub fn retrieve_business_batch(access_token: &str) -> BatchRequest {
    BatchRequest::get("/v1/me", access_token)
}

/// Batch descriptor equivalent of [`list_locations`].
#[must_use]
pub fn list_locations_batch(access_token: &str) -> BatchRequest {
    BatchRequest::get("/v1/me/locations", access_token)
}

#[cfg(test)]
mod tests {
    use tiny_http::{Header, Response, Server};
    use ureq::Agent;

    use super::retrieve_business;
    use crate::{Environment, SquareContext};

    #[test]
    fn retrieve_business_populates_the_merchant() {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let ctx = SquareContext::new(Environment::Sandbox, "tok".to_string())
            .with_base_url(format!("http://{addr}"));

        let handle = std::thread::spawn(move || {
            let request = server.recv().unwrap();
            assert_eq!(request.url(), "/v1/me");
            request
                .respond(
                    Response::from_string(
                        r#"{
                          "id": "m1",
                          "name": "Coffee & Toffee",
                          "email": "owner@example.com",
                          "account_type": "LOCATION",
                          "currency_code": "USD"
                        }"#,
                    )
                    .with_header(
                        Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
                    ),
                )
                .unwrap();
        });

        let client = Agent::new_with_defaults();
        let merchant = retrieve_business(&ctx, &client).unwrap();
        assert_eq!(merchant.id, "m1");
        assert_eq!(merchant.name, "Coffee & Toffee");
        assert_eq!(merchant.email, "owner@example.com");
        assert_eq!(merchant.account_type, "LOCATION");
        assert_eq!(merchant.currency_code, "USD");
        handle.join().unwrap();
    }
}
