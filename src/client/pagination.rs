use serde::de::DeserializeOwned;
use ureq::{
    http::{HeaderMap, Method},
    Agent,
};
use url::Url;

use crate::{batch::BatchRequest, error::APIError, APIResult};

/// Continuation handle for a paginated list operation.
///
/// A cursor wraps the URI from the `Link` response header together with the
/// access token of the originating call. Consuming it issues a fresh,
/// independent request; fetching the same cursor twice issues two calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPage {
    uri: String,
    access_token: String,
}

impl NextPage {
    /// The header has the shape `<uri>;rel='next'`; only the URI is kept.
    pub(crate) fn from_link_header(header: &str, access_token: &str) -> APIResult<Self> {
        let target = header.split(';').next().unwrap_or_default().trim();
        let uri = target
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| APIError::InvalidLinkHeader(header.to_string()))?;
        Ok(Self {
            uri: uri.to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Fetches the next page of results into `T`, yielding a further cursor
    /// if the response is not the terminal page.
    pub fn fetch<T: DeserializeOwned>(&self, client: &Agent) -> APIResult<(T, Option<NextPage>)> {
        super::dispatch(client, Method::GET, &self.uri, &self.access_token, None::<&()>)
    }

    /// Converts the cursor into an unexecuted batch descriptor so the next
    /// page can be fetched as part of a batch submission instead.
    #[must_use]
    pub fn as_batch_request(&self) -> BatchRequest {
        BatchRequest::get(self.relative_path(), &self.access_token)
    }

    /// The absolute URI the cursor points at.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    fn relative_path(&self) -> String {
        match Url::parse(&self.uri) {
            Ok(parsed) => match parsed.query() {
                Some(query) => format!("{}?{query}", parsed.path()),
                None => parsed.path().to_string(),
            },
            Err(_) => self.uri.clone(),
        }
    }
}

pub(crate) fn next_page_from_headers(
    headers: &HeaderMap,
    access_token: &str,
) -> APIResult<Option<NextPage>> {
    match headers.get("Link") {
        Some(value) => {
            let header = value
                .to_str()
                .map_err(|err| APIError::InvalidLinkHeader(err.to_string()))?;
            Ok(Some(NextPage::from_link_header(header, access_token)?))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::NextPage;
    use crate::error::APIError;

    const LINK: &str =
        "<https://connect.squareup.com/v1/loc0/payments?batch_token=abc123>;rel='next'";

    #[test]
    fn parses_uri_from_link_header() {
        let next = NextPage::from_link_header(LINK, "tok").unwrap();
        assert_eq!(
            next.uri(),
            "https://connect.squareup.com/v1/loc0/payments?batch_token=abc123"
        );
    }

    #[test]
    fn rejects_header_without_angle_brackets() {
        let err = NextPage::from_link_header("garbage;rel='next'", "tok").unwrap_err();
        assert!(matches!(err, APIError::InvalidLinkHeader(_)));
    }

    #[test]
    fn as_batch_request_keeps_relative_path_and_token() {
        let next = NextPage::from_link_header(LINK, "tok").unwrap();
        let descriptor = next.as_batch_request();
        assert_eq!(descriptor.method, "GET");
        assert_eq!(descriptor.relative_path, "/v1/loc0/payments?batch_token=abc123");
        assert_eq!(descriptor.access_token, "tok");
        assert!(descriptor.body.is_none());
        assert!(!descriptor.request_id.is_empty());
    }
}
