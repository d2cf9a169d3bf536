//! One wrapper function per Connect v1 operation, grouped by API area.
//!
//! Every wrapper fixes its HTTP method and path template and delegates to
//! the shared transport in [`crate::client`]. Each also has a `*_batch`
//! counterpart that builds the equivalent unexecuted
//! [`crate::batch::BatchRequest`] for submission through
//! [`crate::batch::submit_batch`].
//!
//! All list operations return `(Vec<T>, Option<NextPage>)`; the cursor is
//! `None` on the terminal page or when the server chose not to paginate.

pub mod business;
pub mod catalog;
pub mod employees;
pub mod items;
pub mod orders;
pub mod pages;
pub mod payments;
pub mod subscriptions;
pub mod webhooks;

/// Renders a `Some` filter into a query pair.
pub(crate) fn push_pair<T: std::fmt::Display>(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&T>,
) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
