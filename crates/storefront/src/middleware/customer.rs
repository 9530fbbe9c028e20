//! Viewer identity extractor.
//!
//! The catalog only needs an opaque viewer identity for its access
//! predicate. The external auth flow stores the signed-in customer id in
//! the session; this extractor reads it back, resolving to `None` for
//! anonymous viewers.

use axum::{extract::FromRequestParts, http::request::Parts};
use golden_fig_core::CustomerId;
use tower_sessions::Session;

/// Session keys shared with the external auth flow.
pub mod session_keys {
    /// Signed-in customer id, stored as an `i32`.
    pub const CURRENT_CUSTOMER: &str = "customer.id";
}

/// Extractor that optionally gets the current customer id.
///
/// Never rejects: a missing session layer or an empty session both resolve
/// to an anonymous viewer.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     OptionalCustomer(viewer): OptionalCustomer,
/// ) -> impl IntoResponse {
///     match viewer {
///         Some(id) => format!("customer {id}"),
///         None => "guest".to_string(),
///     }
/// }
/// ```
pub struct OptionalCustomer(pub Option<CustomerId>);

impl<S> FromRequestParts<S> for OptionalCustomer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<i32>(session_keys::CURRENT_CUSTOMER)
                .await
                .ok()
                .flatten()
                .map(CustomerId::new),
            None => None,
        };

        Ok(Self(customer))
    }
}
