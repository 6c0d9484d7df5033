//! Session bootstrap middleware.
//!
//! Wraps every route: resolves the visitor's session id from the
//! `SESSION_ID` cookie (or mints a fresh one), hands it to the inner
//! handler through request extensions, and issues the cookie on the way
//! out only when the request arrived without one. Handlers never touch
//! cookies themselves.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::session::SessionId;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "SESSION_ID";

/// Resolve or create the session id for this request.
///
/// The same resolved id is both given to the handler and set in the
/// cookie, so a first-contact submission lands in the session the
/// browser will present next time. The cookie carries no `Secure` or
/// `HttpOnly` flags and no expiry, matching the existing contract.
pub async fn session_bootstrap(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let presented = jar
        .get(SESSION_COOKIE)
        .map(|cookie| SessionId::from(cookie.value()));
    let first_contact = presented.is_none();
    let session_id = presented.unwrap_or_else(SessionId::generate);

    request.extensions_mut().insert(session_id.clone());
    let response = next.run(request).await;

    if first_contact {
        let jar = jar.add(Cookie::new(SESSION_COOKIE, session_id.to_string()));
        (jar, response).into_response()
    } else {
        response
    }
}
