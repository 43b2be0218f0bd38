//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockAccountService, MockClientsService, MockJobsService, MockOrdersService, MockProfileQuery,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Disables the `Secure` flag for local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// One mock per driving port. Set expectations, then call
/// [`MockPorts::into_state`].
#[derive(Default)]
pub struct MockPorts {
    /// Account port.
    pub accounts: MockAccountService,
    /// Profile port.
    pub profiles: MockProfileQuery,
    /// Clients port.
    pub clients: MockClientsService,
    /// Jobs port.
    pub jobs: MockJobsService,
    /// Orders port.
    pub orders: MockOrdersService,
}

impl MockPorts {
    /// Move the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState {
            accounts: Arc::new(self.accounts),
            profiles: Arc::new(self.profiles),
            clients: Arc::new(self.clients),
            jobs: Arc::new(self.jobs),
            orders: Arc::new(self.orders),
        }
    }
}

async fn sign_in_as(session: SessionContext, path: web::Path<i32>) -> Result<HttpResponse, Error> {
    session.persist_user(UserId::new(path.into_inner()))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Every `/api/v1` route over mocked ports, plus `POST /test/sign-in/{id}`
/// which opens a session without going through login.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(test_session_middleware())
        .route("/test/sign-in/{id}", web::post().to(sign_in_as))
        .service(web::scope("/api/v1").configure(super::configure))
}

/// Extract the session cookie set by a response.
pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Open a session for `user_id` on an app built by [`test_app`].
pub async fn signed_in(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    user_id: i32,
) -> Cookie<'static> {
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri(&format!("/test/sign-in/{user_id}"))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success());
    session_cookie(&res)
}

/// Decode a response body as JSON.
pub async fn json_body(res: ServiceResponse) -> Value {
    let body = actix_test::read_body(res).await;
    serde_json::from_slice(&body).expect("JSON body")
}
