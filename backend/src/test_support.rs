//! Helpers for integration tests that need a live server.
//!
//! Compiled for unit tests and behind the `test-support` feature so other
//! crates in the workspace can drive a real backend over HTTP.

use std::net::TcpListener;
use std::thread;

use actix_web::cookie::{Key, SameSite};
use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use tokio::sync::oneshot;

use crate::inbound::http::health::HealthState;
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::outbound::security::Argon2Hasher;
use crate::server::{AppDependencies, build_app, in_memory_http_state};

/// Argon2id with minimal cost so tests do not spend seconds hashing.
///
/// # Panics
/// Never in practice; the parameters are constant and valid.
#[must_use]
pub fn fast_hasher() -> Argon2Hasher {
    let params = match argon2::Params::new(8, 1, 1, None) {
        Ok(params) => params,
        Err(error) => panic!("constant argon2 parameters rejected: {error}"),
    };
    Argon2Hasher::with_params(params)
}

/// HTTP state over a fresh in-memory store.
#[must_use]
pub fn in_memory_state() -> HttpState {
    in_memory_http_state(InMemoryStore::new(), fast_hasher())
}

/// Session settings with a random key and an insecure cookie for plain HTTP.
#[must_use]
pub fn test_session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

/// A backend listening on an ephemeral localhost port.
pub struct TestServer {
    base_url: String,
    handle: ServerHandle,
    state: HttpState,
}

impl TestServer {
    /// Start a server over a fresh in-memory store.
    ///
    /// # Errors
    /// Returns an I/O error when no local port can be bound.
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with(in_memory_state()).await
    }

    /// Start a server over `state`.
    ///
    /// # Errors
    /// Returns an I/O error when no local port can be bound.
    pub async fn spawn_with(state: HttpState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let deps = AppDependencies {
            health_state,
            http_state: web::Data::new(state.clone()),
            session: test_session_settings(),
        };

        // The server gets its own actix system so callers may use any runtime.
        let (started, ready) = oneshot::channel();
        thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                match HttpServer::new(move || build_app(deps.clone()))
                    .workers(1)
                    .listen(listener)
                {
                    Ok(bound) => {
                        let server = bound.run();
                        if started.send(Ok(server.handle())).is_ok() {
                            let _ = server.await;
                        }
                    }
                    Err(error) => {
                        let _ = started.send(Err(error));
                    }
                }
            });
        });
        let handle = ready
            .await
            .map_err(|_| std::io::Error::other("test server thread exited"))??;

        Ok(Self {
            base_url: format!("http://127.0.0.1:{port}"),
            handle,
            state,
        })
    }

    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:41234`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Driving ports behind the server, for arranging data directly.
    #[must_use]
    pub fn state(&self) -> &HttpState {
        &self.state
    }

    /// Stop accepting connections and wait for workers to finish.
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
