//! Low-level JSON-RPC transport for the FreeIPA API.
//!
//! FreeIPA exposes every administrative operation through a single endpoint
//! (`{base}/json`). Authentication is form-based against
//! `{base}/session/login_password`; the server answers with session cookies
//! that must be replayed on every RPC call, together with a `Referer` header
//! pointing at the base path — the server's CSRF protection rejects requests
//! without it.

use crate::error::{IpaError, IpaResult};
use crate::types::RpcResponse;
use idmb_core::config::FreeIpaSettings;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, ACCEPT, COOKIE, REFERER, SET_COOKIE};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Session-scoped mutable state — one cookie and one flag per client.
#[derive(Debug, Default)]
struct SessionState {
    authenticated: bool,
    cookie: Option<String>,
}

/// JSON-RPC client holding one authenticated session against one FreeIPA
/// server.
///
/// Safe to share between concurrent callers: the request-id counter is
/// atomic and the session state sits behind an async `RwLock` written only
/// by [`authenticate`](Self::authenticate) and
/// [`invalidate_session`](Self::invalidate_session).
pub struct FreeIpaClient {
    http: Client,
    base_url: String,
    username: String,
    password: SecretString,
    session: RwLock<SessionState>,
    request_id: AtomicU64,
}

impl FreeIpaClient {
    /// Build a client from settings plus the environment-sourced password.
    pub fn new(settings: &FreeIpaSettings, password: SecretString) -> IpaResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .danger_accept_invalid_certs(!settings.verify_tls)
            .build()
            .map_err(|e| IpaError::Network(format!("failed to build HTTP client: {}", e)))?;

        let server = settings.server.trim_end_matches('/');
        let base_url = if server.starts_with("http://") || server.starts_with("https://") {
            format!("{}/ipa", server)
        } else {
            format!("https://{}/ipa", server)
        };

        info!("FreeIPA client created for {}", base_url);

        Ok(FreeIpaClient {
            http,
            base_url,
            username: settings.username.clone(),
            password,
            session: RwLock::new(SessionState::default()),
            request_id: AtomicU64::new(0),
        })
    }

    /// The server base path, e.g. `https://ipa.example.com/ipa`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.authenticated
    }

    /// Drop the session so the next operation must re-authenticate. Called
    /// by the dispatcher when it observes an authorization failure; the
    /// client itself never retries.
    pub async fn invalidate_session(&self) {
        let mut session = self.session.write().await;
        session.authenticated = false;
        session.cookie = None;
        debug!("FreeIPA session invalidated");
    }

    /// Log in with the stored principal and credential.
    ///
    /// Safe to call again after session expiry — the stored cookie is
    /// overwritten on every successful login.
    pub async fn authenticate(&self) -> IpaResult<()> {
        let url = format!("{}/session/login_password", self.base_url);
        debug!("FreeIPA login → {} as {}", url, self.username);

        let resp = self
            .http
            .post(&url)
            .header(ACCEPT, "text/plain")
            .header(REFERER, self.base_url.clone())
            .form(&[
                ("user", self.username.as_str()),
                ("password", self.password.expose_secret().as_str()),
            ])
            .send()
            .await
            .map_err(|e| IpaError::Network(format!("login request failed: {}", e)))?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!("FreeIPA login rejected for {}: HTTP {}", self.username, status);
            return Err(IpaError::AuthenticationFailed {
                status: status.as_u16(),
            });
        }

        let cookie = join_session_cookies(resp.headers());
        let mut session = self.session.write().await;
        session.cookie = cookie;
        session.authenticated = true;
        info!("FreeIPA session established for {}", self.username);
        Ok(())
    }

    /// The single primitive every typed operation funnels through.
    ///
    /// Builds the fixed two-slot envelope, assigns the next request id, and
    /// demultiplexes the doubly-nested response, returning the inner
    /// `result.result` payload.
    pub async fn call(
        &self,
        method: &str,
        args: Vec<Value>,
        options: Map<String, Value>,
    ) -> IpaResult<Value> {
        let cookie = {
            let session = self.session.read().await;
            if !session.authenticated {
                return Err(IpaError::NotAuthenticated);
            }
            session.cookie.clone()
        };

        let id = self.next_request_id();
        let body = json!({
            "method": method,
            "params": build_params(args, options),
            "id": id,
        });
        debug!("FreeIPA RPC → {} (id {})", method, id);

        let url = format!("{}/json", self.base_url);
        let mut request = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(REFERER, self.base_url.clone())
            .json(&body);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| IpaError::Network(format!("rpc request failed: {}", e)))?;
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| IpaError::Network(format!("failed to read rpc response: {}", e)))?;

        parse_rpc_response(method, status, &text)
    }

    /// Variant of [`call`](Self::call) for operations whose payload is
    /// irrelevant — delete/enable/disable report plain success instead.
    pub(crate) async fn call_discard(
        &self,
        method: &str,
        args: Vec<Value>,
        options: Map<String, Value>,
    ) -> IpaResult<bool> {
        self.call(method, args, options).await?;
        Ok(true)
    }

    fn next_request_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Serialize an option record into the named-option map. Fields set to
/// `None` are already skipped by serde, so absent means absent on the wire.
pub(crate) fn options_to_map<T: serde::Serialize>(options: &T) -> Map<String, Value> {
    match serde_json::to_value(options) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Wire parameters are always exactly two slots: `[positional, options]`.
/// The positional list stays in place even when empty.
fn build_params(args: Vec<Value>, options: Map<String, Value>) -> Value {
    Value::Array(vec![Value::Array(args), Value::Object(options)])
}

/// Strip each `Set-Cookie` header down to its `name=value` prefix and join
/// them into a single outgoing `Cookie` header value.
fn join_session_cookies(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<String> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|raw| raw.split(';').next())
        .map(|pair| pair.trim().to_string())
        .filter(|pair| !pair.is_empty())
        .collect();
    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}

/// Demultiplex a response body: an in-band fault wins regardless of HTTP
/// status, then HTTP-level errors, then the success payload.
fn parse_rpc_response(method: &str, status: u16, body: &str) -> IpaResult<Value> {
    match serde_json::from_str::<RpcResponse>(body) {
        Ok(parsed) => {
            if let Some(fault) = parsed.error {
                warn!(
                    "FreeIPA {} fault {} ({}): {}",
                    method, fault.code, fault.name, fault.message
                );
                return Err(IpaError::Api {
                    code: fault.code,
                    message: fault.message,
                    name: fault.name,
                });
            }
            if status != 200 {
                return Err(http_status_error(status));
            }
            Ok(parsed.result.map(|r| r.result).unwrap_or(Value::Null))
        }
        Err(_) if status != 200 => Err(http_status_error(status)),
        Err(e) => Err(IpaError::Network(format!(
            "unparseable rpc response for {}: {}",
            method, e
        ))),
    }
}

fn http_status_error(status: u16) -> IpaError {
    IpaError::Api {
        code: i64::from(status),
        message: format!("server returned HTTP {}", status),
        name: "HTTPError".to_string(),
    }
}
