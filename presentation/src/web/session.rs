//! Cookie-identified per-session contexts

use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::Response;
use jclopt_domain::{Credential, ReportExport, SessionContext};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "jclopt_session";

struct Entry {
    context: SessionContext,
    touched: Instant,
}

/// All live sessions, keyed by cookie value
///
/// The lock is only held while a context is read or modified, never across
/// a remote call. Sessions idle for longer than the TTL are dropped on the
/// next access to the store.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Entry>>>,
    configured: Option<Credential>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(configured: Option<Credential>, ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            configured,
            ttl,
        }
    }

    /// The context a session starts with; nothing is stored
    pub fn fresh_context(&self) -> SessionContext {
        match &self.configured {
            Some(credential) => SessionContext::with_configured_credential(credential.clone()),
            None => SessionContext::new(),
        }
    }

    /// Run `f` against the session's context, creating it on first use
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionContext) -> R) -> R {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, now);
        let entry = sessions.entry(id).or_insert_with(|| Entry {
            context: self.fresh_context(),
            touched: now,
        });
        entry.touched = now;
        f(&mut entry.context)
    }

    /// Copy of an existing session's context, or a fresh one that is not stored
    pub async fn snapshot(&self, id: Uuid) -> SessionContext {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, now);
        match sessions.get_mut(&id) {
            Some(entry) => {
                entry.touched = now;
                entry.context.clone()
            }
            None => self.fresh_context(),
        }
    }

    /// The session's downloadable report, without creating a session
    pub async fn export(&self, id: Uuid) -> Option<ReportExport> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, now);
        sessions.get(&id).and_then(|entry| entry.context.export())
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, Entry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.touched) <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Dropped idle sessions");
        }
    }
}

/// Session id from the request's `Cookie` header(s)
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Existing session id, or a new one that still has to be sent to the client
pub fn session_or_new(headers: &HeaderMap) -> (Uuid, bool) {
    match session_id(headers) {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

/// Attach the session cookie when the session was just created
pub fn with_session_cookie(mut response: Response, id: Uuid, is_new: bool) -> Response {
    if is_new {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use jclopt_domain::{JclSample, ReportText};

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn test_session_id_parsing() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}; other=1", SESSION_COOKIE, id))
                .unwrap(),
        );
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn test_invalid_cookie_value_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("jclopt_session=not-a-uuid"),
        );
        assert_eq!(session_id(&headers), None);
        assert!(session_or_new(&headers).1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(None, HOUR);
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        store
            .with_session(a, |c| {
                c.select_sample(JclSample::Manufacturing);
                c.record_report(ReportText::new("# A"), chrono::Utc::now());
            })
            .await;
        let b_sample = store.with_session(b, |c| c.selected_sample()).await;

        assert_eq!(b_sample, JclSample::Placeholder);
        assert!(store.export(a).await.is_some());
        assert!(store.export(b).await.is_none());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_new_sessions_inherit_configured_credential() {
        let store = SessionStore::new(Some(Credential::new("cfg").unwrap()), HOUR);
        let key = store
            .with_session(Uuid::new_v4(), |c| c.credential().map(|k| k.expose().to_string()))
            .await;
        assert_eq!(key.as_deref(), Some("cfg"));
    }

    #[tokio::test]
    async fn test_export_does_not_create_session() {
        let store = SessionStore::new(None, HOUR);
        assert!(store.export(Uuid::new_v4()).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_snapshot_does_not_create_session() {
        let store = SessionStore::new(None, HOUR);
        let context = store.snapshot(Uuid::new_v4()).await;
        assert_eq!(context.selected_sample(), JclSample::Placeholder);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted() {
        let store = SessionStore::new(None, Duration::from_secs(60));
        let (stale, live) = (Uuid::new_v4(), Uuid::new_v4());
        store.with_session(stale, |_| ()).await;
        store.with_session(live, |_| ()).await;

        {
            let mut sessions = store.sessions.lock().await;
            let entry = sessions.get_mut(&stale).unwrap();
            entry.touched = Instant::now() - Duration::from_secs(120);
        }

        assert!(store.export(stale).await.is_none());
        assert_eq!(store.len().await, 1);
        let sample = store.with_session(stale, |c| c.selected_sample()).await;
        assert_eq!(sample, JclSample::Placeholder);
    }

    #[tokio::test]
    async fn test_access_refreshes_idle_timer() {
        let store = SessionStore::new(None, Duration::from_secs(60));
        let id = Uuid::new_v4();
        store
            .with_session(id, |c| c.record_report(ReportText::new("# A"), chrono::Utc::now()))
            .await;

        {
            let mut sessions = store.sessions.lock().await;
            sessions.get_mut(&id).unwrap().touched = Instant::now() - Duration::from_secs(30);
        }
        store.snapshot(id).await;

        let touched = store.sessions.lock().await.get(&id).unwrap().touched;
        assert!(touched.elapsed() < Duration::from_secs(30));
        assert!(store.export(id).await.is_some());
    }
}
