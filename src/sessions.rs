use crate::constants::{ROLE_ADMIN, SESSION_TOKEN_LEN};
use crate::db::User;
use crate::helpers::generate_random_string;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: String,
    created_at: Instant,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Logged-in users, keyed by bearer token.
#[derive(Debug, Clone)]
pub struct Sessions {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Sessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn create(&self, user: &User) -> String {
        let token = generate_random_string(SESSION_TOKEN_LEN);
        let session = Session {
            username: user.username.clone(),
            role: user.role.clone(),
            created_at: Instant::now(),
        };
        self.inner.write().await.insert(token.clone(), session);
        log::debug!("Session created for '{}'", user.username);
        token
    }

    /// Expired sessions are dropped instead of returned.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let session = self.inner.read().await.get(token).cloned()?;
        if session.created_at.elapsed() > self.ttl {
            self.inner.write().await.remove(token);
            log::debug!("Session of '{}' expired", session.username);
            return None;
        }
        Some(session)
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.inner.write().await.remove(token)
    }

    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.created_at.elapsed() <= self.ttl);
        before - sessions.len()
    }
}
