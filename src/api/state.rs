// src/api/state.rs
use crate::config::{AppConfig, SessionConfig};
use crate::providers::gemini::GeminiProvider;
use crate::session::FormController;
use crate::translator::Translator;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SharedController = Arc<Mutex<FormController>>;

struct SessionEntry {
    controller: SharedController,
    last_seen: Instant,
}

impl SessionEntry {
    /// A session mid-conversion is never idle, whatever its timestamp says.
    fn is_busy(&self) -> bool {
        match self.controller.try_lock() {
            Ok(controller) => controller.state().is_loading(),
            Err(_) => true,
        }
    }
}

/// In-memory form sessions keyed by id. Nothing here outlives the process.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    limits: SessionConfig,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionStore {
    pub fn new(limits: SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            limits,
        }
    }

    /// Opens a new session, or returns `None` when the store is full.
    pub async fn create(&self) -> Option<(Uuid, SharedController)> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.limits.max_sessions {
            return None;
        }

        let id = Uuid::new_v4();
        let controller = Arc::new(Mutex::new(FormController::new()));
        sessions.insert(id, SessionEntry { controller: controller.clone(), last_seen: Instant::now() });
        Some((id, controller))
    }

    /// Looks a session up and marks it as used.
    pub async fn get(&self, id: &Uuid) -> Option<SharedController> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(|entry| {
            entry.last_seen = Instant::now();
            entry.controller.clone()
        })
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions unused for longer than the idle timeout, as seen from `now`.
    /// Returns how many were dropped.
    pub async fn prune_idle_at(&self, now: Instant) -> usize {
        let idle_timeout = self.limits.idle_timeout;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| {
            now.saturating_duration_since(entry.last_seen) < idle_timeout || entry.is_busy()
        });
        before - sessions.len()
    }

    pub async fn prune_idle(&self) -> usize {
        self.prune_idle_at(Instant::now()).await
    }

    /// Prunes idle sessions every `every` on the current actix runtime.
    pub fn spawn_reaper(&self, every: Duration) {
        let store = self.clone();
        actix_web::rt::spawn(async move {
            let mut ticker = actix_web::rt::time::interval(every);
            loop {
                ticker.tick().await;
                let pruned = store.prune_idle().await;
                if pruned > 0 {
                    log::info!("🧹 Dropped {} idle sessions", pruned);
                }
            }
        });
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Arc<Translator<GeminiProvider>>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let provider = GeminiProvider::new(Client::new(), config.gemini.clone());
        let sessions = SessionStore::new(config.sessions.clone());
        Self {
            config: Arc::new(config),
            translator: Arc::new(Translator::new(provider)),
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(max_sessions: usize, idle_secs: u64) -> SessionStore {
        SessionStore::new(SessionConfig {
            max_sessions,
            idle_timeout: Duration::from_secs(idle_secs),
        })
    }

    #[actix_web::test]
    async fn test_store_create_get_remove() {
        let store = SessionStore::default();
        let (id, _) = store.create().await.unwrap();

        assert!(store.get(&id).await.is_some());
        assert_eq!(store.len().await, 1);

        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
    }

    #[actix_web::test]
    async fn test_sessions_are_independent() {
        let store = SessionStore::default();
        let (a, controller_a) = store.create().await.unwrap();
        let (b, _) = store.create().await.unwrap();
        assert_ne!(a, b);

        controller_a.lock().await.load_example();

        let other = store.get(&b).await.unwrap();
        assert!(other.lock().await.state().input.is_empty());
    }

    #[actix_web::test]
    async fn test_create_refuses_when_full() {
        let store = store(2, 60);
        store.create().await.unwrap();
        let (second, _) = store.create().await.unwrap();

        assert!(store.create().await.is_none());

        // Freeing a slot makes room again
        store.remove(&second).await;
        assert!(store.create().await.is_some());
    }

    #[actix_web::test]
    async fn test_prune_drops_idle_sessions() {
        let store = store(10, 60);
        let (stale, _) = store.create().await.unwrap();
        let (fresh, _) = store.create().await.unwrap();

        // Nothing has been idle for a minute yet
        assert_eq!(store.prune_idle_at(Instant::now()).await, 0);

        let later = Instant::now() + Duration::from_secs(120);
        {
            // Touch one session just before the sweep
            let mut sessions = store.sessions.write().await;
            sessions.get_mut(&fresh).unwrap().last_seen = later - Duration::from_secs(5);
        }

        assert_eq!(store.prune_idle_at(later).await, 1);
        assert!(store.get(&stale).await.is_none());
        assert!(store.get(&fresh).await.is_some());
    }

    #[actix_web::test]
    async fn test_prune_keeps_sessions_mid_conversion() {
        let store = store(10, 60);
        let (busy, controller) = store.create().await.unwrap();
        store.create().await.unwrap();
        controller.lock().await.submit("class A {}");

        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(store.prune_idle_at(later).await, 1);
        assert_eq!(store.len().await, 1);
        assert!(store.get(&busy).await.is_some());
    }
}
