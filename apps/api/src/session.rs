//! Interaction sessions: the session-scoped context object and its state
//! machine: `Idle → Uploaded → Analyzed → Answered`.
//!
//! Sessions live only in memory. Each session sits behind its own mutex and an
//! action holds that lock until it finishes, so one session never runs two
//! actions at once. Nothing returns a session to `Idle`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::analysis::mode::AnalysisMode;
use crate::document::UploadedDocument;

/// Result of one analysis, retained as context for follow-up questions.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub mode: AnalysisMode,
    pub resume_text: String,
    pub job_description: Option<String>,
    pub response: String,
    pub score: Option<u32>,
}

/// One answered follow-up question.
#[derive(Debug, Clone, Serialize)]
pub struct FollowUp {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub enum InteractionState {
    Idle,
    Uploaded {
        document: UploadedDocument,
    },
    Analyzed {
        analysis: Analysis,
    },
    Answered {
        analysis: Analysis,
        exchanges: Vec<FollowUp>,
    },
}

impl InteractionState {
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Uploaded { .. } => "uploaded",
            InteractionState::Analyzed { .. } => "analyzed",
            InteractionState::Answered { .. } => "answered",
        }
    }

    pub fn document(&self) -> Option<&UploadedDocument> {
        match self {
            InteractionState::Uploaded { document } => Some(document),
            _ => None,
        }
    }

    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            InteractionState::Analyzed { analysis } | InteractionState::Answered { analysis, .. } => {
                Some(analysis)
            }
            _ => None,
        }
    }

    pub fn exchanges(&self) -> &[FollowUp] {
        match self {
            InteractionState::Answered { exchanges, .. } => exchanges,
            _ => &[],
        }
    }

    /// Most recent model output: the last answer, else the analysis response.
    pub fn latest_response(&self) -> Option<&str> {
        match self.exchanges().last() {
            Some(exchange) => Some(exchange.answer.as_str()),
            None => self.analysis().map(|a| a.response.as_str()),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub state: InteractionState,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_active: now,
            state: InteractionState::Idle,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let analysis = self.state.analysis();
        SessionSnapshot {
            session_id: self.id,
            state: self.state.name(),
            created_at: self.created_at,
            last_active: self.last_active,
            filename: self.state.document().map(|d| d.filename.clone()),
            mode: analysis.map(|a| a.mode),
            job_description: analysis.and_then(|a| a.job_description.clone()),
            score: analysis.and_then(|a| a.score),
            response: analysis.map(|a| a.response.clone()),
            follow_ups: self.state.exchanges().to_vec(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-facing view of a session. Resume text and document bytes stay server-side.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: &'static str,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub filename: Option<String>,
    pub mode: Option<AnalysisMode>,
    pub job_description: Option<String>,
    pub score: Option<u32>,
    pub response: Option<String>,
    pub follow_ups: Vec<FollowUp>,
}

pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory map of live sessions. Expired sessions are purged whenever a new
/// one is created.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub async fn create(&self) -> SessionHandle {
        self.purge_expired().await;

        let session = Session::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        let live = {
            let mut sessions = self.sessions.write().await;
            sessions.insert(id, Arc::clone(&handle));
            sessions.len()
        };
        debug!("Created session {id} ({live} live)");
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions idle for longer than the TTL. Sessions locked by a running
    /// action are kept.
    pub async fn purge_expired(&self) -> usize {
        let cutoff = Utc::now() - self.ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => session.last_active >= cutoff,
            Err(_) => true,
        });
        let purged = before - sessions.len();
        if purged > 0 {
            debug!("Purged {purged} expired session(s)");
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn analysis(response: &str) -> Analysis {
        Analysis {
            mode: AnalysisMode::QuickScan,
            resume_text: "resume".into(),
            job_description: None,
            response: response.into(),
            score: Some(70),
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.state.name(), "idle");
        assert!(session.state.analysis().is_none());
        assert!(session.state.latest_response().is_none());
    }

    #[test]
    fn test_latest_response_prefers_last_answer() {
        let analyzed = InteractionState::Analyzed {
            analysis: analysis("first"),
        };
        assert_eq!(analyzed.latest_response(), Some("first"));

        let answered = InteractionState::Answered {
            analysis: analysis("first"),
            exchanges: vec![
                FollowUp {
                    question: "q1".into(),
                    answer: "a1".into(),
                },
                FollowUp {
                    question: "q2".into(),
                    answer: "a2".into(),
                },
            ],
        };
        assert_eq!(answered.latest_response(), Some("a2"));
    }

    #[test]
    fn test_snapshot_hides_document_bytes() {
        let mut session = Session::new();
        session.state = InteractionState::Uploaded {
            document: UploadedDocument::new("cv.pdf", None, Bytes::from_static(b"%PDF-1.4")),
        };
        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, "uploaded");
        assert_eq!(snapshot.filename.as_deref(), Some("cv.pdf"));
        assert_eq!(snapshot.score, None);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("bytes").is_none());
        assert!(json.get("resume_text").is_none());
    }

    #[tokio::test]
    async fn test_store_create_and_get() {
        let store = SessionStore::new(60);
        let handle = store.create().await;
        let id = handle.lock().await.id;

        let fetched = store.get(id).await.expect("session should exist");
        assert!(Arc::ptr_eq(&handle, &fetched));
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_store_purges_idle_sessions() {
        let store = SessionStore::new(30);
        let stale = store.create().await;
        stale.lock().await.last_active = Utc::now() - Duration::minutes(31);
        let fresh = store.create().await; // purge runs before insert
        let fresh_id = fresh.lock().await.id;

        assert_eq!(store.len().await, 1);
        assert!(store.get(fresh_id).await.is_some());
    }
}
