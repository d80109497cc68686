//! Per-conversation session state
//!
//! Sessions are ephemeral, process-lifetime state. Each session lives behind
//! its own lock, so at most one message per session mutates history at a
//! time; concurrent messages serialize instead of interleaving.

use crate::models::Intent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    #[default]
    Neutral,
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub intent: Intent,
}

/// Accumulated state of one conversation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Session {
    pub history: Vec<HistoryEntry>,
    pub last_intent: Option<Intent>,
    pub sentiment: Sentiment,
    /// Topics inferred from repeated keyword hits. Observed but not yet
    /// consulted by response selection.
    pub preferred_topics: Vec<String>,
    pub interaction_count: u64,
}

impl Session {
    /// Append a classified message to the session, monotonic.
    pub fn record(&mut self, message: &str, intent: Intent) {
        self.history.push(HistoryEntry {
            message: message.to_string(),
            intent,
        });
        self.last_intent = Some(intent);
        self.interaction_count += 1;
        self.learn(message);
    }

    fn learn(&mut self, message: &str) {
        let message = message.to_lowercase();

        if message.contains("игра") || message.contains("game") {
            self.prefer("игра");
        }
        if message.contains("будильник") || message.contains("таймер") {
            self.prefer("таймер");
        }
    }

    fn prefer(&mut self, topic: &str) {
        if !self.preferred_topics.iter().any(|t| t == topic) {
            self.preferred_topics.push(topic.to_string());
        }
    }
}

/// Hands out one shared, lockable session per session id.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    pub async fn session(&self, id: &str) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(Session::default())))
            .clone()
    }
}
