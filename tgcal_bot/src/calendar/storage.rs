use dashmap::DashMap;
use std::sync::Arc;
use teloxide::types::{ChatId, MessageId};

use crate::calendar::dto::CalendarSession;

/// In-memory sessions, one per chat. Lost on restart.
#[derive(Clone, Default)]
pub struct CalendarSessions {
    sessions: Arc<DashMap<ChatId, CalendarSession>>,
}

impl CalendarSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chat_id: ChatId) -> Option<CalendarSession> {
        self.sessions.get(&chat_id).map(|entry| entry.value().clone())
    }

    /// The chat's session, only when `message_id` holds its live calendar.
    pub fn get_for_message(
        &self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Option<CalendarSession> {
        self.get(chat_id)
            .filter(|session| session.is_shown_in(message_id))
    }

    pub fn put(&self, chat_id: ChatId, session: CalendarSession) {
        self.sessions.insert(chat_id, session);
    }

    pub fn remove(&self, chat_id: ChatId) -> Option<CalendarSession> {
        self.sessions.remove(&chat_id).map(|(_, session)| session)
    }
}
