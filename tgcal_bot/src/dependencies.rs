use crate::calendar::{helpers::Calendars, storage::CalendarSessions};

#[derive(Clone)]
pub struct BotDependencies {
    pub calendars: Calendars,
    pub sessions: CalendarSessions,
}
