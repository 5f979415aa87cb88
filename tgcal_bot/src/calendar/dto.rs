use teloxide::types::MessageId;
use tgcal_core::{PeriodSelection, SpecificSelection, YearMonth};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSelection {
    Period(PeriodSelection),
    Specific(SpecificSelection),
}

/// Calendar state of one chat between taps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSession {
    pub year_month: YearMonth,
    pub selection: SessionSelection,
    /// Message carrying the live keyboard, set once it has been sent.
    pub message_id: Option<MessageId>,
}

impl CalendarSession {
    pub fn period(year_month: YearMonth) -> Self {
        Self {
            year_month,
            selection: SessionSelection::Period(PeriodSelection::default()),
            message_id: None,
        }
    }

    pub fn specific(year_month: YearMonth) -> Self {
        Self {
            year_month,
            selection: SessionSelection::Specific(SpecificSelection::default()),
            message_id: None,
        }
    }

    pub fn shown_in(mut self, message_id: MessageId) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Taps on any other message come from a keyboard this session replaced.
    pub fn is_shown_in(&self, message_id: MessageId) -> bool {
        self.message_id == Some(message_id)
    }
}
