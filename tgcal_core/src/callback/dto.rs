use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::helpers::dates::YearMonth;

/// Which handler a button routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    Pass,
    PreviousMonth,
    NextMonth,
    SelectDate,
    Reset,
    Confirm,
}

impl CallbackKind {
    pub const ALL: [CallbackKind; 6] = [
        CallbackKind::Pass,
        CallbackKind::PreviousMonth,
        CallbackKind::NextMonth,
        CallbackKind::SelectDate,
        CallbackKind::Reset,
        CallbackKind::Confirm,
    ];
}

/// Discriminators the host bot filters callback data on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackKeys {
    pub pass: String,
    pub previous_month: String,
    pub next_month: String,
    pub select_date: String,
    pub reset: String,
    pub confirm: String,
}

impl Default for CallbackKeys {
    fn default() -> Self {
        Self {
            pass: "cal_pass".to_string(),
            previous_month: "cal_prev".to_string(),
            next_month: "cal_next".to_string(),
            select_date: "cal_sel".to_string(),
            reset: "cal_reset".to_string(),
            confirm: "cal_ok".to_string(),
        }
    }
}

impl CallbackKeys {
    pub fn key(&self, kind: CallbackKind) -> &str {
        match kind {
            CallbackKind::Pass => &self.pass,
            CallbackKind::PreviousMonth => &self.previous_month,
            CallbackKind::NextMonth => &self.next_month,
            CallbackKind::SelectDate => &self.select_date,
            CallbackKind::Reset => &self.reset,
            CallbackKind::Confirm => &self.confirm,
        }
    }

    pub fn kind(&self, key: &str) -> Option<CallbackKind> {
        CallbackKind::ALL
            .into_iter()
            .find(|kind| self.key(*kind) == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackPayload {
    None,
    Date(NaiveDate),
    YearMonth(YearMonth),
    /// Unique filler so that inert buttons never share callback data.
    Nonce(String),
}

/// A decoded button tap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarAction {
    Pass,
    PreviousMonth(YearMonth),
    NextMonth(YearMonth),
    SelectDate(NaiveDate),
    Reset,
    Confirm,
}
