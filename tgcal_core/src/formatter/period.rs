use crate::error::FormatterSettingError;
use crate::formatter::base::{check_not_empty, Formatter, FormatterSettings};

/// Captions for the cells of a selected period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodMarks {
    pub start: String,
    pub end: String,
    pub period: String,
    /// Shown on in-period cells that fall on the first or last day of a month.
    pub month_edge: String,
}

impl Default for PeriodMarks {
    fn default() -> Self {
        Self {
            start: "🟢".to_string(),
            end: "🔴".to_string(),
            period: "•".to_string(),
            month_edge: "...".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodDatesFormatter {
    base: Formatter,
    marks: PeriodMarks,
}

impl PeriodDatesFormatter {
    pub fn new(settings: FormatterSettings, marks: PeriodMarks) -> Result<Self, FormatterSettingError> {
        let base = settings.build()?;
        check_not_empty(&[
            ("selected_start_date_text", marks.start.as_str()),
            ("selected_end_date_text", marks.end.as_str()),
            ("selected_period_date_text", marks.period.as_str()),
            ("month_edge_text", marks.month_edge.as_str()),
        ])?;
        Ok(Self { base, marks })
    }

    pub fn base(&self) -> &Formatter {
        &self.base
    }

    pub fn selected_start_date_text(&self) -> &str {
        &self.marks.start
    }

    pub fn selected_end_date_text(&self) -> &str {
        &self.marks.end
    }

    pub fn selected_period_date_text(&self) -> &str {
        &self.marks.period
    }

    pub fn month_edge_text(&self) -> &str {
        &self.marks.month_edge
    }
}
