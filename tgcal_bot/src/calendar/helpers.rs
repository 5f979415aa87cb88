use anyhow::Result;
use chrono::{Days, NaiveDate};
use teloxide::types::InlineKeyboardMarkup;
use tgcal_core::{
    CalendarAction, CallbackCodec, DateWindow, DelimitedCodec, PeriodDatesCalendar,
    PeriodDatesFormatter, PeriodMarks, PeriodSelection, SpecificDatesCalendar,
    SpecificDatesFormatter, serialize_date,
};

use crate::calendar::dto::{CalendarSession, SessionSelection};
use crate::config::BotConfig;

pub const PERIOD_START_PROMPT: &str = "🏁 Please select a start date for the period:";
pub const PERIOD_END_PROMPT: &str = "🏁 Fine! Now select the end date:";
pub const PERIOD_DONE_PROMPT: &str = "✅ Ok, period received! Confirm your selection, or start over.";
pub const DATES_PROMPT: &str = "📅 Please select your desired dates:";
pub const EXPIRED_TEXT: &str = "⌛ This calendar has expired. Use /period or /dates to start again.";

/// Both calendar layouts, built once from the bot configuration.
#[derive(Debug, Clone)]
pub struct Calendars {
    pub period: PeriodDatesCalendar,
    pub specific: SpecificDatesCalendar,
    pub days_ahead: Option<u64>,
}

impl Calendars {
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let period = PeriodDatesCalendar::new(
            PeriodDatesFormatter::new(config.locale.settings(), PeriodMarks::default())?,
            DelimitedCodec::default(),
        );
        let specific = SpecificDatesCalendar::new(
            SpecificDatesFormatter::new(config.locale.settings(), "✅")?,
            DelimitedCodec::default(),
        );
        Ok(Self {
            period,
            specific,
            days_ahead: config.days_ahead,
        })
    }

    pub fn decode(&self, data: &str) -> Result<CalendarAction> {
        Ok(self.period.codec().decode(data)?)
    }

    /// Dates from `today` on, and up to `days_ahead` days past it when configured.
    pub fn window(&self, today: NaiveDate) -> Result<DateWindow> {
        let end = self
            .days_ahead
            .and_then(|days| today.checked_add_days(Days::new(days)));
        Ok(DateWindow::new(Some(today), end)?)
    }

    pub fn is_selectable(&self, date: NaiveDate, today: NaiveDate) -> Result<bool> {
        Ok(self.window(today)?.contains(date))
    }

    pub fn render(&self, session: &CalendarSession, today: NaiveDate) -> Result<InlineKeyboardMarkup> {
        let window = self.window(today)?;
        let year = session.year_month.year();
        let month = session.year_month.month();

        let keyboard = match &session.selection {
            SessionSelection::Period(selection) => {
                self.period.render_markup(year, month, selection, &window)?
            }
            SessionSelection::Specific(selection) => {
                self.specific.render_markup(year, month, selection, &window)?
            }
        };
        Ok(keyboard.into())
    }
}

pub fn period_prompt(selection: &PeriodSelection) -> &'static str {
    if selection.is_complete() {
        PERIOD_DONE_PROMPT
    } else if selection.is_empty() {
        PERIOD_START_PROMPT
    } else {
        PERIOD_END_PROMPT
    }
}

pub fn session_prompt(session: &CalendarSession) -> &'static str {
    match &session.selection {
        SessionSelection::Period(selection) => period_prompt(selection),
        SessionSelection::Specific(_) => DATES_PROMPT,
    }
}

pub fn format_selected_dates(dates: &[NaiveDate]) -> String {
    let lines = dates
        .iter()
        .map(|date| serialize_date(*date))
        .collect::<Vec<_>>()
        .join("\n");
    format!("✅ You have selected dates:\n\n{}", lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgcal_core::YearMonth;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_period_prompt_follows_selection() {
        let mut selection = PeriodSelection::default();
        assert_eq!(period_prompt(&selection), PERIOD_START_PROMPT);
        selection.select(date(2024, 5, 1));
        assert_eq!(period_prompt(&selection), PERIOD_END_PROMPT);
        selection.select(date(2024, 5, 3));
        assert_eq!(period_prompt(&selection), PERIOD_DONE_PROMPT);
    }

    #[test]
    fn test_format_selected_dates() {
        let text = format_selected_dates(&[date(2024, 5, 1), date(2024, 5, 12)]);
        assert_eq!(text, "✅ You have selected dates:\n\n01.05.2024\n12.05.2024");
    }

    #[test]
    fn test_window_respects_days_ahead() {
        let config = BotConfig {
            days_ahead: Some(30),
            ..Default::default()
        };
        let calendars = Calendars::from_config(&config).unwrap();
        let window = calendars.window(date(2024, 5, 10)).unwrap();
        assert_eq!(window.start(), Some(date(2024, 5, 10)));
        assert_eq!(window.end(), Some(date(2024, 6, 9)));

        let open = Calendars::from_config(&BotConfig::default()).unwrap();
        assert_eq!(open.window(date(2024, 5, 10)).unwrap().end(), None);
    }

    #[test]
    fn test_dates_before_today_not_selectable() {
        let config = BotConfig {
            days_ahead: Some(7),
            ..Default::default()
        };
        let calendars = Calendars::from_config(&config).unwrap();
        let today = date(2024, 5, 10);

        assert!(calendars.is_selectable(today, today).unwrap());
        assert!(calendars.is_selectable(date(2024, 5, 17), today).unwrap());
        assert!(!calendars.is_selectable(date(2024, 5, 9), today).unwrap());
        assert!(!calendars.is_selectable(date(2024, 5, 18), today).unwrap());
    }

    #[test]
    fn test_render_session() {
        let calendars = Calendars::from_config(&BotConfig::default()).unwrap();
        let session = CalendarSession::specific(YearMonth::new(2024, 5).unwrap());
        let markup = calendars.render(&session, date(2024, 5, 10)).unwrap();

        assert_eq!(markup.inline_keyboard[0][0].text, "May 2024");
        // today and later are selectable, earlier days are blank
        let grid: Vec<&str> = markup.inline_keyboard[2..7]
            .iter()
            .flatten()
            .map(|button| button.text.as_str())
            .collect();
        assert_eq!(grid[11], "10");
        assert_eq!(grid[10], " ");
    }

    #[test]
    fn test_decode_rendered_callbacks() {
        let calendars = Calendars::from_config(&BotConfig::default()).unwrap();
        assert_eq!(
            calendars.decode("cal_sel:10.05.2024").unwrap(),
            CalendarAction::SelectDate(date(2024, 5, 10))
        );
        assert!(calendars.decode("something_else").is_err());
    }
}
