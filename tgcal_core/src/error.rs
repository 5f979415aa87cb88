use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Rejections raised while validating [`crate::formatter::FormatterSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterSettingError {
    #[error("fields for text cannot be empty: {0}")]
    EmptyField(&'static str),
    #[error("date placeholder {0} not found in header template")]
    MissingPlaceholder(&'static str),
    #[error("quantity of days in a week should be equal to seven, got {0}")]
    DaysOfWeekLength(usize),
    #[error("incorrect months numbering in months mapping")]
    MonthsNumbering,
    #[error("there are duplicate months in months mapping")]
    DuplicateMonths,
    #[error("the first day of the week should be {expected:?}, got {actual:?}")]
    FirstDayMismatch { expected: Weekday, actual: Weekday },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date token: {0}")]
    InvalidDateToken(String),
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("selected start date {start} can't be later than selected end date {end}")]
    InvertedPeriod { start: NaiveDate, end: NaiveDate },
    #[error("window start {start} can't be later than window end {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },
    #[error("invalid callback keys: {0}")]
    InvalidCallbackKeys(String),
    #[error("unknown callback data: {0}")]
    UnknownCallback(String),
    #[error(transparent)]
    Formatter(#[from] FormatterSettingError),
}

pub type CalendarResult<T> = Result<T, CalendarError>;
