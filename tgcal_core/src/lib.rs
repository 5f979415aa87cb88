//! Calendar keyboards for chat bots: month grids for picking a period or a set of dates.

pub mod calendar;
pub mod callback;
pub mod error;
pub mod formatter;
pub mod helpers;
pub mod selection;

pub use calendar::{Button, DateWindow, Keyboard, PeriodDatesCalendar, SpecificDatesCalendar};
pub use callback::{CalendarAction, CallbackCodec, CallbackKeys, DelimitedCodec};
pub use error::{CalendarError, CalendarResult, FormatterSettingError};
pub use formatter::{FormatterSettings, PeriodDatesFormatter, PeriodMarks, SpecificDatesFormatter};
pub use helpers::dates::{
    deserialize_date, next_month, period_dates, previous_month, serialize_date, YearMonth,
};
pub use selection::{PeriodSelection, SpecificSelection};
