pub mod base;
pub mod locale;
pub mod period;
pub mod specific;

pub use base::{Formatter, FormatterSettings};
pub use period::{PeriodDatesFormatter, PeriodMarks};
pub use specific::SpecificDatesFormatter;
