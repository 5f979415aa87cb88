pub mod base;
pub mod dto;
pub mod period;
pub mod specific;

pub use base::{BaseCalendar, CalendarLayout};
pub use dto::{Button, DateWindow, Keyboard};
pub use period::PeriodDatesCalendar;
pub use specific::SpecificDatesCalendar;
