use chrono::{Datelike, NaiveDate};

use crate::calendar::base::{BaseCalendar, CalendarLayout};
use crate::calendar::dto::{Button, DateWindow, Keyboard};
use crate::callback::{CallbackCodec, CallbackKind, CallbackPayload, DelimitedCodec};
use crate::error::CalendarResult;
use crate::formatter::{Formatter, SpecificDatesFormatter};
use crate::helpers::dates::YearMonth;
use crate::selection::SpecificSelection;

/// Calendar for picking any set of individual dates.
#[derive(Debug, Clone, Default)]
pub struct SpecificDatesCalendar<C = DelimitedCodec> {
    base: BaseCalendar<C>,
    formatter: SpecificDatesFormatter,
}

impl<C: CallbackCodec> SpecificDatesCalendar<C> {
    pub fn new(formatter: SpecificDatesFormatter, codec: C) -> Self {
        Self {
            base: BaseCalendar::new(codec),
            formatter,
        }
    }

    pub fn codec(&self) -> &C {
        self.base.codec()
    }

    pub fn render_markup(
        &self,
        year: i32,
        month: u32,
        selection: &SpecificSelection,
        window: &DateWindow,
    ) -> CalendarResult<Keyboard> {
        let year_month = YearMonth::new(year, month)?;
        Ok(self.render_layout(year_month, &selection.dates(), window))
    }
}

impl<C: CallbackCodec> CalendarLayout for SpecificDatesCalendar<C> {
    type Codec = C;

    fn base(&self) -> &BaseCalendar<C> {
        &self.base
    }

    fn formatter(&self) -> &Formatter {
        self.formatter.base()
    }

    fn set_available_month_cells(
        &self,
        _year_month: YearMonth,
        _cells: &mut [Option<NaiveDate>],
        _selected: &[NaiveDate],
    ) {
    }

    fn make_confirm_button(&self, selected: &[NaiveDate]) -> Button {
        self.base
            .make_confirm_button(self.formatter.base(), selected, !selected.is_empty())
    }

    fn make_navigation_buttons(
        &self,
        year_month: YearMonth,
        _selected: &[NaiveDate],
        window: &DateWindow,
    ) -> (Button, Button) {
        let in_month = |date: Option<NaiveDate>| date.is_some_and(|date| year_month.contains(date));

        self.base.make_navigation_buttons(
            self.formatter.base(),
            year_month,
            in_month(window.start()),
            in_month(window.end()),
        )
    }

    fn make_month_buttons(
        &self,
        _year_month: YearMonth,
        cells: &[Option<NaiveDate>],
        selected: &[NaiveDate],
    ) -> Vec<Button> {
        cells
            .iter()
            .map(|cell| match cell {
                Some(date) => {
                    let text = if selected.binary_search(date).is_ok() {
                        self.formatter.selected_date_text().to_string()
                    } else {
                        date.day().to_string()
                    };
                    self.base
                        .make_button(text, CallbackKind::SelectDate, CallbackPayload::Date(*date))
                }
                None => self.base.make_blank_button(),
            })
            .collect()
    }
}
