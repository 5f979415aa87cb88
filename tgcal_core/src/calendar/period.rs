use chrono::{Datelike, NaiveDate};

use crate::calendar::base::{BaseCalendar, CalendarLayout};
use crate::calendar::dto::{Button, DateWindow, Keyboard};
use crate::callback::{CallbackCodec, CallbackKind, CallbackPayload, DelimitedCodec};
use crate::error::CalendarResult;
use crate::formatter::{Formatter, PeriodDatesFormatter};
use crate::helpers::dates::YearMonth;
use crate::selection::PeriodSelection;

/// Calendar for picking one contiguous range of dates.
#[derive(Debug, Clone, Default)]
pub struct PeriodDatesCalendar<C = DelimitedCodec> {
    base: BaseCalendar<C>,
    formatter: PeriodDatesFormatter,
}

impl<C: CallbackCodec> PeriodDatesCalendar<C> {
    pub fn new(formatter: PeriodDatesFormatter, codec: C) -> Self {
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
        selection: &PeriodSelection,
        window: &DateWindow,
    ) -> CalendarResult<Keyboard> {
        let year_month = YearMonth::new(year, month)?;
        let selected = selection.dates()?;
        Ok(self.render_layout(year_month, &selected, window))
    }

    /// Text of a cell inside the selected period.
    fn selected_cell_text(&self, year_month: YearMonth, date: NaiveDate, selected: &[NaiveDate]) -> &str {
        if Some(&date) == selected.first() {
            self.formatter.selected_start_date_text()
        } else if selected.len() > 1 && Some(&date) == selected.last() {
            self.formatter.selected_end_date_text()
        } else if date.day() == 1 || date.day() == year_month.days_in_month() {
            self.formatter.month_edge_text()
        } else {
            self.formatter.selected_period_date_text()
        }
    }
}

impl<C: CallbackCodec> CalendarLayout for PeriodDatesCalendar<C> {
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
        cells: &mut [Option<NaiveDate>],
        selected: &[NaiveDate],
    ) {
        let Some(&start) = selected.first() else {
            return;
        };
        let end = (selected.len() > 1).then(|| selected[selected.len() - 1]);

        for cell in cells.iter_mut() {
            let hidden = match cell {
                Some(date) => *date < start || end.is_some_and(|end| *date > end),
                None => false,
            };
            if hidden {
                *cell = None;
            }
        }
    }

    fn make_confirm_button(&self, selected: &[NaiveDate]) -> Button {
        self.base
            .make_confirm_button(self.formatter.base(), selected, selected.len() > 1)
    }

    fn make_navigation_buttons(
        &self,
        year_month: YearMonth,
        selected: &[NaiveDate],
        window: &DateWindow,
    ) -> (Button, Button) {
        let in_month = |date: Option<NaiveDate>| date.is_some_and(|date| year_month.contains(date));

        let previous_locked = in_month(window.start()) || in_month(selected.first().copied());
        let next_locked = in_month(window.end())
            || (selected.len() > 1 && in_month(selected.last().copied()));

        self.base.make_navigation_buttons(
            self.formatter.base(),
            year_month,
            previous_locked,
            next_locked,
        )
    }

    fn make_month_buttons(
        &self,
        year_month: YearMonth,
        cells: &[Option<NaiveDate>],
        selected: &[NaiveDate],
    ) -> Vec<Button> {
        cells
            .iter()
            .map(|cell| match cell {
                None => self.base.make_blank_button(),
                Some(date) if selected.binary_search(date).is_ok() => self
                    .base
                    .make_pass_button(self.selected_cell_text(year_month, *date, selected)),
                Some(date) => self.base.make_button(
                    date.day().to_string(),
                    CallbackKind::SelectDate,
                    CallbackPayload::Date(*date),
                ),
            })
            .collect()
    }
}
