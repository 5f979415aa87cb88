use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::dto::{Button, DateWindow, Keyboard};
use crate::callback::{CallbackCodec, CallbackKind, CallbackPayload, DelimitedCodec};
use crate::formatter::Formatter;
use crate::helpers::dates::YearMonth;
use crate::helpers::utils::slice_list;

pub const DAYS_IN_WEEK: usize = 7;

/// Button construction shared by every calendar variant.
#[derive(Debug, Clone, Default)]
pub struct BaseCalendar<C = DelimitedCodec> {
    codec: C,
}

impl<C: CallbackCodec> BaseCalendar<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn make_button(&self, text: impl Into<String>, kind: CallbackKind, payload: CallbackPayload) -> Button {
        Button::new(text, self.codec.encode(kind, &payload))
    }

    pub fn make_pass_button(&self, text: impl Into<String>) -> Button {
        let nonce = uuid::Uuid::new_v4().simple().to_string();
        self.make_button(text, CallbackKind::Pass, CallbackPayload::Nonce(nonce))
    }

    pub fn make_blank_button(&self) -> Button {
        self.make_pass_button(" ")
    }

    pub fn make_header_button(&self, formatter: &Formatter, year_month: YearMonth) -> Button {
        self.make_pass_button(formatter.header(year_month))
    }

    pub fn make_days_of_week_buttons(&self, formatter: &Formatter) -> Vec<Button> {
        formatter
            .days_of_week()
            .iter()
            .map(|day| self.make_pass_button(day.as_str()))
            .collect()
    }

    pub fn make_reset_button(&self, formatter: &Formatter, selected: &[NaiveDate]) -> Button {
        if selected.is_empty() {
            self.make_blank_button()
        } else {
            self.make_button(formatter.reset_text(), CallbackKind::Reset, CallbackPayload::None)
        }
    }

    pub fn make_previous_month_button(&self, formatter: &Formatter, year_month: YearMonth) -> Button {
        self.make_button(
            formatter.previous_month_text(),
            CallbackKind::PreviousMonth,
            CallbackPayload::YearMonth(year_month.previous()),
        )
    }

    pub fn make_next_month_button(&self, formatter: &Formatter, year_month: YearMonth) -> Button {
        self.make_button(
            formatter.next_month_text(),
            CallbackKind::NextMonth,
            CallbackPayload::YearMonth(year_month.next()),
        )
    }

    /// `"Confirm (n)"` when `active`, a blank inert button otherwise.
    pub fn make_confirm_button(&self, formatter: &Formatter, selected: &[NaiveDate], active: bool) -> Button {
        if active {
            self.make_button(
                format!("{} ({})", formatter.confirm_text(), selected.len()),
                CallbackKind::Confirm,
                CallbackPayload::None,
            )
        } else {
            self.make_blank_button()
        }
    }

    /// Previous/next buttons, replaced by blank inert buttons where navigation is locked.
    pub fn make_navigation_buttons(
        &self,
        formatter: &Formatter,
        year_month: YearMonth,
        previous_locked: bool,
        next_locked: bool,
    ) -> (Button, Button) {
        let previous = if previous_locked {
            self.make_blank_button()
        } else {
            self.make_previous_month_button(formatter, year_month)
        };
        let next = if next_locked {
            self.make_blank_button()
        } else {
            self.make_next_month_button(formatter, year_month)
        };
        (previous, next)
    }
}

/// Cells of the month grid, row-major, padded with `None` to whole weeks.
pub fn month_cells(first_day_of_week: Weekday, year_month: YearMonth) -> Vec<Option<NaiveDate>> {
    let first_day = year_month.first_day();
    let leading = (DAYS_IN_WEEK as u32 + first_day.weekday().num_days_from_monday()
        - first_day_of_week.num_days_from_monday())
        % DAYS_IN_WEEK as u32;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading as usize];
    cells.extend(
        first_day
            .iter_days()
            .take(year_month.days_in_month() as usize)
            .map(Some),
    );
    let trailing = (DAYS_IN_WEEK - cells.len() % DAYS_IN_WEEK) % DAYS_IN_WEEK;
    cells.extend(std::iter::repeat(None).take(trailing));
    cells
}

/// Hides every cell outside `window`.
pub fn cut_edges(cells: &mut [Option<NaiveDate>], window: &DateWindow) {
    for cell in cells.iter_mut() {
        if matches!(cell, Some(date) if !window.contains(*date)) {
            *cell = None;
        }
    }
}

pub fn build_markup(
    header_button: Button,
    days_of_week_buttons: Option<Vec<Button>>,
    month_buttons: Vec<Button>,
    navigation_buttons: (Button, Button),
    reset_button: Button,
    confirm_button: Button,
) -> Keyboard {
    let mut keyboard = Keyboard::default();

    keyboard.row(vec![header_button]);
    if let Some(days_of_week_buttons) = days_of_week_buttons {
        keyboard.row(days_of_week_buttons);
    }
    for dates_row in slice_list(&month_buttons, DAYS_IN_WEEK) {
        keyboard.row(dates_row);
    }
    let (previous_month_button, next_month_button) = navigation_buttons;
    keyboard.row(vec![previous_month_button, next_month_button]);
    keyboard.row(vec![reset_button, confirm_button]);

    keyboard
}

/// The mode-specific half of a calendar. [`CalendarLayout::render_layout`] drives the
/// shared pipeline and calls back into the variant hooks.
pub trait CalendarLayout {
    type Codec: CallbackCodec;

    fn base(&self) -> &BaseCalendar<Self::Codec>;

    fn formatter(&self) -> &Formatter;

    fn set_available_month_cells(
        &self,
        year_month: YearMonth,
        cells: &mut [Option<NaiveDate>],
        selected: &[NaiveDate],
    );

    fn make_confirm_button(&self, selected: &[NaiveDate]) -> Button;

    fn make_navigation_buttons(
        &self,
        year_month: YearMonth,
        selected: &[NaiveDate],
        window: &DateWindow,
    ) -> (Button, Button);

    fn make_month_buttons(
        &self,
        year_month: YearMonth,
        cells: &[Option<NaiveDate>],
        selected: &[NaiveDate],
    ) -> Vec<Button>;

    /// `selected` must be sorted ascending and free of duplicates.
    fn render_layout(
        &self,
        year_month: YearMonth,
        selected: &[NaiveDate],
        window: &DateWindow,
    ) -> Keyboard {
        debug_assert!(
            selected.windows(2).all(|pair| pair[0] < pair[1]),
            "selected dates must be sorted and unique"
        );
        let base = self.base();
        let formatter = self.formatter();

        log::debug!(
            "Rendering calendar for {} with {} selected dates",
            year_month,
            selected.len()
        );

        let header_button = base.make_header_button(formatter, year_month);
        let days_of_week_buttons = formatter
            .include_days_of_week()
            .then(|| base.make_days_of_week_buttons(formatter));

        let mut cells = month_cells(formatter.first_day_of_week(), year_month);
        cut_edges(&mut cells, window);
        self.set_available_month_cells(year_month, &mut cells, selected);

        let month_buttons = self.make_month_buttons(year_month, &cells, selected);
        let navigation_buttons = self.make_navigation_buttons(year_month, selected, window);
        let reset_button = base.make_reset_button(formatter, selected);
        let confirm_button = self.make_confirm_button(selected);

        build_markup(
            header_button,
            days_of_week_buttons,
            month_buttons,
            navigation_buttons,
            reset_button,
            confirm_button,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::CalendarAction;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_month_cells_monday_first() {
        // May 2024 starts on a Wednesday
        let cells = month_cells(Weekday::Mon, ym(2024, 5));
        assert_eq!(cells.len(), 35);
        assert_eq!(&cells[..2], &[None, None]);
        assert_eq!(cells[2], Some(date(2024, 5, 1)));
        assert_eq!(cells[32], Some(date(2024, 5, 31)));
        assert_eq!(&cells[33..], &[None, None]);
    }

    #[test]
    fn test_month_cells_sunday_first() {
        let cells = month_cells(Weekday::Sun, ym(2024, 5));
        assert_eq!(&cells[..3], &[None, None, None]);
        assert_eq!(cells[3], Some(date(2024, 5, 1)));
        assert_eq!(cells.len() % DAYS_IN_WEEK, 0);
    }

    #[test]
    fn test_month_cells_whole_weeks() {
        // February 2021 starts on a Monday and has 28 days
        let cells = month_cells(Weekday::Mon, ym(2021, 2));
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(Option::is_some));

        // September 2024 starts on a Sunday and needs six rows when weeks start on Monday
        let cells = month_cells(Weekday::Mon, ym(2024, 9));
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[6], Some(date(2024, 9, 1)));
    }

    #[test]
    fn test_cut_edges() {
        let mut cells = month_cells(Weekday::Mon, ym(2024, 5));
        let window = DateWindow::new(Some(date(2024, 5, 10)), Some(date(2024, 5, 20))).unwrap();
        cut_edges(&mut cells, &window);

        let visible: Vec<NaiveDate> = cells.iter().flatten().copied().collect();
        assert_eq!(visible.first(), Some(&date(2024, 5, 10)));
        assert_eq!(visible.last(), Some(&date(2024, 5, 20)));
        assert_eq!(visible.len(), 11);
        assert_eq!(cells.len(), 35);
    }

    #[test]
    fn test_pass_buttons_are_unique() {
        let base = BaseCalendar::<DelimitedCodec>::default();
        let first = base.make_blank_button();
        let second = base.make_blank_button();
        assert_eq!(first.text, " ");
        assert_ne!(first.callback_data, second.callback_data);
        assert_eq!(base.codec().decode(&first.callback_data).unwrap(), CalendarAction::Pass);
    }

    #[test]
    fn test_reset_button() {
        let base = BaseCalendar::<DelimitedCodec>::default();
        let formatter = Formatter::default();

        let reset = base.make_reset_button(&formatter, &[date(2024, 5, 1)]);
        assert_eq!(reset.text, "Clear");
        assert_eq!(reset.callback_data, "cal_reset");

        let blank = base.make_reset_button(&formatter, &[]);
        assert_eq!(blank.text, " ");
        assert_eq!(base.codec().decode(&blank.callback_data).unwrap(), CalendarAction::Pass);
    }

    #[test]
    fn test_navigation_buttons_carry_target_month() {
        let base = BaseCalendar::<DelimitedCodec>::default();
        let formatter = Formatter::default();
        let (previous, next) = base.make_navigation_buttons(&formatter, ym(2024, 1), false, false);
        assert_eq!(previous.text, "«");
        assert_eq!(previous.callback_data, "cal_prev:2023:12");
        assert_eq!(next.text, "»");
        assert_eq!(next.callback_data, "cal_next:2024:2");

        let (previous, _) = base.make_navigation_buttons(&formatter, ym(2024, 1), true, false);
        assert_eq!(previous.text, " ");
    }

    #[test]
    fn test_build_markup_rows() {
        let base = BaseCalendar::<DelimitedCodec>::default();
        let formatter = Formatter::default();
        let month_buttons: Vec<Button> = (0..35).map(|_| base.make_blank_button()).collect();
        let keyboard = build_markup(
            base.make_header_button(&formatter, ym(2024, 5)),
            Some(base.make_days_of_week_buttons(&formatter)),
            month_buttons,
            base.make_navigation_buttons(&formatter, ym(2024, 5), false, false),
            base.make_blank_button(),
            base.make_blank_button(),
        );

        assert_eq!(keyboard.rows.len(), 1 + 1 + 5 + 1 + 1);
        assert_eq!(keyboard.rows[0][0].text, "May 2024");
        assert_eq!(keyboard.rows[1].len(), 7);
        assert_eq!(keyboard.rows[1][0].text, "Mon");
        assert!(keyboard.rows[2..7].iter().all(|row| row.len() == 7));
        assert_eq!(keyboard.rows[7].len(), 2);
        assert_eq!(keyboard.rows[8].len(), 2);
    }
}
