use chrono::Weekday;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::FormatterSettingError;
use crate::formatter::locale::{
    ENG_DAYS_OF_WEEK_STARTING_ON_MONDAY, ENG_DAYS_OF_WEEK_STARTING_ON_SUNDAY, ENG_MONTHS,
    RUS_DAYS_OF_WEEK, RUS_MONTHS,
};
use crate::helpers::dates::YearMonth;

pub const MONTH_PLACEHOLDER: &str = "{current_month}";
pub const YEAR_PLACEHOLDER: &str = "{current_year}";

/// Raw display settings. Turn them into a [`Formatter`] with [`FormatterSettings::build`].
#[derive(Debug, Clone)]
pub struct FormatterSettings {
    pub header_template: String,
    pub previous_month_text: String,
    pub next_month_text: String,
    pub reset_text: String,
    pub confirm_text: String,
    /// Month number (1..=12) to name. `None` falls back to English.
    pub months_mapping: Option<BTreeMap<u32, String>>,
    pub months_is_uppercase: bool,
    pub include_days_of_week: bool,
    pub first_day_of_week: Weekday,
    pub days_of_week: Vec<String>,
    pub days_of_week_is_uppercase: bool,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            header_template: format!("{} {}", MONTH_PLACEHOLDER, YEAR_PLACEHOLDER),
            previous_month_text: "«".to_string(),
            next_month_text: "»".to_string(),
            reset_text: "Clear".to_string(),
            confirm_text: "Confirm".to_string(),
            months_mapping: None,
            months_is_uppercase: false,
            include_days_of_week: true,
            first_day_of_week: Weekday::Mon,
            days_of_week: labels(&ENG_DAYS_OF_WEEK_STARTING_ON_MONDAY),
            days_of_week_is_uppercase: false,
        }
    }
}

impl FormatterSettings {
    pub fn english() -> Self {
        Self::default()
    }

    pub fn english_sunday_first() -> Self {
        Self {
            first_day_of_week: Weekday::Sun,
            days_of_week: labels(&ENG_DAYS_OF_WEEK_STARTING_ON_SUNDAY),
            ..Default::default()
        }
    }

    pub fn russian() -> Self {
        Self {
            reset_text: "Очистить".to_string(),
            confirm_text: "Подтвердить".to_string(),
            months_mapping: Some(months_mapping(&RUS_MONTHS)),
            days_of_week: labels(&RUS_DAYS_OF_WEEK),
            ..Default::default()
        }
    }

    pub fn build(self) -> Result<Formatter, FormatterSettingError> {
        check_not_empty(&[
            ("header_template", self.header_template.as_str()),
            ("previous_month_text", self.previous_month_text.as_str()),
            ("next_month_text", self.next_month_text.as_str()),
            ("reset_text", self.reset_text.as_str()),
            ("confirm_text", self.confirm_text.as_str()),
        ])?;
        if self.days_of_week.iter().any(|day| day.is_empty()) {
            return Err(FormatterSettingError::EmptyField("days_of_week"));
        }
        if let Some(mapping) = &self.months_mapping {
            if mapping.values().any(|name| name.is_empty()) {
                return Err(FormatterSettingError::EmptyField("months_mapping"));
            }
        }

        for placeholder in [MONTH_PLACEHOLDER, YEAR_PLACEHOLDER] {
            if !self.header_template.contains(placeholder) {
                return Err(FormatterSettingError::MissingPlaceholder(placeholder));
            }
        }

        if self.days_of_week.len() != 7 {
            return Err(FormatterSettingError::DaysOfWeekLength(
                self.days_of_week.len(),
            ));
        }

        let months_mapping = match self.months_mapping {
            None => months_mapping(&ENG_MONTHS),
            Some(mapping) => {
                if !mapping.keys().copied().eq(1..=12) {
                    return Err(FormatterSettingError::MonthsNumbering);
                }
                if mapping.values().collect::<BTreeSet<_>>().len() != 12 {
                    return Err(FormatterSettingError::DuplicateMonths);
                }
                mapping
            }
        };

        let expected_first_day = if same_labels(&self.days_of_week, &ENG_DAYS_OF_WEEK_STARTING_ON_MONDAY) {
            Some(Weekday::Mon)
        } else if same_labels(&self.days_of_week, &ENG_DAYS_OF_WEEK_STARTING_ON_SUNDAY) {
            Some(Weekday::Sun)
        } else {
            None
        };
        if let Some(expected) = expected_first_day {
            if expected != self.first_day_of_week {
                return Err(FormatterSettingError::FirstDayMismatch {
                    expected,
                    actual: self.first_day_of_week,
                });
            }
        }

        let months = months_mapping
            .into_values()
            .map(|name| if self.months_is_uppercase { name.to_uppercase() } else { name })
            .collect();
        let days_of_week = self
            .days_of_week
            .into_iter()
            .map(|day| if self.days_of_week_is_uppercase { day.to_uppercase() } else { day })
            .collect();

        Ok(Formatter {
            header_template: self.header_template,
            previous_month_text: self.previous_month_text,
            next_month_text: self.next_month_text,
            reset_text: self.reset_text,
            confirm_text: self.confirm_text,
            months,
            include_days_of_week: self.include_days_of_week,
            first_day_of_week: self.first_day_of_week,
            days_of_week,
        })
    }
}

/// Validated, immutable display settings shared by every calendar variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    header_template: String,
    previous_month_text: String,
    next_month_text: String,
    reset_text: String,
    confirm_text: String,
    months: Vec<String>,
    include_days_of_week: bool,
    first_day_of_week: Weekday,
    days_of_week: Vec<String>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            header_template: format!("{} {}", MONTH_PLACEHOLDER, YEAR_PLACEHOLDER),
            previous_month_text: "«".to_string(),
            next_month_text: "»".to_string(),
            reset_text: "Clear".to_string(),
            confirm_text: "Confirm".to_string(),
            months: labels(&ENG_MONTHS),
            include_days_of_week: true,
            first_day_of_week: Weekday::Mon,
            days_of_week: labels(&ENG_DAYS_OF_WEEK_STARTING_ON_MONDAY),
        }
    }
}

impl Formatter {
    pub fn header(&self, year_month: YearMonth) -> String {
        self.header_template
            .replace(MONTH_PLACEHOLDER, self.month_name(year_month.month()))
            .replace(YEAR_PLACEHOLDER, &year_month.year().to_string())
    }

    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|index| self.months.get(index as usize))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn previous_month_text(&self) -> &str {
        &self.previous_month_text
    }

    pub fn next_month_text(&self) -> &str {
        &self.next_month_text
    }

    pub fn reset_text(&self) -> &str {
        &self.reset_text
    }

    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    pub fn include_days_of_week(&self) -> bool {
        self.include_days_of_week
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn days_of_week(&self) -> &[String] {
        &self.days_of_week
    }
}

pub(crate) fn check_not_empty(
    fields: &[(&'static str, &str)],
) -> Result<(), FormatterSettingError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(FormatterSettingError::EmptyField(name)),
        None => Ok(()),
    }
}

pub fn months_mapping(names: &[&str; 12]) -> BTreeMap<u32, String> {
    (1..=12).zip(names.iter().map(|name| name.to_string())).collect()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn same_labels(days: &[String], table: &[&str; 7]) -> bool {
    days.iter().map(String::as_str).eq(table.iter().copied())
}
