use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{CalendarError, CalendarResult};
use crate::helpers::dates::{deserialize_date, period_dates};

/// A contiguous range picked in two taps: start first, then end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl PeriodSelection {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> CalendarResult<Self> {
        let selection = Self { start, end };
        selection.check_order()?;
        Ok(selection)
    }

    pub fn from_tokens(start: Option<&str>, end: Option<&str>) -> CalendarResult<Self> {
        Self::new(
            start.map(deserialize_date).transpose()?,
            end.map(deserialize_date).transpose()?,
        )
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Records a tap. The first tap sets the start, the second the end; an end
    /// earlier than the start swaps the two. A tap on a complete period starts over.
    pub fn select(&mut self, date: NaiveDate) {
        match (self.start, self.end) {
            (Some(start), None) if date < start => {
                self.start = Some(date);
                self.end = Some(start);
            }
            (Some(_), None) => self.end = Some(date),
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Selected dates in ascending order: nothing, the start alone, or the whole period.
    pub fn dates(&self) -> CalendarResult<Vec<NaiveDate>> {
        self.check_order()?;
        Ok(match (self.start, self.end) {
            (None, _) => Vec::new(),
            (Some(start), None) => vec![start],
            (Some(start), Some(end)) => period_dates(start, end),
        })
    }

    fn check_order(&self) -> CalendarResult<()> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => {
                Err(CalendarError::InvertedPeriod { start, end })
            }
            _ => Ok(()),
        }
    }
}

/// Any number of discrete dates, toggled one tap at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecificSelection {
    dates: BTreeSet<NaiveDate>,
}

impl SpecificSelection {
    pub fn from_tokens<I, S>(tokens: I) -> CalendarResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = tokens
            .into_iter()
            .map(|token| deserialize_date(token.as_ref()))
            .collect::<CalendarResult<BTreeSet<_>>>()?;
        Ok(Self { dates })
    }

    /// Returns whether `date` is selected after the toggle.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date);
            true
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn reset(&mut self) {
        self.dates.clear();
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().copied().collect()
    }
}

impl FromIterator<NaiveDate> for SpecificSelection {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_period_select_flow() {
        let mut selection = PeriodSelection::default();
        assert!(selection.is_empty());
        assert!(selection.dates().unwrap().is_empty());

        selection.select(date(2024, 5, 10));
        assert_eq!(selection.dates().unwrap(), vec![date(2024, 5, 10)]);
        assert!(!selection.is_complete());

        selection.select(date(2024, 5, 12));
        assert!(selection.is_complete());
        assert_eq!(
            selection.dates().unwrap(),
            vec![date(2024, 5, 10), date(2024, 5, 11), date(2024, 5, 12)]
        );

        selection.select(date(2024, 6, 1));
        assert_eq!(selection.start(), Some(date(2024, 6, 1)));
        assert_eq!(selection.end(), None);

        selection.reset();
        assert_eq!(selection, PeriodSelection::default());
    }

    #[test]
    fn test_period_select_earlier_end_swaps() {
        let mut selection = PeriodSelection::default();
        selection.select(date(2024, 5, 10));
        selection.select(date(2024, 5, 8));
        assert_eq!(selection.start(), Some(date(2024, 5, 8)));
        assert_eq!(selection.end(), Some(date(2024, 5, 10)));
    }

    #[test]
    fn test_period_rejects_inverted_range() {
        assert_eq!(
            PeriodSelection::new(Some(date(2024, 5, 10)), Some(date(2024, 5, 9))),
            Err(CalendarError::InvertedPeriod {
                start: date(2024, 5, 10),
                end: date(2024, 5, 9),
            })
        );
        let inverted: PeriodSelection =
            serde_json::from_str(r#"{"start":"2024-05-10","end":"2024-05-09"}"#).unwrap();
        assert!(inverted.dates().is_err());
    }

    #[test]
    fn test_period_from_tokens() {
        let selection = PeriodSelection::from_tokens(Some("01.05.2024"), Some("03.05.2024")).unwrap();
        assert_eq!(selection.dates().unwrap().len(), 3);
        assert!(PeriodSelection::from_tokens(Some("bad"), None).is_err());

        // an end without a start selects nothing
        let selection = PeriodSelection::from_tokens(None, Some("03.05.2024")).unwrap();
        assert!(selection.dates().unwrap().is_empty());
    }

    #[test]
    fn test_specific_toggle() {
        let mut selection = SpecificSelection::default();
        assert!(selection.toggle(date(2024, 5, 3)));
        assert!(selection.toggle(date(2024, 5, 1)));
        assert_eq!(selection.dates(), vec![date(2024, 5, 1), date(2024, 5, 3)]);

        assert!(!selection.toggle(date(2024, 5, 3)));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(date(2024, 5, 1)));

        selection.reset();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_specific_from_tokens_dedupes() {
        let selection =
            SpecificSelection::from_tokens(["03.05.2024", "01.05.2024", "3.5.2024"]).unwrap();
        assert_eq!(selection.dates(), vec![date(2024, 5, 1), date(2024, 5, 3)]);
        assert!(SpecificSelection::from_tokens(["32.01.2024"]).is_err());
    }
}
