use std::collections::HashSet;

use crate::callback::dto::{CalendarAction, CallbackKeys, CallbackKind, CallbackPayload};
use crate::error::{CalendarError, CalendarResult};
use crate::helpers::dates::{deserialize_date, serialize_date, YearMonth};

/// Telegram rejects inline buttons whose callback data exceeds this many bytes.
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

pub trait CallbackCodec {
    fn encode(&self, kind: CallbackKind, payload: &CallbackPayload) -> String;

    fn decode(&self, data: &str) -> CalendarResult<CalendarAction>;
}

/// `key`, `key:05.03.2024`, `key:2024:3` or `key:<nonce>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedCodec {
    keys: CallbackKeys,
    separator: char,
}

impl Default for DelimitedCodec {
    fn default() -> Self {
        Self {
            keys: CallbackKeys::default(),
            separator: ':',
        }
    }
}

impl DelimitedCodec {
    pub fn new(keys: CallbackKeys, separator: char) -> CalendarResult<Self> {
        let mut seen = HashSet::new();
        for kind in CallbackKind::ALL {
            let key = keys.key(kind);
            if key.is_empty() {
                return Err(CalendarError::InvalidCallbackKeys(format!(
                    "{:?} key is empty",
                    kind
                )));
            }
            if key.contains(separator) {
                return Err(CalendarError::InvalidCallbackKeys(format!(
                    "{:?} key {:?} contains separator {:?}",
                    kind, key, separator
                )));
            }
            if !seen.insert(key) {
                return Err(CalendarError::InvalidCallbackKeys(format!(
                    "key {:?} is used more than once",
                    key
                )));
            }
        }
        Ok(Self { keys, separator })
    }

    pub fn keys(&self) -> &CallbackKeys {
        &self.keys
    }

    fn parse_year_month(&self, raw: &str) -> Option<YearMonth> {
        let (year, month) = raw.split_once(self.separator)?;
        YearMonth::new(year.parse().ok()?, month.parse().ok()?).ok()
    }
}

impl CallbackCodec for DelimitedCodec {
    fn encode(&self, kind: CallbackKind, payload: &CallbackPayload) -> String {
        let key = self.keys.key(kind);
        let data = match payload {
            CallbackPayload::None => key.to_string(),
            CallbackPayload::Date(date) => {
                format!("{}{}{}", key, self.separator, serialize_date(*date))
            }
            CallbackPayload::YearMonth(year_month) => format!(
                "{key}{sep}{}{sep}{}",
                year_month.year(),
                year_month.month(),
                key = key,
                sep = self.separator
            ),
            CallbackPayload::Nonce(nonce) => format!("{}{}{}", key, self.separator, nonce),
        };

        if data.len() > MAX_CALLBACK_DATA_LEN {
            log::warn!(
                "Callback data {:?} is {} bytes, above the {} byte limit",
                data,
                data.len(),
                MAX_CALLBACK_DATA_LEN
            );
        }
        data
    }

    fn decode(&self, data: &str) -> CalendarResult<CalendarAction> {
        let unknown = || CalendarError::UnknownCallback(data.to_string());

        let (key, rest) = match data.split_once(self.separator) {
            Some((key, rest)) => (key, Some(rest)),
            None => (data, None),
        };

        match self.keys.kind(key).ok_or_else(unknown)? {
            CallbackKind::Pass => Ok(CalendarAction::Pass),
            CallbackKind::Reset => rest
                .is_none()
                .then_some(CalendarAction::Reset)
                .ok_or_else(unknown),
            CallbackKind::Confirm => rest
                .is_none()
                .then_some(CalendarAction::Confirm)
                .ok_or_else(unknown),
            CallbackKind::PreviousMonth => rest
                .and_then(|raw| self.parse_year_month(raw))
                .map(CalendarAction::PreviousMonth)
                .ok_or_else(unknown),
            CallbackKind::NextMonth => rest
                .and_then(|raw| self.parse_year_month(raw))
                .map(CalendarAction::NextMonth)
                .ok_or_else(unknown),
            CallbackKind::SelectDate => rest
                .and_then(|raw| deserialize_date(raw).ok())
                .map(CalendarAction::SelectDate)
                .ok_or_else(unknown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_encode_payloads() {
        let codec = DelimitedCodec::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let year_month = YearMonth::new(2024, 4).unwrap();

        assert_eq!(codec.encode(CallbackKind::Reset, &CallbackPayload::None), "cal_reset");
        assert_eq!(
            codec.encode(CallbackKind::SelectDate, &CallbackPayload::Date(date)),
            "cal_sel:05.03.2024"
        );
        assert_eq!(
            codec.encode(CallbackKind::NextMonth, &CallbackPayload::YearMonth(year_month)),
            "cal_next:2024:4"
        );
        assert_eq!(
            codec.encode(CallbackKind::Pass, &CallbackPayload::Nonce("abc".to_string())),
            "cal_pass:abc"
        );
    }

    #[test]
    fn test_decode_actions() {
        let codec = DelimitedCodec::default();

        assert_eq!(codec.decode("cal_pass:0f1e").unwrap(), CalendarAction::Pass);
        assert_eq!(codec.decode("cal_ok").unwrap(), CalendarAction::Confirm);
        assert_eq!(codec.decode("cal_reset").unwrap(), CalendarAction::Reset);
        assert_eq!(
            codec.decode("cal_prev:2023:12").unwrap(),
            CalendarAction::PreviousMonth(YearMonth::new(2023, 12).unwrap())
        );
        assert_eq!(
            codec.decode("cal_sel:29.02.2024").unwrap(),
            CalendarAction::SelectDate(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = DelimitedCodec::default();
        for data in [
            "",
            "other",
            "cal_next",
            "cal_next:2024",
            "cal_next:2024:13",
            "cal_sel:31.02.2024",
            "cal_ok:junk",
            "cal_reset:",
        ] {
            assert_eq!(
                codec.decode(data),
                Err(CalendarError::UnknownCallback(data.to_string())),
                "data {:?}",
                data
            );
        }
    }

    #[test]
    fn test_custom_keys_and_separator() {
        let keys = CallbackKeys {
            pass: "1".to_string(),
            previous_month: "2".to_string(),
            next_month: "3".to_string(),
            select_date: "4".to_string(),
            reset: "5".to_string(),
            confirm: "6".to_string(),
        };
        let codec = DelimitedCodec::new(keys, '|').unwrap();
        let year_month = YearMonth::new(2025, 1).unwrap();
        let data = codec.encode(CallbackKind::PreviousMonth, &CallbackPayload::YearMonth(year_month));
        assert_eq!(data, "2|2025|1");
        assert_eq!(codec.decode(&data).unwrap(), CalendarAction::PreviousMonth(year_month));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let duplicate = CallbackKeys {
            confirm: "cal_pass".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            DelimitedCodec::new(duplicate, ':'),
            Err(CalendarError::InvalidCallbackKeys(_))
        ));

        let empty = CallbackKeys {
            reset: String::new(),
            ..Default::default()
        };
        assert!(DelimitedCodec::new(empty, ':').is_err());

        let with_separator = CallbackKeys {
            select_date: "cal:sel".to_string(),
            ..Default::default()
        };
        assert!(DelimitedCodec::new(with_separator, ':').is_err());
    }

    #[test]
    fn test_oversized_data_still_round_trips() {
        let keys = CallbackKeys {
            select_date: "select_a_date_from_the_calendar_keyboard_shown_below_this_message".to_string(),
            ..Default::default()
        };
        let codec = DelimitedCodec::new(keys, ':').unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let data = codec.encode(CallbackKind::SelectDate, &CallbackPayload::Date(date));
        assert!(data.len() > MAX_CALLBACK_DATA_LEN);
        assert_eq!(codec.decode(&data).unwrap(), CalendarAction::SelectDate(date));
    }
}
