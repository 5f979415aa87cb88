use crate::error::FormatterSettingError;
use crate::formatter::base::{check_not_empty, Formatter, FormatterSettings};

pub const DEFAULT_SELECTED_DATE_TEXT: &str = "✅";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificDatesFormatter {
    base: Formatter,
    selected_date_text: String,
}

impl Default for SpecificDatesFormatter {
    fn default() -> Self {
        Self {
            base: Formatter::default(),
            selected_date_text: DEFAULT_SELECTED_DATE_TEXT.to_string(),
        }
    }
}

impl SpecificDatesFormatter {
    pub fn new(
        settings: FormatterSettings,
        selected_date_text: impl Into<String>,
    ) -> Result<Self, FormatterSettingError> {
        let base = settings.build()?;
        let selected_date_text = selected_date_text.into();
        check_not_empty(&[("selected_date_text", selected_date_text.as_str())])?;
        Ok(Self {
            base,
            selected_date_text,
        })
    }

    pub fn base(&self) -> &Formatter {
        &self.base
    }

    pub fn selected_date_text(&self) -> &str {
        &self.selected_date_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_specific_formatter() {
        let formatter = SpecificDatesFormatter::new(FormatterSettings::russian(), "☑").unwrap();
        assert_eq!(formatter.selected_date_text(), "☑");
        assert_eq!(formatter.base().confirm_text(), "Подтвердить");
        assert_eq!(SpecificDatesFormatter::default().selected_date_text(), "✅");
    }

    #[test]
    fn test_empty_selected_text_rejected() {
        let err = SpecificDatesFormatter::new(FormatterSettings::default(), "").unwrap_err();
        assert_eq!(err, FormatterSettingError::EmptyField("selected_date_text"));
    }

    #[test]
    fn test_base_errors_propagate() {
        let settings = FormatterSettings {
            days_of_week: Vec::new(),
            ..Default::default()
        };
        assert_eq!(
            SpecificDatesFormatter::new(settings, "✅").unwrap_err(),
            FormatterSettingError::DaysOfWeekLength(0)
        );
    }
}
