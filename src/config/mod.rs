use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::{ConfigError, EntryKind};

pub const CONFIG_ENV_VAR: &str = "FINANCE_CORE_CONFIG";

/// Languages with built-in default labels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Rejection text for a non-positive amount.
    pub fn invalid_amount_message(self, kind: EntryKind) -> String {
        match (self, kind) {
            (Locale::En, kind) => format!("{kind} must be greater than 0."),
            (Locale::Ru, EntryKind::Income) => "Доход должен быть больше 0.".into(),
            (Locale::Ru, EntryKind::Expense) => "Расход должен быть больше 0.".into(),
        }
    }
}

/// Descriptions substituted when a caller records an entry without one.
///
/// `locale` selects the language of rejection messages; label overrides do
/// not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub locale: Locale,
    pub income: String,
    pub expense: String,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        let (income, expense) = match locale {
            Locale::En => ("Income", "Expense"),
            Locale::Ru => ("Доход", "Расход"),
        };
        Self {
            locale,
            income: income.into(),
            expense: expense.into(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_label: Option<String>,
}

impl Config {
    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Loads the file named by `FINANCE_CORE_CONFIG`, falling back to defaults when unset.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_from(&PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Locale labels with any explicit overrides applied.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::for_locale(self.locale);
        if let Some(income) = non_blank(self.income_label.as_deref()) {
            labels.income = income;
        }
        if let Some(expense) = non_blank(self.expense_label.as_deref()) {
            labels.expense = expense;
        }
        labels
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_uses_english_labels() {
        let labels = Config::default().labels();
        assert_eq!(labels.income, "Income");
        assert_eq!(labels.expense, "Expense");
    }

    #[test]
    fn russian_locale_parses_from_json() {
        let config = Config::from_json_str(r#"{ "locale": "ru" }"#).unwrap();
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.labels().income, "Доход");
        assert_eq!(config.labels().expense, "Расход");
    }

    #[test]
    fn overrides_replace_locale_labels() {
        let config =
            Config::from_json_str(r#"{ "income_label": "Pay", "expense_label": "  " }"#).unwrap();
        let labels = config.labels();
        assert_eq!(labels.income, "Pay");
        assert_eq!(labels.expense, "Expense");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            locale: Locale::Ru,
            income_label: Some("Зарплата".into()),
            expense_label: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""locale":"ru""#));
        assert!(!json.contains("expense_label"));
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn unknown_locale_is_a_parse_error() {
        let err = Config::from_json_str(r#"{ "locale": "fr" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "locale": "ru", "expense_label": "Траты" }}"#).unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.labels().income, "Доход");
        assert_eq!(config.labels().expense, "Траты");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
