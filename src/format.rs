use chrono::{DateTime, FixedOffset, Locale};
use std::env;

/// `HH:mm:ss`
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// `EEEE, MMMM dd, yyyy`
pub const DATE_PATTERN: &str = "%A, %B %d, %Y";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    locale: Locale,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(Locale::POSIX)
    }
}

impl TextFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// `name` wins over the environment when it names a known locale.
    pub fn resolve(name: Option<&str>) -> Self {
        let locale = name
            .and_then(parse_locale)
            .or_else(|| locale_from_env(|var| env::var(var).ok()))
            .unwrap_or(Locale::POSIX);
        Self::new(locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn time(&self, at: &DateTime<FixedOffset>) -> String {
        at.format_localized(TIME_PATTERN, self.locale).to_string()
    }

    pub fn date(&self, at: &DateTime<FixedOffset>) -> String {
        at.format_localized(DATE_PATTERN, self.locale).to_string()
    }
}

/// First non-empty locale variable in POSIX precedence order.
pub fn locale_from_env<F>(lookup: F) -> Option<Locale>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
}

/// Accepts `de_DE`, `de_DE.UTF-8`, `sr_RS.UTF-8@latin`, `de-DE`, `C`, `POSIX`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let name = name.trim();
    if name == "C" || name.starts_with("C.") || name == "POSIX" {
        return Some(Locale::POSIX);
    }

    let (base, modifier) = match name.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (name, None),
    };
    let base = base.split('.').next().unwrap_or(base).replace('-', "_");

    let with_modifier = modifier.map(|m| format!("{}@{}", base, m));
    with_modifier
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(base.as_str()))
        .find_map(|candidate| Locale::try_from(candidate).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn leap_day_morning() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 2, 29, 9, 5, 7)
            .unwrap()
    }

    #[test]
    fn time_is_zero_padded_24_hour() {
        let formatter = TextFormatter::default();
        assert_eq!(formatter.time(&leap_day_morning()), "09:05:07");

        let evening = leap_day_morning() + chrono::TimeDelta::hours(12);
        assert_eq!(formatter.time(&evening), "21:05:07");
    }

    #[test]
    fn date_spells_out_weekday_and_month() {
        let formatter = TextFormatter::default();
        assert_eq!(formatter.date(&leap_day_morning()), "Thursday, February 29, 2024");
    }

    #[test]
    fn date_follows_the_locale() {
        let formatter = TextFormatter::new(Locale::de_DE);
        assert_eq!(formatter.date(&leap_day_morning()), "Donnerstag, Februar 29, 2024");
    }

    #[test]
    fn locale_names_are_normalized() {
        assert_eq!(parse_locale("de_DE.UTF-8"), Some(Locale::de_DE));
        assert_eq!(parse_locale("fr-FR"), Some(Locale::fr_FR));
        assert_eq!(parse_locale("C.UTF-8"), Some(Locale::POSIX));
        assert_eq!(parse_locale("POSIX"), Some(Locale::POSIX));
        assert_eq!(parse_locale("xx_YY"), None);
    }

    #[test]
    fn env_precedence_skips_empty_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("LC_ALL", ""), ("LC_TIME", "fr_FR.UTF-8"), ("LANG", "de_DE.UTF-8")]);
        let lookup = |var: &str| vars.get(var).map(|v| v.to_string());
        assert_eq!(locale_from_env(lookup), Some(Locale::fr_FR));

        assert_eq!(locale_from_env(|_| None), None);
    }

    #[test]
    fn explicit_locale_beats_the_environment() {
        let formatter = TextFormatter::resolve(Some("de_DE"));
        assert_eq!(formatter.locale(), Locale::de_DE);
    }
}
