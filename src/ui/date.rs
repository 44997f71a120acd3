// SPDX-License-Identifier: MPL-2.0
//! Long-form display of catalog dates.

use crate::i18n::fluent::I18n;
use chrono::{Datelike, NaiveDate};

/// Renders an ISO `YYYY-MM-DD` date as e.g. "February 15, 2024".
///
/// Strings that are not ISO dates are shown as-is.
#[must_use]
pub fn long_date(i18n: &I18n, raw: &str) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
        return raw.to_string();
    };

    let month = i18n.tr(&format!("month-{}", date.month()));
    let day = date.day().to_string();
    let year = date.year().to_string();
    i18n.tr_with_args(
        "date-long",
        &[("month", &month), ("day", &day), ("year", &year)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n(lang: &str) -> I18n {
        I18n::new(Some(lang.into()), None, &Config::default())
    }

    #[test]
    fn english_long_form() {
        assert_eq!(long_date(&i18n("en-US"), "2024-02-15"), "February 15, 2024");
    }

    #[test]
    fn french_long_form() {
        assert_eq!(long_date(&i18n("fr"), "2024-03-01"), "1 mars 2024");
    }

    #[test]
    fn free_text_is_passed_through() {
        assert_eq!(long_date(&i18n("en-US"), "Winter 2023"), "Winter 2023");
        assert_eq!(long_date(&i18n("en-US"), ""), "");
    }
}
