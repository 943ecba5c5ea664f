//! Display formatting for amounts and dates
//!
//! Both helpers render the way the Chilean locale does in a browser,
//! including its output for values that are not numbers or not dates.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const CURRENCY_PREFIX: &str = "CLP $";
const INVALID_DATE: &str = "NaN/NaN/NaN";

/// Format an amount in Chilean pesos, rounded to the nearest peso.
///
/// ```
/// use mgcp_portal::ui::presentation::helpers::format::format_currency;
///
/// assert_eq!(format_currency(1234.6), "CLP $1.235");
/// assert_eq!(format_currency(-1234567.0), "CLP $-1.234.567");
/// ```
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{}NaN", CURRENCY_PREFIX);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}∞", CURRENCY_PREFIX, sign);
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", CURRENCY_PREFIX, sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Anything that can be read as a calendar date in local time
pub trait IntoLocalDate {
    fn into_local_date(self) -> Option<NaiveDate>;
}

impl IntoLocalDate for NaiveDate {
    fn into_local_date(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl IntoLocalDate for NaiveDateTime {
    fn into_local_date(self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> IntoLocalDate for DateTime<Tz> {
    fn into_local_date(self) -> Option<NaiveDate> {
        Some(self.with_timezone(&Local).date_naive())
    }
}

impl IntoLocalDate for &str {
    fn into_local_date(self) -> Option<NaiveDate> {
        let s = self.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(utc_midnight_in(date, &Local));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return dt.into_local_date();
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }
}

/// Date-only ISO strings mean UTC midnight, read back on the `tz` calendar.
/// West of UTC this is the previous day.
fn utc_midnight_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> NaiveDate {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .with_timezone(tz)
        .date_naive()
}

impl IntoLocalDate for &String {
    fn into_local_date(self) -> Option<NaiveDate> {
        self.as_str().into_local_date()
    }
}

impl IntoLocalDate for String {
    fn into_local_date(self) -> Option<NaiveDate> {
        self.as_str().into_local_date()
    }
}

/// Format a date as `DD/MM/YYYY`.
///
/// Strings are parsed as ISO-8601. Date-only strings are UTC midnight and
/// timestamps with an offset are converted to local time first, so both can
/// land on the previous day west of UTC. Timestamps without an offset are
/// already local.
///
/// ```
/// use chrono::NaiveDate;
/// use mgcp_portal::ui::presentation::helpers::format::format_date;
///
/// assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "05/01/2024");
/// assert_eq!(format_date("2024-01-05T10:00:00"), "05/01/2024");
/// assert_eq!(format_date("mañana"), "NaN/NaN/NaN");
/// ```
pub fn format_date(value: impl IntoLocalDate) -> String {
    match value.into_local_date() {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
