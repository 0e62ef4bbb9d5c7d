use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static PUBLICATION_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"fecha.*").expect("static pattern"));

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s+de\s+([a-záéíóú]+)\s+de\s+([0-9]{4})").expect("static pattern")
});

/// Spanish month names, including the "setiembre" variant
const MONTHS: [(&str, u32); 13] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

fn month_number(name: &str) -> Option<u32> {
    MONTHS.iter().find(|(m, _)| *m == name).map(|(_, n)| *n)
}

/// Parse a published Spanish date such as
/// "jueves, 16 de octubre de 2025Fecha de publicación".
///
/// Anything unparseable or out of range yields None.
pub fn parse_spanish_date(raw: &str) -> Option<NaiveDate> {
    let lower = raw.to_lowercase();
    let clean = PUBLICATION_SUFFIX.replace(&lower, "");
    let clean = clean.trim().replace(',', "");

    let caps = DAY_MONTH_YEAR.captures(&clean)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
