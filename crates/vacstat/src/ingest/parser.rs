use super::currency;
use crate::stats::VacancyRecord;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ParsedRows {
    pub(crate) records: Vec<VacancyRecord>,
    pub(crate) skipped: usize,
}

/// Reads the raw vacancy export and keeps every row that parses cleanly.
/// Rows with missing fields, unknown currencies, or unparsable dates are
/// counted and skipped; only I/O failures abort the pass.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<ParsedRows, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0;

    for row in csv_reader.deserialize::<RawVacancyRow>() {
        match row {
            Ok(row) => match record_from_row(row) {
                Some(record) => records.push(record),
                None => skipped += 1,
            },
            Err(err) if err.is_io_error() => return Err(err),
            Err(_) => skipped += 1,
        }
    }

    Ok(ParsedRows { records, skipped })
}

#[derive(Debug, Deserialize)]
struct RawVacancyRow {
    name: String,
    salary_from: String,
    salary_to: String,
    salary_currency: String,
    area_name: String,
    published_at: String,
}

fn record_from_row(row: RawVacancyRow) -> Option<VacancyRecord> {
    if row.name.is_empty() || row.area_name.is_empty() {
        return None;
    }

    let rate = currency::rate_for(&row.salary_currency)?;
    let salary_from = parse_amount(&row.salary_from)?;
    let salary_to = parse_amount(&row.salary_to)?;
    let year = published_year(&row.published_at)?;

    Some(VacancyRecord::new(
        row.name,
        currency::normalize_salary(salary_from, salary_to, rate),
        row.area_name,
        year,
    ))
}

/// Salary bounds arrive as decimal strings, sometimes with embedded spaces
/// as thousands separators ("35 000.0").
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.split_whitespace().collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Publication year from the ISO date prefix of `published_at`
/// (e.g. "2022-05-31T17:32:31+0300").
fn published_year(raw: &str) -> Option<i32> {
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_tolerate_thousands_separators() {
        assert_eq!(parse_amount("35 000.0"), Some(35000.0));
        assert_eq!(parse_amount("1200"), Some(1200.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("n/a"), None);
    }

    #[test]
    fn year_comes_from_the_date_prefix() {
        assert_eq!(published_year("2022-05-31T17:32:31+0300"), Some(2022));
        assert_eq!(published_year("2007-12-03T00:00:00+0300"), Some(2007));
        assert_eq!(published_year("yesterday"), None);
        assert_eq!(published_year("2022"), None);
    }
}
