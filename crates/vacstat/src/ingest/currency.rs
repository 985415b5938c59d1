/// Fixed conversion rates into rubles for every currency the export uses.
/// Rows quoting any other currency are rejected upstream.
pub(crate) const CURRENCY_RATES: [(&str, f64); 10] = [
    ("AZN", 35.68),
    ("BYR", 23.91),
    ("EUR", 59.90),
    ("GEL", 21.74),
    ("KGS", 0.76),
    ("KZT", 0.13),
    ("RUR", 1.0),
    ("UAH", 1.64),
    ("USD", 60.66),
    ("UZS", 0.0055),
];

pub(crate) fn rate_for(code: &str) -> Option<f64> {
    CURRENCY_RATES
        .iter()
        .find(|(currency, _)| *currency == code)
        .map(|(_, rate)| *rate)
}

/// Collapses the salary bounds into one base-currency figure:
/// the converted midpoint, truncated toward zero.
pub(crate) fn normalize_salary(salary_from: f64, salary_to: f64, rate: f64) -> u64 {
    (((salary_from + salary_to) * rate) / 2.0).floor() as u64
}
