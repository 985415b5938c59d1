use crate::stats::StatisticsSnapshot;
use std::fmt::Write;

/// Renders the six statistics series as aligned console tables.
///
/// `profession` is only used for column captions; pass the same value the
/// engine filtered on.
pub fn render_snapshot(snapshot: &StatisticsSnapshot, profession: &str) -> String {
    let mut out = String::new();

    if snapshot.is_empty() {
        out.push_str("No vacancies matched the input.\n");
        return out;
    }

    let profession_caption = if profession.is_empty() {
        "(no profession filter)".to_string()
    } else {
        profession.to_string()
    };

    let year_rows: Vec<[String; 5]> = snapshot
        .year_salary
        .keys()
        .map(|year| {
            [
                year.to_string(),
                value_or_zero(&snapshot.year_salary, *year),
                value_or_zero(&snapshot.year_salary_filtered, *year),
                value_or_zero(&snapshot.year_count, *year),
                value_or_zero(&snapshot.year_count_filtered, *year),
            ]
        })
        .collect();

    write_table(
        &mut out,
        "Statistics by year",
        &[
            "Year",
            "Average salary",
            &format!("Average salary: {profession_caption}"),
            "Vacancies",
            &format!("Vacancies: {profession_caption}"),
        ],
        &year_rows,
    );

    let salary_rows: Vec<[String; 2]> = snapshot
        .region_salary_top
        .iter()
        .map(|entry| [entry.region.clone(), entry.salary.to_string()])
        .collect();
    out.push('\n');
    write_table(
        &mut out,
        "Salary level by region (descending)",
        &["Region", "Average salary"],
        &salary_rows,
    );

    let share_rows: Vec<[String; 2]> = snapshot
        .region_share_top
        .iter()
        .map(|entry| [entry.region.clone(), format!("{:.2}%", entry.share * 100.0)])
        .collect();
    out.push('\n');
    write_table(
        &mut out,
        "Vacancy share by region (descending)",
        &["Region", "Share"],
        &share_rows,
    );

    out
}

fn value_or_zero(series: &std::collections::BTreeMap<i32, u64>, year: i32) -> String {
    series.get(&year).copied().unwrap_or(0).to_string()
}

fn write_table<const N: usize>(
    out: &mut String,
    title: &str,
    headers: &[&str; N],
    rows: &[[String; N]],
) {
    let mut widths: [usize; N] = [0; N];
    for (index, header) in headers.iter().enumerate() {
        widths[index] = header.chars().count();
    }
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let _ = writeln!(out, "{title}");
    write_row(out, headers.map(|header| header.to_string()).as_slice(), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, &rule, &widths);
    for row in rows {
        write_row(out, row.as_slice(), &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        let padding = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        line.push_str(&" ".repeat(padding));
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StatisticsEngine, StatsOptions, VacancyRecord};

    #[test]
    fn renders_all_sections_with_profession_captions() {
        let mut engine = StatisticsEngine::new(StatsOptions::for_profession("Dev"));
        engine.accumulate(&VacancyRecord::new("Dev", 1000, "Oslo", 2020));
        engine.accumulate(&VacancyRecord::new("QA", 3000, "Bergen", 2021));
        let rendered = render_snapshot(&engine.finalize(), "Dev");

        assert!(rendered.contains("Statistics by year"));
        assert!(rendered.contains("Average salary: Dev"));
        assert!(rendered.contains("Salary level by region"));
        assert!(rendered.contains("Vacancy share by region"));
        assert!(rendered.contains("50.00%"));
    }

    #[test]
    fn empty_snapshot_renders_placeholder() {
        let engine = StatisticsEngine::new(StatsOptions::default());
        let rendered = render_snapshot(&engine.finalize(), "");
        assert!(rendered.contains("No vacancies matched the input."));
    }
}
