//! Box-drawn text tables for listing commands.

use std::io::{self, Write};

use crate::domain::{Car, Job, User};

const JOB_COLUMNS: [&str; 7] = [
    "job_id",
    "customer_id",
    "plate",
    "location",
    "status",
    "cleaner_id",
    "timestamp",
];
const CAR_COLUMNS: [&str; 3] = ["car_id", "plate", "model"];
const USER_COLUMNS: [&str; 4] = ["user_id", "name", "role", "phone"];

pub(crate) fn write_jobs(out: &mut impl Write, jobs: &[Job]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = jobs
        .iter()
        .map(|job| {
            vec![
                job.id().to_string(),
                job.customer_id().to_string(),
                job.plate().to_owned(),
                job.location().to_owned(),
                job.status().to_string(),
                job.cleaner_id().map(ToString::to_string).unwrap_or_default(),
                job.requested_at().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            ]
        })
        .collect();
    write_table(out, &JOB_COLUMNS, &rows)
}

pub(crate) fn write_cars(out: &mut impl Write, cars: &[Car]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            vec![
                car.id().to_string(),
                car.plate().to_owned(),
                car.model().to_owned(),
            ]
        })
        .collect();
    write_table(out, &CAR_COLUMNS, &rows)
}

pub(crate) fn write_users(out: &mut impl Write, users: &[User]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|user| {
            vec![
                user.id().to_string(),
                user.name().to_owned(),
                user.role().to_string(),
                user.phone().to_owned(),
            ]
        })
        .collect();
    write_table(out, &USER_COLUMNS, &rows)
}

/// Write `rows` under `columns`, followed by a row count.
///
/// Every row must have one cell per column.
fn write_table(out: &mut impl Write, columns: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let mut widths: Vec<usize> = columns.iter().map(|column| column.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_border(out, &widths, ('┌', '┬', '┐'))?;
    write_cells(out, &widths, columns.iter().copied())?;
    write_border(out, &widths, ('├', '┼', '┤'))?;
    for row in rows {
        write_cells(out, &widths, row.iter().map(String::as_str))?;
    }
    write_border(out, &widths, ('└', '┴', '┘'))?;

    let noun = if rows.len() == 1 { "row" } else { "rows" };
    writeln!(out, "({} {noun})", rows.len())
}

fn write_border(
    out: &mut impl Write,
    widths: &[usize],
    (left, middle, right): (char, char, char),
) -> io::Result<()> {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(width + 2)).collect();
    writeln!(out, "{left}{}{right}", segments.join(&middle.to_string()))
}

fn write_cells<'a>(
    out: &mut impl Write,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    write!(out, "│")?;
    for (cell, &width) in cells.zip(widths) {
        write!(out, " {cell:<width$} │")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::{JobId, UserId};

    fn render(columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut out = Vec::new();
        write_table(&mut out, columns, rows).expect("write to buffer");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[rstest]
    fn pads_columns_to_widest_cell() {
        let rendered = render(
            &["id", "plate"],
            &[vec!["1".to_owned(), "XYZ-123".to_owned()]],
        );

        assert_eq!(
            rendered,
            concat!(
                "┌────┬─────────┐\n",
                "│ id │ plate   │\n",
                "├────┼─────────┤\n",
                "│ 1  │ XYZ-123 │\n",
                "└────┴─────────┘\n",
                "(1 row)\n",
            )
        );
    }

    #[rstest]
    fn empty_table_still_prints_header() {
        let rendered = render(&["user_id"], &[]);

        assert!(rendered.contains("│ user_id │"));
        assert!(rendered.ends_with("(0 rows)\n"));
    }

    #[rstest]
    fn job_timestamps_are_labelled_utc() {
        let requested_at = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
            .single()
            .expect("unambiguous time");
        let job = Job::request(
            JobId::random(),
            UserId::random(),
            "XYZ-123",
            "Downtown",
            requested_at,
        );
        let mut out = Vec::new();
        write_jobs(&mut out, &[job]).expect("write to buffer");
        let rendered = String::from_utf8(out).expect("utf-8 output");

        assert!(rendered.contains("2026-03-14 09:30:00 UTC"));
    }
}
