//! Presentation of admissible slots: a plain-text weekly timetable and a
//! JSON report. The search output is consumed as-is; nothing here feeds
//! back into it.

use serde::Serialize;

use crate::engine::SlotMap;
use crate::model::{Hour, Weekday};

/// Working-day display window; widened when a slot falls outside it.
const DAY_START: Hour = 8;
const DAY_END: Hour = 17;

/// Per-project result in a machine-readable shape.
#[derive(Debug, Serialize)]
pub struct SlotReport<'a> {
    pub project: &'a str,
    pub slots: &'a SlotMap,
}

pub fn json_report(results: &[(String, SlotMap)]) -> serde_json::Result<String> {
    let reports: Vec<SlotReport<'_>> = results
        .iter()
        .map(|(id, slots)| SlotReport { project: id, slots })
        .collect();
    serde_json::to_string_pretty(&reports)
}

/// Render all projects' admissible slots as one weekly timetable: hour rows
/// against weekday columns, each admissible cell accumulating the ids of
/// the projects that can meet then.
pub fn week_table(results: &[(String, SlotMap)]) -> String {
    let mut days = vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    for (_, slots) in results {
        for &day in slots.keys() {
            if !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days.sort();

    let (mut first, mut last) = (DAY_START, DAY_END);
    for (_, slots) in results {
        for hours in slots.values() {
            if let Some(&lo) = hours.first() {
                first = first.min(lo);
            }
            if let Some(&hi) = hours.last() {
                last = last.max(hi + 1);
            }
        }
    }

    let labels: Vec<String> = (first..last).map(|h| format!("{h}h-{}h", h + 1)).collect();

    let cells: Vec<Vec<String>> = (first..last)
        .map(|hour| {
            days.iter()
                .map(|&day| {
                    let mut text = String::new();
                    for (id, slots) in results {
                        if slots.get(&day).is_some_and(|hours| hours.contains(&hour)) {
                            text.push_str(&format!("| {id} |"));
                        }
                    }
                    text
                })
                .collect()
        })
        .collect();

    let label_width = labels.iter().map(String::len).max().unwrap_or(0);
    let widths: Vec<usize> = days
        .iter()
        .enumerate()
        .map(|(col, day)| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain([day.to_string().len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for (col, day) in days.iter().enumerate() {
        out.push_str(&format!("  {:<width$}", day.to_string(), width = widths[col]));
    }
    push_trimmed_newline(&mut out);
    for (row, label) in labels.iter().enumerate() {
        out.push_str(&format!("{label:<label_width$}"));
        for col in 0..days.len() {
            out.push_str(&format!("  {:<width$}", cells[row][col], width = widths[col]));
        }
        push_trimmed_newline(&mut out);
    }
    out
}

fn push_trimmed_newline(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
