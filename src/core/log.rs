//! Activity log: one CSV line per operation, kept next to the config file.

use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

const MAX_OP_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "deduct" => Colour::Yellow,
        "config_migrate" => Colour::Purple,
        other if other.ends_with("_failed") => Colour::Red,
        other if other.starts_with("fill_") => Colour::Green,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn write(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        wtr.serialize(LogEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })?;
        wtr.flush()?;
        Ok(())
    }

    pub fn read(path: &Path) -> AppResult<Vec<LogEntry>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        let mut entries = Vec::new();
        for entry in rdr.deserialize::<LogEntry>() {
            entries.push(entry?);
        }
        Ok(entries)
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = Self::read(path)?;

        if entries.is_empty() {
            info(format!("Activity log is empty ({})", path.display()));
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        println!("📜 Activity log:\n");

        for (n, entry) in entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            let mut visible = op_target(entry);
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is colored
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                n + 1,
                entry.date,
                colored,
                padding,
                entry.message,
            );
        }

        Ok(())
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// Write an activity line; a failure is reported but never fails the caller.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = LogLogic::write(path, operation, target, message) {
        warning(format!("Failed to write activity log: {e}"));
    }
}
