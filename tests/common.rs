#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use shiftbook::core::pay::{self, PayRates};
use shiftbook::models::TimesheetEntry;

pub fn sb() -> Command {
    cargo_bin_cmd!("shiftbook")
}

/// Create a unique test bucket directory inside the system temp dir and
/// remove any leftover state from a previous run
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftbook", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).ok();
    dir
}

/// Default rates as shipped in the config: 11/h, 20% deduction, 37% employer
pub fn default_rates() -> PayRates {
    PayRates {
        hourly_rate: 11.0,
        cpf_deduction: 0.20,
        cpf_employer: 0.37,
    }
}

/// Build a complete entry through the real calculator
pub fn sample_entry(id: u64, date: &str, t_in: &str, t_out: &str) -> TimesheetEntry {
    pay::build_entry(id, &default_rates(), date, "Tampines", t_in, t_out)
        .expect("sample entry should build")
}

/// Add a shift via the CLI
pub fn add_shift(dir: &str, date: &str, branch: &str, t_in: &str, t_out: &str) {
    sb().args([
        "--data-dir",
        dir,
        "add",
        date,
        branch,
        "--in",
        t_in,
        "--out",
        t_out,
    ])
    .assert()
    .success();
}
