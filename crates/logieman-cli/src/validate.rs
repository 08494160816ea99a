//! # Validate Subcommand
//!
//! Runs the field validator over a form file without contacting the API.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

use logieman_core::{validate, LoadFormState};

/// Arguments for the `logieman validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the form record (JSON, camelCase keys).
    pub form: PathBuf,

    /// Evaluate the scheduled date against this day instead of today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let form = crate::read_form(&args.form)?;
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let (code, report) = check(&form, today);
    println!("{report}");
    Ok(code)
}

fn check(form: &LoadFormState, today: NaiveDate) -> (u8, String) {
    match validate(form, today) {
        Ok(load) => (
            0,
            format!(
                "OK: {} kg {} from {} to {} on {}",
                load.weight_kg(),
                load.load_type(),
                form.source_country,
                form.destination_country,
                load.scheduled_date()
            ),
        ),
        Err(errors) => {
            let mut report = format!("{} field(s) invalid:", errors.len());
            for (field, message) in errors.iter() {
                report.push_str(&format!("\n  {field}: {message}"));
            }
            tracing::debug!(focus = ?errors.first_invalid(), "validation failed");
            (1, report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_form() -> LoadFormState {
        LoadFormState {
            source_country: "India".into(),
            destination_country: "Sri Lanka".into(),
            weight_kg: "700".into(),
            load_type: "Full Truckload (FTL)".into(),
            material_type: "Rice".into(),
            scheduled_date: "2026-10-19".into(),
            hsn_code: None,
        }
    }

    #[test]
    fn valid_form_exits_zero() {
        let (code, report) = check(&valid_form(), today());
        assert_eq!(code, 0);
        assert!(report.starts_with("OK:"), "{report}");
        assert!(report.contains("FTL"));
    }

    #[test]
    fn errors_are_listed_in_form_order() {
        let mut form = valid_form();
        form.scheduled_date = "2026-10-18".into();
        form.destination_country = "India".into();

        let (code, report) = check(&form, today());
        assert_eq!(code, 1);
        let dest = report.find("Destination must be different from source").unwrap();
        let date = report.find("Scheduled date cannot be in the past").unwrap();
        assert!(dest < date);
        assert!(report.starts_with("2 field(s) invalid:"));
    }

    #[test]
    fn run_validate_reads_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("load.json");
        std::fs::write(&path, serde_json::to_string(&valid_form()).unwrap()).unwrap();

        let args = ValidateArgs {
            form: path,
            today: Some(today()),
        };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }
}
