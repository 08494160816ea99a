//! # Reference Subcommand
//!
//! Prints the fixed reference lists offered by the form selects.

use anyhow::Result;
use clap::Args;

use logieman_core::{LoadTypeCode, COUNTRIES};

/// Arguments for the `logieman reference` subcommand.
#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Print as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the reference subcommand.
pub fn run_reference(args: &ReferenceArgs) -> Result<u8> {
    println!("{}", render(args.json)?);
    Ok(0)
}

fn render(json: bool) -> Result<String> {
    if json {
        let load_types: Vec<_> = LoadTypeCode::ALL
            .iter()
            .map(|t| serde_json::json!({ "label": t.label(), "code": t.as_str() }))
            .collect();
        let doc = serde_json::json!({ "countries": COUNTRIES, "loadTypes": load_types });
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    let mut out = String::from("Countries:\n");
    for country in COUNTRIES {
        out.push_str(&format!("  {country}\n"));
    }
    out.push_str("Load types:\n");
    for load_type in LoadTypeCode::ALL {
        out.push_str(&format!("  {:<28} {}\n", load_type.label(), load_type.as_str()));
    }
    Ok(out.trim_end().to_string())
}
