//! # Submit Subcommand
//!
//! Drives a form file through the full controller: validation, device
//! fingerprint, `POST /api/temp-loads/create`, and the sign-in redirect.
//!
//! Configuration comes from the `LOGIEMAN_*` environment variables; each
//! flag overrides its variable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use logieman_client::{ClientConfig, LoadClient};
use logieman_core::{EnvironmentProbe, LoadFormState};
use logieman_form::{LoadFormController, Navigator, SubmitOutcome};

use crate::fingerprint::HostProbe;

/// Arguments for the `logieman submit` subcommand.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Path to the form record (JSON, camelCase keys).
    pub form: PathBuf,

    /// API base URL. Overrides LOGIEMAN_API_BASE_URL.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Dashboard base for the sign-in redirect. Overrides LOGIEMAN_DASHBOARD_URL.
    #[arg(long)]
    pub dashboard_url: Option<String>,

    /// Request timeout in milliseconds. Overrides LOGIEMAN_TIMEOUT_MS.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// "Navigates" by printing the target URL.
#[derive(Debug, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &Url) {
        println!("Redirect: {url}");
    }
}

/// Execute the submit subcommand.
pub fn run_submit(args: &SubmitArgs) -> Result<u8> {
    let form = crate::read_form(&args.form)?;
    let config = client_config(args, |var| std::env::var(var).ok())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(submit_form(form, config, HostProbe::default(), PrintNavigator))
}

/// Resolve client configuration: flags first, then `env`.
fn client_config<F>(args: &SubmitArgs, env: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ClientConfig::from_lookup(|var| {
        let flag = match var {
            "LOGIEMAN_API_BASE_URL" => args.api_url.clone(),
            "LOGIEMAN_DASHBOARD_URL" => args.dashboard_url.clone(),
            "LOGIEMAN_TIMEOUT_MS" => args.timeout_ms.map(|ms| ms.to_string()),
            _ => None,
        };
        flag.or_else(|| env(var))
    })?;
    Ok(config)
}

/// Run one submission and report the outcome on stdout.
pub async fn submit_form<P, N>(
    form: LoadFormState,
    config: ClientConfig,
    probe: P,
    navigator: N,
) -> Result<u8>
where
    P: EnvironmentProbe,
    N: Navigator,
{
    tracing::debug!(base_url = %config.base_url, timeout_ms = config.timeout_ms, "submitting");
    let client = LoadClient::new(config)?;
    let redirect = client.dashboard_redirect_base().cloned();
    let controller =
        LoadFormController::new(client, probe, navigator).with_redirect_base(redirect);
    controller.load(form)?;

    match controller.submit().await? {
        SubmitOutcome::Invalid { errors, .. } => {
            println!("{} field(s) invalid:", errors.len());
            for (field, message) in errors.iter() {
                println!("  {field}: {message}");
            }
            Ok(1)
        }
        SubmitOutcome::Succeeded { fingerprint, .. } => {
            println!("Load posted. Device fingerprint: {fingerprint}");
            Ok(0)
        }
        SubmitOutcome::Failed { error, .. } => {
            tracing::error!("temp load submission failed: {error}");
            println!("Failed to post load. Please try again.");
            Ok(1)
        }
    }
}
