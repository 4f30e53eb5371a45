//! Lists the Gemini models an API key can use for content generation

use anyhow::Result;
use clap::Parser;
use jcl_optimizer::{logging, wiring};
use jclopt_application::ListModelsUseCase;
use jclopt_presentation::{CheckModelsCli, ConsoleFormatter};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = CheckModelsCli::parse();
    let _log_guard = logging::init(cli.verbose, None);

    let config = wiring::load_config(cli.config.as_ref(), false)?;
    let analysis = config.to_analysis_config();

    let resolver = wiring::credential_resolver(&config, &analysis, cli.secrets.as_deref());
    let resolution = wiring::credential_from_flag_or_config(cli.api_key.as_deref(), &resolver);
    let Some(credential) = resolution.into_credential() else {
        eprint!(
            "{}",
            ConsoleFormatter::format_models_error(
                "no API key found (use --api-key, GOOGLE_API_KEY or the secrets file)"
            )
        );
        return Ok(ExitCode::FAILURE);
    };

    println!("🔍 Checking available Gemini models...\n");

    let gateway = wiring::gemini_gateway(&config, &analysis)?;
    match ListModelsUseCase::new(gateway).execute(&credential).await {
        Ok(models) => {
            print!("{}", ConsoleFormatter::format_models(&models));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprint!("{}", ConsoleFormatter::format_models_error(&e.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
