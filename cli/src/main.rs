//! CLI entrypoint for JCL Optimizer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Password;
use jcl_optimizer::{input::JclSource, logging, wiring};
use jclopt_application::{
    AnalysisProgress, AnalyzeJclUseCase, CredentialResolution, NoProgress, ResolveCredentialUseCase,
};
use jclopt_domain::{Credential, ReportExport};
use jclopt_infrastructure::{ConfigLoader, FigmentSecretStore, FileConfig, MarkdownReportExporter};
use jclopt_presentation::{
    AnalyzeArgs, AppState, Cli, Commands, ConsoleFormatter, ServeArgs, SimpleProgress,
    SpinnerProgress, run_server,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let log_dir = match &cli.command {
        Some(Commands::Serve(args)) => args.log_dir.clone(),
        _ => None,
    };
    let _log_guard = logging::init(cli.verbose, log_dir.as_deref());

    info!("Starting JCL Optimizer");

    let config = wiring::load_config(cli.config.as_ref(), cli.no_config)?;

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Serve(args) => serve(&config, args).await,
        Commands::Analyze(args) => analyze(&config, args).await,
        Commands::Samples => {
            print!("{}", ConsoleFormatter::format_samples());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: &FileConfig, args: ServeArgs) -> Result<ExitCode> {
    let analysis = config.to_analysis_config();

    // === Dependency Injection ===
    let gateway = wiring::gemini_gateway(config, &analysis)?;
    let configured = wiring::resolve_credential(config, &analysis, None).into_credential();
    if configured.is_none() {
        info!("No API key configured; the form will ask for one");
    }

    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let state = AppState::new(gateway, analysis.settings, configured, server.session_ttl());
    run_server(state, &server.bind_address())
        .await
        .with_context(|| format!("Web server failed on {}", server.bind_address()))?;

    Ok(ExitCode::SUCCESS)
}

async fn analyze(config: &FileConfig, args: AnalyzeArgs) -> Result<ExitCode> {
    let analysis = config.to_analysis_config();
    let source = JclSource::from_args(args.file.as_deref(), args.sample.as_deref())?;
    let jcl = source.read()?;

    let resolver = wiring::credential_resolver(config, &analysis, None);
    let credential = match wiring::credential_from_flag_or_config(args.api_key.as_deref(), &resolver) {
        CredentialResolution::Resolved(credential) => Some(credential),
        CredentialResolution::NeedsInput => prompt_for_credential(&source, &resolver)?,
    };

    // === Dependency Injection ===
    let gateway = wiring::gemini_gateway(config, &analysis)?;
    let use_case = AnalyzeJclUseCase::new(gateway, analysis.settings.clone());

    let progress: Box<dyn AnalysisProgress> = if args.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = tokio::select! {
        result = use_case.execute_with_progress(credential.as_ref(), &jcl, progress.as_ref()) => result,
        _ = tokio::signal::ctrl_c() => {
            progress.on_request_complete(false);
            warn!("Interrupted; analysis abandoned");
            eprintln!("Interrupted.");
            return Ok(ExitCode::from(130));
        }
    };

    match result {
        Ok(report) => {
            println!("{}", ConsoleFormatter::format_report(&report));
            if let Some(target) = args.output {
                let path = MarkdownReportExporter::export(&target, &ReportExport::from_report(&report))?;
                eprint!("{}", ConsoleFormatter::format_exported(&path));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", ConsoleFormatter::format_error(&error));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Ask for the key on the terminal; without one the analysis reports it missing
fn prompt_for_credential(
    source: &JclSource,
    resolver: &ResolveCredentialUseCase<FigmentSecretStore>,
) -> Result<Option<Credential>> {
    if source.reads_stdin() || !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let entered = Password::new()
        .with_prompt("Google Gemini API Key")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read API key")?;

    Ok(resolver.accept_entered(&entered))
}
