//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for jcl-optimizer
#[derive(Parser, Debug)]
#[command(name = "jcl-optimizer")]
#[command(author, version, about = "AI-powered mainframe batch (JCL) optimization analyzer")]
#[command(long_about = r#"
JCL Optimizer sends job control language to Google Gemini and returns a
markdown optimization report: parallelization opportunities, resource tuning,
I/O efficiency and an implementation roadmap.

The API key is read from the GOOGLE_API_KEY environment variable or the
secrets file (./.jclopt/secrets.toml). When neither is set you are asked for it.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./jclopt.toml       Project-level config
3. ~/.config/jcl-optimizer/config.toml   Global config

Example:
  jcl-optimizer serve --port 8501
  jcl-optimizer analyze --sample annuity --output reports/
  cat PAYROLL.jcl | jcl-optimizer analyze
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web form
    Serve(ServeArgs),
    /// Analyze one JCL file, sample or stdin and print the report
    Analyze(AnalyzeArgs),
    /// List the built-in JCL samples
    Samples,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides [server] host)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides [server] port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Read JCL from this file
    #[arg(short, long, value_name = "PATH", conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Use a built-in sample (annuity, manufacturing)
    #[arg(short, long, value_name = "ID")]
    pub sample: Option<String>,

    /// Write the report to this file, or into this directory as jcl_optimization_report.md
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// API key (takes precedence over configuration)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI arguments for the model listing utility
#[derive(Parser, Debug)]
#[command(name = "check-models")]
#[command(author, version, about = "List the Gemini models your API key can use for content generation")]
pub struct CheckModelsCli {
    /// API key (defaults to GOOGLE_API_KEY or the secrets file)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Path to the secrets file
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
