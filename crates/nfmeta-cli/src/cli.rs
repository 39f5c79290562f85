use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nfmeta")]
#[command(about = "Export, check and apply the bacMAGmining workflow metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the workflow metadata document or a form preview.
    Schema(SchemaCommand),
    /// Parse and check a metadata document.
    Validate(ValidateCommand),
    /// Resolve a values file into pipeline arguments.
    Args(ArgsCommand),
    /// Register the workflow metadata and print the handle.
    Register(RegisterCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SchemaCommand {
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ValidateCommand {
    #[arg(long)]
    pub document: PathBuf,
    #[arg(long, default_value_t = false)]
    pub skip_schema_check: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ArgsCommand {
    #[arg(long)]
    pub values: PathBuf,
    #[arg(long, default_value_t = false)]
    pub check_paths: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RegisterCommand {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
