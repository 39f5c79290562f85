mod cli;
mod config;
mod run;

pub use cli::{ArgsCommand, Cli, Commands, OutputFormat, RegisterCommand, SchemaCommand, ValidateCommand};
pub use config::{expand_env_placeholders, load_argument_values, ValuesError};
pub use run::{execute_args, execute_register, execute_schema, execute_validate, CliError};
