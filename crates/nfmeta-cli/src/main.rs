use clap::Parser;
use nfmeta_cli::{
    execute_args, execute_register, execute_schema, execute_validate, Cli, Commands,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "nfmeta=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schema(command) => execute_schema(&command),
        Commands::Validate(command) => execute_validate(&command),
        Commands::Args(command) => execute_args(&command),
        Commands::Register(command) => execute_register(&command),
    };

    match result {
        Ok(output) => {
            println!("{output}");
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
