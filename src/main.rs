//! Clipwire CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipwire::cli::{
    app::{load_merged_config, run_decode, run_dump, run_encode, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_tracing,
    presenter::Presenter,
    DecodeOptions, DumpOptions, EncodeOptions,
};
use clipwire::domain::config::{AppConfig, BufferEncoding};
use clipwire::domain::error::ConfigError;
use clipwire::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Build CLI config from args
    let cli_config = AppConfig {
        encoding: cli.encoding.map(|e| BufferEncoding::from(e).to_string()),
        ..Default::default()
    };

    let config = load_merged_config(&store, cli_config).await;
    init_tracing(config.log_level_or_default());

    let encoding = config.encoding_or_default();
    let max_buffer_size = config.max_buffer_size_or_default();

    match cli.command {
        Commands::Config { action } => {
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e @ ConfigError::ValidationError { .. }) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Encode {
            output,
            time,
            formats,
        } => {
            let options = EncodeOptions {
                output,
                encoding,
                time,
                formats,
            };
            run_encode(options, &presenter).await
        }
        Commands::Decode { input, time } => {
            let options = DecodeOptions {
                input,
                encoding,
                time,
                max_buffer_size,
            };
            run_decode(options, &presenter).await
        }
        Commands::Dump { input } => {
            let options = DumpOptions {
                input,
                encoding,
                max_buffer_size,
            };
            run_dump(options, &presenter).await
        }
    }
}
