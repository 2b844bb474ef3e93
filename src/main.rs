use anyhow::Result;
use clap::Parser;
use solguard::cli::{Cli, Commands};
use solguard::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Guards {
            path,
            report_dir,
            config,
            keywords,
            exclude_keywords,
            ignore_patterns,
        } => commands::guards::run(commands::guards::GuardsConfig {
            path,
            report_dir,
            config,
            keywords,
            exclude_keywords,
            ignore_patterns,
        }),
        Commands::Frequency {
            path,
            cache_file,
            api_keys,
            config,
            show_paths,
            keywords,
            exclude_keywords,
        } => commands::frequency::run(commands::frequency::FrequencyConfig {
            path,
            cache_file,
            api_keys,
            config,
            show_paths,
            keywords,
            exclude_keywords,
        }),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
