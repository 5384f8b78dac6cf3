use anyhow::Result;
use scriptrate::cli::{Cli, Commands};
use scriptrate::commands::{self, AnalyzeConfig};
use scriptrate::observability::init_tracing;

fn main() {
    let cli = scriptrate::cli::parse_args();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            commands::exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Analyze {
            paths,
            output,
            format,
            config,
            jobs,
            embedder,
            verbosity,
            quiet,
        } => {
            init_tracing(verbosity, quiet);
            commands::handle_analyze(AnalyzeConfig {
                paths,
                output,
                format,
                config,
                jobs,
                embedder,
                quiet,
            })
        }
        Commands::Init { force } => {
            init_tracing(0, false);
            commands::init_config(force)?;
            Ok(commands::analyze::EXIT_OK)
        }
    }
}
