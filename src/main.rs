use clap::Parser;

use qompiler::cli::{self, Cli};

fn main() -> std::process::ExitCode {
    // Logs go to stderr so the trace on stdout stays stable
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Cli::parse();
    let stdout = std::io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}
