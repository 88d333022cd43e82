use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::FrontendConfig;
use crate::dump::{AstDump, StatementDump};
use crate::parser::{self, FrontendError};

#[derive(Parser)]
#[command(name = "qompiler")]
#[command(about = "Tokenize, classify and build the program tree of a qompiler source file")]
pub struct Cli {
    /// Input file path
    pub file: PathBuf,

    /// Print the classified statements with their token codes first
    #[arg(long)]
    pub tokens: bool,

    /// Configuration file (defaults to project.toml next to the input file)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => path.clone(),
            None => self
                .file
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("project.toml"),
        }
    }
}

/// Run the front end for parsed arguments, writing the report to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), FrontendError> {
    let config = FrontendConfig::from_project_toml(cli.config_path())?;
    let source = parser::read_source(&cli.file)?;

    let statements = parser::tokenize(&source, &config)?;
    let ast = parser::build(&statements, &config)?;

    let io_error = |e: std::io::Error| FrontendError::Io {
        path: "<stdout>".to_string(),
        source: e,
    };

    if cli.tokens {
        write!(out, "{}", StatementDump(&statements)).map_err(io_error)?;
    }
    writeln!(out, "Parsed: {}", cli.file.display()).map_err(io_error)?;
    writeln!(out).map_err(io_error)?;
    write!(out, "{}", AstDump(&ast)).map_err(io_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_file_and_flags() {
        let cli = Cli::parse_from(["qompiler", "prog.qc", "--tokens"]);
        assert_eq!(cli.file, PathBuf::from("prog.qc"));
        assert!(cli.tokens);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_default_config_path_sits_next_to_input() {
        let cli = Cli::parse_from(["qompiler", "dir/prog.qc"]);
        assert_eq!(cli.config_path(), PathBuf::from("dir/project.toml"));

        let cli = Cli::parse_from(["qompiler", "prog.qc", "--config", "other.toml"]);
        assert_eq!(cli.config_path(), PathBuf::from("other.toml"));
    }

    #[test]
    fn test_run_writes_trace() {
        let path = std::env::temp_dir().join("qompiler_cli_run_test.qc");
        std::fs::write(&path, "let x = 5;").unwrap();

        let cli = Cli::parse_from([
            OsStr::new("qompiler"),
            path.as_os_str(),
            OsStr::new("--config"),
            OsStr::new("/nonexistent/project.toml"),
        ]);
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Parsed: "));
        assert!(text.ends_with("\n\nAllocation \"let x = 5\"\n  leaf 0: \"x\"\n\n"));

        let _ = std::fs::remove_file(&path);
    }
}
