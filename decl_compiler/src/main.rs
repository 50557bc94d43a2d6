use clap::{Parser, ValueEnum};
use decl_compiler::config::runtime::LogLevel;
use decl_compiler::config::RuntimeConfig;
use decl_compiler::pipeline::{self, AnalysisDriver, PipelineError, StageReport};
use decl_compiler::{logging, Stage};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Lexical, syntax and semantic analysis of typed declaration statements
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to analyze (.java or .txt)
    #[arg(required_unless_present = "interactive")]
    file: Option<PathBuf>,

    /// Last stage to run; earlier stages run first
    #[arg(short, long, value_name = "STAGE", default_value = "semantic")]
    stage: Stage,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Runtime preferences file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start a line-oriented session instead of a single run
    #[arg(short, long)]
    interactive: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::from(1)
        }
    }
}

/// Returns whether every executed stage passed
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::from_toml_file(path)?,
        None => RuntimeConfig::default(),
    };

    if cli.verbose {
        config.logging.enable_console_logging = true;
        config.logging.min_log_level = LogLevel::Debug;
    }

    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    pipeline::validate_pipeline()?;

    if cli.verbose {
        eprintln!("{}", logging::get_system_diagnostics());
    }

    let mut driver = AnalysisDriver::from_config(&config);

    if cli.interactive {
        if let Some(file) = &cli.file {
            open_file(&mut driver, &path_arg(file)?);
        }
        return interactive(&mut driver);
    }

    let file = cli.file.ok_or("an input file is required")?;
    driver.load_file(&path_arg(&file)?)?;

    let reports = driver.run_through(cli.stage)?;
    let output = driver.output(&reports);

    match cli.format {
        OutputFormat::Text => reports.iter().for_each(print_report),
        OutputFormat::Json => println!("{}", output.to_json_pretty()?),
    }

    Ok(output.all_passed())
}

fn path_arg(path: &std::path::Path) -> Result<String, String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| format!("path is not valid UTF-8: {}", path.display()))
}

fn print_report(report: &StageReport) {
    println!("{}", report.message());
    if let StageReport::Lexical(result) = report {
        if result.success {
            for token in &result.payload {
                println!("  {}", token);
            }
        }
    }
    if let StageReport::Semantic(result) = report {
        print_symbols(&result.payload);
    }
    println!();
}

fn print_symbols(symbols: &decl_compiler::SymbolTable) {
    for entry in symbols {
        println!(
            "  {} {} = {} (line {})",
            entry.declared_type, entry.name, entry.raw_value, entry.declared_on_line
        );
    }
}

fn open_file(driver: &mut AnalysisDriver, path: &str) {
    match driver.load_file(path) {
        Ok(metadata) => println!(
            "Loaded {} ({} lines, {})",
            metadata.path.display(),
            metadata.line_count,
            metadata.human_readable_size()
        ),
        Err(error) => println!("{}", error),
    }
}

const HELP: &str = "\
Commands:
  open <FILE>   load a source file
  lexical       run lexical analysis
  syntax        run syntax analysis (after lexical passes)
  semantic      run semantic analysis (after syntax passes)
  status        show which stages have passed
  tokens        show tokens from the last lexical pass
  symbols       show the symbol table from the last semantic pass
  clear         unload the source and reset
  help          show this list
  quit          leave";

/// Returns whether the session ended with semantic analysis passed
fn interactive(driver: &mut AnalysisDriver) -> Result<bool, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", HELP);

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        match command {
            "open" => match words.next() {
                Some(path) => open_file(driver, path),
                None => println!("usage: open <FILE>"),
            },
            "lexical" | "syntax" | "semantic" => {
                let stage = command.parse::<Stage>()?;
                match driver.run_stage(stage) {
                    Ok(report) => print_report(&report),
                    Err(error @ PipelineError::StageLocked { .. })
                    | Err(error @ PipelineError::NoSource) => println!("{}", error),
                    Err(error) => return Err(error.into()),
                }
            }
            "status" => print_status(driver),
            "tokens" => {
                for token in driver.session().tokens() {
                    println!("  {}", token);
                }
            }
            "symbols" => print_symbols(driver.session().symbols()),
            "clear" => {
                driver.clear();
                println!("Cleared");
            }
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("unknown command '{}' (try 'help')", other),
        }
    }

    Ok(driver.session().semantic_passed())
}

fn print_status(driver: &AnalysisDriver) {
    let session = driver.session();
    let source = match (session.source_loaded(), driver.source_path()) {
        (true, Some(path)) => path.display().to_string(),
        (true, None) => "inline text".to_string(),
        (false, _) => "none".to_string(),
    };

    println!("source: {}", source);
    for stage in Stage::ALL {
        let state = if session.flags().passed(stage) {
            "passed"
        } else if session.can_run(stage) {
            "ready"
        } else {
            "locked"
        };
        println!("  {:<8} {}", stage, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["decl_compiler", "Main.java"]).unwrap();
        assert_eq!(cli.stage, Stage::Semantic);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_cli_stage_and_format() {
        let cli =
            Cli::try_parse_from(["decl_compiler", "a.txt", "--stage", "syntax", "-f", "json"])
                .unwrap();
        assert_eq!(cli.stage, Stage::Syntax);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_requires_file_unless_interactive() {
        assert!(Cli::try_parse_from(["decl_compiler"]).is_err());
        assert!(Cli::try_parse_from(["decl_compiler", "--interactive"]).is_ok());
        assert!(Cli::try_parse_from(["decl_compiler", "a.txt", "--stage", "parse"]).is_err());
    }
}
