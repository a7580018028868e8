use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use quadcal::config::Config;
use quadcal::{cli, pipeline, table};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logs go to stderr; stdout is reserved for the .ics artifact.
    let _ = TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if pipeline::is_empty_enrollment_error(&e) {
                eprintln!("{}", e);
            } else {
                eprintln!("Ocorreu um erro técnico: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    if args.first().map(String::as_str) == Some("init-config") {
        let path = args
            .get(1)
            .ok_or_else(|| anyhow!("init-config requires a destination path"))?;
        let path = PathBuf::from(path);
        Config::default().save(&path)?;
        eprintln!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config_path: Option<String> = None;
    let mut table_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut enrollment_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(flag_value(args, i, "--config")?);
                i += 2;
            }
            "--table" | "-t" => {
                table_path = Some(flag_value(args, i, "--table")?);
                i += 2;
            }
            "--output" | "-o" => {
                output_path = Some(flag_value(args, i, "--output")?);
                i += 2;
            }
            other if other.starts_with('-') => {
                return Err(anyhow!("Unknown option: {} (see 'quadcal --help')", other));
            }
            other => {
                if enrollment_path.is_some() {
                    return Err(anyhow!("Unexpected extra argument: {}", other));
                }
                enrollment_path = Some(other.to_string());
                i += 1;
            }
        }
    }

    let enrollment_path = enrollment_path
        .ok_or_else(|| anyhow!("Missing enrollment text file (see 'quadcal --help')"))?;

    let config = match &config_path {
        Some(p) => Config::load(Path::new(p))?,
        None => Config::default(),
    };

    let table_file: PathBuf = table_path
        .map(PathBuf::from)
        .or_else(|| config.table_path.clone())
        .ok_or_else(|| {
            anyhow!("No rooms table given. Pass --table <pages.json> or set table_path in the config.")
        })?;
    if !table_file.exists() {
        return Err(anyhow!(
            "Arquivo de turmas não encontrado: {}. Informe --table <pages.json>.",
            table_file.display()
        ));
    }

    let pages = table::load_pages(&table_file)?;
    let text = fs::read_to_string(&enrollment_path)
        .with_context(|| format!("Failed to read enrollment text '{}'", enrollment_path))?;

    let report = pipeline::run(&text, &pages, &config)?;

    match output_path {
        Some(path) => {
            fs::write(&path, &report.ics)
                .with_context(|| format!("Failed to write calendar '{}'", path))?;
            eprintln!(
                "Sucesso! {} disciplinas, {} eventos. Agenda salva em {}",
                report.disciplines, report.events, path
            );
        }
        None => {
            print!("{}", report.ics);
            eprintln!(
                "Sucesso! {} disciplinas, {} eventos.",
                report.disciplines, report.events
            );
        }
    }
    Ok(())
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i + 1)
        .filter(|v| !v.starts_with('-'))
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}
