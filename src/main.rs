mod cli;

use clap::Parser;
use neurometric::error::NeurometricError;
use neurometric::equations;
use neurometric::report::{self, OutputFormat};
use neurometric::types::config::EngineMode;
use neurometric::types::report::{CalibrationReport, RankedScore, SolveReport};
use neurometric::types::state::{CalibrationInput, StateInput};
use neurometric::{config, engine, router, scenario};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn output_format(flag: Option<cli::ReportFormat>, configured: OutputFormat) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Table) => OutputFormat::Table,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        None => configured,
    }
}

fn run(cli: cli::Cli) -> Result<i32, NeurometricError> {
    let loaded = config::load_config(&cli.config_dir)?;
    let mode = if cli.demo {
        EngineMode::Demo
    } else {
        loaded.engine_mode()
    };
    let engine = engine::select(mode, loaded.seed());

    let rendered = match cli.command {
        cli::Commands::Solve(cmd) => {
            let text = cmd.text.join(" ");
            if text.trim().is_empty() {
                return Err(NeurometricError::EmptyInput);
            }
            let routed = router::route(&text);
            let detected = routed.construct;
            info!(construct = %detected, engine = engine.name(), "solving routed equation");
            let report = SolveReport {
                detected,
                fallback: routed.is_fallback(),
                ranked: RankedScore::new(detected, engine.evaluate(detected, &routed.state)),
            };
            report::render_solve(&report, output_format(cmd.format, loaded.format()))?
        }
        cli::Commands::Score(cmd) => {
            let state = StateInput::from(cmd.state).into_state()?;
            let format = output_format(cmd.format, loaded.format());
            match cmd.construct {
                Some(detected) => {
                    info!(construct = %detected, engine = engine.name(), "scoring construct");
                    let report = SolveReport {
                        detected,
                        fallback: false,
                        ranked: RankedScore::new(detected, engine.evaluate(detected, &state)),
                    };
                    report::render_solve(&report, format)?
                }
                None => {
                    info!(engine = engine.name(), "ranking all constructs");
                    let top = cmd.top.unwrap_or_else(|| loaded.top());
                    if top == 0 {
                        return Err(NeurometricError::InvalidInput(
                            "--top must be at least 1".to_string(),
                        ));
                    }
                    report::render_ranking(&engine.score_all(&state), top, format)?
                }
            }
        }
        cli::Commands::Calibrate(cmd) => {
            let input = CalibrationInput {
                l_low: cmd.l_low,
                l_mid: cmd.l_mid,
                l_high: cmd.l_high,
                s: cmd.severity,
                coping: cmd.coping,
                rescue: cmd.rescue,
                reversibility: cmd.reversibility,
                control: cmd.control,
            }
            .checked()?;
            info!("running risk calibration");
            let report = CalibrationReport {
                scenario: cmd.context.as_deref().and_then(scenario::classify_scenario),
                calibration: equations::calibrate(&input),
            };
            report::render_calibration(&report, output_format(cmd.format, loaded.format()))?
        }
    };

    println!("{}", rendered.trim_end());
    Ok(exit_code::SUCCESS)
}

fn exit_code_for(error: &NeurometricError) -> i32 {
    match error {
        NeurometricError::InvalidInput(_) | NeurometricError::EmptyInput => {
            exit_code::INVALID_INPUT
        }
        _ => exit_code::RUNTIME_FAILURE,
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}
