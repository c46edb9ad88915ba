//! Stepper harness CLI for generated RISC-V models.
//!
//! This binary drives a model over the host substrate. It performs:
//! 1. **Setup:** Parses arguments, installs logging, and builds the core
//!    from the configuration plus flag overrides.
//! 2. **Loading:** Reads the ELF image, places its segments in physical
//!    memory, and applies the entry point as the reset vector.
//! 3. **Run Loop:** Steps the model, checking after every step for a
//!    latched fault, the watched exit store, or a held PC.
//! 4. **Reporting:** Prints run statistics, and the register file when
//!    debug logging is enabled.

use clap::Parser;
use skiff_core::common::constants::TRACE_EVENT_TARGET;
use skiff_core::common::error::ConfigError;
use skiff_core::model::FreeRun;
use skiff_core::sim::loader;
use skiff_core::{Config, Core, Model, SimulationException, Simulator};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable consulted for log filter directives.
const LOG_ENV_VAR: &str = "SKIFF_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "skiff",
    version,
    about = "Stepper harness for formally generated RISC-V instruction-set models",
    long_about = "Load a bare-metal ELF image into the physical memory window and step a model \
                  over it until the program exits, spins in place, or faults.\n\nExamples:\n  \
                  skiff --elf-path tests/hello.elf\n  \
                  skiff --elf-path dhrystone.elf --memory-size 0x10000000 -vv\n  \
                  skiff --elf-path boot.elf --output-log-path trace.jsonl -v"
)]
struct Args {
    /// ELF image to load and run.
    #[arg(short, long)]
    elf_path: PathBuf,

    /// RAM size in bytes, decimal or 0x-prefixed hex.
    #[arg(short, long, value_parser = parse_size)]
    memory_size: Option<u64>,

    /// RAM base address, decimal or 0x-prefixed hex.
    #[arg(long, value_parser = parse_size)]
    memory_base: Option<u64>,

    /// Consecutive same-PC steps treated as program exit (0 disables).
    #[arg(long)]
    max_same_instruction: Option<u64>,

    /// Stop after this many steps.
    #[arg(short = 'n', long)]
    max_steps: Option<u64>,

    /// JSON configuration file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write structured trace events to this file, one JSON record per line.
    #[arg(short, long)]
    output_log_path: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    process::exit(cmd_run(&args));
}

/// Runs the harness end to end; returns the process exit code.
fn cmd_run(args: &Args) -> i32 {
    if let Err(err) = init_logging(args.verbose, args.output_log_path.as_deref()) {
        eprintln!("failed to initialize logging: {err}");
        return 1;
    }

    let config = match build_config(args) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };

    let mut core = Core::new(&config);

    let image = match loader::read_image(&args.elf_path) {
        Ok(image) => image,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };
    let entry = match loader::load_elf(&mut core.mem, &image) {
        Ok(entry) => entry,
        Err(err) => {
            error!("{err}");
            return 1;
        }
    };
    info!("loaded {} (entry {entry:#x})", args.elf_path.display());

    let mut sim = Simulator::new(core, FreeRun, &config);
    sim.init();
    sim.reset_vector(entry);

    let code = run_loop(&mut sim, args.max_steps);

    sim.core().stats.print();
    if tracing::enabled!(Level::DEBUG) {
        sim.core().regs.dump();
    }
    code
}

/// Steps the model until `check_step` reports an exception or the step
/// limit is reached; returns the process exit code.
fn run_loop<M: Model>(sim: &mut Simulator<M>, max_steps: Option<u64>) -> i32 {
    let mut stepped: u64 = 0;
    loop {
        if let Some(limit) = max_steps {
            if stepped >= limit {
                info!("step limit reached after {stepped} steps");
                return 0;
            }
        }
        sim.step();
        stepped += 1;
        if let Err(exception) = sim.check_step() {
            return match exception {
                SimulationException::Exited => {
                    info!("simulation exit successfully");
                    0
                }
                SimulationException::Stalled { pc, count } => {
                    info!("pc held at {pc:#x} for {count} steps; treating as program exit");
                    0
                }
                SimulationException::OutOfBounds(fault) => {
                    error!("simulation exit with error: {fault}");
                    1
                }
            };
        }
    }
}

/// Builds the run configuration from the optional file plus flag overrides.
fn build_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match args.config.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(size) = args.memory_size {
        config.system.ram_size = size as usize;
    }
    if let Some(base) = args.memory_base {
        config.system.ram_base = base;
    }
    if let Some(limit) = args.max_same_instruction {
        config.harness.max_same_instruction = limit;
    }
    Ok(config)
}

/// Installs the log stack: a console layer on stderr filtered by
/// verbosity (or the `SKIFF_LOG` environment variable), plus an optional
/// JSON-lines layer carrying only structured trace events.
fn init_logging(verbose: u8, output_log_path: Option<&Path>) -> Result<(), std::io::Error> {
    let default_level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    match output_log_path {
        Some(path) => {
            let file = File::create(path)?;
            let events = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Arc::new(file))
                .with_filter(Targets::new().with_target(TRACE_EVENT_TARGET, LevelFilter::TRACE));
            tracing_subscriber::registry()
                .with(console)
                .with(events)
                .init();
        }
        None => tracing_subscriber::registry().with(console).init(),
    }
    Ok(())
}

/// Parses a byte count or address given as decimal or 0x-prefixed hex.
fn parse_size(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        u64::from_str_radix(&hex.replace('_', ""), 16)
    } else {
        trimmed.replace('_', "").parse()
    };
    parsed.map_err(|err| format!("invalid size '{raw}': {err}"))
}
