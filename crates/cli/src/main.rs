//! Minimal RISC-V simulator CLI.
//!
//! This binary runs one flat bare-metal image to completion. It performs:
//! 1. **Setup:** Builds the machine from defaults, an optional JSON config file, and flag overrides.
//! 2. **Run:** Loads the image at the RAM base and executes until the guest calls `exit`.
//! 3. **Exit:** Mirrors the guest's exit code, or reports the fault and exits with `FAULT_EXIT_CODE`.
//!
//! Guest output goes to stdout; diagnostics and logs (`RVMINI_LOG`) go to stderr.

use std::{fs, process};

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rvmini_core::common::FAULT_EXIT_CODE;
use rvmini_core::sim::loader;
use rvmini_core::soc::StdoutHost;
use rvmini_core::{Config, SimError, Simulator};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RVMINI_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "rvmini",
    author,
    version,
    about = "Minimal single-hart RISC-V simulator",
    long_about = "Run a flat RISC-V binary until it calls exit.\n\nThe process exit status is the guest's exit code. Faults print a diagnostic and the register file to stderr.\n\nExamples:\n  rvmini --program hello.bin\n  rvmini -p hello.bin --trace\n  RVMINI_LOG=debug rvmini -p hello.bin --stats"
)]
struct Cli {
    /// Flat binary image to execute.
    #[arg(short, long)]
    program: String,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<String>,

    /// Entry point as an offset from the RAM base (hex with 0x or decimal).
    #[arg(long, value_parser = parse_number)]
    entry: Option<u64>,

    /// Guest address of the first byte of RAM.
    #[arg(long, value_parser = parse_number)]
    ram_base: Option<u64>,

    /// RAM capacity in bytes.
    #[arg(long, value_parser = parse_size)]
    ram_size: Option<usize>,

    /// Log every executed instruction (also raises the default log filter to `trace`).
    #[arg(long)]
    trace: bool,

    /// Print run statistics to stderr on exit.
    #[arg(long)]
    stats: bool,

    /// Print the register file to stderr on exit.
    #[arg(long)]
    dump_regs: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let config = build_config(&cli).unwrap_or_else(|e| fatal(&e));

    let mut sim = Simulator::new(&config, StdoutHost::new()).unwrap_or_else(|e| fatal(&e));
    let image = loader::load_binary(&cli.program).unwrap_or_else(|e| {
        eprintln!(
            "\n[!] FATAL: Could not read program '{}': {}",
            cli.program, e
        );
        process::exit(e.exit_code());
    });
    if let Err(e) = sim.load(&image) {
        fatal(&e);
    }

    match sim.run() {
        Ok(code) => {
            report(&sim, &cli);
            process::exit(host_status(code));
        }
        Err(e) => {
            debug!(kind = e.kind(), pc = ?e.pc(), "emulation aborted");
            eprintln!("\n[!] FATAL: {e}");
            eprint!("{}", sim.cpu.dump_state());
            if cli.stats {
                eprint!("{}", sim.cpu.stats);
            }
            process::exit(e.exit_code());
        }
    }
}

/// Installs the stderr log subscriber; `RVMINI_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then individual flags.
fn build_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(entry) = cli.entry {
        config.general.entry_offset = entry;
    }
    if let Some(base) = cli.ram_base {
        config.memory.ram_base = base;
    }
    if let Some(size) = cli.ram_size {
        config.memory.ram_size = size;
    }
    if cli.trace {
        config.general.trace_instructions = true;
    }
    config.validate()?;
    Ok(config)
}

fn report(sim: &Simulator<StdoutHost>, cli: &Cli) {
    if cli.dump_regs {
        eprint!("{}", sim.cpu.dump_state());
    }
    if cli.stats {
        eprint!("{}", sim.cpu.stats);
    }
}

fn fatal(e: &SimError) -> ! {
    eprintln!("\n[!] FATAL: {e}");
    process::exit(FAULT_EXIT_CODE);
}

/// Maps a guest exit code onto the 8-bit host exit status.
///
/// The status is the low byte of the code, except that a non-zero code never
/// reports success and the guest can never report `FAULT_EXIT_CODE`; both cases
/// become 1.
fn host_status(code: u64) -> i32 {
    let low = (code & 0xFF) as i32;
    if code != 0 && low == 0 {
        warn!("guest exit code {} has no 8-bit host status; reporting 1", code);
        1
    } else if low == FAULT_EXIT_CODE {
        warn!(
            "guest exit code {} collides with the fault status {}; reporting 1",
            code, FAULT_EXIT_CODE
        );
        1
    } else {
        low
    }
}

/// Parses `0x`-prefixed hex or plain decimal.
fn parse_number(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}

fn parse_size(s: &str) -> Result<usize, String> {
    let n = parse_number(s)?;
    usize::try_from(n).map_err(|_| format!("{n} does not fit in a host address"))
}
