//! mipsim command-line front end.
//!
//! This binary runs one program image to completion. It performs:
//! 1. **Configuration:** Built-in defaults, optionally a JSON file, then flag overrides.
//! 2. **Loading:** Parses the hex text image and places it at address 0.
//! 3. **Execution:** Runs the fetch-execute loop against the process stdin/stdout.
//! 4. **Reporting:** On a fault, prints the faulting instruction and a register dump.
//!
//! Exit status is 0 on a normal halt, 2 for usage or configuration errors, 3 when the
//! program cannot be loaded, and 4 on a runtime fault.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use mipsim_core::Simulator;
use mipsim_core::common::{AccessType, Trap};
use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::soc::HostConsole;

const EXIT_CONFIG: u8 = 2;
const EXIT_LOAD: u8 = 3;
const EXIT_FAULT: u8 = 4;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-subset instruction-set emulator",
    long_about = "Run a program given as whitespace-separated 32-bit hex words.\n\nThe program is loaded at address 0 and runs until it executes the exit syscall or falls off the end of its text.\n\nExamples:\n  mipsim prog.hex\n  mipsim -v prog.hex\n  mipsim --strict --max-instructions 100000 prog.hex\n  mipsim --config machine.json prog.hex"
)]
struct Cli {
    /// Program image: hex instruction words separated by whitespace.
    program: PathBuf,

    /// Trace every instruction to stdout and print registers and statistics at exit.
    #[arg(short, long)]
    verbose: bool,

    /// Treat unknown opcodes, function codes, and syscalls as fatal.
    #[arg(long)]
    strict: bool,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop with a fault after N instructions.
    #[arg(long, value_name = "N")]
    max_instructions: Option<u64>,

    /// Keep register 0 hard-wired to zero.
    #[arg(long)]
    pin_zero: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let mut sim = Simulator::new(&config, Box::new(HostConsole::host()));
    if let Err(e) = sim.load_file(&cli.program) {
        eprintln!("error: {e}");
        return ExitCode::from(EXIT_LOAD);
    }

    let result = sim.run();

    if let Err(trap) = &result {
        report_fault(&sim.cpu, trap);
    }
    if cli.verbose || result.is_err() {
        println!();
        sim.cpu.dump_state();
    }
    if cli.verbose {
        sim.cpu.stats.print();
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_FAULT),
    }
}

/// Resolves the configuration: defaults, then `--config`, then individual flags.
fn build_config(cli: &Cli) -> Result<Config, mipsim_core::config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    config.general.trace_instructions |= cli.verbose;
    config.general.strict |= cli.strict;
    config.isa.pin_zero_register |= cli.pin_zero;
    if cli.max_instructions.is_some() {
        config.general.max_instructions = cli.max_instructions;
    }
    Ok(config)
}

/// Installs the global subscriber.
///
/// Verbose runs send every event down to TRACE to stdout so the instruction trace
/// interleaves with program output. Otherwise `RUST_LOG` (default `warn`) filters
/// events to stderr. Colour is used only when the stream is a terminal.
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(io::stdout)
            .with_ansi(io::stdout().is_terminal())
            .with_target(false)
            .without_time()
            .init();
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .init();
    }
}

/// Prints the trap with the address and disassembly of the instruction that caused it.
fn report_fault(cpu: &Cpu, trap: &Trap) {
    // Fetch faults and the budget check fire before `current_pc` is updated.
    let pc = match trap {
        Trap::MemoryFault {
            access: AccessType::Fetch,
            ..
        }
        | Trap::InstructionLimit(_) => cpu.pc,
        _ => cpu.current_pc,
    };

    eprintln!("\n[!] FATAL: {trap}");
    match cpu.memory.read_u32(i64::from(pc), AccessType::Fetch) {
        Ok(word) => eprintln!("    at {pc:#06x}: {word:#010x}  {}", disassemble(word)),
        Err(_) => eprintln!("    at {pc:#06x}"),
    }
}
