//! Single-cycle RV32I simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Testbench run:** Execute a program until the acceptance check decides (default).
//! 2. **Stepping:** Execute a fixed number of cycles and print each one.
//! 3. **Disassembly:** List a program image with addresses and mnemonics.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rv32sc_core::common::SimError;
use rv32sc_core::config::Config;
use rv32sc_core::core::CycleReport;
use rv32sc_core::isa::disasm::disassemble;
use rv32sc_core::sim::program::DEFAULT_PROGRAM;
use rv32sc_core::sim::{Simulator, TestbenchOutcome, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Single-cycle RV32I simulator",
    long_about = "Run a program on the single-cycle RV32I core, step it cycle by cycle, or disassemble an image.\n\nPrograms are $readmemh-style hex files; without --program the built-in reference test runs.\n\nExamples:\n  sim run\n  sim run --program riscvtest.txt --trace\n  sim step --cycles 5 --program riscvtest.txt\n  sim disasm riscvtest.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run until the testbench passes or fails.
    Run {
        /// Hex program image (default: built-in reference program).
        #[arg(short, long)]
        program: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the cycle budget.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every retired instruction.
        #[arg(long)]
        trace: bool,

        /// Print PC and registers when the run ends.
        #[arg(long)]
        dump: bool,
    },

    /// Run a fixed number of cycles, printing each.
    Step {
        /// Hex program image (default: built-in reference program).
        #[arg(short, long)]
        program: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of cycles to execute.
        #[arg(short = 'n', long, default_value_t = 1)]
        cycles: u64,
    },

    /// Disassemble a hex program image.
    Disasm {
        /// Hex program image.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            max_cycles,
            trace,
            dump,
        } => cmd_run(program.as_deref(), config.as_deref(), max_cycles, trace, dump),
        Commands::Step {
            program,
            config,
            cycles,
        } => cmd_step(program.as_deref(), config.as_deref(), cycles).map(|()| 0),
        Commands::Disasm { path } => cmd_disasm(&path).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{e}");
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}

/// Installs the fmt subscriber; `RUST_LOG` overrides the default filter.
fn init_logging(trace: bool) {
    let default = if trace { "info,rv32sc_core=trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a simulator from optional config and program paths.
///
/// `adjust` applies command-line overrides on top of the loaded config.
fn build(
    program: Option<&Path>,
    config: Option<&Path>,
    adjust: impl FnOnce(&mut Config),
) -> Result<Simulator, SimError> {
    let mut config = match config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    adjust(&mut config);

    let image = match program {
        Some(path) => loader::load_hex_file(path)?,
        None => DEFAULT_PROGRAM.to_vec(),
    };

    let mut sim = Simulator::new(&config)?;
    sim.load_program(&image)?;
    Ok(sim)
}

/// Runs the testbench; returns the process exit code.
fn cmd_run(
    program: Option<&Path>,
    config: Option<&Path>,
    max_cycles: Option<u64>,
    trace: bool,
    dump: bool,
) -> Result<i32, SimError> {
    let mut sim = build(program, config, |c| {
        if let Some(limit) = max_cycles {
            c.general.max_cycles = limit;
        }
        c.general.trace_instructions |= trace;
    })?;

    let cfg = sim.config();
    println!(
        "Configuration: imem {} words, dmem {} words, max {} cycles",
        cfg.memory.imem_words, cfg.memory.dmem_words, cfg.general.max_cycles
    );
    println!(
        "  Testbench: expect {} at address {}",
        cfg.testbench.success_value, cfg.testbench.success_addr
    );

    let outcome = sim.run_testbench();
    if dump {
        dump_state(&sim);
    }
    sim.stats.print();

    match outcome? {
        TestbenchOutcome::Passed { cycle } => {
            println!("\nSimulation succeeded (cycle {cycle})");
            Ok(0)
        }
        TestbenchOutcome::Failed { cycle, addr, value } => {
            println!("\nSimulation failed: stored {value} to address {addr} (cycle {cycle})");
            Ok(1)
        }
    }
}

/// Runs a fixed number of cycles and prints one line per cycle.
fn cmd_step(program: Option<&Path>, config: Option<&Path>, cycles: u64) -> Result<(), SimError> {
    let mut sim = build(program, config, |_| {})?;
    for _ in 0..cycles {
        let report = sim.tick()?;
        println!("{}", format_report(&report));
    }
    dump_state(&sim);
    Ok(())
}

/// Prints a numbered disassembly listing.
fn cmd_disasm(path: &Path) -> Result<(), SimError> {
    let image = loader::load_hex_file(path)?;
    for (idx, word) in image.iter().enumerate() {
        println!("{:#06x}:  {word:08x}  {}", idx * 4, disassemble(*word));
    }
    Ok(())
}

/// One-line summary of a committed cycle.
fn format_report(report: &CycleReport) -> String {
    let mut line = format!(
        "{:#06x}: {:08x}  {:<24} next={:#06x}",
        report.pc,
        report.instruction,
        disassemble(report.instruction),
        report.pc_next
    );
    if let Some(w) = report.reg_write {
        line.push_str(&format!("  x{}={:#x}", w.rd, w.value));
    }
    if let Some(s) = report.mem_write {
        line.push_str(&format!("  [{:#x}]={:#x}", s.addr, s.value));
    }
    line
}

/// Dumps PC and the register file to stdout.
fn dump_state(sim: &Simulator) {
    println!("PC = {:#010x}", sim.cpu.pc());
    print!("{}", sim.cpu.regs());
}
