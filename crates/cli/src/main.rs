//! GVM command-line host.
//!
//! This binary loads GVM programs and drives the machine. It provides:
//! 1. **Run:** Load a program and initial memory, execute to a terminal
//!    status, and optionally dump state, statistics or a JSON snapshot.
//! 2. **Check:** Decode a program without executing it.
//!
//! Exit codes: 0 when the program halts (or checks clean), 1 when it errors
//! or hits the step bound, 2 when a file cannot be read.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gvm_core::isa::disasm;
use gvm_core::sim::loader;
use gvm_core::{Config, Gvm, GvmError, OutputSink, Status};

/// Exit code for a program that errored or did not finish.
const EXIT_PROGRAM_FAILED: u8 = 1;
/// Exit code for an environment failure (unreadable or malformed input file).
const EXIT_ENVIRONMENT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "gvm",
    author,
    version,
    about = "GVM accumulator virtual machine",
    long_about = "Load and run GVM opcode programs.\n\nExamples:\n  gvm run programs/sum.gvm --mem 1,2,3\n  gvm run loop.gvm --max-steps 10000 --stats\n  gvm check programs/sum.gvm --disasm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program to completion.
    Run(RunArgs),

    /// Decode a program without running it.
    Check {
        /// Program source file.
        program: PathBuf,

        /// Print the decoded program.
        #[arg(long)]
        disasm: bool,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Program source file.
    program: PathBuf,

    /// Initial data memory as comma-separated integers.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    mem: Vec<i64>,

    /// Initial data memory as a JSON array file (overrides --mem).
    #[arg(long)]
    mem_file: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit a trace event per evaluated instruction (implies RUST_LOG=gvm_core=trace).
    #[arg(long)]
    trace: bool,

    /// Stop with a failure after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print status, accumulator, memory and program after the run.
    #[arg(long)]
    dump: bool,

    /// Print execution statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Print a JSON snapshot of the machine after the run.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(&cli.command, Commands::Run(args) if args.trace);
    init_logging(trace);

    let result = match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Check { program, disasm } => cmd_check(&program, disasm),
    };

    result.unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        ExitCode::from(EXIT_ENVIRONMENT)
    })
}

/// Installs the stderr `tracing` subscriber; `RUST_LOG` wins unless `--trace` is set.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("gvm_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the program and memory, runs the machine and reports the outcome.
fn cmd_run(args: &RunArgs) -> Result<ExitCode, GvmError> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }

    let memory = match &args.mem_file {
        Some(path) => read_memory_file(path)?,
        None => args.mem.clone(),
    };

    let mut vm = Gvm::with_config(config);
    match vm.load(&args.program, memory)? {
        Status::Ready => {}
        Status::Waiting => {
            println!("[*] {} holds no instructions", args.program.display());
            return Ok(ExitCode::SUCCESS);
        }
        status => {
            report_failure(status, &vm);
            return Ok(ExitCode::from(EXIT_PROGRAM_FAILED));
        }
    }

    let status = match args.max_steps {
        Some(limit) => run_bounded(&mut vm, limit),
        None => vm.run(),
    };

    if args.dump {
        vm.dump(true, true);
    }
    if args.stats {
        vm.stats().print();
    }
    if args.json {
        match serde_json::to_string_pretty(&vm.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[!] could not serialize snapshot: {e}"),
        }
    }

    if status == Status::Halted {
        Ok(ExitCode::SUCCESS)
    } else {
        report_failure(status, &vm);
        Ok(ExitCode::from(EXIT_PROGRAM_FAILED))
    }
}

/// Steps the machine until it reaches a terminal status or `limit` instructions.
fn run_bounded<O: OutputSink>(vm: &mut Gvm<O>, limit: u64) -> Status {
    let mut status = vm.status();
    for _ in 0..limit {
        status = vm.step();
        if status.is_terminal() {
            return status;
        }
    }
    tracing::warn!(limit, cursor = vm.cursor(), "step limit reached");
    status
}

fn report_failure<O: OutputSink>(status: Status, vm: &Gvm<O>) {
    match vm.fault() {
        Some(fault) => eprintln!("[!] {status}: {fault}"),
        None => eprintln!("[!] {status} at instruction {}", vm.cursor()),
    }
}

/// Reads initial data memory from a JSON array of integers.
fn read_memory_file(path: &Path) -> Result<Vec<i64>, GvmError> {
    let text = std::fs::read_to_string(path).map_err(|e| GvmError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| GvmError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes a program and reports the first malformed line, if any.
fn cmd_check(program: &Path, show: bool) -> Result<ExitCode, GvmError> {
    let source = loader::read_source(program)?;
    match loader::decode_program(&source) {
        Ok(instructions) => {
            println!(
                "[*] {}: {} instructions",
                program.display(),
                instructions.len()
            );
            if show {
                print!("{}", disasm::disassemble_program(&instructions));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(fault) => {
            eprintln!("[!] {}: {fault}", program.display());
            Ok(ExitCode::from(EXIT_PROGRAM_FAILED))
        }
    }
}
