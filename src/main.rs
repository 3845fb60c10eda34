//! # Taskslip CLI
//!
//! Command-line interface for printing task notes.
//!
//! ## Usage
//!
//! ```bash
//! # Type notes and print them over Bluetooth
//! taskslip notes
//!
//! # Print to a network printer
//! taskslip notes --tcp 10.1.32.32
//!
//! # Show what would be printed without a printer
//! taskslip notes --dry-run
//!
//! # Preview a file of markup lines, with the job bytes
//! taskslip preview todo.txt --hex
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use taskslip::{
    PrinterCommand, PrinterConfig, SlipError,
    device::Printer,
    input::BlockingLines,
    note::{self, Note},
    session::{Session, StopReason},
    transport::{BluetoothTransport, MemoryTransport, TcpTransport, Transport},
};

/// Taskslip - Task notes on a thermal printer
#[derive(Parser, Debug)]
#[command(name = "taskslip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Type notes at a prompt and print each one
    Notes {
        /// Printer device path
        #[arg(long, default_value = "/dev/rfcomm0")]
        device: String,

        /// Print to a network printer (host or host:port) instead
        #[arg(long, value_name = "HOST", conflicts_with = "dry_run")]
        tcp: Option<String>,

        /// Keep jobs in memory instead of printing
        #[arg(long)]
        dry_run: bool,

        /// Characters per line
        #[arg(long)]
        columns: Option<usize>,

        /// Printer profile (JSON)
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },

    /// Render a file of markup lines as one note without printing
    Preview {
        /// File with one markup line per line
        file: PathBuf,

        /// Also dump the job bytes in hex
        #[arg(long)]
        hex: bool,

        /// Characters per line
        #[arg(long)]
        columns: Option<usize>,

        /// Printer profile (JSON)
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SlipError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Notes {
            device,
            tcp,
            dry_run,
            columns,
            profile,
        } => {
            let config = load_config(profile.as_deref(), columns)?;
            let transport: Arc<dyn Transport> = if dry_run {
                Arc::new(MemoryTransport::new())
            } else if let Some(target) = tcp {
                Arc::new(TcpTransport::resolve(&target)?)
            } else {
                Arc::new(BluetoothTransport::new(device))
            };

            let mut session = Session::connect(config, transport).await?;
            // read on a plain thread so a cancelled prompt does not hold up exit
            let stdin = BlockingLines::stdin();
            let shutdown = async {
                // without a handler, Ctrl-C never resolves and input EOF ends the loop
                if tokio::signal::ctrl_c().await.is_err() {
                    std::future::pending::<()>().await;
                }
            };

            let summary = session
                .run_lines(stdin, &mut std::io::stdout(), shutdown)
                .await?;
            if summary.reason == StopReason::Cancelled {
                println!();
            }
            println!(
                "Printed {} note(s), {} failed",
                summary.printed, summary.failed
            );
        }

        Commands::Preview {
            file,
            hex,
            columns,
            profile,
        } => {
            let config = load_config(profile.as_deref(), columns)?;
            let text = std::fs::read_to_string(&file)?;
            let body: Vec<String> = text.lines().map(str::to_string).collect();
            let subject = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let note = Note::new(&subject, chrono::Local::now().naive_local(), body);

            let columns = config.columns;
            let mut printer = Printer::new(config);
            note::render(&note.commands(), &mut printer, &mut std::io::stdout(), columns)?;
            PrinterCommand::Execute.render_to_device(&mut printer);
            let job = printer.take_job();

            println!();
            println!("{} bytes", job.len());
            if hex {
                print_hex(&job);
            }
        }
    }

    Ok(())
}

fn load_config(profile: Option<&Path>, columns: Option<usize>) -> Result<PrinterConfig, SlipError> {
    let config = match profile {
        Some(path) => PrinterConfig::from_json_file(path)?,
        None => PrinterConfig::default(),
    };
    let config = match columns {
        Some(columns) => config.with_columns(columns),
        None => config,
    };
    config.validate()?;
    Ok(config)
}

fn print_hex(data: &[u8]) {
    for (i, row) in data.chunks(16).enumerate() {
        let bytes: Vec<String> = row.iter().map(|b| format!("{:02X}", b)).collect();
        let ascii: String = row
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        println!("{:08X}  {:<47}  {}", i * 16, bytes.join(" "), ascii);
    }
}
