use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pagesim::input::{parse_reference_string, read_reference_file};
use pagesim::{
    Policy, PolicyEngine, ReferenceString, SimulationSession, Trace, DEFAULT_AUTOPLAY_INTERVAL,
};

#[derive(Parser)]
#[command(author, version, about = "pagesim - simulate FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Reference string, e.g. "7 0 1 2 0 3 0 4"
    reference: Option<String>,

    /// Read the reference string from a file instead
    #[arg(long, conflicts_with = "reference")]
    file: Option<PathBuf>,

    /// Number of frames
    #[arg(short, long, default_value_t = 3)]
    frames: usize,

    /// Replacement policy: fifo, lru or optimal
    #[arg(short, long, default_value = "fifo")]
    policy: String,

    /// Print the whole trace as JSON
    #[arg(long)]
    json: bool,

    /// Replay the trace step by step
    #[arg(long)]
    play: bool,

    /// Delay between replayed steps, in milliseconds
    #[arg(long, default_value_t = DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Summarize every policy on the same input
    #[arg(long)]
    compare: bool,
}

fn load_reference(cli: &Cli) -> Result<ReferenceString> {
    let refs = match (&cli.reference, &cli.file) {
        (Some(text), None) => parse_reference_string(text)?,
        (None, Some(path)) => read_reference_file(path)
            .with_context(|| format!("reading reference string from {}", path.display()))?,
        _ => bail!("provide a reference string or --file <path>"),
    };
    Ok(refs)
}

fn print_header(trace: &Trace) {
    println!("{}", trace.policy().full_name());
    println!("{}", trace.policy().summary());
    for rule in trace.policy().rules() {
        println!("  - {}", rule);
    }
    println!();
    println!("step  page  frames  status  evicted");
}

fn print_summary(trace: &Trace) {
    let stats = trace.stats();
    println!();
    println!("Total Pages: {}", stats.total_accesses);
    println!("Hits: {} | Faults: {}", stats.hit_count, stats.fault_count);
}

fn replay(refs: &ReferenceString, frames: usize, policy: Policy, interval: Duration) -> Result<()> {
    let mut session = SimulationSession::new();
    session.set_interval(interval)?;
    session.prepare(refs, frames, policy)?;

    let trace = session.trace().cloned().context("session lost its trace")?;
    print_header(&trace);

    let (tx, rx) = mpsc::channel();
    session.play(move |event| {
        let _ = tx.send(event);
    })?;

    // The sender is dropped when autoplay finishes, ending this loop
    for event in rx {
        println!("{}", event);
        io::stdout().flush()?;
    }
    session.pause();

    print_summary(&trace);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let refs = load_reference(&cli)?;
    let policy: Policy = cli.policy.parse()?;

    if cli.compare {
        for policy in Policy::ALL {
            let trace = PolicyEngine::build(&refs, cli.frames, policy)?;
            println!("{:<8} {}", policy, trace.stats());
        }
        return Ok(());
    }

    if cli.play {
        return replay(&refs, cli.frames, policy, Duration::from_millis(cli.interval_ms));
    }

    let trace = PolicyEngine::build(&refs, cli.frames, policy)?;
    if cli.json {
        serde_json::to_writer_pretty(io::stdout().lock(), &trace)?;
        println!();
    } else {
        print_header(&trace);
        for event in &trace {
            println!("{}", event);
        }
        print_summary(&trace);
    }

    Ok(())
}
