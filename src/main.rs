#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cup_waypoints::CupFile;

#[derive(StructOpt)]
#[structopt(name = "cupdump", about = "Decode a SeeYou .cup waypoint file")]
struct Args {
    #[structopt(name = "input", parse(from_os_str))]
    input: PathBuf,
    /// Print the flat base records instead of waypoints
    #[structopt(long = "base")]
    base: bool,
    /// Log and skip lines that fail to decode
    #[structopt(short = "k", long = "keep-going")]
    keep_going: bool,
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cup_waypoints={},cupdump={}", level, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();
    setup_logging(args.verbose);

    info!("Reading {}", args.input.display());
    let cup = CupFile::from_file(&args.input)?;

    let mut count = 0;
    let mut skipped = 0;
    if args.base {
        let mut records = cup.base_records();
        while let Some(record) = records.next() {
            match record {
                Ok(record) => {
                    let pos = record.latlon();
                    println!(
                        "{:<8} {:>10.5} {:>11.5} {:?}",
                        record.code,
                        pos.lat(),
                        pos.lon(),
                        record
                    );
                    count += 1;
                }
                Err(e) if args.keep_going => {
                    warn!("Skipping line {}: {}", records.line_number(), e);
                    skipped += 1;
                }
                Err(e) => return Err(format!("line {}: {}", records.line_number(), e).into()),
            }
        }
    } else {
        let mut waypoints = cup.waypoints();
        while let Some(waypoint) = waypoints.next() {
            match waypoint {
                Ok(waypoint) => {
                    println!("{}", waypoint);
                    count += 1;
                }
                Err(e) if args.keep_going => {
                    warn!("Skipping line {}: {}", waypoints.line_number(), e);
                    skipped += 1;
                }
                Err(e) => return Err(format!("line {}: {}", waypoints.line_number(), e).into()),
            }
        }
    }

    info!("Decoded {} waypoints, skipped {}", count, skipped);
    Ok(())
}
