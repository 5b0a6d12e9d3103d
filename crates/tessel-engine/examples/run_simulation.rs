//! Run a simulation file on the tick scheduler and print each generation.
//!
//! Run with:
//!   RUST_LOG=info cargo run -p tessel-engine --example run_simulation -- path/to/file.sim [speed] [generations]
//!
//! `speed` is 1 (slowest) to 4; `generations` defaults to 10.

use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use tessel_core::Generation;
use tessel_engine::loader::load_simulation;
use tessel_engine::{Registry, SchedulerConfig, TickScheduler};

fn render(rows: &[Vec<i32>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&s| match s {
                    0 => '.',
                    1 => '#',
                    2 => '@',
                    _ => '?',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: run_simulation <file.sim> [speed 1-4] [generations]");
        return ExitCode::FAILURE;
    };
    let speed: u32 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(SchedulerConfig::MAX_SPEED);
    let generations: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);

    let sim = match load_simulation(&path, &Registry::standard()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match SchedulerConfig::default().with_speed(speed) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut scheduler = match TickScheduler::start(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to start scheduler: {e}");
            return ExitCode::FAILURE;
        }
    };

    if scheduler.attach(sim).is_err() {
        return ExitCode::FAILURE;
    }
    scheduler.play();

    let mut shown = None;
    while shown.map_or(true, |g: Generation| g.0 < generations) {
        thread::sleep(Duration::from_millis(20));
        let Some(snap) = scheduler.latest_snapshot() else {
            continue;
        };
        if shown == Some(snap.generation()) {
            continue;
        }
        shown = Some(snap.generation());
        println!("generation {}:\n{}\n", snap.generation(), render(&snap.to_rows()));
    }

    let report = scheduler.stop();
    println!(
        "stopped after {} ticks ({} advances) in {:?}",
        report.ticks, report.advances, report.elapsed
    );
    ExitCode::SUCCESS
}
