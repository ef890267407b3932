//! Demo application which spreads one total timeout budget over a sequence of simulated
//! flaky network calls.
//!
//! Every attempt asks the budget how much time is left and receives exactly that value as
//! its own timeout, so the log output shows the per-attempt timeouts shrinking until either
//! an attempt succeeds or the budget runs out. Run it with:
//!
//! ```sh
//! cargo run --example retry -- -b 2.5
//! ```
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use rand::Rng;
use totaltimeout::Timeout;

const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[derive(clap::Parser)]
#[command(about = "Spread one total timeout over a sequence of simulated network calls")]
pub struct Cli {
    #[arg(short, default_value_t = 2.5, help = "Total timeout budget in seconds")]
    budget: f64,
    #[arg(
        short,
        default_value_t = 400,
        help = "Upper bound for the simulated call latency in milliseconds"
    )]
    latency_ms: u64,
    #[arg(
        short,
        default_value_t = 0.2,
        help = "Chance that any individual simulated call succeeds"
    )]
    success_chance: f64,
}

fn main() {
    let cli_args = Cli::parse();
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                message
            ))
        })
        .level(LOG_LEVEL)
        .chain(std::io::stdout())
        .apply()
        .unwrap();

    let mut rng = rand::thread_rng();
    let budget = Timeout::new(cli_args.budget);
    info!("spreading {:?} over simulated flaky calls", budget);
    let mut attempt = 0;
    for time_left in &budget {
        attempt += 1;
        info!("attempt {} runs with a timeout of {:.3} s", attempt, time_left);
        let latency = Duration::from_millis(rng.gen_range(0..=cli_args.latency_ms));
        // A real network call would honor the timeout it was handed, so the simulated one
        // never sleeps past it.
        let capped = Duration::try_from_secs_f64(time_left)
            .map_or(latency, |time_left| latency.min(time_left));
        thread::sleep(capped);
        if rng.gen_bool(cli_args.success_chance.clamp(0.0, 1.0)) {
            info!("attempt {} succeeded after {:?}", attempt, capped);
            return;
        }
        warn!("attempt {} failed after {:?}", attempt, capped);
    }
    warn!("budget exhausted after {} attempts", attempt);
}
