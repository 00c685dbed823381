mod shared;
mod operators;
mod as_path;
mod classifier;
mod route_sources;
mod route_merger;
mod report;
mod prefix_resolver;
mod engine;

use std::env;
use std::process;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::engine::QueryEngine;
use crate::prefix_resolver::normalize_target;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: pathscope <prefix|address>");
        eprintln!("  e.g. pathscope 8.8.8.0/24");
        process::exit(2);
    }

    let target = match normalize_target(&args[1]) {
        Ok(prefix) => prefix,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("fetching route data for {}...", target));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let engine = QueryEngine::new();
    let report = engine.run(&target);

    spinner.finish_and_clear();
    println!("{}", report);
}
