use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use colored::*;

mod loader;
mod suites;

/// Drive the 6510 core through the published 6502 conformance ROMs and
/// report a verdict per suite.
#[derive(Parser)]
#[command(about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    /// Directory holding the test binaries.
    #[arg(long, default_value = "test_files")]
    dir: PathBuf,
    /// Print a state line for every executed instruction.
    #[arg(long)]
    trace: bool,
    /// Suite names to run; all of them when empty.
    /// Known names: allsuitea, decimal, interrupt, functional, timing.
    suites: Vec<String>,
}

#[rustfmt::skip]
fn print_banner() {
    println!("{}", r"
  __   ____  _  ___
 / /_ | ___|/ |/ _ \
| '_ \|___ \| | | | |
| (_) |___) | | |_| |
 \___/|____/|_|\___/
".cyan());
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    for name in &cli.suites {
        if !suites::ALL.iter().any(|suite| suite.name == name) {
            return Err(format!("unknown suite name: {}", name));
        }
    }

    print_banner();
    let started = Instant::now();
    let mut failures = 0;

    for suite in suites::ALL {
        if !cli.suites.is_empty() && !cli.suites.iter().any(|name| name == suite.name) {
            continue;
        }
        match suites::execute(suite, &cli.dir, cli.trace) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(error) => {
                eprintln!("** {} ** {}", " Error ".red(), error);
                failures += 1;
            }
        }
    }

    println!("\nProgram executed in {:.2?}", started.elapsed());

    if failures > 0 {
        Err(format!("{} suite(s) failed", failures))
    } else {
        Ok(())
    }
}
