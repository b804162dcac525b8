//! Runs the pinned known answers and a batch of random vectors through
//! the cipher and prints each result.

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use tea_engine::report::Report;
use tea_engine::vectors::{self, KNOWN_ANSWERS};
use tea_engine::Rounds;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tea-vectors", about = "Encipher test vectors and print the results")]
struct Args {
    /// Number of rounds to run
    #[arg(short, long, default_value_t = Rounds::REFERENCE)]
    rounds: Rounds,

    /// How many random vectors to encipher after the known answers
    #[arg(long, default_value_t = 0)]
    random: usize,

    /// Seed for the random vectors; a fresh seed is used if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Don't run the known answers
    #[arg(long)]
    skip_known: bool,
}

fn run_known_answers() -> Result<()> {
    let mut failed = 0;
    for (i, answer) in KNOWN_ANSWERS.iter().enumerate() {
        let result = answer.vector.encipher(Rounds::REFERENCE);
        println!("{}\n", Report::new(format!("Test case {}", i + 1), answer.vector, result));
        if result == answer.expected {
            info!(name = answer.name, "known answer matches");
        } else {
            error!(
                name = answer.name,
                expected = %format!("{:08x} {:08x}", answer.expected[0], answer.expected[1]),
                got = %format!("{:08x} {:08x}", result[0], result[1]),
                "known answer mismatch"
            );
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{} of {} known answers did not match", failed, KNOWN_ANSWERS.len());
    }
    Ok(())
}

fn run_random(rounds: Rounds, count: usize, rng: &mut dyn RngCore) {
    for (i, vector) in vectors::random_vectors(rng, count).enumerate() {
        let report = Report::new(format!("Random vector {}", i + 1), vector, vector.encipher(rounds));
        println!("{}\n  bits:       {}\n", report, report.result_bits());
        info!(index = i + 1, changed_bits = report.changed_bits(), "enciphered random vector");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    if !args.skip_known {
        if args.rounds == Rounds::REFERENCE {
            run_known_answers()?;
        } else {
            warn!(rounds = %args.rounds, "known answers only hold for the reference round count, skipping");
        }
    }

    if args.random > 0 {
        match args.seed {
            Some(seed) => {
                info!(seed, count = args.random, "generating seeded random vectors");
                run_random(args.rounds, args.random, &mut StdRng::seed_from_u64(seed));
            }
            None => run_random(args.rounds, args.random, &mut thread_rng()),
        }
    }
    Ok(())
}
