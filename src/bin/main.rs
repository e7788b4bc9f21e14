use std::time::Instant;

use clap::{Parser, Subcommand};
use gamealloc::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// gamealloc - one-to-one object allocation mechanisms
#[derive(Parser, Debug)]
#[command(name = "gamealloc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through SP and TTC on a three-agent profile
    Demo,

    /// Run every mechanism on a random profile
    Random {
        /// Number of agents (and objects)
        #[arg(short = 'n', long, default_value = "4")]
        size: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Demo => demo(),
        Commands::Random { size, seed } => random(size, seed),
    }
}

fn names(v: &[&str]) -> Option<Vec<String>> {
    Some(v.iter().map(|s| s.to_string()).collect())
}

fn demo() -> Result<()> {
    let prefs = Preference::new(
        vec![vec![0, 1, 2], vec![2, 0, 1], vec![2, 1, 0]],
        names(&["Alice", "Bob", "Carol"]),
        names(&["A", "B", "C"]),
    )?
    .into_inner();
    println!("Alice prefers A > B > C");
    println!("Bob prefers C > A > B");
    println!("Carol prefers C > B > A");

    let order = [2, 0, 1];
    println!("\nSequential priority, picking order Carol, Alice, Bob:");
    let sp = sequential_priority(&order, &prefs)?;
    println!("{sp}");

    let endowment = [1, 2, 0];
    println!("\nTop trading cycles, Alice holds B, Bob holds C, Carol holds A:");
    let ttc = top_trading_cycles(&endowment, &prefs)?;
    println!("{ttc}");
    println!("{:?}", ttc.to_pairs());

    let efficient = is_pareto_efficient(&sp, &prefs)? && is_pareto_efficient(&ttc, &prefs)?;
    println!("\nBoth results are Pareto-efficient: {efficient}");
    Ok(())
}

fn random(size: usize, seed: u64) -> Result<()> {
    let prefs = Preference::from_rankings(random_preference(size, seed)?)?.into_inner();
    for ag in prefs.agent_ids() {
        println!("{}: {:?}", prefs.agents()[ag], prefs.ranking(ag));
    }

    let order: Vec<Agent> = prefs.agent_ids().collect();
    let endowment = random_allocation(size, seed.wrapping_add(1))?;
    println!("{}", sequential_priority(&order, &prefs)?);
    println!("{}", top_trading_cycles(&endowment, &prefs)?);

    if size < LARGE_PROFILE {
        let now = Instant::now();
        let efficient = pareto_efficient_allocations(&prefs);
        println!(
            "\n{} of {} allocations are Pareto-efficient ({} ms)",
            efficient.len(),
            Permutations::total(size),
            now.elapsed().as_millis()
        );
        let report = manipulation(0usize, &prefs, Some(order.as_slice()), Some(endowment.as_slice()))?;
        for (mechanism, found) in &report {
            let count: usize = found.values().map(Vec::len).sum();
            println!("{mechanism}: {count} profitable misreports for {}", prefs.agents()[0]);
        }
    }
    Ok(())
}
