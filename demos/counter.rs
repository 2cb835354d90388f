//! Reachable states of a token-passing system.
//!
//! `n` counters start at `(tokens, 0, ..., 0)`. A transition moves one token
//! from counter `i` to counter `i+1`, if counter `i` is not empty. The set of
//! reachable states is computed symbolically with
//! `fixpoint(id + t_0 + ... + t_{n-2})`, and checked against the number of
//! ways to split `tokens` into `n` counters.
//!
//! Run with:
//! ```bash
//! cargo run --release --example counter -- 5 20
//! ```

use clap::Parser;
use num_bigint::BigUint;

use ddd_rs::action::{Comparator, Condition, WeightedSum};
use ddd_rs::config::DddConfig;
use ddd_rs::ddd::DddManager;
use ddd_rs::reference::HomId;
use ddd_rs::types::{Value, Var};

#[derive(Debug, Parser)]
#[command(author, version, about = "Symbolic reachability of a token-passing system")]
struct Cli {
    /// Number of counters.
    #[arg(value_name = "INT", default_value = "4")]
    n: usize,

    /// Number of tokens, initially all in the first counter.
    #[arg(value_name = "INT", default_value = "10")]
    tokens: Value,

    /// Cache size in bits (size = 2^bits).
    #[arg(long, value_name = "INT", default_value = "12")]
    cache_bits: usize,
}

/// Moves one token from `x{i}` to `x{i+1}`.
fn transfer(mgr: &DddManager, n: usize, i: usize) -> color_eyre::Result<HomId> {
    // Guard `x{i} > 0` and take the token, keeping every other counter.
    let mut coefs = vec![0; n];
    coefs[i] = 1;
    let guard = Condition::new(Comparator::Gt, 0, coefs);
    let assignments = (0..n)
        .map(|j| {
            let mut sum = WeightedSum::variable(n, Var::new(j as u32));
            if j == i {
                sum.value = -1;
            }
            sum
        })
        .collect();
    let take = mgr.guarded_assign(vec![guard], assignments)?;

    // Then give it to the next counter.
    let next = Var::new(i as u32 + 1);
    let give = mgr.linear_assign(next, next, true, 1, 0);

    Ok(mgr.compose(give, take))
}

/// Number of ways to put `k` tokens in `n` counters: `C(k + n - 1, n - 1)`.
fn compositions(k: usize, n: usize) -> BigUint {
    let mut res = BigUint::from(1u32);
    for i in 1..n {
        res *= BigUint::from(k + i);
        res /= BigUint::from(i);
    }
    res
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);
    if args.n == 0 || args.tokens < 0 {
        color_eyre::eyre::bail!("need at least one counter and a non-negative number of tokens");
    }

    let config = DddConfig::default().with_cache_bits(args.cache_bits);
    let mgr = DddManager::with_config(config);

    let n = args.n;
    let init: Vec<(Var, Value)> = (0..n)
        .map(|i| (Var::new(i as u32), if i == 0 { args.tokens } else { 0 }))
        .collect();
    let init = mgr.path(&init);
    println!("init = {}", mgr.to_bracket_string(init));

    let mut step = mgr.identity();
    for i in 0..n - 1 {
        let t = transfer(&mgr, n, i)?;
        println!("t{} = {}", i, mgr.hom(t));
        step = mgr.hom_union(step, t);
    }
    let reach = mgr.fixpoint(step);

    let time_reach = std::time::Instant::now();
    let states = mgr.apply(reach, init);
    let time_reach = time_reach.elapsed();

    let count = mgr.count(states);
    let expected = compositions(args.tokens as usize, n);
    println!("reachable states: {} (expected {})", count, expected);
    println!("nodes: {}, homomorphisms: {}", mgr.num_nodes(), mgr.num_homs());
    println!("set cache: {}", mgr.cache_stats());
    println!("apply cache: {}", mgr.apply_cache_stats());
    println!("Reachability done in {:.3} s", time_reach.as_secs_f64());
    if count != expected {
        color_eyre::eyre::bail!("wrong number of reachable states");
    }

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
