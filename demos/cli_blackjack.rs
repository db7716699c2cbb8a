//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjlite::{Decision, InvalidDecision, Outcome, Round, RoundOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bjlite=warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = match RoundOptions::default().with_player_money(500) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Configuration error: {err}");
            std::process::exit(2);
        }
    };

    let mut round = match Round::with_options(options, seed) {
        Ok(round) => round,
        Err(err) => {
            eprintln!("Deal error: {err}");
            std::process::exit(1);
        }
    };

    let outcome = round.play_player_turn(|round| {
        print_table(round);
        prompt_decision()
    });

    match outcome {
        Ok(outcome) => {
            print_table(&round);
            println!("{}", describe(outcome));
        }
        Err(err) => {
            eprintln!("Round aborted: {err}");
            std::process::exit(1);
        }
    }
}

fn prompt_decision() -> Result<Decision, InvalidDecision> {
    println!("Do you hit (1) or stay (2)?");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!("Input closed. Goodbye.");
            std::process::exit(0);
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("Input error: {err}");
            std::process::exit(1);
        }
    }

    input.parse::<Decision>().inspect_err(|_| {
        println!("Invalid selection. Select 1 (hit) or 2 (stay)");
    })
}

fn print_table(round: &Round) {
    let table = round.table();
    print_section("Player's Cards", &table.player);
    print_section("Dealer's Cards", &table.dealer);
}

fn print_section(title: &str, lines: &[String]) {
    println!("##############");
    println!("{title}");
    println!("##############");
    for line in lines {
        println!("{line}");
    }
    println!();
}

fn describe(outcome: Outcome) -> String {
    format!("{outcome} ({:?})", outcome.reason())
}
