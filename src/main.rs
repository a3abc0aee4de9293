use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use adv_fic::engine::{ReplyKind, Turn};
use adv_fic::{GameState, WorldError, build_world, load_world_from_file};
use clap::Parser;

#[derive(Parser)]
#[command(name = "adv_fic", about = "A small text adventure", version)]
struct Cli {
    /// World file to play instead of the built-in manor
    world: Option<PathBuf>,
}

fn print_turn(turn: &Turn) {
    match &turn.outcome {
        Ok(reply) if reply.kind == ReplyKind::Idle => {}
        Ok(reply) if reply.kind == ReplyKind::Help => println!("\n{}", reply.text),
        _ => println!("{}", turn.message()),
    }
}

fn main() -> io::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let loaded: Result<_, WorldError> = match &cli.world {
        Some(path) => load_world_from_file(path),
        None => build_world(),
    };
    let world = match loaded {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world: {e}");
            process::exit(1);
        }
    };

    println!("Welcome to {}!", world.name);
    if !world.desc.is_empty() {
        println!("{}", world.desc);
    }
    println!("Type 'help' to see the list of commands.");

    let mut state = GameState::new(world);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", state.describe_room());
        print!("What would you like to do? ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nGoodbye.");
            break;
        };

        if !state.play(&line?, print_turn) {
            break;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}
