use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search::{config::Config, protocol::Frontend, GameSession};

fn main() -> Result<()> {
    // Initialize tracing. Stdout carries protocol messages, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting word search...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        "Configuration loaded: {}x{} grid, {} words",
        config.game.grid_size,
        config.game.grid_size,
        config.game.words.len()
    );

    let session = GameSession::new(
        config.game.words.clone(),
        config.game.grid_size,
        config.game.generator(),
        StdRng::from_rng(&mut rand::rng()),
    )
    .context("failed to set up the first game")?;

    if !session.unplaced_words().is_empty() {
        tracing::warn!(
            "Some words did not fit and cannot be found: {:?}",
            session.unplaced_words()
        );
    }

    let mut frontend = Frontend::with_random_filler(session, config.display.auto_restart);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    send(&mut out, &frontend.game_state())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        for reply in frontend.handle_line(line) {
            send(&mut out, &reply)?;
        }
    }

    tracing::info!("Input closed, exiting");

    Ok(())
}

fn send(out: &mut impl Write, msg: &word_search::protocol::ServerMessage) -> Result<()> {
    let json = serde_json::to_string(msg)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
