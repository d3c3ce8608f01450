use anyhow::Context;
use goals_todos_api::{FailurePolicy, InMemoryApi};
use goals_todos_config::AppConfig;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

mod actions;
mod commands;
mod logger;
mod middleware;
mod notifier;
mod reducers;
mod state;
mod store;
mod thunks;
mod views;

use commands::{Command, Flow};
use middleware::LoggingMiddleware;
use notifier::ConsoleNotifier;
use thunks::{handle_receive_data, ThunkContext};
use views::Renderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init();

    log::info!("Starting goals-todos");

    let config = AppConfig::load();
    let api = InMemoryApi::seeded()
        .with_latency(config.api.latency())
        .with_failure_policy(FailurePolicy::from_rate(config.api.failure_rate));

    let notifier = Arc::new(ConsoleNotifier);
    let logging = Arc::new(LoggingMiddleware::new());
    let store = store::build_store(&config, notifier.clone(), logging.clone());
    let ctx = ThunkContext::new(Arc::new(api), notifier, config.failure_message.clone());

    let renderer = Arc::new(Renderer::new());
    let render_store = store.clone();
    let render_frames = Arc::clone(&renderer);
    let subscription = store.subscribe(move || {
        if let Some(frame) = render_frames.frame(render_store.state()) {
            println!("{}", frame);
        }
    });

    if let Some(frame) = renderer.frame(store.state()) {
        println!("{}", frame);
    }
    println!("Type `help` for a list of commands.");
    store.dispatch(handle_receive_data(&ctx))?;

    let result = run(&store, &ctx, &logging).await;

    // The render listener holds a store handle; drop it so the store can go
    subscription.unsubscribe();

    log::info!("Exiting goals-todos");
    result
}

async fn run(
    store: &store::AppStore,
    ctx: &ThunkContext,
    logging: &LoggingMiddleware,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read from stdin")?
    {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(commands::CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match commands::execute(command, store, ctx, logging)? {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}
