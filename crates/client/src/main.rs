//! Terminal client entry point.
//!
//! Reads one command per line from stdin and prints the lane after every
//! player action. Logs go to stderr; set `RUST_LOG` to tune them.
mod input;
mod render;

use std::time::Duration;

use anyhow::{Context, Result};
use lane_core::{BattleEvent, TurnPhase};
use lane_runtime::{Event, Renderer, Runtime, RuntimeConfig, RuntimeHandle, Topic};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;

use input::{HELP, Line};
use render::TextRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env().context("invalid LANE_* configuration")?;
    let phase_wait = config.frame_interval * (config.session.enemy_delay_frames + 2) * 4;
    let runtime = Runtime::builder().config(config).build().await?;
    let handle = runtime.handle();

    run(&handle, phase_wait).await?;

    drop(handle);
    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}

async fn run(handle: &RuntimeHandle, phase_wait: Duration) -> Result<()> {
    let mut battle = handle.subscribe(Topic::Battle);
    let mut renderer = TextRenderer::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    draw(handle, &mut renderer).await?;

    while let Some(line) = lines.next_line().await? {
        match input::parse(&line) {
            Line::Input(event) => {
                drain(&mut battle);
                if !handle.send_input(event).await? {
                    println!("(ignored)");
                    continue;
                }
                wait_for_player_turn(handle, &mut battle, phase_wait).await?;
                draw(handle, &mut renderer).await?;
                if renderer.is_over() {
                    break;
                }
            }
            Line::Status => {
                let data = handle.player_data().await?;
                println!("{}", render::player_sheet(&data));
            }
            Line::Help => println!("{HELP}"),
            Line::Quit => break,
            Line::Empty => {}
            Line::Unknown(text) => println!("unknown command: {text}"),
        }
    }
    Ok(())
}

/// Drops events left over from earlier turns.
fn drain(battle: &mut broadcast::Receiver<Event>) {
    loop {
        match battle.try_recv() {
            Ok(_) | Err(broadcast::error::TryRecvError::Lagged(_)) => {}
            Err(_) => break,
        }
    }
}

/// Blocks until the enemy phase (if one is pending) has run.
async fn wait_for_player_turn(
    handle: &RuntimeHandle,
    battle: &mut broadcast::Receiver<Event>,
    limit: Duration,
) -> Result<()> {
    if handle.scene_view().await?.phase != TurnPhase::EnemyTurn {
        return Ok(());
    }
    let wait = async {
        loop {
            match battle.recv().await {
                Ok(Event::Battle(BattleEvent::PhaseChanged { phase, .. }))
                    if phase != TurnPhase::EnemyTurn =>
                {
                    break;
                }
                Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };
    if tokio::time::timeout(limit, wait).await.is_err() {
        tracing::warn!("enemy phase still pending after {:?}", limit);
    }
    Ok(())
}

async fn draw(handle: &RuntimeHandle, renderer: &mut TextRenderer) -> Result<()> {
    let scene = handle.scene_view().await?;
    renderer.render(&scene);
    println!("{}", renderer.output());
    Ok(())
}
