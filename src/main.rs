//! Block selection demo entry point.
//!
//! A headless demonstration of the selection tracking subsystem:
//! - **bevy_ecs** for entity-component-system architecture
//! - observers for decoupled gesture event handling
//!
//! The binary spawns a player entity with a world position plus a
//! selection record entity, registers the selection observers, and drives
//! one full gesture: start at `--start`, move to `--end`, end. The
//! resulting block region is printed to stdout, optionally as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --start 1.9,5.0,-3.2 --end 4.1,5.0,-3.2
//! ```

mod components;
mod events;
mod systems;

use crate::components::blockselection::BlockSelection;
use crate::components::persistent::Persistent;
use crate::components::worldposition::WorldPosition;
use crate::events::selection::{
    EndSelectionEvent, SelectionCompletedEvent, SelectionStartedEvent, StartSelectionEvent,
};
use crate::systems::selection::{end_selection_observer, start_selection_observer};
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec3;

/// Block selection demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the block selection subsystem")]
struct Cli {
    /// World position where the gesture starts, as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "1.9,5.0,-3.2")]
    start: Vec3,

    /// World position where the gesture ends, as `x,y,z`.
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "4.1,5.0,-3.2")]
    end: Vec3,

    /// Print the final selection record as JSON instead of a summary line.
    #[arg(long)]
    json: bool,
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected `x,y,z`, got `{s}`"));
    }
    let mut axes = [0.0f32; 3];
    for (slot, part) in axes.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{part}`: {e}"))?;
    }
    Ok(Vec3::from_array(axes))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- ECS world + entities ---------------
    let mut world = World::new();

    let player = world.spawn(WorldPosition::from_vec(cli.start)).id();
    let selection = world.spawn(BlockSelection::new()).id();

    // --------------- Observers ---------------
    world.spawn((Observer::new(start_selection_observer), Persistent));
    world.spawn((Observer::new(end_selection_observer), Persistent));
    // Log the derived events the way a renderer or replicator would consume them.
    world.spawn((
        Observer::new(
            |trigger: On<SelectionStartedEvent>, selections: Query<&BlockSelection>| {
                if let Ok(record) = selections.get(trigger.event().selection) {
                    log::info!("Selection started: {:?}", record.current_selection);
                }
            },
        ),
        Persistent,
    ));
    world.spawn((
        Observer::new(
            |trigger: On<SelectionCompletedEvent>, selections: Query<&BlockSelection>| {
                if let Ok(record) = selections.get(trigger.event().selection) {
                    log::info!("Selection completed: {:?}", record.current_selection);
                }
            },
        ),
        Persistent,
    ));
    // Ensure the observers are registered before any event fires.
    world.flush();

    // --------------- One scripted gesture ---------------
    log::info!("Gesture start at {}", cli.start);
    world.trigger(StartSelectionEvent {
        entity: player,
        selection,
    });

    // The host moves the entity while the gesture is held.
    if let Some(mut position) = world.get_mut::<WorldPosition>(player) {
        position.pos = cli.end;
    }

    log::info!("Gesture end at {}", cli.end);
    world.trigger(EndSelectionEvent {
        entity: player,
        selection,
    });
    world.flush();

    let record = world
        .get::<BlockSelection>(selection)
        .copied()
        .unwrap_or_default();

    if cli.json {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match record.current_selection {
            Some(region) => println!(
                "selected blocks {} .. {} ({} blocks per axis)",
                region.min,
                region.max,
                region.size()
            ),
            None => println!("no selection was made"),
        }
    }
}
