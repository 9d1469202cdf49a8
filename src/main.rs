//! spriteanim entry point.
//!
//! Loads sprite-sheet animation definitions from a JSON file, prepares them
//! through the ECS schedule and prints their derived timing.
//!
//! # Running
//!
//! ```sh
//! cargo run -- assets/animations.json --config assets/animation.ini
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use spriteanim::components::animation::SpriteAnimation;
use spriteanim::resources::animationconfig::AnimationConfig;
use spriteanim::resources::animationstore::AnimationStore;
use spriteanim::systems::animation::prepare_animations;

#[derive(Parser)]
#[command(version, about = "Inspect sprite-sheet animation definitions and their timing.")]
struct Cli {
    /// JSON file with animation definitions.
    #[arg(value_name = "PATH")]
    animations: PathBuf,

    /// INI file with default animation settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only show the animation with this key.
    #[arg(long, value_name = "KEY")]
    animation: Option<String>,
}

fn format_seconds(value: f32) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.4}", value)
    }
}

fn print_row(key: &str, animation: &SpriteAnimation) {
    let Some(timing) = animation.timing() else {
        log::warn!("Animation '{}' was not prepared", key);
        return;
    };
    println!(
        "{:<20} {:>6} {:>7.2} {:>5} {:>9} {:>10} {:>10} {:>10}",
        key,
        animation.frame_count(),
        animation.fps(),
        animation.looped(),
        animation.ping_pong(),
        format_seconds(timing.seconds_per_frame),
        format_seconds(timing.iteration_duration),
        format_seconds(timing.total_duration),
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => {
            let mut config = AnimationConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            config
        }
        None => AnimationConfig::new(),
    };

    let store = match AnimationStore::load_from_file(&cli.animations, &config) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(store);

    let mut schedule = Schedule::default();
    schedule.add_systems(prepare_animations);
    schedule.run(&mut world);

    let store = world.resource::<AnimationStore>();
    let keys: Vec<&str> = match cli.animation.as_deref() {
        Some(key) if store.get(key).is_some() => vec![key],
        Some(key) => {
            eprintln!("Error: no animation named '{key}'");
            std::process::exit(1);
        }
        None => store.keys(),
    };

    println!(
        "{:<20} {:>6} {:>7} {:>5} {:>9} {:>10} {:>10} {:>10}",
        "animation", "frames", "fps", "loop", "ping_pong", "s/frame", "iteration", "total"
    );
    for key in keys {
        if let Some(animation) = store.get(key) {
            print_row(key, animation);
        }
    }
}
