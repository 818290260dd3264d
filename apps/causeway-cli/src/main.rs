use std::path::PathBuf;

use anyhow::Context;
use causeway_common::Viewport;
use causeway_input::{PointerEvent, PointerState, ScriptedEvent};
use causeway_render::{Renderer, TextFrameRenderer};
use causeway_sim::{DriveConfig, DriveEvent, DriveSummary, DriveWorld, Variant};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "causeway-cli", about = "CLI driver for causeway simulations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Drive a world for a number of ticks and print the final state
    Drive {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// Built-in variant to drive
        #[arg(long, default_value = "causeway")]
        variant: String,
        /// YAML config file; overrides --variant
        #[arg(long)]
        config: Option<PathBuf>,
        /// Hold the pointer down from tick 0
        #[arg(long)]
        hold: bool,
        /// Steering target as a normalized pointer column in [0, 1]; needs --hold
        #[arg(long)]
        steer: Option<f32>,
        /// JSON script of pointer events applied at their ticks
        #[arg(long)]
        script: Option<PathBuf>,
        /// Print a text frame every N ticks
        #[arg(long)]
        render_every: Option<u64>,
        /// Emit the final summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List built-in variants or emit one as a YAML config
    Variants {
        /// Variant name to emit as YAML
        #[arg(long)]
        emit: Option<String>,
    },
    /// Print the slope height profile over a z range
    Profile {
        /// Variant whose slope to sample
        #[arg(long, default_value = "causeway")]
        variant: String,
        /// Start of the z range
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        from: f32,
        /// End of the z range
        #[arg(long, default_value = "-170", allow_hyphen_values = true)]
        to: f32,
        /// Sample spacing
        #[arg(long, default_value = "5")]
        step: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("causeway-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("sim: {}", causeway_sim::crate_info());
            println!("track: {}", causeway_track::crate_info());
            println!("render: {}", causeway_render::crate_info());
            println!("input: {}", causeway_input::crate_info());
            println!("variants: {}", Variant::all().map(|v| v.name()).join(", "));
        }
        Commands::Drive {
            ticks,
            variant,
            config,
            hold,
            steer,
            script,
            render_every,
            json,
        } => {
            let config = match config {
                Some(path) => DriveConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => variant.parse::<Variant>()?.config(),
            };

            let script: Vec<ScriptedEvent> = match script {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading script {}", path.display()))?;
                    serde_json::from_str(&text).context("decoding script JSON")?
                }
                None => Vec::new(),
            };

            let mut pointer = PointerState::new(config.steer_range);
            if hold {
                pointer.process_event(PointerEvent::Pressed);
            }
            if let Some(x_norm) = steer {
                pointer.process_event(PointerEvent::Moved { x_norm });
            }

            tracing::info!(ticks, "drive starting");
            let mut world = DriveWorld::new(config);
            let renderer = TextFrameRenderer::new();
            let viewport = Viewport::default();

            for tick in 0..ticks {
                for scripted in script.iter().filter(|s| s.tick == tick) {
                    pointer.process_event(scripted.event);
                }
                world.step(pointer.sample());

                for event in world.drain_events() {
                    if let DriveEvent::TrackLooped { lap } = event {
                        println!("lap {lap} complete at tick {}", world.tick());
                    }
                }
                if let Some(every) = render_every {
                    if every > 0 && world.tick() % every == 0 {
                        println!("{}", renderer.render(&world, &viewport));
                    }
                }
            }

            let summary = DriveSummary::capture(&world);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
        Commands::Variants { emit } => match emit {
            Some(name) => {
                let variant: Variant = name.parse()?;
                print!("{}", variant.config().to_yaml()?);
            }
            None => {
                for variant in Variant::all() {
                    let config = variant.config();
                    println!(
                        "{:<10} speed={:.2} smoothing={:.2} gate={:?} recycle={:?}",
                        variant.name(),
                        config.speed,
                        config.steer_smoothing,
                        config.gate,
                        config.recycle,
                    );
                }
            }
        },
        Commands::Profile {
            variant,
            from,
            to,
            step,
        } => {
            anyhow::ensure!(step > 0.0, "step must be positive");
            anyhow::ensure!(from >= to, "from must be >= to (z decreases forward)");
            let config = variant.parse::<Variant>()?.config();
            let slope = config.track.slope;

            println!("slope profile for {variant}:");
            let mut z = from;
            while z >= to {
                println!("  z={z:>8.1}  y={:.3}", slope.height_at(z));
                z -= step;
            }
        }
    }

    Ok(())
}
