//! Jingle - procedural quiz sound effects

use anyhow::{Context, Result};
use clap::Parser;
use jingle::config;
use jingle::encode::inspect_file;
use jingle::export;
use jingle::synth::SAMPLE_RATE;
use jingle::Sound;
use std::path::Path;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { sound, output } => {
            println!("Rendering {}...", sound);
            export::write_wav(sound, &output)?;
            println!("  Duration: {:.2}s at {} Hz", sound.duration(), SAMPLE_RATE);
            println!("Wrote {:?}", output);
        }

        Commands::Uri { sound, json } => {
            let uri = jingle::generate(sound);
            if json {
                let value = serde_json::json!({
                    "sound": sound,
                    "bytes": uri.len(),
                    "uri": uri,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", uri);
            }
        }

        Commands::Export { config: config_path } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;

            let written = export::export_sounds(&cfg.export)?;
            println!("Exported {} sounds to {:?}:", written.len(), cfg.export.directory);
            for (sound, path) in cfg.export.sounds.iter().zip(&written) {
                let hints = cfg.playback.hints(*sound);
                println!(
                    "  - {:?} (volume {:.0}%{})",
                    path,
                    hints.volume * 100.0,
                    if hints.looping { ", loop" } else { "" }
                );
            }
        }

        Commands::Inspect { input } => {
            let info = inspect_file(&input)
                .with_context(|| format!("failed to inspect {:?}", input))?;
            println!("{:?}:", input);
            println!("  Channels: {}", info.channels);
            println!("  Sample rate: {} Hz", info.sample_rate);
            println!("  Bits per sample: {}", info.bits_per_sample);
            println!("  Samples: {}", info.sample_count);
            println!("  Data size: {} bytes", info.data_size);
            println!("  Duration: {:.3}s", info.duration_secs());
            println!("  Peak: {:.3}", info.peak);
        }

        Commands::List => {
            println!("Available sounds:\n");
            for sound in Sound::ALL {
                println!(
                    "  {:<18} {:.2}s  {:>2} tone{}{}",
                    sound.name(),
                    sound.duration(),
                    sound.tone_count(),
                    if sound.tone_count() == 1 { "" } else { "s" },
                    if sound.loops() { "  [loops]" } else { "" }
                );
            }
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Export directory: {:?}", cfg.export.directory);
                    println!("  Format: {}", cfg.export.format.extension());
                    println!("  Sounds: {}", cfg.export.sounds.len());
                    for sound in &cfg.export.sounds {
                        println!("    - {} ({:.2}s)", sound, sound.duration());
                    }
                    println!("  Music volume: {:.0}%", cfg.playback.music_volume * 100.0);
                    println!("  Effects volume: {:.0}%", cfg.playback.effects_volume * 100.0);
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let example_config = include_str!("../jingle.example.yaml");

            let path = "jingle.yaml";
            if Path::new(path).exists() {
                println!("jingle.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created jingle.yaml with example configuration.");
            }
        }
    }

    Ok(())
}
