//! File-based effect processing command.

use std::path::PathBuf;

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ripple_config::{EffectConfig, EffectRack, Preset};
use ripple_io::{BlockEngine, DEFAULT_BLOCK_SIZE, read_wav, write_wav};

use crate::chain_spec::parse_chain;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (16-bit mono)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Single effect to apply
    #[arg(short, long)]
    effect: Option<String>,

    /// Effect chain specification (e.g., "gain:gain=2|echo:delay=0.3,decay=50%")
    #[arg(short, long)]
    chain: Option<String>,

    /// Preset file (TOML)
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Parameters for --effect (e.g., "gain=2")
    #[arg(long, value_parser = parse_key_val, number_of_values = 1)]
    param: Vec<(String, String)>,

    /// Samples per processing block
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Write the effect chain that was used to a preset file
    #[arg(long, value_name = "PATH")]
    save_preset: Option<PathBuf>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("Invalid parameter format: '{s}' (expected key=value)"))
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let engine = BlockEngine::new(args.block_size)?;

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {} channel(s), {:.2}s",
        samples.len(),
        spec.sample_rate,
        spec.channels,
        samples.len() as f32 / spec.sample_rate as f32
    );

    let mut rack = if let Some(preset_path) = &args.preset {
        let mut preset = Preset::load(preset_path)?;
        println!("Loading preset: {}", preset.name);
        // The file's rate wins over whatever the preset was saved at.
        preset.sample_rate = spec.sample_rate;
        EffectRack::from_preset(&preset)?
    } else {
        let configs = if let Some(chain_spec) = &args.chain {
            parse_chain(chain_spec)?
        } else if let Some(kind) = &args.effect {
            let mut config = EffectConfig::new(kind);
            for (key, value) in &args.param {
                config.set_param(key, value);
            }
            vec![config]
        } else {
            anyhow::bail!("No effect specified. Use --effect, --chain, or --preset");
        };

        let mut rack = EffectRack::new(spec.sample_rate as f32);
        for config in &configs {
            rack.add_effect_config(config)?;
        }
        rack
    };

    if rack.is_empty() {
        anyhow::bail!("No effects to process");
    }

    println!("Processing with {} effect(s)...", rack.len());
    for entry in rack.effects() {
        let state = if entry.enabled { "on" } else { "off" };
        println!("  [{}] {} ({state})", entry.id, entry.name);
    }
    tracing::info!(
        effects = rack.len(),
        block_size = engine.block_size(),
        sample_rate = spec.sample_rate,
        "processing"
    );

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let output = engine.process_stream_with_progress(rack.chain_mut(), &samples, |done| {
        pb.set_position(done as u64);
    });

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&output)),
        linear_to_db(peak(&output))
    );

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &output, spec.mono())?;

    if let Some(preset_path) = &args.save_preset {
        let name = preset_path
            .file_stem()
            .map_or_else(|| "Untitled".to_string(), |s| s.to_string_lossy().into_owned());
        rack.to_preset(name).save(preset_path)?;
        println!("Saved preset to {}", preset_path.display());
    }

    println!("Done!");
    Ok(())
}

/// RMS level relative to full scale.
fn rms(samples: &[i16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples
        .iter()
        .map(|&s| {
            let x = f64::from(ripple_core::i16_to_f32(s));
            x * x
        })
        .sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Peak level relative to full scale.
fn peak(samples: &[i16]) -> f32 {
    samples
        .iter()
        .map(|&s| ripple_core::i16_to_f32(s).abs())
        .fold(0.0, f32::max)
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
