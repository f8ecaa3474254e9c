//! Effect listing and information command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use ripple_core::{DEFAULT_SAMPLE_RATE, Effect, EffectId, EffectWithParams};
use ripple_registry::EffectRegistry;

#[derive(Args)]
pub struct EffectsArgs {
    /// Show details for a specific effect
    #[arg(value_name = "EFFECT")]
    effect: Option<String>,
}

pub fn run(args: EffectsArgs) -> anyhow::Result<()> {
    let registry = EffectRegistry::new();

    let Some(kind) = &args.effect else {
        println!("Available Effects");
        println!("=================");
        println!();

        for desc in registry.all_effects() {
            println!(
                "  {:10} {:12} - {}",
                desc.kind,
                format!("[{}]", desc.category.name()),
                desc.description
            );
        }

        println!();
        println!("Use 'ripple effects <name>' for detailed parameter info.");
        return Ok(());
    };

    let desc = registry
        .get(&kind.to_ascii_lowercase())
        .ok_or_else(|| anyhow::anyhow!("Unknown effect: {kind}"))?;
    let effect = registry
        .create(desc.kind, EffectId(0), DEFAULT_SAMPLE_RATE)
        .ok_or_else(|| anyhow::anyhow!("Unknown effect: {kind}"))?;

    println!("{}", desc.name);
    println!("{}", "=".repeat(desc.name.len()));
    println!();
    println!("{}", desc.description);
    println!();
    let initial = if effect.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    println!("Category: {}. Starts {initial}.", desc.category.name());
    println!();

    println!("Parameters:");
    println!();
    println!("  {:8}  {:12}  {:10}  {}", "Key", "Name", "Default", "Range");
    println!("  {:8}  {:12}  {:10}  {}", "---", "----", "-------", "-----");

    let mut example = Vec::new();
    for index in 0..effect.effect_param_count() {
        let Some(param) = effect.effect_param_info(index) else {
            continue;
        };
        println!(
            "  {:8}  {:12}  {:10}  {} .. {}",
            param.string_id,
            param.name,
            param.format_value(param.default),
            param.format_value(param.min),
            param.format_value(param.max)
        );
        example.push(format!("{}={}", param.string_id, param.default));
    }

    println!();
    println!("Example usage:");
    println!();
    println!(
        "  ripple process input.wav output.wav --chain \"{}:{}\"",
        desc.kind,
        example.join(",")
    );

    Ok(())
}
