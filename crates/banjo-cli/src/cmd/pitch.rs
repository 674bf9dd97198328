// crates/banjo-cli/src/cmd/pitch.rs

use clap::Args;

use banjo_core::defaults::default_config;
use banjo_core::finder::evaluate;
use banjo_core::{Gear, GearModule, Pitch, PitchType};

use crate::io::config_file;

#[derive(Args)]
pub struct PitchArgs {
    /// Gear module for all four gears (e.g. "M1")
    #[arg(long, default_value = "M1")]
    pub module: String,

    /// Tooth counts as A,B,C,D (e.g. "40,65,65,30")
    #[arg(long)]
    pub gears: String,

    /// Leadscrew pitch value
    #[arg(long)]
    pub leadscrew: f64,

    /// Leadscrew unit: mm | tpi
    #[arg(long, default_value = "mm")]
    pub unit: String,

    /// Check clearance against this configuration (defaults otherwise)
    #[arg(long)]
    pub config: Option<String>,
}

pub fn run(args: PitchArgs) -> anyhow::Result<()> {
    let module = GearModule::parse(&args.module).map_err(|e| anyhow::anyhow!("{e}"))?;
    let kind = PitchType::parse(&args.unit).map_err(|e| anyhow::anyhow!("{e}"))?;
    let leadscrew = Pitch::new(args.leadscrew, kind);

    let teeth = parse_teeth(&args.gears)?;
    let [a, b, c, d] = teeth;
    let gear = |z: u32| Gear::new(module, z).map_err(|e| anyhow::anyhow!("{e}"));
    let setup = evaluate(
        Some(gear(a)?),
        Some(gear(b)?),
        Some(gear(c)?),
        Some(gear(d)?),
        leadscrew,
    );

    let config = match args.config.as_deref() {
        Some(path) => config_file::load_config(path)?,
        None => default_config(),
    };

    let ratio = (a as f64 * c as f64) / (b as f64 * d as f64);
    let clearing = setup.are_gears_clearing_axles(
        config.min_teeth,
        config.min_axle_distance_cd,
        config.min_axle_distance_ab,
    );

    println!("gears      = {a}, {b}, {c}, {d} ({module})");
    println!("leadscrew  = {leadscrew}");
    println!("ratio      = {ratio:.6}");
    println!("pitch      = {}", setup.pitch);
    println!("pitch alt  = {}", setup.pitch.convert());
    println!("provided   = {}", setup.are_gears_provided());
    println!("modules    = {}", setup.are_modules_matching());
    println!("clearance  = {clearing}");
    println!(
        "valid      = {}",
        setup.is_valid(
            config.min_teeth,
            config.min_axle_distance_cd,
            config.min_axle_distance_ab
        )
    );
    Ok(())
}

fn parse_teeth(s: &str) -> anyhow::Result<[u32; 4]> {
    let parts: Vec<u32> = s
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| anyhow::anyhow!("invalid tooth count list: {s}"))?;
    let [a, b, c, d] = parts.as_slice() else {
        anyhow::bail!("expected exactly four tooth counts (A,B,C,D), got {}", parts.len());
    };
    Ok([*a, *b, *c, *d])
}
