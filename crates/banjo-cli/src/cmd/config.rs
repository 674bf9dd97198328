// crates/banjo-cli/src/cmd/config.rs

use clap::{Args, Subcommand};

use banjo_core::config::validate_config;
use banjo_core::defaults::default_config;

use crate::io::config_file;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub cmd: ConfigCmd,
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Write the built-in stock configuration to a JSON file
    Init(InitArgs),

    /// Print a configuration file (leadscrew, limits, gear inventory)
    Show(ShowArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(long)]
    pub out: String,

    /// Overwrite an existing file
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Configuration path
    #[arg(long)]
    pub config: String,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.cmd {
        ConfigCmd::Init(a) => cmd_init(a),
        ConfigCmd::Show(a) => cmd_show(a),
    }
}

fn cmd_init(a: InitArgs) -> anyhow::Result<()> {
    if !a.force && std::path::Path::new(&a.out).exists() {
        anyhow::bail!("{} already exists (use --force to overwrite)", a.out);
    }
    let config = default_config();
    config_file::save_config(&a.out, &config)?;
    eprintln!("wrote config: {} ({} gears)", a.out, config.gears.len());
    Ok(())
}

fn cmd_show(a: ShowArgs) -> anyhow::Result<()> {
    let config = config_file::load_config(&a.config)?;
    validate_config(&config).map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("leadscrew        = {}", config.leadscrew);
    println!("min_teeth        = {}", config.min_teeth);
    println!("min_axle_dist_ab = {}", config.min_axle_distance_ab);
    println!("min_axle_dist_cd = {}", config.min_axle_distance_cd);

    let mut gears = config.gears.clone();
    gears.sort_by(|a, b| {
        a.teeth
            .cmp(&b.teeth)
            .then_with(|| a.module.value_mm().partial_cmp(&b.module.value_mm()).unwrap_or(std::cmp::Ordering::Equal))
    });
    let labels: Vec<String> = gears.iter().map(|g| g.to_string()).collect();
    println!("gears            = {}", labels.join(", "));
    if config.is_multi_module() {
        println!("(multi-module inventory)");
    }
    Ok(())
}
