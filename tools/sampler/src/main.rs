//! Plane sampler: configures one noise module, samples it over a rectangle
//! and reports the value range. Optionally writes the grid as JSON.
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use coherent_core::config::{BillowConfig, PerlinConfig, RidgedMultiConfig};
use coherent_core::{build_plane_map, ModuleConfig, NoiseQuality, NoiseType, PlaneBounds};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModuleKind {
    Perlin,
    Billow,
    RidgedMulti,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QualityArg {
    Fast,
    Standard,
    Best,
}

impl From<QualityArg> for NoiseQuality {
    fn from(q: QualityArg) -> Self {
        match q {
            QualityArg::Fast => NoiseQuality::Fast,
            QualityArg::Standard => NoiseQuality::Standard,
            QualityArg::Best => NoiseQuality::Best,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NoiseTypeArg {
    Gradient,
    Value,
}

impl From<NoiseTypeArg> for NoiseType {
    fn from(t: NoiseTypeArg) -> Self {
        match t {
            NoiseTypeArg::Gradient => NoiseType::Gradient,
            NoiseTypeArg::Value => NoiseType::Value,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sampler", about = "Sample a coherent-noise module over a plane")]
struct Args {
    /// JSON module config; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Module to sample when no config file is given
    #[arg(short, long, value_enum)]
    module: Option<ModuleKind>,

    #[arg(long, allow_negative_numbers = true, conflicts_with = "random_seed")]
    seed: Option<i32>,

    /// Pick a fresh random seed
    #[arg(long)]
    random_seed: bool,

    #[arg(long)]
    octaves: Option<usize>,

    #[arg(long)]
    frequency: Option<f64>,

    #[arg(long)]
    lacunarity: Option<f64>,

    /// Ignored by ridged-multi
    #[arg(long)]
    persistence: Option<f64>,

    #[arg(long, value_enum)]
    quality: Option<QualityArg>,

    /// Perlin only
    #[arg(long, value_enum)]
    noise_type: Option<NoiseTypeArg>,

    #[arg(long, default_value = "256")]
    width: usize,

    #[arg(long, default_value = "256")]
    height: usize,

    /// Sampled rectangle: X0 X1 Y0 Y1
    #[arg(long, num_args = 4, value_names = ["X0", "X1", "Y0", "Y1"], allow_negative_numbers = true)]
    bounds: Option<Vec<f64>>,

    /// Write the sampled grid and its config here as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

// ── Config assembly ──────────────────────────────────────────────────────────

fn base_config(args: &Args) -> Result<ModuleConfig> {
    if let Some(path) = &args.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse module config {}", path.display()));
    }
    Ok(match args.module.unwrap_or(ModuleKind::Perlin) {
        ModuleKind::Perlin => ModuleConfig::Perlin(PerlinConfig::default()),
        ModuleKind::Billow => ModuleConfig::Billow(BillowConfig::default()),
        ModuleKind::RidgedMulti => ModuleConfig::RidgedMulti(RidgedMultiConfig::default()),
    })
}

fn apply_overrides(config: &mut ModuleConfig, args: &Args, seed: Option<i32>) {
    macro_rules! common {
        ($c:expr) => {{
            if let Some(v) = seed { $c.seed = v; }
            if let Some(v) = args.octaves { $c.octave_count = v; }
            if let Some(v) = args.frequency { $c.frequency = v; }
            if let Some(v) = args.lacunarity { $c.lacunarity = v; }
            if let Some(v) = args.quality { $c.quality = v.into(); }
        }};
    }

    match config {
        ModuleConfig::Perlin(c) => {
            common!(c);
            if let Some(v) = args.persistence { c.persistence = v; }
            if let Some(v) = args.noise_type { c.noise_type = v.into(); }
        }
        ModuleConfig::Billow(c) => {
            common!(c);
            if let Some(v) = args.persistence { c.persistence = v; }
        }
        ModuleConfig::RidgedMulti(c) => {
            common!(c);
            if args.persistence.is_some() {
                tracing::warn!("ridged_multi has no persistence; --persistence ignored");
            }
        }
    }
    if args.noise_type.is_some() && !matches!(config, ModuleConfig::Perlin(_)) {
        tracing::warn!(module = config.name(), "--noise-type only applies to perlin; ignored");
    }
}

fn plane_bounds(args: &Args) -> PlaneBounds {
    match args.bounds.as_deref() {
        Some(&[x0, x1, y0, y1]) => PlaneBounds::new(x0, x1, y0, y1),
        _ => PlaneBounds::default(),
    }
}

#[derive(Serialize)]
struct Output<'a> {
    config: &'a ModuleConfig,
    map: &'a coherent_core::NoiseMap,
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = if args.random_seed { Some(rand::random::<i32>()) } else { args.seed };
    let mut config = base_config(&args)?;
    apply_overrides(&mut config, &args, seed);

    let generator = config
        .build()
        .with_context(|| format!("Invalid {} configuration", config.name()))?;
    let bounds = plane_bounds(&args);

    tracing::info!(module = config.name(), width = args.width, height = args.height, ?bounds, "sampling");
    let map = build_plane_map(&generator, args.width, args.height, bounds);
    tracing::info!(
        min = map.min_value(),
        max = map.max_value(),
        mean = map.mean_value(),
        "sampled {} values",
        map.data.len()
    );

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
        serde_json::to_writer(BufWriter::new(file), &Output { config: &config, map: &map })
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}
