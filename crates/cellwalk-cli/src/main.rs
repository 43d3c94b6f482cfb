//! cellwalk CLI - traversal source generation tool
//!
//! Regenerates the unrolled cell-traversal block the volume renderer
//! splices into its shader ahead of compilation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use cellwalk_emit::{suggested_depth, EmitSettings, TraversalEmitter, Vendor};

#[derive(Parser)]
#[command(name = "cellwalk")]
#[command(about = "Unrolled cell-traversal source generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the traversal block and write it to a file
    Generate {
        /// Number of hierarchy levels to unroll
        depth: i32,
        /// Output file consumed by the shader build
        output: PathBuf,
        /// JSON settings profile (symbol names, formatting)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// File with a source snippet spliced into the innermost guard
        #[arg(long)]
        leaf: Option<PathBuf>,
    },
    /// Print the traversal block to stdout
    Show {
        /// Number of hierarchy levels to unroll
        depth: i32,
        /// JSON settings profile (symbol names, formatting)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Display structure statistics without writing output
    Info {
        /// Number of hierarchy levels to unroll
        depth: i32,
    },
    /// Suggest an unroll depth from the hierarchy's level count
    Suggest {
        /// Number of bounding-box hierarchy levels available
        bb_levels: i32,
        /// GPU vendor the shader will compile on (nvidia, amd, intel, other)
        #[arg(short, long, default_value = "other")]
        vendor: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            depth,
            output,
            settings,
            leaf,
        } => generate(depth, &output, settings, leaf),
        Commands::Show { depth, settings } => show(depth, settings),
        Commands::Info { depth } => show_info(depth),
        Commands::Suggest { bb_levels, vendor } => suggest(bb_levels, &vendor),
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<EmitSettings> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings profile {}", path.display()))?;
            let settings = EmitSettings::from_json(&json)
                .with_context(|| format!("Invalid settings profile {}", path.display()))?;
            Ok(settings)
        }
        None => Ok(EmitSettings::default()),
    }
}

fn generate(
    depth: i32,
    output: &PathBuf,
    settings: Option<PathBuf>,
    leaf: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(settings)?;

    if let Some(leaf) = leaf {
        let snippet = fs::read_to_string(&leaf)
            .with_context(|| format!("Failed to read leaf snippet {}", leaf.display()))?;
        settings.render.leaf_body = Some(snippet);
    }

    // Render fully before touching the output path so a failed generation
    // never truncates an existing file.
    let block = TraversalEmitter::new(settings).emit(depth)?;
    fs::write(output, &block)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} level(s), {} bytes to {}",
        depth,
        block.len(),
        output.display()
    );
    Ok(())
}

fn show(depth: i32, settings: Option<PathBuf>) -> Result<()> {
    let settings = load_settings(settings)?;
    let block = TraversalEmitter::new(settings).emit(depth)?;
    print!("{}", block);
    Ok(())
}

fn show_info(depth: i32) -> Result<()> {
    let emitter = TraversalEmitter::new(EmitSettings::default());
    let ir = emitter.build_ir(depth)?;
    let block = emitter.emit(depth)?;

    println!("cellwalk traversal: {} level(s)", ir.depth());
    println!("  Guards: {}", ir.depth());
    println!("  Bound derivations: {}", 2 * (ir.depth() - 1));
    println!("  Text size: {} bytes", block.len());

    println!("\nLevels (outermost first):");
    for b in &ir.blocks {
        println!("  {}: {} in [0, {}), {} in [0, {})", b.level, b.y.var, b.y.end, b.x.var, b.x.end);
    }

    Ok(())
}

fn suggest(bb_levels: i32, vendor: &str) -> Result<()> {
    let vendor = match vendor.to_lowercase().as_str() {
        "nvidia" => Vendor::Nvidia,
        "amd" => Vendor::Amd,
        "intel" => Vendor::Intel,
        "other" => Vendor::Other,
        _ => {
            anyhow::bail!("Unknown vendor: {}", vendor);
        }
    };

    let depth = suggested_depth(bb_levels, vendor);
    println!(
        "Suggested unroll depth for {} level(s): {}",
        bb_levels, depth
    );
    Ok(())
}
