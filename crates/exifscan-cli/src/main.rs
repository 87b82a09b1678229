//! exifscan CLI - extract EXIF tags from digital image files.

use anyhow::{Context, Result};
use clap::Parser;
use exifscan_core::{TagEntry, DEFAULT_STOP_TAG};
use exifscan_formats::{convert_types, process_file, ProcessOptions};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exifscan", version, about = "Extract EXIF information from digital image files.")]
struct Args {
    /// Files to process.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Do not process MakerNotes and do not extract thumbnails.
    #[arg(short, long)]
    quick: bool,

    /// Stop processing when this tag is retrieved.
    #[arg(short = 't', long = "stop-tag")]
    stop_tag: Option<String>,

    /// Run in strict mode (stop on errors).
    #[arg(short, long)]
    strict: bool,

    /// Emit tag values as JSON built-in types.
    #[arg(short, long)]
    builtin: bool,

    /// Run in debug mode (display extra info).
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let options = ProcessOptions {
        stop_tag: args
            .stop_tag
            .unwrap_or_else(|| DEFAULT_STOP_TAG.to_string()),
        details: !args.quick,
        strict: args.strict,
        debug: args.debug,
        extract_thumbnail: !args.quick,
        ..ProcessOptions::default()
    };

    for path in &args.files {
        info!("Opening: {}", path.display());
        let file =
            File::open(path).with_context(|| format!("'{}' is unreadable", path.display()))?;
        let mut reader = BufReader::new(file);

        let mut tags = process_file(&mut reader, &options)
            .with_context(|| format!("failed to process '{}'", path.display()))?;

        if tags.is_empty() {
            warn!("No EXIF information found");
            println!();
            continue;
        }

        // report thumbnails, never dump their bytes
        if tags.remove("JPEGThumbnail").is_some() {
            info!("File has JPEG thumbnail");
        }
        if tags.remove("TIFFThumbnail").is_some() {
            info!("File has TIFF thumbnail");
        }

        if args.builtin {
            let serialized = convert_types(&tags);
            println!("{}", serde_json::to_string_pretty(&serialized)?);
        } else {
            for (field, entry) in &tags {
                if let TagEntry::Tag(tag) = entry {
                    println!("{} ({}): {}", field, tag.field_type.label(), tag.printable);
                }
            }
        }
        println!();
    }
    Ok(())
}
