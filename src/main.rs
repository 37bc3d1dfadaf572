use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use content_splitter::{ContentKind, DEFAULT_MAX_FRAGMENT_BYTES, split_content_bytes};

/// Split HTML or plain text into byte-bounded fragment files
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Input file, or "-" for standard input
    #[arg(default_value = "-")]
    file: PathBuf,

    /// Maximum fragment size in bytes
    #[arg(long = "max-len", default_value_t = DEFAULT_MAX_FRAGMENT_BYTES)]
    max_len: usize,

    /// Directory the fragment files are written to
    #[arg(long, default_value = "fragments")]
    out_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    version: String,
    created_at: String,
    generator: String,
    content_kind: String,
    max_fragment_bytes: usize,
    stats: ManifestStats,
}

#[derive(Debug, Serialize, Deserialize)]
struct ManifestStats {
    fragment_count: usize,
    total_bytes: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let source = read_source(&cli.file)?;

    let fragments = split_content_bytes(&source, cli.max_len)?;
    let kind = fragments.kind();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create output directory {}", cli.out_dir.display()))?;

    let mut fragment_count = 0;
    let mut total_bytes = 0;
    for (index, fragment) in fragments.enumerate() {
        let index = index + 1;
        println!("fragment #{}: {} bytes.", index, fragment.len());
        println!("{}", "-".repeat(20));

        let path = fragment_path(&cli.out_dir, kind, index);
        fs::write(&path, &fragment)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        fragment_count += 1;
        total_bytes += fragment.len();
    }

    write_manifest(&cli.out_dir, kind, cli.max_len, fragment_count, total_bytes)?;
    eprintln!(
        "[content-splitter] ✓ wrote {} {} fragments to {}",
        fragment_count,
        kind.label(),
        cli.out_dir.display()
    );

    Ok(())
}

/// Read the whole input, from a file or from standard input when the
/// argument is "-"
fn read_source(file: &Path) -> Result<Vec<u8>> {
    if file.as_os_str() == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read standard input")?;
        Ok(buffer)
    } else {
        fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
    }
}

/// Fragment files are named by detected kind and 1-based index
fn fragment_path(out_dir: &Path, kind: ContentKind, index: usize) -> PathBuf {
    out_dir.join(format!(
        "fragment_{}_{}.{}",
        kind.label(),
        index,
        kind.extension()
    ))
}

fn write_manifest(
    out_dir: &Path,
    kind: ContentKind,
    max_len: usize,
    fragment_count: usize,
    total_bytes: usize,
) -> Result<()> {
    let manifest = Manifest {
        version: "1.0.0".to_string(),
        created_at: Utc::now().to_rfc3339(),
        generator: format!("content-splitter v{}", env!("CARGO_PKG_VERSION")),
        content_kind: kind.label().to_string(),
        max_fragment_bytes: max_len,
        stats: ManifestStats {
            fragment_count,
            total_bytes,
        },
    };

    let path = out_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
