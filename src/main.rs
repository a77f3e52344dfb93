use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::{info, warn};

use blackunpack::black;
use blackunpack::error::Error;
use blackunpack::graphics;
use blackunpack::resfileindex::ResFileIndex;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode .black file(s) and emit their shader presets as JSON
    Extract {
        /// .black file(s) or directories containing them
        paths: Vec<PathBuf>,

        /// Write JSON to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Map planet graphic IDs to their .black CDN paths using local index files
    Resolve {
        /// Path to the SDE graphics.yaml
        #[clap(long)]
        graphics: PathBuf,

        /// Path to the client's resfileindex.txt
        #[clap(long)]
        resfileindex: PathBuf,
    },
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match args.command {
        Command::Extract { paths, output } => extract(paths, output),
        Command::Resolve {
            graphics,
            resfileindex,
        } => resolve(&graphics, &resfileindex),
    }
}

/// Expand directory arguments to the files they contain.
fn collect_input_files(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in fs::read_dir(&path)? {
                let entry = entry?;
                if entry.file_type()?.is_file() {
                    files.push(entry.path());
                }
            }
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

fn extract(paths: Vec<PathBuf>, output: Option<PathBuf>) -> Result<(), Error> {
    let mut presets = BTreeMap::new();
    for path in collect_input_files(paths)? {
        let data = fs::read(&path)?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("preset")
            .to_owned();

        match black::decode(&data) {
            Ok(preset) => {
                info!(file = %path.display(), kind = %preset.kind, "decoded preset");
                if presets.insert(name, preset).is_some() {
                    warn!(file = %path.display(), "duplicate file stem, previous preset replaced");
                }
            }
            Err(err) => warn!(file = %path.display(), %err, "failed to decode"),
        }
    }

    let json = serde_json::to_string_pretty(&presets)?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn resolve(graphics_path: &Path, index_path: &Path) -> Result<(), Error> {
    let graphics = graphics::planet_graphics(&fs::read_to_string(graphics_path)?);
    let index = ResFileIndex::parse(&fs::read_to_string(index_path)?);
    info!(
        graphics = graphics.len(),
        index = index.len(),
        "loaded index files"
    );

    let mut missing = 0usize;
    for (id, red_path) in graphics.iter().sorted_by_key(|(id, _)| **id) {
        let black_path = graphics::red_to_black(red_path);
        match index.get(&black_path) {
            Some(cdn_path) => println!("{id},{black_path},{cdn_path}"),
            None => missing += 1,
        }
    }
    if missing > 0 {
        warn!(missing, "graphic IDs with no .black entry in resfileindex");
    }
    Ok(())
}
