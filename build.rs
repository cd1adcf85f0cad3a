// Compiles the bundled species files into a postcard blob that the library
// embeds with `include_bytes!`, so the binaries need no data directory.

use schema::SpeciesEntry;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const SPECIES_DIR: &str = "data/species";

fn main() {
    println!("cargo:rerun-if-changed={}", SPECIES_DIR);

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let species = load_species(Path::new(SPECIES_DIR));

    let bytes = postcard::to_allocvec(&species).expect("species data should serialize");
    let dest = Path::new(&out_dir).join("species.postcard");
    fs::write(&dest, bytes)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", dest.display(), e));
}

fn load_species(dir: &Path) -> Vec<SpeciesEntry> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("species directory {} unreadable: {}", dir.display(), e));

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("ron"))
        .collect();
    // Filenames carry the dex number ("052-meowth.ron"), so this is dex order.
    paths.sort();

    paths
        .iter()
        .map(|path| {
            println!("cargo:rerun-if-changed={}", path.display());
            let content = fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
            ron::from_str::<SpeciesEntry>(&content)
                .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
