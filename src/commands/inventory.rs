use anyhow::Result;
use tracing::{info, warn};

use crate::cli::InventoryArgs;
use crate::corpus;
use crate::index::AcordaoIndex;
use crate::model::CorpusInventoryManifest;
use crate::util::{now_utc_string, write_json_pretty};

const MANIFEST_VERSION: u32 = 1;

pub fn run(args: InventoryArgs) -> Result<()> {
    let files = corpus::discover_espelho_files(&args.input_dir, &args.dir_prefix)?;

    let mut index = AcordaoIndex::new();
    let mut acordao_count = 0_usize;
    let mut unreadable_file_count = 0_usize;

    for file in &files {
        match corpus::read_acordaos(&file.path) {
            Ok(acordaos) => {
                acordao_count += acordaos.len();
                index.add_all(&acordaos);
            }
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "unreadable espelho file");
                unreadable_file_count += 1;
            }
        }
    }

    let manifest = CorpusInventoryManifest {
        manifest_version: MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source_directory: args.input_dir.display().to_string(),
        file_count: files.len(),
        unreadable_file_count,
        acordao_count,
        index_entries: index.len(),
    };

    if let Some(manifest_path) = args.manifest_path {
        write_json_pretty(&manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "wrote corpus inventory manifest");
    }

    info!(
        file_count = manifest.file_count,
        unreadable_file_count = manifest.unreadable_file_count,
        acordao_count = manifest.acordao_count,
        index_entries = manifest.index_entries,
        "inventory completed"
    );

    Ok(())
}
