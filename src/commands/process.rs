use anyhow::Result;
use tracing::{info, warn};

use crate::cli::ProcessArgs;
use crate::corpus;
use crate::enrich::enrich_acordao;
use crate::index::AcordaoIndex;
use crate::model::{Acordao, ProcessCounts, ProcessReport};
use crate::util::{ensure_directory, now_utc_string, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ProcessArgs) -> Result<()> {
    let started_at = now_utc_string();

    let files = corpus::discover_espelho_files(&args.input_dir, &args.dir_prefix)?;
    info!(
        file_count = files.len(),
        input = %args.input_dir.display(),
        "discovered espelho files"
    );

    let index = build_index(&files);
    info!(entries = index.len(), "acórdão index built");

    ensure_directory(&args.output_dir)?;

    let mut files_processed = 0_usize;
    let mut acordaos_processed = 0_usize;
    let mut errors: Vec<String> = Vec::new();

    for file in &files {
        let acordaos = match corpus::read_acordaos(&file.path) {
            Ok(acordaos) => acordaos,
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "failed to process file");
                errors.push(format!("{}: {err:#}", file.path.display()));
                continue;
            }
        };

        let enriched: Vec<Acordao> = acordaos
            .into_iter()
            .map(|mut acordao| {
                enrich_acordao(&mut acordao, &index);
                acordao
            })
            .collect();

        let output_path = args.output_dir.join(&file.relative);
        write_json_pretty(&output_path, &enriched)?;

        files_processed += 1;
        acordaos_processed += enriched.len();

        if files_processed % 100 == 0 {
            info!(
                processed = files_processed,
                total = files.len(),
                "processing progress"
            );
        }
    }

    let report = ProcessReport {
        report_version: REPORT_VERSION,
        started_at,
        finished_at: now_utc_string(),
        input_directory: args.input_dir.display().to_string(),
        output_directory: args.output_dir.display().to_string(),
        counts: ProcessCounts {
            espelho_files: files.len(),
            files_processed,
            files_failed: errors.len(),
            acordaos_processed,
            index_entries: index.len(),
        },
        errors,
    };

    let report_path = args
        .report_path
        .unwrap_or_else(|| args.output_dir.join("process_report.json"));
    write_json_pretty(&report_path, &report)?;

    info!(path = %report_path.display(), "wrote process report");
    info!(
        files_processed,
        files_failed = report.counts.files_failed,
        acordaos_processed,
        "processing completed"
    );

    Ok(())
}

fn build_index(files: &[corpus::EspelhoFile]) -> AcordaoIndex {
    let mut index = AcordaoIndex::new();
    let mut indexed_files = 0_usize;

    for file in files {
        match corpus::read_acordaos(&file.path) {
            Ok(acordaos) => {
                index.add_all(&acordaos);
                indexed_files += 1;
                if indexed_files % 100 == 0 {
                    info!(
                        indexed = indexed_files,
                        total = files.len(),
                        "indexing progress"
                    );
                }
            }
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "failed to index file");
            }
        }
    }

    index
}
