use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

use crate::model::Acordao;

#[derive(Debug, Clone)]
pub struct EspelhoFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

pub fn discover_espelho_files(base: &Path, dir_prefix: &str) -> Result<Vec<EspelhoFile>> {
    let mut files = Vec::new();
    walk_directory(base, base, dir_prefix, false, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn walk_directory(
    base: &Path,
    dir: &Path,
    dir_prefix: &str,
    inside_espelho: bool,
    files: &mut Vec<EspelhoFile>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?;

        if file_type.is_dir() {
            let name_matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(dir_prefix));
            walk_directory(base, &path, dir_prefix, inside_espelho || name_matches, files)?;
            continue;
        }

        if !inside_espelho || !file_type.is_file() {
            continue;
        }

        let is_json = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if !is_json {
            continue;
        }

        let relative = path
            .strip_prefix(base)
            .with_context(|| format!("path escapes corpus root: {}", path.display()))?
            .to_path_buf();

        files.push(EspelhoFile { path, relative });
    }

    Ok(())
}

pub fn read_acordaos(path: &Path) -> Result<Vec<Acordao>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    parse_acordaos_lenient(&content)
        .with_context(|| format!("failed to parse acórdãos from {}", path.display()))
}

pub fn parse_acordaos_lenient(content: &str) -> Result<Vec<Acordao>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content).trim();

    if content.is_empty() {
        return Ok(Vec::new());
    }

    let mut wrapped = String::with_capacity(content.len() + 2);
    if !content.starts_with('[') {
        wrapped.push('[');
    }
    wrapped.push_str(content);
    if !content.ends_with(']') {
        wrapped.push(']');
    }

    if let Ok(acordaos) = serde_json::from_str::<Vec<Acordao>>(&wrapped) {
        return Ok(acordaos);
    }

    let recovered = recover_json_objects(content);
    if recovered.is_empty() {
        bail!("no valid acórdão records recoverable");
    }

    debug!(recovered = recovered.len(), "recovered records from malformed JSON");

    let mut acordaos = Vec::with_capacity(recovered.len());
    for value in recovered {
        let acordao: Acordao =
            serde_json::from_value(value).context("recovered object is not an acórdão record")?;
        acordaos.push(acordao);
    }

    Ok(acordaos)
}

fn recover_json_objects(content: &str) -> Vec<Value> {
    let mut objects = Vec::new();
    let mut current = String::new();
    let mut depth = 0_i32;
    let mut in_string = false;
    let mut escape_next = false;

    for ch in content.chars() {
        if depth > 0 {
            current.push(ch);
        }

        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => {
                if depth == 0 {
                    current.clear();
                    current.push('{');
                }
                depth += 1;
            }
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    if let Ok(value) = serde_json::from_str::<Value>(&current) {
                        objects.push(value);
                    }
                    current.clear();
                }
            }
            _ => {}
        }
    }

    objects
}
