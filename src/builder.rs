use std::fs::OpenOptions;
use std::io::BufWriter;

use anyhow::Context as _;
use log::debug;

use crate::context::Context;
use crate::history::{fallback_date, DateSource};
use crate::metadata::extract_meta;

pub(crate) mod data;

use data::EssayRecord;

/// Only files with this extension are treated as essays.
const ESSAY_EXT: &str = ".html";
/// Filenames starting with this marker are drafts and never scanned.
const DRAFT_MARKER: char = '_';

/// Scan the essays directory and regenerate the manifest.
///
/// A missing essays directory is a soft no-op; per-file problems (no title,
/// no git history) skip or degrade without aborting the run.
pub(crate) fn build(ctx: &Context, dates: &dyn DateSource) -> anyhow::Result<()> {
    if !ctx.essays_dir.is_dir() {
        println!("No essays directory found at {}", ctx.essays_dir.display());
        return Ok(());
    }

    let mut names: Vec<String> = std::fs::read_dir(&ctx.essays_dir)
        .with_context(|| format!("while listing {:?}", ctx.essays_dir))?
        .filter_map(|entry| Some(entry.ok()?.file_name().to_str()?.to_string()))
        .collect();
    names.sort();

    let mut essays = vec![];

    for name in names {
        if !name.ends_with(ESSAY_EXT) || name.starts_with(DRAFT_MARKER) {
            continue;
        }
        let path = ctx.essays_dir.join(&name);

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("while reading {:?}", path))?;
        let meta = extract_meta(&content);

        let Some(title) = meta.get("title").filter(|t| !t.is_empty()) else {
            println!("  skip  {name}  (no <meta name=\"essay-title\">)");
            continue;
        };

        // Dates from git, with file-mtime fallback per field.
        let fallback = fallback_date(&path)
            .with_context(|| format!("while reading mtime of {:?}", path))?;
        let published = dates
            .first_commit_date(&path)
            .unwrap_or_else(|| fallback.clone());
        let updated = dates
            .last_commit_date(&path)
            .unwrap_or_else(|| fallback.clone());
        debug!("{name}: published {published}, updated {updated}");

        essays.push(EssayRecord {
            title: title.clone(),
            excerpt: meta.get("excerpt").cloned().unwrap_or_default(),
            lang: meta.get("lang").cloned().unwrap_or_else(|| "en".to_string()),
            file: name,
            published,
            updated,
        });
    }

    // Newest first. The sort is stable, so scan order breaks date ties.
    essays.sort_by(|a, b| b.published.cmp(&a.published));

    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&ctx.manifest_path)
        .with_context(|| format!("while opening {:?}", ctx.manifest_path))?;
    serde_json::to_writer_pretty(BufWriter::new(fd), &essays)
        .with_context(|| format!("while writing {:?}", ctx.manifest_path))?;

    println!(
        "Wrote {}  ({} essay(s))",
        ctx.manifest_path.display(),
        essays.len()
    );
    for essay in &essays {
        println!("  {}  {}  [{}]", essay.published, essay.title, essay.lang);
    }

    Ok(())
}
