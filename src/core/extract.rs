//! Snippet extraction run loop: walk, collect, transform, emit.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::{AppContext, ExtractArgs};
use crate::core::{collect, emit, transform};
use crate::infra::config::load_config;
use crate::infra::io::read_lines;
use crate::infra::walk::FileWalker;

pub fn run(args: ExtractArgs, ctx: &AppContext) -> Result<()> {
    let cfg = load_config().context("Failed to load configuration")?;

    // CLI overrides config; expand ~ and $VAR in the output root
    let out_dir = args.out_dir.clone().unwrap_or(cfg.extract.out_dir.clone());
    let out_root = PathBuf::from(
        shellexpand::full(&out_dir)
            .with_context(|| format!("Failed to expand output root {out_dir}"))?
            .into_owned(),
    );

    let extensions = if args.ext.is_empty() {
        cfg.extensions.clone()
    } else {
        args.ext.clone()
    };

    let mut ignores = cfg.ignore_patterns.clone();
    ignores.extend(args.ignore.iter().cloned());

    let walker = FileWalker::new(&ignores)?.with_include_hidden(cfg.extract.include_hidden);
    let files = walker.walk_with_filter(&args.path, |p| has_extension(p, &extensions));

    // Set up progress bar (unless quiet mode)
    let progress = if ctx.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    // Strictly sequential: each file is scanned, collected, transformed and
    // emitted to completion before the next begins. A fatal collect error
    // aborts the whole run; snippets already written stay on disk.
    let mut files_extracted = 0usize;
    let mut snippets_emitted = 0usize;

    for file in &files {
        progress.set_message(format!("Scanning {}", file.display()));

        let lines = read_lines(file)?;
        let file_cfg = collect::derive_config(&lines);

        if !file_cfg.enabled {
            debug!(path = %file.display(), "no enablement marker, skipping");
            progress.inc(1);
            continue;
        }

        // Slug and attribution use the path relative to the scan root
        let rel = file.strip_prefix(&args.path).unwrap_or(file);
        let regions = collect::collect_regions(&lines, rel)
            .with_context(|| format!("Failed to collect snippets from {}", file.display()))?;

        for region in regions.values() {
            let body = transform::apply(&region.lines, &file_cfg.suffix);

            if ctx.dry_run {
                let path = emit::output_path(&out_root, &region.source, &region.name);
                if !ctx.quiet {
                    println!(
                        "{}",
                        format!("DRY RUN: would write {}", path.display()).yellow()
                    );
                }
            } else {
                emit::emit_region(&out_root, region, &body)?;
            }
            snippets_emitted += 1;
        }

        files_extracted += 1;
        progress.inc(1);
    }

    progress.finish_and_clear();

    if !ctx.quiet {
        // Dry runs counted the same snippets but wrote nothing
        let verb = if ctx.dry_run { "Would emit" } else { "Emitted" };
        println!(
            "{} {} {} snippets from {} files to {}",
            "✓".green(),
            verb,
            snippets_emitted,
            files_extracted,
            out_root.display()
        );
    }

    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
