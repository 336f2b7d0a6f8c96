//! `urlparams enrich` – run NDJSON events through the enricher.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use urlparams_core::config::{ParamsConfig, RawConfig};
use urlparams_core::{enrich_properties, Event};

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichStats {
    pub events: u64,
    pub enriched: u64,
    pub skipped_invalid_url: u64,
}

pub fn run_enrich(raw: &RawConfig, input: Option<&Path>, skip_invalid_urls: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = enrich_input(raw, input, &mut out, skip_invalid_urls)?;
    out.flush()?;

    tracing::info!(
        events = stats.events,
        enriched = stats.enriched,
        skipped_invalid_url = stats.skipped_invalid_url,
        "enrich finished"
    );
    Ok(())
}

/// Enriches events from `input` (stdin when `None`) into `out`.
pub fn enrich_input<W: Write>(
    raw: &RawConfig,
    input: Option<&Path>,
    out: W,
    skip_invalid_urls: bool,
) -> Result<EnrichStats> {
    let cfg = ParamsConfig::from_raw(raw);
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("open events file: {}", path.display()))?;
            enrich_stream(BufReader::new(file), out, &cfg, skip_invalid_urls)
        }
        None => enrich_stream(io::stdin().lock(), out, &cfg, skip_invalid_urls),
    }
}

/// Reads one JSON event per line, enriches it, and writes it back as one line.
/// Blank lines are ignored.
pub fn enrich_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    cfg: &ParamsConfig,
    skip_invalid_urls: bool,
) -> Result<EnrichStats> {
    let mut stats = EnrichStats::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("read event line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut event: Event = serde_json::from_str(&line)
            .with_context(|| format!("parse event JSON on line {line_no}"))?;
        stats.events += 1;

        if let Some(properties) = event.properties.as_mut() {
            match enrich_properties(properties, cfg) {
                Ok(0) => {}
                Ok(_) => stats.enriched += 1,
                Err(err) if skip_invalid_urls => {
                    tracing::warn!(line = line_no, "skipping enrichment: {err}");
                    stats.skipped_invalid_url += 1;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("enrich event on line {line_no}"))
                }
            }
        }

        serde_json::to_writer(&mut writer, &event)?;
        writer.write_all(b"\n")?;
    }

    Ok(stats)
}
