use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::emitter::render_registry;
use crate::error::{GeneratorError, Result};
use crate::idempotency::{write_if_changed, WriteOutcome};
use crate::parser::parser_for;
use crate::types::{NormalizedItem, SourceFormat};

/// Item count contributed by one source sheet
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub file: String,
    pub format: SourceFormat,
    pub items: usize,
}

/// Result of a complete pipeline run
#[derive(Debug)]
pub struct PipelineResult {
    pub sources: Vec<SourceSummary>,
    pub total_items: usize,
    pub output_file: PathBuf,
    pub outcome: WriteOutcome,
}

pub struct Pipeline;

impl Pipeline {
    /// Read and parse every configured source, in declared order.
    ///
    /// Any source that cannot be read aborts the whole collection.
    pub fn collect_items(config: &Config) -> Result<(Vec<NormalizedItem>, Vec<SourceSummary>)> {
        let mut all_items = Vec::new();
        let mut summaries = Vec::with_capacity(config.sources.len());

        for entry in &config.sources {
            let span = tracing::info_span!("source", file = %entry.file, format = %entry.format);
            let _enter = span.enter();

            let path = config.source_path(entry);
            let content = read_source(&path)?;
            let items = parser_for(entry.format).parse(&content);

            info!(items = items.len(), "Parsed source");
            println!("  ✓ {}: {}", entry.file, items.len());

            summaries.push(SourceSummary {
                file: entry.file.clone(),
                format: entry.format,
                items: items.len(),
            });
            all_items.extend(items);
        }

        Ok((all_items, summaries))
    }

    /// Parse all sources, render the registry, and write it.
    ///
    /// Nothing is written unless every source was read successfully.
    #[instrument(skip(config), fields(output = %config.output_path.display()))]
    pub fn run(config: &Config) -> Result<PipelineResult> {
        println!("🔄 Reading item sheets...");
        let (items, sources) = Self::collect_items(config)?;
        let total_items = items.len();
        println!("\n📊 TOTAL: {} items", total_items);

        let artifact = render_registry(&items);
        debug!(bytes = artifact.len(), "Rendered registry");

        let outcome = write_if_changed(&config.output_path, &artifact)?;
        info!(
            total_items,
            sha256 = outcome.sha256(),
            unchanged = matches!(outcome, WriteOutcome::Unchanged { .. }),
            "Pipeline finished"
        );

        Ok(PipelineResult {
            sources,
            total_items,
            output_file: config.output_path.clone(),
            outcome,
        })
    }
}

/// Read a whole source sheet as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| GeneratorError::io(path, e))
}
