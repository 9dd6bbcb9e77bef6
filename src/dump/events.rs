//! Events dump: one request chain per batch of groups

use super::types::{DumpKind, DumpSummary, EventsOptions};
use super::{page_progress, Dumper};
use crate::error::Result;
use crate::groups::{chunk_groups, load_groups, Batch};
use crate::output::{events_path, existing_size, write_records};
use crate::pagination::PageFetcher;
use tracing::{debug, info, warn};

impl Dumper {
    /// Dump upcoming and past events for every group, batched
    ///
    /// Existing batch files are overwritten unless
    /// [`EventsOptions::skip_existing`] is set.
    pub async fn dump_events(&self, options: &EventsOptions) -> Result<DumpSummary> {
        let groups = load_groups(&self.config.groups_file)?;
        let batch_size = self.config.batch_size;
        let units = groups.len().div_ceil(batch_size);
        let mut summary = DumpSummary::start(DumpKind::Events, groups.len(), units);

        info!(
            "Dumping events for {} groups in {} batches of up to {}",
            groups.len(),
            units,
            batch_size
        );

        for batch in chunk_groups(&groups, batch_size)? {
            self.dump_event_batch(&batch, units, options, &mut summary)
                .await
                .map_err(|e| e.in_unit(format!("batch {}", batch.index)))?;
        }

        Ok(summary.finish())
    }

    async fn dump_event_batch(
        &self,
        batch: &Batch<'_>,
        units: usize,
        options: &EventsOptions,
        summary: &mut DumpSummary,
    ) -> Result<()> {
        let path = events_path(&self.config.events_dir, batch.index);

        if options.skip_existing {
            if let Some(size) = existing_size(&path) {
                warn!(
                    "Events batch {}: already processed [{} bytes]",
                    batch.index, size
                );
                summary.record_skipped();
                return Ok(());
            }
        }

        let ids = batch.joined_ids();
        info!(
            "Events batch {}/{}: {} groups",
            batch.index + 1,
            units,
            batch.len()
        );
        debug!("Events batch {} ids: {}", batch.index, ids);

        let url = self.start_url(
            "events",
            &ids,
            &[
                ("fields", self.config.event_fields.as_str()),
                ("status", self.config.event_status.as_str()),
            ],
        )?;

        let collected = PageFetcher::new(&self.client)
            .collect(&url, |page| {
                debug!("Events batch {} {}", batch.index, page_progress(page));
            })
            .await?;

        let bytes = write_records(&path, &collected.records).await?;
        info!(
            "Events batch {}: wrote {} events to {}",
            batch.index,
            collected.records.len(),
            path.display()
        );

        summary.record_written(collected.records.len(), collected.pages, bytes);
        Ok(())
    }
}
