//! Members dump: one request chain per group

use super::types::{DumpKind, DumpSummary};
use super::{page_progress, Dumper};
use crate::error::Result;
use crate::groups::load_groups;
use crate::output::{existing_size, members_path, write_records};
use crate::pagination::PageFetcher;
use crate::types::Group;
use tracing::{debug, info, warn};

impl Dumper {
    /// Dump the member list of every group
    ///
    /// A group whose output file already exists is treated as done and
    /// costs no requests.
    pub async fn dump_members(&self) -> Result<DumpSummary> {
        let groups = load_groups(&self.config.groups_file)?;
        let mut summary = DumpSummary::start(DumpKind::Members, groups.len(), groups.len());

        info!("Dumping members for {} groups", groups.len());

        for group in &groups {
            self.dump_group_members(group, &mut summary)
                .await
                .map_err(|e| e.in_unit(format!("group {}", group.id)))?;
        }

        Ok(summary.finish())
    }

    async fn dump_group_members(&self, group: &Group, summary: &mut DumpSummary) -> Result<()> {
        let path = members_path(&self.config.members_dir, &group.id);

        if let Some(size) = existing_size(&path) {
            warn!("Members {}: already processed [{} bytes]", group.id, size);
            summary.record_skipped();
            return Ok(());
        }

        match &group.name {
            Some(name) => info!("Members {} ({}): processing", group.id, name),
            None => info!("Members {}: processing", group.id),
        }

        let url = self.start_url("members", group.id.as_str(), &[])?;

        let collected = PageFetcher::new(&self.client)
            .collect(&url, |page| {
                info!("-> {}", page.rate_limit);
                debug!("Members {} {}", group.id, page_progress(page));
            })
            .await?;

        let bytes = write_records(&path, &collected.records).await?;
        info!(
            "Members {}: wrote {} members in {} pages",
            group.id,
            collected.records.len(),
            collected.pages
        );

        summary.record_written(collected.records.len(), collected.pages, bytes);
        Ok(())
    }
}
