// src/application/commands/imports/tags.rs
use super::ImportCommandService;
use crate::{
    application::{
        dto::{ImportReport, ImportTagItem, TaxonomyImportResult},
        error::ApplicationResult,
    },
    domain::taxonomy::NewTag,
};

pub struct ImportTagsCommand {
    pub items: Vec<ImportTagItem>,
}

impl ImportCommandService {
    pub async fn import_tags(
        &self,
        command: ImportTagsCommand,
    ) -> ImportReport<TaxonomyImportResult> {
        let mut report = ImportReport::with_capacity(command.items.len());

        for item in command.items {
            let slug = self.slug_for(item.slug.as_deref(), &item.name);
            let mut result = TaxonomyImportResult {
                name: item.name.clone(),
                slug: slug.clone(),
                id: None,
                created: false,
                error: None,
            };

            match self.import_tag(item.name, slug).await {
                Ok((id, created)) => {
                    result.id = Some(id);
                    result.created = created;
                    if created {
                        report.record_created(result);
                    } else {
                        report.record_skipped(result);
                    }
                }
                Err(err) => {
                    tracing::warn!(slug = %result.slug, error = %err, "tag import item failed");
                    result.error = Some(err.to_string());
                    report.record_failed(result);
                }
            }
        }

        tracing::info!(
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            "tag import finished"
        );
        report
    }

    async fn import_tag(&self, name: String, slug: String) -> ApplicationResult<(i64, bool)> {
        if let Some(existing) = self.tag_repo.find_by_slug(&slug).await? {
            return Ok((existing.id.into(), false));
        }
        let created = self.tag_repo.insert(NewTag::new(name, slug)?).await?;
        Ok((created.id.into(), true))
    }
}
