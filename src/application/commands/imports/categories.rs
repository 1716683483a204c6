// src/application/commands/imports/categories.rs
use super::ImportCommandService;
use crate::{
    application::{
        dto::{ImportCategoryItem, ImportReport, TaxonomyImportResult},
        error::ApplicationResult,
    },
    domain::taxonomy::NewCategory,
};

pub struct ImportCategoriesCommand {
    pub items: Vec<ImportCategoryItem>,
}

/// Explicit non-zero order, otherwise the 1-based position in the batch.
fn sort_order_for(explicit: Option<i32>, index: usize) -> i32 {
    match explicit {
        Some(order) if order != 0 => order,
        _ => i32::try_from(index + 1).unwrap_or(i32::MAX),
    }
}

impl ImportCommandService {
    pub async fn import_categories(
        &self,
        command: ImportCategoriesCommand,
    ) -> ImportReport<TaxonomyImportResult> {
        let mut report = ImportReport::with_capacity(command.items.len());

        for (index, item) in command.items.into_iter().enumerate() {
            let slug = self.slug_for(item.slug.as_deref(), &item.name);
            let sort_order = sort_order_for(item.sort_order, index);
            let mut result = TaxonomyImportResult {
                name: item.name.clone(),
                slug: slug.clone(),
                id: None,
                created: false,
                error: None,
            };

            match self.import_category(item.name, slug, sort_order).await {
                Ok((id, true)) => {
                    result.id = Some(id);
                    result.created = true;
                    report.record_created(result);
                }
                Ok((id, false)) => {
                    result.id = Some(id);
                    report.record_skipped(result);
                }
                Err(err) => {
                    tracing::warn!(
                        slug = %result.slug,
                        error = %err,
                        "category import item failed"
                    );
                    result.error = Some(err.to_string());
                    report.record_failed(result);
                }
            }
        }

        tracing::info!(
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            "category import finished"
        );
        report
    }

    /// Returns the row id and whether it was created by this call.
    async fn import_category(
        &self,
        name: String,
        slug: String,
        sort_order: i32,
    ) -> ApplicationResult<(i64, bool)> {
        if let Some(existing) = self.category_repo.find_by_slug(&slug).await? {
            return Ok((existing.id.into(), false));
        }
        let created = self
            .category_repo
            .insert(NewCategory::new(name, slug, sort_order)?)
            .await?;
        Ok((created.id.into(), true))
    }
}
