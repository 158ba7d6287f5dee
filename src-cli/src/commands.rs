//! Subcommand handlers

use crate::cli::Command;
use anyhow::{bail, Context};
use deck_templates::{KeyValueStore, Template, TemplateCatalog, ThemeExtractor};

/// Dispatch a parsed subcommand against the catalog
pub async fn run<S: KeyValueStore>(
    command: Command,
    catalog: &mut TemplateCatalog<S>,
) -> anyhow::Result<()> {
    match command {
        Command::List => list(catalog),
        Command::Show { id } => show(catalog, id.as_deref()),
        Command::Select { id } => select(catalog, &id),
        Command::Import { file, select } => {
            let extractor =
                ThemeExtractor::with_fallback_typeface(&catalog.settings().fallback_typeface);
            let template = extractor
                .extract_file(&file)
                .await
                .with_context(|| format!("Failed to import {}", file.display()))?;
            save_imported(catalog, template, select)
        }
        Command::Delete { id } => delete(catalog, &id),
    }
}

fn list<S: KeyValueStore>(catalog: &TemplateCatalog<S>) -> anyhow::Result<()> {
    let selected = catalog.get_selected().id;
    for template in catalog.list_templates() {
        let marker = if template.id == selected { "*" } else { " " };
        let kind = if catalog.is_builtin(&template.id) { "built-in" } else { "custom" };
        println!(
            "{} {}\t{}\t{}\t{}",
            marker,
            template.id,
            template.name,
            template.layout.type_name(),
            kind
        );
    }
    Ok(())
}

fn show<S: KeyValueStore>(catalog: &TemplateCatalog<S>, id: Option<&str>) -> anyhow::Result<()> {
    let template: Template = match id {
        Some(id) => catalog
            .get_template(id)
            .with_context(|| format!("No template with id {}", id))?,
        None => catalog.get_selected(),
    };
    println!("{}", serde_json::to_string_pretty(&template)?);
    Ok(())
}

fn select<S: KeyValueStore>(catalog: &mut TemplateCatalog<S>, id: &str) -> anyhow::Result<()> {
    if catalog.get_template(id).is_none() {
        bail!("No template with id {}", id);
    }
    if let Some(e) = catalog.set_selected_id_recovered(id).error() {
        bail!("Failed to save selection: {}", e);
    }
    Ok(())
}

fn save_imported<S: KeyValueStore>(
    catalog: &mut TemplateCatalog<S>,
    template: Template,
    select: bool,
) -> anyhow::Result<()> {
    if let Some(e) = catalog.add_template_recovered(template.clone()).error() {
        bail!("Template was extracted but could not be saved: {}", e);
    }
    if select {
        catalog.set_selected_id(&template.id);
    }
    println!("{}\t{}", template.id, template.name);
    Ok(())
}

fn delete<S: KeyValueStore>(catalog: &mut TemplateCatalog<S>, id: &str) -> anyhow::Result<()> {
    if catalog.is_builtin(id) {
        bail!("{} is a built-in template and cannot be deleted", id);
    }
    let removed = catalog.delete_template_recovered(id);
    if let Some(e) = removed.error() {
        bail!("Failed to delete {}: {}", id, e);
    }
    if !removed.into_inner() {
        bail!("No custom template with id {}", id);
    }
    Ok(())
}
