//! The `tree` command.
//!
//! Prints what the generator sees without writing anything:
//!
//! ```text
//! card  .pug .scss
//! ├── card__title (folder)
//! └── button
//! index  .pug
//! ├── base (extends)
//! └── card
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::CliConfig;
use super::common::{GeneratorSettings, current_dir};
use crate::model::{DependencyRecord, Entity};
use crate::snapshot::Snapshot;

/// Print every component with its folder and content dependencies.
#[derive(Args, Debug, Default)]
pub struct TreeCommand {
    /// Component root directory; may be repeated. Replaces the roots of
    /// blockdeps.toml.
    #[arg(short, long = "root", value_name = "DIR")]
    roots: Vec<PathBuf>,
}

impl TreeCommand {
    /// Run the command.
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let working_dir = current_dir()?;
        self.execute_in(&working_dir, config)
    }

    /// Run the command as if started in `working_dir`.
    pub fn execute_in(self, working_dir: &Path, config: &CliConfig) -> Result<()> {
        let settings =
            GeneratorSettings::resolve(working_dir, config.config_path.as_deref(), &self.roots, Some(false), None)?;
        let snapshot = settings.generator().resolve_tree()?;

        for line in render_tree(&snapshot) {
            println!("{line}");
        }
        Ok(())
    }
}

/// Render the tree, one output line per element.
pub fn render_tree(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = Vec::new();

    if snapshot.entities.is_empty() {
        lines.push("No components found.".to_string());
        return lines;
    }

    for entity in snapshot.entities.iter() {
        lines.push(entity_header(entity));

        let Some(record) = snapshot.dependencies.get(&entity.name) else {
            continue;
        };
        let edges = edges(record, snapshot);
        for (index, edge) in edges.iter().enumerate() {
            let branch = if index + 1 == edges.len() { "└──" } else { "├──" };
            lines.push(format!("{branch} {edge}"));
        }
    }

    lines
}

fn entity_header(entity: &Entity) -> String {
    let kinds: Vec<&str> = entity.files.keys().map(|kind| kind.as_str()).collect();
    if kinds.is_empty() {
        entity.name.cyan().bold().to_string()
    } else {
        format!("{}  {}", entity.name.cyan().bold(), kinds.join(" ").dimmed())
    }
}

fn edges(record: &DependencyRecord, snapshot: &Snapshot) -> Vec<String> {
    let mut edges: Vec<String> =
        record.folder.iter().map(|name| format!("{name} {}", "(folder)".dimmed())).collect();

    for name in record.live_content(&snapshot.entities) {
        if record.folder.contains(&name) {
            continue;
        }
        if record.extends.as_ref() == Some(&name) {
            edges.push(format!("{name} {}", "(extends)".yellow()));
        } else {
            edges.push(name);
        }
    }

    edges
}
