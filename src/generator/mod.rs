//! The incremental import generator.
//!
//! [`Generator`] owns the scan roots, the collaborators and the snapshot of
//! its last pass. [`Generator::run`] executes passes until one of them
//! leaves the tree's structure alone:
//!
//! ```text
//! scan ─► snapshot diff ─► resolve ─► classify ─► synthesize ─► inject
//!  ▲                                                   │            │
//!  └────────────── file created or deleted ◄───────────┴────────────┘
//! ```
//!
//! Every pass ends by replacing the snapshot with the tables it built. The
//! number of passes per run is bounded by `max_iterations`; running out is
//! reported as [`BlockdepsError::FixedPointNotReached`].
//!
//! # Example
//!
//! ```rust,no_run
//! use blockdeps_cli::generator::Generator;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut generator = Generator::new(vec!["src/blocks".into(), "src/pages".into()], true);
//! let report = generator.run()?;
//! println!("{} passes, {} files written", report.pass_count(), report.written().count());
//!
//! // Nothing changed on disk, so nothing is written
//! assert!(generator.run()?.is_noop());
//! # Ok(())
//! # }
//! ```

mod report;

pub use report::{PassReport, RunReport};

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::constants::DEFAULT_MAX_ITERATIONS;
use crate::core::BlockdepsError;
use crate::injector::{InjectionOutcome, Injector, StatementPlan};
use crate::model::{DependencyRecord, DependencyTable, EntityTable, FileInfo, FileKind};
use crate::resolver::{ChangeSet, ContentSource, DependencyResolver, classify};
use crate::rules::{BuiltinRules, RuleTable};
use crate::scanner::scan_roots;
use crate::snapshot::Snapshot;
use crate::synthesizer::{create_placeholder, missing_kinds};
use crate::template::{PugParser, TemplateParser};

/// Keeps generated import statements of a component tree up to date.
pub struct Generator {
    roots: Vec<PathBuf>,
    create_missing_files: bool,
    max_iterations: usize,
    rules: Box<dyn RuleTable>,
    parser: Box<dyn TemplateParser>,
    previous: Option<Snapshot>,
}

impl Generator {
    /// Create a generator for `roots` using the built-in rules and the Pug
    /// template parser.
    pub fn new(roots: Vec<PathBuf>, create_missing_files: bool) -> Self {
        Self {
            roots,
            create_missing_files,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            rules: Box::new(BuiltinRules::new()),
            parser: Box::new(PugParser::new()),
            previous: None,
        }
    }

    /// Replace the rule table.
    #[must_use]
    pub fn with_rules(mut self, rules: Box<dyn RuleTable>) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the template parser.
    #[must_use]
    pub fn with_parser(mut self, parser: Box<dyn TemplateParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Bound the number of passes of one run.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// The snapshot left by the last pass, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.previous.as_ref()
    }

    /// Run passes until the tree reaches a fixed point.
    ///
    /// # Errors
    ///
    /// - [`BlockdepsError::NoRoots`] when no roots were given
    /// - [`BlockdepsError::FixedPointNotReached`] when `max_iterations`
    ///   passes all requested a repeat
    /// - any scan, template or file system error of a pass; files written
    ///   before the failure stay written
    pub fn run(&mut self) -> Result<RunReport> {
        if self.roots.is_empty() {
            return Err(BlockdepsError::NoRoots.into());
        }

        let mut report = RunReport::default();
        loop {
            if report.pass_count() >= self.max_iterations {
                return Err(BlockdepsError::FixedPointNotReached {
                    iterations: report.pass_count(),
                }
                .into());
            }

            let pass = self.pass()?;
            let repeat = pass.needs_repeat();
            report.passes.push(pass);

            if !repeat {
                break;
            }
            debug!(pass = report.pass_count(), "Tree structure changed, running another pass");
        }

        info!(
            passes = report.pass_count(),
            created = report.created().count(),
            written = report.written().count(),
            deleted = report.deleted().count(),
            "Generated imports"
        );

        Ok(report)
    }

    /// Execute a single pass and replace the snapshot.
    pub fn pass(&mut self) -> Result<PassReport> {
        let mut entities = scan_roots(&self.roots, self.rules.as_ref())?;
        let mut report = PassReport {
            entities: entities.len(),
            ..PassReport::default()
        };

        let previous = self.previous.as_ref();
        if previous.is_some_and(|snapshot| snapshot.matches(&entities)) {
            debug!("Component tree unchanged since the last pass");
            report.skipped = true;
            return Ok(report);
        }

        let dependencies = self.resolve_all(&entities, previous, &mut report)?;
        let recognized = self.rules.kinds();

        for name in entities.names().to_vec() {
            let Some(record) = dependencies.get(&name) else {
                continue;
            };
            let changes = classify(&name, record, &entities, previous, &recognized);
            if changes.changed_kinds.is_empty() {
                continue;
            }
            debug!(component = %name, kinds = ?changes.changed_kinds, "Dependency kinds changed");

            if self.create_missing_files {
                self.synthesize(&name, &changes, &mut entities, &mut report)?;
            }
            self.inject(&name, record, &changes, &entities, previous, &mut report)?;
        }

        self.previous = Some(Snapshot::new(entities, dependencies));
        Ok(report)
    }

    /// Scan and resolve without touching any file.
    ///
    /// The generator's snapshot is left as it is.
    pub fn resolve_tree(&self) -> Result<Snapshot> {
        if self.roots.is_empty() {
            return Err(BlockdepsError::NoRoots.into());
        }

        let entities = scan_roots(&self.roots, self.rules.as_ref())?;
        let mut report = PassReport::default();
        let dependencies = self.resolve_all(&entities, None, &mut report)?;
        Ok(Snapshot::new(entities, dependencies))
    }

    fn resolve_all(
        &self,
        entities: &EntityTable,
        previous: Option<&Snapshot>,
        report: &mut PassReport,
    ) -> Result<DependencyTable> {
        let resolver = DependencyResolver::new(self.parser.as_ref());
        let mut dependencies = DependencyTable::new();

        for entity in entities.iter() {
            if let Some(record) = previous.and_then(|snapshot| snapshot.reusable_record(entity)) {
                report.reused += 1;
                dependencies.insert(entity.name.clone(), record.clone());
                continue;
            }

            let (record, source) = resolver.resolve(entity, entities, previous)?;
            if source == ContentSource::Parsed {
                report.parsed += 1;
            }
            dependencies.insert(entity.name.clone(), record);
        }

        Ok(dependencies)
    }

    fn synthesize(
        &self,
        name: &str,
        changes: &ChangeSet,
        entities: &mut EntityTable,
        report: &mut PassReport,
    ) -> Result<()> {
        let Some(entity) = entities.get(name) else {
            return Ok(());
        };
        let missing = missing_kinds(entity, &changes.dep_items, &changes.changed_kinds, entities);

        for kind in missing {
            if let Some(entity) = entities.get_mut(name) {
                report.created.push(create_placeholder(entity, &kind)?);
            }
        }
        Ok(())
    }

    fn inject(
        &self,
        name: &str,
        record: &DependencyRecord,
        changes: &ChangeSet,
        entities: &EntityTable,
        previous: Option<&Snapshot>,
        report: &mut PassReport,
    ) -> Result<()> {
        let Some(entity) = entities.get(name) else {
            return Ok(());
        };

        for (kind, file) in &entity.files {
            if !changes.changed_kinds.contains(kind) {
                continue;
            }

            let plan = self.statement_plan(name, kind, file, record, changes, entities, previous);
            let injector = Injector::new(self.rules.strategy(kind));
            match injector.apply(&file.path, &plan)? {
                InjectionOutcome::Unchanged => {}
                InjectionOutcome::Written {
                    ..
                } => report.written.push(file.path.clone()),
                InjectionOutcome::Deleted => report.deleted.push(file.path.clone()),
            }
        }
        Ok(())
    }

    /// Statements `file` must contain, and previously generated ones it must
    /// lose.
    #[allow(clippy::too_many_arguments)]
    fn statement_plan(
        &self,
        name: &str,
        kind: &FileKind,
        file: &FileInfo,
        record: &DependencyRecord,
        changes: &ChangeSet,
        entities: &EntityTable,
        previous: Option<&Snapshot>,
    ) -> StatementPlan {
        let mut plan = StatementPlan::default();

        let extends_path = dependency_path(entities, record.extends.as_deref(), kind);
        for dep in &changes.dep_items {
            let Some(dep_path) = dependency_path(entities, Some(dep), kind) else {
                continue;
            };
            let is_extends = extends_path.as_deref() == Some(dep_path.as_path());
            let statement = self.rules.render_import(kind, &dep_path, &file.path, is_extends);

            if plan.needed.contains(&statement) {
                continue;
            }
            if is_extends {
                plan.needed.insert(0, statement.clone());
                plan.leading = Some(statement);
            } else {
                plan.needed.push(statement);
            }
        }

        let Some(snapshot) = previous else {
            return plan;
        };
        let previous_extends = snapshot.record(name).and_then(|record| record.extends.as_deref());
        let previous_extends_path = dependency_path(&snapshot.entities, previous_extends, kind);

        for dep in &changes.previous_items {
            let Some(dep_path) = dependency_path(&snapshot.entities, Some(dep), kind) else {
                continue;
            };
            let is_extends = previous_extends_path.as_deref() == Some(dep_path.as_path());
            let statement = self.rules.render_import(kind, &dep_path, &file.path, is_extends);

            let still_needed = plan.needed.iter().any(|needed| needed.trim() == statement.trim());
            if !still_needed && !plan.stale.contains(&statement) {
                plan.stale.push(statement);
            }
        }

        plan
    }
}

/// Path of `name`'s file of `kind` in `entities`.
fn dependency_path(entities: &EntityTable, name: Option<&str>, kind: &FileKind) -> Option<PathBuf> {
    let entity = entities.get(name?)?;
    entity.file(kind).map(|file| file.path.clone())
}
