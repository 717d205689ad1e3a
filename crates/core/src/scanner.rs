//! Walks modules → types → methods and collects registry entries.
//!
//! Every enumeration step yields a [`UnitOutcome`]. Failed units are folded
//! into the report as [`ScanFailure`]s and skipped; siblings keep going.

use crate::config::ScanConfig;
use crate::diagnostics::{DiagnosticSink, ScanFailure, ScanUnit};
use crate::key::KeyResolver;
use crate::matcher::AttributeMatcher;
use crate::naming::render_type_name;
use ecamap_api::{MetadataResult, MethodMetadata, ModuleMetadata, RegistryEntry, TypeMetadata};
use tracing::{debug, info, warn};

/// Result of scanning one unit.
enum UnitOutcome<T> {
    Scanned(T),
    Failed(ScanFailure),
}

impl<T> UnitOutcome<T> {
    fn from_result(unit: ScanUnit, subject: &str, result: MetadataResult<T>) -> Self {
        match result {
            Ok(value) => UnitOutcome::Scanned(value),
            Err(e) => UnitOutcome::Failed(ScanFailure::new(unit, subject, e)),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub modules: usize,
    pub types: usize,
    pub methods: usize,
    pub entries: usize,
    pub failures: usize,
}

#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Entries in module order, then host order for types and methods.
    pub entries: Vec<RegistryEntry>,
    pub failures: Vec<ScanFailure>,
    pub stats: ScanStats,
}

pub struct MetadataScanner {
    matcher: AttributeMatcher,
    keys: KeyResolver,
    sink: DiagnosticSink,
}

impl MetadataScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            matcher: AttributeMatcher::new(config.marker_kinds.iter().cloned()),
            keys: KeyResolver::new(config.key_field.clone()),
            sink: DiagnosticSink::none(),
        }
    }

    pub fn with_sink(mut self, sink: DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn scan(&self, modules: &[Box<dyn ModuleMetadata>]) -> ScanReport {
        let mut report = ScanReport::default();

        for module in modules {
            report.stats.modules += 1;
            let outcome = UnitOutcome::from_result(ScanUnit::Module, module.name(), module.types());
            let Some(types) = self.settle(&mut report, outcome) else {
                continue;
            };
            debug!("Module {} yields {} types", module.name(), types.len());

            for ty in &types {
                self.scan_type(ty.as_ref(), &mut report);
            }
        }

        report.stats.entries = report.entries.len();
        report.stats.failures = report.failures.len();
        info!(
            "Scan complete: {} modules, {} types, {} methods, {} entries, {} failures",
            report.stats.modules,
            report.stats.types,
            report.stats.methods,
            report.stats.entries,
            report.stats.failures
        );

        report
    }

    fn scan_type(&self, ty: &dyn TypeMetadata, report: &mut ScanReport) {
        report.stats.types += 1;
        let outcome = UnitOutcome::from_result(ScanUnit::Type, ty.full_name(), ty.methods());
        let Some(methods) = self.settle(report, outcome) else {
            return;
        };

        for method in &methods {
            report.stats.methods += 1;
            let outcome = self.scan_method(ty, method.as_ref());
            if let Some(Some(entry)) = self.settle(report, outcome) {
                debug!("Registered {} -> {}.{}", entry.key, entry.declaring_type, entry.method_name);
                report.entries.push(entry);
            }
        }
    }

    /// `Scanned(None)` means the method carries no configured marker.
    fn scan_method(
        &self,
        ty: &dyn TypeMetadata,
        method: &dyn MethodMetadata,
    ) -> UnitOutcome<Option<RegistryEntry>> {
        let subject = format!("{}.{}", ty.full_name(), method.name());

        let markers = match UnitOutcome::from_result(ScanUnit::Method, &subject, method.markers()) {
            UnitOutcome::Scanned(markers) => markers,
            UnitOutcome::Failed(failure) => return UnitOutcome::Failed(failure),
        };
        let Some(marker) = self.matcher.select(&markers) else {
            return UnitOutcome::Scanned(None);
        };

        let parameters =
            match UnitOutcome::from_result(ScanUnit::Method, &subject, method.parameter_types()) {
                UnitOutcome::Scanned(parameters) => parameters,
                UnitOutcome::Failed(failure) => return UnitOutcome::Failed(failure),
            };

        let key = self.keys.resolve(ty.full_name(), method.name(), marker);
        let parameter_type_names = parameters.iter().map(render_type_name).collect();

        UnitOutcome::Scanned(Some(RegistryEntry::new(
            key,
            ty.full_name(),
            method.name(),
            parameter_type_names,
        )))
    }

    fn settle<T>(&self, report: &mut ScanReport, outcome: UnitOutcome<T>) -> Option<T> {
        match outcome {
            UnitOutcome::Scanned(value) => Some(value),
            UnitOutcome::Failed(failure) => {
                warn!(unit = failure.unit.as_str(), subject = %failure.subject, "{}", failure.message);
                self.sink.emit(&failure.to_string());
                report.failures.push(failure);
                None
            }
        }
    }
}
