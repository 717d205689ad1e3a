use std::fmt;

/// The unit a contained scan failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanUnit {
    /// Type enumeration of a module failed
    Module,
    /// Method enumeration of a type failed
    Type,
    /// Marker or parameter enumeration of a method failed
    Method,
}

impl ScanUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanUnit::Module => "module",
            ScanUnit::Type => "type",
            ScanUnit::Method => "method",
        }
    }
}

/// A failure that was contained to a single unit and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub unit: ScanUnit,
    /// Module name, type name, or `Type.Method`
    pub subject: String,
    pub message: String,
}

impl ScanFailure {
    pub fn new(unit: ScanUnit, subject: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            unit,
            subject: subject.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.unit {
            ScanUnit::Module => "types from module",
            ScanUnit::Type => "methods from type",
            ScanUnit::Method => "markers from method",
        };
        write!(f, "[ecamap] cannot read {} {}: {}", what, self.subject, self.message)
    }
}

/// Optional receiver of human-readable diagnostic lines.
///
/// Without a callback every line is dropped.
#[derive(Default)]
pub struct DiagnosticSink {
    callback: Option<Box<dyn Fn(&str)>>,
}

impl DiagnosticSink {
    pub fn none() -> Self {
        Self { callback: None }
    }

    pub fn new(callback: impl Fn(&str) + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.callback.is_some()
    }

    pub fn emit(&self, line: &str) {
        if let Some(callback) = &self.callback {
            callback(line);
        }
    }
}

impl fmt::Debug for DiagnosticSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticSink")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
