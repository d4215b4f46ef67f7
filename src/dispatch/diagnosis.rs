//! Diagnostic path results.

use core::fmt;

use crate::capability::Category;

/// Which of the two candidates an operation resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchPath {
    /// Every requirement holds; the real operation runs.
    Valid,
    /// Some requirement fails; only the diagnosis is available.
    Diagnostic,
}

impl fmt::Display for DispatchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchPath::Valid => f.write_str("valid"),
            DispatchPath::Diagnostic => f.write_str("diagnostic"),
        }
    }
}

/// Outcome of one sub-requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub check: &'static str,
    pub category: Category,
    pub message: &'static str,
    pub holds: bool,
}

impl Verdict {
    pub const fn met(check: &'static str, category: Category, message: &'static str) -> Self {
        Verdict { check, category, message, holds: true }
    }

    pub const fn unmet(check: &'static str, category: Category, message: &'static str) -> Self {
        Verdict { check, category, message, holds: false }
    }
}

/// First unmet sub-requirement of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {message} (unmet {category} requirement `{check}`)")]
pub struct Unsatisfied {
    pub operation: &'static str,
    pub check: &'static str,
    pub category: Category,
    pub message: &'static str,
}

/// Every sub-requirement of one operation, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnosis<const N: usize> {
    operation: &'static str,
    path: DispatchPath,
    verdicts: [Verdict; N],
}

impl<const N: usize> Diagnosis<N> {
    pub fn new(operation: &'static str, path: DispatchPath, verdicts: [Verdict; N]) -> Self {
        debug_assert_eq!(
            path == DispatchPath::Valid,
            verdicts.iter().all(|v| v.holds),
            "`{operation}` resolved to the {path} path against its own checks"
        );
        crate::trace_op!(
            target: "tola_ranges::dispatch",
            operation,
            path = %path,
            "diagnosed call site"
        );
        Diagnosis { operation, path, verdicts }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn path(&self) -> DispatchPath {
        self.path
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn is_satisfied(&self) -> bool {
        self.path == DispatchPath::Valid
    }

    pub fn first_failure(&self) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| !v.holds)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Verdict> + '_ {
        self.verdicts.iter().filter(|v| !v.holds)
    }

    /// `Err` with the first unmet sub-requirement.
    pub fn into_result(self) -> Result<(), Unsatisfied> {
        match self.first_failure() {
            None => Ok(()),
            Some(v) => Err(Unsatisfied {
                operation: self.operation,
                check: v.check,
                category: v.category,
                message: v.message,
            }),
        }
    }
}
