//! Per-request delivery outcome.

use crate::error::SchedulingError;

/// The outcome of processing one delivery request.
///
/// The scheduler never retries: a request is consumed when processing
/// begins, so a failure mid-allocation still reports whatever quantity
/// earlier iterations already moved.
///
/// # Example
///
/// ```
/// use warehouse_types::DeliveryReport;
///
/// let report = DeliveryReport::new(5, 5, None);
/// assert!(report.is_complete());
///
/// let report = DeliveryReport::new(5, 3, None);
/// assert!(report.is_partial());
/// assert_eq!(report.moved(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    requested: u32,
    moved: u32,
    failure: Option<SchedulingError>,
}

impl DeliveryReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(requested: u32, moved: u32, failure: Option<SchedulingError>) -> Self {
        Self {
            requested,
            moved,
            failure,
        }
    }

    /// Returns the quantity the request asked for.
    #[must_use]
    pub const fn requested(&self) -> u32 {
        self.requested
    }

    /// Returns the quantity actually delivered.
    #[must_use]
    pub const fn moved(&self) -> u32 {
        self.moved
    }

    /// Returns the failure that aborted the request, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&SchedulingError> {
        self.failure.as_ref()
    }

    /// Returns `true` if the full requested quantity was delivered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.moved == self.requested && self.failure.is_none()
    }

    /// Returns `true` if some but not all of the requested quantity was
    /// delivered.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.moved > 0 && self.moved < self.requested
    }
}
