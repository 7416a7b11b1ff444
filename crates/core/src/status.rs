use std::fmt;

/// Result of a protocol operation.
///
/// Every operation on a slave reports one of these codes back to the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The operation completed normally.
    Ok,
    /// The operation completed, but something noteworthy happened.
    Warning,
    /// The operation could not complete; the slave remains usable.
    Discard,
    /// Protocol violation or invalid argument; the slave moved to the Error
    /// phase but can still be destroyed.
    Error,
    /// Unrecoverable failure; the slave must be destroyed.
    Fatal,
    /// An asynchronous step is still running.
    ///
    /// Part of the protocol vocabulary; a synchronous slave never produces it.
    Pending,
}

impl Status {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "Ok",
            Status::Warning => "Warning",
            Status::Discard => "Discard",
            Status::Error => "Error",
            Status::Fatal => "Fatal",
            Status::Pending => "Pending",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of slave status a co-simulation master may query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Outcome of an asynchronously running step.
    DoStep,
    /// Whether an asynchronous step is still pending.
    Pending,
    /// Last simulation time reached by a discarded step.
    LastSuccessfulTime,
    /// Whether the slave requested termination during a step.
    Terminated,
}

impl StatusKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::DoStep => "DoStepStatus",
            StatusKind::Pending => "PendingStatus",
            StatusKind::LastSuccessfulTime => "LastSuccessfulTime",
            StatusKind::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
