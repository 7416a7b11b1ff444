use crate::Status;

/// Logging categories a master can enable individually.
///
/// Indices and names are fixed by the protocol; masters filter logs by these
/// exact names, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum LogCategory {
    /// Everything; enabling this enables every other category.
    All = 0,
    /// Errors and argument violations.
    Error = 1,
    /// One message per protocol call.
    Call = 2,
    /// State and time event activity.
    Event = 3,
}

impl LogCategory {
    /// Number of categories.
    pub const COUNT: usize = 4;

    /// All categories in index order.
    pub const ALL_CATEGORIES: [LogCategory; LogCategory::COUNT] = [
        LogCategory::All,
        LogCategory::Error,
        LogCategory::Call,
        LogCategory::Event,
    ];

    /// The fixed, externally visible name of this category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LogCategory::All => "logAll",
            LogCategory::Error => "logError",
            LogCategory::Call => "logFmiCall",
            LogCategory::Event => "logEvent",
        }
    }

    /// Looks a category up by its external name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL_CATEGORIES
            .into_iter()
            .find(|category| category.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-category logging gate for one slave instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogFilter {
    enabled: [bool; LogCategory::COUNT],
}

impl LogFilter {
    /// Sets every category flag at once.
    pub fn set_all(&mut self, on: bool) {
        self.enabled = [on; LogCategory::COUNT];
    }

    /// Sets a single category flag.
    pub fn set(&mut self, category: LogCategory, on: bool) {
        self.enabled[category.index()] = on;
    }

    /// A category is logged when its own flag or the `logAll` flag is set.
    #[must_use]
    pub fn is_logged(&self, category: LogCategory) -> bool {
        self.enabled[category.index()] || self.enabled[LogCategory::All.index()]
    }
}

/// Receives filtered protocol log messages.
///
/// The master supplies the sink at instantiation; the slave routes every
/// message that passes its [`LogFilter`] through it.
pub trait LogSink {
    fn message(&mut self, instance: &str, status: Status, category: LogCategory, message: &str);
}
