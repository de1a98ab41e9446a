/// How a history write is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HistoryMode {
    /// Overwrite the current entry (`history.replaceState`)
    #[default]
    Replace,
    /// Create a new entry (`history.pushState`)
    Push,
}

impl HistoryMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Push => "push",
        }
    }
}

impl core::fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Manager configuration, fixed for the lifetime of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Config {
    /// `true` overwrites the current history entry on every write,
    /// `false` pushes a new one. Defaults to `true`.
    pub reset: bool,
}

impl Config {
    pub const fn new() -> Self {
        Self { reset: true }
    }

    #[must_use]
    pub const fn reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub const fn history_mode(self) -> HistoryMode {
        if self.reset {
            HistoryMode::Replace
        } else {
            HistoryMode::Push
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl From<bool> for Config {
    fn from(reset: bool) -> Self {
        Self { reset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_replaces() {
        assert!(Config::default().reset);
        assert_eq!(Config::default().history_mode(), HistoryMode::Replace);
    }

    #[test]
    fn test_reset_false_pushes() {
        assert_eq!(Config::new().reset(false).history_mode(), HistoryMode::Push);
        assert_eq!(Config::from(false).history_mode(), HistoryMode::Push);
    }
}
