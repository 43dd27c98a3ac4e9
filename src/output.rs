use std::fmt;

/// Packaging strategies recognized by the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Self-contained server bundle including only the runtime dependencies in use.
    Standalone,
    /// Fully static export with no server runtime.
    Export,
}

impl OutputMode {
    /// All recognized modes in order.
    pub const ALL: [OutputMode; 2] = [OutputMode::Standalone, OutputMode::Export];

    /// Wire name as written in the config file.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Standalone => "standalone",
            OutputMode::Export => "export",
        }
    }

    /// Parse a mode from its wire name. Wire names are exact lowercase matches.
    pub fn parse(name: &str) -> Option<OutputMode> {
        match name {
            "standalone" => Some(OutputMode::Standalone),
            "export" => Some(OutputMode::Export),
            _ => None,
        }
    }

    /// Quoted wire names of every recognized mode, for diagnostics.
    pub fn wire_names() -> String {
        OutputMode::ALL.map(|mode| format!("'{}'", mode.as_str())).join(", ")
    }

    /// Description of the packaging behavior this mode selects.
    pub fn description(&self) -> &'static str {
        match self {
            OutputMode::Standalone => {
                "Emit a minimal server bundle deployable without a dependency reinstall."
            }
            OutputMode::Export => "Emit static files only; no server process is produced.",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
