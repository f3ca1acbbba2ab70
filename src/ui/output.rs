//! Output verbosity.

/// How much `setup` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, including per-file detail lines.
    Verbose,
    #[default]
    Normal,
    /// Spinners and status lines, no progress messages.
    Quiet,
    /// Errors only. Used for `--json` so stdout carries just the payload.
    Silent,
}

impl OutputMode {
    /// Resolve the global output flags. `--json` wins over `--quiet`, which
    /// wins over `--verbose`.
    pub fn from_flags(json: bool, quiet: bool, verbose: bool) -> Self {
        match (json, quiet, verbose) {
            (true, _, _) => Self::Silent,
            (false, true, _) => Self::Quiet,
            (false, false, true) => Self::Verbose,
            _ => Self::Normal,
        }
    }

    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Success, warning and summary lines.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
