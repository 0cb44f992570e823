//! Hover capability detection
//!
//! A terminal counts as hover-capable when it reports pointer motion without a
//! button pressed. There is no reliable way to ask a terminal for that, so the
//! `auto` setting relies on a small heuristic and users can force either
//! answer from the config file or the command line.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use strum::Display;

pub trait HoverCapability {
    fn supports_hover(&self) -> bool;
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HoverSupport {
    #[default]
    Auto,
    Always,
    Never,
}

/// Terminals known to lack motion reporting.
const NO_MOTION_TERMS: [&str; 2] = ["dumb", "linux"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCapability {
    setting: HoverSupport,
    is_terminal: bool,
    term: Option<String>,
}

impl TerminalCapability {
    pub fn new(setting: HoverSupport, is_terminal: bool, term: Option<String>) -> Self {
        Self {
            setting,
            is_terminal,
            term,
        }
    }

    /// Inspects stdout and `$TERM` of the current process.
    pub fn detect(setting: HoverSupport) -> Self {
        Self::new(
            setting,
            std::io::stdout().is_terminal(),
            std::env::var("TERM").ok(),
        )
    }
}

impl HoverCapability for TerminalCapability {
    fn supports_hover(&self) -> bool {
        match self.setting {
            HoverSupport::Always => true,
            HoverSupport::Never => false,
            HoverSupport::Auto => {
                self.is_terminal
                    && self
                        .term
                        .as_deref()
                        .is_some_and(|term| !NO_MOTION_TERMS.contains(&term))
            }
        }
    }
}

/// Capability with a predetermined answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapability(pub bool);

impl HoverCapability for FixedCapability {
    fn supports_hover(&self) -> bool {
        self.0
    }
}
