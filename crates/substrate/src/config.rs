//! Run configuration.
//!
//! This module defines the configuration structures that parameterize a
//! run. It provides:
//! 1. **Defaults:** The baseline memory map and harness constants.
//! 2. **Structures:** Hierarchical sections for the system, the reset
//!    state, and harness behavior.
//! 3. **Loading:** JSON deserialization, with every field optional.
//!
//! ```
//! use skiff_core::Config;
//!
//! let config: Config =
//!     serde_json::from_str(r#"{ "system": { "ram_size": 65536 } }"#).unwrap();
//! assert_eq!(config.system.ram_size, 65536);
//! assert_eq!(config.system.ram_base, 0x8000_0000);
//! ```

use crate::common::constants::GPR_COUNT;
use crate::common::data::MarchBits;
use crate::common::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Baseline constants used when a field is absent from the config.
mod defaults {
    /// Base address of main system RAM (2 GiB).
    ///
    /// The physical address where the mapped window begins; also the
    /// conventional reset vector for bare-metal RISC-V images.
    pub const RAM_BASE: u64 = 0x8000_0000;

    /// Total size of main system RAM (128 MiB).
    ///
    /// Accesses outside `RAM_BASE..RAM_BASE + RAM_SIZE` fault.
    pub const RAM_SIZE: usize = 128 * 1024 * 1024;

    /// Consecutive same-PC steps treated as the end of a run.
    ///
    /// Bare-metal images conventionally finish in a tight spin loop;
    /// fifty repeats is well past any legitimate dwell at one address.
    pub const MAX_SAME_INSTRUCTION: u64 = 50;
}

/// Root configuration for a run.
///
/// Deserialized from JSON (see [`Config::from_file`]) or built with
/// `Config::default()`; every section and field falls back to its default
/// when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Memory map configuration.
    #[serde(default)]
    pub system: SystemConfig,

    /// Architectural reset state.
    #[serde(default)]
    pub reset: ResetConfig,

    /// Harness run-control knobs.
    #[serde(default)]
    pub harness: HarnessConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration JSON.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Memory map configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Main RAM base address
    #[serde(default = "SystemConfig::default_ram_base")]
    pub ram_base: MarchBits,

    /// Main RAM size in bytes
    #[serde(default = "SystemConfig::default_ram_size")]
    pub ram_size: usize,
}

impl SystemConfig {
    fn default_ram_base() -> MarchBits {
        defaults::RAM_BASE
    }

    fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

/// Architectural reset state installed by model init.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetConfig {
    /// Reset program counter
    #[serde(default = "ResetConfig::default_pc")]
    pub pc: MarchBits,

    /// Reset value for each GPR, `x0` through `x31`
    #[serde(default = "ResetConfig::default_xregs")]
    pub xregs: [MarchBits; GPR_COUNT],
}

impl ResetConfig {
    fn default_pc() -> MarchBits {
        defaults::RAM_BASE
    }

    fn default_xregs() -> [MarchBits; GPR_COUNT] {
        [0; GPR_COUNT]
    }
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            pc: defaults::RAM_BASE,
            xregs: [0; GPR_COUNT],
        }
    }
}

/// Harness run-control configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HarnessConfig {
    /// Consecutive same-PC steps reported as a stall (0 disables)
    #[serde(default = "HarnessConfig::default_max_same_instruction")]
    pub max_same_instruction: u64,

    /// Watched store that signals program exit
    #[serde(default)]
    pub exit: Option<ExitPattern>,
}

impl HarnessConfig {
    fn default_max_same_instruction() -> u64 {
        defaults::MAX_SAME_INSTRUCTION
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            max_same_instruction: defaults::MAX_SAME_INSTRUCTION,
            exit: None,
        }
    }
}

/// A store the harness watches for as the program's exit signal.
///
/// When the model stores `data` (zero-extended for narrow widths) to
/// `address`, the run reports `Exited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExitPattern {
    /// Watched physical address
    pub address: MarchBits,

    /// Value whose store signals exit
    pub data: MarchBits,
}
