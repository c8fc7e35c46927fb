//! Optional run configuration (§13: ambient, not named by spec.md). Mirrors
//! the teacher's `Project { world: World }` `Serialize`/`Deserialize`
//! struct, repurposed to hold `sat`-subcommand defaults so a long batch run
//! doesn't need to repeat the same flags on every invocation. Loaded by the
//! `sat` subcommand's `--config` flag; a flag explicitly passed on the
//! command line always overrides the corresponding config default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Default `-maxlevel` when a `sat` invocation doesn't pass one.
    pub max_level: usize,
    /// Default `-translations`/`-rotations` orientation subset.
    pub orientation_subset: OrientationSubset,
    /// Whether to run the isohedral shortcut before the SAT loop.
    pub isohedral_shortcut: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum OrientationSubset {
    #[default]
    All,
    TranslationsOnly,
    RotationsOnly,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig { max_level: 7, orientation_subset: OrientationSubset::All, isohedral_shortcut: false }
    }
}

impl RunConfig {
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = RunConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: RunConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.max_level, cfg.max_level);
    }
}
