//! Named rule presets.
//!
//! A curated table of survive/spawn rules with seeding parameters that
//! produce recognizable behaviors. Rule strings go through the permissive
//! parser, same as host-typed input.

use crate::config::{Boundary, FillShape, SimConfig};
use crate::error::ConfigError;
use crate::rule::RuleSet;

/// A named rule/seeding combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Display name.
    pub name: &'static str,
    /// Seeding region shape.
    pub fill_shape: FillShape,
    /// Seeding region diameter, in cells.
    pub fill_diameter: f32,
    /// Probability that a seeded cell starts alive.
    pub fill_probability: f32,
    /// Neighbor adjacency the rules were designed for.
    pub neighborhood: crate::Neighborhood,
    /// Number of vitality states.
    pub states: u8,
    /// Survive rule text.
    pub survive: &'static str,
    /// Spawn rule text.
    pub spawn: &'static str,
}

impl Preset {
    /// Builds a validated configuration from this preset.
    pub fn config(&self, dimension: usize, boundary: Boundary) -> Result<SimConfig, ConfigError> {
        let config = SimConfig {
            dimension,
            boundary,
            neighborhood: self.neighborhood,
            states: self.states,
            survive: RuleSet::parse(self.survive),
            spawn: RuleSet::parse(self.spawn),
            fill_shape: self.fill_shape,
            fill_diameter: self.fill_diameter,
            fill_probability: self.fill_probability,
        };
        config.validate()?;
        Ok(config)
    }

    /// Looks a preset up by name.
    pub fn find(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name == name)
    }
}

macro_rules! preset {
    ($name:literal, $shape:ident, $diameter:literal, $probability:literal,
     $mode:ident, $states:literal, $survive:literal, $spawn:literal) => {
        Preset {
            name: $name,
            fill_shape: FillShape::$shape,
            fill_diameter: $diameter,
            fill_probability: $probability,
            neighborhood: crate::Neighborhood::$mode,
            states: $states,
            survive: $survive,
            spawn: $spawn,
        }
    };
}

/// The built-in preset table.
pub const PRESETS: &[Preset] = &[
    preset!("Rhombus", Cube, 2.0, 1.0, Moore, 4, "", "4"),
    preset!("Cubeception", Cube, 2.0, 1.0, Moore, 5, "", "1"),
    preset!("445", Cube, 25.0, 0.09, Moore, 5, "4", "4"),
    preset!("Amoeba 1", Cube, 10.0, 0.3, Moore, 16, "9-26", "5-7,12-13,15"),
    preset!("Amoeba 2", Cube, 10.0, 0.3, Moore, 5, "9-26", "5-7,12-13,15"),
    preset!("Crystal Growth 1", Cube, 3.0, 1.0, VonNeumann, 2, "0-6", "1,3"),
    preset!("Crystal Growth 2", Cube, 3.0, 1.0, VonNeumann, 5, "1-3", "1-3"),
    preset!("Crystal Growth 3", Cube, 10.0, 0.3, VonNeumann, 5, "1,2", "1,3"),
    preset!("3D Brain", Cube, 14.0, 0.33, Moore, 2, "", "4"),
    preset!("Builder", Cube, 13.0, 0.47, Moore, 10, "2,6,9", "4,6,8,9"),
    preset!("Clouds 1", Cube, 100.0, 0.5, Moore, 2, "13-26", "13,14,17-19"),
    preset!("Clouds 2", Cube, 100.0, 0.5, Moore, 2, "12-26", "13,14"),
    preset!("Construction", Cube, 10.0, 0.3, Moore, 2, "0-2,4,6-11,13-17,21-26", "9-10,16,23-24"),
    preset!("Coral", Cube, 6.0, 0.26, Moore, 4, "5-8", "6,7,9,12"),
    preset!("More Structures", Cube, 19.0, 0.42, Moore, 4, "7-26", "4"),
    preset!("Pyroclastic", Cube, 10.0, 0.3, Moore, 10, "4-7", "6-8"),
    preset!("Spiky Growth", Cube, 14.0, 0.32, Moore, 10, "7-26", "4,12-13,15"),
    preset!("678", Cube, 8.0, 0.32, Moore, 3, "6-8", "6-8"),
    preset!("Slow Decay 1", Cube, 100.0, 0.45, Moore, 5, "1,4,8,11,13-26", "13-26"),
    preset!("Slow Decay 2", Cube, 100.0, 0.4, Moore, 3, "13-26", "10-26"),
    preset!("Ripple Cube", Cube, 28.0, 0.35, Moore, 10, "8-26", "4,12-13,5"),
];

/// The suggested starting preset ("Amoeba 1").
pub const DEFAULT_PRESET: &Preset = &PRESETS[3];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Simulation;

    #[test]
    fn test_all_presets_build_valid_configs() {
        for preset in PRESETS {
            let config = preset
                .config(30, Boundary::Wrap)
                .unwrap_or_else(|e| panic!("preset {:?}: {e}", preset.name));
            assert_eq!(config.states, preset.states);
        }
    }

    #[test]
    fn test_find_by_name() {
        let preset = Preset::find("445").unwrap();
        assert_eq!(preset.states, 5);
        assert_eq!(preset.survive, "4");
        assert!(Preset::find("no such preset").is_none());
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(DEFAULT_PRESET.name, "Amoeba 1");
    }

    #[test]
    fn test_preset_rules_parse_as_expected() {
        let preset = Preset::find("Pyroclastic").unwrap();
        let config = preset.config(20, Boundary::Wrap).unwrap();
        assert_eq!(config.survive, RuleSet::from_counts(&[4, 5, 6, 7]));
        assert_eq!(config.spawn, RuleSet::from_counts(&[6, 7, 8]));
    }

    #[test]
    fn test_preset_runs() {
        let config = Preset::find("445").unwrap().config(20, Boundary::Wrap).unwrap();
        let mut sim = Simulation::new(config, 12345).unwrap();
        sim.steps(5);
        assert_eq!(sim.generation(), 5);
    }
}
