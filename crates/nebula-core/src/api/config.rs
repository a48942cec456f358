use serde::{Deserialize, Serialize};

/// Simulation configuration, provided by the host at init time.
///
/// Every field has a sensible default so a host can pass a partial JSON
/// document (or none at all) and only override what it cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Viewport width in canvas units.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Viewport height in canvas units.
    #[serde(default = "default_height")]
    pub height: f32,
    /// Height of the reserved top band: spawns are rejected there and the
    /// pointer field is inactive while the pointer hovers it.
    #[serde(default = "default_header_height")]
    pub header_height: f32,
    /// Hard cap on live bodies. Spawn pressure beyond the cap evicts the
    /// oldest pointer-spawned system instead of growing without bound.
    #[serde(default = "default_max_bodies")]
    pub max_bodies: usize,
    /// Seed for the deterministic RNG (spawn rolls, capture rolls, starfield).
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Fixed simulation timestep in seconds (default: 1/60).
    #[serde(default = "default_fixed_dt")]
    pub fixed_dt: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    720.0
}

fn default_header_height() -> f32 {
    64.0
}

fn default_max_bodies() -> usize {
    256
}

fn default_seed() -> u64 {
    42
}

fn default_fixed_dt() -> f32 {
    1.0 / 60.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            header_height: default_header_height(),
            max_bodies: default_max_bodies(),
            seed: default_seed(),
            fixed_dt: default_fixed_dt(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = SimConfig::default();
        assert!(cfg.width > 0.0);
        assert!(cfg.height > 0.0);
        assert!(cfg.header_height < cfg.height);
        assert!(cfg.max_bodies > 0);
        assert!((cfg.fixed_dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn parse_partial_json_fills_defaults() {
        let cfg = SimConfig::from_json(r#"{ "width": 1920.0, "height": 1080.0 }"#).unwrap();
        assert_eq!(cfg.width, 1920.0);
        assert_eq!(cfg.height, 1080.0);
        assert_eq!(cfg.max_bodies, default_max_bodies());
        assert_eq!(cfg.seed, default_seed());
    }

    #[test]
    fn parse_full_json() {
        let cfg = SimConfig::from_json(
            r#"{
                "width": 800.0,
                "height": 600.0,
                "header_height": 48.0,
                "max_bodies": 128,
                "seed": 7,
                "fixed_dt": 0.0166667
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.header_height, 48.0);
        assert_eq!(cfg.max_bodies, 128);
        assert_eq!(cfg.seed, 7);
    }

    #[test]
    fn reject_malformed_json() {
        assert!(SimConfig::from_json("{ width: oops").is_err());
    }
}
