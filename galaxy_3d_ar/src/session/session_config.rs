/// Configuration of an AR placement session.

use crate::error::{Error, Result};
use crate::scene::{ModelConfig, ReticleConfig};
use crate::xr::SessionFeatures;

/// AR placement session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Features the session cannot run without
    pub required_features: SessionFeatures,
    /// Features used when the platform offers them
    pub optional_features: SessionFeatures,
    /// Controller whose select events commit placements
    pub controller_index: usize,
    /// Reticle ring geometry
    pub reticle: ReticleConfig,
    /// Transform applied to the loaded asset inside the template
    pub model: ModelConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            required_features: SessionFeatures::HIT_TEST,
            optional_features: SessionFeatures::empty(),
            controller_index: 0,
            reticle: ReticleConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Check the configuration for values the placement core cannot use
    pub fn validate(&self) -> Result<()> {
        if !self.required_features.contains(SessionFeatures::HIT_TEST) {
            return Err(Error::InvalidConfig(
                "required_features must include HIT_TEST".to_string(),
            ));
        }
        let reticle = &self.reticle;
        if !(reticle.inner_radius > 0.0 && reticle.outer_radius > reticle.inner_radius) {
            return Err(Error::InvalidConfig(format!(
                "reticle radii must satisfy 0 < inner < outer (got {} / {})",
                reticle.inner_radius, reticle.outer_radius
            )));
        }
        if reticle.segments < 3 {
            return Err(Error::InvalidConfig(format!(
                "reticle needs at least 3 segments (got {})",
                reticle.segments
            )));
        }
        if !(self.model.base_scale.is_finite() && self.model.base_scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "model base_scale must be positive (got {})",
                self.model.base_scale
            )));
        }
        Ok(())
    }

    /// True when a platform offering `platform_features` can run this session
    pub fn is_session_supported(&self, platform_features: SessionFeatures) -> bool {
        platform_features.contains(self.required_features)
    }

    /// Features to request: required plus the optional ones the platform offers
    pub fn negotiated_features(&self, platform_features: SessionFeatures) -> SessionFeatures {
        self.required_features | (self.optional_features & platform_features)
    }
}

#[cfg(test)]
#[path = "session_config_tests.rs"]
mod tests;
