//! Tunable simulation parameters.
//!
//! One flat struct of scalars, owned by the frame loop and read once per
//! simulation pass when it is packed into the uniform buffer. Nothing holds
//! a reference across frames; the optional tuning panel (feature `egui`)
//! edits the struct through `&mut` access granted inside the frame tick.

/// Coherent-noise displacement parameters.
///
/// The reference configuration ships with amplitude 0 (noise disabled), but
/// the channel stays wired end to end so it can be raised live.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Displacement amplitude in world units.
    pub amplitude: f32,
    /// Spatial frequency of the noise field.
    pub frequency: f32,
    /// How fast the noise field drifts over time.
    pub speed: f32,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            amplitude: 0.0,
            frequency: 0.5,
            speed: 0.5,
        }
    }
}

/// All tunable scalars read by the simulation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Blend between the two target silhouettes, 0 = first, 1 = second.
    pub progress: f32,
    /// Maximum distance a particle may move toward its target per pass.
    pub max_speed: f32,
    /// Radius around the pointer within which particles are repelled.
    pub repel_radius: f32,
    /// Falloff exponent of the repulsion inside the radius.
    pub repel_pow: f32,
    /// Overall repulsion strength.
    pub repel_strength: f32,
    /// Positional noise displacement.
    pub noise: NoiseParams,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            progress: 0.0,
            max_speed: 0.05,
            repel_radius: 0.25,
            repel_pow: 5.0,
            repel_strength: 0.000001,
            noise: NoiseParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let params = SimulationParams::default();
        assert_eq!(params.progress, 0.0);
        assert_eq!(params.max_speed, 0.05);
        assert_eq!(params.repel_radius, 0.25);
        assert_eq!(params.repel_pow, 5.0);
        assert_eq!(params.repel_strength, 1e-6);
        assert_eq!(params.noise.amplitude, 0.0);
        assert_eq!(params.noise.frequency, 0.5);
        assert_eq!(params.noise.speed, 0.5);
    }
}
