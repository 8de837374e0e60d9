//! Scene and shot counts derived from duration and animation complexity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::AnimationComplexity;

/// Production units every later stage scales with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuantities {
    /// Duration in minutes, unrounded.
    pub minutes: f64,
    /// One scene per started minute.
    pub scenes: u32,
    /// Started shots at the complexity's cutting rate.
    pub shots: u32,
}

impl DerivedQuantities {
    /// Resolves scenes and shots.
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::engine::DerivedQuantities;
    /// use cgquote_core::AnimationComplexity;
    ///
    /// let derived = DerivedQuantities::resolve(90, AnimationComplexity::Physics);
    /// assert_eq!(derived.scenes, 2);  // ceil(1.5)
    /// assert_eq!(derived.shots, 11);  // ceil(1.5 × 7)
    /// ```
    pub fn resolve(duration_seconds: u32, complexity: AnimationComplexity) -> Self {
        let minutes = duration_seconds as f64 / 60.0;
        let scenes = (minutes * SCENES_PER_MINUTE).ceil() as u32;
        let shots = (minutes * shots_per_minute(complexity)).ceil() as u32;

        DerivedQuantities {
            minutes,
            scenes,
            shots,
        }
    }
}

const SCENES_PER_MINUTE: f64 = 1.0;

/// Cutting rate by complexity: busier animation means shorter shots.
pub fn shots_per_minute(complexity: AnimationComplexity) -> f64 {
    match complexity {
        AnimationComplexity::Camera => 4.0,
        AnimationComplexity::Exploded => 5.0,
        AnimationComplexity::Mechanical => 6.0,
        AnimationComplexity::Physics => 7.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_minute_camera() {
        let derived = DerivedQuantities::resolve(60, AnimationComplexity::Camera);
        assert_eq!(derived.scenes, 1);
        assert_eq!(derived.shots, 4);
    }

    #[test]
    fn test_partial_minutes_round_up() {
        let derived = DerivedQuantities::resolve(15, AnimationComplexity::Physics);
        assert!((derived.minutes - 0.25).abs() < 1e-12);
        assert_eq!(derived.scenes, 1);
        assert_eq!(derived.shots, 2); // ceil(1.75)

        let derived = DerivedQuantities::resolve(75, AnimationComplexity::Exploded);
        assert_eq!(derived.scenes, 2);
        assert_eq!(derived.shots, 7); // ceil(6.25)
    }

    #[test]
    fn test_exact_multiples_do_not_round_up() {
        let derived = DerivedQuantities::resolve(45, AnimationComplexity::Camera);
        assert_eq!(derived.shots, 3);

        let derived = DerivedQuantities::resolve(600, AnimationComplexity::Mechanical);
        assert_eq!(derived.scenes, 10);
        assert_eq!(derived.shots, 60);
    }

    #[test]
    fn test_shots_grow_with_complexity() {
        let counts: Vec<u32> = AnimationComplexity::ALL
            .iter()
            .map(|c| DerivedQuantities::resolve(120, *c).shots)
            .collect();
        assert_eq!(counts, vec![8, 10, 12, 14]);
    }
}
