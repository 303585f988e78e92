/// Floating point type used throughout the system
pub type Real = f64;

/// Bottom of the simulated level scale.
pub const LEVEL_FLOOR: Real = 0.0;

/// Top of the simulated level scale.
pub const LEVEL_CEIL: Real = 100.0;

/// Clamp a water level onto the simulated scale.
pub fn clamp_level(level: Real) -> Real {
    level.clamp(LEVEL_FLOOR, LEVEL_CEIL)
}

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_level_passes_through_in_range() {
        assert_eq!(clamp_level(42.5), 42.5);
        assert_eq!(clamp_level(0.0), 0.0);
        assert_eq!(clamp_level(100.0), 100.0);
    }

    #[test]
    fn clamp_level_bounds() {
        assert_eq!(clamp_level(-7.3), LEVEL_FLOOR);
        assert_eq!(clamp_level(180.0), LEVEL_CEIL);
    }

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances::default();
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }
}
