//! Unit tests for cpa-core primitives.

#[cfg(test)]
mod vec {
    use crate::Vec2;

    #[test]
    fn dot_and_norm() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.norm_sq(), 25.0);
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn from_polar_axes() {
        let east = Vec2::from_polar(2.0, 0.0);
        assert!((east.x - 2.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);

        let north = Vec2::from_polar(1.0, std::f64::consts::FRAC_PI_2);
        assert!(north.x.abs() < 1e-12);
        assert!((north.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_polar_magnitude() {
        for theta in [0.3, 1.7, 4.4] {
            let v = Vec2::from_polar(1.5, theta);
            assert!((v.norm() - 1.5).abs() < 1e-12, "theta {theta}: {v}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "(1.000, -2.500)");
    }
}

#[cfg(test)]
mod vessel {
    use crate::{Vec2, VesselState};

    #[test]
    fn reference_is_origin_unit_x() {
        let r = VesselState::reference();
        assert_eq!(r.pos, Vec2::ZERO);
        assert_eq!(r.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn position_extrapolation() {
        let v = VesselState::new(Vec2::new(1.0, 1.0), Vec2::new(0.5, -1.0));
        assert_eq!(v.position_at(0.0), Vec2::new(1.0, 1.0));
        assert_eq!(v.position_at(2.0), Vec2::new(2.0, -1.0));
    }
}

#[cfg(test)]
mod rng {
    use crate::TrialRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrialRng::new(12345, 0);
        let mut r2 = TrialRng::new(12345, 0);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn adjacent_trials_differ() {
        let mut r0 = TrialRng::new(1, 0);
        let mut r1 = TrialRng::new(1, 1);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent trials should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = TrialRng::new(0, 0);
        for _ in 0..1000 {
            let v = rng.gen_range(-25.0f64..25.0);
            assert!((-25.0..25.0).contains(&v));
        }
    }
}
