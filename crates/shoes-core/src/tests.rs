//! Unit tests for shoes-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoBounds, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::DEMO_START;
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(37.0, 127.0);
        let b = GeoPoint::new(38.0, 127.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn one_slow_tick_of_drift_is_metres() {
        // 5 km/h → 5e-5 degrees of drift, split 0.8 / 1.2 between lat and lon.
        let a = GeoPoint::DEMO_START;
        let b = GeoPoint::new(a.lat + 4e-5, a.lon + 6e-5);
        let d = a.distance_m(b);
        assert!((6.0..8.0).contains(&d), "got {d}");
        assert!((d - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn demo_start_inside_demo_bounds() {
        assert!(GeoBounds::SEOUL_DEMO.contains(GeoPoint::DEMO_START));
        assert!(GeoBounds::default().is_valid());
    }

    #[test]
    fn clamp_each_axis_independently() {
        let b = GeoBounds::SEOUL_DEMO;
        let p = b.clamp(GeoPoint::new(40.0, 127.0));
        assert_eq!(p, GeoPoint::new(37.7, 127.0));
        let q = b.clamp(GeoPoint::new(37.5, 100.0));
        assert_eq!(q, GeoPoint::new(37.5, 126.9));
    }

    #[test]
    fn inverted_bounds_invalid() {
        assert!(!GeoBounds::new(37.7, 37.4, 126.9, 127.2).is_valid());
        assert!(!GeoBounds::new(f64::NAN, 37.7, 126.9, 127.2).is_valid());
    }

    #[test]
    fn display_four_decimals() {
        assert_eq!(GeoPoint::DEMO_START.to_string(), "37.5514°, 127.0748°");
    }
}

#[cfg(test)]
mod time {
    use crate::{ShoesError, SimClock, SimConfig, SimTime, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(7).to_string(), "T7");
        assert_eq!(Tick::ZERO, Tick::default());
    }

    #[test]
    fn sim_time_from_secs() {
        assert_eq!(SimTime::from_secs_f64(1.5).unwrap(), SimTime(1_500));
        assert_eq!(SimTime::from_secs_f64(0.0).unwrap(), SimTime::ZERO);
        assert_eq!(SimTime(12_345).as_secs_f64(), 12.345);
    }

    #[test]
    fn sim_time_rejects_bad_input() {
        for bad in [-0.001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            assert!(
                matches!(SimTime::from_secs_f64(bad), Err(ShoesError::InvalidArgument(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn sim_time_display() {
        assert_eq!(SimTime(8_250).to_string(), "8.250s");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(SimTime(1_000), 500);
        assert_eq!(clock.elapsed_ms(), 0);
        assert_eq!(clock.current_time(), SimTime(1_000));
        clock.advance();
        assert_eq!(clock.elapsed_ms(), 500);
        clock.advance();
        assert_eq!(clock.current_time(), SimTime(2_000));
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.slow_every(), 4);
        assert_eq!(cfg.end_tick(), Tick(192));
    }

    #[test]
    fn config_rejects_misaligned_cadences() {
        let cfg = SimConfig { slow_interval_ms: 1_250, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(ShoesError::Config(_))));

        let cfg = SimConfig { fast_interval_ms: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());

        let cfg = SimConfig { slow_interval_ms: 0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.jitter(10.0), r2.jitter(10.0));
            assert_eq!(r1.gen_range(0..1_000u32), r2.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<u32> = (0..8).map(|_| r1.gen_range(0..u32::MAX)).collect();
        let b: Vec<u32> = (0..8).map(|_| r2.gen_range(0..u32::MAX)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn jitter_within_half_amplitude() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let j = rng.jitter(8.0);
            assert!((-4.0..4.0).contains(&j), "got {j}");
        }
        assert_eq!(rng.jitter(0.0), 0.0);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // out-of-range probabilities are clamped rather than panicking
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }
}
