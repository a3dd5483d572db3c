//! Unit tests for shoes-sensor.

#[cfg(test)]
mod reading {
    use shoes_core::SimTime;

    use crate::{Direction, RawSignal, SensorReading, Zone};

    fn raw(left: f64, center: f64, right: f64, down: f64) -> RawSignal {
        RawSignal { left, center, right, down }
    }

    #[test]
    fn initial_values() {
        let r = SensorReading::initial();
        assert_eq!((r.left, r.center, r.right, r.down), (400, 400, 400, 100));
        assert_eq!(r.timestamp, SimTime::ZERO);
    }

    #[test]
    fn from_raw_clamps_each_channel() {
        let r = SensorReading::from_raw(raw(5.0, 999.0, -40.0, 300.0), SimTime(10));
        assert_eq!(r.left, 20);
        assert_eq!(r.center, 400);
        assert_eq!(r.right, 20);
        assert_eq!(r.down, 150);

        let r = SensorReading::from_raw(raw(100.0, 100.0, 100.0, 10.0), SimTime(10));
        assert_eq!(r.down, 50);
    }

    #[test]
    fn from_raw_rounds_to_nearest() {
        let r = SensorReading::from_raw(raw(60.4, 60.5, 60.6, 99.49), SimTime(0));
        assert_eq!((r.left, r.center, r.right, r.down), (60, 61, 61, 99));
    }

    #[test]
    fn nan_collapses_to_lower_bound() {
        let r = SensorReading::from_raw(raw(f64::NAN, 200.0, 200.0, f64::NAN), SimTime(0));
        assert_eq!(r.left, 20);
        assert_eq!(r.down, 50);
    }

    #[test]
    fn closest_prefers_center_then_left() {
        let r = SensorReading::from_raw(raw(80.0, 80.0, 80.0, 100.0), SimTime(0));
        assert_eq!(r.closest(), (Direction::Center, 80));

        let r = SensorReading::from_raw(raw(70.0, 90.0, 70.0, 100.0), SimTime(0));
        assert_eq!(r.closest(), (Direction::Left, 70));

        let r = SensorReading::from_raw(raw(300.0, 250.0, 45.0, 100.0), SimTime(0));
        assert_eq!(r.closest(), (Direction::Right, 45));
        assert_eq!(r.min_horizontal(), 45);
    }

    #[test]
    fn per_direction_zone() {
        let r = SensorReading::from_raw(raw(25.0, 60.0, 120.0, 100.0), SimTime(0));
        assert_eq!(r.zone(Direction::Left), Zone::Critical);
        assert_eq!(r.zone(Direction::Center), Zone::Alert);
        assert_eq!(r.zone(Direction::Right), Zone::Warning);
        assert_eq!(r.zone(Direction::Down), Zone::Warning);
        assert_eq!(r.distance(Direction::Down), 100);
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Center.to_string(), "center");
        assert_eq!(Direction::ALL.len(), 4);
    }
}

#[cfg(test)]
mod zone {
    use crate::Zone;

    #[test]
    fn tier_boundaries_are_exclusive_upper_bounds() {
        assert_eq!(Zone::classify(0.0), Zone::Critical);
        assert_eq!(Zone::classify(29.9), Zone::Critical);
        assert_eq!(Zone::classify(30.0), Zone::Alert);
        assert_eq!(Zone::classify(79.0), Zone::Alert);
        assert_eq!(Zone::classify(80.0), Zone::Warning);
        assert_eq!(Zone::classify(149.0), Zone::Warning);
        assert_eq!(Zone::classify(150.0), Zone::Clear);
        assert_eq!(Zone::classify(400.0), Zone::Clear);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut prev = Zone::classify(0.0);
        for d in 1..=500 {
            let z = Zone::classify(d as f64);
            assert!(z >= prev, "zone got more severe going from {} to {d} cm", d - 1);
            prev = z;
        }
    }

    #[test]
    fn severity_ordering() {
        assert!(Zone::Critical < Zone::Alert);
        assert!(Zone::Alert < Zone::Warning);
        assert!(Zone::Warning < Zone::Clear);
        assert!(Zone::Critical.is_hazard());
        assert!(Zone::Alert.is_hazard());
        assert!(!Zone::Warning.is_hazard());
    }

    #[test]
    fn labels() {
        assert_eq!(Zone::Critical.to_string(), "CRIT");
        assert_eq!(Zone::Alert.label(), "ALERT");
        assert_eq!(Zone::Warning.label(), "WARN");
        assert_eq!(Zone::Clear.label(), "CLEAR");
    }
}

#[cfg(test)]
mod scenario {
    use shoes_core::{SimRng, SimTime};

    use crate::scenario::CYCLE_SECS;
    use crate::{Scenario, SensorReading};

    fn sample(now: SimTime, rng: &mut SimRng) -> SensorReading {
        let s = Scenario::at(now);
        let raw = s.raw_signal(now.as_secs_f64(), Scenario::progress(now), rng);
        SensorReading::from_raw(raw, now)
    }

    #[test]
    fn windows_follow_cycle_order() {
        for (i, expected) in Scenario::ALL.iter().enumerate() {
            let start = SimTime(i as u64 * 8_000);
            assert_eq!(Scenario::at(start), *expected);
            assert_eq!(Scenario::at(start.offset_ms(7_999)), *expected);
            assert_eq!(expected.index(), i);
        }
        assert_eq!(Scenario::at(SimTime(48_000)), Scenario::NarrowHallway);
    }

    #[test]
    fn period_is_48_seconds() {
        for ms in (0..200_000u64).step_by(137) {
            let t = SimTime(ms);
            assert_eq!(Scenario::at(t), Scenario::at(t.offset_ms(CYCLE_SECS * 1_000)));
        }
    }

    #[test]
    fn progress_in_unit_interval() {
        assert_eq!(Scenario::progress(SimTime(8_000)), 0.0);
        assert_eq!(Scenario::progress(SimTime(12_000)), 0.5);
        for ms in (0..100_000u64).step_by(251) {
            let p = Scenario::progress(SimTime(ms));
            assert!((0.0..1.0).contains(&p));
        }
    }

    #[test]
    fn readings_always_in_range() {
        let mut rng = SimRng::new(99);
        for ms in (0..300_000u64).step_by(50) {
            let r = sample(SimTime(ms), &mut rng);
            for d in [r.left, r.center, r.right] {
                assert!((20..=400).contains(&d), "horizontal {d} at {ms} ms");
            }
            assert!((50..=150).contains(&r.down), "down {} at {ms} ms", r.down);
        }
    }

    #[test]
    fn approaching_obstacle_center_closes_in() {
        let mut rng = SimRng::new(1);
        let start = sample(SimTime(8_000), &mut rng);
        let mid = sample(SimTime(12_000), &mut rng);
        assert_eq!(Scenario::at(SimTime(12_000)), Scenario::ApproachingObstacle);
        assert_eq!(start.center, 300);
        assert_eq!(mid.center, 165);
        assert!(mid.center < start.center);

        // Floor of 25 cm just before the window ends.
        let late = sample(SimTime(15_999), &mut rng);
        assert!(late.center >= 25 && late.center < 35, "got {}", late.center);
    }

    #[test]
    fn open_space_is_clear() {
        let mut rng = SimRng::new(5);
        let mut sum = 0.0;
        let mut n = 0.0;
        for cycle in 0..10u64 {
            for ms in (32_000..40_000u64).step_by(100) {
                let r = sample(SimTime(cycle * 48_000 + ms), &mut rng);
                sum += (r.left + r.center + r.right) as f64 / 3.0;
                n += 1.0;
            }
        }
        assert!(sum / n > 350.0, "mean {}", sum / n);
    }

    #[test]
    fn hallway_has_walls_both_sides() {
        let mut rng = SimRng::new(3);
        for ms in (0..8_000u64).step_by(100) {
            let r = sample(SimTime(ms), &mut rng);
            assert!((50..=70).contains(&r.left), "left {}", r.left);
            assert!((55..=75).contains(&r.right), "right {}", r.right);
            assert!(r.center > 240, "center {}", r.center);
        }
    }

    #[test]
    fn turning_left_sees_left_wall() {
        let mut rng = SimRng::new(4);
        for ms in (16_000..24_000u64).step_by(100) {
            let r = sample(SimTime(ms), &mut rng);
            assert!(r.left < r.right, "left {} right {}", r.left, r.right);
        }
    }

    #[test]
    fn turning_right_sees_right_wall() {
        let mut rng = SimRng::new(4);
        for ms in (24_000..32_000u64).step_by(100) {
            let r = sample(SimTime(ms), &mut rng);
            assert!(r.right < r.left, "left {} right {}", r.left, r.right);
        }
    }

    #[test]
    fn same_seed_same_signal() {
        let mut a = SimRng::new(11);
        let mut b = SimRng::new(11);
        for ms in (0..48_000u64).step_by(500) {
            assert_eq!(sample(SimTime(ms), &mut a), sample(SimTime(ms), &mut b));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Scenario::TurningLeft.to_string(), "Turning Left Corner");
        assert_eq!(Scenario::from_index(11), Scenario::NavigatingObjects);
    }
}

#[cfg(test)]
mod history {
    use shoes_core::SimTime;

    use crate::{HistoryBuffer, RawSignal, SensorReading};

    fn reading(ms: u64) -> SensorReading {
        let raw = RawSignal { left: 100.0, center: 200.0, right: 300.0, down: 100.0 };
        SensorReading::from_raw(raw, SimTime(ms))
    }

    #[test]
    fn grows_until_capacity() {
        let mut h = HistoryBuffer::new(20);
        assert!(h.is_empty());
        for i in 0..20 {
            assert_eq!(h.push(reading(i)), None);
        }
        assert_eq!(h.len(), 20);
        assert!(h.is_full());
    }

    #[test]
    fn evicts_oldest_one_at_a_time() {
        let mut h = HistoryBuffer::default();
        for i in 0..20 {
            h.push(reading(i));
        }
        let evicted = h.push(reading(20));
        assert_eq!(evicted.map(|r| r.timestamp), Some(SimTime(0)));
        assert_eq!(h.len(), 20);
    }

    #[test]
    fn keeps_most_recent_in_insertion_order() {
        let mut h = HistoryBuffer::new(20);
        for i in 0..57 {
            h.push(reading(i));
            assert!(h.len() <= 20);
        }
        let stamps: Vec<u64> = h.iter().map(|r| r.timestamp.0).collect();
        assert_eq!(stamps, (37..57).collect::<Vec<_>>());
        assert_eq!(h.latest().map(|r| r.timestamp), Some(SimTime(56)));
        assert_eq!(h.to_vec().len(), 20);
    }

    #[test]
    fn zero_capacity_raised_to_one() {
        let mut h = HistoryBuffer::new(0);
        h.push(reading(1));
        h.push(reading(2));
        assert_eq!(h.capacity(), 1);
        assert_eq!(h.len(), 1);
        h.clear();
        assert!(h.is_empty());
    }
}
