mod tests {
    use myrtio_strip_animator::Easing;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_named_curves_pin_endpoints() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{}", easing.as_str());
            assert_eq!(easing.apply(1.0), 1.0, "{}", easing.as_str());
        }
    }

    #[test]
    fn test_named_curves_stay_in_range_and_rise() {
        for easing in Easing::ALL {
            let mut previous = 0.0;
            for step in 0..=1000 {
                let eased = easing.apply(step as f32 / 1000.0);
                assert!(
                    (-EPSILON..=1.0 + EPSILON).contains(&eased),
                    "{} out of range: {eased}",
                    easing.as_str()
                );
                assert!(
                    eased + EPSILON >= previous,
                    "{} fell at step {step}",
                    easing.as_str()
                );
                previous = eased;
            }
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_close(Easing::Linear.apply(0.25), 0.25);
        assert_close(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_power_curves() {
        assert_close(Easing::QuadraticIn.apply(0.5), 0.25);
        assert_close(Easing::QuadraticOut.apply(0.5), 0.75);
        assert_close(Easing::CubicInOut.apply(0.25), 0.0625);
        assert_close(Easing::QuinticIn.apply(0.5), 0.03125);
    }

    #[test]
    fn test_symmetric_curves_meet_in_the_middle() {
        let symmetric = [
            Easing::QuadraticInOut,
            Easing::CubicInOut,
            Easing::QuarticInOut,
            Easing::QuinticInOut,
            Easing::SinusoidalInOut,
            Easing::ExponentialInOut,
            Easing::CircularInOut,
            Easing::QuadraticCenter,
            Easing::SinusoidalCenter,
            Easing::ExponentialCenter,
            Easing::CircularCenter,
        ];
        for easing in symmetric {
            assert_close(easing.apply(0.5), 0.5);
        }
    }

    #[test]
    fn test_center_is_fast_at_the_ends() {
        assert!(Easing::CubicCenter.apply(0.1) > 0.1);
        assert!(Easing::CubicInOut.apply(0.1) < 0.1);
    }

    #[test]
    fn test_custom_curve_is_called_as_is() {
        let square = Easing::Custom(|p| p * p);
        assert_close(square.apply(0.5), 0.25);

        let constant = Easing::Custom(|_| 0.7);
        assert_close(constant.apply(1.0), 0.7);
        assert_eq!(constant.as_str(), "custom");
    }
}
