mod tests {
    use myrtio_strip_animator::{
        AnimationState, AnimationTimer, Animator, AnimatorError, Easing, Rgbw, SharedState,
        effect::{FadeAllEffect, HueRotateEffect, MovingPixelEffect, PaintStyle},
    };

    #[test]
    fn test_timer_completes_once_per_cycle() {
        let mut timer = AnimationTimer::new(3);
        assert_eq!(timer.progress(), 0.0);

        assert_eq!(timer.advance(1), AnimationState::Running);
        assert!((timer.progress() - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(timer.advance(1), AnimationState::Running);
        assert_eq!(timer.advance(1), AnimationState::Completed);
        assert_eq!(timer.progress(), 1.0);

        timer.restart();
        assert_eq!(timer.elapsed(), 0);
        assert_eq!(timer.advance(1), AnimationState::Running);
    }

    #[test]
    fn test_timer_clamps_large_steps() {
        let mut timer = AnimationTimer::new(10);
        assert_eq!(timer.advance(25), AnimationState::Completed);
        assert_eq!(timer.elapsed(), 10);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_clock_is_monotonic_within_cycle() {
        let mut leds = [Rgbw::BLACK; 8];
        let mut animator = Animator::<1>::default();
        animator.add(7, HueRotateEffect::default()).unwrap();

        let mut previous = 0;
        for tick in 1..=70 {
            animator.update(&mut leds);
            let elapsed = animator.channel(0).unwrap().timer().elapsed();
            if tick % 7 == 0 {
                assert_eq!(elapsed, 0, "restart expected at tick {tick}");
            } else {
                assert!(elapsed > previous || previous == 0);
                assert_eq!(elapsed, tick % 7);
            }
            previous = elapsed;
        }
    }

    #[test]
    fn test_progress_reported_to_effect() {
        let mut leds = [Rgbw::BLACK; 8];
        let mut animator = Animator::<1>::default();
        animator.add(4, HueRotateEffect::default()).unwrap();

        let expected = [0.25, 0.5, 0.75];
        for progress in expected {
            animator.update(&mut leds);
            assert_eq!(animator.shared().base_hue, progress);
        }
        // Completion tick: progress 1.0 is reported, then the policy resets it
        animator.update(&mut leds);
        assert_eq!(animator.shared().base_hue, 0.0);
        assert!(animator.is_active(0));
    }

    #[test]
    fn test_channels_run_in_registration_order() {
        let sweep = MovingPixelEffect::new(Easing::Linear, PaintStyle::Hue);

        // Hue rotation after the sweep: the sweep sees the previous tick's hue
        let mut leds = [Rgbw::BLACK; 10];
        let mut animator = Animator::<2>::default();
        animator.add(100, sweep).unwrap();
        animator.add(10, HueRotateEffect::default()).unwrap();
        animator.update(&mut leds);
        assert_eq!(leds[0], PaintStyle::Hue.color_at(0, 10, 0.0));

        // Hue rotation first: the sweep sees this tick's hue
        let mut leds = [Rgbw::BLACK; 10];
        let mut animator = Animator::<2>::default();
        animator.add(10, HueRotateEffect::default()).unwrap();
        animator.add(100, sweep).unwrap();
        animator.update(&mut leds);
        assert_eq!(leds[0], PaintStyle::Hue.color_at(0, 10, 0.1));

        assert_ne!(
            PaintStyle::Hue.color_at(0, 10, 0.0),
            PaintStyle::Hue.color_at(0, 10, 0.1)
        );
    }

    #[test]
    fn test_add_rejects_bad_channels() {
        let mut animator = Animator::<1>::default();
        assert_eq!(
            animator.add(0, FadeAllEffect::default()),
            Err(AnimatorError::ZeroDuration)
        );
        assert_eq!(animator.add(5, FadeAllEffect::default()), Ok(0));
        assert_eq!(
            animator.add(5, FadeAllEffect::default()),
            Err(AnimatorError::CapacityExceeded)
        );
        assert_eq!(animator.len(), 1);
    }

    #[test]
    fn test_stop_and_restart() {
        let mut leds = [Rgbw::BLACK; 4];
        let mut animator = Animator::<1>::new(SharedState::default());
        animator.add(10, HueRotateEffect::default()).unwrap();

        animator.update(&mut leds);
        animator.stop(0).unwrap();
        assert!(!animator.is_animating());

        // Stopped channels are skipped
        animator.update(&mut leds);
        assert_eq!(animator.channel(0).unwrap().timer().elapsed(), 1);

        animator.restart(0).unwrap();
        animator.update(&mut leds);
        assert_eq!(animator.channel(0).unwrap().timer().elapsed(), 1);
        assert!(animator.is_animating());

        assert_eq!(animator.stop(3), Err(AnimatorError::UnknownChannel(3)));
        assert_eq!(animator.restart(3), Err(AnimatorError::UnknownChannel(3)));
        assert!(!animator.is_active(3));
    }

    #[test]
    fn test_stop_policy_freezes_channel() {
        let mut leds = [Rgbw::BLACK; 4];
        let mut animator = Animator::<2>::default();
        animator.add(3, HueRotateEffect::once()).unwrap();
        animator.add(2, FadeAllEffect::default()).unwrap();

        for _ in 0..3 {
            animator.update(&mut leds);
        }
        assert!(!animator.is_active(0));
        assert!(animator.is_active(1));
        assert_eq!(animator.shared().base_hue, 0.0);

        // The other channel keeps running
        animator.update(&mut leds);
        assert_eq!(animator.channel(1).unwrap().timer().elapsed(), 0);
        assert_eq!(animator.shared().base_hue, 0.0);
    }

    #[test]
    fn test_advance_by_several_ticks() {
        let mut leds = [Rgbw::BLACK; 4];
        let mut animator = Animator::<1>::default();
        animator.add(10, HueRotateEffect::default()).unwrap();

        animator.advance(4, &mut leds);
        assert_eq!(animator.shared().base_hue, 0.4);

        // Overshooting completes the cycle exactly once
        animator.advance(100, &mut leds);
        assert_eq!(animator.shared().base_hue, 0.0);
        assert_eq!(animator.channel(0).unwrap().timer().elapsed(), 0);
    }
}
