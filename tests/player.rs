mod tests {
    use myrtio_strip_animator::{
        AnimatorError, Duration, Instant, OutputDriver, Rgbw, StripPlayer, SweepConfig,
        SweepDirection,
    };

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: Vec<Rgbw>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, pixels: &[Rgbw]) {
            self.writes += 1;
            self.last = pixels.to_vec();
        }
    }

    #[test]
    fn test_frame_flushes_after_tick() {
        let animator = SweepConfig::rainbow().build::<3>().unwrap();
        let mut player =
            StripPlayer::<_, 125, 3>::new(animator, RecordingDriver::default()).unwrap();

        player.frame();

        assert_eq!(player.driver().writes, 1);
        assert_eq!(player.driver().last.as_slice(), player.pixels().as_slice());
        assert_eq!(player.driver().last[0], Rgbw::new(153, 0, 0, 0));
        assert!(player.driver().last[1..].iter().all(|pixel| pixel.is_black()));
    }

    #[test]
    fn test_rainbow_preset_runs() {
        let animator = SweepConfig::rainbow().build::<3>().unwrap();
        let mut player =
            StripPlayer::<_, 125, 3>::new(animator, RecordingDriver::default()).unwrap();

        for _ in 0..300 {
            player.frame();
        }
        assert_eq!(player.driver().writes, 300);
        assert_eq!(player.animator().shared().direction, SweepDirection::Backward);
        assert_eq!(player.animator().shared().last_pixel, 124);
        assert!((player.animator().shared().base_hue - 0.03).abs() < 1e-6);
        assert!(!player.pixels().get(124).unwrap().is_black());
    }

    #[test]
    fn test_presets_channel_counts() {
        assert_eq!(SweepConfig::rainbow().channel_count(), 3);
        assert_eq!(SweepConfig::dot().channel_count(), 2);
        assert!(SweepConfig::dot().build::<2>().is_ok());
        assert_eq!(
            SweepConfig::rainbow().build::<2>().err(),
            Some(AnimatorError::CapacityExceeded)
        );
    }

    #[test]
    fn test_dot_preset_lights_white_channel() {
        let animator = SweepConfig::dot().build::<2>().unwrap();
        let mut player =
            StripPlayer::<_, 60, 2>::new(animator, RecordingDriver::default()).unwrap();

        player.frame();
        assert!(player.driver().last[0].w > 0);
    }

    #[test]
    fn test_empty_strip_is_rejected() {
        let animator = SweepConfig::dot().build::<2>().unwrap();
        let player = StripPlayer::<_, 0, 2>::new(animator, RecordingDriver::default());
        assert_eq!(player.err(), Some(AnimatorError::EmptyStrip));
    }

    #[test]
    fn test_free_running_never_sleeps() {
        let animator = SweepConfig::dot().build::<2>().unwrap();
        let mut player =
            StripPlayer::<_, 60, 2>::new(animator, RecordingDriver::default()).unwrap();

        let result = player.tick(Instant::from_millis(42));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(42));
        assert_eq!(player.driver().writes, 1);
    }

    #[test]
    fn test_paced_frames_with_drift_correction() {
        let animator = SweepConfig::dot().build::<2>().unwrap();
        let mut player = StripPlayer::<_, 60, 2>::with_frame_duration(
            animator,
            RecordingDriver::default(),
            Duration::from_millis(10),
        )
        .unwrap();

        let result = player.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = player.tick(Instant::from_millis(5));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // A long stall skips the backlog
        let result = player.tick(Instant::from_millis(100));
        assert_eq!(result.next_deadline, Instant::from_millis(110));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }
}
