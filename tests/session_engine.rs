#[cfg(test)]
mod tests {
    use tempo::libs::error::Error;
    use tempo::libs::session::{SessionConfig, SessionEngine, SessionResult, SessionState};

    fn run_to_terminal(engine: &mut SessionEngine) -> u64 {
        engine.start();
        let mut ticks = 0u64;
        while !engine.is_terminal() {
            engine.tick();
            ticks += 1;
            assert!(ticks < 10_000_000, "engine failed to terminate");
        }
        ticks
    }

    #[test]
    fn test_completes_after_planned_duration() {
        let config = SessionConfig::new(2, None, None).unwrap();
        let mut engine = SessionEngine::new(config);

        let ticks = run_to_terminal(&mut engine);

        assert_eq!(engine.state(), SessionState::Completed);
        assert_eq!(ticks, 2 * 60);
        assert_eq!(
            engine.result(),
            SessionResult {
                completed: true,
                actual_minutes: 2
            }
        );
    }

    #[test]
    fn test_breaks_extend_wall_clock_time() {
        // 3 minutes of work with a 1 minute break every minute: breaks fire
        // after minute 1 and minute 2 but never at completion, so wall time
        // is (3 + 2 * 1) minutes.
        let config = SessionConfig::new(3, Some(1), Some(1)).unwrap();
        let mut engine = SessionEngine::new(config);

        let ticks = run_to_terminal(&mut engine);

        assert_eq!(engine.state(), SessionState::Completed);
        assert_eq!(engine.breaks_taken(), 2);
        assert_eq!(ticks, (3 + 2) * 60);
        assert_eq!(
            engine.result(),
            SessionResult {
                completed: true,
                actual_minutes: 3
            }
        );
    }

    #[test]
    fn test_break_suspends_work_countdown() {
        let config = SessionConfig::new(5, Some(1), Some(2)).unwrap();
        let mut engine = SessionEngine::new(config);
        engine.start();

        // One minute of work triggers the break.
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.state(), SessionState::OnBreak);
        let worked_at_break = engine.worked_minutes();

        // A minute into the two-minute break, work time has not moved.
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.state(), SessionState::OnBreak);
        assert_eq!(engine.worked_minutes(), worked_at_break);

        // Break drains, work resumes.
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.state(), SessionState::Working);
    }

    #[test]
    fn test_cancel_keeps_worked_minutes() {
        let config = SessionConfig::new(10, None, None).unwrap();
        let mut engine = SessionEngine::new(config);
        engine.start();

        // 3 minutes 30 seconds in, cancel: only whole minutes count.
        for _ in 0..(3 * 60 + 30) {
            engine.tick();
        }
        engine.cancel();

        assert_eq!(engine.state(), SessionState::Cancelled);
        assert_eq!(
            engine.result(),
            SessionResult {
                completed: false,
                actual_minutes: 3
            }
        );
    }

    #[test]
    fn test_cancel_mid_break_counts_work_up_to_break() {
        let config = SessionConfig::new(10, Some(2), Some(5)).unwrap();
        let mut engine = SessionEngine::new(config);
        engine.start();

        // 2 minutes of work puts the engine on break; 30s into it, cancel.
        for _ in 0..(2 * 60 + 30) {
            engine.tick();
        }
        assert_eq!(engine.state(), SessionState::OnBreak);
        engine.cancel();

        assert_eq!(
            engine.result(),
            SessionResult {
                completed: false,
                actual_minutes: 2
            }
        );
    }

    #[test]
    fn test_cancel_before_any_tick_records_nothing() {
        let config = SessionConfig::new(10, None, None).unwrap();
        let mut engine = SessionEngine::new(config);
        engine.start();
        engine.cancel();

        assert_eq!(
            engine.result(),
            SessionResult {
                completed: false,
                actual_minutes: 0
            }
        );
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(SessionConfig::new(0, None, None), Err(Error::InvalidDuration)));
    }

    #[test]
    fn test_break_interval_must_be_shorter_than_session() {
        assert!(matches!(SessionConfig::new(30, Some(40), Some(5)), Err(Error::InvalidBreakConfig(_))));
        assert!(matches!(SessionConfig::new(30, Some(30), Some(5)), Err(Error::InvalidBreakConfig(_))));
        assert!(matches!(SessionConfig::new(30, Some(0), Some(5)), Err(Error::InvalidBreakConfig(_))));
    }

    #[test]
    fn test_break_duration_required_with_interval() {
        assert!(matches!(SessionConfig::new(30, Some(10), None), Err(Error::InvalidBreakConfig(_))));
        assert!(matches!(SessionConfig::new(30, Some(10), Some(0)), Err(Error::InvalidBreakConfig(_))));
        assert!(matches!(SessionConfig::new(30, None, Some(5)), Err(Error::InvalidBreakConfig(_))));
    }

    #[test]
    fn test_ticks_ignored_before_start_and_after_terminal() {
        let config = SessionConfig::new(1, None, None).unwrap();
        let mut engine = SessionEngine::new(config);

        // In Idle, ticks are no-ops.
        engine.tick();
        assert_eq!(engine.state(), SessionState::Idle);
        assert_eq!(engine.worked_minutes(), 0);

        engine.start();
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.state(), SessionState::Completed);

        // Extra ticks past completion change nothing.
        engine.tick();
        assert_eq!(
            engine.result(),
            SessionResult {
                completed: true,
                actual_minutes: 1
            }
        );
    }
}
