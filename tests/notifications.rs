#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use tempo::commands::focus::announce_outcome;
    use tempo::libs::notifier::Notifier;
    use tempo::libs::session::SessionResult;

    /// Notifier double that records every call instead of touching the
    /// platform notification facility.
    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, title: &str, body: &str) {
            self.calls.lock().unwrap().push((title.to_string(), body.to_string()));
        }
    }

    #[test]
    fn test_completion_fires_one_notification() {
        let notifier = RecordingNotifier::default();
        let result = SessionResult {
            completed: true,
            actual_minutes: 25,
        };

        announce_outcome(&result, &notifier);

        let calls = notifier.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1.contains("25"));
    }

    #[test]
    fn test_cancellation_fires_no_notification() {
        let notifier = RecordingNotifier::default();
        let result = SessionResult {
            completed: false,
            actual_minutes: 10,
        };

        announce_outcome(&result, &notifier);

        assert!(notifier.calls.lock().unwrap().is_empty());
    }
}
