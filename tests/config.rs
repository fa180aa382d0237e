#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tempo::libs::config::{Config, FocusConfig};
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct ConfigTestContext;

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            ConfigTestContext
        }
    }

    #[test]
    fn test_focus_defaults() {
        let focus = FocusConfig::default();
        assert_eq!(focus.default_minutes, 25);
        assert_eq!(focus.break_every, None);
        assert_eq!(focus.break_duration, 5);
        assert!(focus.notifications);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_read_cycle(_ctx: &mut ConfigTestContext) {
        // No file yet: every command still gets a usable config.
        let config = Config::read().unwrap();
        assert!(config.focus.is_none());

        let config = Config {
            focus: Some(FocusConfig {
                default_minutes: 50,
                break_every: Some(20),
                break_duration: 4,
                notifications: false,
            }),
        };
        config.save().unwrap();

        let read = Config::read().unwrap();
        let focus = read.focus.unwrap();
        assert_eq!(focus.default_minutes, 50);
        assert_eq!(focus.break_every, Some(20));
        assert_eq!(focus.break_duration, 4);
        assert!(!focus.notifications);
    }
}
