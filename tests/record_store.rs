#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use std::fs;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tempo::libs::data_storage::DataStorage;
    use tempo::libs::error::Error;
    use tempo::store::record::RecordStore;
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct StoreTestContext;

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            StoreTestContext
        }
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        values: Vec<String>,
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_loads_default(_ctx: &mut StoreTestContext) {
        let store: RecordStore<Doc> = RecordStore::new("never_written.json").unwrap();
        assert_eq!(store.load().unwrap(), Doc::default());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_then_load_roundtrip(_ctx: &mut StoreTestContext) {
        let store: RecordStore<Doc> = RecordStore::new("roundtrip.json").unwrap();

        let doc = Doc {
            values: vec!["first".to_string(), "second".to_string()],
        };
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupted_file_reports_store_unavailable(_ctx: &mut StoreTestContext) {
        let path = DataStorage::new().get_path("corrupted.json").unwrap();
        fs::write(&path, "not json at all {{{").unwrap();

        let store: RecordStore<Doc> = RecordStore::new("corrupted.json").unwrap();
        assert!(matches!(store.load(), Err(Error::StoreUnavailable(_))));
    }
}
