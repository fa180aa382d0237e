#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tempo::libs::view::View;
    use tempo::store::problems::{parse_tags, Difficulty, Problem, ProblemFilter, Problems, SolveStatus};
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct ProblemTestContext;

    impl TestContext for ProblemTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            ProblemTestContext
        }
    }

    #[test_context(ProblemTestContext)]
    #[test]
    fn test_insert_and_find_by_name(_ctx: &mut ProblemTestContext) {
        let problems = Problems::new().unwrap();

        let problem = problems
            .insert(
                "leetcode",
                "https://leetcode.com/problems/two-sum",
                "Two Sum",
                Difficulty::Easy,
                SolveStatus::Solved,
                "hash map lookup",
                vec!["arrays".to_string(), "hashing".to_string()],
            )
            .unwrap();
        assert!(problem.id > 0);

        let found = problems.find_by_name("two sum").unwrap().unwrap();
        assert_eq!(found.id, problem.id);
        assert_eq!(found.platform, "leetcode");
    }

    #[test_context(ProblemTestContext)]
    #[test]
    fn test_filters_are_conjunctive(_ctx: &mut ProblemTestContext) {
        let problems = Problems::new().unwrap();

        problems
            .insert(
                "codeforces",
                "https://codeforces.com/problemset/problem/1/A",
                "Theatre Square",
                Difficulty::Easy,
                SolveStatus::Solved,
                "",
                vec!["math".to_string()],
            )
            .unwrap();
        problems
            .insert(
                "codeforces",
                "https://codeforces.com/problemset/problem/4/C",
                "Registration System",
                Difficulty::Medium,
                SolveStatus::Attempted,
                "",
                vec!["strings".to_string()],
            )
            .unwrap();

        let filter = ProblemFilter {
            platform: Some("CodeForces".to_string()),
            status: Some(SolveStatus::Solved),
            tag: None,
        };
        let matched = problems.fetch(filter).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Theatre Square");

        let by_tag = problems
            .fetch(ProblemFilter {
                tag: Some("STRINGS".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].name, "Registration System");
    }

    #[test_context(ProblemTestContext)]
    #[test]
    fn test_update_by_name(_ctx: &mut ProblemTestContext) {
        let problems = Problems::new().unwrap();

        problems
            .insert(
                "hackerrank",
                "https://www.hackerrank.com/challenges/ransom-note",
                "Ransom Note",
                Difficulty::Unspecified,
                SolveStatus::Unsolved,
                "",
                vec![],
            )
            .unwrap();

        let updated = problems
            .update_by_name("ransom note", Some(SolveStatus::Revisit), Some(Difficulty::Easy), Some("counting".to_string()), None)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, SolveStatus::Revisit);
        assert_eq!(updated.difficulty, Difficulty::Easy);
        assert_eq!(updated.notes, "counting");

        assert!(problems.update_by_name("No Such Problem", Some(SolveStatus::Solved), None, None, None).unwrap().is_none());
    }

    #[test_context(ProblemTestContext)]
    #[test]
    fn test_stats_counts_by_status_and_platform(_ctx: &mut ProblemTestContext) {
        let problems = Problems::new().unwrap();

        problems
            .insert("exercism", "https://exercism.org/a", "Stats Alpha", Difficulty::Easy, SolveStatus::Solved, "", vec![])
            .unwrap();
        problems
            .insert("exercism", "https://exercism.org/b", "Stats Beta", Difficulty::Hard, SolveStatus::Unsolved, "", vec![])
            .unwrap();

        let stats = problems.stats().unwrap();
        assert!(stats.total >= 2);
        assert!(stats.solved >= 1);
        assert!(stats.unsolved >= 1);
        assert_eq!(stats.by_platform.get("exercism"), Some(&2));
    }

    #[test]
    fn test_problems_view_truncates_multibyte_notes() {
        // 60 Cyrillic chars are 120 bytes; truncation must not split one.
        let problem = Problem {
            id: 1,
            platform: "codeforces".to_string(),
            url: String::new(),
            name: "Широкий Диапазон".to_string(),
            difficulty: Difficulty::Medium,
            status: SolveStatus::Attempted,
            notes: "д".repeat(60),
            tags: vec![],
            added_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        View::problems(&[problem]).unwrap();
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empty() {
        assert_eq!(parse_tags("graphs, dp , "), vec!["graphs".to_string(), "dp".to_string()]);
        assert!(parse_tags("  ,").is_empty());
    }
}
