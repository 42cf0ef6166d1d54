#[cfg(test)]
mod tests {
    use sesl::db::sessions::Sessions;
    use sesl::libs::session::{Session, NO_SUBJECT};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext { _temp_dir: temp_dir }
        }
    }

    /// Session with a controlled start timestamp so ordering is deterministic.
    fn session_at(subject_id: i64, name: &str, day: u32, duration: i64) -> Session {
        Session {
            id: None,
            subject_id,
            subject_name: name.to_string(),
            start: NaiveDate::from_ymd_opt(2026, 8, day).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            duration,
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_insert_and_fetch_most_recent_first(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();

        sessions.insert(&session_at(1, "Math", 1, 60)).unwrap();
        sessions.insert(&session_at(1, "Math", 3, 120)).unwrap();
        sessions.insert(&session_at(1, "Math", 2, 90)).unwrap();

        let all = sessions.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        let durations: Vec<i64> = all.iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![120, 90, 60]);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_recent_limits(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        for day in 1..=8 {
            sessions.insert(&session_at(1, "Math", day, day as i64 * 10)).unwrap();
        }

        let recent = sessions.recent(5).unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].duration, 80);
        assert_eq!(recent[4].duration, 40);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_recent_for_subject(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        sessions.insert(&session_at(1, "Math", 1, 60)).unwrap();
        sessions.insert(&session_at(2, "Physics", 2, 90)).unwrap();
        sessions.insert(&session_at(1, "Math", 3, 120)).unwrap();

        let math = sessions.recent_for_subject(1, 10).unwrap();
        assert_eq!(math.len(), 2);
        assert!(math.iter().all(|s| s.subject_id == 1));
        assert_eq!(math[0].duration, 120);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_totals(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        assert_eq!(sessions.total_duration().unwrap(), 0);

        sessions.insert(&session_at(1, "Math", 1, 60)).unwrap();
        sessions.insert(&session_at(2, "Physics", 2, 90)).unwrap();
        sessions.insert(&session_at(1, "Math", 3, 120)).unwrap();

        assert_eq!(sessions.total_duration().unwrap(), 270);
        assert_eq!(sessions.total_duration_for_subject(1).unwrap(), 180);
        assert_eq!(sessions.total_duration_for_subject(2).unwrap(), 90);
        assert_eq!(sessions.total_duration_for_subject(3).unwrap(), 0);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_unassigned_session_uses_sentinel(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        sessions.insert(&Session::from_elapsed(None, "General", 45)).unwrap();

        let all = sessions.fetch_all().unwrap();
        assert_eq!(all[0].subject_id, NO_SUBJECT);
        assert_eq!(all[0].duration, 45);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        sessions.insert(&session_at(1, "Math", 1, 60)).unwrap();
        let id = sessions.fetch_all().unwrap()[0].id.unwrap();

        assert_eq!(sessions.delete(id).unwrap(), 1);
        assert!(sessions.fetch_all().unwrap().is_empty());
        assert_eq!(sessions.delete(id).unwrap(), 0);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete_for_subject(_ctx: &mut SessionTestContext) {
        let sessions = Sessions::new().unwrap();
        sessions.insert(&session_at(1, "Math", 1, 60)).unwrap();
        sessions.insert(&session_at(1, "Math", 2, 90)).unwrap();
        sessions.insert(&session_at(2, "Physics", 3, 120)).unwrap();

        assert_eq!(sessions.delete_for_subject(1).unwrap(), 2);
        let remaining = sessions.fetch_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].subject_id, 2);
    }
}
