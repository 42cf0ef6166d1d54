#[cfg(test)]
mod tests {
    use sesl::db::sessions::Sessions;
    use sesl::db::subjects::Subjects;
    use sesl::db::tasks::Tasks;
    use sesl::libs::session::Session;
    use sesl::libs::subject::Subject;
    use sesl::libs::task::{Priority, Task, TaskFilter};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SubjectTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SubjectTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SubjectTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_subject_insert_and_fetch(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();

        subjects.upsert(&Subject::new("Math", 40.0)).unwrap();
        subjects.upsert(&Subject::new("Physics", 25.5)).unwrap();

        let all = subjects.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        // Ordered by name
        assert_eq!(all[0].name, "Math");
        assert_eq!(all[1].name, "Physics");
        assert_eq!(subjects.count().unwrap(), 2);
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_subject_update(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();
        subjects.upsert(&Subject::new("Math", 40.0)).unwrap();

        let mut subject = subjects.fetch_all().unwrap().remove(0);
        subject.name = "Applied Math".to_string();
        subject.goal_hours = 60.0;
        subjects.upsert(&subject).unwrap();

        let updated = subjects.get_by_id(subject.id.unwrap()).unwrap().unwrap();
        assert_eq!(updated.name, "Applied Math");
        assert_eq!(updated.goal_hours, 60.0);
        assert_eq!(subjects.count().unwrap(), 1);
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_get_by_id_missing(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();
        assert!(subjects.get_by_id(999).unwrap().is_none());
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_total_goal_hours(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();
        assert_eq!(subjects.total_goal_hours().unwrap(), 0.0);

        subjects.upsert(&Subject::new("Math", 40.0)).unwrap();
        subjects.upsert(&Subject::new("Physics", 20.0)).unwrap();
        assert_eq!(subjects.total_goal_hours().unwrap(), 60.0);
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_delete_cascades_to_tasks_and_sessions(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();
        let tasks = Tasks::new().unwrap();
        let sessions = Sessions::new().unwrap();

        subjects.upsert(&Subject::new("Math", 40.0)).unwrap();
        subjects.upsert(&Subject::new("Physics", 20.0)).unwrap();
        let all = subjects.fetch_all().unwrap();
        let math_id = all[0].id.unwrap();
        let physics_id = all[1].id.unwrap();

        let due = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();
        tasks.upsert(&Task::new(math_id, "Math", "Homework", "", due, Priority::High)).unwrap();
        tasks.upsert(&Task::new(physics_id, "Physics", "Lab report", "", due, Priority::Low)).unwrap();

        sessions.insert(&Session::from_elapsed(Some(math_id), "Math", 120)).unwrap();
        sessions.insert(&Session::from_elapsed(Some(physics_id), "Physics", 240)).unwrap();

        let deleted = subjects.delete(math_id).unwrap();
        assert_eq!(deleted, 1);

        assert!(subjects.get_by_id(math_id).unwrap().is_none());

        // Only the other subject's dependents survive
        let remaining_tasks = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(remaining_tasks.len(), 1);
        assert_eq!(remaining_tasks[0].subject_id, physics_id);

        let remaining_sessions = sessions.fetch_all().unwrap();
        assert_eq!(remaining_sessions.len(), 1);
        assert_eq!(remaining_sessions[0].subject_id, physics_id);
    }

    #[test_context(SubjectTestContext)]
    #[test]
    fn test_delete_missing_subject(_ctx: &mut SubjectTestContext) {
        let subjects = Subjects::new().unwrap();
        assert_eq!(subjects.delete(999).unwrap(), 0);
    }
}
