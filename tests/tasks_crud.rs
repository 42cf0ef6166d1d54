#[cfg(test)]
mod tests {
    use sesl::db::tasks::Tasks;
    use sesl::libs::task::{Priority, Task, TaskFilter};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_fetch(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();

        let task = Task::new(1, "Math", "Homework", "Chapter 3", date(2026, 9, 10), Priority::High);
        tasks.upsert(&task).unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Homework");
        assert_eq!(all[0].description, "Chapter 3");
        assert_eq!(all[0].priority, Priority::High);
        assert_eq!(all[0].due_date, date(2026, 9, 10));
        assert!(!all[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_two_key_ordering(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();

        // Same due date orders by priority, high first
        tasks.upsert(&Task::new(1, "Math", "Low prio", "", date(2026, 9, 10), Priority::Low)).unwrap();
        tasks.upsert(&Task::new(1, "Math", "High prio", "", date(2026, 9, 10), Priority::High)).unwrap();
        // An earlier due date wins regardless of priority
        tasks.upsert(&Task::new(1, "Math", "Due first", "", date(2026, 9, 1), Priority::Low)).unwrap();

        let ordered = tasks.fetch(TaskFilter::All).unwrap();
        let titles: Vec<&str> = ordered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Due first", "High prio", "Low prio"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_filter_by_subject(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        tasks.upsert(&Task::new(1, "Math", "Homework", "", date(2026, 9, 10), Priority::Medium)).unwrap();
        tasks.upsert(&Task::new(2, "Physics", "Lab report", "", date(2026, 9, 11), Priority::Medium)).unwrap();

        let for_subject = tasks.fetch(TaskFilter::ForSubject(2)).unwrap();
        assert_eq!(for_subject.len(), 1);
        assert_eq!(for_subject[0].title, "Lab report");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_completed_moves_between_filters(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        tasks.upsert(&Task::new(1, "Math", "Homework", "", date(2026, 9, 10), Priority::Medium)).unwrap();
        let id = tasks.fetch(TaskFilter::All).unwrap()[0].id.unwrap();

        let toggled = tasks.toggle_completed(id).unwrap().unwrap();
        assert!(toggled.completed);
        assert!(tasks.fetch(TaskFilter::Upcoming).unwrap().is_empty());
        assert_eq!(tasks.fetch(TaskFilter::Completed).unwrap().len(), 1);

        // Toggling again brings it back
        let toggled = tasks.toggle_completed(id).unwrap().unwrap();
        assert!(!toggled.completed);
        assert_eq!(tasks.fetch(TaskFilter::Upcoming).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_missing_task(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        assert!(tasks.toggle_completed(999).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        tasks.upsert(&Task::new(1, "Math", "Homework", "", date(2026, 9, 10), Priority::Medium)).unwrap();
        let id = tasks.fetch(TaskFilter::All).unwrap()[0].id.unwrap();

        assert_eq!(tasks.delete(id).unwrap(), 1);
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());
    }

    #[test]
    fn test_priority_value_round_trip() {
        for priority in Priority::all() {
            assert_eq!(Priority::from_value(priority.value()), priority);
        }
        // Unknown stored values decode to Medium
        assert_eq!(Priority::from_value(42), Priority::Medium);
        assert_eq!(Priority::from_value(-1), Priority::Medium);
    }
}
