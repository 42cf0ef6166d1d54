#[cfg(test)]
mod tests {
    use sesl::db::sessions::Sessions;
    use sesl::libs::control::{handle_request, ControlRequest, ControlResponse};
    use sesl::libs::service::{TimerService, MIN_SESSION_SECS};
    use sesl::libs::timer::TimerMode;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tokio::time::sleep;

    struct ControlTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for ControlTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ControlTestContext { _temp_dir: temp_dir }
        }

        async fn teardown(self) {
            // Cleanup is automatic with TempDir
        }
    }

    fn start_request(subject_id: i64, name: &str) -> ControlRequest {
        ControlRequest::Start {
            subject_id: Some(subject_id),
            subject_name: name.to_string(),
        }
    }

    async fn wait_for_elapsed(service: &TimerService, target: u64) {
        for _ in 0..2000 {
            if service.snapshot().await.elapsed_secs >= target {
                return;
            }
            sleep(Duration::from_millis(5)).await;
        }
        panic!("timer never reached {} ticks", target);
    }

    #[test_context(ControlTestContext)]
    #[tokio::test]
    async fn test_start_pause_resume_status(_ctx: &mut ControlTestContext) {
        let service = TimerService::with_tick_interval(Duration::from_millis(1));
        let sessions = Arc::new(Sessions::new().unwrap());

        let response = handle_request(&service, &sessions, start_request(1, "Math")).await;
        match response {
            ControlResponse::State { applied, state } => {
                assert!(applied);
                assert_eq!(state.mode, TimerMode::Running);
                assert_eq!(state.subject_name, "Math");
            }
            other => panic!("unexpected response: {:?}", other),
        }

        // Starting twice is rejected but reports the live state
        match handle_request(&service, &sessions, start_request(2, "Physics")).await {
            ControlResponse::State { applied, state } => {
                assert!(!applied);
                assert_eq!(state.subject_name, "Math");
            }
            other => panic!("unexpected response: {:?}", other),
        }

        match handle_request(&service, &sessions, ControlRequest::Pause).await {
            ControlResponse::State { applied, state } => {
                assert!(applied);
                assert_eq!(state.mode, TimerMode::Paused);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        match handle_request(&service, &sessions, ControlRequest::Resume).await {
            ControlResponse::State { applied, state } => {
                assert!(applied);
                assert_eq!(state.mode, TimerMode::Running);
            }
            other => panic!("unexpected response: {:?}", other),
        }

        match handle_request(&service, &sessions, ControlRequest::Status).await {
            ControlResponse::State { applied, state } => {
                assert!(applied);
                assert_eq!(state.mode, TimerMode::Running);
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test_context(ControlTestContext)]
    #[tokio::test]
    async fn test_stop_then_commit(_ctx: &mut ControlTestContext) {
        let service = TimerService::with_tick_interval(Duration::from_millis(1));
        let sessions = Arc::new(Sessions::new().unwrap());

        handle_request(&service, &sessions, start_request(1, "Math")).await;
        wait_for_elapsed(&service, MIN_SESSION_SECS).await;

        let elapsed = match handle_request(&service, &sessions, ControlRequest::Stop).await {
            ControlResponse::Stopped { elapsed, state } => {
                assert_eq!(state.mode, TimerMode::Stopped);
                elapsed
            }
            other => panic!("unexpected response: {:?}", other),
        };

        match handle_request(&service, &sessions, ControlRequest::Commit).await {
            ControlResponse::Committed { session } => {
                assert_eq!(session.duration, elapsed as i64);
                assert_eq!(session.subject_name, "Math");
            }
            other => panic!("unexpected response: {:?}", other),
        }

        assert_eq!(sessions.fetch_all().unwrap().len(), 1);
    }

    #[test_context(ControlTestContext)]
    #[tokio::test]
    async fn test_short_run_rejected_on_commit(_ctx: &mut ControlTestContext) {
        let service = TimerService::with_tick_interval(Duration::from_millis(50));
        let sessions = Arc::new(Sessions::new().unwrap());

        handle_request(&service, &sessions, start_request(1, "Math")).await;
        wait_for_elapsed(&service, 1).await;
        handle_request(&service, &sessions, ControlRequest::Stop).await;

        match handle_request(&service, &sessions, ControlRequest::Commit).await {
            ControlResponse::TooShort { elapsed, min_secs } => {
                assert!(elapsed < MIN_SESSION_SECS);
                assert_eq!(min_secs, MIN_SESSION_SECS);
            }
            other => panic!("unexpected response: {:?}", other),
        }
        assert!(sessions.fetch_all().unwrap().is_empty());
    }

    #[test_context(ControlTestContext)]
    #[tokio::test]
    async fn test_commit_with_nothing_pending(_ctx: &mut ControlTestContext) {
        let service = TimerService::with_tick_interval(Duration::from_millis(50));
        let sessions = Arc::new(Sessions::new().unwrap());

        match handle_request(&service, &sessions, ControlRequest::Commit).await {
            ControlResponse::NothingToCommit => {}
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test_context(ControlTestContext)]
    #[tokio::test]
    async fn test_discard_resets(_ctx: &mut ControlTestContext) {
        let service = TimerService::with_tick_interval(Duration::from_millis(1));
        let sessions = Arc::new(Sessions::new().unwrap());

        handle_request(&service, &sessions, start_request(1, "Math")).await;
        wait_for_elapsed(&service, 2).await;

        match handle_request(&service, &sessions, ControlRequest::Discard).await {
            ControlResponse::State { state, .. } => {
                assert_eq!(state.mode, TimerMode::Idle);
                assert_eq!(state.elapsed_secs, 0);
            }
            other => panic!("unexpected response: {:?}", other),
        }
        assert!(sessions.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn test_request_wire_format() {
        let request = ControlRequest::Start {
            subject_id: Some(3),
            subject_name: "Math".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"action\":\"start\""));

        let parsed: ControlRequest = serde_json::from_str("{\"action\":\"pause\"}").unwrap();
        assert!(matches!(parsed, ControlRequest::Pause));
    }

    #[test]
    fn test_committed_response_round_trips_timestamps() {
        let response = ControlResponse::Committed {
            session: sesl::libs::session::Session::from_elapsed(Some(1), "Math", 40),
        };
        let json = serde_json::to_string(&response).unwrap();

        // The session's start timestamp survives the wire format intact
        match serde_json::from_str::<ControlResponse>(&json).unwrap() {
            ControlResponse::Committed { session } => {
                assert_eq!(session.duration, 40);
                assert_eq!(session.subject_name, "Math");
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }
}
