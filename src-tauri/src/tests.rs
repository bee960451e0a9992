//! Host Integration Tests
//!
//! Payload in, snapshot out, without a running Tauri app.

#[cfg(test)]
mod tests {
    use crate::bridge::{HandleOutcome, SnapshotPublisher, TodoHost};
    use crate::domain::DomainError;
    use serde_json::json;
    use std::sync::Mutex;
    use todo_bridge::testing::RecordingChannel;
    use todo_bridge::{Command, CommandDispatcher, Task, ViewStateSink};

    #[derive(Default)]
    struct RecordingPublisher {
        pushes: Mutex<Vec<Vec<Task>>>,
    }

    impl RecordingPublisher {
        fn pushes(&self) -> Vec<Vec<Task>> {
            self.pushes.lock().unwrap().clone()
        }
    }

    impl SnapshotPublisher for RecordingPublisher {
        fn publish(&self, tasks: &[Task]) -> Result<(), String> {
            self.pushes.lock().unwrap().push(tasks.to_vec());
            Ok(())
        }
    }

    struct FailingPublisher;

    impl SnapshotPublisher for FailingPublisher {
        fn publish(&self, _tasks: &[Task]) -> Result<(), String> {
            Err("window closed".into())
        }
    }

    #[tokio::test]
    async fn test_init_pushes_current_list() {
        let host = TodoHost::with_tasks(vec![Task::new("a")]);
        let publisher = RecordingPublisher::default();

        let outcome = host.handle_payload(r#"{"cmd":"init"}"#, &publisher).await;

        assert_eq!(outcome, HandleOutcome::Applied(Command::Init));
        assert_eq!(publisher.pushes(), vec![vec![Task::new("a")]]);
    }

    #[tokio::test]
    async fn test_add_mark_clear() {
        let host = TodoHost::new();
        let publisher = RecordingPublisher::default();

        host.handle_payload(r#"{"cmd":"addTask","name":"a"}"#, &publisher).await;
        host.handle_payload(r#"{"cmd":"addTask","name":"b"}"#, &publisher).await;
        host.handle_payload(r#"{"cmd":"markTask","index":1,"done":true}"#, &publisher).await;
        host.handle_payload(r#"{"cmd":"clearDoneTasks"}"#, &publisher).await;

        let pushes = publisher.pushes();
        assert_eq!(pushes.len(), 4);
        assert_eq!(pushes[2], vec![Task::new("a"), Task::new("b").with_done(true)]);
        assert_eq!(pushes[3], vec![Task::new("a")]);
        assert_eq!(host.snapshot().await, vec![Task::new("a")]);
    }

    #[tokio::test]
    async fn test_out_of_range_mark_still_pushes() {
        let host = TodoHost::with_tasks(vec![Task::new("a")]);
        let publisher = RecordingPublisher::default();

        let outcome = host
            .handle_payload(r#"{"cmd":"markTask","index":5,"done":true}"#, &publisher)
            .await;

        assert!(matches!(
            outcome,
            HandleOutcome::Rejected(Command::MarkTask { index: 5, done: true }, DomainError::NotFound(_))
        ));
        assert_eq!(publisher.pushes(), vec![vec![Task::new("a")]]);
    }

    #[tokio::test]
    async fn test_undecodable_payload_changes_nothing() {
        let host = TodoHost::with_tasks(vec![Task::new("a")]);
        let publisher = RecordingPublisher::default();

        let outcome = host.handle_payload(r#"{"cmd":"renameTask"}"#, &publisher).await;

        assert!(matches!(outcome, HandleOutcome::Undecodable(_)));
        assert_eq!(publisher.pushes(), vec![vec![Task::new("a")]]);
    }

    #[tokio::test]
    async fn test_log_does_not_touch_tasks() {
        let host = TodoHost::new();
        let publisher = RecordingPublisher::default();

        let outcome = host
            .handle_payload(r#"{"cmd":"log","text":"1 \"x\""}"#, &publisher)
            .await;

        assert_eq!(outcome, HandleOutcome::Applied(Command::Log { text: "1 \"x\"".into() }));
        assert_eq!(publisher.pushes(), vec![Vec::<Task>::new()]);
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_state() {
        let host = TodoHost::new();
        host.handle_payload(r#"{"cmd":"addTask","name":"a"}"#, &FailingPublisher).await;
        assert_eq!(host.snapshot().await, vec![Task::new("a")]);
    }

    #[tokio::test]
    async fn test_view_and_host_end_to_end() {
        let host = TodoHost::new();
        let publisher = RecordingPublisher::default();
        let sink = ViewStateSink::new();
        let channel = RecordingChannel::new();
        let dispatcher = CommandDispatcher::new(channel.clone(), sink.view_model());
        let view = sink.view_model();

        // Delivers pending payloads and forwards the latest push as JSON.
        async fn pump(
            host: &TodoHost,
            channel: &RecordingChannel,
            publisher: &RecordingPublisher,
            sink: &ViewStateSink,
        ) {
            for payload in channel.drain() {
                host.handle_payload(&payload, publisher).await;
            }
            if let Some(latest) = publisher.pushes().last() {
                sink.apply_value(json!(latest)).unwrap();
            }
        }

        dispatcher.init().unwrap();
        pump(&host, &channel, &publisher, &sink).await;
        assert!(view.is_empty());

        dispatcher.add_task("buy milk").unwrap();
        dispatcher.add_task("walk dog").unwrap();
        assert!(view.is_empty());
        pump(&host, &channel, &publisher, &sink).await;
        assert_eq!(view.tasks(), vec![Task::new("buy milk"), Task::new("walk dog")]);

        let done = !view.task(0).unwrap().done;
        dispatcher.mark_task(0, done).unwrap();
        pump(&host, &channel, &publisher, &sink).await;
        assert_eq!(view.task(0), Some(Task::new("buy milk").with_done(true)));

        dispatcher.clear_done_tasks().unwrap();
        assert_eq!(view.len(), 2);
        pump(&host, &channel, &publisher, &sink).await;
        assert_eq!(view.tasks(), vec![Task::new("walk dog")]);
    }
}
