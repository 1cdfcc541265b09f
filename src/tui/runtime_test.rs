#[cfg(test)]
mod tests {
    use super::super::application::registry_service::InMemoryRegistry;
    use super::super::domain::models::Subject;
    use super::super::runtime::{Executor, drain};
    use super::super::ui::commands::{Command, Operation};
    use super::super::ui::events::{
        HideNotification, Message, SpinnerTick, SubjectDeleted, SubjectDeletionStarted,
    };
    use std::sync::Arc;
    use std::time::Duration;

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new(Duration::ZERO).with_subjects(vec![Subject::new("orders", vec![1])])
    }

    fn hide() -> Message {
        Message::Hide(HideNotification {
            tag: "delete".to_string(),
            generation: 3,
        })
    }

    #[test]
    fn test_drain_runs_operations_in_order() {
        let tick = SpinnerTick { id: 1, sequence: 1 };
        let command = Command::batch([
            Command::Tick {
                every: Duration::from_secs(60),
                tick,
            },
            Command::Perform(Operation::DeleteSubject("orders".to_string())),
            Command::delay(Duration::from_secs(60), hide()),
        ]);

        let messages = drain(command, &registry());

        assert_eq!(
            messages,
            vec![
                Message::Tick(tick),
                Message::SubjectDeletionStarted(SubjectDeletionStarted {
                    subject: "orders".to_string()
                }),
                Message::SubjectDeleted(SubjectDeleted {
                    subject: "orders".to_string()
                }),
                hide(),
            ]
        );
    }

    #[test]
    fn test_drain_of_none_is_empty() {
        assert!(drain(Command::None, &registry()).is_empty());
    }

    #[test]
    fn test_executor_reports_start_before_outcome() {
        let (executor, receiver) = Executor::new(Arc::new(registry()));

        executor.execute(Command::Perform(Operation::ListSubjects));

        let first = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        let second = receiver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(first, Message::SubjectListingStarted(_)));
        assert!(matches!(second, Message::SubjectsListed(ref l) if l.subjects.len() == 1));
    }

    #[test]
    fn test_executor_delivers_delayed_messages_after_delay() {
        let (executor, receiver) = Executor::new(Arc::new(registry()));

        executor.execute(Command::delay(Duration::from_millis(20), hide()));

        assert!(receiver.try_recv().is_err());
        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).unwrap(), hide());
    }

    #[test]
    fn test_executor_delivers_delays_by_deadline() {
        let (executor, receiver) = Executor::new(Arc::new(registry()));
        let tick = SpinnerTick { id: 1, sequence: 2 };

        executor.execute(Command::batch([
            Command::delay(Duration::from_millis(80), hide()),
            Command::Tick {
                every: Duration::from_millis(10),
                tick,
            },
        ]));

        assert_eq!(
            receiver.recv_timeout(Duration::from_secs(5)).unwrap(),
            Message::Tick(tick)
        );
        assert_eq!(receiver.recv_timeout(Duration::from_secs(5)).unwrap(), hide());
    }

    #[test]
    fn test_executor_survives_closed_loop() {
        let (executor, receiver) = Executor::new(Arc::new(registry()));
        drop(receiver);

        executor.execute(Command::batch([
            Command::emit(hide()),
            Command::delay(Duration::ZERO, hide()),
            Command::Perform(Operation::ListSubjects),
        ]));
        std::thread::sleep(Duration::from_millis(20));

        // the timer thread has stopped, later requests are dropped quietly
        executor.execute(Command::delay(Duration::ZERO, hide()));
    }
}
