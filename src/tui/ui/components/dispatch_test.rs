#[cfg(test)]
mod tests {
    use super::super::dispatch::*;
    use super::super::notifier::{Notifier, NotifierState};
    use crate::tui::ui::commands::Command;
    use crate::tui::ui::events::{
        Message, MessageKind, Payload, SubjectDeleted, SubjectDeletionFailed,
        SubjectDeletionStarted,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_registered_handler_receives_typed_payload() {
        let mut table = DispatchTable::new();
        table.on(|msg: SubjectDeletionStarted, notifier: &mut Notifier| {
            Reaction::active(notifier.spin_with_loading(format!("Deleting {}", msg.subject)))
        });
        let mut notifier = Notifier::new("delete");

        let dispatched = table.dispatch(
            SubjectDeletionStarted {
                subject: "orders".to_string(),
            }
            .into_message(),
            &mut notifier,
        );

        assert!(matches!(dispatched, Dispatched::Handled(Reaction { active: true, .. })));
        assert_eq!(
            notifier.state(),
            &NotifierState::Loading {
                label: "Deleting orders".to_string()
            }
        );
    }

    #[test]
    fn test_only_matching_handler_is_invoked() {
        let started_calls = Rc::new(Cell::new(0));
        let failed_calls = Rc::new(Cell::new(0));
        let mut table = DispatchTable::new();
        {
            let started_calls = started_calls.clone();
            table.on(move |_: SubjectDeletionStarted, _: &mut Notifier| {
                started_calls.set(started_calls.get() + 1);
                Reaction::active(Command::None)
            });
        }
        {
            let failed_calls = failed_calls.clone();
            table.on(move |_: SubjectDeletionFailed, _: &mut Notifier| {
                failed_calls.set(failed_calls.get() + 1);
                Reaction::active(Command::None)
            });
        }
        let mut notifier = Notifier::new("delete");

        table.dispatch(
            Message::SubjectDeletionFailed(SubjectDeletionFailed {
                subject: "orders".to_string(),
                reason: "boom".to_string(),
            }),
            &mut notifier,
        );

        assert_eq!(started_calls.get(), 0);
        assert_eq!(failed_calls.get(), 1);
    }

    #[test]
    fn test_unregistered_message_is_handed_back_unchanged() {
        let table = DispatchTable::new();
        let mut notifier = Notifier::new("delete");
        let msg = Message::SubjectDeleted(SubjectDeleted {
            subject: "orders".to_string(),
        });

        let first = table.dispatch(msg.clone(), &mut notifier);
        let second = table.dispatch(msg.clone(), &mut notifier);

        assert_eq!(first, Dispatched::Unhandled(msg.clone()));
        assert_eq!(second, Dispatched::Unhandled(msg));
        assert!(notifier.is_idle());
        assert_eq!(notifier.generation(), 0);
    }

    #[test]
    fn test_second_registration_replaces_first() {
        let mut table = DispatchTable::new();
        table.on(|_: SubjectDeleted, _: &mut Notifier| Reaction::active(Command::None));
        table.on(|_: SubjectDeleted, _: &mut Notifier| Reaction::inactive());
        let mut notifier = Notifier::new("delete");

        let dispatched = table.dispatch(
            Message::SubjectDeleted(SubjectDeleted {
                subject: "orders".to_string(),
            }),
            &mut notifier,
        );

        assert_eq!(table.len(), 1);
        assert_eq!(dispatched, Dispatched::Handled(Reaction::inactive()));
    }

    #[test]
    fn test_untyped_registration_gets_whole_message() {
        let mut table = DispatchTable::new();
        table.register(MessageKind::SubjectDeleted, |msg, notifier| {
            if let Message::SubjectDeleted(deleted) = msg {
                notifier.show_success(format!("{} deleted", deleted.subject));
            }
            Reaction::active(Command::None)
        });
        let mut notifier = Notifier::new("delete");

        table.dispatch(
            Message::SubjectDeleted(SubjectDeleted {
                subject: "orders".to_string(),
            }),
            &mut notifier,
        );

        assert!(table.handles(MessageKind::SubjectDeleted));
        assert_eq!(notifier.view(), "✅ orders deleted");
    }

    #[test]
    fn test_payload_kind_matches_message_kind() {
        let msg = SubjectDeletionStarted {
            subject: "x".to_string(),
        }
        .into_message();

        assert_eq!(msg.kind(), SubjectDeletionStarted::KIND);
        assert!(SubjectDeleted::from_message(msg.clone()).is_err());
        assert!(SubjectDeletionStarted::from_message(msg).is_ok());
    }
}
