#[cfg(test)]
mod tests {
    use super::super::application::registry_service::{InMemoryRegistry, Registry};
    use super::super::domain::models::{PageId, Subject};
    use super::super::runtime::drain;
    use super::super::test_helpers::{buffer_to_string, key};
    use super::super::ui::app::App;
    use super::super::ui::commands::Command;
    use super::super::ui::components::CmdBar;
    use super::super::ui::events::Message;
    use crate::config::Timings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use std::collections::VecDeque;
    use std::time::Duration;

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::new(Duration::ZERO).with_subjects(vec![
            Subject::new("orders-value", vec![1, 2]),
            Subject::new("payments-value", vec![1]),
        ])
    }

    /// Runs `command` and everything it leads to, except ticks and delayed
    /// messages, which are returned for the test to deliver.
    fn settle(app: &mut App, command: Command, registry: &dyn Registry) -> Vec<Command> {
        let mut deferred = Vec::new();
        let mut queue = VecDeque::from([command]);
        while let Some(command) = queue.pop_front() {
            match command {
                Command::None => {}
                Command::Batch(commands) => queue.extend(commands),
                Command::Tick { .. } | Command::Delay { .. } => deferred.push(command),
                command => {
                    for msg in drain(command, registry) {
                        queue.push_back(app.update(msg));
                    }
                }
            }
        }
        deferred
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_schema_creation_banner_lifecycle() {
        let registry = registry();
        let mut app = App::new(Timings::default());
        app.update(key(KeyCode::F(3)));
        type_text(&mut app, "inventory-value");
        app.update(key(KeyCode::Tab));
        type_text(&mut app, r#"{"type":"string"}"#);

        let submit = app.update(key(KeyCode::Enter));
        let mut messages = drain(submit, &registry).into_iter();

        app.update(messages.next().unwrap());
        assert!(app.create_page().bars().view().contains("⏳ Creating Schema"));
        assert!(screen(&mut app).contains("Creating Schema"));

        let dismiss = app.update(messages.next().unwrap());
        assert!(app.create_page().bars().view().contains("✅ Schema created"));
        assert_eq!(app.create_page().subject(), "");

        let Command::Delay { after, message } = dismiss else {
            panic!("success should schedule its own dismissal");
        };
        assert_eq!(after, Duration::from_secs(2));
        app.update(*message);
        assert_eq!(app.create_page().bars().view(), "");
        assert!(!screen(&mut app).contains("Schema created"));
    }

    #[test]
    fn test_loading_delete_blocks_search_until_it_fails() {
        let registry = registry().with_failing_deletes(true);
        let mut app = App::new(Timings::default());
        let init = app.init();
        settle(&mut app, init, &registry);
        assert_eq!(app.subjects_page().table().len(), 2);

        app.update(key(KeyCode::F(2)));
        let delete = app.update(key(KeyCode::Enter));
        let mut messages = drain(delete, &registry).into_iter();

        app.update(messages.next().unwrap());
        let page = app.subjects_page();
        assert!(page.bars().get("delete").unwrap().is_focussed());

        app.update(key(KeyCode::Char('/')));
        assert!(!app.subjects_page().bars().get("search").unwrap().is_active());

        app.update(messages.next().unwrap());
        app.update(key(KeyCode::Char('/')));

        let bars = app.subjects_page().bars();
        assert!(bars.get("search").unwrap().is_active());
        assert!(bars.get("delete").unwrap().is_active());
        let content = screen(&mut app);
        assert!(content.contains("❌ Failed to delete subject: unable to delete subject"));
        assert!(content.contains("> Search subject by name"));
    }

    #[test]
    fn test_successful_delete_then_filter() {
        let registry = registry();
        let mut app = App::new(Timings::default());
        let init = app.init();
        settle(&mut app, init, &registry);

        app.update(key(KeyCode::F(2)));
        let delete = app.update(key(KeyCode::Enter));
        let deferred = settle(&mut app, delete, &registry);

        assert_eq!(app.subjects_page().table().len(), 1);
        assert!(
            app.subjects_page()
                .bars()
                .view()
                .contains("✅ Subject deleted")
        );
        assert!(
            deferred
                .iter()
                .any(|command| matches!(command, Command::Delay { .. }))
        );

        app.update(key(KeyCode::Char('/')));
        let query = app.update(key(KeyCode::Char('x')));
        settle(&mut app, query, &registry);
        assert!(app.subjects_page().table().visible().is_empty());

        let clear = app.update(key(KeyCode::Esc));
        settle(&mut app, clear, &registry);
        assert_eq!(app.subjects_page().table().visible().len(), 1);
        assert_eq!(app.subjects_page().bars().focussed(), None);
    }

    #[test]
    fn test_spinner_ticks_advance_only_their_own_bar() {
        let registry = registry();
        let mut app = App::new(Timings::default());
        let init = app.init();
        let started = drain(init, &registry).remove(0);

        let Command::Tick { tick, .. } = app.update(started) else {
            panic!("listing should start a spinner");
        };
        let before = app.subjects_page().bars().view();

        let rearm = app.update(Message::Tick(tick));

        assert!(matches!(rearm, Command::Tick { tick: next, .. } if next == tick));
        assert_ne!(app.subjects_page().bars().view(), before);
        assert_eq!(app.create_page().bars().view(), "");
    }

    #[test]
    fn test_details_page_round_trip() {
        let registry = registry();
        let mut app = App::new(Timings::default());
        let init = app.init();
        settle(&mut app, init, &registry);

        let open = app.update(key(KeyCode::Enter));
        settle(&mut app, open, &registry);

        assert_eq!(app.current_page(), PageId::SchemaDetails);
        assert_eq!(app.details_page().versions().len(), 2);
        assert!(screen(&mut app).contains("Schema: orders-value"));

        let back = app.update(key(KeyCode::Esc));
        settle(&mut app, back, &registry);
        assert_eq!(app.current_page(), PageId::Subjects);
    }
}
