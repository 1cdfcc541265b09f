#[cfg(test)]
mod tests {
    use super::super::Page;
    use super::super::create_schema_page::{CreateSchemaPage, FormField};
    use crate::config::Timings;
    use crate::tui::domain::models::{Navigation, SubjectCreationDetails};
    use crate::tui::test_helpers::{buffer_to_string, create_key_event_with_modifiers, key};
    use crate::tui::ui::commands::{Command, Operation};
    use crate::tui::ui::events::{
        Message, SchemaCreated, SchemaCreationFailed, SchemaCreationStarted,
    };
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn type_text(page: &mut CreateSchemaPage, text: &str) {
        for c in text.chars() {
            page.update(key(KeyCode::Char(c)));
        }
    }

    fn filled_page() -> CreateSchemaPage {
        let mut page = CreateSchemaPage::new(Timings::default());
        type_text(&mut page, "orders");
        page.update(key(KeyCode::Tab));
        type_text(&mut page, r#"{"type":"string"}"#);
        page
    }

    fn render(page: &mut CreateSchemaPage) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| page.render(f, f.area())).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut page = CreateSchemaPage::new(Timings::default());
        assert_eq!(page.focus(), FormField::Subject);

        page.update(key(KeyCode::Tab));
        assert_eq!(page.focus(), FormField::Schema);

        page.update(key(KeyCode::BackTab));
        assert_eq!(page.focus(), FormField::Subject);
    }

    #[test]
    fn test_enter_on_schema_field_submits() {
        let mut page = filled_page();

        let command = page.update(key(KeyCode::Enter));

        assert_eq!(
            command,
            Command::Perform(Operation::CreateSchema(SubjectCreationDetails {
                subject: "orders".to_string(),
                schema: r#"{"type":"string"}"#.to_string(),
            }))
        );
    }

    #[test]
    fn test_enter_on_subject_field_moves_to_schema() {
        let mut page = CreateSchemaPage::new(Timings::default());
        type_text(&mut page, "orders");

        assert_eq!(page.update(key(KeyCode::Enter)), Command::None);
        assert_eq!(page.focus(), FormField::Schema);
    }

    #[test]
    fn test_empty_fields_are_rejected_inline() {
        let mut page = CreateSchemaPage::new(Timings::default());
        page.update(key(KeyCode::Tab));

        assert_eq!(page.update(key(KeyCode::Enter)), Command::None);
        assert_eq!(page.validation(), Some("subject cannot be empty"));
        assert!(render(&mut page).contains("subject cannot be empty"));

        page.update(key(KeyCode::Tab));
        type_text(&mut page, "orders");
        assert_eq!(page.validation(), None);
        page.update(key(KeyCode::Tab));

        assert_eq!(page.update(key(KeyCode::Enter)), Command::None);
        assert_eq!(page.validation(), Some("schema cannot be empty"));
    }

    #[test]
    fn test_ctrl_r_resets_form() {
        let mut page = filled_page();

        page.update(Message::Key(create_key_event_with_modifiers(
            KeyCode::Char('r'),
            KeyModifiers::CONTROL,
        )));

        assert_eq!(page.subject(), "");
        assert_eq!(page.schema(), "");
        assert_eq!(page.focus(), FormField::Subject);
    }

    #[test]
    fn test_creation_lifecycle() {
        let mut page = filled_page();

        page.update(Message::SchemaCreationStarted(SchemaCreationStarted {
            subject: "orders".to_string(),
        }));
        assert!(page.bars().view().contains("⏳ Creating Schema"));

        // form is locked while creating
        page.update(key(KeyCode::Char('x')));
        assert_eq!(page.schema(), r#"{"type":"string"}"#);

        let command = page.update(Message::SchemaCreated(SchemaCreated {
            subject: "orders".to_string(),
            version: 1,
        }));
        assert_eq!(page.bars().view(), "✅ Schema created");
        assert_eq!(page.subject(), "");

        let Command::Delay { message, .. } = command else {
            panic!("success should schedule a hide");
        };
        page.update(*message);
        assert_eq!(page.bars().view(), "");
    }

    #[test]
    fn test_failure_keeps_form_and_shows_error() {
        let mut page = filled_page();
        page.update(Message::SchemaCreationStarted(SchemaCreationStarted {
            subject: "orders".to_string(),
        }));

        page.update(Message::SchemaCreationFailed(SchemaCreationFailed {
            subject: "orders".to_string(),
            reason: "incompatible".to_string(),
        }));

        assert_eq!(
            page.bars().view(),
            "❌ Failed to create schema: incompatible"
        );
        assert_eq!(page.subject(), "orders");
        assert_eq!(page.bars().focussed(), None);
    }

    #[test]
    fn test_escape_navigates_back() {
        let mut page = CreateSchemaPage::new(Timings::default());

        assert_eq!(
            page.update(key(KeyCode::Esc)),
            Command::emit(Message::Navigate(Navigation::Subjects))
        );
    }

    #[test]
    fn test_render_shows_both_fields() {
        let mut page = filled_page();

        let content = render(&mut page);

        assert!(content.contains("Subject"));
        assert!(content.contains("orders"));
        assert!(content.contains("Schema"));
        assert!(content.contains(r#"{"type":"string"}"#));
    }
}
