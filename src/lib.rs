pub mod config;
pub mod logging;
pub mod tui;

pub use config::{Cli, Config, Timings};
pub use tui::InteractiveApp;
pub use tui::application::registry_service::{InMemoryRegistry, Registry};
pub use tui::ui::components::{
    BarStack, CmdBar, DispatchTable, Notifier, NotifierCmdBar, NotifierState, Reaction, Routed,
    SearchCmdBar,
};
pub use tui::ui::events::{Message, MessageKind, Payload};
