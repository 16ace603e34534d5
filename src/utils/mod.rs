pub mod clipboard;
pub mod error;
pub mod format;
pub mod interactive;
pub mod markup;
pub mod output;

pub use clipboard::SystemClipboard;
pub use error::{handle_flow, AppError, AppResult, FlowResult};
pub use interactive::{edit_file_direct, open_editor_custom, prompt_input, prompt_multiline, prompt_yes_no};
pub use output::{print_success, print_warning, DisplayFormatter, OutputStyle};
