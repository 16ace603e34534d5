// CRUD operations - Add, Show, Edit, Delete

use anyhow::Result;

use crate::app::{AppController, SAVE_SUCCESS_MESSAGE};
use crate::cli::{AddArgs, DeleteArgs, EditArgs, ShowArgs};
use crate::config::Config;
use crate::core::traits::KeyValueBackend;
use crate::utils::error::{handle_flow, FlowResult};
use crate::utils::markup;
use crate::utils::{self, print_success, OutputStyle};

// Create operations
pub fn handle_add_command<B: KeyValueBackend>(
    config: &Config,
    app: &mut AppController<B>,
    args: &AddArgs,
) -> Result<()> {
    let title = match &args.title {
        Some(t) => t.clone(),
        None => match utils::prompt_input(&format!("{}: ", OutputStyle::label("Title")))? {
            Some(t) => t,
            None => {
                handle_flow(FlowResult::Cancelled("Prompt creation cancelled".to_string()));
                return Ok(());
            }
        },
    };

    let content = if let Some(content) = &args.content {
        content.clone()
    } else if args.editor {
        utils::open_editor_custom(None, Some(&config.general.editor))?
    } else {
        match utils::prompt_multiline(&format!("{}:", OutputStyle::label("Prompt content")))? {
            Some(content) => content,
            None => {
                handle_flow(FlowResult::Cancelled("Prompt creation cancelled".to_string()));
                return Ok(());
            }
        }
    };

    app.new_prompt();
    app.set_title(&title);
    app.set_content(&markup::text_to_markup(&content));
    save_editor(app)
}

// Read operations
pub fn handle_show_command<B: KeyValueBackend>(app: &mut AppController<B>, args: &ShowArgs) {
    match app.select(&args.id) {
        Some(prompt) => OutputStyle::print_prompt_detailed(prompt),
        None => handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.clone(),
        }),
    }
}

// Update operations
pub fn handle_edit_command<B: KeyValueBackend>(
    config: &Config,
    app: &mut AppController<B>,
    args: &EditArgs,
) -> Result<()> {
    if app.select(&args.id).is_none() {
        handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.clone(),
        });
        return Ok(());
    }

    if let Some(title) = &args.title {
        app.set_title(title);
    }

    if let Some(content) = &args.content {
        app.set_content(&markup::text_to_markup(content));
    } else if args.editor || args.title.is_none() {
        // Nothing given on the command line: edit the stored content as text
        let current = markup::inner_text(app.editor().content());
        let edited = utils::open_editor_custom(Some(&current), Some(&config.general.editor))?;
        if edited != current.trim() {
            app.set_content(&markup::text_to_markup(&edited));
        }
    }

    save_editor(app)
}

// Delete operations
pub fn handle_delete_command<B: KeyValueBackend>(
    app: &mut AppController<B>,
    args: &DeleteArgs,
) -> Result<()> {
    let Some(prompt) = app.repository().find(&args.id) else {
        handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.clone(),
        });
        return Ok(());
    };
    let title = prompt.title.clone();

    if !args.force
        && !utils::prompt_yes_no(&format!("Are you sure you want to delete prompt '{}'?", title))?
    {
        handle_flow(FlowResult::Cancelled("Deletion cancelled".to_string()));
        return Ok(());
    }

    app.delete(&args.id);
    handle_flow(FlowResult::Success(format!("Prompt '{}' deleted", title)));
    Ok(())
}

/// Save the editor. A rejected save is returned so the process exits non-zero.
fn save_editor<B: KeyValueBackend>(app: &mut AppController<B>) -> Result<()> {
    app.save()?;
    print_success(SAVE_SUCCESS_MESSAGE);
    Ok(())
}
