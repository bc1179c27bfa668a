use crate::app::App;
use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::{get_db_file_path, resolve_config_dir};
use crate::error::Result;
use crate::logging::init_logging;
use crate::models::SnippetId;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::SnippetStore;
use crate::ui::display_snippet_manager;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "clipmemo - labeled text snippets, one keystroke from the clipboard",
    long_about = "clipmemo keeps short labeled snippets and copies them to the clipboard. \
                  Run without a subcommand for the interactive list."
)]
pub struct Clipmemo {
    #[clap(long, global = true, help = "Directory holding the snippet data")]
    pub data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every snippet in display order
    List {
        #[clap(long, help = "Print the stored JSON instead of a table")]
        json: bool,
    },
    /// Add a snippet at the top of the list
    Add {
        #[clap(long, short = 'l', help = "Label shown in the list")]
        label: String,

        #[clap(long, short = 'c', help = "Text copied to the clipboard")]
        content: String,
    },
    /// Replace the label and content of a snippet
    Edit {
        #[clap(long, help = "Id of the snippet to edit")]
        id: SnippetId,

        #[clap(long, short = 'l', help = "New label")]
        label: String,

        #[clap(long, short = 'c', help = "New content")]
        content: String,
    },
    /// Delete a snippet by id
    Delete {
        #[clap(long, help = "Id of the snippet to delete")]
        id: SnippetId,

        #[clap(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
    /// Move the snippet at one position to another
    Move {
        #[clap(long, help = "Current position (0 is the top)")]
        from: usize,

        #[clap(long, help = "New position")]
        to: usize,
    },
    /// Copy a snippet's content to the clipboard
    Copy {
        #[clap(long, help = "Id of the snippet to copy")]
        id: SnippetId,
    },
    /// Print the path of the snippet data file
    Path,
}

pub fn handle_command(cli: Clipmemo) -> Result<()> {
    let dir = resolve_config_dir(cli.data_dir.as_deref());
    if let Some(Commands::Path) = cli.commands {
        println!("{}", get_db_file_path(&dir).display());
        return Ok(());
    }

    init_logging(&dir)?;
    let store = SnippetStore::load(FileStorage::new(&dir))?;

    match cli.commands {
        None => {
            let mut app = App::new(store, SystemClipboard::new());
            display_snippet_manager(&mut app)
        }
        Some(command) => {
            let stdin = io::stdin();
            let mut clipboard = SystemClipboard::for_one_shot();
            run_command(
                command,
                store,
                &mut clipboard,
                &mut stdin.lock(),
                &mut io::stdout(),
            )
        }
    }
}

/// Execute one non-interactive subcommand
pub fn run_command<S, C, R, W>(
    command: Commands,
    mut store: SnippetStore<S>,
    clipboard: &mut C,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStorage,
    C: ClipboardWriter,
    R: BufRead,
    W: Write,
{
    match command {
        Commands::List { json } => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(store.snippets())?)?;
            } else if store.is_empty() {
                writeln!(out, "No snippets yet")?;
            } else {
                for (index, snippet) in store.snippets().iter().enumerate() {
                    writeln!(
                        out,
                        "{:>3}  {}  {}  {}",
                        index,
                        snippet.id,
                        snippet.label,
                        snippet.preview(60)
                    )?;
                }
            }
        }
        Commands::Add { label, content } => {
            let id = store.create(&label, &content)?[0].id;
            writeln!(out, "Snippet added with id {}", id)?;
        }
        Commands::Edit { id, label, content } => {
            if store.update(id, &label, &content)? {
                writeln!(out, "Snippet updated successfully")?;
            } else {
                writeln!(out, "No snippet with id {}", id)?;
            }
        }
        Commands::Delete { id, yes } => {
            let Some(label) = store.get(id).map(|s| s.label.clone()) else {
                writeln!(out, "No snippet with id {}", id)?;
                return Ok(());
            };
            if !yes && !confirm(&format!("Delete \"{}\"?", label), input, out)? {
                writeln!(out, "Operation canceled.")?;
                return Ok(());
            }
            store.delete(id)?;
            writeln!(out, "Snippet deleted successfully")?;
        }
        Commands::Move { from, to } => {
            store.reorder(from, to)?;
            writeln!(out, "Snippet moved from {} to {}", from, to)?;
        }
        Commands::Copy { id } => match store.get(id) {
            Some(snippet) => {
                clipboard.write_text(&snippet.content)?;
                writeln!(out, "Copied \"{}\"", snippet.label)?;
                out.flush()?;
            }
            None => writeln!(out, "No snippet with id {}", id)?,
        },
        Commands::Path => {}
    }
    Ok(())
}

fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
