pub mod context;
pub mod person_list_panel;

use rusqlite::Connection;
use tracing::{info, warn};

use crate::config::{self, Config, UserPrefs};
use crate::db::storage;
use crate::error::{AbError, AbResult};
use crate::logic::Logic;
use crate::model::{sample_data, AddressBook};
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(config: &Config) -> AbResult<()> {
    let prefs: UserPrefs = config::load_or_default(&config.user_prefs_file_path);

    println!("{} - {}", config.app_title, prefs.address_book_name);
    println!("Type 'help' for commands, 'exit' to quit.");

    let conn = storage::open(&prefs.address_book_file_path)?;
    let book = initial_address_book(&conn);

    let mut ctx = CLIContext::new(Logic::new(book), conn, prefs);
    repl_loop(&mut ctx);

    config::save_json_file(&config.user_prefs_file_path, &ctx.prefs)?;
    info!("exiting");
    Ok(())
}

/// Starts with sample data when nothing has been saved yet, and with an
/// empty book when the stored one cannot be read.
fn initial_address_book(conn: &Connection) -> AddressBook {
    let stored = storage::has_saved_book(conn).and_then(|saved| {
        if saved {
            storage::load_address_book(conn).map(Some)
        } else {
            Ok(None)
        }
    });

    match stored {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!("no saved address book, starting with sample data");
            sample_data::sample_address_book()
        }
        Err(e @ AbError::DataConversion(_)) => {
            warn!(error = %e, "data file not in the correct format, starting with an empty address book");
            println!("Data file not in the correct format. Starting with an empty address book.");
            AddressBook::new()
        }
        Err(e) => {
            warn!(error = %e, "problem reading the data file, starting with an empty address book");
            println!("Problem while reading from the file. Starting with an empty address book.");
            AddressBook::new()
        }
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    ctx.refresh_view();

    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        if input.trim().is_empty() {
            continue;
        }

        match ctx.logic.execute(&input) {
            Ok(result) => {
                println!("{}", result.feedback);
                if let Some(person) = &result.selected {
                    println!();
                    println!(
                        "{}",
                        person_list_panel::render_details(person, ctx.logic.address_book())
                    );
                }
                ctx.save_if_changed();
                if result.exit {
                    break;
                }
                ctx.refresh_view();
            }
            Err(e) => ctx.print_error(&e),
        }
    }
}
