use std::io::{self, Write};

use chrono::{DateTime, Local};
use rusqlite::Connection;
use tracing::error;

use crate::cli::person_list_panel;
use crate::config::UserPrefs;
use crate::db::storage;
use crate::error::AbError;
use crate::logic::Logic;

pub struct CLIContext {
    pub logic: Logic,
    pub conn: Connection,
    pub prefs: UserPrefs,
    saved_revision: u64,
    shown_view_revision: Option<u64>,
    last_saved_at: Option<DateTime<Local>>,
}

impl CLIContext {
    pub fn new(logic: Logic, conn: Connection, prefs: UserPrefs) -> Self {
        let saved_revision = logic.model().book_revision();
        Self {
            logic,
            conn,
            prefs,
            saved_revision,
            shown_view_revision: None,
            last_saved_at: None,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Writes the address book out if any command changed it since the last save.
    pub fn save_if_changed(&mut self) {
        let revision = self.logic.model().book_revision();
        if revision == self.saved_revision {
            return;
        }

        match storage::save_address_book(&mut self.conn, self.logic.address_book()) {
            Ok(saved_at) => {
                self.saved_revision = revision;
                self.last_saved_at = Some(saved_at);
                println!("{}", person_list_panel::render_status(self.last_saved_at));
            }
            Err(e) => {
                error!(error = %e, "failed to save address book");
                println!("Could not save data to file: {}", e);
            }
        }
    }

    /// Prints the person list again if what it shows has changed.
    pub fn refresh_view(&mut self) {
        let revision = self.logic.model().view_revision();
        if self.shown_view_revision == Some(revision) {
            return;
        }
        self.shown_view_revision = Some(revision);
        println!();
        println!(
            "{}",
            person_list_panel::render_list(&self.logic.filtered_person_list())
        );
        println!();
    }

    /// Print an error.
    pub fn print_error(&self, e: &AbError) {
        if e.is_user_facing() {
            println!("{}", e);
        } else {
            println!("Error: {}", e);
        }
    }
}
