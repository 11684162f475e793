//! Interactive menu over one in-memory catalog.
//!
//! # Responsibility
//! - Read commands and field values line by line.
//! - Call catalog operations and print their results.
//!
//! # Invariants
//! - Catalog errors are printed and the loop continues.
//! - End of input ends the session like `exit`.

use crate::error::CliError;
use bookshelf_core::{
    parse_year, resolve_catalog_path, AttributeQuery, Book, BookId, BookPatch, BookStore,
    Catalog, FlatFileStore, NewBook,
};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "Menu: 1)Add 2)Edit 3)List 4)Find 5)SearchByAttr 6)Save 7)Load 8)Delete 9)Recommend 10)Stats 11)Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add,
    Edit,
    List,
    Find,
    Search,
    Save,
    Load,
    Delete,
    Recommend,
    Stats,
    Exit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        let command = match input.trim().to_lowercase().as_str() {
            "1" | "add" => Self::Add,
            "2" | "edit" => Self::Edit,
            "3" | "list" => Self::List,
            "4" | "find" => Self::Find,
            "5" | "search" | "searchbyattr" => Self::Search,
            "6" | "save" => Self::Save,
            "7" | "load" => Self::Load,
            "8" | "delete" | "del" => Self::Delete,
            "9" | "recommend" => Self::Recommend,
            "10" | "stats" => Self::Stats,
            "11" | "exit" | "quit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// Session options resolved from settings and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellOptions {
    pub data_dir: PathBuf,
    pub default_file: String,
    pub top_authors: usize,
}

pub(crate) struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    options: ShellOptions,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub(crate) fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self::with_rng(input, output, options, StdRng::from_entropy())
    }

    pub(crate) fn with_rng(input: R, output: W, options: ShellOptions, rng: StdRng) -> Self {
        Self {
            input,
            output,
            catalog: Catalog::new(),
            options,
            rng,
        }
    }

    #[cfg(test)]
    pub(crate) fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[cfg(test)]
    pub(crate) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Runs the menu loop until `exit` or end of input.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{MENU}")?;
            let line = match self.prompt("Command (number or word):") {
                Ok(line) => line,
                Err(CliError::InputClosed) => return Ok(()),
                Err(err) => return Err(err),
            };

            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "Unknown command.")?;
                continue;
            };
            if command == Command::Exit {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            }

            match self.dispatch(command) {
                Ok(()) => {}
                Err(CliError::InputClosed) => return Ok(()),
                Err(CliError::Io(err)) => return Err(CliError::Io(err)),
                Err(err) => {
                    warn!(
                        "event=shell_command module=cli status=error command={:?} error={}",
                        command, err
                    );
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<(), CliError> {
        match command {
            Command::Add => self.handle_add(),
            Command::Edit => self.handle_edit(),
            Command::List => self.handle_list(),
            Command::Find => self.handle_find(),
            Command::Search => self.handle_search(),
            Command::Save => self.handle_save(),
            Command::Load => self.handle_load(),
            Command::Delete => self.handle_delete(),
            Command::Recommend => self.handle_recommend(),
            Command::Stats => self.handle_stats(),
            Command::Exit => Ok(()),
        }
    }

    fn handle_add(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Add ---")?;
        let title = self.prompt_not_empty("Title:")?;
        let author = self.prompt_not_empty("Author:")?;
        let year = self.prompt_year("Year (optional):")?;
        let isbn = self.prompt("ISBN (optional):")?;
        let genres = self.prompt("Genres (comma separated, optional):")?;

        self.catalog.create(NewBook {
            title,
            author,
            year,
            isbn: Some(isbn),
            genres: Some(genres),
        });
        writeln!(self.output, "Added.")?;
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Edit ---")?;
        self.print_brief_list()?;
        let id = BookId::from(self.prompt_not_empty("ID to edit:")?);
        let Some(current) = self.catalog.find_by_id(&id) else {
            writeln!(self.output, "Not found.")?;
            return Ok(());
        };
        let details = current.detail_line();
        writeln!(self.output, "Current: {details}")?;

        let title = self.prompt("New title (Enter to keep):")?;
        let author = self.prompt("New author (Enter to keep):")?;
        let year = self.prompt("New year (Enter to keep):")?;
        if !year.is_empty() && parse_year(&year).is_none() {
            writeln!(self.output, "Bad year, ignored.")?;
        }
        let isbn = self.prompt("New ISBN (Enter to keep):")?;
        let genres = self.prompt("New genres (Enter to keep):")?;

        let patch = BookPatch {
            title: Some(title),
            author: Some(author),
            year: Some(year),
            isbn: Some(isbn),
            genres: Some(genres),
        };
        if patch.is_empty() {
            writeln!(self.output, "Nothing changed.")?;
            return Ok(());
        }
        if self.catalog.update(&id, &patch).is_some() {
            writeln!(self.output, "Updated.")?;
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- List ---")?;
        let books = self.catalog.list_all();
        if books.is_empty() {
            writeln!(self.output, "No books.")?;
            return Ok(());
        }
        for book in &books {
            writeln!(self.output, "{}", book.detail_line())?;
        }
        writeln!(self.output, "Total: {}", books.len())?;
        Ok(())
    }

    fn handle_find(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Find ---")?;
        let query = self.prompt_not_empty("Query:")?;
        let lines = detail_lines(&self.catalog.find_full_text(&query));
        self.print_results(&lines)
    }

    fn handle_search(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- SearchByAttr ---")?;
        let title = self.prompt("Title (partial):")?;
        let author = self.prompt("Author (partial):")?;
        let year = self.prompt_year("Year (exact):")?;
        let isbn = self.prompt("ISBN (partial):")?;
        let genres = self.prompt("Genres (partial):")?;

        let query = AttributeQuery {
            title: Some(title),
            author: Some(author),
            year,
            isbn: Some(isbn),
            genres: Some(genres),
        };
        let lines = detail_lines(&self.catalog.search_by_attributes(&query));
        self.print_results(&lines)
    }

    fn handle_save(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Save ---")?;
        let path = self.prompt_catalog_path()?;
        self.catalog.save(&path)?;
        writeln!(self.output, "Saved to: {}", path.display())?;
        Ok(())
    }

    fn handle_load(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Load ---")?;
        let path = self.prompt_catalog_path()?;
        let store = FlatFileStore::new(&path);
        let preview = store.load()?;
        if preview.is_empty() {
            writeln!(self.output, "No books in file.")?;
            return Ok(());
        }

        let mode = self.prompt("1)Replace 2)Append (1/2):")?;
        let loaded = self.catalog.load_from(&store, mode == "1")?;
        writeln!(self.output, "Loaded: {loaded}")?;
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Delete ---")?;
        self.print_brief_list()?;
        let id = BookId::from(self.prompt_not_empty("ID to delete:")?);
        let confirmation = self.prompt("Confirm deletion (yes):")?;
        if !confirmation.eq_ignore_ascii_case("yes") {
            writeln!(self.output, "Cancelled.")?;
            return Ok(());
        }
        let message = if self.catalog.remove_by_id(&id) {
            "Deleted."
        } else {
            "Not found."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn handle_recommend(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Recommend ---")?;
        let pick = self
            .catalog
            .recommend_random(&mut self.rng)
            .map(Book::detail_line);
        match pick {
            Some(details) => writeln!(self.output, "Recommend: {details}")?,
            None => writeln!(self.output, "No books.")?,
        }
        Ok(())
    }

    fn handle_stats(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "--- Stats ---")?;
        let stats = self.catalog.stats(self.options.top_authors);
        writeln!(self.output, "Total: {}", stats.total)?;
        writeln!(self.output, "Top authors:")?;
        for entry in &stats.top_authors {
            writeln!(self.output, "  {} — {}", entry.author, entry.count)?;
        }
        match stats.max_year {
            Some(year) => writeln!(self.output, "Max year: {year}")?,
            None => writeln!(self.output, "Max year: N/A")?,
        }
        Ok(())
    }

    fn print_brief_list(&mut self) -> Result<(), CliError> {
        let lines: Vec<String> = self
            .catalog
            .list_all()
            .iter()
            .map(Book::summary_line)
            .collect();
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn print_results(&mut self, lines: &[String]) -> Result<(), CliError> {
        if lines.is_empty() {
            writeln!(self.output, "Not found.")?;
            return Ok(());
        }
        writeln!(self.output, "Found: {}", lines.len())?;
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn prompt_catalog_path(&mut self) -> Result<PathBuf, CliError> {
        let message = format!("File name (default {}):", self.options.default_file);
        let name = self.prompt(&message)?;
        Ok(resolve_catalog_path(
            &self.options.data_dir,
            &name,
            &self.options.default_file,
        ))
    }

    /// Prints `message` and returns the next input line, trimmed.
    fn prompt(&mut self, message: &str) -> Result<String, CliError> {
        write!(self.output, "{message} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_not_empty(&mut self, message: &str) -> Result<String, CliError> {
        loop {
            let value = self.prompt(message)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "Must not be empty.")?;
        }
    }

    fn prompt_year(&mut self, message: &str) -> Result<Option<i32>, CliError> {
        let text = self.prompt(message)?;
        if text.is_empty() {
            return Ok(None);
        }
        let year = parse_year(&text);
        if year.is_none() {
            writeln!(self.output, "Bad year, ignored.")?;
        }
        Ok(year)
    }
}

fn detail_lines(books: &[&Book]) -> Vec<String> {
    books.iter().map(|book| book.detail_line()).collect()
}
