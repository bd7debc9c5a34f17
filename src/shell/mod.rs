//! Interactive menu shell
//!
//! The peripheral harness around the catalog: prints the numbered menu,
//! validates user input, and delegates to the session. Generic over its
//! input and output streams so the whole loop can be driven from tests.
//!
//! The only suspension point in the program is the blocking read on the
//! input stream; choice 9 (or end of input) ends the loop and the process
//! exits 0.

use crate::catalog::{Catalog, Course};
use crate::error::Result;
use crate::loader;
use crate::session::Session;
use std::io::{BufRead, Write};
use std::path::Path;

/// Fixed exit choice, independent of how many menu options there are
pub const EXIT_CHOICE: usize = 9;

/// Menu choices 1..=N, in dispatch order
const MENU_OPTIONS: &[&str] = &["Load Data", "Print Course List", "Print Course Detail"];

/// Extension of candidate data files
const DATA_EXTENSION: &str = "csv";

/// Interactive shell driving a [`Session`] through a numbered menu
pub struct Shell<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell reading menu choices from `input` and writing to
    /// `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
        }
    }

    /// Run the read-validate-dispatch loop until the user exits
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt_menu_choice()? else {
                break;
            };

            match choice {
                1 => self.action_load()?,
                2 => self.action_list()?,
                3 => self.action_detail()?,
                EXIT_CHOICE => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Course Planner")?;
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }
        writeln!(self.output, "{EXIT_CHOICE}. Exit")?;
        Ok(())
    }

    /// Prompt until the user enters an integer in `min..=max`.
    ///
    /// Bad input re-prompts with a message naming the bounds and never
    /// panics. Returns `None` on end of input.
    fn prompt_index(&mut self, prompt: &str, min: usize, max: usize) -> Result<Option<usize>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<usize>() {
                Ok(n) if n >= min && n <= max => return Ok(Some(n)),
                _ => writeln!(
                    self.output,
                    "Invalid input. Enter a number between {min} and {max}."
                )?,
            }
        }
    }

    /// Prompt for a menu choice: 1..=N for actions, or the fixed exit choice
    fn prompt_menu_choice(&mut self) -> Result<Option<usize>> {
        loop {
            match self.prompt_index("What would you like to do? ", 1, EXIT_CHOICE)? {
                None => return Ok(None),
                Some(n) if n <= MENU_OPTIONS.len() || n == EXIT_CHOICE => return Ok(Some(n)),
                Some(_) => {
                    let choices: Vec<String> =
                        (1..=MENU_OPTIONS.len()).map(|i| i.to_string()).collect();
                    writeln!(
                        self.output,
                        "Invalid option. Please select {}, or {}.",
                        choices.join(", "),
                        EXIT_CHOICE
                    )?;
                }
            }
        }
    }

    /// Menu action 1: discover data files, let the user pick one, load it
    fn action_load(&mut self) -> Result<()> {
        let files = match loader::discover_files(Path::new("."), DATA_EXTENSION) {
            Ok(files) => files,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            }
        };

        if files.is_empty() {
            writeln!(
                self.output,
                "No {DATA_EXTENSION} files found in the current directory."
            )?;
            return Ok(());
        }

        writeln!(self.output, "Available {DATA_EXTENSION} files:")?;
        for (i, file) in files.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, file.display())?;
        }

        let Some(selection) =
            self.prompt_index("Select a file to load (enter number): ", 1, files.len())?
        else {
            return Ok(());
        };

        let path = &files[selection - 1];
        match self.session.load_file(path) {
            Ok(stats) => writeln!(
                self.output,
                "Loaded {} course(s) from {}.",
                stats.loaded,
                path.display()
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    /// Menu action 2: print every course as "number, title" in ascending
    /// course-number order
    fn action_list(&mut self) -> Result<()> {
        match self.session.catalog() {
            Ok(catalog) => {
                let listing = render_course_list(catalog);
                write!(self.output, "{listing}")?;
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    /// Menu action 3: enumerate courses, let the user pick one, print its
    /// detail
    fn action_detail(&mut self) -> Result<()> {
        // The enumeration uses the same ascending-number order as the course
        // list, so a numeric selection maps to exactly one course.
        let listing: Vec<(String, String)> = match self.session.catalog() {
            Ok(catalog) => catalog
                .list()
                .map(|(n, t)| (n.to_string(), t.to_string()))
                .collect(),
            Err(e) => {
                writeln!(self.output, "{e}")?;
                return Ok(());
            }
        };

        if listing.is_empty() {
            writeln!(self.output, "No courses available.")?;
            return Ok(());
        }

        writeln!(self.output, "Available Courses:")?;
        for (i, (number, title)) in listing.iter().enumerate() {
            writeln!(self.output, "{}. {} - {}", i + 1, number, title)?;
        }

        let Some(selection) =
            self.prompt_index("Select a course to view: ", 1, listing.len())?
        else {
            return Ok(());
        };

        let detail = {
            let catalog = self.session.catalog()?;
            render_course_detail(catalog.get(&listing[selection - 1].0)?)
        };
        write!(self.output, "{detail}")?;
        writeln!(self.output)?;
        Ok(())
    }
}

/// Format the full course list, one "number, title" line per course
pub fn render_course_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (number, title) in catalog.list() {
        out.push_str(&format!("{number}, {title}\n"));
    }
    out
}

/// Format one course's detail view.
///
/// The prerequisites line is omitted entirely when the course has none.
pub fn render_course_detail(course: &Course) -> String {
    let mut out = format!("{}, {}\n", course.number, course.title);
    if course.has_prerequisites() {
        out.push_str(&format!(
            "Prerequisites: {}\n",
            course.prerequisites.join(", ")
        ));
    }
    out
}
