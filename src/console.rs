//! Console collaborator
//!
//! Line-oriented terminal interaction: prompts, centered headings,
//! word-wrapped article text, and the paginated option list used to pick
//! from disambiguation topics and search results. The quit vocabulary is
//! honored at every prompt.

use std::io::{self, BufRead, Write};

/// Default number of options per page of results
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default column width for wrapped text and headings
pub const DEFAULT_WRAP_WIDTH: usize = 100;

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];
const CANCEL_COMMANDS: [&str; 2] = ["c", "cancel"];
const MORE_COMMANDS: [&str; 2] = ["m", "more"];

/// One line of user input, with quit requests already recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A trimmed input line
    Line(String),
    /// A quit command or end of input
    Quit,
}

/// Outcome of a paginated selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChoice {
    /// Zero-based index of the chosen option
    Selected(usize),
    /// The user cancelled back to a new search
    Cancelled,
    /// The user asked to quit the program
    Quit,
}

/// What a line typed at the pagination prompt means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionCmd {
    More,
    Cancel,
    Index(usize),
    Invalid,
}

/// Parse a pagination-prompt line against `total` options.
fn parse_selection(line: &str, total: usize) -> SelectionCmd {
    if MORE_COMMANDS.contains(&line) {
        return SelectionCmd::More;
    }
    if CANCEL_COMMANDS.contains(&line) {
        return SelectionCmd::Cancel;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=total).contains(&n) => SelectionCmd::Index(n - 1),
        _ => SelectionCmd::Invalid,
    }
}

/// Greedy word wrap at `width` columns. Words longer than the width get
/// a line of their own; no hyphenation.
fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Terminal front-end for the interactive session
#[derive(Debug, Clone)]
pub struct Console {
    page_size: usize,
    wrap_width: usize,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_WRAP_WIDTH)
    }
}

impl Console {
    /// Create a console with the given pagination and wrapping settings.
    pub fn new(page_size: usize, wrap_width: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            wrap_width: wrap_width.max(1),
        }
    }

    /// Print a section heading centered between full-width rules.
    pub fn print_heading(&self, heading: &str) {
        let rule = "-".repeat(self.wrap_width);
        let pad = self.wrap_width.saturating_sub(heading.chars().count()) / 2;
        println!("{rule}");
        println!("{}{heading}", " ".repeat(pad));
        println!("{rule}");
    }

    /// Print `text` word-wrapped to the configured width.
    pub fn print_wrapped(&self, text: &str) {
        println!("{}", wrap(text, self.wrap_width));
    }

    /// Print the new-search prompt.
    pub fn prompt_new_search(&self) {
        println!("\nWhat would you like to learn about?");
    }

    /// Read one line of input. End of input and the quit commands both
    /// come back as [`Input::Quit`].
    pub fn read_input(&self) -> io::Result<Input> {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(Input::Quit);
        }
        let line = line.trim().to_string();
        if QUIT_COMMANDS.contains(&line.as_str()) {
            return Ok(Input::Quit);
        }
        Ok(Input::Line(line))
    }

    /// Show a paginated option list and read a selection.
    ///
    /// `m`/`more` pages forward ("No More to Show" past the end),
    /// `c`/`cancel` aborts, a valid 1-based number selects. Invalid input
    /// reprompts without reprinting the current page.
    pub fn paginate(&self, options: &[String]) -> io::Result<PageChoice> {
        let mut pos = 0;
        let mut show_page = true;
        loop {
            if show_page {
                for (index, option) in options.iter().enumerate().skip(pos).take(self.page_size) {
                    println!("\t{}. {option}", index + 1);
                }
                println!("Which topic would you like to explore?");
            }
            println!("See more (m), Cancel (c), Or enter a line number:");

            let line = match self.read_input()? {
                Input::Quit => return Ok(PageChoice::Quit),
                Input::Line(line) => line,
            };
            match parse_selection(&line, options.len()) {
                SelectionCmd::More => {
                    if pos + self.page_size < options.len() {
                        pos += self.page_size;
                        show_page = true;
                    } else {
                        println!("No More to Show");
                        show_page = false;
                    }
                }
                SelectionCmd::Cancel => return Ok(PageChoice::Cancelled),
                SelectionCmd::Index(index) => return Ok(PageChoice::Selected(index)),
                SelectionCmd::Invalid => {
                    println!("Invalid Selection");
                    show_page = false;
                }
            }
        }
    }
}
