use std::io::{self, BufRead, Write};

use application::service::{
    AddBookService, GetBookService, HistoryService, IssueBookService, LoadCatalogService,
    ReturnBookService,
};
use application::transfer::{CreateBookDto, GetBookDto, IssueBookDto, ReturnBookDto};
use error_stack::Report;
use kernel::{IssuedTo, KernelError};
use time::PrimitiveDateTime;

use crate::handler::AppModule;

const MENU: [(&str, &str); 6] = [
    ("D", "Display Books"),
    ("I", "Issue Books"),
    ("A", "Add Books"),
    ("R", "Return Books"),
    ("H", "Transaction History"),
    ("Q", "Quit"),
];

/// Menu loop over any line source, so sessions can be scripted.
pub struct Console<R, W> {
    input: R,
    output: W,
    clock: Box<dyn Fn() -> PrimitiveDateTime>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clock: impl Fn() -> PrimitiveDateTime + 'static) -> Self {
        Self {
            input,
            output,
            clock: Box::new(clock),
        }
    }

    pub fn run(&mut self, app: &mut AppModule) -> io::Result<()> {
        if let Err(report) = app.load_catalog() {
            writeln!(self.output, "Warning: {}", describe(&report))?;
        }

        loop {
            writeln!(
                self.output,
                "\n------------------- Welcome to {} Library management system --------- \n",
                app.library_name()
            )?;
            for (key, label) in MENU {
                writeln!(self.output, "Press {key} To {label}")?;
            }
            let Some(key) = self.prompt("Press key: ")? else {
                writeln!(self.output, "Exiting the system. Goodbye!")?;
                return Ok(());
            };

            match key.trim().to_uppercase().as_str() {
                "D" => {
                    writeln!(self.output, "\nCurrent Selection: Display Books\n")?;
                    self.display_books(app)?;
                }
                "I" => {
                    writeln!(self.output, "\nCurrent Selection: Issue Books\n")?;
                    self.issue_book(app)?;
                }
                "A" => {
                    writeln!(self.output, "\nCurrent Selection: Add Book\n")?;
                    self.add_book(app)?;
                }
                "R" => {
                    writeln!(self.output, "\nCurrent Selection: Return Books\n")?;
                    self.return_book(app)?;
                }
                "H" => {
                    writeln!(self.output, "\nCurrent Selection: Transaction History\n")?;
                    self.show_history(app)?;
                }
                "Q" => {
                    writeln!(self.output, "Exiting the system. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option, please try again.")?,
            }
        }
    }

    fn display_books(&mut self, app: &AppModule) -> io::Result<()> {
        writeln!(
            self.output,
            "------------------------- List of books ------------------------"
        )?;
        writeln!(self.output, "Books ID \t Title")?;
        writeln!(
            self.output,
            "--------------------------------------------------------------"
        )?;
        for book in app.list_books() {
            writeln!(self.output, "{} \t\t {} -[ {} ]", book.id, book.title, book.status)?;
        }
        Ok(())
    }

    fn issue_book(&mut self, app: &mut AppModule) -> io::Result<()> {
        let Some(book_id) = self.prompt("Enter book ID: ")? else {
            return Ok(());
        };
        let book = match app.get_book(GetBookDto { id: book_id.clone() }) {
            Ok(book) => book,
            Err(report) => return writeln!(self.output, "{}", describe(&report)),
        };
        if let (Some(holder), Some(issued_at)) = (&book.holder_name, &book.issued_at) {
            return writeln!(
                self.output,
                "This book is already issued to {holder} on {issued_at}"
            );
        }

        let Some(holder_name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        let dto = IssueBookDto {
            book_id,
            holder_name,
            issued_at: (self.clock)(),
        };
        match app.issue_book(dto) {
            Ok(_) => writeln!(self.output, "Book issued successfully!"),
            Err(report) => writeln!(self.output, "{}", describe(&report)),
        }
    }

    /// Asks again until the title is accepted or input runs out.
    fn add_book(&mut self, app: &mut AppModule) -> io::Result<()> {
        while let Some(title) = self.prompt("Enter book title: ")? {
            match app.add_book(CreateBookDto { title }) {
                Ok(id) => return writeln!(self.output, "Book added successfully! (ID {id})"),
                Err(report) if report.current_context() == &KernelError::Validation => {
                    writeln!(self.output, "{}", describe(&report))?;
                }
                Err(report) => return writeln!(self.output, "{}", describe(&report)),
            }
        }
        Ok(())
    }

    fn return_book(&mut self, app: &mut AppModule) -> io::Result<()> {
        let Some(book_id) = self.prompt("Enter book ID: ")? else {
            return Ok(());
        };
        let book = match app.get_book(GetBookDto { id: book_id.clone() }) {
            Ok(book) => book,
            Err(report) => return writeln!(self.output, "{}", describe(&report)),
        };
        if book.holder_name.is_none() {
            return writeln!(
                self.output,
                "This book is already available in the library. Please check your book ID."
            );
        }

        let Some(return_date) = self.prompt("Enter return date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let returned = match app.return_book(ReturnBookDto {
            book_id,
            return_date,
        }) {
            Ok(returned) => returned,
            Err(report) => return writeln!(self.output, "{}", describe(&report)),
        };
        let transaction = returned.transaction;
        if transaction.late_fee > 0 {
            writeln!(
                self.output,
                "Book '{}' is {} days overdue.",
                transaction.book_title, returned.overdue_days
            )?;
            writeln!(self.output, "Late fee: ${}", transaction.late_fee)?;
        } else {
            writeln!(
                self.output,
                "Book '{}' returned on time. No late fee.",
                transaction.book_title
            )?;
        }
        writeln!(self.output, "Successfully updated!")
    }

    fn show_history(&mut self, app: &AppModule) -> io::Result<()> {
        let history = app.history();
        if history.is_empty() {
            return writeln!(self.output, "No transactions yet.");
        }
        for transaction in history {
            writeln!(
                self.output,
                "{:<6} {} '{}' by {} | issued {} | returned {} | fee ${}",
                transaction.kind,
                transaction.book_id,
                transaction.book_title,
                transaction.member_name,
                transaction.issue_date,
                transaction.return_date.as_deref().unwrap_or("-"),
                transaction.late_fee
            )?;
        }
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn describe(report: &Report<KernelError>) -> String {
    let context = report.current_context();
    match context {
        KernelError::AlreadyIssued => report
            .downcast_ref::<IssuedTo>()
            .map_or_else(|| context.to_string(), ToString::to_string),
        KernelError::Validation | KernelError::Io => report
            .downcast_ref::<String>()
            .map_or_else(|| context.to_string(), |detail| format!("{context}: {detail}")),
        _ => context.to_string(),
    }
}
