use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::BookApi;
use crate::book_tui::ui::truncate_to_width;
use crate::models::{Book, BookPage, ListQuery};

#[derive(Parser)]
#[command(name = "bookdesk")]
#[command(about = "Terminal client for browsing and editing a REST book catalog")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides BOOKDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch the interactive terminal UI (default)
    Tui,

    /// Print one page of books sorted by title
    List {
        /// Only books whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Print every field of one book
    Show {
        /// Book id
        id: String,
    },
}

/// Run a non-interactive command, printing to stdout
pub async fn run_command(command: &Commands, api: &dyn BookApi, page_size: u32) -> Result<()> {
    match command {
        Commands::Tui => Ok(()),
        Commands::List { search, page } => {
            let query = ListQuery::new(search.as_deref().unwrap_or("").trim(), *page, page_size);
            let result = api
                .list_books(&query)
                .await
                .with_context(|| format!("Failed to list books (page {})", page))?;
            print!("{}", format_book_page(&result, *page));
            Ok(())
        }
        Commands::Show { id } => {
            let book = api
                .get_book(id)
                .await
                .with_context(|| format!("Failed to fetch book {}", id))?;
            print!("{}", format_book_details(&book));
            Ok(())
        }
    }
}

/// Fixed-width table of one page, followed by the page position
pub fn format_book_page(page: &BookPage, page_number: u32) -> String {
    if page.books.is_empty() {
        return "No Records Found\n".to_string();
    }

    let mut out = format!(
        "{:<26} {:<40} {:<22} {:<6} {:<14}\n",
        "ID", "Title", "Author", "Year", "ISBN"
    );
    out.push_str(&"-".repeat(112));
    out.push('\n');

    for book in &page.books {
        out.push_str(&format!(
            "{:<26} {:<40} {:<22} {:<6} {:<14}\n",
            truncate_to_width(&book.id, 26),
            truncate_to_width(&book.title, 40),
            truncate_to_width(&book.author, 22),
            book.published_year,
            book.isbn
        ));
    }

    out.push('\n');
    out.push_str(&format!("Page {} of {}\n", page_number, page.total_pages.max(1)));
    out
}

pub fn format_book_details(book: &Book) -> String {
    format!(
        "ID:             {}\n\
         Title:          {}\n\
         Author:         {}\n\
         Published Year: {}\n\
         ISBN:           {}\n\
         \n\
         {}\n",
        book.id, book.title, book.author, book.published_year, book.isbn, book.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{book, MemoryBookApi};

    #[test]
    fn test_parse_list_arguments() {
        let cli = Cli::try_parse_from([
            "bookdesk",
            "--api-url",
            "http://books:5000",
            "list",
            "-s",
            "dune",
            "-p",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://books:5000"));
        assert_eq!(
            cli.command,
            Some(Commands::List {
                search: Some("dune".to_string()),
                page: 2
            })
        );

        assert!(Cli::try_parse_from(["bookdesk", "list", "--page", "0"]).is_err());
        assert_eq!(Cli::try_parse_from(["bookdesk"]).unwrap().command, None);
    }

    #[test]
    fn test_format_book_page() {
        let page = BookPage {
            books: vec![book("1", "Kindred")],
            total_pages: 3,
        };
        let text = format_book_page(&page, 2);
        assert!(text.contains("Kindred"));
        assert!(text.contains("978-0441478125"));
        assert!(text.ends_with("Page 2 of 3\n"));

        assert_eq!(format_book_page(&BookPage::default(), 1), "No Records Found\n");
    }

    #[tokio::test]
    async fn test_show_reports_missing_book() {
        let api = MemoryBookApi::default();
        let err = run_command(&Commands::Show { id: "nope".into() }, &api, 10)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to fetch book nope"));
    }
}
