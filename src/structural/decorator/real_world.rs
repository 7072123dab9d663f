// Decorator - library items made borrowable.
// `Borrowable` wraps any item, tracks who has a copy and forwards the rest.

use std::io::Write;

use tracing::debug;

use crate::{PatternError, Result};

pub trait LibraryItem {
    fn title(&self) -> &str;
    fn copies(&self) -> u32;
    fn set_copies(&mut self, copies: u32);
    fn display(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct Book {
    author: String,
    title: String,
    copies: u32,
}

impl Book {
    pub fn new(author: &str, title: &str, copies: u32) -> Self {
        Self {
            author: author.to_string(),
            title: title.to_string(),
            copies,
        }
    }
}

impl LibraryItem for Book {
    fn title(&self) -> &str {
        &self.title
    }

    fn copies(&self) -> u32 {
        self.copies
    }

    fn set_copies(&mut self, copies: u32) {
        self.copies = copies;
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Book ------ ")?;
        writeln!(out, " Author: {}", self.author)?;
        writeln!(out, " Title: {}", self.title)?;
        writeln!(out, " # Copies: {}", self.copies)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Video {
    director: String,
    title: String,
    copies: u32,
    play_time: u32,
}

impl Video {
    pub fn new(director: &str, title: &str, copies: u32, play_time: u32) -> Self {
        Self {
            director: director.to_string(),
            title: title.to_string(),
            copies,
            play_time,
        }
    }
}

impl LibraryItem for Video {
    fn title(&self) -> &str {
        &self.title
    }

    fn copies(&self) -> u32 {
        self.copies
    }

    fn set_copies(&mut self, copies: u32) {
        self.copies = copies;
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Video ----- ")?;
        writeln!(out, " Director: {}", self.director)?;
        writeln!(out, " Title: {}", self.title)?;
        writeln!(out, " # Copies: {}", self.copies)?;
        writeln!(out, " Playtime: {}", self.play_time)?;
        writeln!(out)?;
        Ok(())
    }
}

pub struct Borrowable<I: LibraryItem> {
    item: I,
    borrowers: Vec<String>,
}

impl<I: LibraryItem> Borrowable<I> {
    pub fn new(item: I) -> Self {
        Self {
            item,
            borrowers: Vec::new(),
        }
    }

    pub fn borrowers(&self) -> &[String] {
        &self.borrowers
    }

    pub fn borrow_item(&mut self, name: &str) -> Result<()> {
        let copies = self.item.copies();
        if copies == 0 {
            return Err(PatternError::NoCopiesLeft(self.item.title().to_string()));
        }
        debug!(title = self.item.title(), borrower = name, "borrow");
        self.borrowers.push(name.to_string());
        self.item.set_copies(copies - 1);
        Ok(())
    }

    pub fn return_item(&mut self, name: &str) -> Result<()> {
        let index = self
            .borrowers
            .iter()
            .position(|borrower| borrower == name)
            .ok_or_else(|| PatternError::unknown_key("borrower", name))?;
        self.borrowers.remove(index);
        self.item.set_copies(self.item.copies() + 1);
        Ok(())
    }

    pub fn into_inner(self) -> I {
        self.item
    }
}

impl<I: LibraryItem> LibraryItem for Borrowable<I> {
    fn title(&self) -> &str {
        self.item.title()
    }

    fn copies(&self) -> u32 {
        self.item.copies()
    }

    fn set_copies(&mut self, copies: u32) {
        self.item.set_copies(copies);
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        self.item.display(out)?;
        for borrower in &self.borrowers {
            writeln!(out, " borrower: {borrower}")?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let book = Book::new("Worley", "Inside ASP.NET", 10);
    book.display(out)?;

    let video = Video::new("Spielberg", "Jaws", 23, 92);
    video.display(out)?;

    writeln!(out)?;
    writeln!(out, "Making video borrowable:")?;

    let mut borrow_video = Borrowable::new(video);
    borrow_video.borrow_item("Customer #1")?;
    borrow_video.borrow_item("Customer #2")?;
    borrow_video.display(out)
}
