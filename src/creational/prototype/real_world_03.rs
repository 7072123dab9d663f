// Prototype - page with an author back-reference.
// Cloning a page gives a new title and date, keeps the author and drops comments.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::Result;

#[derive(Debug)]
pub struct Author {
    name: String,
    pages: RefCell<Vec<String>>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            pages: RefCell::new(Vec::new()),
        })
    }

    fn add_page(&self, title: &str) {
        self.pages.borrow_mut().push(title.to_string());
    }

    pub fn pages(&self) -> Vec<String> {
        self.pages.borrow().clone()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub body: String,
    pub author: Rc<Author>,
    pub date: DateTime<Local>,
    pub comments: Vec<String>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: Rc<Author>) -> Self {
        let title = title.into();
        author.add_page(&title);
        Self {
            title,
            body: body.into(),
            author,
            date: Local::now(),
            comments: Vec::new(),
        }
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }
}

impl Clone for Page {
    fn clone(&self) -> Self {
        Page::new(
            format!("Copy of {}", self.title),
            self.body.clone(),
            Rc::clone(&self.author),
        )
    }
}

pub fn print(page: &Page, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Title: {}", page.title)?;
    writeln!(out, "Body: {}", page.body)?;
    writeln!(out, "Author: {}", page.author)?;
    writeln!(out, "Date: {}", page.date.format("%Y-%m-%d %H:%M:%S"))?;

    if !page.comments.is_empty() {
        writeln!(out, "Comments:")?;
        for comment in &page.comments {
            writeln!(out, "\t{comment}")?;
        }
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let author = Author::new("John Smith");

    let mut original = Page::new("Title of first page", "Body of first page.", author);
    original.add_comment("First comment");
    original.add_comment("Second comment");
    original.add_comment("Third comment");

    let copied = original.clone();

    writeln!(out, "Original page:")?;
    print(&original, out)?;

    writeln!(out)?;

    writeln!(out, "Copied page:")?;
    print(&copied, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_shape() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Original page:");
        assert_eq!(lines[1], "Title: Title of first page");
        assert_eq!(lines[3], "Author: John Smith");
        assert!(lines[4].starts_with("Date: "));
        assert_eq!(
            &lines[5..9],
            ["Comments:", "\tFirst comment", "\tSecond comment", "\tThird comment"]
        );
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "Copied page:");
        assert_eq!(lines[11], "Title: Copy of Title of first page");
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn test_clone_shares_author_and_drops_comments() {
        let author = Author::new("Ann");
        let mut page = Page::new("Draft", "text", Rc::clone(&author));
        page.add_comment("nice");

        let copy = page.clone();
        assert!(Rc::ptr_eq(&page.author, &copy.author));
        assert!(copy.comments.is_empty());
        assert!(copy.date >= page.date);
        assert_eq!(author.pages(), ["Draft", "Copy of Draft"]);
    }

    #[test]
    fn test_original_changes_do_not_reach_clone() {
        let mut page = Page::new("Draft", "text", Author::new("Ann"));
        let copy = page.clone();

        page.body.push_str(" edited");
        page.add_comment("late");

        assert_eq!(copy.body, "text");
        assert!(copy.comments.is_empty());
    }
}
