// Prototype - page with comment objects.

use std::cell::Cell;
use std::io::Write;
use std::rc::Rc;

use chrono::{DateTime, Local};

use crate::Result;

#[derive(Debug, Clone)]
pub struct Comment {
    pub date: DateTime<Local>,
    pub message: String,
}

impl Comment {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            date: Local::now(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct Author {
    pub name: String,
    pages: Cell<usize>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            pages: Cell::new(0),
        })
    }

    pub fn number_of_pages(&self) -> usize {
        self.pages.get()
    }
}

#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub body: String,
    pub author: Rc<Author>,
    pub date: DateTime<Local>,
    comments: Vec<Comment>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: Rc<Author>) -> Self {
        author.pages.set(author.pages.get() + 1);
        Self {
            title: title.into(),
            body: body.into(),
            author,
            date: Local::now(),
            comments: Vec::new(),
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
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

pub fn run(out: &mut dyn Write) -> Result<()> {
    let author = Author::new("John Smith");

    let mut original = Page::new("Title of first page", "Body of first page.", Rc::clone(&author));
    original.add_comment(Comment::new("First comment"));
    original.add_comment(Comment::new("Second comment"));
    original.add_comment(Comment::new("Third comment"));

    let copied = original.clone();

    writeln!(out, "Original title: {}.", original.title)?;
    writeln!(out, "Number of comments: {}.", original.number_of_comments())?;

    writeln!(out)?;

    writeln!(out, "Copied title: {}.", copied.title)?;
    writeln!(out, "Number of comments: {}.", copied.number_of_comments())?;

    writeln!(out)?;

    writeln!(out, "Author: {}.", author.name)?;
    writeln!(out, "Number of pages: {}.", author.number_of_pages())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Original title: Title of first page.\n\
             Number of comments: 3.\n\
             \n\
             Copied title: Copy of Title of first page.\n\
             Number of comments: 0.\n\
             \n\
             Author: John Smith.\n\
             Number of pages: 2.\n"
        );
    }

    #[test]
    fn test_comment_clone_is_independent() {
        let mut comment = Comment::new("first");
        let copy = comment.clone();
        comment.message.push_str(" edited");

        assert_eq!(copy.message, "first");
        assert_eq!(copy.date, comment.date);
    }
}
