// Factory Method - documents.
// Each document kind decides which pages it is made of.

use std::fmt;
use std::io::Write;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Skills,
    Education,
    Experience,
    Introduction,
    Results,
    Conclusion,
    Summary,
    Bibliography,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}Page")
    }
}

pub trait Document {
    fn name(&self) -> &'static str;

    /// The factory method.
    fn create_pages(&self) -> Vec<Page>;
}

pub struct Resume;

impl Document for Resume {
    fn name(&self) -> &'static str {
        "Resume"
    }

    fn create_pages(&self) -> Vec<Page> {
        vec![Page::Skills, Page::Education, Page::Experience]
    }
}

pub struct Report;

impl Document for Report {
    fn name(&self) -> &'static str {
        "Report"
    }

    fn create_pages(&self) -> Vec<Page> {
        vec![
            Page::Introduction,
            Page::Results,
            Page::Conclusion,
            Page::Summary,
            Page::Bibliography,
        ]
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let documents: Vec<Box<dyn Document>> = vec![Box::new(Resume), Box::new(Report)];

    for document in &documents {
        writeln!(out, "Document: {}", document.name())?;
        for page in document.create_pages() {
            writeln!(out, "  Page: {page}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_names() {
        assert_eq!(Page::Bibliography.to_string(), "BibliographyPage");
        assert_eq!(Page::Skills.to_string(), "SkillsPage");
    }

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(
            "Document: Resume\n  Page: SkillsPage\n  Page: EducationPage\n  Page: ExperiencePage\n\n"
        ));
        assert_eq!(text.matches("  Page: ").count(), 8);
    }
}
