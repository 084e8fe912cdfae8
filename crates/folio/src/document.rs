//! Page layout
//!
//! Lays the portfolio out into a flat list of lines for a given width. The
//! resulting [`Document`] knows where every section starts and how tall it
//! is, which is all the viewport needs to scroll, reveal sections and compute
//! progress.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{target_id, Portfolio, Section, PROJECTS_SECTION_ID};

/// Horizontal padding on each side of the page body
pub const PAGE_PADDING: u16 = 2;

/// What a line displays; views style lines by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Title,
    /// One wrapped row of the headline; only the typed part is drawn
    Headline,
    Tagline,
    /// Placeholder for the nav links
    Nav,
    SectionTitle,
    Body,
    /// Placeholder for the project filter buttons
    FilterBar,
    ProjectName,
    ProjectBody,
    ProjectTags,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub kind: LineKind,
    pub text: String,
    /// Index of the owning section, if any
    pub section: Option<usize>,
}

impl DocLine {
    fn new(kind: LineKind, text: impl Into<String>, section: Option<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            section,
        }
    }

    fn blank(section: Option<usize>) -> Self {
        Self::new(LineKind::Blank, "", section)
    }
}

/// Scroll destination for a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub section: usize,
    /// First line of the section
    pub line: usize,
    /// Number of lines the section occupies
    pub height: usize,
    pub reveal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<DocLine>,
    pub anchors: Vec<Anchor>,
}

impl Document {
    /// Lay out the page for a terminal body of `width` columns
    ///
    /// Projects not matching `filter` take no space at all.
    pub fn layout(portfolio: &Portfolio, filter: &str, width: u16, year: i32) -> Self {
        let text_width = width.saturating_sub(PAGE_PADDING * 2).max(1) as usize;
        let mut doc = Document::default();

        // Hero
        doc.lines
            .push(DocLine::new(LineKind::Title, &portfolio.name, None));
        for line in wrap(&portfolio.headline, text_width) {
            doc.lines.push(DocLine::new(LineKind::Headline, line, None));
        }
        for line in wrap(&portfolio.tagline, text_width) {
            doc.lines.push(DocLine::new(LineKind::Tagline, line, None));
        }
        doc.lines.push(DocLine::blank(None));
        doc.lines.push(DocLine::new(LineKind::Nav, "", None));
        doc.lines.push(DocLine::blank(None));

        for (index, section) in portfolio.sections.iter().enumerate() {
            let with_projects = section.id == PROJECTS_SECTION_ID;
            doc.push_section(index, section, portfolio, with_projects, filter, text_width);
        }

        // Projects without a declared home get a section of their own
        if !portfolio.has_projects_section() && !portfolio.projects.is_empty() {
            let synthetic = Section {
                id: PROJECTS_SECTION_ID.to_string(),
                title: "Projects".to_string(),
                body: String::new(),
                reveal: true,
            };
            let index = portfolio.sections.len();
            doc.push_section(index, &synthetic, portfolio, true, filter, text_width);
        }

        doc.lines.push(DocLine::new(
            LineKind::Footer,
            format!("© {} {}", year, portfolio.name),
            None,
        ));

        doc
    }

    fn push_section(
        &mut self,
        index: usize,
        section: &Section,
        portfolio: &Portfolio,
        with_projects: bool,
        filter: &str,
        text_width: usize,
    ) {
        let start = self.lines.len();
        let owner = Some(index);

        self.lines
            .push(DocLine::new(LineKind::SectionTitle, &section.title, owner));
        self.lines.push(DocLine::blank(owner));

        for (i, paragraph) in paragraphs(&section.body).enumerate() {
            if i > 0 {
                self.lines.push(DocLine::blank(owner));
            }
            for line in wrap(paragraph, text_width) {
                self.lines.push(DocLine::new(LineKind::Body, line, owner));
            }
        }

        if with_projects {
            if !section.body.trim().is_empty() {
                self.lines.push(DocLine::blank(owner));
            }
            self.lines.push(DocLine::new(LineKind::FilterBar, "", owner));
            self.lines.push(DocLine::blank(owner));

            let indent = "  ";
            let inner_width = text_width.saturating_sub(indent.len()).max(1);
            for project in portfolio.projects.iter().filter(|p| p.matches_filter(filter)) {
                self.lines
                    .push(DocLine::new(LineKind::ProjectName, &project.name, owner));
                for line in wrap(&project.description, inner_width) {
                    self.lines.push(DocLine::new(
                        LineKind::ProjectBody,
                        format!("{indent}{line}"),
                        owner,
                    ));
                }
                if !project.tags.is_empty() {
                    let tags = project
                        .tags
                        .iter()
                        .map(|t| format!("#{t}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    self.lines.push(DocLine::new(
                        LineKind::ProjectTags,
                        format!("{indent}{tags}"),
                        owner,
                    ));
                }
                self.lines.push(DocLine::blank(owner));
            }
        }

        self.lines.push(DocLine::blank(owner));

        self.anchors.push(Anchor {
            id: section.id.clone(),
            section: index,
            line: start,
            height: self.lines.len() - start,
            reveal: section.reveal,
        });
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Find the anchor for `#id` or `id`
    pub fn anchor(&self, target: &str) -> Option<&Anchor> {
        let id = target_id(target);
        self.anchors.iter().find(|a| a.id == id)
    }
}

fn paragraphs(body: &str) -> impl Iterator<Item = &str> {
    body.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are split hard. Runs of whitespace collapse to
/// a single space.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Portfolio {
        Portfolio::parse(
            r#"
            name = "Test"
            headline = "Hello"
            tagline = "short"

            [[sections]]
            id = "home"
            title = "Home"
            body = "one two three"

            [[sections]]
            id = "projects"
            title = "Projects"

            [[projects]]
            name = "a"
            description = "first"
            tags = ["rust"]

            [[projects]]
            name = "b"
            description = "second"
            tags = ["web"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("aa bb cc", 8), vec!["aa bb cc"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("x abcdef", 3), vec!["x", "abc", "def"]);
    }

    #[test]
    fn test_wrap_measures_display_width() {
        // CJK glyphs take two columns each
        assert_eq!(wrap("日本語 テキスト", 6), vec!["日本語", "テキス", "ト"]);
        assert_eq!(wrap("ab 日本", 7), vec!["ab 日本"]);
        assert_eq!(wrap("ab 日本", 6), vec!["ab", "日本"]);
        for line in wrap("🦀🦀🦀 crabs", 4) {
            assert!(line.width() <= 4, "{line:?} is too wide");
        }
    }

    #[test]
    fn test_long_headline_wraps() {
        let portfolio = Portfolio::parse(
            r#"
            name = "Wide"
            headline = "Building quiet tools   for loud problems every day"
            "#,
        )
        .unwrap();
        let doc = Document::layout(&portfolio, "all", 30, 2026);
        let rows: Vec<&str> = doc
            .lines
            .iter()
            .filter(|l| l.kind == LineKind::Headline)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(rows, vec!["Building quiet tools for", "loud problems every day"]);
        assert_eq!(doc.lines[1].kind, LineKind::Headline);
    }

    #[test]
    fn test_empty_headline_takes_no_rows() {
        let doc = Document::layout(&portfolio(), "all", 80, 2026);
        assert_eq!(doc.lines.iter().filter(|l| l.kind == LineKind::Headline).count(), 1);

        let portfolio = Portfolio::parse("name = \"Quiet\"").unwrap();
        let doc = Document::layout(&portfolio, "all", 80, 2026);
        assert!(doc.lines.iter().all(|l| l.kind != LineKind::Headline));
    }

    #[test]
    fn test_anchors_cover_sections_in_order() {
        let doc = Document::layout(&portfolio(), "all", 80, 2026);
        let ids: Vec<&str> = doc.anchors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "projects"]);

        let home = doc.anchor("#home").unwrap();
        assert_eq!(doc.lines[home.line].kind, LineKind::SectionTitle);
        assert_eq!(doc.lines[home.line].text, "Home");

        // Sections are contiguous
        let projects = doc.anchor("projects").unwrap();
        assert_eq!(projects.line, home.line + home.height);
        assert!(doc.anchor("#missing").is_none());
    }

    #[test]
    fn test_filter_hides_projects() {
        let all = Document::layout(&portfolio(), "all", 80, 2026);
        let rust = Document::layout(&portfolio(), "rust", 80, 2026);

        let names = |doc: &Document| -> Vec<String> {
            doc.lines
                .iter()
                .filter(|l| l.kind == LineKind::ProjectName)
                .map(|l| l.text.clone())
                .collect()
        };
        assert_eq!(names(&all), vec!["a", "b"]);
        assert_eq!(names(&rust), vec!["a"]);
        assert!(rust.height() < all.height());
    }

    #[test]
    fn test_footer_has_year() {
        let doc = Document::layout(&portfolio(), "all", 80, 2031);
        let footer = doc.lines.last().unwrap();
        assert_eq!(footer.kind, LineKind::Footer);
        assert!(footer.text.contains("2031"));
    }

    #[test]
    fn test_synthetic_projects_section() {
        let portfolio = Portfolio::parse(
            r#"
            name = "NoHome"
            [[projects]]
            name = "lonely"
            "#,
        )
        .unwrap();
        let doc = Document::layout(&portfolio, "all", 40, 2026);
        let anchor = doc.anchor("#projects").unwrap();
        assert_eq!(anchor.section, 0);
        assert!(doc
            .lines
            .iter()
            .any(|l| l.kind == LineKind::ProjectName && l.text == "lonely"));
    }
}
