//! Puzzle page model.
//!
//! A puzzle page carries one `<article class="day-desc">` per unlocked part
//! plus, for each solved part, a paragraph of the form
//! `Your puzzle answer was <code>...</code>`. The statement is converted to
//! lightweight Markdown so it can be dropped into a day's README as is.

use std::sync::OnceLock;

use ego_tree::NodeRef;
use regex::Regex;
use scraper::{Html, Node, Selector};

use crate::error::ClientError;

/// Everything scraped out of one puzzle page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePage {
    /// Puzzle title without the `--- Day N: ... ---` dressing.
    pub title: String,
    /// Statement of every visible part, as Markdown.
    pub statement_md: String,
    /// Revealed answers in part order; empty until part one is solved.
    pub answers: Vec<String>,
}

impl PuzzlePage {
    /// Parse a puzzle page out of its HTML.
    ///
    /// Fails when the page has no heading or no statement article, which is
    /// what a not-yet-unlocked day (or an error page) looks like.
    pub fn parse(html: &str) -> Result<Self, ClientError> {
        let document = Html::parse_document(html);

        let heading = document
            .select(h2_selector())
            .next()
            .ok_or_else(|| ClientError::PageParse("no <h2> heading".to_string()))?;
        let heading_text: String = heading.text().collect();
        let title = title_regex()
            .captures(&heading_text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| heading_text.trim().to_string());

        let mut statement_md = String::new();
        let mut articles = 0;
        for article in document.select(article_selector()) {
            render_children(*article, &mut statement_md);
            statement_md.push('\n');
            articles += 1;
        }
        if articles == 0 {
            return Err(ClientError::PageParse("no day-desc article".to_string()));
        }
        let statement_md = tidy_blank_lines(&statement_md);

        let answers = answer_regex()
            .captures_iter(html)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        Ok(Self {
            title,
            statement_md,
            answers,
        })
    }
}

fn h2_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h2").unwrap())
}

fn article_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("article.day-desc").unwrap())
}

fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"--- Day \d+: (.*) ---").unwrap())
}

fn answer_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Your puzzle answer was <code>([^<]+)</code>").unwrap())
}

fn blank_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Collapse runs of blank lines left behind by inter-element whitespace.
fn tidy_blank_lines(text: &str) -> String {
    let mut tidy = blank_run_regex().replace_all(text, "\n\n").into_owned();
    if !tidy.ends_with('\n') {
        tidy.push('\n');
    }
    tidy
}

fn render_children(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        render_node(child, out);
    }
}

/// Markdown rendering of one HTML node.
///
/// Only the vocabulary puzzle statements actually use is mapped; unknown
/// elements contribute their children unchanged.
fn render_node(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => match element.name() {
            "h2" => {
                out.push_str("## ");
                render_children(node, out);
                out.push_str("\n\n");
            }
            "p" => {
                render_children(node, out);
                out.push_str("\n\n");
            }
            "em" => {
                out.push('*');
                render_children(node, out);
                out.push('*');
            }
            "s" => {
                out.push_str("~~");
                render_children(node, out);
                out.push_str("~~");
            }
            "code" => {
                let in_pre = node
                    .parent()
                    .and_then(|parent| parent.value().as_element().map(|e| e.name() == "pre"))
                    .unwrap_or(false);
                if in_pre {
                    render_children(node, out);
                } else {
                    out.push('`');
                    render_children(node, out);
                    out.push('`');
                }
            }
            "pre" => {
                out.push_str("```\n");
                render_children(node, out);
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n\n");
            }
            "ul" => {
                render_children(node, out);
                out.push('\n');
            }
            // Line breaks between items come from the page's own whitespace
            // text nodes.
            "li" => {
                out.push_str(" - ");
                render_children(node, out);
            }
            "a" => {
                out.push('[');
                render_children(node, out);
                out.push_str("](");
                out.push_str(element.attr("href").unwrap_or(""));
                out.push(')');
            }
            "br" => out.push('\n'),
            _ => render_children(node, out),
        },
        _ => {}
    }
}
