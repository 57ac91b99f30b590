// src/rendering/markdown.rs
//
// Markdown to render tree. The tree is what a display layer consumes; it is
// never persisted. Rendering degrades instead of failing: malformed directive
// values fall back to defaults and non-absolute image sources are swapped for
// a placeholder.
use pulldown_cmark::{Alignment, CodeBlockKind, Event, Options, Parser, Tag};
use serde::{Deserialize, Serialize};

use crate::rendering::directive::ImageDirective;

pub const DEFAULT_FALLBACK_IMAGE: &str = "/image_notfound.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageNode {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub directive: ImageDirective,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableAlignment {
    None,
    Left,
    Center,
    Right,
}

impl From<Alignment> for TableAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::None => Self::None,
            Alignment::Left => Self::Left,
            Alignment::Center => Self::Center,
            Alignment::Right => Self::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Heading {
        level: u8,
        children: Vec<RenderNode>,
    },
    Paragraph {
        children: Vec<RenderNode>,
    },
    Text {
        value: String,
    },
    Emphasis {
        children: Vec<RenderNode>,
    },
    Strong {
        children: Vec<RenderNode>,
    },
    Strikethrough {
        children: Vec<RenderNode>,
    },
    InlineCode {
        value: String,
    },
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    BlockQuote {
        children: Vec<RenderNode>,
    },
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<RenderNode>,
    },
    Item {
        children: Vec<RenderNode>,
    },
    Link {
        href: String,
        title: String,
        children: Vec<RenderNode>,
    },
    /// Inline-flow image carrying a float layout hint (`float-left` /
    /// `float-right` directives).
    Image {
        image: ImageNode,
    },
    /// Block-level image; horizontal alignment comes from the directive
    /// placement (`left` / `center` / `right`).
    ImageBlock {
        image: ImageNode,
    },
    Table {
        alignments: Vec<TableAlignment>,
        children: Vec<RenderNode>,
    },
    TableHead {
        children: Vec<RenderNode>,
    },
    TableRow {
        children: Vec<RenderNode>,
    },
    TableCell {
        children: Vec<RenderNode>,
    },
    Html {
        value: String,
    },
    Rule,
    HardBreak,
    SoftBreak,
}

pub struct MarkdownRenderer {
    fallback_image: String,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_IMAGE)
    }
}

impl MarkdownRenderer {
    pub fn new(fallback_image: impl Into<String>) -> Self {
        Self {
            fallback_image: fallback_image.into(),
        }
    }

    /// Parse stored Markdown into the render tree. Never errors.
    pub fn render(&self, content: &str) -> Vec<RenderNode> {
        let prepared = preprocess(content);

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(&prepared, options);

        let mut builder = TreeBuilder::new(&self.fallback_image);
        for event in parser {
            builder.push_event(event);
        }
        builder.finish()
    }
}

/// Stored content may arrive double-escaped (literal `\n` and `\\`); turn
/// those back into real line breaks and backslashes before parsing.
fn preprocess(content: &str) -> String {
    content.replace("\\n", "\n").replace("\\\\", "\\")
}

fn resolve_src(src: &str, fallback: &str) -> String {
    if src.starts_with('/') || src.starts_with("http") {
        src.to_string()
    } else {
        fallback.to_string()
    }
}

enum FrameKind {
    Heading(u8),
    Paragraph,
    BlockQuote,
    Emphasis,
    Strong,
    Strikethrough,
    CodeBlock(Option<String>),
    List { ordered: bool, start: Option<u64> },
    Item,
    Link { href: String, title: String },
    Image { src: String, title: String },
    Table(Vec<TableAlignment>),
    TableHead,
    TableRow,
    TableCell,
    /// Container whose children splice straight into the parent (HTML
    /// blocks and anything else without a node of its own).
    Passthrough,
}

struct Frame {
    kind: FrameKind,
    children: Vec<RenderNode>,
}

struct TreeBuilder<'a> {
    fallback_image: &'a str,
    root: Vec<RenderNode>,
    stack: Vec<Frame>,
}

impl<'a> TreeBuilder<'a> {
    fn new(fallback_image: &'a str) -> Self {
        Self {
            fallback_image,
            root: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_node(RenderNode::Text {
                value: text.into_string(),
            }),
            Event::Code(code) => self.push_node(RenderNode::InlineCode {
                value: code.into_string(),
            }),
            Event::Html(html) | Event::InlineHtml(html) => self.push_node(RenderNode::Html {
                value: html.into_string(),
            }),
            Event::Rule => self.push_node(RenderNode::Rule),
            Event::HardBreak => self.push_node(RenderNode::HardBreak),
            Event::SoftBreak => self.push_node(RenderNode::SoftBreak),
            // footnotes, task markers and metadata blocks are not enabled
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Heading { level, .. } => FrameKind::Heading(level as u8),
            Tag::Paragraph => FrameKind::Paragraph,
            Tag::BlockQuote => FrameKind::BlockQuote,
            Tag::Emphasis => FrameKind::Emphasis,
            Tag::Strong => FrameKind::Strong,
            Tag::Strikethrough => FrameKind::Strikethrough,
            Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                let language = info
                    .split_whitespace()
                    .next()
                    .filter(|lang| !lang.is_empty())
                    .map(ToString::to_string);
                FrameKind::CodeBlock(language)
            }
            Tag::CodeBlock(CodeBlockKind::Indented) => FrameKind::CodeBlock(None),
            Tag::List(start) => FrameKind::List {
                ordered: start.is_some(),
                start,
            },
            Tag::Item => FrameKind::Item,
            Tag::Link {
                dest_url, title, ..
            } => FrameKind::Link {
                href: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => FrameKind::Image {
                src: dest_url.into_string(),
                title: title.into_string(),
            },
            Tag::Table(alignments) => {
                FrameKind::Table(alignments.into_iter().map(Into::into).collect())
            }
            Tag::TableHead => FrameKind::TableHead,
            Tag::TableRow => FrameKind::TableRow,
            Tag::TableCell => FrameKind::TableCell,
            _ => FrameKind::Passthrough,
        };

        self.stack.push(Frame {
            kind,
            children: Vec::new(),
        });
    }

    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        let Frame { kind, children } = frame;

        match kind {
            FrameKind::Heading(level) => {
                self.push_node(RenderNode::Heading { level, children });
            }
            FrameKind::Paragraph => self.push_node(RenderNode::Paragraph { children }),
            FrameKind::BlockQuote => self.push_node(RenderNode::BlockQuote { children }),
            FrameKind::Emphasis => self.push_node(RenderNode::Emphasis { children }),
            FrameKind::Strong => self.push_node(RenderNode::Strong { children }),
            FrameKind::Strikethrough => {
                self.push_node(RenderNode::Strikethrough { children });
            }
            FrameKind::CodeBlock(language) => {
                let code = collect_text(&children);
                self.push_node(RenderNode::CodeBlock { language, code });
            }
            FrameKind::List { ordered, start } => self.push_node(RenderNode::List {
                ordered,
                start,
                items: children,
            }),
            FrameKind::Item => self.push_node(RenderNode::Item { children }),
            FrameKind::Link { href, title } => self.push_node(RenderNode::Link {
                href,
                title,
                children,
            }),
            FrameKind::Image { src, title } => {
                let directive = ImageDirective::from_url(&src);
                let image = ImageNode {
                    src: resolve_src(&src, self.fallback_image),
                    alt: collect_text(&children),
                    title,
                    directive,
                };
                if directive.placement.is_float() {
                    self.push_node(RenderNode::Image { image });
                } else {
                    self.push_node(RenderNode::ImageBlock { image });
                }
            }
            FrameKind::Table(alignments) => self.push_node(RenderNode::Table {
                alignments,
                children,
            }),
            FrameKind::TableHead => self.push_node(RenderNode::TableHead { children }),
            FrameKind::TableRow => self.push_node(RenderNode::TableRow { children }),
            FrameKind::TableCell => self.push_node(RenderNode::TableCell { children }),
            FrameKind::Passthrough => {
                for child in children {
                    self.push_node(child);
                }
            }
        }
    }

    fn push_node(&mut self, node: RenderNode) {
        match self.stack.last_mut() {
            Some(frame) => frame.children.push(node),
            None => self.root.push(node),
        }
    }

    fn finish(mut self) -> Vec<RenderNode> {
        // unbalanced input: splice whatever is still open into the root
        while !self.stack.is_empty() {
            self.close();
        }
        self.root
    }
}

fn collect_text(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    push_text(nodes, &mut out);
    out
}

fn push_text(nodes: &[RenderNode], out: &mut String) {
    for node in nodes {
        match node {
            RenderNode::Text { value } | RenderNode::InlineCode { value } => out.push_str(value),
            RenderNode::Emphasis { children }
            | RenderNode::Strong { children }
            | RenderNode::Strikethrough { children }
            | RenderNode::Paragraph { children }
            | RenderNode::Link { children, .. } => push_text(children, out),
            RenderNode::SoftBreak | RenderNode::HardBreak => out.push('\n'),
            _ => {}
        }
    }
}
