//! Markdown to styled terminal lines
//!
//! Reports arrive as markdown. They are parsed with pulldown-cmark and laid
//! out into pre-wrapped [`Line`]s, so the report viewer knows the exact
//! rendered height for scrolling.

use pulldown_cmark::{Alignment, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

const BULLETS: [&str; 3] = ["\u{2022} ", "\u{25e6} ", "\u{25aa} "]; // • ◦ ▪
const QUOTE_BAR: &str = "\u{2502} "; // │
const COLUMN_SEPARATOR: &str = " \u{2502} ";

/// Render `text` as lines no wider than `width` columns
pub fn render_markdown(text: &str, width: u16) -> Vec<Line<'static>> {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let mut renderer = MarkdownRenderer::new(usize::from(width).max(1));
    for event in Parser::new_ext(text, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// Table being collected; rendered in one go once all cells are known
#[derive(Default)]
struct TableBuilder {
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    header_rows: usize,
}

struct MarkdownRenderer {
    width: usize,
    lines: Vec<Line<'static>>,
    /// Inline spans of the block being built
    current: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    /// One entry per open list: next number for ordered lists
    list_stack: Vec<Option<u64>>,
    /// Marker width of every open list item
    indent_stack: Vec<usize>,
    pending_marker: Option<String>,
    quote_depth: usize,
    code_block: Option<String>,
    /// Destination and first span index of every open link
    link_stack: Vec<(String, usize)>,
    table: Option<TableBuilder>,
    last_blank: bool,
}

impl MarkdownRenderer {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: Vec::new(),
            style_stack: vec![styles::text_primary()],
            list_stack: Vec::new(),
            indent_stack: Vec::new(),
            pending_marker: None,
            quote_depth: 0,
            code_block: None,
            link_stack: Vec::new(),
            table: None,
            last_blank: false,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.push_str(&code);
                } else {
                    let style = Style::default().fg(palette::MD_CODE).bg(palette::MD_CODE_BG);
                    self.current.push(Span::styled(code.into_string(), style));
                }
            }
            Event::InlineHtml(html) => self.text(&html),
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.text("\n"),
            Event::Rule => {
                self.start_block();
                let width = self.width.saturating_sub(self.prefix_width());
                let mut spans = self.quote_prefix();
                spans.push(Span::styled("\u{2500}".repeat(width), styles::border_inactive()));
                self.push_line(Line::from(spans));
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.current
                    .push(Span::styled(marker.to_string(), styles::text_secondary()));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.start_block(),
            Tag::Heading { level, .. } => {
                self.start_block();
                self.style_stack.push(heading_style(level));
            }
            Tag::BlockQuote { .. } => {
                self.start_block();
                self.quote_depth += 1;
                self.style_stack.push(
                    Style::default()
                        .fg(palette::MD_QUOTE)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            Tag::CodeBlock { .. } => {
                self.start_block();
                self.code_block = Some(String::new());
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.start_block();
                } else {
                    // Parent item text goes above the nested list
                    self.flush();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush();
                let depth = self.list_stack.len().saturating_sub(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}. ", number);
                        *number += 1;
                        marker
                    }
                    _ => BULLETS[depth % BULLETS.len()].to_string(),
                };
                self.indent_stack.push(marker.width());
                self.pending_marker = Some(marker);
            }
            Tag::Emphasis => self.push_modifier(Modifier::ITALIC),
            Tag::Strong => self.push_modifier(Modifier::BOLD),
            Tag::Strikethrough => self.push_modifier(Modifier::CROSSED_OUT),
            Tag::Link { dest_url, .. } => {
                // Inside a table the label accumulates in the cell text
                let start = match self.table.as_ref() {
                    Some(table) => table.cell.len(),
                    None => self.current.len(),
                };
                self.link_stack.push((dest_url.into_string(), start));
                self.style_stack.push(
                    Style::default()
                        .fg(palette::MD_LINK)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Tag::Table(alignments) => {
                self.start_block();
                self.table = Some(TableBuilder {
                    alignments,
                    ..TableBuilder::default()
                });
            }
            Tag::TableHead | Tag::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    table.row.clear();
                }
            }
            Tag::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.cell.clear();
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush(),
            TagEnd::Heading { .. } => {
                self.flush();
                self.style_stack.pop();
            }
            TagEnd::BlockQuote { .. } => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.style_stack.pop();
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code_block.take() {
                    self.emit_code_block(&code);
                }
            }
            TagEnd::List(_) => {
                self.flush();
                self.list_stack.pop();
            }
            TagEnd::Item => {
                self.flush();
                self.indent_stack.pop();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.style_stack.pop();
            }
            TagEnd::Link => {
                self.style_stack.pop();
                if let Some((url, start)) = self.link_stack.pop() {
                    let label: String = match self.table.as_ref() {
                        Some(table) => table.cell.get(start..).unwrap_or_default().to_string(),
                        None => self.current[start.min(self.current.len())..]
                            .iter()
                            .map(|span| span.content.as_ref())
                            .collect(),
                    };
                    if !url.is_empty() && !url.starts_with('#') && label.trim() != url {
                        let suffix = format!(" ({})", url);
                        match self.table.as_mut() {
                            Some(table) => table.cell.push_str(&suffix),
                            None => self
                                .current
                                .push(Span::styled(suffix, styles::text_muted())),
                        }
                    }
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    let cell = std::mem::take(&mut table.cell);
                    table.row.push(cell.trim().to_string());
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    if !row.is_empty() {
                        table.rows.push(row);
                    }
                    table.header_rows = table.rows.len();
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = self.table.as_mut() {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                }
            }
            TagEnd::Table => {
                if let Some(table) = self.table.take() {
                    self.emit_table(table);
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = self.code_block.as_mut() {
            code.push_str(text);
        } else if let Some(table) = self.table.as_mut() {
            table.cell.push_str(text);
        } else {
            let style = self.current_style();
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        self.style_stack.push(Style::default().add_modifier(modifier));
    }

    fn current_style(&self) -> Style {
        self.style_stack
            .iter()
            .fold(Style::default(), |acc, style| acc.patch(*style))
    }

    /// Flush pending inline text and separate top-level blocks with a blank
    /// line
    fn start_block(&mut self) {
        self.flush();
        if self.list_stack.is_empty() && !self.lines.is_empty() && !self.last_blank {
            let blank = Line::from(self.quote_prefix());
            self.lines.push(blank);
            self.last_blank = true;
        }
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.lines.push(line);
        self.last_blank = false;
    }

    fn quote_prefix(&self) -> Vec<Span<'static>> {
        (0..self.quote_depth)
            .map(|_| Span::styled(QUOTE_BAR, Style::default().fg(palette::MD_QUOTE)))
            .collect()
    }

    /// Quote bars plus list indentation. The first line of a list item shows
    /// its marker in place of the innermost indent.
    fn prefix(&mut self, first: bool) -> Vec<Span<'static>> {
        let mut spans = self.quote_prefix();
        let marker = if first { self.pending_marker.take() } else { None };
        match marker {
            Some(marker) => {
                let outer: usize = self
                    .indent_stack
                    .iter()
                    .take(self.indent_stack.len().saturating_sub(1))
                    .sum();
                if outer > 0 {
                    spans.push(Span::raw(" ".repeat(outer)));
                }
                spans.push(Span::styled(marker, styles::accent()));
            }
            None => {
                let indent: usize = self.indent_stack.iter().sum();
                if indent > 0 {
                    spans.push(Span::raw(" ".repeat(indent)));
                }
            }
        }
        spans
    }

    fn prefix_width(&self) -> usize {
        self.quote_depth * QUOTE_BAR.width() + self.indent_stack.iter().sum::<usize>()
    }

    /// Wrap the pending inline spans into output lines
    fn flush(&mut self) {
        if self.current.is_empty() && self.pending_marker.is_none() {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        let available = self.width.saturating_sub(self.prefix_width()).max(1);
        for (i, wrapped) in wrap_spans(spans, available).into_iter().enumerate() {
            let mut line = self.prefix(i == 0);
            line.extend(wrapped);
            self.push_line(Line::from(line));
        }
    }

    fn emit_code_block(&mut self, code: &str) {
        let style = Style::default().fg(palette::MD_CODE).bg(palette::MD_CODE_BG);
        for text in code.trim_end_matches('\n').lines() {
            let mut line = self.prefix(false);
            line.push(Span::styled(format!("  {}", text), style));
            self.push_line(Line::from(line));
        }
    }

    fn emit_table(&mut self, table: TableBuilder) {
        let columns = table.rows.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0usize; columns];
        for row in &table.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        let separators = COLUMN_SEPARATOR.width() * (columns - 1);
        let available = self.width.saturating_sub(self.prefix_width());
        if widths.iter().sum::<usize>() + separators > available {
            let cap = (available.saturating_sub(separators) / columns).max(1);
            for width in &mut widths {
                *width = (*width).min(cap);
            }
        }

        for (index, row) in table.rows.iter().enumerate() {
            let header = index < table.header_rows;
            let style = if header {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            let mut line = self.prefix(false);
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    line.push(Span::styled(COLUMN_SEPARATOR, styles::border_inactive()));
                }
                let cell = row.get(i).map(String::as_str).unwrap_or_default();
                let alignment = table.alignments.get(i).copied().unwrap_or(Alignment::None);
                line.push(Span::styled(pad_cell(cell, *width, alignment), style));
            }
            self.push_line(Line::from(line));

            if header && index + 1 == table.header_rows {
                let rule: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(*w)).collect();
                let mut line = self.prefix(false);
                line.push(Span::styled(
                    rule.join("\u{2500}\u{253c}\u{2500}"),
                    styles::border_inactive(),
                ));
                self.push_line(Line::from(line));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.last_blank || self.lines.last().is_some_and(|line| line.width() == 0) {
            if self.lines.pop().is_none() {
                break;
            }
            self.last_blank = false;
        }
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => style
            .fg(palette::MD_HEADING_1)
            .add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => style.fg(palette::MD_HEADING_2),
        _ => style.fg(palette::MD_HEADING_3),
    }
}

/// Truncate or pad `cell` to exactly `width` columns
fn pad_cell(cell: &str, width: usize, alignment: Alignment) -> String {
    let text = truncate_to_width(cell, width);
    let gap = width.saturating_sub(text.width());
    match alignment {
        Alignment::Right => format!("{}{}", " ".repeat(gap), text),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
        }
        _ => format!("{}{}", text, " ".repeat(gap)),
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push('\u{2026}'); // …
    result
}

enum Token<'a> {
    Word(&'a str),
    Space(&'a str),
    Newline,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, ch) in text.char_indices() {
        if ch == '\n' {
            if i > start {
                tokens.push(run(&text[start..i], in_space == Some(true)));
            }
            tokens.push(Token::Newline);
            start = i + ch.len_utf8();
            in_space = None;
            continue;
        }
        let is_space = ch.is_whitespace();
        if in_space.is_some_and(|space| space != is_space) {
            tokens.push(run(&text[start..i], !is_space));
            start = i;
        }
        in_space = Some(is_space);
    }
    if start < text.len() {
        tokens.push(run(&text[start..], in_space == Some(true)));
    }
    tokens
}

fn run(text: &str, is_space: bool) -> Token<'_> {
    if is_space {
        Token::Space(text)
    } else {
        Token::Word(text)
    }
}

/// Append `text` to the line, merging with the last span when styles match
fn push_styled(line: &mut Vec<Span<'static>>, text: &str, style: Style) {
    if text.is_empty() {
        return;
    }
    match line.last_mut() {
        Some(last) if last.style == style => last.content.to_mut().push_str(text),
        _ => line.push(Span::styled(text.to_string(), style)),
    }
}

fn trim_trailing_space(line: &mut Vec<Span<'static>>) {
    while let Some(last) = line.last_mut() {
        let trimmed = last.content.trim_end().to_string();
        if trimmed.is_empty() {
            line.pop();
        } else {
            if trimmed.len() != last.content.len() {
                last.content = trimmed.into();
            }
            break;
        }
    }
}

/// Greedy word wrap over styled spans. Words wider than `width` are split.
pub(crate) fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line: Vec<Span<'static>> = Vec::new();
    let mut line_width = 0;

    for span in spans {
        let style = span.style;
        for token in tokenize(&span.content) {
            match token {
                Token::Newline => {
                    trim_trailing_space(&mut line);
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                Token::Space(space) => {
                    // Leading whitespace is dropped on wrapped lines
                    if line_width == 0 {
                        continue;
                    }
                    let w = space.width();
                    if line_width + w > width {
                        trim_trailing_space(&mut line);
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    } else {
                        push_styled(&mut line, space, style);
                        line_width += w;
                    }
                }
                Token::Word(word) => {
                    let w = word.width();
                    if line_width > 0 && line_width + w > width {
                        trim_trailing_space(&mut line);
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    if w <= width {
                        push_styled(&mut line, word, style);
                        line_width += w;
                        continue;
                    }
                    let mut chunk = String::new();
                    for ch in word.chars() {
                        let cw = ch.width().unwrap_or(0);
                        if line_width > 0 && line_width + cw > width {
                            push_styled(&mut line, &chunk, style);
                            chunk.clear();
                            lines.push(std::mem::take(&mut line));
                            line_width = 0;
                        }
                        chunk.push(ch);
                        line_width += cw;
                    }
                    push_styled(&mut line, &chunk, style);
                }
            }
        }
    }

    trim_trailing_space(&mut line);
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
