//! Rendering of layout documents to text within a maximum width

use tracing::trace;
use unicode_width::UnicodeWidthStr;

use super::document::Doc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Flat,
    Broken,
}

/// Render a document, breaking any group that does not fit in the
/// remaining width. Content that cannot be broken any further overflows.
pub fn render(doc: &Doc, width: usize) -> String {
    let mut printer = Printer::new(width);
    printer.print(doc, Mode::Broken, 0);
    printer.buffer
}

struct Printer {
    width: usize,
    buffer: String,
    column: usize,
}

impl Printer {
    fn new(width: usize) -> Printer {
        Printer {
            width,
            buffer: String::new(),
            column: 0,
        }
    }

    fn print(&mut self, doc: &Doc, mode: Mode, indent: usize) {
        match doc {
            Doc::Text(text) => self.write(text),
            Doc::Concat(docs) => {
                for doc in docs {
                    self.print(doc, mode, indent);
                }
            }
            Doc::SoftBreak => match mode {
                Mode::Flat => self.write(" "),
                Mode::Broken => self.newline(indent),
            },
            Doc::EmptyBreak => match mode {
                Mode::Flat => {}
                Mode::Broken => self.newline(indent),
            },
            Doc::HardBreak => self.newline(indent),
            Doc::Group(inner) => {
                let mode = match mode {
                    Mode::Flat => Mode::Flat,
                    Mode::Broken => {
                        let needed = inner.flat_width();
                        let fits = self.column + needed <= self.width && !inner.contains_hard_break();
                        trace!(column = self.column, needed, fits);
                        if fits {
                            Mode::Flat
                        } else {
                            Mode::Broken
                        }
                    }
                };
                self.print(inner, mode, indent);
            }
            Doc::Nest(amount, inner) => self.print(inner, mode, indent + amount),
            Doc::Hang(amount, inner) => {
                let indent = self.column + amount;
                self.print(inner, mode, indent);
            }
            Doc::Enclose(open, close, inner) => {
                self.write(open);
                self.print(inner, mode, indent);
                self.write(close);
            }
        }
    }

    fn write(&mut self, text: &str) {
        self.buffer
            .push_str(text);
        match text.rfind('\n') {
            Some(i) => self.column = text[i + 1..].width(),
            None => self.column += text.width(),
        }
    }

    fn newline(&mut self, indent: usize) {
        self.buffer
            .push('\n');
        self.buffer
            .push_str(&" ".repeat(indent));
        self.column = indent;
    }
}
