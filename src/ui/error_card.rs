use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::i18n::Translator;
use crate::ui::theme::{BRAND, HEADER_TEXT, STATUS_ERROR};

/// Shown whenever the store holds an error; always offers a reset.
pub struct ErrorCard<'a> {
    translator: &'a Translator,
    message: &'a str,
}

impl<'a> ErrorCard<'a> {
    pub fn new(translator: &'a Translator, message: &'a str) -> Self {
        Self {
            translator,
            message,
        }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(self.message, Style::default().fg(HEADER_TEXT))),
            Line::from(""),
            Line::from(Span::styled(
                self.translator.t("buttons.tryAgain"),
                Style::default().fg(BRAND),
            )),
        ]
    }
}

impl Widget for ErrorCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                format!("⚠ {}", self.translator.t("errors.analysisFailed")),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR));
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
