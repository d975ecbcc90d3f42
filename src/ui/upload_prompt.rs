use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::i18n::Translator;
use crate::ui::theme::{BRAND, CARD_BORDER, HEADER_TEXT, MUTED_TEXT};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Drop target. Closed while an analysis is in flight.
pub struct UploadPrompt<'a> {
    translator: &'a Translator,
    input: &'a str,
    busy: bool,
    spinner_frame: usize,
}

impl<'a> UploadPrompt<'a> {
    pub fn new(translator: &'a Translator, input: &'a str, busy: bool, spinner_frame: usize) -> Self {
        Self {
            translator,
            input,
            busy,
            spinner_frame,
        }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let t = self.translator;
        let muted = Style::default().fg(MUTED_TEXT);
        let emphasis = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled(t.t("upload.subtitle"), muted)), Line::from("")];
        if self.busy {
            let frame = SPINNER[self.spinner_frame % SPINNER.len()];
            lines.push(Line::from(Span::styled(frame, Style::default().fg(BRAND))));
            lines.push(Line::from(Span::styled(t.t("analysis.analyzing"), emphasis)));
            lines.push(Line::from(Span::styled(t.t("upload.busy"), muted)));
        } else {
            lines.push(Line::from("📸"));
            lines.push(Line::from(Span::styled(t.t("upload.dragText"), emphasis)));
        }
        lines.push(Line::from(Span::styled(t.t("upload.supportedFormats"), muted)));
        lines.push(Line::from(Span::styled(t.t("upload.maxSize"), muted)));
        if !self.busy {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(BRAND)),
                Span::styled(self.input, Style::default().fg(HEADER_TEXT)),
                Span::styled("█", Style::default().fg(BRAND)),
            ]));
            lines.push(Line::from(Span::styled(
                t.t("upload.button"),
                Style::default().fg(BRAND),
            )));
        }
        lines
    }
}

impl Widget for UploadPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.busy { MUTED_TEXT } else { CARD_BORDER };
        let block = Block::default()
            .title(Span::styled(
                self.translator.t("upload.title"),
                Style::default().fg(BRAND),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
