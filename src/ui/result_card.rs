use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::analysis::{AnalysisResult, Interpretation};
use crate::i18n::Translator;
use crate::ui::preview::ImagePreview;
use crate::ui::theme::{BRAND, CARD_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct ResultCard<'a> {
    translator: &'a Translator,
    result: &'a AnalysisResult,
    preview: Option<&'a ImagePreview>,
}

impl<'a> ResultCard<'a> {
    pub fn new(
        translator: &'a Translator,
        result: &'a AnalysisResult,
        preview: Option<&'a ImagePreview>,
    ) -> Self {
        Self {
            translator,
            result,
            preview,
        }
    }

    /// Localized interpretation text for the result.
    pub fn interpretation(&self) -> &'a str {
        self.translator
            .t(Interpretation::from_result(self.result).locale_key())
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let t = self.translator;
        let label = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(MUTED_TEXT);
        let tone = &self.result.skin_tone;

        let mut lines = Vec::new();
        if let Some(preview) = self.preview {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", t.t("analysis.preview")), label),
                Span::styled(preview.summary(), muted),
            ]));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", t.t("analysis.facesDetected")), label),
            Span::styled(
                self.result.faces_detected.to_string(),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{}:", t.t("analysis.skinTone")),
            label,
        )));
        lines.push(Line::from(vec![
            Span::styled("      ", Style::default().bg(Color::Rgb(tone.r, tone.g, tone.b))),
            Span::styled(format!("  RGB: {}, {}, {}", tone.r, tone.g, tone.b), muted),
            Span::styled(format!("  {}: {}", t.t("analysis.hexValue"), tone.hex), muted),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t.t("analysis.interpretation.title"),
            label,
        )));
        lines.push(Line::from(Span::styled(self.interpretation(), muted)));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t.t("buttons.uploadAnother"),
            Style::default().fg(BRAND),
        )));
        lines
    }
}

impl Widget for ResultCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(
                self.translator.t("analysis.results"),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER));
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
