use crate::i18n::Translator;
use crate::ui::app::ServiceStatus;
use crate::ui::theme::{
    BRAND, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Title bar: app name, service reachability and the active language.
pub struct Header<'a> {
    translator: &'a Translator,
    service: &'a ServiceStatus,
}

impl<'a> Header<'a> {
    pub fn new(translator: &'a Translator, service: &'a ServiceStatus) -> Self {
        Self {
            translator,
            service,
        }
    }

    fn status(&self) -> (&'static str, Color) {
        match self.service {
            ServiceStatus::Unknown => ("service.checking", STATUS_PENDING),
            ServiceStatus::Online => ("service.online", STATUS_OK),
            ServiceStatus::Offline(_) => ("service.offline", STATUS_ERROR),
        }
    }

    pub fn line(&self) -> Line<'a> {
        let t = self.translator;
        let text = Style::default().fg(HEADER_TEXT);
        let separator = Span::styled("  │  ", Style::default().fg(HEADER_SEPARATOR));
        let (status_key, status_color) = self.status();

        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                t.t("app.title"),
                Style::default().fg(BRAND).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(t.t("app.subtitle"), Style::default().fg(MUTED_TEXT)),
            separator.clone(),
            Span::styled("●", Style::default().fg(status_color)),
            Span::styled(format!(" {}", t.t(status_key)), text),
            separator,
            Span::styled(
                format!("{}: {}", t.t("language.toggle"), t.language_name()),
                text,
            ),
        ])
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}
