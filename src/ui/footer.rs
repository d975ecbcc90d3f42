use crate::i18n::Translator;
use crate::ui::analysis::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current view on the left, version on the right.
pub struct Footer<'a> {
    translator: &'a Translator,
    view: View,
}

impl<'a> Footer<'a> {
    pub fn new(translator: &'a Translator, view: View) -> Self {
        Self { translator, view }
    }

    pub fn hints(&self) -> String {
        let t = self.translator;
        let action = match self.view {
            View::UploadPrompt => t.t("upload.button"),
            View::ResultCard => t.t("buttons.uploadAnother"),
            View::ErrorCard => t.t("buttons.tryAgain"),
        };
        format!(" {} │ {} │ {}", action, t.t("footer.language"), t.t("footer.quit"))
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        // Version first so the hints win if the row is too narrow for both.
        Paragraph::new(Line::from(format!("v{} ", VERSION)).right_aligned())
            .style(style)
            .render(inner, buf);
        Line::styled(self.hints(), style).render(inner, buf);
    }
}
