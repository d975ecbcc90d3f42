use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR, STATUS_OK};

pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
pub const FAILURE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// Short-lived notification drawn over the bottom of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    expires_at: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>, now: Instant) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
            expires_at: now + SUCCESS_TTL,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>, now: Instant) -> Self {
        Self {
            kind: ToastKind::Failure,
            title: title.into(),
            description: description.into(),
            expires_at: now + FAILURE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Area for the toast: bottom-right corner of `body`, at most 48 columns.
    pub fn area(body: Rect) -> Rect {
        let width = body.width.min(48);
        let height = body.height.min(4);
        Rect {
            x: body.x + body.width.saturating_sub(width),
            y: body.y + body.height.saturating_sub(height),
            width,
            height,
        }
    }

    pub fn widget(&self) -> Paragraph<'_> {
        let color = match self.kind {
            ToastKind::Success => STATUS_OK,
            ToastKind::Failure => STATUS_ERROR,
        };
        let lines = vec![
            Line::from(Span::styled(self.title.as_str(), Style::default().fg(color))),
            Line::from(Span::styled(
                self.description.as_str(),
                Style::default().fg(HEADER_TEXT),
            )),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_lives_three_seconds() {
        let now = Instant::now();
        let toast = Toast::success("Analysis results", "Faces detected: 1", now);
        assert!(!toast.is_expired(now + Duration::from_millis(2_999)));
        assert!(toast.is_expired(now + SUCCESS_TTL));
    }

    #[test]
    fn failure_lives_five_seconds() {
        let now = Instant::now();
        let toast = Toast::failure("Analysis failed", "bad image", now);
        assert!(!toast.is_expired(now + Duration::from_secs(4)));
        assert!(toast.is_expired(now + FAILURE_TTL));
    }

    #[test]
    fn area_fits_inside_body() {
        let body = Rect::new(0, 3, 30, 10);
        let area = Toast::area(body);
        assert_eq!(area, Rect::new(0, 9, 30, 4));
    }
}
