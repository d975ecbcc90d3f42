use crate::ui::analysis::View;
use crate::ui::app::App;
use crate::ui::error_card::ErrorCard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_height, centered_rect_by_size, layout_regions};
use crate::ui::result_card::ResultCard;
use crate::ui::toast::Toast;
use crate::ui::upload_prompt::UploadPrompt;
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Widest a card gets.
pub const CARD_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let translator = app.translator();
    let state = app.state();

    frame.render_widget(Header::new(translator, app.service()), header);
    frame.render_widget(Clear, body);

    let width = body.width.min(CARD_WIDTH);
    match state.view() {
        View::UploadPrompt => {
            let prompt = UploadPrompt::new(
                translator,
                app.input(),
                state.is_busy(),
                app.spinner_frame(),
            );
            let height = card_height(&prompt.lines(), width);
            frame.render_widget(prompt, centered_rect_by_size(body, width, height));
        }
        View::ResultCard => {
            if let Some(result) = state.result.as_ref() {
                let card =
                    ResultCard::new(translator, result, state.uploaded_image_preview.as_ref());
                let height = card_height(&card.lines(), width);
                frame.render_widget(card, centered_rect_by_size(body, width, height));
            }
        }
        View::ErrorCard => {
            if let Some(message) = state.error.as_deref() {
                let card = ErrorCard::new(translator, message);
                let height = card_height(&card.lines(), width);
                frame.render_widget(card, centered_rect_by_size(body, width, height));
            }
        }
    }

    frame.render_widget(Footer::new(translator, state.view()), footer);

    if let Some(toast) = app.toast() {
        let toast_area = Toast::area(body);
        frame.render_widget(Clear, toast_area);
        frame.render_widget(toast.widget(), toast_area);
    }
}
