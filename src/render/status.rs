//! Status panel - one line in the bottom-left window corner.

use crate::constants::{STATUS_MARGIN_PX, STATUS_TEXT_SIZE};
use gpui::*;

pub fn render_status_bar(status: &str) -> Div {
    div()
        .absolute()
        .left(px(STATUS_MARGIN_PX))
        .bottom(px(STATUS_MARGIN_PX))
        .px(px(8.0))
        .py(px(4.0))
        .rounded(px(4.0))
        .bg(rgb(0x1f1f1f))
        .text_color(rgb(0xe6e6e6))
        .text_size(px(STATUS_TEXT_SIZE))
        .child(SharedString::from(status.to_string()))
}
