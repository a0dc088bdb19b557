//! Main render/view function (View in TEA pattern)


use eddie_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::page::PageDocument;
use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, this writes the page geometry back into
/// `state.page`: content height, viewport height and anchor rows. Navigation
/// requested before the first frame resolves here.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with the page background
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(icons), areas.header);

    let content = layout::page_content(areas.page);
    let document = PageDocument::compose(state, icons, usize::from(content.width));
    state
        .page
        .update_content_size(document.len(), usize::from(content.height));
    state.page.set_anchors(document.anchors().clone());
    frame.render_widget(
        widgets::PageView::new(&document, state.page.offset),
        content,
    );

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
