//! Board rendering - header, notes, trash target and the empty-state hint.

use super::app::StickyBoardApp;
use crate::constants::{HEADER_HEIGHT, RESIZE_HANDLE_SIZE};
use crate::geometry::Rect;
use crate::types::Note;
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

/// Per-note interaction state the board reports for painting.
pub struct NoteVisual {
    pub dragging: bool,
    pub pending_delete: bool,
    /// Draft text while the note is being edited
    pub draft: Option<String>,
}

/// Parse `#RRGGBB` into a packed `0xRRGGBB`. Anything else falls back to the
/// first palette color.
pub fn hex_to_rgb(color: &str) -> u32 {
    color
        .strip_prefix('#')
        .filter(|hex| hex.len() == 6)
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .unwrap_or(0xFFE066)
}

pub fn render_header(note_count: usize, cx: &Context<StickyBoardApp>) -> Div {
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    h_flex()
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex_shrink_0()
        .px(px(16.0))
        .items_center()
        .justify_between()
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_sm()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child("Sticky Notes"),
        )
        .child(
            div()
                .text_xs()
                .text_color(muted_fg)
                .child(match note_count {
                    1 => "1 note".to_string(),
                    n => format!("{n} notes"),
                }),
        )
}

pub fn render_note(note: &Note, visual: &NoteVisual) -> Stateful<Div> {
    let fill = rgb(hex_to_rgb(&note.color));
    let text = hsla(0.0, 0.0, 0.15, 1.0);
    let body = visual.draft.as_deref().unwrap_or(&note.content);
    let editing = visual.draft.is_some();

    let lines = body.split('\n').map(|line| {
        // Empty lines still take up a row
        let line = if line.is_empty() { " " } else { line };
        div().child(line.to_string())
    });

    let mut card = div()
        .id(ElementId::Name(note.id.clone().into()))
        .absolute()
        .left(px(note.position.x))
        .top(px(note.position.y))
        .w(px(note.size.width))
        .h(px(note.size.height))
        .bg(fill)
        .rounded(px(4.0))
        .p(px(12.0))
        .overflow_hidden()
        .text_sm()
        .text_color(text)
        .cursor(CursorStyle::OpenHand)
        .children(lines)
        .child(
            div()
                .absolute()
                .right_0()
                .bottom_0()
                .w(px(RESIZE_HANDLE_SIZE))
                .h(px(RESIZE_HANDLE_SIZE))
                .cursor(CursorStyle::ResizeUpLeftDownRight)
                .border_r_2()
                .border_b_2()
                .border_color(hsla(0.0, 0.0, 0.0, 0.25)),
        );

    card = if visual.dragging {
        card.shadow_lg().opacity(0.9)
    } else {
        card.shadow_md()
    };
    if visual.pending_delete {
        card = card.border_2().border_color(hsla(0.0, 0.8, 0.5, 1.0)).opacity(0.6);
    }
    if editing {
        card = card
            .cursor(CursorStyle::IBeam)
            .border_2()
            .border_color(hsla(0.0, 0.0, 0.2, 0.6));
    }
    card
}

pub fn render_trash(rect: Rect, dragging: bool, active: bool, cx: &Context<StickyBoardApp>) -> Div {
    let muted = cx.theme().muted;
    let muted_fg = cx.theme().muted_foreground;
    let danger = hsla(0.0, 0.75, 0.55, 1.0);

    let (bg, border, label) = if active {
        (danger.opacity(0.25), danger, "Release")
    } else if dragging {
        (muted, danger.opacity(0.6), "Trash")
    } else {
        (muted, muted_fg.opacity(0.4), "Trash")
    };

    div()
        .absolute()
        .left(px(rect.left))
        .top(px(rect.top))
        .w(px(rect.width()))
        .h(px(rect.height()))
        .rounded(px(8.0))
        .border_2()
        .border_color(border)
        .bg(bg)
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_color(if active { danger } else { muted_fg })
                .child(label),
        )
}

pub fn render_empty_state(cx: &Context<StickyBoardApp>) -> Div {
    let muted_fg = cx.theme().muted_foreground;

    div().absolute().size_full().flex().items_center().justify_center().child(
        v_flex()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(muted_fg)
                    .child("No notes yet"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(muted_fg.opacity(0.8))
                    .child("Click anywhere to add one"),
            ),
    )
}
