//! Create prompt modal - size and color choice for a new note.

use super::app::StickyBoardApp;
use super::canvas::hex_to_rgb;
use crate::board::CreatePrompt;
use crate::constants::{HEADER_HEIGHT, MODAL_BACKDROP_OPACITY, NOTE_PALETTE, PROMPT_WIDTH};
use crate::types::{NoteSize, Size};
use gpui::*;
use gpui_component::{h_flex, v_flex, ActiveTheme as _};

fn render_size_option(size: NoteSize, selected: bool, cx: &Context<StickyBoardApp>) -> Stateful<Div> {
    let (bg, fg) = if selected {
        (cx.theme().primary, cx.theme().primary_foreground)
    } else {
        (cx.theme().muted, cx.theme().foreground)
    };
    let dims = size.dimensions();

    div()
        .id(ElementId::Name(format!("prompt-size-{}", size.label()).into()))
        .w_full()
        .px(px(12.0))
        .py(px(8.0))
        .rounded(px(6.0))
        .bg(bg)
        .cursor_pointer()
        .hover(|s| s.opacity(0.85))
        .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
            this.select_prompt_size(size, cx);
        }))
        .child(
            h_flex()
                .justify_between()
                .text_sm()
                .text_color(fg)
                .child(div().font_weight(FontWeight::MEDIUM).child(size.label()))
                .child(format!("{} x {}", dims.width, dims.height)),
        )
}

fn render_color_swatch(color: &'static str, selected: bool, cx: &Context<StickyBoardApp>) -> Stateful<Div> {
    let ring = if selected {
        cx.theme().foreground
    } else {
        cx.theme().transparent
    };

    div()
        .id(ElementId::Name(format!("prompt-color-{color}").into()))
        .size(px(32.0))
        .rounded(px(16.0))
        .bg(rgb(hex_to_rgb(color)))
        .border_2()
        .border_color(ring)
        .cursor_pointer()
        .on_click(cx.listener(move |this, _: &ClickEvent, _, cx| {
            this.select_prompt_color(color, cx);
        }))
}

/// Modal over the whole window. Clicking the backdrop dismisses it.
pub fn render_create_prompt(
    prompt: &CreatePrompt,
    board_size: Size,
    cx: &mut Context<StickyBoardApp>,
) -> impl IntoElement {
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;

    let origin = prompt.placement(board_size);

    let sizes = NoteSize::all()
        .iter()
        .map(|&size| render_size_option(size, prompt.size == size, cx))
        .collect::<Vec<_>>();
    let swatches = NOTE_PALETTE
        .iter()
        .map(|&color| render_color_swatch(color, prompt.color.eq_ignore_ascii_case(color), cx))
        .collect::<Vec<_>>();

    let content = v_flex()
        .id("create-prompt")
        .absolute()
        .left(px(origin.x))
        .top(px(origin.y + HEADER_HEIGHT))
        .w(px(PROMPT_WIDTH))
        .p(px(16.0))
        .gap_3()
        .bg(bg)
        .border_1()
        .border_color(border)
        .rounded(px(10.0))
        .shadow_lg()
        .on_mouse_down(MouseButton::Left, |_, _, cx| {
            cx.stop_propagation();
        })
        .child(
            div()
                .text_base()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(fg)
                .child("New note"),
        )
        .child(div().text_xs().text_color(muted_fg).child("Size"))
        .child(v_flex().gap_1().children(sizes))
        .child(div().text_xs().text_color(muted_fg).child("Color"))
        .child(h_flex().gap_2().flex_wrap().children(swatches))
        .child(
            h_flex()
                .pt(px(8.0))
                .gap_2()
                .justify_end()
                .child(
                    div()
                        .id("create-prompt-cancel")
                        .px(px(12.0))
                        .py(px(6.0))
                        .rounded(px(6.0))
                        .text_sm()
                        .text_color(fg)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.7))
                        .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.dismiss_prompt(window, cx);
                        }))
                        .child("Cancel"),
                )
                .child(
                    div()
                        .id("create-prompt-confirm")
                        .px(px(12.0))
                        .py(px(6.0))
                        .rounded(px(6.0))
                        .bg(primary)
                        .text_sm()
                        .font_weight(FontWeight::MEDIUM)
                        .text_color(primary_fg)
                        .cursor_pointer()
                        .hover(|s| s.opacity(0.85))
                        .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.confirm_prompt(window, cx);
                        }))
                        .child("Create"),
                ),
        );

    deferred(
        div()
            .id("create-prompt-backdrop")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, MODAL_BACKDROP_OPACITY))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, cx| {
                    this.dismiss_prompt(window, cx);
                }),
            )
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(content),
    )
    .with_priority(1500)
}
