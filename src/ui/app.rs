//! Main view - routes gpui events into the board surface.

use super::canvas::{render_empty_state, render_header, render_note, render_trash, NoteVisual};
use super::prompt::render_create_prompt;
use crate::board::{BoardSurface, Key, KeyInput};
use crate::constants::HEADER_HEIGHT;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::perf::TARGET_FRAME_MS;
use crate::profile_scope;
use crate::settings::Settings;
use crate::store::NoteStore;
use crate::types::{NoteSize, Position, Size};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

pub struct StickyBoardApp {
    board: BoardSurface,
    settings: Settings,
    coords: CoordinateContext,
    focus_handle: FocusHandle,
}

impl StickyBoardApp {
    pub fn new(store: NoteStore, settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let viewport = window.bounds().size;
        let board_size = Size::new(
            f32::from(viewport.width),
            f32::from(viewport.height) - HEADER_HEIGHT,
        );
        let trash = settings.trash.rect_in(board_size);

        let board = BoardSurface::new(store, trash);

        tracing::info!(notes = board.store().len(), key = board.store().key(), "Board ready");

        Self {
            board,
            settings,
            coords: CoordinateContext::below_header(),
            focus_handle,
        }
    }

    fn board_point(&self, position: Point<Pixels>) -> Position {
        CoordinateConverter::window_to_board(
            Position::new(f32::from(position.x), f32::from(position.y)),
            &self.coords,
        )
    }

    fn board_size(window: &Window) -> Size {
        let viewport = window.bounds().size;
        Size::new(
            f32::from(viewport.width),
            (f32::from(viewport.height) - HEADER_HEIGHT).max(0.0),
        )
    }

    // ========================================================================
    // Pointer
    // ========================================================================

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        let point = self.board_point(event.position);
        let result = self.board.pointer_down(point, event.click_count);
        tracing::trace!(?result, x = point.x, y = point.y, "Pointer down");
        cx.notify();
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        profile_scope!("handle_mouse_move");
        let point = self.board_point(event.position);
        if self.board.pointer_move(point).is_some() {
            cx.notify();
        }
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(outcome) = self.board.pointer_up() {
            if outcome.deleted {
                tracing::info!(note_id = %outcome.note_id, "Note dropped on trash");
            }
            cx.notify();
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let input = key_input(&event.keystroke);
        if self.board.key_down(&input) {
            cx.stop_propagation();
            cx.notify();
        }
    }

    // ========================================================================
    // Create prompt
    // ========================================================================

    pub(super) fn select_prompt_size(&mut self, size: NoteSize, cx: &mut Context<Self>) {
        self.board.select_prompt_size(size);
        cx.notify();
    }

    pub(super) fn select_prompt_color(&mut self, color: &str, cx: &mut Context<Self>) {
        if self.board.select_prompt_color(color) {
            cx.notify();
        }
    }

    pub(super) fn confirm_prompt(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(note) = self.board.confirm_create() {
            tracing::info!(note_id = %note.id, size = ?note.size, "Created note");
        }
        window.focus(&self.focus_handle);
        cx.notify();
    }

    pub(super) fn dismiss_prompt(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.board.dismiss_prompt();
        window.focus(&self.focus_handle);
        cx.notify();
    }
}

/// Map a gpui keystroke onto the board's key vocabulary.
fn key_input(keystroke: &Keystroke) -> KeyInput {
    let key = match keystroke.key.as_str() {
        "enter" => Key::Enter,
        "escape" => Key::Escape,
        "backspace" => Key::Backspace,
        _ => match &keystroke.key_char {
            Some(text) if !text.is_empty() => Key::Text(text.clone()),
            _ if keystroke.key == "space" => Key::Text(" ".to_string()),
            _ => Key::Other,
        },
    };
    let modifiers = &keystroke.modifiers;
    KeyInput {
        key,
        ctrl: modifiers.control || modifiers.platform,
    }
}

impl Focusable for StickyBoardApp {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for StickyBoardApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render", TARGET_FRAME_MS);

        let board_size = Self::board_size(window);
        self.board
            .set_trash_rect(self.settings.trash.rect_in(board_size));

        let bg = cx.theme().background;
        let capturing = self.board.is_capturing();
        let dragging = self.board.dragging_note().map(str::to_string);

        let notes: Vec<AnyElement> = self
            .board
            .notes_by_z()
            .into_iter()
            .map(|note| {
                let visual = NoteVisual {
                    dragging: dragging.as_deref() == Some(note.id.as_str()),
                    pending_delete: self.board.is_pending_delete(&note.id),
                    draft: self
                        .board
                        .editing()
                        .filter(|edit| edit.note_id() == note.id)
                        .map(|edit| edit.draft().to_string()),
                };
                render_note(note, &visual).into_any_element()
            })
            .collect();

        let trash = render_trash(
            self.board.trash_rect(),
            capturing,
            self.board.is_over_trash(),
            cx,
        );
        let empty = self.board.is_empty();
        let prompt = self
            .board
            .prompt()
            .cloned()
            .map(|prompt| render_create_prompt(&prompt, board_size, cx));

        div()
            .id("stickyboard-root")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .size_full()
            .flex()
            .flex_col()
            .bg(bg)
            // Move/up listeners exist only while a drag holds the pointer
            .when(capturing, |d| {
                d.on_mouse_move(cx.listener(Self::handle_mouse_move))
                    .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
                    .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            })
            .child(render_header(self.board.store().len(), cx))
            .child(
                div()
                    .id("stickyboard-board")
                    .relative()
                    .flex_1()
                    .w_full()
                    .overflow_hidden()
                    .when(capturing, |d| d.cursor(CursorStyle::ClosedHand))
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
                    .when(empty, |d| d.child(render_empty_state(cx)))
                    .children(notes)
                    .child(trash),
            )
            .children(prompt)
    }
}
