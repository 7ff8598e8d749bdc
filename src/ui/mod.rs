//! Desktop frontend built on gpui.
//!
//! The view owns a [`BoardSurface`](crate::board::BoardSurface) and only
//! translates platform events into board calls and board queries into
//! elements. All interaction rules live in the board.

mod app;
mod canvas;
mod prompt;

pub use app::StickyBoardApp;

use crate::settings::Settings;
use crate::store::NoteStore;
use gpui::*;
use gpui_component::Root;

/// Open the main window and run the event loop until the app quits.
pub fn run(store: NoteStore, settings: Settings) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1100.0), px(800.0)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Sticky Notes".into()),
                ..Default::default()
            }),
            focus: true,
            show: true,
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|cx| StickyBoardApp::new(store, settings, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
