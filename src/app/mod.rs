// SPDX-License-Identifier: MPL-2.0
//! Demo application presenting a chip over an otherwise empty window.
//!
//! The `App` struct owns one banner lifecycle at a time, forwards window
//! input to it, and drives its timers from a tick subscription. A finished
//! banner is dropped and a fresh one can be shown from the window controls.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::application::port::ButtonStyle;
use crate::banner::{BannerLifecycle, ButtonSpec};
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::chip::{self, ChipSurface, PointerTracker, WindowOverlay};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

type Chip = BannerLifecycle<WindowOverlay, ChipSurface>;

const DEFAULT_TITLE: &str = "Saved";
const DIAGNOSTICS_FILE: &str = "iced_chip_diagnostics.json";

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;

/// Root application state.
pub struct App {
    flags: Flags,
    config: Config,
    banner: Option<Chip>,
    pointer: PointerTracker,
    diagnostics: DiagnosticsCollector,
    shows: Rc<Cell<u32>>,
    dismissals: Rc<Cell<u32>>,
    undos: Rc<Cell<u32>>,
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banner_state", &self.banner.as_ref().map(Chip::state))
            .field("shows", &self.shows.get())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match config::load() {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Falling back to default settings: {err}");
                Config::default()
            }
        };
        let mut app = App {
            flags,
            diagnostics: DiagnosticsCollector::new(config.diagnostics_capacity()),
            config,
            banner: None,
            pointer: PointerTracker::default(),
            shows: Rc::new(Cell::new(0)),
            dismissals: Rc::new(Cell::new(0)),
            undos: Rc::new(Cell::new(0)),
            status: String::new(),
        };
        app.present(Instant::now());
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("iced_chip")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let visible = self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.state().is_attached());
        Subscription::batch([
            subscription::create_pointer_subscription(),
            subscription::create_tick_subscription(visible),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                if let Some(banner) = self.banner.as_mut() {
                    banner.tick(now);
                }
                self.diagnostics.process_pending();
                self.drop_finished_banner();
            }
            Message::Chip(chip::Message::ButtonPressed(index)) => {
                if let Some(banner) = self.banner.as_mut() {
                    banner.click_button(index);
                }
            }
            Message::Chip(input) => {
                let now = Instant::now();
                if let (Some(event), Some(banner)) =
                    (self.pointer.translate(input, now), self.banner.as_mut())
                {
                    banner.handle_pointer(event);
                }
            }
            Message::ShowPressed => {
                if self.banner.is_none() {
                    self.present(Instant::now());
                }
            }
            Message::HidePressed => {
                if let Some(banner) = self.banner.as_mut() {
                    banner.hide(Instant::now());
                }
            }
            Message::HideNowPressed => {
                if let Some(banner) = self.banner.as_mut() {
                    banner.hide_now(Instant::now());
                }
                self.drop_finished_banner();
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let state = self
            .banner
            .as_ref()
            .map_or_else(|| String::from("none"), |banner| banner.state().to_string());

        let controls = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Show")).on_press_maybe(self.banner.is_none().then_some(Message::ShowPressed)))
            .push(button(text("Hide")).on_press(Message::HidePressed))
            .push(button(text("Hide now")).on_press(Message::HideNowPressed))
            .push(button(text("Export diagnostics")).on_press(Message::ExportDiagnostics));

        let summary = format!(
            "Chip: {state} | shown {} | dismissed {} | undo {}",
            self.shows.get(),
            self.dismissals.get(),
            self.undos.get()
        );
        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text(summary).size(typography::BODY))
            .push(controls)
            .push(text(self.status.as_str()).size(typography::BODY));

        let page = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG);

        let overlay = match self.banner.as_ref() {
            Some(banner) => chip::view(banner, now).map(Message::Chip),
            None => Container::new(text("")).into(),
        };

        Stack::new().push(page).push(overlay).into()
    }

    /// Creates a fresh banner from the flags and config and shows it.
    fn present(&mut self, now: Instant) {
        let undos = Rc::clone(&self.undos);
        let mut options = self
            .config
            .banner_options()
            .with_swipe_to_dismiss(true)
            .with_progress(self.flags.progress)
            .add_button(
                ButtonSpec::new("Undo", ButtonStyle::Primary)
                    .on_click(move || undos.set(undos.get() + 1)),
            );
        if self.flags.sticky {
            options = options.infinite_duration();
        }

        let mut banner = BannerLifecycle::new(
            WindowOverlay::new(),
            ChipSurface::new(),
            self.config.banner_settings(),
            options,
        );
        banner.set_swipe_settings(self.config.swipe_settings());
        banner.set_diagnostics(self.diagnostics.handle());
        banner.set_title(self.flags.title.as_deref().unwrap_or(DEFAULT_TITLE));
        banner.set_subtitle(self.flags.subtitle.as_deref().unwrap_or_default());
        banner.set_icon("check");

        let shows = Rc::clone(&self.shows);
        banner.on_show(move || shows.set(shows.get() + 1));
        let dismissals = Rc::clone(&self.dismissals);
        banner.on_dismiss(move || dismissals.set(dismissals.get() + 1));

        if let Err(err) = banner.show(now) {
            self.status = format!("Could not show chip: {err}");
            return;
        }
        let (width, height) = chip::measured_size(banner.surface(), banner.settings());
        banner.on_layout(width, height, now);
        self.banner = Some(banner);
    }

    fn drop_finished_banner(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|banner| banner.state().is_removed())
        {
            self.banner = None;
            self.pointer = PointerTracker::default();
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = std::env::temp_dir().join(DIAGNOSTICS_FILE);
        self.status = match self.diagnostics.export_json() {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => format!(
                    "Diagnostics written to {} ({} events, {} evicted)",
                    path.display(),
                    self.diagnostics.len(),
                    self.diagnostics.evicted()
                ),
                Err(err) => format!("Could not write diagnostics: {err}"),
            },
            Err(err) => format!("Could not serialize diagnostics: {err}"),
        };
    }
}
