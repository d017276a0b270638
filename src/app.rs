//! Application state and input handling for sprintboard.
//!
//! This module contains the `App` struct which holds the active theme,
//! the router and current location, and the small amount of view state
//! the dashboard needs (sprint selection for the chart tooltip and the
//! vertical scroll position).

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::{load_theme, ThemeSource};
use crate::router::{Router, View};
use crate::theme::Theme;
use crate::ui::SPRINT_PROGRESS;

/// Rows moved by PageUp / PageDown
const PAGE_SCROLL: u16 = 10;

/// Application state
pub struct App {
    pub theme: Theme,
    pub theme_source: ThemeSource,
    pub theme_needs_reload: Arc<Mutex<bool>>,
    pub router: Router,
    pub location: String,
    // Location prompt contents while the user is typing a path
    pub location_input: Option<String>,
    // Sprint whose values are shown on the chart tooltip
    pub selected_sprint: Option<usize>,
    // First content row shown when the page is taller than the terminal
    pub scroll_offset: u16,
    // Largest useful offset, updated after each draw
    pub max_scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(theme: Theme, theme_source: ThemeSource, location: impl Into<String>) -> Self {
        Self {
            theme,
            theme_source,
            theme_needs_reload: Arc::new(Mutex::new(false)),
            router: Router::new(),
            location: location.into(),
            location_input: None,
            selected_sprint: None,
            scroll_offset: 0,
            max_scroll: 0,
            should_quit: false,
        }
    }

    /// View mounted at the current location, if any
    pub fn current_view(&self) -> Option<View> {
        self.router.resolve(&self.location)
    }

    pub fn navigate(&mut self, path: impl Into<String>) {
        self.location = path.into();
        self.selected_sprint = None;
        self.scroll_offset = 0;
        tracing::info!(location = %self.location, view = ?self.current_view(), "navigated");
    }

    /// Apply a key press to the app state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.location_input.is_some() {
            self.handle_location_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.location_input = Some(String::from("/")),
            KeyCode::Right | KeyCode::Char('l') => self.select_next_sprint(),
            KeyCode::Left | KeyCode::Char('h') => self.select_previous_sprint(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Esc => self.selected_sprint = None,
            _ => {}
        }
    }

    /// Record how far the last frame could scroll and pull the offset
    /// back inside that range (e.g. after the terminal grew).
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    fn scroll_down(&mut self, rows: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows).min(self.max_scroll);
    }

    fn scroll_up(&mut self, rows: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    fn handle_location_key(&mut self, code: KeyCode) {
        let Some(input) = self.location_input.as_mut() else {
            return;
        };

        match code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Enter => {
                if let Some(path) = self.location_input.take() {
                    self.navigate(path);
                }
            }
            KeyCode::Esc => self.location_input = None,
            _ => {}
        }
    }

    fn select_next_sprint(&mut self) {
        if self.current_view() != Some(View::Dashboard) {
            return;
        }
        let count = SPRINT_PROGRESS.len();
        self.selected_sprint = Some(match self.selected_sprint {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    fn select_previous_sprint(&mut self) {
        if self.current_view() != Some(View::Dashboard) {
            return;
        }
        let count = SPRINT_PROGRESS.len();
        self.selected_sprint = Some(match self.selected_sprint {
            Some(0) | None => count - 1,
            Some(index) => index - 1,
        });
    }

    /// Reload the theme from disk if the watcher flagged a change.
    /// A theme that fails to load leaves the current one in place.
    pub fn reload_theme_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.theme_needs_reload.lock() else {
                return;
            };
            std::mem::take(&mut *flag)
        };

        if !needs_reload {
            return;
        }

        match load_theme(&self.theme_source) {
            Ok(theme) => {
                tracing::info!(source = ?self.theme_source, "theme reloaded");
                self.theme = theme;
            }
            Err(e) => tracing::warn!(error = %e, "keeping previous theme"),
        }
    }
}
