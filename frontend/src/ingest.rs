//! Turns `(section, key, value)` events into a [`Settings`] record.
//!
//! `[Settings]` and `[Gamepad]` set scalar options. Every other section is a
//! menu, and each of its lines adds one entry of the form
//! `title;icon path;command` (the key is ignored). Values that fail
//! validation leave the previous value in place; nothing here aborts a load.

use crate::config::{
    keys, limits, Settings, DEFAULT_ESC_QUIT, DEFAULT_GAMEPAD_ENABLED, DEFAULT_RESET_ON_BACK,
    DEFAULT_SCROLL_INDICATORS, RESERVED_SELECT_CMD, SECTION_GAMEPAD, SECTION_SETTINGS,
};
use crate::gamepad::binding_for_key;
use crate::menu::{Entry, Menu};
use crate::style::{
    convert_bool, hex_to_color, is_percent, BackgroundMode, Color, Spacing, TextOversizeMode,
    PERCENT_MAX_CHARS,
};
#[cfg(unix)]
use crate::style::OnLaunch;
use crate::util::{clean_path, copy_path, copy_string};

pub const ENTRY_DELIMITER: char = ';';

/// Parses an integer and keeps it only if it lies in `min..=max` and fits `T`.
///
/// The whole value must be a number: `64px` or ` 64` are rejected rather than
/// read as 64.
fn bounded<T: TryFrom<i64>>(value: &str, min: i64, max: i64) -> Option<T> {
    value
        .parse::<i64>()
        .ok()
        .filter(|v| (min..=max).contains(v))
        .and_then(|v| T::try_from(v).ok())
}

fn set_color(target: &mut Color, key: &str, value: &str) {
    match hex_to_color(value) {
        Some(color) => *target = color,
        None => log::debug!("Ignoring invalid color \"{}\" for {}", value, key),
    }
}

fn set_percent(target: &mut String, value: &str) {
    if is_percent(value) {
        *target = value.to_string();
    }
}

/// Parser state for one ingestion pass.
///
/// Holds the settings exclusively for the whole pass, along with the menu
/// being filled and a cursor on its most recently appended entry.
pub struct Ingest<'a> {
    settings: &'a mut Settings,
    menu: Option<usize>,
    entry: Option<usize>,
}

impl<'a> Ingest<'a> {
    pub fn new(settings: &'a mut Settings) -> Self {
        Ingest {
            settings,
            menu: None,
            entry: None,
        }
    }

    /// Index of the menu receiving entries.
    pub fn current_menu(&self) -> Option<usize> {
        self.menu
    }

    /// Index, within the current menu, of the last entry appended.
    pub fn current_entry(&self) -> Option<usize> {
        self.entry
    }

    pub fn handle(&mut self, section: &str, key: &str, value: &str) {
        match section {
            SECTION_SETTINGS => self.handle_setting(key, value),
            SECTION_GAMEPAD => self.handle_gamepad(key, value),
            _ => self.handle_entry(section, value),
        }
    }

    fn handle_setting(&mut self, key: &str, value: &str) {
        let s = &mut *self.settings;
        match key {
            keys::BACKGROUND_IMAGE => s.background_image = copy_path(value),
            keys::TITLE_FONT => s.title_font_path = copy_path(value),
            keys::TITLE_FONT_SIZE => {
                if let Some(size) = bounded(value, limits::MIN_FONT_SIZE, i64::MAX) {
                    s.font_size = size;
                }
            }
            keys::TITLE_COLOR => set_color(&mut s.title_color, key, value),
            keys::BACKGROUND_MODE => {
                s.background_mode = match value {
                    "Image" => BackgroundMode::Image,
                    "Slideshow" => BackgroundMode::Slideshow,
                    _ => BackgroundMode::Color,
                }
            }
            keys::BACKGROUND_COLOR => set_color(&mut s.background_color, key, value),
            keys::SLIDESHOW_DIRECTORY => s.slideshow_directory = copy_path(value),
            keys::ICON_SIZE => {
                if let Some(size) = bounded(value, limits::MIN_ICON_SIZE, limits::MAX_ICON_SIZE) {
                    s.icon_size = size;
                }
            }
            keys::DEFAULT_MENU => s.default_menu = copy_string(value),
            keys::HIGHLIGHT_COLOR => set_color(&mut s.highlight_color, key, value),
            keys::HIGHLIGHT_CORNER_RADIUS => {
                if let Some(rx) = bounded(value, limits::MIN_RX_SIZE, limits::MAX_RX_SIZE) {
                    s.highlight_rx = rx;
                }
            }
            keys::TITLE_PADDING => {
                if let Some(padding) = bounded(value, 0, i64::MAX) {
                    s.title_padding = padding;
                }
            }
            keys::MAX_BUTTONS => {
                if let Some(max) = bounded(value, 1, i64::MAX) {
                    s.max_buttons = max;
                }
            }
            keys::ICON_SPACING => {
                if value.contains('%') && value.len() < limits::ICON_SPACING_PERCENT_MAX_CHARS {
                    s.icon_spacing = Spacing::Percent(value.to_string());
                } else if let Some(px) = bounded(value, 0, i64::MAX) {
                    s.icon_spacing = Spacing::Pixels(px);
                }
            }
            keys::HIGHLIGHT_VPADDING => {
                if let Some(padding) = bounded(value, 0, i64::MAX) {
                    s.highlight_vpadding = padding;
                }
            }
            keys::HIGHLIGHT_HPADDING => {
                if let Some(padding) = bounded(value, 0, i64::MAX) {
                    s.highlight_hpadding = padding;
                }
            }
            keys::SLIDESHOW_IMAGE_DURATION => {
                if let Some(ms) = bounded(
                    value,
                    limits::MIN_SLIDESHOW_IMAGE_DURATION,
                    limits::MAX_SLIDESHOW_IMAGE_DURATION,
                ) {
                    s.slideshow_image_duration = ms;
                }
            }
            keys::SLIDESHOW_TRANSITION_TIME => {
                if let Some(ms) = bounded(
                    value,
                    limits::MIN_SLIDESHOW_TRANSITION_TIME,
                    limits::MAX_SLIDESHOW_TRANSITION_TIME,
                ) {
                    s.slideshow_transition_time = ms;
                }
            }
            keys::TITLE_OPACITY => set_percent(&mut s.title_opacity, value),
            keys::HIGHLIGHT_OPACITY => set_percent(&mut s.highlight_opacity, value),
            keys::BUTTON_CENTERLINE => {
                if value.len() < PERCENT_MAX_CHARS {
                    s.button_centerline = value.to_string();
                }
            }
            keys::SCROLL_INDICATORS => {
                s.scroll_indicators = convert_bool(value, DEFAULT_SCROLL_INDICATORS)
            }
            keys::SCROLL_INDICATOR_COLOR => set_color(&mut s.scroll_indicator_color, key, value),
            keys::SCROLL_INDICATOR_OPACITY => set_percent(&mut s.scroll_indicator_opacity, value),
            keys::TITLE_OVERSIZE_MODE => match value {
                "Shrink" => s.title_oversize_mode = TextOversizeMode::Shrink,
                "None" => s.title_oversize_mode = TextOversizeMode::None,
                _ => {}
            },
            #[cfg(unix)]
            keys::ON_LAUNCH => {
                s.on_launch = match value {
                    "None" => OnLaunch::None,
                    "Blank" => OnLaunch::Blank,
                    _ => OnLaunch::Hide,
                }
            }
            keys::RESET_ON_BACK => s.reset_on_back = convert_bool(value, DEFAULT_RESET_ON_BACK),
            keys::ESC_QUIT => s.esc_quit = convert_bool(value, DEFAULT_ESC_QUIT),
            _ => log::debug!("Ignoring unknown setting \"{}\"", key),
        }
    }

    fn handle_gamepad(&mut self, key: &str, value: &str) {
        let s = &mut *self.settings;
        match key {
            keys::GAMEPAD_ENABLED => s.gamepad_enabled = convert_bool(value, DEFAULT_GAMEPAD_ENABLED),
            keys::GAMEPAD_DEVICE => {
                if let Some(device) = bounded(value, 0, i64::MAX) {
                    s.gamepad_device = device;
                }
            }
            keys::GAMEPAD_MAPPINGS_FILE => s.gamepad_mappings_file = copy_path(value),
            _ => match binding_for_key(key) {
                Some((kind, index)) => s.add_gamepad_control(kind, index, key, value),
                None => log::debug!("Ignoring unknown gamepad setting \"{}\"", key),
            },
        }
    }

    /// Makes `name` the current menu, creating it on first sight.
    fn select_menu(&mut self, name: &str) -> usize {
        if self.menu.map(|i| self.settings.menus[i].name.as_str()) == Some(name) {
            return self.menu.unwrap_or_default();
        }
        let index = match self.settings.menu_index(name) {
            Some(index) => index,
            None => {
                self.settings.menus.push(Menu::new(name));
                self.settings.menus.len() - 1
            }
        };
        self.menu = Some(index);
        self.entry = self.settings.menus[index].num_entries().checked_sub(1);
        index
    }

    fn handle_entry(&mut self, section: &str, value: &str) {
        let menu_index = self.select_menu(section);
        let mut tokens = value.split(ENTRY_DELIMITER).filter(|t| !t.is_empty());
        let Some(title) = tokens.next() else {
            log::debug!("Skipping empty entry in menu \"{}\"", section);
            return;
        };

        // Append first, then fill in and validate; a bad line is popped again.
        let menu = &mut self.settings.menus[menu_index];
        let previous_entry = self.entry;
        menu.entries
            .push(Entry::new(title.to_string(), String::new(), String::new()));
        self.entry = Some(menu.entries.len() - 1);
        let mut fields = 1;
        if let Some(entry) = menu.entries.last_mut() {
            for token in tokens.by_ref().take(2) {
                if fields == 1 {
                    entry.icon_path = token.to_string();
                    clean_path(&mut entry.icon_path);
                } else {
                    entry.cmd = token.to_string();
                }
                fields += 1;
            }
        }

        let rejected = fields != 3
            || menu
                .entries
                .last()
                .is_some_and(|e| e.cmd == RESERVED_SELECT_CMD);
        if rejected {
            menu.entries.pop();
            if menu.num_entries() == 0 {
                self.entry = None;
            } else {
                self.entry = previous_entry;
            }
            log::debug!("Skipping invalid entry \"{}\" in menu \"{}\"", value, section);
        }
    }
}
