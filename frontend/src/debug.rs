//! Debug-mode dumps of the parsed configuration.
//!
//! Nothing is formatted unless debug logging is enabled.

use crate::config::Settings;
use crate::menu::Menu;
use crate::slideshow::Slideshow;
use std::fmt::Write;

const RULE: &str = "----------------------------------------------------------";

/// Settings and gamepad bindings rendered as TOML. Menus are left out; see
/// [`menu_report`].
pub fn settings_report(settings: &Settings) -> Result<String, toml::ser::Error> {
    toml::to_string(settings)
}

pub fn menu_report(menus: &[Menu]) -> String {
    if menus.is_empty() {
        return "No valid menus found\n".to_string();
    }
    let mut out = String::new();
    for (i, menu) in menus.iter().enumerate() {
        let _ = writeln!(out, "Menu Name: {}", menu.name);
        let _ = writeln!(out, "Number of Entries: {}", menu.num_entries());
        for (j, entry) in menu.entries.iter().enumerate() {
            let _ = writeln!(out, "Entry {} Title: {}", j, entry.title);
            let _ = writeln!(out, "Entry {} Icon Path: {}", j, entry.icon_path);
            let _ = writeln!(out, "Entry {} Command: {}", j, entry.cmd);
            if j + 1 != menu.num_entries() {
                out.push('\n');
            }
        }
        if i + 1 != menus.len() {
            let _ = writeln!(out, "{}", RULE);
        }
    }
    out
}

fn log_lines(title: &str, text: &str) {
    log::debug!("======================== {} ========================", title);
    for line in text.lines() {
        log::debug!("{}", line);
    }
}

pub fn debug_settings(settings: &Settings) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    match settings_report(settings) {
        Ok(text) => log_lines("Settings", &text),
        Err(e) => log::warn!("Could not format settings: {}", e),
    }
}

pub fn debug_menu_entries(menus: &[Menu]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    log_lines("Menu Entries", &menu_report(menus));
}

pub fn debug_slideshow(slideshow: &Slideshow, dir: &str) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    log::debug!("======================== Slideshow ========================");
    log::debug!("Found {} images in directory {}:", slideshow.images.len(), dir);
    for image in slideshow.ordered() {
        log::debug!("{}", image.display());
    }
}
