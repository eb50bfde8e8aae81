use crate::error::Error;
use crate::gamepad::{ControlKind, GamepadControl};
use crate::ingest::Ingest;
use crate::menu::{get_menu, Menu};
use crate::style::{BackgroundMode, Color, OnLaunch, Spacing, TextOversizeMode};
use crate::{ini, util};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const EXECUTABLE_TITLE: &str = "launcher";
pub const FILENAME_DEFAULT_CONFIG: &str = "config.ini";
pub const FILENAME_LOG: &str = "launcher.log";
#[cfg(unix)]
pub const PATH_CONFIG_SYSTEM: &str = "/etc/launcher";

pub const SECTION_SETTINGS: &str = "Settings";
pub const SECTION_GAMEPAD: &str = "Gamepad";

/// Command that may not be bound to an entry.
pub const RESERVED_SELECT_CMD: &str = ":select";

pub mod keys {
    pub const BACKGROUND_IMAGE: &str = "Background Image";
    pub const TITLE_FONT: &str = "Title Font";
    pub const TITLE_FONT_SIZE: &str = "Title Font Size";
    pub const TITLE_COLOR: &str = "Title Color";
    pub const BACKGROUND_MODE: &str = "Background Mode";
    pub const BACKGROUND_COLOR: &str = "Background Color";
    pub const SLIDESHOW_DIRECTORY: &str = "Slideshow Directory";
    pub const ICON_SIZE: &str = "Icon Size";
    pub const DEFAULT_MENU: &str = "Default Menu";
    pub const HIGHLIGHT_COLOR: &str = "Highlight Color";
    pub const HIGHLIGHT_CORNER_RADIUS: &str = "Highlight Corner Radius";
    pub const TITLE_PADDING: &str = "Title Padding";
    pub const MAX_BUTTONS: &str = "Max Buttons";
    pub const ICON_SPACING: &str = "Icon Spacing";
    pub const HIGHLIGHT_VPADDING: &str = "Highlight Vertical Padding";
    pub const HIGHLIGHT_HPADDING: &str = "Highlight Horizontal Padding";
    pub const SLIDESHOW_IMAGE_DURATION: &str = "Slideshow Image Duration";
    pub const SLIDESHOW_TRANSITION_TIME: &str = "Slideshow Transition Time";
    pub const TITLE_OPACITY: &str = "Title Opacity";
    pub const HIGHLIGHT_OPACITY: &str = "Highlight Opacity";
    pub const BUTTON_CENTERLINE: &str = "Button Centerline";
    pub const SCROLL_INDICATORS: &str = "Scroll Indicators";
    pub const SCROLL_INDICATOR_COLOR: &str = "Scroll Indicator Color";
    pub const SCROLL_INDICATOR_OPACITY: &str = "Scroll Indicator Opacity";
    pub const TITLE_OVERSIZE_MODE: &str = "Title Oversize Mode";
    pub const ON_LAUNCH: &str = "On Launch";
    pub const RESET_ON_BACK: &str = "Reset On Back";
    pub const ESC_QUIT: &str = "Esc Quit";

    pub const GAMEPAD_ENABLED: &str = "Enabled";
    pub const GAMEPAD_DEVICE: &str = "Device Index";
    pub const GAMEPAD_MAPPINGS_FILE: &str = "Mappings File";
}

pub mod limits {
    pub const MIN_FONT_SIZE: i64 = 1;
    pub const MIN_ICON_SIZE: i64 = 32;
    pub const MAX_ICON_SIZE: i64 = 1024;
    pub const MIN_RX_SIZE: i64 = 0;
    pub const MAX_RX_SIZE: i64 = 1000;
    /// Milliseconds.
    pub const MIN_SLIDESHOW_IMAGE_DURATION: i64 = 3000;
    pub const MAX_SLIDESHOW_IMAGE_DURATION: i64 = 600_000;
    pub const MIN_SLIDESHOW_TRANSITION_TIME: i64 = 0;
    pub const MAX_SLIDESHOW_TRANSITION_TIME: i64 = 10_000;
    /// Exclusive bound on the length of a percent-form icon spacing.
    pub const ICON_SPACING_PERCENT_MAX_CHARS: usize = 6;
}

pub const DEFAULT_SCROLL_INDICATORS: bool = true;
pub const DEFAULT_RESET_ON_BACK: bool = false;
pub const DEFAULT_ESC_QUIT: bool = false;
pub const DEFAULT_GAMEPAD_ENABLED: bool = false;

/// Everything read from the config file.
///
/// Built once with [`Settings::default`] and filled in by the ingestion pass;
/// the renderer only reads it afterwards.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub default_menu: Option<String>,
    pub max_buttons: u32,
    pub background_mode: BackgroundMode,
    pub background_color: Color,
    pub background_image: Option<String>,
    pub slideshow_directory: Option<String>,
    pub slideshow_image_duration: u32,
    pub slideshow_transition_time: u32,
    pub icon_size: u16,
    pub icon_spacing: Spacing,
    pub title_font_path: Option<String>,
    pub font_size: u32,
    pub title_color: Color,
    pub title_opacity: String,
    pub title_oversize_mode: TextOversizeMode,
    pub title_padding: u32,
    pub highlight_color: Color,
    pub highlight_opacity: String,
    pub highlight_rx: u16,
    pub highlight_vpadding: u32,
    pub highlight_hpadding: u32,
    pub button_centerline: String,
    pub scroll_indicators: bool,
    pub scroll_indicator_color: Color,
    pub scroll_indicator_opacity: String,
    pub on_launch: OnLaunch,
    pub reset_on_back: bool,
    pub esc_quit: bool,
    pub gamepad_enabled: bool,
    pub gamepad_device: u32,
    pub gamepad_mappings_file: Option<String>,
    /// In first-seen order.
    #[serde(skip)]
    pub menus: Vec<Menu>,
    pub gamepad_controls: Vec<GamepadControl>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_menu: None,
            max_buttons: 4,
            background_mode: BackgroundMode::Color,
            background_color: Color::rgb(0x33, 0x33, 0x33),
            background_image: None,
            slideshow_directory: None,
            slideshow_image_duration: 30_000,
            slideshow_transition_time: 3000,
            icon_size: 128,
            icon_spacing: Spacing::Percent("5%".to_string()),
            title_font_path: None,
            font_size: 36,
            title_color: Color::WHITE,
            title_opacity: "100%".to_string(),
            title_oversize_mode: TextOversizeMode::Truncate,
            title_padding: 20,
            highlight_color: Color::WHITE,
            highlight_opacity: "25%".to_string(),
            highlight_rx: 0,
            highlight_vpadding: 20,
            highlight_hpadding: 20,
            button_centerline: "50%".to_string(),
            scroll_indicators: DEFAULT_SCROLL_INDICATORS,
            scroll_indicator_color: Color::WHITE,
            scroll_indicator_opacity: "100%".to_string(),
            on_launch: OnLaunch::Hide,
            reset_on_back: DEFAULT_RESET_ON_BACK,
            esc_quit: DEFAULT_ESC_QUIT,
            gamepad_enabled: DEFAULT_GAMEPAD_ENABLED,
            gamepad_device: 0,
            gamepad_mappings_file: None,
            menus: Vec::new(),
            gamepad_controls: Vec::new(),
        }
    }
}

impl Settings {
    /// Reads and ingests the config file at `path`.
    pub fn load(path: &Path) -> Result<Settings, Error> {
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Settings::default();
        let mut ingest = Ingest::new(&mut settings);
        ini::parse_reader(std::io::BufReader::new(file), |section, key, value| {
            ingest.handle(section, key, value)
        })
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }

    pub fn from_ini_str(text: &str) -> Settings {
        let mut settings = Settings::default();
        let mut ingest = Ingest::new(&mut settings);
        ini::parse_str(text, |section, key, value| ingest.handle(section, key, value));
        settings
    }

    pub fn num_menus(&self) -> usize {
        self.menus.len()
    }

    pub fn menu(&self, name: &str) -> Option<&Menu> {
        get_menu(name, &self.menus)
    }

    pub fn menu_index(&self, name: &str) -> Option<usize> {
        self.menus.iter().position(|m| m.name == name)
    }

    /// The menu shown at startup: `Default Menu` if it names a known menu,
    /// otherwise the first one.
    pub fn default_menu_index(&self) -> Option<usize> {
        if self.menus.is_empty() {
            return None;
        }
        match self.default_menu.as_deref() {
            Some(name) => match self.menu_index(name) {
                Some(i) => Some(i),
                None => {
                    log::warn!("Default menu \"{}\" not found, using \"{}\"", name, self.menus[0].name);
                    Some(0)
                }
            },
            None => Some(0),
        }
    }

    /// Appends a gamepad binding; an empty `cmd` binds nothing.
    pub fn add_gamepad_control(&mut self, kind: ControlKind, index: i32, label: &str, cmd: &str) {
        if cmd.is_empty() {
            return;
        }
        self.gamepad_controls.push(GamepadControl {
            kind,
            index,
            label: label.to_string(),
            cmd: cmd.to_string(),
            repeat: 0,
        });
    }
}

/// Directory holding the running executable.
pub fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

pub fn user_config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            let mut p = PathBuf::from(xdg);
            p.push(EXECUTABLE_TITLE);
            return Some(p);
        }
    }
    dirs::home_dir().map(|mut p| {
        p.push(".config");
        p.push(EXECUTABLE_TITLE);
        p
    })
}

/// Directories searched for [`FILENAME_DEFAULT_CONFIG`], in priority order.
pub fn config_search_dirs() -> Vec<Option<String>> {
    let to_string = |p: PathBuf| p.to_str().map(|s| s.to_string());
    #[allow(unused_mut)]
    let mut dirs = vec![Some("./".to_string()), exe_dir().and_then(to_string)];
    #[cfg(unix)]
    {
        dirs.push(user_config_dir().and_then(to_string));
        dirs.push(Some(PATH_CONFIG_SYSTEM.to_string()));
    }
    dirs
}

/// Locates the config file when none was given on the command line.
pub fn find_config_file() -> Option<PathBuf> {
    let dirs = config_search_dirs();
    let prefixes: Vec<Option<&str>> = dirs.iter().map(|d| d.as_deref()).collect();
    util::find_file(FILENAME_DEFAULT_CONFIG, &prefixes).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamepad_control_with_empty_cmd_is_dropped() {
        let mut settings = Settings::default();
        settings.add_gamepad_control(ControlKind::Button, 0, "ButtonA", "");
        assert!(settings.gamepad_controls.is_empty());
        settings.add_gamepad_control(ControlKind::Button, 0, "ButtonA", ":select");
        settings.add_gamepad_control(ControlKind::AxisNegative, 1, "LStickY-", ":up");
        assert_eq!(settings.gamepad_controls.len(), 2);
        assert_eq!(settings.gamepad_controls[1].label, "LStickY-");
        assert_eq!(settings.gamepad_controls[1].repeat, 0);
    }

    #[test]
    fn default_menu_falls_back_to_first() {
        let mut settings = Settings::default();
        assert_eq!(settings.default_menu_index(), None);

        settings.menus.push(Menu::new("Main"));
        settings.menus.push(Menu::new("Games"));
        assert_eq!(settings.default_menu_index(), Some(0));

        settings.default_menu = Some("Games".to_string());
        assert_eq!(settings.default_menu_index(), Some(1));

        settings.default_menu = Some("Missing".to_string());
        assert_eq!(settings.default_menu_index(), Some(0));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("nope.ini")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FILENAME_DEFAULT_CONFIG);
        std::fs::write(&path, "[Settings]\nMax Buttons = 6\n[Main]\nA=Term;term.png;xterm\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.max_buttons, 6);
        assert_eq!(settings.num_menus(), 1);
        assert_eq!(settings.menu("Main").unwrap().entries[0].cmd, "xterm");
    }

    #[test]
    fn search_dirs_start_with_cwd() {
        let dirs = config_search_dirs();
        assert_eq!(dirs[0].as_deref(), Some("./"));
        #[cfg(unix)]
        assert_eq!(dirs.last().unwrap().as_deref(), Some(PATH_CONFIG_SYSTEM));
    }
}
