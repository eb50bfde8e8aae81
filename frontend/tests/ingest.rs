use launcher::config::FILENAME_DEFAULT_CONFIG;
use launcher::gamepad::{button, ControlKind};
use launcher::style::{BackgroundMode, Color, TextOversizeMode};
use launcher::Settings;

const SAMPLE: &str = r#"
; sample launcher config
[Settings]
Default Menu = Games
Icon Size = 64
Title Color = 00000000
Background Mode = Image
Background Image = "/usr/share/backgrounds/launcher.png"
Title Oversize Mode = Shrink

[Games]
Entry1=Chess;chess.png;chess.sh
Entry2=Go;go.png;go.sh
Broken=Shogi;shogi.png

[Gamepad]
Enabled = true
ButtonA = :select
ButtonB = :back
ButtonX =

[Tools]
Terminal = Terminal;"icons/term.png";xterm

[Games]
Entry3=Checkers;checkers.png;checkers.sh
"#;

#[test]
fn games_example() {
    let text = "[Settings]\nIcon Size=64\n[Games]\nEntry1=Chess;chess.png;chess.sh\n[Games]\nEntry2=Go;go.png;go.sh\n";
    let settings = Settings::from_ini_str(text);

    assert_eq!(settings.icon_size, 64);
    assert_eq!(settings.num_menus(), 1);
    let games = settings.menu("Games").unwrap();
    let titles: Vec<_> = games.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Chess", "Go"]);
    assert_eq!(games.entries[1].icon_path, "go.png");
    assert_eq!(games.entries[1].cmd, "go.sh");
}

#[test]
fn full_sample_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILENAME_DEFAULT_CONFIG);
    std::fs::write(&path, SAMPLE).unwrap();

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.default_menu.as_deref(), Some("Games"));
    assert_eq!(settings.default_menu_index(), Some(0));
    assert_eq!(settings.title_color, Color::rgba(0, 0, 0, 0));
    assert_eq!(settings.background_mode, BackgroundMode::Image);
    assert_eq!(
        settings.background_image.as_deref(),
        Some("/usr/share/backgrounds/launcher.png")
    );
    assert_eq!(settings.title_oversize_mode, TextOversizeMode::Shrink);

    let names: Vec<_> = settings.menus.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Games", "Tools"]);

    let games = settings.menu("Games").unwrap();
    let titles: Vec<_> = games.entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Chess", "Go", "Checkers"]);
    assert!(games.back.is_none() && games.root_entry.is_none());

    let tools = settings.menu("Tools").unwrap();
    assert_eq!(tools.entries[0].icon_path, "icons/term.png");

    assert!(settings.gamepad_enabled);
    assert_eq!(settings.gamepad_controls.len(), 2);
    assert_eq!(settings.gamepad_controls[0].kind, ControlKind::Button);
    assert_eq!(settings.gamepad_controls[0].index, button::A);
    assert_eq!(settings.gamepad_controls[1].label, "ButtonB");
}

#[test]
fn file_and_string_loading_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(FILENAME_DEFAULT_CONFIG);
    std::fs::write(&path, SAMPLE).unwrap();
    assert_eq!(Settings::load(&path).unwrap(), Settings::from_ini_str(SAMPLE));
}
