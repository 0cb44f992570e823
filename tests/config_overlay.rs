use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::style::Color;
use trailcursor::{
    action::Action,
    infrastructure::{capability::HoverSupport, config::Config},
};

fn press(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

// The config directory is resolved once per process, so this binary holds a
// single test that sets it up front.
#[test]
fn test_user_file_overlays_bundled_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("config.json5"),
        r#"{
            hover: "never",
            trail: { length: 3, color: "cyan" },
            keybindings: { "<x>": "StopTrail" },
        }"#,
    )
    .expect("write config");
    std::env::set_var("TRAILCURSOR_CONFIG", dir.path());

    let cfg = Config::new().expect("config should load");
    let defaults = Config::defaults().expect("bundled config should parse");

    assert_eq!(cfg.hover, HoverSupport::Never);
    assert_eq!(cfg.trail.length, 3);
    assert_eq!(cfg.trail.color, Color::Cyan);
    assert_eq!(cfg.trail.head_alpha, defaults.trail.head_alpha);
    assert_eq!(cfg.trail.build().expect("valid trail").len(), 3);

    assert_eq!(cfg.keybindings.action_for(&press('x')), Some(Action::StopTrail));
    assert_eq!(cfg.keybindings.action_for(&press('q')), Some(Action::Quit));
    assert_eq!(cfg.keybindings.action_for(&press('s')), Some(Action::StopTrail));

    assert_eq!(cfg.targets, defaults.targets);
}
