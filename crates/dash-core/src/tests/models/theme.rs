use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::System.as_str(), "system");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert_eq!(Theme::from_str("system").unwrap(), Theme::System);
    assert!(Theme::from_str("Dark").is_err());
    assert!(Theme::from_str("").is_err());
}

#[test]
fn test_theme_default_follows_system() {
    assert_eq!(Theme::default(), Theme::System);
}

#[test]
fn test_theme_toggle() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::System.toggled(), Theme::Dark);
}
