// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{KbdBrightness, PowerProfile};

pub const APP_BADGE: &str = " R ";
pub const APP_TITLE: &str = "rogdeck control panel";
pub const FOOTER_HELP: &str = "1-4/Tab:Tab  ↑↓:Focus  ←→:Adjust  Enter:Apply  ^S:Save  q:Quit";
pub const ACTIVE_MARKER: &str = " ACTIVE ";
pub const FOCUS_MARKER: &str = "▸";
pub const SELECTED_MARKER: &str = "●";
pub const UNSELECTED_MARKER: &str = "○";
pub const RESET_BUTTON_LABEL: &str = "Reset";
pub const NO_KEY_YET: &str = "Press any key to inspect it";

/// Longest status message shown in the footer, in columns.
pub const STATUS_MAX_WIDTH: usize = 40;

#[must_use]
pub fn tab_label(hotkey: char, label: &str) -> String { format!(" {hotkey}:{label} ") }

#[must_use]
pub fn profile_applied(profile: PowerProfile) -> String {
    format!("Profile → {}", profile.name())
}

#[must_use]
pub fn kbd_applied(level: KbdBrightness) -> String {
    format!("Keyboard → {}", level.label())
}

#[must_use]
pub fn charge_limit_applied(limit: u8) -> String { format!("Charge limit → {limit}%") }

#[must_use]
pub fn charge_limit_value(limit: u8) -> String { format!(" {limit}%") }

#[must_use]
pub fn one_shot_toggled(on: bool) -> String {
    format!("One-shot charge {}", if on { "on" } else { "off" })
}

pub const BATTERY_RESET: &str = "Battery settings reset";
pub const SETTINGS_SAVED: &str = "Settings saved";
