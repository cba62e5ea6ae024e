// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In-memory panel state. Nothing here touches the terminal: the [`AppMain`] maps keys
//! onto these methods and draws whatever they leave behind.
//!
//! [`AppMain`]: crate::AppMain

use std::{collections::VecDeque,
          time::{Duration, Instant}};

use rogdeck_tui::{KeyEvent, RgbValue, palette};

pub const CHARGE_LIMIT_MIN: u8 = 20;
pub const CHARGE_LIMIT_MAX: u8 = 100;
pub const CHARGE_LIMIT_STEP: u8 = 5;
pub const CHARGE_LIMIT_DEFAULT: u8 = 80;

pub const KEY_HISTORY_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Profile,
    Keyboard,
    Battery,
    Keys,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Profile, Tab::Keyboard, Tab::Battery, Tab::Keys];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Keyboard => "Keyboard",
            Tab::Battery => "Battery",
            Tab::Keys => "Keys",
        }
    }

    /// Digit that jumps straight to this tab.
    #[must_use]
    pub fn hotkey(self) -> char {
        match self {
            Tab::Profile => '1',
            Tab::Keyboard => '2',
            Tab::Battery => '3',
            Tab::Keys => '4',
        }
    }

    #[must_use]
    pub fn from_hotkey(ch: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.hotkey() == ch)
    }

    fn index(self) -> usize {
        match self {
            Tab::Profile => 0,
            Tab::Keyboard => 1,
            Tab::Battery => 2,
            Tab::Keys => 3,
        }
    }

    /// Wraps around.
    #[must_use]
    pub fn next(self) -> Tab { Tab::ALL[(self.index() + 1) % Tab::ALL.len()] }

    /// Wraps around.
    #[must_use]
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// How many focusable rows the tab has.
    #[must_use]
    pub fn focus_count(self) -> usize {
        match self {
            Tab::Profile => PowerProfile::ALL.len(),
            Tab::Keyboard => KbdBrightness::ALL.len(),
            Tab::Battery => BatteryRow::ALL.len(),
            Tab::Keys => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerProfile {
    Performance,
    #[default]
    Balanced,
    Quiet,
}

impl PowerProfile {
    pub const ALL: [PowerProfile; 3] = [
        PowerProfile::Performance,
        PowerProfile::Balanced,
        PowerProfile::Quiet,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PowerProfile::Performance => "Performance",
            PowerProfile::Balanced => "Balanced",
            PowerProfile::Quiet => "Quiet",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PowerProfile::Performance => "Maximum clocks, aggressive fans",
            PowerProfile::Balanced => "Auto-tuned balance of speed and efficiency",
            PowerProfile::Quiet => "Minimal fan noise, power saving",
        }
    }

    #[must_use]
    pub fn color(self) -> RgbValue {
        match self {
            PowerProfile::Performance => palette::PERF,
            PowerProfile::Balanced => palette::BALANCED,
            PowerProfile::Quiet => palette::QUIET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KbdBrightness {
    Off,
    Low,
    #[default]
    Med,
    High,
}

impl KbdBrightness {
    pub const ALL: [KbdBrightness; 4] = [
        KbdBrightness::Off,
        KbdBrightness::Low,
        KbdBrightness::Med,
        KbdBrightness::High,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            KbdBrightness::Off => "Off",
            KbdBrightness::Low => "Low",
            KbdBrightness::Med => "Med",
            KbdBrightness::High => "High",
        }
    }

    /// Brightness as a fraction, for the level bar.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            KbdBrightness::Off => 0.0,
            KbdBrightness::Low => 1.0 / 3.0,
            KbdBrightness::Med => 2.0 / 3.0,
            KbdBrightness::High => 1.0,
        }
    }
}

/// Focusable rows of the battery tab, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryRow {
    ChargeLimit,
    OneShotCharge,
    Reset,
}

impl BatteryRow {
    pub const ALL: [BatteryRow; 3] = [
        BatteryRow::ChargeLimit,
        BatteryRow::OneShotCharge,
        BatteryRow::Reset,
    ];
}

/// A footer message that disappears once it is older than the app's status TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_ok: bool,
    pub set_at: Instant,
}

impl StatusLine {
    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.set_at) >= ttl
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub active_tab: Tab,
    /// Focused row within the active tab. Reset to 0 on every tab switch.
    pub focus_idx: usize,
    pub profile: PowerProfile,
    pub kbd_brightness: KbdBrightness,
    pub charge_limit: u8,
    pub one_shot_charge: bool,
    /// Most recent first.
    pub key_history: VecDeque<KeyEvent>,
    pub status: Option<StatusLine>,
    pub status_ttl: Duration,
}

impl Default for State {
    fn default() -> Self { Self::new(Duration::from_millis(crate::DEFAULT_STATUS_TTL_MS)) }
}

impl State {
    #[must_use]
    pub fn new(status_ttl: Duration) -> Self {
        Self {
            active_tab: Tab::default(),
            focus_idx: 0,
            profile: PowerProfile::default(),
            kbd_brightness: KbdBrightness::default(),
            charge_limit: CHARGE_LIMIT_DEFAULT,
            one_shot_charge: false,
            key_history: VecDeque::with_capacity(KEY_HISTORY_CAPACITY),
            status: None,
            status_ttl,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            self.active_tab = tab;
            self.focus_idx = 0;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus_idx = (self.focus_idx + 1) % self.active_tab.focus_count();
    }

    pub fn focus_prev(&mut self) {
        let count = self.active_tab.focus_count();
        self.focus_idx = (self.focus_idx + count - 1) % count;
    }

    #[must_use]
    pub fn focused_battery_row(&self) -> BatteryRow {
        BatteryRow::ALL
            .get(self.focus_idx)
            .copied()
            .unwrap_or(BatteryRow::ChargeLimit)
    }

    /// Move the charge limit by one step, clamped to the allowed range.
    pub fn adjust_charge_limit(&mut self, increase: bool) {
        self.charge_limit = if increase {
            self.charge_limit
                .saturating_add(CHARGE_LIMIT_STEP)
                .min(CHARGE_LIMIT_MAX)
        } else {
            self.charge_limit
                .saturating_sub(CHARGE_LIMIT_STEP)
                .max(CHARGE_LIMIT_MIN)
        };
    }

    /// Position of the charge limit within its range, 0.0 at the minimum.
    #[must_use]
    pub fn charge_limit_fraction(&self) -> f64 {
        f64::from(self.charge_limit - CHARGE_LIMIT_MIN)
            / f64::from(CHARGE_LIMIT_MAX - CHARGE_LIMIT_MIN)
    }

    pub fn record_key(&mut self, key: KeyEvent) {
        if self.key_history.len() == KEY_HISTORY_CAPACITY {
            self.key_history.pop_back();
        }
        self.key_history.push_front(key);
    }

    #[must_use]
    pub fn last_key(&self) -> Option<KeyEvent> { self.key_history.front().copied() }

    pub fn set_status(&mut self, message: impl Into<String>, is_ok: bool) {
        self.set_status_at(message, is_ok, Instant::now());
    }

    pub fn set_status_at(&mut self, message: impl Into<String>, is_ok: bool, now: Instant) {
        self.status = Some(StatusLine {
            message: message.into(),
            is_ok,
            set_at: now,
        });
    }

    /// Drop the status if it has outlived the TTL. Returns `true` if it was dropped.
    pub fn expire_status_at(&mut self, now: Instant) -> bool {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|status| status.is_expired(now, self.status_ttl));
        if expired {
            self.status = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Keys.next(), Tab::Profile);
        assert_eq!(Tab::Profile.prev(), Tab::Keys);
        assert_eq!(Tab::Keyboard.next(), Tab::Battery);
    }

    #[test_case('1', Some(Tab::Profile))]
    #[test_case('4', Some(Tab::Keys))]
    #[test_case('5', None)]
    #[test_case('a', None)]
    fn test_tab_from_hotkey(ch: char, expected: Option<Tab>) {
        assert_eq!(Tab::from_hotkey(ch), expected);
    }

    #[test]
    fn test_select_tab_resets_focus_only_on_change() {
        let mut state = State::default();
        state.focus_next();
        state.select_tab(Tab::Profile);
        assert_eq!(state.focus_idx, 1);
        state.select_tab(Tab::Battery);
        assert_eq!(state.focus_idx, 0);
        assert_eq!(state.active_tab, Tab::Battery);
    }

    #[test]
    fn test_focus_wraps_per_tab() {
        let mut state = State::default();
        state.focus_prev();
        assert_eq!(state.focus_idx, PowerProfile::ALL.len() - 1);
        state.focus_next();
        assert_eq!(state.focus_idx, 0);

        state.select_tab(Tab::Keys);
        state.focus_next();
        assert_eq!(state.focus_idx, 0);
    }

    #[test_case(80, true, 85)]
    #[test_case(100, true, 100)]
    #[test_case(20, false, 20)]
    #[test_case(25, false, 20)]
    fn test_adjust_charge_limit(start: u8, increase: bool, expected: u8) {
        let mut state = State::default();
        state.charge_limit = start;
        state.adjust_charge_limit(increase);
        assert_eq!(state.charge_limit, expected);
    }

    #[test]
    fn test_charge_limit_fraction() {
        let mut state = State::default();
        state.charge_limit = CHARGE_LIMIT_MIN;
        assert!(state.charge_limit_fraction().abs() < f64::EPSILON);
        state.charge_limit = 60;
        assert!((state.charge_limit_fraction() - 0.5).abs() < f64::EPSILON);
        state.charge_limit = CHARGE_LIMIT_MAX;
        assert!((state.charge_limit_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_key_history_keeps_most_recent() {
        let mut state = State::default();
        assert_eq!(state.last_key(), None);
        for ch in "abcdefghij".chars() {
            state.record_key(KeyEvent::Char(ch));
        }
        assert_eq!(state.key_history.len(), KEY_HISTORY_CAPACITY);
        assert_eq!(state.last_key(), Some(KeyEvent::Char('j')));
        assert_eq!(state.key_history.back(), Some(&KeyEvent::Char('c')));
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut state = State::new(Duration::from_millis(500));
        let start = Instant::now();
        state.set_status_at("Saved", true, start);

        assert!(!state.expire_status_at(start + Duration::from_millis(499)));
        assert!(state.status.is_some());

        assert!(state.expire_status_at(start + Duration::from_millis(500)));
        assert_eq!(state.status, None);

        // Nothing left to expire.
        assert!(!state.expire_status_at(start + Duration::from_secs(10)));
    }
}
