// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

use rogdeck_tui::{App, Continuation, FrameCompositor, KeyEvent, RgbValue, Size,
                  display_width, palette, truncate};
use tracing::debug;

use crate::{BatteryRow, KbdBrightness, PowerProfile, State, Tab, ui_str};

/// Left margin of the content area.
const CONTENT_X: u16 = 3;
/// First content row, below the header, the tab bar, and the separator.
const CONTENT_TOP: u16 = 3;
/// Footer separator plus the help line.
const FOOTER_HEIGHT: u16 = 2;

const PROFILE_CARD_MAX_WIDTH: u16 = 60;
const KBD_BAR_WIDTH: u16 = 12;
const CHARGE_BAR_MAX_WIDTH: u16 = 50;

#[derive(Debug, Default)]
pub struct AppMain {
    pub state: State,
}

impl AppMain {
    #[must_use]
    pub fn new(status_ttl: Duration) -> Self {
        Self {
            state: State::new(status_ttl),
        }
    }
}

mod app_main_impl_app_trait {
    use super::*;

    impl App for AppMain {
        fn handle_key(&mut self, key: KeyEvent) -> Continuation {
            debug!(message = "AppMain::handle_key", %key);
            self.state.record_key(key);

            match key {
                KeyEvent::CtrlInterrupt | KeyEvent::CtrlQuit | KeyEvent::Char('q') => {
                    return Continuation::Stop;
                }
                // Every key is followed by a full render, so there is nothing to do.
                KeyEvent::CtrlRefresh => {}
                KeyEvent::CtrlSave => self.state.set_status(ui_str::SETTINGS_SAVED, true),
                KeyEvent::Tab | KeyEvent::PageDown => {
                    self.state.select_tab(self.state.active_tab.next());
                }
                KeyEvent::PageUp => self.state.select_tab(self.state.active_tab.prev()),
                KeyEvent::Char(ch) => {
                    if let Some(tab) = Tab::from_hotkey(ch) {
                        self.state.select_tab(tab);
                    }
                }
                _ => handle_tab_key(&mut self.state, key),
            }

            Continuation::Continue
        }

        fn render(&mut self, frame: &mut FrameCompositor, size: Size) {
            render_frame(&self.state, frame, size);
        }

        fn has_transient_status(&self) -> bool { self.state.status.is_some() }

        fn on_tick(&mut self) {
            if self.state.expire_status_at(Instant::now()) {
                debug!(message = "AppMain::on_tick -> status expired");
            }
        }
    }
}

/// Keys that mean something only on the active tab.
fn handle_tab_key(state: &mut State, key: KeyEvent) {
    match (state.active_tab, key) {
        (_, KeyEvent::Up) => state.focus_prev(),
        (_, KeyEvent::Down) => state.focus_next(),
        (Tab::Profile, KeyEvent::Enter) => {
            if let Some(profile) = PowerProfile::ALL.get(state.focus_idx).copied() {
                state.profile = profile;
                state.set_status(ui_str::profile_applied(profile), true);
            }
        }
        (Tab::Keyboard, KeyEvent::Enter) => {
            if let Some(level) = KbdBrightness::ALL.get(state.focus_idx).copied() {
                state.kbd_brightness = level;
                state.set_status(ui_str::kbd_applied(level), true);
            }
        }
        (Tab::Battery, _) => handle_battery_key(state, key),
        _ => {}
    }
}

fn handle_battery_key(state: &mut State, key: KeyEvent) {
    match (state.focused_battery_row(), key) {
        (BatteryRow::ChargeLimit, KeyEvent::Left) => state.adjust_charge_limit(false),
        (BatteryRow::ChargeLimit, KeyEvent::Right) => state.adjust_charge_limit(true),
        (BatteryRow::ChargeLimit, KeyEvent::Enter) => {
            let limit = state.charge_limit;
            state.set_status(ui_str::charge_limit_applied(limit), true);
        }
        (BatteryRow::OneShotCharge, KeyEvent::Enter) => {
            state.one_shot_charge = !state.one_shot_charge;
            let on = state.one_shot_charge;
            state.set_status(ui_str::one_shot_toggled(on), true);
        }
        (BatteryRow::Reset, KeyEvent::Enter) => {
            state.charge_limit = crate::CHARGE_LIMIT_DEFAULT;
            state.one_shot_charge = false;
            state.set_status(ui_str::BATTERY_RESET, true);
        }
        _ => {}
    }
}

/// Rows available to a tab's content. Anything past `bottom` would draw over the
/// footer, so it is skipped.
#[derive(Debug, Clone, Copy)]
struct ContentArea {
    bottom: u16,
    width: u16,
}

impl ContentArea {
    /// Absolute row for `offset` rows into the content, if it is on screen.
    fn row(self, offset: u16) -> Option<u16> {
        let y = CONTENT_TOP.checked_add(offset)?;
        (y < self.bottom).then_some(y)
    }
}

fn width_of(text: &str) -> u16 { u16::try_from(display_width(text)).unwrap_or(u16::MAX) }

fn darken(color: RgbValue) -> RgbValue {
    RgbValue::from_u8(color.red / 6, color.green / 6, color.blue / 6)
}

/// Text over `bg`, optionally bold. The compositor's `text_*` helpers reset the
/// background, which would punch holes in the header and footer bars.
fn text_on(
    frame: &mut FrameCompositor,
    pos: (u16, u16),
    style: (RgbValue, RgbValue, bool),
    text: &str,
) {
    let (x, y) = pos;
    let (fg, bg, is_bold) = style;
    frame.reset_style();
    if is_bold {
        frame.bold();
    }
    frame.fg(fg);
    frame.bg(bg);
    frame.move_to(x, y);
    frame.write(text);
}

fn render_frame(state: &State, frame: &mut FrameCompositor, size: Size) {
    let width = size.col_width;
    let height = size.row_height;
    let footer_y = height.saturating_sub(FOOTER_HEIGHT);

    frame.fill_rect(0, 0, width, height, palette::BG);

    render_header(state, frame, width);
    render_tab_bar(state, frame, width);
    frame.hline(0, 2, width, palette::BORDER);

    let area = ContentArea {
        bottom: footer_y,
        width,
    };
    match state.active_tab {
        Tab::Profile => render_profile(state, frame, area),
        Tab::Keyboard => render_keyboard(state, frame, area),
        Tab::Battery => render_battery(state, frame, area),
        Tab::Keys => render_keys(state, frame, area),
    }

    render_footer(state, frame, width, footer_y);
    frame.reset_style();
}

fn render_header(state: &State, frame: &mut FrameCompositor, width: u16) {
    frame.reset_style();
    frame.fill_rect(0, 0, width, 1, palette::PANEL);

    text_on(
        frame,
        (1, 0),
        (palette::WHITE, palette::ACCENT, true),
        ui_str::APP_BADGE,
    );
    let title_x = 5;
    text_on(
        frame,
        (title_x, 0),
        (palette::TEXT, palette::PANEL, true),
        ui_str::APP_TITLE,
    );

    // Active profile on the right, unless it would run into the title.
    let indicator = format!("{} {}", ui_str::SELECTED_MARKER, state.profile.name());
    let indicator_x = width.saturating_sub(width_of(&indicator) + 2);
    if indicator_x > title_x + width_of(ui_str::APP_TITLE) {
        text_on(
            frame,
            (indicator_x, 0),
            (state.profile.color(), palette::PANEL, false),
            &indicator,
        );
    }
}

fn render_tab_bar(state: &State, frame: &mut FrameCompositor, width: u16) {
    frame.reset_style();
    frame.fill_rect(0, 1, width, 1, palette::PANEL);

    let mut x: u16 = 1;
    for tab in Tab::ALL {
        let room = usize::from(width.saturating_sub(x));
        if room == 0 {
            break;
        }
        let label = ui_str::tab_label(tab.hotkey(), tab.label());
        let label = truncate(&label, room);
        let style = if tab == state.active_tab {
            (palette::WHITE, palette::ACCENT, true)
        } else {
            (palette::TEXT_DIM, palette::PANEL, false)
        };
        text_on(frame, (x, 1), style, &label);
        x = x.saturating_add(width_of(&label) + 1);
    }
}

fn render_footer(state: &State, frame: &mut FrameCompositor, width: u16, footer_y: u16) {
    frame.reset_style();
    frame.hline(0, footer_y, width, palette::BORDER);
    let help_y = footer_y + 1;
    frame.fill_rect(0, help_y, width, 1, palette::PANEL);

    let help = truncate(ui_str::FOOTER_HELP, usize::from(width.saturating_sub(2)));
    frame.text_bg(1, help_y, palette::TEXT_DIM, palette::PANEL, &help);

    if let Some(status) = &state.status {
        let color = if status.is_ok {
            palette::SUCCESS
        } else {
            palette::ERROR
        };
        let message = truncate(&status.message, ui_str::STATUS_MAX_WIDTH);
        let x = width.saturating_sub(width_of(&message) + 2);
        frame.text_bg(x, help_y, color, palette::PANEL, &message);
    }
}

fn render_focus_marker(frame: &mut FrameCompositor, y: u16, focused: bool) {
    if focused {
        frame.text_bold(CONTENT_X - 2, y, palette::ACCENT, ui_str::FOCUS_MARKER);
    }
}

fn render_profile(state: &State, frame: &mut FrameCompositor, area: ContentArea) {
    let x = CONTENT_X;
    if let Some(y) = area.row(1) {
        frame.text_bold(x, y, palette::TEXT, "Power Profile");
    }
    if let Some(y) = area.row(2) {
        frame.text(x, y, palette::TEXT_DIM, "Select a performance mode");
    }

    let card_width = area.width.saturating_sub(6).min(PROFILE_CARD_MAX_WIDTH);
    for (idx, profile) in (0u16..).zip(PowerProfile::ALL) {
        let Some(y) = area.row(4 + idx * 3) else {
            break;
        };
        let is_selected = state.profile == profile;
        let is_focused = state.focus_idx == usize::from(idx);
        let has_description_row = area.row(5 + idx * 3).is_some();

        if is_selected {
            let card_bg = darken(profile.color());
            let card_height = if has_description_row { 2 } else { 1 };
            frame.fill_rect(x, y, card_width, card_height, card_bg);
            text_on(
                frame,
                (x + 1, y),
                (profile.color(), card_bg, true),
                &format!("{} {}", ui_str::SELECTED_MARKER, profile.name()),
            );
            if has_description_row {
                text_on(
                    frame,
                    (x + 3, y + 1),
                    (palette::TEXT_DIM, card_bg, false),
                    profile.description(),
                );
            }
            let marker_x = (x + card_width)
                .saturating_sub(width_of(ui_str::ACTIVE_MARKER) + 1);
            text_on(
                frame,
                (marker_x, y),
                (palette::WHITE, profile.color(), true),
                ui_str::ACTIVE_MARKER,
            );
        } else {
            let fg = if is_focused {
                palette::TEXT
            } else {
                palette::TEXT_DIM
            };
            frame.text(
                x + 1,
                y,
                fg,
                &format!("{} {}", ui_str::UNSELECTED_MARKER, profile.name()),
            );
            if has_description_row {
                frame.text(x + 3, y + 1, palette::TEXT_MUTED, profile.description());
            }
        }
        render_focus_marker(frame, y, is_focused);
    }
}

fn render_keyboard(state: &State, frame: &mut FrameCompositor, area: ContentArea) {
    let x = CONTENT_X;
    if let Some(y) = area.row(1) {
        frame.text_bold(x, y, palette::TEXT, "Keyboard Backlight");
    }
    if let Some(y) = area.row(2) {
        frame.text(x, y, palette::TEXT_DIM, "Adjust backlight brightness");
    }

    for (idx, level) in (0u16..).zip(KbdBrightness::ALL) {
        let Some(y) = area.row(4 + idx * 2) else {
            break;
        };
        let is_selected = state.kbd_brightness == level;
        let is_focused = state.focus_idx == usize::from(idx);

        let marker = if is_selected {
            ui_str::SELECTED_MARKER
        } else {
            ui_str::UNSELECTED_MARKER
        };
        let label = format!("{marker} {}", level.label());
        if is_selected {
            frame.text_bold(x + 1, y, palette::ACCENT, &label);
        } else {
            let fg = if is_focused {
                palette::TEXT
            } else {
                palette::TEXT_DIM
            };
            frame.text(x + 1, y, fg, &label);
        }

        let bar_x = x + 11;
        let fill = if is_selected {
            palette::ACCENT
        } else {
            palette::ACCENT_DIM
        };
        frame.draw_bar(bar_x, y, KBD_BAR_WIDTH, level.fraction(), fill, palette::INPUT);
        if is_selected {
            frame.text(bar_x + KBD_BAR_WIDTH + 2, y, palette::TEXT_DIM, "ACTIVE");
        }
        render_focus_marker(frame, y, is_focused);
    }
}

fn render_battery(state: &State, frame: &mut FrameCompositor, area: ContentArea) {
    let x = CONTENT_X;
    let focused = state.focused_battery_row();
    if let Some(y) = area.row(1) {
        frame.text_bold(x, y, palette::TEXT, "Battery & Charging");
    }
    if let Some(y) = area.row(2) {
        frame.text(x, y, palette::TEXT_DIM, "Charge Limit");
    }

    if let Some(y) = area.row(3) {
        let bar_width = area.width.saturating_sub(20).min(CHARGE_BAR_MAX_WIDTH);
        frame.draw_bar(
            x,
            y,
            bar_width,
            state.charge_limit_fraction(),
            palette::ACCENT,
            palette::INPUT,
        );
        let value_color = match state.charge_limit {
            0..=60 => palette::SUCCESS,
            61..=80 => palette::BALANCED,
            _ => palette::WARNING,
        };
        frame.text_bold(
            x + bar_width,
            y,
            value_color,
            &ui_str::charge_limit_value(state.charge_limit),
        );
        render_focus_marker(frame, y, focused == BatteryRow::ChargeLimit);
    }
    if let Some(y) = area.row(4) {
        frame.text(x, y, palette::TEXT_MUTED, "←/→ adjust by 5%, Enter to apply");
    }

    if let Some(y) = area.row(6) {
        frame.text(x, y, palette::TEXT_DIM, "One-Shot Full Charge");
        frame.draw_toggle(x + 26, y, state.one_shot_charge);
        render_focus_marker(frame, y, focused == BatteryRow::OneShotCharge);
    }
    if let Some(y) = area.row(7) {
        frame.text(x, y, palette::TEXT_MUTED, "Charge to 100% once");
    }

    if let Some(y) = area.row(9) {
        let is_focused = focused == BatteryRow::Reset;
        frame.draw_button(x, y, ui_str::RESET_BUTTON_LABEL, is_focused, palette::ACCENT);
        render_focus_marker(frame, y, is_focused);
    }
}

fn render_keys(state: &State, frame: &mut FrameCompositor, area: ContentArea) {
    let x = CONTENT_X;
    if let Some(y) = area.row(1) {
        frame.text_bold(x, y, palette::TEXT, "Key Inspector");
    }

    let box_width = area.width.saturating_sub(6).min(40);
    if let (Some(y), Some(_)) = (area.row(2), area.row(4)) {
        frame.draw_box(x, y, box_width, 3, palette::BORDER);
        let inner = usize::from(box_width.saturating_sub(4));
        match state.last_key() {
            Some(key) => {
                let label = key.to_string();
                frame.text_bold(x + 2, y + 1, palette::ACCENT, &truncate(&label, inner));
            }
            None => {
                let hint = truncate(ui_str::NO_KEY_YET, inner);
                frame.text(x + 2, y + 1, palette::TEXT_MUTED, &hint);
            }
        }
    }

    if let Some(y) = area.row(6) {
        frame.text(x, y, palette::TEXT_DIM, "Recent");
    }
    for (offset, key) in (7u16..).zip(state.key_history.iter().skip(1)) {
        let Some(y) = area.row(offset) else {
            break;
        };
        frame.text(x + 2, y, palette::TEXT_MUTED, &key.to_string());
    }
}
