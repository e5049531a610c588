//! Usage: Tray popup placement (pure geometry, no windowing calls).
//!
//! The popup is first centered horizontally below the tray icon. If that candidate spills past
//! the left or right edge of the screen, the popup is anchored beside the icon instead and
//! centered on it vertically. `is_on_top` tells the UI which way the arrow indicator points.

use serde::Serialize;

/// Distance in pixels between the tray icon and the popup.
pub const TRAY_GAP: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub is_on_top: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Centered,
    RightOfTray,
    LeftOfTray,
}

// Halves round toward +inf so that -2.5 lands on -2, not -3.
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

pub fn compute_position(window: Rect, tray: Rect, screen: Rect) -> Position {
    let start_x = tray.x + tray.width / 2.0 - window.width / 2.0;
    let end_x = start_x + window.width;
    let start_y = tray.y + tray.height + TRAY_GAP;
    let end_y = start_y + window.height;

    let out_of_bound_left = start_x < screen.x;
    let out_of_bound_right = end_x > screen.width;
    let out_of_bound_bottom = end_y > screen.height || start_y < screen.y;

    let anchor = if out_of_bound_left {
        Anchor::RightOfTray
    } else if out_of_bound_right {
        Anchor::LeftOfTray
    } else {
        Anchor::Centered
    };

    let x = match anchor {
        Anchor::RightOfTray => tray.x + tray.width + TRAY_GAP,
        Anchor::LeftOfTray => tray.x - window.width - TRAY_GAP,
        Anchor::Centered => start_x,
    };

    let y = match anchor {
        Anchor::RightOfTray | Anchor::LeftOfTray => {
            tray.y + tray.height / 2.0 - window.height / 2.0
        }
        Anchor::Centered if window.height / 2.0 < tray.y => tray.y + tray.height + TRAY_GAP,
        Anchor::Centered => tray.y - TRAY_GAP - window.height,
    };

    Position {
        x: round_half_up(x),
        y: round_half_up(y),
        is_on_top: out_of_bound_bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 450.0,
    };
    const SCREEN: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1200.0,
        height: 800.0,
    };

    #[test]
    fn right_overflow_anchors_left_of_tray_and_centers_vertically() {
        // Centered candidate spans 960..1260, past the 1200px screen edge.
        let tray = Rect::new(1100.0, 700.0, 20.0, 20.0);
        let pos = compute_position(WINDOW, tray, SCREEN);
        assert_eq!(
            pos,
            Position {
                x: 796,
                y: 485,
                is_on_top: true
            }
        );
    }

    #[test]
    fn candidate_ending_inside_screen_stays_centered_below_tray() {
        // 860..1160 fits within 1200, so no side anchoring.
        let tray = Rect::new(1000.0, 700.0, 20.0, 20.0);
        let pos = compute_position(WINDOW, tray, SCREEN);
        assert_eq!(
            pos,
            Position {
                x: 860,
                y: 724,
                is_on_top: true
            }
        );
    }

    #[test]
    fn left_overflow_anchors_right_of_tray_and_centers_vertically() {
        let tray = Rect::new(10.0, 300.0, 20.0, 20.0);
        let pos = compute_position(WINDOW, tray, SCREEN);
        assert_eq!(pos.x, 10 + 20 + 4);
        assert_eq!(pos.y, 300 + 10 - 225);
    }

    #[test]
    fn left_overflow_wins_over_right_overflow() {
        let narrow_screen = Rect::new(0.0, 0.0, 200.0, 800.0);
        let tray = Rect::new(20.0, 300.0, 20.0, 20.0);
        let pos = compute_position(WINDOW, tray, narrow_screen);
        assert_eq!(pos.x, 44);
    }

    #[test]
    fn top_menu_bar_tray_centers_above_icon() {
        // macOS-style menu bar: tray sits at the top of the screen.
        let tray = Rect::new(600.0, 0.0, 22.0, 22.0);
        let pos = compute_position(WINDOW, tray, SCREEN);
        assert_eq!(pos.x, 461);
        // window.height/2 is not below tray.y, so the popup goes above the icon.
        assert_eq!(pos.y, -454);
        assert!(!pos.is_on_top);
    }

    #[test]
    fn centered_candidate_in_lower_half_goes_below_tray() {
        let tray = Rect::new(600.0, 400.0, 20.0, 20.0);
        let pos = compute_position(WINDOW, tray, SCREEN);
        assert_eq!(pos.x, 460);
        assert_eq!(pos.y, 424);
        assert!(pos.is_on_top, "424 + 450 overflows an 800px screen");
    }

    #[test]
    fn is_on_top_ignores_horizontal_placement() {
        let tall_screen = Rect::new(0.0, 0.0, 1200.0, 2000.0);
        let centered = compute_position(WINDOW, Rect::new(600.0, 400.0, 20.0, 20.0), tall_screen);
        let side = compute_position(WINDOW, Rect::new(1100.0, 400.0, 20.0, 20.0), tall_screen);
        assert!(!centered.is_on_top);
        assert!(!side.is_on_top);

        let centered = compute_position(WINDOW, Rect::new(600.0, 400.0, 20.0, 20.0), SCREEN);
        let side = compute_position(WINDOW, Rect::new(1100.0, 400.0, 20.0, 20.0), SCREEN);
        assert!(centered.is_on_top);
        assert!(side.is_on_top);
    }

    #[test]
    fn is_on_top_when_candidate_starts_above_screen() {
        let offset_screen = Rect::new(0.0, 500.0, 1200.0, 2000.0);
        let tray = Rect::new(600.0, 100.0, 20.0, 20.0);
        assert!(compute_position(WINDOW, tray, offset_screen).is_on_top);
    }

    #[test]
    fn coordinates_round_half_up() {
        let window = Rect::new(0.0, 0.0, 301.0, 451.0);
        let tray = Rect::new(600.0, 300.0, 20.0, 21.0);
        let pos = compute_position(window, tray, SCREEN);
        // 600 + 10 - 150.5 = 459.5
        assert_eq!(pos.x, 460);
        assert_eq!(pos.y, 325);

        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn degenerate_rects_produce_defined_output() {
        let zero = Rect::default();
        let pos = compute_position(zero, zero, zero);
        assert_eq!(
            pos,
            Position {
                x: 0,
                y: -4,
                is_on_top: true
            }
        );
    }

    #[test]
    fn oversized_window_is_not_corrected() {
        let window = Rect::new(0.0, 0.0, 3000.0, 3000.0);
        let tray = Rect::new(600.0, 700.0, 20.0, 20.0);
        let pos = compute_position(window, tray, SCREEN);
        assert_eq!(pos.x, 624);
        assert_eq!(pos.y, -790);
        assert!(pos.is_on_top);
    }

    #[test]
    fn position_serializes_with_snake_case_flag() {
        let json = serde_json::to_value(Position {
            x: 1,
            y: 2,
            is_on_top: true,
        })
        .expect("serialize");
        assert_eq!(json, serde_json::json!({ "x": 1, "y": 2, "is_on_top": true }));
    }
}
