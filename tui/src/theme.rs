//! Theme and Colors
//!
//! The anzan palette: a deep indigo card on a dark background, green for
//! the revealed answer, orange for the reveal prompt. Mirrors the look of
//! the flash cards the drill is named after.

use ratatui::style::Color;

// ============================================================================
// Card Palette
// ============================================================================

/// Card background - deep indigo
pub const CARD_INDIGO: Color = Color::Rgb(79, 70, 229);

/// Card accent - purple (manual mode highlights)
pub const CARD_PURPLE: Color = Color::Rgb(147, 51, 234);

/// Displayed number - white, maximum contrast
pub const NUMBER_WHITE: Color = Color::Rgb(255, 255, 255);

/// Muted companion text on the card ("Number 3 of 8")
pub const CARD_MUTED: Color = Color::Rgb(199, 210, 254);

// ============================================================================
// Action Colors
// ============================================================================

/// Start action - green
pub const START_GREEN: Color = Color::Rgb(22, 163, 74);

/// Revealed answer - emerald
pub const ANSWER_GREEN: Color = Color::Rgb(16, 185, 129);

/// Reveal prompt - orange
pub const REVEAL_ORANGE: Color = Color::Rgb(234, 88, 12);

/// Check-again action - amber
pub const CHECK_AMBER: Color = Color::Rgb(202, 138, 4);

// ============================================================================
// UI Colors
// ============================================================================

/// Key hints and secondary text
pub const HINT_GRAY: Color = Color::Rgb(156, 163, 175);

/// Status bar background
pub const STATUS_BG: Color = Color::Rgb(31, 41, 55);

/// Status bar text
pub const STATUS_FG: Color = Color::Rgb(209, 213, 219);

/// Interval gauge fill
pub const GAUGE_INDIGO: Color = Color::Rgb(99, 102, 241);
