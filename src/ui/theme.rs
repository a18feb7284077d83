//! Theme constants for the skill Gomoku GUI

use egui::Color32;

use crate::session::SkillKind;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const STAR_POINT: Color32 = Color32::from_rgb(50, 35, 20);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const REMOVE_TARGET: Color32 = Color32::from_rgb(245, 158, 11);

pub fn hover_stone(turn: crate::Stone) -> Color32 {
    match turn {
        crate::Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        _ => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
    }
}

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);

/// Accent per skill: amber, blue, emerald, purple
pub fn skill_color(kind: SkillKind) -> Color32 {
    match kind {
        SkillKind::Delete => Color32::from_rgb(245, 158, 11),
        SkillKind::Undo => Color32::from_rgb(59, 130, 246),
        SkillKind::Clear => Color32::from_rgb(16, 185, 129),
        SkillKind::InstantWin => Color32::from_rgb(168, 85, 247),
    }
}

pub fn skill_label(kind: SkillKind) -> &'static str {
    match kind {
        SkillKind::Delete => "飞沙走石",
        SkillKind::Undo => "时光倒流",
        SkillKind::Clear => "保洁上门",
        SkillKind::InstantWin => "力拔山兮",
    }
}

pub fn skill_hint(kind: SkillKind) -> &'static str {
    match kind {
        SkillKind::Delete => "Remove any piece",
        SkillKind::Undo => "Take back the last move",
        SkillKind::Clear => "Wipe the board",
        SkillKind::InstantWin => "Win on the spot",
    }
}

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.45;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Star point positions on the 13x13 board (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 9), (6, 6), (9, 3), (9, 9)];
