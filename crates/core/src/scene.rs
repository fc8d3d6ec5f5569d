//! Startup scene: a punctured wall above a full-width sensor line, with an
//! explosion seeded at the top center.

use crate::board::Board;

/// Row of the punctured wall
pub const PUNCT_ROW: i32 = 16;

/// Horizontal spans of the punctured wall; the gaps between them let points through
pub const PUNCT_SPANS: [(i32, i32); 3] = [(1, 49), (61, 112), (124, 172)];

/// Row of the full-width sensor line
pub const SENSOR_ROW: i32 = 21;

/// Horizontal span of the sensor line
pub const SENSOR_SPAN: (i32, i32) = (1, 172);

/// Spread passed to [`Board::seed_explosion`]
pub const EXPLOSION_SPREAD: (i32, i32) = (10, 10);

/// Add the punctured wall at [`PUNCT_ROW`]
pub fn add_punctured_wall(board: &mut Board) {
    for (start_x, end_x) in PUNCT_SPANS {
        board.add_barrier(start_x, end_x, PUNCT_ROW, PUNCT_ROW + 1);
    }
}

/// Add the sensor line at [`SENSOR_ROW`]
pub fn add_sensor(board: &mut Board) {
    let (start_x, end_x) = SENSOR_SPAN;
    board.add_barrier(start_x, end_x, SENSOR_ROW, SENSOR_ROW + 1);
}

/// Build the standard board: wall, then explosion, then sensor.
pub fn standard() -> Board {
    let mut board = Board::new();
    add_punctured_wall(&mut board);
    let (spread_x, spread_y) = EXPLOSION_SPREAD;
    board.seed_explosion(spread_x, spread_y);
    add_sensor(&mut board);
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scene_has_four_barriers_and_121_points() {
        let board = standard();
        assert_eq!(board.barriers().len(), 4);
        assert_eq!(board.points().len(), 121);
        assert!(board.in_barrier(PUNCT_SPANS[0].0, PUNCT_ROW));
        assert!(!board.in_barrier(55, PUNCT_ROW));
        assert!(board.in_barrier(100, SENSOR_ROW + 1));
    }
}
