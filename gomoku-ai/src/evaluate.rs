//! 棋局评估函数
//!
//! 对每条连子按（连子数, 活端数）打分，再按执子方符号汇总：
//! 正值对黑方有利，负值对白方有利。

use gomoku_core::{Board, Direction, Position, Side, WIN_LENGTH};

/// 评估分值（需要同时精确表示 0.5 和 2 亿）
pub type Score = f64;

/// 五连（及长连）分值，压过其它所有棋形
pub const WIN_SCORE: Score = 200_000_000.0;

/// 单方向扫描得到的棋形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// 连子数
    pub consecutive: usize,
    /// 活端数（0-2）：两端紧邻格在棋盘内且为空
    pub open_ends: u8,
}

/// 评估器
pub struct Evaluator;

/// 棋形分值表
mod shape_table {
    use super::Score;

    /// 按 (连子数, 活端数, 是否轮到该方走) 查表，未列出的组合为 0
    pub const fn lookup(consecutive: usize, open_ends: u8, to_move: bool) -> Score {
        match (consecutive, open_ends, to_move) {
            (4, 1, false) => 50.0,
            (4, 1, true) => 100_000_000.0,
            (4, 2, false) => 500_000.0,
            (4, 2, true) => 100_000_000.0,
            (3, 1, false) => 5.0,
            (3, 1, true) => 7.0,
            (3, 2, false) => 50.0,
            (3, 2, true) => 10_000.0,
            (2, 1, _) => 2.0,
            (2, 2, _) => 5.0,
            (1, 1, _) => 0.5,
            (1, 2, _) => 1.0,
            _ => 0.0,
        }
    }
}

impl Evaluator {
    /// 棋形打分
    ///
    /// `to_move` 表示这条连子属于下一手要走的一方：
    /// 轮到自己时冲四、活三的威胁远大于轮到对方时。
    pub fn evaluate_shape(consecutive: usize, open_ends: u8, to_move: bool) -> Score {
        if consecutive >= WIN_LENGTH {
            return WIN_SCORE;
        }
        // 两端都被堵死的短连不可能成五
        if open_ends == 0 {
            return 0.0;
        }
        shape_table::lookup(consecutive, open_ends, to_move)
    }

    /// 从 `pos` 出发沿方向向前数连子，并检查尾端和头端是否为活端
    pub fn line_shape(board: &Board, pos: Position, direction: Direction, side: Side) -> LineShape {
        let is_open = |p: Option<Position>| p.is_some_and(|p| board.is_empty(p));

        let mut open_ends = 0;
        if is_open(board.step(pos, direction, -1)) {
            open_ends += 1;
        }

        let mut consecutive = 0;
        let mut cursor = Some(pos);
        while let Some(p) = cursor {
            if board.get(p) != Some(side) {
                break;
            }
            consecutive += 1;
            cursor = board.step(p, direction, 1);
        }

        // cursor 此时指向连子后第一格（越界为 None）
        if consecutive > 0 && is_open(cursor) {
            open_ends += 1;
        }

        LineShape {
            consecutive,
            open_ends,
        }
    }

    /// 单方向单起点的得分（不带符号）
    pub fn analyze_direction(
        board: &Board,
        pos: Position,
        direction: Direction,
        side: Side,
        to_move: Side,
    ) -> Score {
        let shape = Self::line_shape(board, pos, direction, side);
        if shape.consecutive == 0 {
            return 0.0;
        }
        Self::evaluate_shape(shape.consecutive, shape.open_ends, side == to_move)
    }

    /// 评估整盘（黑方视角，正值对黑方有利）
    ///
    /// 每条连子只在其方向上的第一颗棋子处计分一次。
    pub fn evaluate_position(board: &Board, to_move: Side) -> Score {
        let mut score = 0.0;

        for (pos, side) in board.stones() {
            for direction in Direction::ALL {
                let anchored = board
                    .step(pos, direction, -1)
                    .map_or(true, |prev| board.get(prev) != Some(side));
                if !anchored {
                    continue;
                }
                score += Self::analyze_direction(board, pos, direction, side, to_move) * side.sign();
            }
        }

        score
    }
}
