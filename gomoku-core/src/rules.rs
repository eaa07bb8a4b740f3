//! 胜负判定
//!
//! 从每颗棋子出发，沿四个方向只向前数连子，达到五连即判胜。
//! 长连（六连及以上）同样算胜。每步只调用一次，不在搜索热路径上。

use crate::board::Board;
use crate::constants::WIN_LENGTH;
use crate::stone::{Direction, Position, Side};

/// 规则判定器
pub struct Rules;

impl Rules {
    /// 指定一方是否已经五连
    pub fn check_winner(board: &Board, side: Side) -> bool {
        Self::winning_line(board, side).is_some()
    }

    /// 获取胜者（黑方优先检查）
    pub fn winner(board: &Board) -> Option<Side> {
        [Side::Black, Side::White]
            .into_iter()
            .find(|&side| Self::check_winner(board, side))
    }

    /// 查找第一条五连，返回构成五连的五个位置
    pub fn winning_line(board: &Board, side: Side) -> Option<Vec<Position>> {
        for (pos, stone) in board.stones() {
            if stone != side {
                continue;
            }
            for direction in Direction::ALL {
                let mut line = vec![pos];
                let mut next = board.step(pos, direction, 1);
                while let Some(p) = next {
                    if board.get(p) != Some(side) {
                        break;
                    }
                    line.push(p);
                    if line.len() == WIN_LENGTH {
                        return Some(line);
                    }
                    next = board.step(p, direction, 1);
                }
            }
        }
        None
    }
}
