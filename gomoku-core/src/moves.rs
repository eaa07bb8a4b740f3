//! 候选着法生成
//!
//! 只考虑已有棋子半径 2 以内的空位，并按邻近程度排序，
//! 让 Alpha-Beta 尽早遇到好棋以提高剪枝率。

use crate::board::Board;
use crate::constants::NEIGHBOR_RADIUS;
use crate::stone::Position;

/// 紧邻（3x3 内）棋子的权重
const NEAR_WEIGHT: u32 = 3;

/// 外圈（半径 2 环）棋子的权重
const FAR_WEIGHT: u32 = 1;

/// 带优先级的候选着法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Position,
    pub priority: u32,
}

/// 着法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成候选着法（按优先级降序）
    ///
    /// 空棋盘只返回中心点；棋盘下满时返回空列表。
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::candidates(board).into_iter().map(|c| c.pos).collect()
    }

    /// 生成带优先级的候选着法
    pub fn candidates(board: &Board) -> Vec<Candidate> {
        if board.is_blank() {
            return vec![Candidate {
                pos: board.center(),
                priority: 0,
            }];
        }

        let mut candidates: Vec<Candidate> = board
            .empty_cells()
            .filter_map(|pos| {
                let priority = Self::priority(board, pos);
                (priority > 0).then_some(Candidate { pos, priority })
            })
            .collect();

        // 稳定排序，同优先级保持行优先顺序
        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));
        candidates
    }

    /// 计算空位的邻近优先级
    pub fn priority(board: &Board, pos: Position) -> u32 {
        let mut priority = 0;
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let Some(neighbor) = board.position(pos.row as i32 + dr, pos.col as i32 + dc) else {
                    continue;
                };
                if board.get(neighbor).is_some() {
                    priority += if dr.abs() <= 1 && dc.abs() <= 1 {
                        NEAR_WEIGHT
                    } else {
                        FAR_WEIGHT
                    };
                }
            }
        }
        priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Side;

    #[test]
    fn test_empty_board_center() {
        let board = Board::new(10).unwrap();
        assert_eq!(MoveGenerator::valid_moves(&board), vec![Position::new(5, 5)]);

        let board = Board::new(15).unwrap();
        assert_eq!(MoveGenerator::valid_moves(&board), vec![Position::new(7, 7)]);
    }

    #[test]
    fn test_neighborhood_pruning() {
        let mut board = Board::new(10).unwrap();
        board.set(Position::new(5, 5), Some(Side::Black));

        let moves = MoveGenerator::valid_moves(&board);
        // 5x5 邻域减去中心棋子
        assert_eq!(moves.len(), 24);
        assert!(!moves.contains(&Position::new(5, 5)));
        assert!(!moves.contains(&Position::new(0, 0)));
        assert!(moves.iter().all(|p| {
            (p.row as i32 - 5).abs() <= 2 && (p.col as i32 - 5).abs() <= 2
        }));
    }

    #[test]
    fn test_near_cells_first() {
        let mut board = Board::new(10).unwrap();
        board.set(Position::new(5, 5), Some(Side::Black));

        let candidates = MoveGenerator::candidates(&board);
        // 前 8 个是紧邻格，权重 3
        assert!(candidates[..8].iter().all(|c| c.priority == 3));
        assert!(candidates[8..].iter().all(|c| c.priority == 1));
        assert_eq!(candidates[0].pos, Position::new(4, 4));
    }

    #[test]
    fn test_priority_weights() {
        let mut board = Board::new(10).unwrap();
        board.set(Position::new(0, 0), Some(Side::Black));
        board.set(Position::new(0, 1), Some(Side::White));
        board.set(Position::new(0, 3), Some(Side::Black));

        // (1,1): 三颗都在范围内，(0,0)(0,1) 紧邻，(0,3) 在外圈
        assert_eq!(MoveGenerator::priority(&board, Position::new(1, 1)), 3 + 3 + 1);
        // (0,2): (0,1)(0,3) 紧邻，(0,0) 在外圈
        assert_eq!(MoveGenerator::priority(&board, Position::new(0, 2)), 3 + 3 + 1);
        assert_eq!(MoveGenerator::priority(&board, Position::new(9, 9)), 0);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new(5).unwrap();
        for index in 0..25 {
            let side = if index % 2 == 0 { Side::Black } else { Side::White };
            board.set(Position::from_index(index, 5), Some(side));
        }
        assert!(MoveGenerator::valid_moves(&board).is_empty());
    }

    #[test]
    fn test_stable_order_for_ties() {
        let mut board = Board::new(10).unwrap();
        board.set(Position::new(5, 5), Some(Side::Black));

        let candidates = MoveGenerator::candidates(&board);
        let near: Vec<_> = candidates[..8].iter().map(|c| c.pos).collect();
        assert_eq!(
            near,
            vec![
                Position::new(4, 4),
                Position::new(4, 5),
                Position::new(4, 6),
                Position::new(5, 4),
                Position::new(5, 6),
                Position::new(6, 4),
                Position::new(6, 5),
                Position::new(6, 6),
            ]
        );
    }
}
