//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝。搜索直接在棋盘上试探落子，
//! 通过 [`Board::place_scoped`] 的守卫保证每层返回前复原棋盘。

use std::time::Instant;

use gomoku_core::{Board, MoveGenerator, Position, Side};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::{Evaluator, Score};

// 重导出 Difficulty 以便外部使用
pub use gomoku_core::Difficulty;

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 搜索层数（至少为 1）
    pub max_depth: u8,
    /// 放弃最佳着法、随机落子的概率
    pub random_move_chance: f64,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 1,
                random_move_chance: 0.3,
                seed: None,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: 2,
                random_move_chance: 0.0,
                seed: None,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: 3,
                random_move_chance: 0.0,
                seed: None,
            },
        }
    }

    /// 固定随机数种子
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 一次搜索的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Position,
    /// 黑方视角的评估值
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
    rng: ChaCha8Rng,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            nodes_searched: 0,
            rng,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 `to_move` 一方搜索最佳着法
    ///
    /// 黑方走棋时为极大方，白方走棋时为极小方。
    /// 棋盘没有可下的位置时返回 None。返回时棋盘与调用前完全一致。
    pub fn search(&mut self, board: &mut Board, to_move: Side) -> Option<SearchResult> {
        self.nodes_searched = 0;
        let started = Instant::now();
        let depth = self.config.max_depth.max(1);
        let maximizing = to_move == Side::Black;

        let (score, best) = self.minimax(board, depth, Score::NEG_INFINITY, Score::INFINITY, maximizing);
        let mut best_move = best?;

        // Easy 难度：一定概率随机选择候选着法
        if self.config.random_move_chance > 0.0
            && self.rng.gen::<f64>() < self.config.random_move_chance
        {
            let moves = MoveGenerator::valid_moves(board);
            if let Some(random_move) = moves.choose(&mut self.rng) {
                debug!("随机落子: {} (最佳着法 {})", random_move, best_move);
                best_move = *random_move;
            }
        }

        debug!(
            "搜索完成: side={:?}, depth={}, nodes={}, score={}, best={}, elapsed={:?}",
            to_move,
            depth,
            self.nodes_searched,
            score,
            best_move,
            started.elapsed()
        );

        Some(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes_searched,
        })
    }

    /// 搜索最佳着法（只返回位置）
    pub fn best_move(&mut self, board: &mut Board, to_move: Side) -> Option<Position> {
        self.search(board, to_move).map(|result| result.best_move)
    }

    /// Minimax + Alpha-Beta
    ///
    /// 极大方落黑子，极小方落白子。`depth` 为剩余层数，
    /// 叶子节点按此时轮到的一方评估。没有候选着法时返回 `(0, None)`。
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Score, Option<Position>) {
        self.nodes_searched += 1;

        if depth == 0 {
            let to_move = if maximizing { Side::Black } else { Side::White };
            return (Evaluator::evaluate_position(board, to_move), None);
        }

        let moves = MoveGenerator::valid_moves(board);
        if moves.is_empty() {
            return (0.0, None);
        }

        let mut best_move = None;
        if maximizing {
            let mut max_eval = Score::NEG_INFINITY;
            for mv in moves {
                let eval = {
                    let mut placed = board.place_scoped(mv, Side::Black);
                    self.minimax(&mut placed, depth - 1, alpha, beta, false).0
                };
                if eval > max_eval {
                    max_eval = eval;
                    best_move = Some(mv);
                }
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break; // Beta 剪枝
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = Score::INFINITY;
            for mv in moves {
                let eval = {
                    let mut placed = board.place_scoped(mv, Side::White);
                    self.minimax(&mut placed, depth - 1, alpha, beta, true).0
                };
                if eval < min_eval {
                    min_eval = eval;
                    best_move = Some(mv);
                }
                beta = beta.min(eval);
                if beta <= alpha {
                    break; // Alpha 剪枝
                }
            }
            (min_eval, best_move)
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, cells: &[(u8, u8, Side)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, side) in cells {
            board.set(Position::new(row, col), Some(side));
        }
        board
    }

    fn black_four_on_edge() -> Board {
        board_with(
            10,
            &[
                (0, 0, Side::Black),
                (0, 1, Side::Black),
                (0, 2, Side::Black),
                (0, 3, Side::Black),
            ],
        )
    }

    #[test]
    fn test_white_blocks_open_four() {
        let mut board = black_four_on_edge();
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        let mv = engine.best_move(&mut board, Side::White);
        assert_eq!(mv, Some(Position::new(0, 4)));
        println!("Nodes searched: {}", engine.nodes_searched());
    }

    #[test]
    fn test_white_blocks_on_deeper_search() {
        let mut board = black_four_on_edge();
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);

        let result = engine.search(&mut board, Side::White).unwrap();
        assert_eq!(result.best_move, Position::new(0, 4));
        assert_eq!(result.depth, 3);
    }

    #[test]
    fn test_black_blocks_as_maximizer() {
        let mut board = board_with(
            10,
            &[
                (9, 9, Side::White),
                (9, 8, Side::White),
                (9, 7, Side::White),
                (9, 6, Side::White),
            ],
        );
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        let mv = engine.best_move(&mut board, Side::Black);
        assert_eq!(mv, Some(Position::new(9, 5)));
    }

    #[test]
    fn test_completes_five_when_possible() {
        let mut board = board_with(
            10,
            &[
                (5, 2, Side::White),
                (5, 3, Side::White),
                (5, 4, Side::White),
                (5, 5, Side::White),
                (2, 2, Side::Black),
                (2, 3, Side::Black),
                (2, 4, Side::Black),
            ],
        );
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        let result = engine.search(&mut board, Side::White).unwrap();
        assert!(
            result.best_move == Position::new(5, 1) || result.best_move == Position::new(5, 6),
            "白方应直接成五: {:?}",
            result.best_move
        );
        assert!(result.score <= -crate::WIN_SCORE + 1_000_000.0);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = board_with(
            10,
            &[
                (4, 4, Side::Black),
                (4, 5, Side::White),
                (5, 4, Side::Black),
            ],
        );
        let before = board.clone();
        let mut engine = AiEngine::from_difficulty(Difficulty::Hard);

        engine.search(&mut board, Side::White);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut board = Board::new(15).unwrap();
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        let mv = engine.best_move(&mut board, Side::Black);
        assert_eq!(mv, Some(Position::new(7, 7)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new(5).unwrap();
        for index in 0..25 {
            let side = if index % 2 == 0 { Side::Black } else { Side::White };
            board.set(Position::from_index(index, 5), Some(side));
        }
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        assert!(engine.search(&mut board, Side::White).is_none());
        assert_eq!(engine.minimax(&mut board, 2, Score::NEG_INFINITY, Score::INFINITY, true), (0.0, None));
    }

    #[test]
    fn test_depth_zero_returns_evaluation() {
        let mut board = black_four_on_edge();
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);

        let (score, mv) = engine.minimax(&mut board, 0, Score::NEG_INFINITY, Score::INFINITY, true);
        assert_eq!(mv, None);
        assert_eq!(score, Evaluator::evaluate_position(&board, Side::Black));
    }

    #[test]
    fn test_pruning_reduces_nodes() {
        let mut board = board_with(
            10,
            &[
                (4, 4, Side::Black),
                (4, 5, Side::White),
                (5, 5, Side::Black),
            ],
        );
        let mut engine = AiEngine::from_difficulty(Difficulty::Medium);
        engine.search(&mut board, Side::White);
        let pruned = engine.nodes_searched();

        // 不剪枝时的完整两层树：根 + 每个候选 + 每个候选下的全部应着
        let mut full = 1u64;
        for mv in MoveGenerator::valid_moves(&board) {
            let placed = board.place_scoped(mv, Side::White);
            full += 1 + MoveGenerator::valid_moves(&placed).len() as u64;
        }

        assert!(pruned > 0);
        assert!(pruned < full, "剪枝后节点数 {} 应少于完整树 {}", pruned, full);
    }

    #[test]
    fn test_seeded_easy_is_reproducible() {
        let board = board_with(10, &[(4, 4, Side::Black), (4, 5, Side::White)]);
        let config = AiConfig::from_difficulty(Difficulty::Easy).with_seed(42);

        let mut first = AiEngine::new(config.clone());
        let mut second = AiEngine::new(config);

        for _ in 0..5 {
            let a = first.best_move(&mut board.clone(), Side::Black);
            let b = second.best_move(&mut board.clone(), Side::Black);
            assert_eq!(a, b);
            assert!(MoveGenerator::valid_moves(&board).contains(&a.unwrap()));
        }
    }

    #[test]
    fn test_difficulty_config() {
        let easy = AiConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.max_depth, 1);
        assert!(easy.random_move_chance > 0.0);

        let medium = AiConfig::from_difficulty(Difficulty::Medium);
        assert_eq!(medium.max_depth, 2);
        assert_eq!(medium.random_move_chance, 0.0);

        let hard = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.max_depth, 3);
        assert_eq!(AiConfig::default().difficulty, Difficulty::Medium);
    }
}
