//! 对局会话
//!
//! 封装棋盘、走子方、对局模式和胜负状态。人机模式下人类落子被接受后，
//! 会在同一次调用里同步算出并落下电脑的应着。

use gomoku_ai::{AiConfig, AiEngine};
use gomoku_core::{
    Board, Difficulty, GameMode, MoveGenerator, Notation, Position, Result, Rules, Side,
    DEFAULT_BOARD_SIZE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::SessionClock;

/// 人机模式下电脑执白
pub const COMPUTER_SIDE: Side = Side::White;

/// 未登录时的玩家名
pub const GUEST_LABEL: &str = "Guest";

/// 会话配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub board_size: usize,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// 当前玩家的显示名，会话不关心其含义
    pub player_label: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            player_label: GUEST_LABEL.to_string(),
        }
    }
}

/// 落子结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 落子成功；人机模式下附带电脑的应着
    Accepted { computer_reply: Option<Position> },
    /// 该位置已有棋子
    RejectedOccupied,
    /// 对局已结束
    RejectedGameOver,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }
}

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// 一方五连
    Win(Side),
    /// 棋盘下满且无人五连
    Draw,
}

/// 对局会话
pub struct GameSession {
    board: Board,
    current_turn: Side,
    mode: GameMode,
    difficulty: Difficulty,
    result: Option<GameResult>,
    move_count: u32,
    last_move: Option<Position>,
    player_label: String,
    engine: AiEngine,
    clock: SessionClock,
}

impl GameSession {
    /// 按配置开始新对局
    pub fn new(config: SessionConfig) -> Result<Self> {
        let board = Board::new(config.board_size)?;
        info!(
            "新对局: size={}, mode={:?}, difficulty={:?}, player={}",
            config.board_size, config.mode, config.difficulty, config.player_label
        );
        Ok(Self {
            board,
            current_turn: Side::Black,
            mode: config.mode,
            difficulty: config.difficulty,
            result: None,
            move_count: 0,
            last_move: None,
            player_label: config.player_label,
            engine: AiEngine::from_difficulty(config.difficulty),
            clock: SessionClock::start(),
        })
    }

    /// 以默认难度开始新对局
    pub fn new_game(size: usize, mode: GameMode) -> Result<Self> {
        Self::new(SessionConfig {
            board_size: size,
            mode,
            ..SessionConfig::default()
        })
    }

    /// 从已有局面创建会话
    ///
    /// 步数按棋盘上的棋子数计；局面已经分出胜负或下满时会话直接处于结束状态。
    pub fn from_board(board: Board, to_move: Side, mode: GameMode, difficulty: Difficulty) -> Self {
        let result = match Rules::winner(&board) {
            Some(side) => Some(GameResult::Win(side)),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        };
        let mut clock = SessionClock::start();
        if result.is_some() {
            clock.stop();
        }
        Self {
            move_count: board.stone_count() as u32,
            board,
            current_turn: to_move,
            mode,
            difficulty,
            result,
            last_move: None,
            player_label: GUEST_LABEL.to_string(),
            engine: AiEngine::from_difficulty(difficulty),
            clock,
        }
    }

    /// 替换 AI 配置（例如固定随机种子）
    pub fn with_ai_config(mut self, config: AiConfig) -> Self {
        self.difficulty = config.difficulty;
        self.engine = AiEngine::new(config);
        self
    }

    /// 当前会话的配置
    pub fn config(&self) -> SessionConfig {
        SessionConfig {
            board_size: self.board.size(),
            mode: self.mode,
            difficulty: self.difficulty,
            player_label: self.player_label.clone(),
        }
    }

    /// 当前走子方落子
    ///
    /// 坐标越界返回 `GomokuError::InvalidPosition`，会话保持不变；
    /// 占用和终局属于正常拒绝，通过 [`MoveOutcome`] 返回。
    pub fn apply_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome> {
        let pos = Notation::resolve(&self.board, row, col)?;

        if self.is_game_over() {
            return Ok(MoveOutcome::RejectedGameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("拒绝落子: {} 已有棋子", pos);
            return Ok(MoveOutcome::RejectedOccupied);
        }

        self.place(pos);

        let computer_reply = if self.mode == GameMode::ComputerOpponent
            && !self.is_game_over()
            && self.current_turn == COMPUTER_SIDE
        {
            self.play_computer_move()
        } else {
            None
        };

        Ok(MoveOutcome::Accepted { computer_reply })
    }

    /// 由 AI 为当前走子方算出并落子
    pub fn play_computer_move(&mut self) -> Option<Position> {
        if self.is_game_over() {
            return None;
        }
        let pos = self.engine.best_move(&mut self.board, self.current_turn)?;
        debug!("电脑落子: {:?} -> {}", self.current_turn, pos);
        self.place(pos);
        Some(pos)
    }

    /// 落子、判定胜负并交换走子方
    fn place(&mut self, pos: Position) {
        let side = self.current_turn;
        self.board.set(pos, Some(side));
        self.move_count += 1;
        self.last_move = Some(pos);
        debug!("第 {} 手: {:?} {}", self.move_count, side, pos);

        if Rules::check_winner(&self.board, side) {
            self.finish(GameResult::Win(side));
        } else if self.board.is_full() {
            self.finish(GameResult::Draw);
        }

        self.current_turn = side.opponent();
    }

    fn finish(&mut self, result: GameResult) {
        self.result = Some(result);
        self.clock.stop();
        info!(
            "对局结束: {:?}, moves={}, elapsed={}",
            result,
            self.move_count,
            self.clock.display()
        );
    }

    /// 以相同配置重新开始
    pub fn reset(&mut self) {
        let engine_config = self.engine.config().clone();
        self.board.clear();
        self.current_turn = Side::Black;
        self.result = None;
        self.move_count = 0;
        self.last_move = None;
        self.engine = AiEngine::new(engine_config);
        self.clock = SessionClock::start();
        info!("重新开始: mode={:?}", self.mode);
    }

    /// 切换模式（会重新开局）
    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// 胜者（和棋或未结束时为 None）
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            Some(GameResult::Win(side)) => Some(side),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.result == Some(GameResult::Draw)
    }

    /// 已落子数
    pub fn moves_played(&self) -> u32 {
        self.move_count
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// 候选着法提示（对局结束后为空）
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        MoveGenerator::valid_moves(&self.board)
    }

    /// 胜者的五连位置
    pub fn winning_line(&self) -> Option<Vec<Position>> {
        self.winner()
            .and_then(|side| Rules::winning_line(&self.board, side))
    }

    pub fn player_label(&self) -> &str {
        &self.player_label
    }

    pub fn set_player_label(&mut self, label: impl Into<String>) {
        self.player_label = label.into();
    }

    pub fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// 已用时间 mm:ss
    pub fn elapsed_display(&self) -> String {
        self.clock.display()
    }
}
