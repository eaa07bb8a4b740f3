//! 五子棋共享规则库
//!
//! 包含:
//! - 棋盘、棋子、坐标、方向等核心数据结构
//! - 胜负判定（五连检测）
//! - 候选着法生成
//! - 对局模式与难度定义
//! - 坐标输入解析

mod board;
mod constants;
mod error;
mod mode;
mod moves;
mod notation;
mod rules;
mod stone;

pub use board::{Board, Placement};
pub use constants::*;
pub use error::{GomokuError, Result};
pub use mode::{Difficulty, GameMode};
pub use moves::{Candidate, MoveGenerator};
pub use notation::Notation;
pub use rules::Rules;
pub use stone::{Direction, Position, Side};
