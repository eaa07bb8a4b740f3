//! 五子棋 AI 引擎
//!
//! 包含:
//! - 棋形评估（连子数 + 活端数查表）
//! - 整盘评估（每条连子只计一次）
//! - Minimax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::{Evaluator, LineShape, Score, WIN_SCORE};
pub use search::{AiConfig, AiEngine, Difficulty, SearchResult};
