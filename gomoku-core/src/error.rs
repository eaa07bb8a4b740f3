//! 错误类型定义

use thiserror::Error;

/// 五子棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GomokuError {
    /// 坐标超出棋盘
    #[error("Invalid position: ({row}, {col}) on a {size}x{size} board")]
    InvalidPosition { row: i64, col: i64, size: usize },

    /// 棋盘尺寸不合法
    #[error("Invalid board size: {size} (allowed: {min}..={max})")]
    InvalidBoardSize { size: usize, min: usize, max: usize },

    /// 无法解析的坐标输入
    #[error("Invalid coordinate input: {input:?}")]
    InvalidNotation { input: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GomokuError>;
