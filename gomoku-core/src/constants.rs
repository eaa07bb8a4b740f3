//! 规则常量定义

/// 默认棋盘边长
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// 大棋盘边长（15 路）
pub const LARGE_BOARD_SIZE: usize = 15;

/// 最小棋盘边长（至少能放下五连）
pub const MIN_BOARD_SIZE: usize = 5;

/// 最大棋盘边长
pub const MAX_BOARD_SIZE: usize = 25;

/// 获胜所需连子数
pub const WIN_LENGTH: usize = 5;

/// 候选着法的邻域半径
pub const NEIGHBOR_RADIUS: i32 = 2;
