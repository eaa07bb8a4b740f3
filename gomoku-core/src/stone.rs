//! 棋子、坐标与方向定义

use serde::{Deserialize, Serialize};

/// 执子方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 黑方（先手，记作 X，符号 +1）
    Black,
    /// 白方（后手，记作 O，符号 -1）
    White,
}

impl Side {
    /// 获取对方
    pub fn opponent(&self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// 评估时使用的符号：黑方为正，白方为负
    pub fn sign(&self) -> f64 {
        match self {
            Side::Black => 1.0,
            Side::White => -1.0,
        }
    }

    /// 棋盘上显示的字符
    pub fn symbol(&self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Side::Black => "黑方 (X)",
            Side::White => "白方 (O)",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 棋盘坐标（行, 列）
///
/// 坐标本身不携带棋盘尺寸，越界检查由 [`crate::Board::position`] 负责。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// 创建坐标（不检查边界）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 转换为数组索引
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 连线方向
///
/// 每条轴只保留一个朝向，另一个朝向通过反向扫描覆盖。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 横向 (0, 1)
    Horizontal,
    /// 纵向 (1, 0)
    Vertical,
    /// 主对角线 (1, 1)
    Diagonal,
    /// 副对角线 (1, -1)
    AntiDiagonal,
}

impl Direction {
    /// 全部四个方向
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// 行列增量
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}
