//! 坐标输入解析
//!
//! 接受 `行 列` 或 `行,列` 两种写法，例如 `3 4`、`3,4`。

use crate::board::Board;
use crate::error::{GomokuError, Result};
use crate::stone::Position;

/// 坐标记法
pub struct Notation;

impl Notation {
    /// 解析为原始行列值（不检查边界）
    pub fn parse(input: &str) -> Result<(i64, i64)> {
        let invalid = || GomokuError::InvalidNotation {
            input: input.to_string(),
        };

        let mut parts = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());

        let row = parts.next().ok_or_else(invalid)?;
        let col = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let row = row.parse::<i64>().map_err(|_| invalid())?;
        let col = col.parse::<i64>().map_err(|_| invalid())?;
        Ok((row, col))
    }

    /// 解析并检查是否落在棋盘内
    pub fn parse_on(board: &Board, input: &str) -> Result<Position> {
        let (row, col) = Self::parse(input)?;
        Self::resolve(board, row, col)
    }

    /// 将原始行列值转换为棋盘坐标
    pub fn resolve(board: &Board, row: i64, col: i64) -> Result<Position> {
        let out_of_range = GomokuError::InvalidPosition {
            row,
            col,
            size: board.size(),
        };
        let (Ok(r), Ok(c)) = (i32::try_from(row), i32::try_from(col)) else {
            return Err(out_of_range);
        };
        board.position(r, c).ok_or(out_of_range)
    }

    /// 格式化为输入时使用的写法
    pub fn format(pos: Position) -> String {
        format!("{} {}", pos.row, pos.col)
    }
}
