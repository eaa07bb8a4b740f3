//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GomokuError, Result};
use crate::stone::{Direction, Position, Side};

/// 棋盘
///
/// `size x size` 的方形网格，每格为空（`None`）或被一方占据。
/// 只做读写，不检查落子是否合法。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// 索引为 row * size + col
    cells: Vec<Option<Side>>,
}

impl Board {
    /// 创建指定边长的空棋盘
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GomokuError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// 棋盘边长
    pub fn size(&self) -> usize {
        self.size
    }

    /// 检查坐标是否在棋盘内
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// 构造棋盘内的坐标，越界返回 None
    pub fn position(&self, row: i32, col: i32) -> Option<Position> {
        if self.contains(row, col) {
            Some(Position::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Side> {
        if self.contains(pos.row as i32, pos.col as i32) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// 设置指定位置的内容（无条件覆盖）
    pub fn set(&mut self, pos: Position, stone: Option<Side>) {
        if self.contains(pos.row as i32, pos.col as i32) {
            let index = pos.to_index(self.size);
            self.cells[index] = stone;
        }
    }

    /// 位置在棋盘内且为空
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos.row as i32, pos.col as i32) && self.cells[pos.to_index(self.size)].is_none()
    }

    /// 沿方向偏移 `steps` 格（可为负），越界返回 None
    pub fn step(&self, pos: Position, direction: Direction, steps: i32) -> Option<Position> {
        let (dr, dc) = direction.delta();
        self.position(pos.row as i32 + dr * steps, pos.col as i32 + dc * steps)
    }

    /// 棋盘中心
    pub fn center(&self) -> Position {
        let mid = (self.size / 2) as u8;
        Position::new(mid, mid)
    }

    /// 棋盘上没有任何空位
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 棋盘上没有任何棋子
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 已落子数
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// 按行优先顺序遍历所有棋子
    pub fn stones(&self) -> impl Iterator<Item = (Position, Side)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|side| (Position::from_index(i, size), side)))
    }

    /// 按行优先顺序遍历所有空位
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| Position::from_index(i, size))
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// 试探性落子，返回的守卫在离开作用域时恢复该格原有内容
    ///
    /// 搜索通过守卫访问棋盘，剪枝提前退出时同样会被恢复。
    pub fn place_scoped(&mut self, pos: Position, side: Side) -> Placement<'_> {
        let previous = self.get(pos);
        debug_assert!(previous.is_none(), "place_scoped on occupied cell {}", pos);
        self.set(pos, Some(side));
        Placement {
            board: self,
            pos,
            previous,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![None; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>3}", row)?;
            for col in 0..self.size {
                let ch = self.cells[row * self.size + col].map_or('.', |s| s.symbol());
                write!(f, "{:>3}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 试探性落子守卫
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Position,
    previous: Option<Side>,
}

impl Placement<'_> {
    /// 本次落子的位置
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.previous);
    }
}
