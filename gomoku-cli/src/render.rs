//! 终端输出

use gomoku_core::{Board, Position};
use gomoku_game::{GameResult, GameSession};

/// 渲染棋盘，`highlight` 中的格子用方括号标出
pub fn render_board(board: &Board, highlight: &[Position]) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:>3}", row));
        for col in 0..size {
            let pos = Position::new(row as u8, col as u8);
            let ch = board.get(pos).map_or('.', |side| side.symbol());
            if highlight.contains(&pos) {
                out.push_str(&format!("[{}]", ch));
            } else {
                out.push_str(&format!("{:>3}", ch));
            }
        }
        out.push('\n');
    }
    out
}

/// 当前局面（含胜者五连高亮）
pub fn render_session(session: &GameSession) -> String {
    let highlight = session.winning_line().unwrap_or_default();
    render_board(session.board(), &highlight)
}

/// 状态行：步数、用时、局面状态
pub fn status_line(session: &GameSession) -> String {
    let state = match session.result() {
        Some(GameResult::Win(side)) => format!("{} 获胜!", side.display_name()),
        Some(GameResult::Draw) => "和棋：棋盘已下满".to_string(),
        None => format!("轮到 {}", session.current_turn().display_name()),
    };
    format!(
        "[{}] {} | 第 {} 手 | 用时 {} | {}",
        session.player_label(),
        session.mode().display_name(),
        session.moves_played(),
        session.elapsed_display(),
        state
    )
}

/// 命令帮助
pub fn help_text() -> &'static str {
    "\
输入坐标落子: 行 列 （或 行,列），例如 4 5
命令:
  new   重新开始
  mode  切换人机 / 双人模式（会重新开局）
  hint  显示候选落点
  help  显示本帮助
  quit  退出"
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::{Difficulty, GameMode, Side};

    #[test]
    fn test_render_matches_display() {
        let mut board = Board::new(5).unwrap();
        board.set(Position::new(2, 2), Some(Side::Black));
        board.set(Position::new(0, 4), Some(Side::White));

        // 无高亮时与 Display 输出一致
        assert_eq!(render_board(&board, &[]), board.to_string());
    }

    #[test]
    fn test_render_highlight() {
        let mut board = Board::new(5).unwrap();
        for col in 0..5 {
            board.set(Position::new(1, col), Some(Side::Black));
        }
        let line: Vec<Position> = (0..5).map(|c| Position::new(1, c)).collect();

        let text = render_board(&board, &line);
        let row1 = text.lines().nth(2).unwrap();
        assert_eq!(row1, "  1[X][X][X][X][X]");
    }

    #[test]
    fn test_status_line() {
        let mut board = Board::new(5).unwrap();
        for col in 0..5 {
            board.set(Position::new(4, col), Some(Side::White));
        }
        let session =
            GameSession::from_board(board, Side::Black, GameMode::TwoPlayer, Difficulty::Medium);

        let status = status_line(&session);
        assert!(status.contains("白方 (O) 获胜!"));
        assert!(status.contains("Guest"));

        let rendered = render_session(&session);
        assert!(rendered.contains("[O]"));
    }
}
