//! 终端对局循环

use std::io::{BufRead, Write};

use anyhow::Result;
use gomoku_core::{GomokuError, Notation};
use gomoku_game::{GameSession, MoveOutcome};
use tracing::debug;

use crate::login::prompt;
use crate::render::{help_text, render_session, status_line};

/// 提示中最多显示的候选点
const HINT_COUNT: usize = 5;

/// 玩家输入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(i64, i64),
    New,
    Mode,
    Hint,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> gomoku_core::Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Command::New),
            "mode" => Ok(Command::Mode),
            "hint" => Ok(Command::Hint),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Notation::parse(input).map(|(row, col)| Command::Move(row, col)),
        }
    }
}

/// 运行对局直到退出或输入结束
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, input: &mut R, output: &mut W) -> Result<()> {
    writeln!(output, "输入 help 查看命令")?;
    show(session, output)?;

    loop {
        let Some(line) = prompt(input, output, "> ")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "输入无效: {}", e)?;
                continue;
            }
        };
        debug!("命令: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", help_text())?,
            Command::New => {
                session.reset();
                show(session, output)?;
            }
            Command::Mode => {
                session.change_mode(session.mode().toggle());
                writeln!(output, "已切换为{}", session.mode().display_name())?;
                show(session, output)?;
            }
            Command::Hint => {
                let hints: Vec<String> = session
                    .valid_moves()
                    .into_iter()
                    .take(HINT_COUNT)
                    .map(Notation::format)
                    .collect();
                if hints.is_empty() {
                    writeln!(output, "没有可落子的位置")?;
                } else {
                    writeln!(output, "候选: {}", hints.join(" | "))?;
                }
            }
            Command::Move(row, col) => play(session, output, row, col)?,
        }
    }

    Ok(())
}

fn play<W: Write>(session: &mut GameSession, output: &mut W, row: i64, col: i64) -> Result<()> {
    match session.apply_move(row, col) {
        Ok(MoveOutcome::Accepted { computer_reply }) => {
            if let Some(pos) = computer_reply {
                writeln!(output, "电脑落子: {}", Notation::format(pos))?;
            }
            show(session, output)?;
        }
        Ok(MoveOutcome::RejectedOccupied) => writeln!(output, "该位置已有棋子")?,
        Ok(MoveOutcome::RejectedGameOver) => writeln!(output, "对局已结束，输入 new 重新开始")?,
        Err(e @ GomokuError::InvalidPosition { .. }) => writeln!(output, "{}", e)?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn show<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    writeln!(output)?;
    write!(output, "{}", render_session(session))?;
    writeln!(output, "{}", status_line(session))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_core::{GameMode, Position, Side};
    use std::io::Cursor;

    fn run_script(session: &mut GameSession, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(session, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("new").unwrap(), Command::New);
        assert_eq!(Command::parse(" HINT ").unwrap(), Command::Hint);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("3 4").unwrap(), Command::Move(3, 4));
        assert_eq!(Command::parse("3,4").unwrap(), Command::Move(3, 4));
        assert!(Command::parse("move").is_err());
    }

    #[test]
    fn test_two_player_win() {
        let mut session = GameSession::new_game(10, GameMode::TwoPlayer).unwrap();
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\n1 2\n0 3\n1 3\n0 4\n5 5\nquit\n";

        let text = run_script(&mut session, script);
        assert!(text.contains("黑方 (X) 获胜!"));
        assert!(text.contains("  0[X][X][X][X][X]"));
        assert!(text.contains("对局已结束"));
        assert_eq!(session.winner(), Some(Side::Black));
        assert_eq!(session.moves_played(), 9);
    }

    #[test]
    fn test_rejections_keep_state() {
        let mut session = GameSession::new_game(10, GameMode::TwoPlayer).unwrap();

        let text = run_script(&mut session, "4 4\n4 4\n10 0\nabc\n");
        assert!(text.contains("该位置已有棋子"));
        assert!(text.contains("Invalid position"));
        assert!(text.contains("输入无效"));
        assert_eq!(session.moves_played(), 1);
        assert_eq!(session.current_turn(), Side::White);
    }

    #[test]
    fn test_computer_replies() {
        let mut session = GameSession::new_game(10, GameMode::ComputerOpponent).unwrap();

        let text = run_script(&mut session, "4 4\n");
        assert!(text.contains("电脑落子"));
        assert_eq!(session.moves_played(), 2);
        assert_eq!(session.current_turn(), Side::Black);
    }

    #[test]
    fn test_new_mode_and_hint() {
        let mut session = GameSession::new_game(10, GameMode::TwoPlayer).unwrap();

        let text = run_script(&mut session, "hint\n2 2\nnew\nmode\nhelp\n");
        assert!(text.contains("候选: 5 5"));
        assert!(text.contains("已切换为人机对战"));
        assert!(text.contains("hint"));
        assert_eq!(session.mode(), GameMode::ComputerOpponent);
        assert_eq!(session.moves_played(), 0);
        assert!(session.board().is_empty(Position::new(2, 2)));
    }
}
