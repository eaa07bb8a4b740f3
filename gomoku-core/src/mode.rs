//! 对局模式与 AI 难度

use serde::{Deserialize, Serialize};

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameMode {
    /// 人机对战（电脑执白）
    #[default]
    ComputerOpponent,
    /// 双人对战
    TwoPlayer,
}

impl GameMode {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::ComputerOpponent => "人机对战",
            GameMode::TwoPlayer => "双人对战",
        }
    }

    /// 切换到另一种模式
    pub fn toggle(self) -> Self {
        match self {
            GameMode::ComputerOpponent => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::ComputerOpponent,
        }
    }
}

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// 简单：depth=1, 30%概率随机落子
    Easy,
    /// 中等：depth=2
    #[default]
    Medium,
    /// 困难：depth=3
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(GameMode::default(), GameMode::ComputerOpponent);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(GameMode::ComputerOpponent.toggle(), GameMode::TwoPlayer);
        assert_eq!(GameMode::TwoPlayer.toggle(), GameMode::ComputerOpponent);
    }

    #[test]
    fn test_mode_serialize() {
        let json = serde_json::to_string(&GameMode::TwoPlayer).unwrap();
        let decoded: GameMode = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, GameMode::TwoPlayer);
    }
}
