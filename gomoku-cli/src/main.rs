//! 五子棋终端版
//!
//! 启动时读取设置，命令行参数覆盖设置；登录后进入对局循环。

mod app;
mod login;
mod render;
mod settings;

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gomoku_ai::AiConfig;
use gomoku_core::{Difficulty, GameMode};
use gomoku_game::{AuthService, GameSession, JsonFileUserStore, SessionConfig, GUEST_LABEL};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::GameSettings;

#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(version, about = "Five-in-a-row against a friend or the computer", long_about = None)]
struct Args {
    /// Board side length (5..=25)
    #[arg(long, short = 's')]
    size: Option<usize>,

    /// Game mode
    #[arg(long, short = 'm', value_enum)]
    mode: Option<ModeArg>,

    /// Computer difficulty
    #[arg(long, short = 'd', value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Skip login and play as a guest
    #[arg(long)]
    guest: bool,

    /// Random seed for the computer player
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Play against the computer (computer plays O)
    Computer,
    /// Two players on one terminal
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Computer => GameMode::ComputerOpponent,
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn init_tracing(settings: &GameSettings) -> Result<()> {
    let mut filter = EnvFilter::from_default_env();
    for directive in settings.log_level.directives() {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
    Ok(())
}

/// 命令行参数覆盖设置
fn apply_args(settings: &mut GameSettings, args: &Args) {
    if let Some(size) = args.size {
        settings.board_size = size;
    }
    if let Some(mode) = args.mode {
        settings.mode = mode.into();
    }
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty.into();
    }
}

/// 登录并返回玩家名
fn sign_in(settings: &mut GameSettings) -> Result<String> {
    let store = JsonFileUserStore::default_location()?;
    info!("用户文件: {:?}", store.path());
    let mut auth = AuthService::new(store).context("加载用户数据失败")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let user = login::authenticate(&mut auth, &mut input, &mut output, &settings.nickname)?;

    let Some(name) = user else {
        return Ok(GUEST_LABEL.to_string());
    };

    if settings.nickname != name {
        settings.nickname = name.clone();
        if let Err(e) = settings.save() {
            warn!("保存设置失败: {:#}", e);
        }
    }
    Ok(name)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = GameSettings::load();

    init_tracing(&settings)?;
    info!("设置: {:?}", settings);

    apply_args(&mut settings, &args);

    let player_label = if args.guest {
        GUEST_LABEL.to_string()
    } else {
        sign_in(&mut settings)?
    };

    let mut session = GameSession::new(SessionConfig {
        board_size: settings.board_size,
        mode: settings.mode,
        difficulty: settings.difficulty,
        player_label,
    })
    .context("无法开始对局")?;

    if let Some(seed) = args.seed {
        session = session.with_ai_config(AiConfig::from_difficulty(settings.difficulty).with_seed(seed));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    app::run(&mut session, &mut input, &mut output)?;

    info!("退出: moves={}, elapsed={}", session.moves_played(), session.elapsed_display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_settings() {
        let args = Args::parse_from(["gomoku", "--size", "15", "--mode", "two-player", "-d", "hard"]);
        let mut settings = GameSettings::default();
        apply_args(&mut settings, &args);

        assert_eq!(settings.board_size, 15);
        assert_eq!(settings.mode, GameMode::TwoPlayer);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert!(!args.guest);
    }

    #[test]
    fn test_args_defaults_keep_settings() {
        let args = Args::parse_from(["gomoku", "--guest"]);
        let mut settings = GameSettings {
            board_size: 12,
            difficulty: Difficulty::Easy,
            ..GameSettings::default()
        };
        apply_args(&mut settings, &args);

        assert_eq!(settings.board_size, 12);
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!(args.guest);
    }

    #[test]
    fn test_args_reject_unknown_mode() {
        assert!(Args::try_parse_from(["gomoku", "--mode", "online"]).is_err());
    }
}
