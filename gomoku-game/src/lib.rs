//! 五子棋对局层
//!
//! 包含:
//! - 对局会话（人机 / 双人）
//! - 对局计时
//! - 账号注册与登录
//! - 用户数据存储

pub mod auth;
pub mod clock;
pub mod session;
pub mod storage;

pub use auth::{AuthError, AuthService, MemoryUserStore, UserRecord, UserStore};
pub use clock::{format_elapsed, SessionClock};
pub use session::{GameResult, GameSession, MoveOutcome, SessionConfig, COMPUTER_SIDE, GUEST_LABEL};
pub use storage::JsonFileUserStore;
