//! 账号注册与登录
//!
//! 规则引擎不依赖本模块；会话只接收一个用于显示的玩家名。
//! 用户数据通过 [`UserStore`] 注入，便于替换存储方式。

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

/// 用户名最短长度
pub const MIN_USERNAME_LEN: usize = 3;

/// 密码最短长度
pub const MIN_PASSWORD_LEN: usize = 6;

/// 已注册用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// SHA-256 摘要（小写十六进制）
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// 用户数据存储
pub trait UserStore {
    /// 读取全部用户（用户名 -> 记录）
    fn load(&self) -> anyhow::Result<HashMap<String, UserRecord>>;

    /// 覆盖保存全部用户
    fn save(&mut self, users: &HashMap<String, UserRecord>) -> anyhow::Result<()>;
}

/// 内存存储（测试和游客模式使用）
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl UserStore for MemoryUserStore {
    fn load(&self) -> anyhow::Result<HashMap<String, UserRecord>> {
        Ok(self.users.clone())
    }

    fn save(&mut self, users: &HashMap<String, UserRecord>) -> anyhow::Result<()> {
        self.users = users.clone();
        Ok(())
    }
}

/// 账号错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username is empty")]
    EmptyUsername,

    #[error("Username too short: {len} chars (min: {min})")]
    UsernameTooShort { len: usize, min: usize },

    #[error("Password is empty")]
    EmptyPassword,

    #[error("Password too short: {len} chars (min: {min})")]
    PasswordTooShort { len: usize, min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Username is already registered")]
    UserExists,

    #[error("Unknown username")]
    UnknownUser,

    #[error("Wrong password")]
    WrongPassword,

    /// 存储读写失败（保留完整的错误链文本）
    #[error("User store error: {0}")]
    Storage(String),
}

impl AuthError {
    /// 错误是否与用户名输入框相关
    pub fn concerns_username(&self) -> bool {
        matches!(
            self,
            AuthError::EmptyUsername
                | AuthError::UsernameTooShort { .. }
                | AuthError::UserExists
                | AuthError::UnknownUser
        )
    }
}

fn storage_error(err: anyhow::Error) -> AuthError {
    AuthError::Storage(format!("{:#}", err))
}

/// 账号服务
pub struct AuthService<S: UserStore> {
    store: S,
    users: HashMap<String, UserRecord>,
}

impl<S: UserStore> AuthService<S> {
    /// 创建服务并从存储加载用户
    pub fn new(store: S) -> Result<Self, AuthError> {
        let users = store.load().map_err(storage_error)?;
        info!("已加载 {} 个用户", users.len());
        Ok(Self { store, users })
    }

    /// 注册新用户
    pub fn register(&mut self, username: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
        let username = username.trim();
        Self::validate_username(username)?;
        Self::validate_password(password)?;

        if self.users.contains_key(username) {
            return Err(AuthError::UserExists);
        }
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }

        let record = UserRecord {
            password_hash: Self::hash_password(password),
            registered_at: Utc::now(),
        };
        self.users.insert(username.to_string(), record);

        // 保存失败时撤销，保持内存与存储一致
        if let Err(e) = self.store.save(&self.users) {
            self.users.remove(username);
            warn!("保存用户失败: {:#}", e);
            return Err(storage_error(e));
        }

        info!("注册成功: {}", username);
        Ok(())
    }

    /// 登录校验
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let record = self.users.get(username).ok_or(AuthError::UnknownUser)?;
        if !Self::verify_password(password, &record.password_hash) {
            warn!("密码错误: {}", username);
            return Err(AuthError::WrongPassword);
        }

        info!("登录成功: {}", username);
        Ok(())
    }

    /// 计算密码摘要
    pub fn hash_password(password: &str) -> String {
        let digest = Sha256::digest(password.as_bytes());
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// 校验密码与摘要是否匹配
    pub fn verify_password(password: &str, hash: &str) -> bool {
        Self::hash_password(password) == hash
    }

    pub fn contains_user(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn validate_username(username: &str) -> Result<(), AuthError> {
        let len = username.chars().count();
        if len == 0 {
            return Err(AuthError::EmptyUsername);
        }
        if len < MIN_USERNAME_LEN {
            return Err(AuthError::UsernameTooShort {
                len,
                min: MIN_USERNAME_LEN,
            });
        }
        Ok(())
    }

    fn validate_password(password: &str) -> Result<(), AuthError> {
        let len = password.chars().count();
        if len == 0 {
            return Err(AuthError::EmptyPassword);
        }
        if len < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort {
                len,
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}
