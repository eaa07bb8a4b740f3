//! 用户数据文件存储
//!
//! 以 JSON 对象（用户名 -> 记录）保存在应用数据目录下

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::auth::{UserRecord, UserStore};

/// 默认用户文件名
pub const USERS_FILE: &str = "users.json";

/// JSON 文件用户存储
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    /// 使用指定文件
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用跨平台的默认位置
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(get_data_directory()?.join(USERS_FILE)))
    }

    /// 文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserStore for JsonFileUserStore {
    fn load(&self) -> Result<HashMap<String, UserRecord>> {
        if !self.path.exists() {
            debug!("用户文件不存在: {:?}", self.path);
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("读取用户文件失败: {:?}", self.path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("解析用户文件失败: {:?}", self.path))
    }

    fn save(&mut self, users: &HashMap<String, UserRecord>) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("无法创建数据目录: {:?}", parent))?;
            }
        }

        let content = serde_json::to_string_pretty(users).context("序列化用户数据失败")?;

        fs::write(&self.path, content)
            .with_context(|| format!("写入用户文件失败: {:?}", self.path))?;

        debug!("已保存 {} 个用户到 {:?}", users.len(), self.path);
        Ok(())
    }
}

/// 获取跨平台数据目录
fn get_data_directory() -> Result<PathBuf> {
    let app_data_dir = dirs::data_dir().context("无法获取应用数据目录")?;

    Ok(app_data_dir.join("gomoku"))
}
