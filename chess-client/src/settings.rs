//! 客户端设置
//!
//! 持久化在配置目录下的 JSON 文件。文件缺失或格式无效时退回默认值，
//! 设置问题永远不阻止客户端启动。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use protocol::{DEFAULT_HOST, DEFAULT_PORT};

use crate::session::DisplayMode;

/// 客户端设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// 服务器地址
    pub server_host: String,
    /// 服务器端口
    pub server_port: u16,
    /// 默认昵称
    pub nickname: String,
    /// 启动时使用纯 ASCII 显示
    pub ascii_only: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            nickname: "Player".to_string(),
            ascii_only: false,
        }
    }
}

impl ClientSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("terminal-chess");
            path.push("settings.json");
            path
        })
    }

    /// 从默认路径加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("no config directory available, using default settings");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("settings file not found, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("invalid settings file: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("cannot read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// 保存设置到默认路径
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().context("no config directory available")?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create config directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings file {:?}", path))?;

        tracing::info!("settings saved to {:?}", path);
        Ok(())
    }

    /// 启动时的显示模式
    pub fn display_mode(&self) -> DisplayMode {
        if self.ascii_only {
            DisplayMode::PlainAscii
        } else {
            DisplayMode::UnicodeColor
        }
    }
}
