//! 图配置
//!
//! 构造图时使用的参数，可从 JSON 文件加载

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 是否为有向图
    pub directed: bool,
    /// 预分配的顶点容量
    pub initial_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            initial_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// 有向图配置
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// 从 JSON 字符串解析
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
