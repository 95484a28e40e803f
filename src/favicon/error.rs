//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧（含测试）可按分支匹配。
//!
//! 注意：矢量光栅化能力缺失**不是**错误，而是由 `loader` 静默回退到 PNG。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 任意一个变体都会终止整次生成；已写出的文件保留在磁盘上，不做回滚。
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    /// 必需的单色矢量源文件不存在（在任何解码工作之前检查）。
    #[error("Missing monochrome logo source at {}", .path.display())]
    MissingMonochromeSource { path: PathBuf },

    /// 彩色 SVG 与 PNG 均不存在。
    #[error(
        "Missing DarkOak color logo. Provide either {svg} (preferred) or {png} in {}.",
        .directory.display()
    )]
    MissingColorSource {
        svg: String,
        png: String,
        directory: PathBuf,
    },

    #[error("矢量光栅化失败：{0}")]
    Rasterize(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("编码错误：{0}")]
    Encode(String),

    /// 读写文件失败（权限、磁盘已满等）。
    #[error("文件错误：{}：{source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FaviconError {
    /// 构造带路径上下文的 I/O 错误。
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 将 `image` crate 的错误按路径归类：底层 I/O 失败归为 `Io`，其余视为编码错误。
    pub(crate) fn from_image_write(path: impl Into<PathBuf>, error: image::ImageError) -> Self {
        match error {
            image::ImageError::IoError(source) => Self::io(path, source),
            other => Self::Encode(other.to_string()),
        }
    }
}
