//! # DarkOak 图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  public/assets/brand/                                    │
//! │    DarkOak_CL.svg (首选) │ DarkOak_CL.png (回退)          │
//! │    DarkOak_BW.svg (必需)                                 │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────── AppError (进程级错误 / 退出码)           │
//! │  │                                                       │
//! │  └─ favicon ──── FaviconGenerator (严格串行)              │
//! │      ├─ loader       单色源检查 / 彩色源解析              │
//! │      ├─ rasterizer   resvg 光栅化 (可缺省)                │
//! │      ├─ pipeline     contain 缩放 + 透明画布居中          │
//! │      └─ writer       PNG × 28 / favicon.ico / SVG 拷贝    │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │  public/favicons/                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 进程级错误类型 `AppError`，入口函数的返回类型 |
//! | [`favicon`] | 配置、目录表、源解析、缩放居中与全部产物写出 |

pub mod error;
pub mod favicon;

use std::path::Path;

use error::AppError;
use favicon::{FaviconConfig, FaviconGenerator, GenerationReport};

/// 以 `project_root` 为项目根目录执行一次完整生成。
pub fn run_in(project_root: &Path) -> Result<GenerationReport, AppError> {
    let generator = FaviconGenerator::new(FaviconConfig::for_project_root(project_root));
    if !generator.has_rasterizer() {
        log::info!("未启用矢量光栅化能力，将使用位图彩色源");
    }
    Ok(generator.run()?)
}
