//! # 图标生成模块（favicon）
//!
//! ## 设计思路
//!
//! 该模块将“源文件校验 → 彩色源解析 → 缩放居中 → 写出产物”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `handler`：编排整条处理流水线（`FaviconGenerator`）
//! - `loader`：单色源存在性检查、彩色源解析（矢量优先、位图回退）
//! - `rasterizer`：可选的矢量光栅化能力（`VectorRasterizer`）
//! - `pipeline`：contain 缩放 + 透明画布居中
//! - `writer`：PNG 目录表、ICO、单色矢量拷贝
//! - `config/catalog/error/source`：配置、目录表、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（日志初始化、项目根目录）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（单色源检查 → 彩色源解析）
//!    │    └─ rasterizer.rs（resvg，可缺省）
//!    ├─ writer.rs（PNG × 28 → favicon.ico → safari-pinned-tab.svg）
//!    │    └─ pipeline.rs（center_resized）
//!    ↓
//! 返回 GenerationReport / FaviconError
//! ```
//!
//! ## 分层职责建议
//!
//! - 路径与策略变更优先改 `config.rs`
//! - 新增/调整输出尺寸优先改 `catalog.rs`
//! - 阶段顺序变更优先改 `handler.rs`

mod catalog;
mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod rasterizer;
mod source;
mod writer;

pub use catalog::{ICO_SIZES, PNG_TARGETS, PngTarget};
pub use config::{COLOR_PNG_FILE_NAME, COLOR_SVG_FILE_NAME, FaviconConfig, MONO_SVG_FILE_NAME};
pub use error::FaviconError;
pub use handler::FaviconGenerator;
pub use pipeline::{center_offset, center_resized, contain_dimensions};
#[cfg(feature = "svg")]
pub use rasterizer::ResvgRasterizer;
pub use rasterizer::{VectorRasterizer, default_rasterizer};
pub use source::{ArtifactKind, GeneratedArtifact, GenerationReport, SourceImage, SourceOrigin};
