//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“源图像”和“生成结果”解耦：
//! - `SourceImage` 表示已解析、已规范化为 RGBA 的彩色工作图像
//! - `SourceOrigin` 记录工作图像来自矢量还是位图回退
//! - `GeneratedArtifact` / `GenerationReport` 记录一次运行写出的全部文件

use std::path::PathBuf;

use image::RgbaImage;

/// 彩色工作图像的来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// 由矢量文件光栅化得到。
    Vector(PathBuf),
    /// 直接加载位图回退文件。
    Raster(PathBuf),
}

/// 已解析的彩色工作图像。
///
/// 生成阶段只以 `&SourceImage` 只读借用；每一步都产出新的派生图像。
/// 所有权在编排函数的作用域内，离开作用域（含提前返回的错误路径）时释放。
pub struct SourceImage {
    pub(crate) pixels: RgbaImage,
    pub(crate) origin: SourceOrigin,
}

impl SourceImage {
    pub fn new(pixels: RgbaImage, origin: SourceOrigin) -> Self {
        Self { pixels, origin }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

impl Drop for SourceImage {
    fn drop(&mut self) {
        let (width, height) = self.pixels.dimensions();
        log::debug!("🧹 释放彩色工作图像 {}x{}（{:?}）", width, height, self.origin);
    }
}

/// 产物类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Png,
    Ico,
    /// 单色矢量的逐字节拷贝。
    PinnedTabSvg,
}

/// 一次运行中写出的单个文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    /// 绝对（或调用方给定形式的）输出路径。
    pub path: PathBuf,
    /// 相对项目根目录的路径，用于完成提示。
    pub relative_path: PathBuf,
    /// 正方形边长；ICO 为最大帧边长，SVG 拷贝为 `None`。
    pub size: Option<u32>,
}

/// 一次完整运行的结果。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub origin: SourceOrigin,
    /// 按写出顺序排列。
    pub artifacts: Vec<GeneratedArtifact>,
}

impl GenerationReport {
    pub fn png_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Png)
            .count()
    }
}
