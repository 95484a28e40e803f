//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `FaviconGenerator` 只负责流程编排，各阶段实现分布在 `loader` / `writer` / `pipeline`。
//! 处理链路固定且严格串行：
//! 1. 检查单色矢量源（缺失即终止，不做任何解码）
//! 2. 解析彩色工作图像
//! 3. 写出 PNG 目录表
//! 4. 写出多分辨率 ICO
//! 5. 拷贝单色矢量源
//!
//! ## 实现思路
//!
//! - 工作图像的所有权限定在一个块作用域内：ICO 写完即释放，
//!   任一阶段以 `?` 提前返回时同样随作用域释放。
//! - 记录 `resolve/png/ico/copy/total` 阶段耗时，便于诊断。

use std::time::Instant;

use super::rasterizer::{VectorRasterizer, default_rasterizer};
use super::source::GenerationReport;
use super::{FaviconConfig, FaviconError};

/// 图标生成器。
///
/// 持有配置与（可选的）矢量光栅化能力；光栅化能力为 `None` 时静默使用位图回退源。
pub struct FaviconGenerator {
    pub(crate) config: FaviconConfig,
    pub(crate) rasterizer: Option<Box<dyn VectorRasterizer>>,
}

impl FaviconGenerator {
    /// 使用当前构建可用的光栅化能力创建生成器。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use favicon_refresh::favicon::{FaviconConfig, FaviconGenerator};
    ///
    /// let generator = FaviconGenerator::new(FaviconConfig::for_project_root("."));
    /// let report = generator.run()?;
    /// println!("{} files", report.artifacts.len());
    /// # Ok::<(), favicon_refresh::favicon::FaviconError>(())
    /// ```
    pub fn new(config: FaviconConfig) -> Self {
        Self::with_rasterizer(config, default_rasterizer())
    }

    /// 显式注入光栅化能力（测试中用于模拟“可用 / 不可用”两种分支）。
    pub fn with_rasterizer(
        config: FaviconConfig,
        rasterizer: Option<Box<dyn VectorRasterizer>>,
    ) -> Self {
        Self { config, rasterizer }
    }

    pub fn config(&self) -> &FaviconConfig {
        &self.config
    }

    pub fn has_rasterizer(&self) -> bool {
        self.rasterizer.is_some()
    }

    /// 执行一次完整生成。
    ///
    /// 任一阶段失败即返回错误；此前写出的文件保留在磁盘上。
    pub fn run(&self) -> Result<GenerationReport, FaviconError> {
        let total_start = Instant::now();

        self.ensure_monochrome_source()?;

        let mut artifacts = Vec::with_capacity(self.config.png_targets.len() + 2);

        let origin = {
            let resolve_start = Instant::now();
            let source = self.resolve_color_source()?;
            let (width, height) = source.dimensions();
            log::info!(
                "⏱️ resolve 完成：{}x{}，耗时 {}ms",
                width,
                height,
                resolve_start.elapsed().as_millis()
            );

            let png_start = Instant::now();
            artifacts.extend(self.generate_pngs(&source)?);
            log::info!(
                "⏱️ png 完成：{} 个文件，耗时 {}ms",
                artifacts.len(),
                png_start.elapsed().as_millis()
            );

            let ico_start = Instant::now();
            artifacts.push(self.generate_ico(&source)?);
            log::info!("⏱️ ico 完成，耗时 {}ms", ico_start.elapsed().as_millis());

            source.origin().clone()
        };

        let copy_start = Instant::now();
        artifacts.push(self.copy_mono_svg()?);
        log::info!("⏱️ copy 完成，耗时 {}ms", copy_start.elapsed().as_millis());

        log::info!(
            "✅ 图标生成完成：{} 个文件，总耗时 {}ms",
            artifacts.len(),
            total_start.elapsed().as_millis()
        );

        Ok(GenerationReport { origin, artifacts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::source::{ArtifactKind, SourceOrigin};
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;

    struct FailingRasterizer;

    impl VectorRasterizer for FailingRasterizer {
        fn rasterize(&self, path: &Path, _size: u32) -> Result<RgbaImage, FaviconError> {
            Err(FaviconError::Rasterize(format!("boom: {}", path.display())))
        }
    }

    fn project_with_png(root: &Path) -> FaviconConfig {
        let config = FaviconConfig::for_project_root(root);
        fs::create_dir_all(&config.brand_dir).expect("create brand dir failed");
        fs::write(&config.mono_svg, "<svg/>").expect("write mono svg failed");
        RgbaImage::from_pixel(30, 20, Rgba([1, 2, 3, 255]))
            .save(&config.color_png)
            .expect("write png failed");
        config
    }

    #[test]
    fn run_writes_every_artifact_in_processing_order() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = FaviconGenerator::with_rasterizer(project_with_png(dir.path()), None);

        let report = generator.run().expect("run should succeed");

        assert!(matches!(report.origin, SourceOrigin::Raster(_)));
        assert_eq!(report.png_count(), 28);
        assert_eq!(report.artifacts.len(), 30);
        let kinds: Vec<_> = report.artifacts[28..].iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ArtifactKind::Ico, ArtifactKind::PinnedTabSvg]);
        assert!(report.artifacts.iter().all(|a| a.path.is_file()));
    }

    #[test]
    fn rasterizer_failure_aborts_before_any_output() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let config = project_with_png(dir.path());
        fs::write(&config.color_svg, "<svg/>").expect("write color svg failed");
        let output_dir = config.output_dir.clone();
        let generator = FaviconGenerator::with_rasterizer(config, Some(Box::new(FailingRasterizer)));

        let result = generator.run();

        assert!(matches!(result, Err(FaviconError::Rasterize(_))));
        assert!(!output_dir.exists());
    }
}
