//! # 矢量光栅化能力
//!
//! ## 设计思路
//!
//! 光栅化是一项“可能不可用”的能力：构建时关闭 `svg` feature，或测试中注入 `None`，
//! 生成器都会静默回退到 PNG 源。因此这里只定义 trait，由生成器以 `Option` 持有。
//!
//! ## 实现思路
//!
//! - `ResvgRasterizer`：`usvg` 解析（资源相对 SVG 所在目录解析），等比缩放并居中到
//!   `size x size` 画布，再将 tiny-skia 的预乘像素还原为直通 RGBA。
//! - `default_rasterizer` 按 feature 返回可用实现。

use std::path::Path;

use image::RgbaImage;

use super::FaviconError;

/// 将矢量文件渲染为正方形 RGBA 位图的能力。
pub trait VectorRasterizer {
    /// 把 `path` 指向的矢量文件渲染为 `size x size` 的透明背景位图。
    fn rasterize(&self, path: &Path, size: u32) -> Result<RgbaImage, FaviconError>;
}

/// 返回当前构建可用的光栅化实现。
#[cfg(feature = "svg")]
pub fn default_rasterizer() -> Option<Box<dyn VectorRasterizer>> {
    Some(Box::new(ResvgRasterizer::new()))
}

#[cfg(not(feature = "svg"))]
pub fn default_rasterizer() -> Option<Box<dyn VectorRasterizer>> {
    None
}

/// 基于 `resvg` 的光栅化实现。
#[cfg(feature = "svg")]
#[derive(Debug)]
pub struct ResvgRasterizer {
    load_system_fonts: bool,
}

#[cfg(feature = "svg")]
impl ResvgRasterizer {
    pub fn new() -> Self {
        Self {
            load_system_fonts: true,
        }
    }

    /// 不加载系统字体；用于不含文字的 SVG，避免扫描字体目录。
    pub fn without_system_fonts() -> Self {
        Self {
            load_system_fonts: false,
        }
    }

    fn parse(&self, path: &Path, bytes: &[u8]) -> Result<resvg::usvg::Tree, FaviconError> {
        use resvg::usvg;

        let mut options = usvg::Options {
            resources_dir: path.parent().map(Path::to_path_buf),
            ..usvg::Options::default()
        };
        if self.load_system_fonts {
            std::sync::Arc::make_mut(&mut options.fontdb).load_system_fonts();
        }

        usvg::Tree::from_data(bytes, &options).map_err(|e| {
            FaviconError::Rasterize(format!("解析 SVG 失败（{}）：{}", path.display(), e))
        })
    }
}

#[cfg(feature = "svg")]
impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "svg")]
impl VectorRasterizer for ResvgRasterizer {
    fn rasterize(&self, path: &Path, size: u32) -> Result<RgbaImage, FaviconError> {
        use resvg::tiny_skia;

        let bytes = std::fs::read(path).map_err(|e| FaviconError::io(path, e))?;
        let tree = self.parse(path, &bytes)?;

        let svg_width = tree.size().width();
        let svg_height = tree.size().height();
        let scale = (size as f32 / svg_width).min(size as f32 / svg_height);
        let offset_x = (size as f32 - svg_width * scale) / 2.0;
        let offset_y = (size as f32 - svg_height * scale) / 2.0;

        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| FaviconError::Rasterize(format!("无法创建 {size}x{size} 画布")))?;
        let transform =
            tiny_skia::Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        log::debug!(
            "🖌️ 光栅化 {}：{}x{} -> {}x{}（scale={:.3}）",
            path.display(),
            svg_width,
            svg_height,
            size,
            size,
            scale
        );

        let straight: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();

        RgbaImage::from_raw(size, size, straight)
            .ok_or_else(|| FaviconError::Rasterize("光栅化输出缓冲长度异常".to_string()))
    }
}

#[cfg(all(test, feature = "svg"))]
mod tests {
    use super::*;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
  <rect x="0" y="0" width="200" height="100" fill="#ff0000"/>
</svg>"##;

    #[test]
    fn rasterize_fits_and_centers_wide_svg() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let path = dir.path().join("wide.svg");
        std::fs::write(&path, WIDE_SVG).expect("write svg failed");

        let image = ResvgRasterizer::without_system_fonts()
            .rasterize(&path, 64)
            .expect("rasterize should succeed");

        assert_eq!(image.dimensions(), (64, 64));
        // 200x100 缩放到 64x32，上下各留 16 像素透明
        assert_eq!(image.get_pixel(32, 2)[3], 0);
        assert_eq!(image.get_pixel(32, 61)[3], 0);
        let center = image.get_pixel(32, 32);
        assert_eq!(center[3], 255);
        assert_eq!(center[0], 255);
        assert_eq!(center[1], 0);
    }

    #[test]
    fn rasterize_rejects_invalid_svg() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let path = dir.path().join("broken.svg");
        std::fs::write(&path, "not an svg").expect("write svg failed");

        let result = ResvgRasterizer::without_system_fonts().rasterize(&path, 32);

        assert!(matches!(result, Err(FaviconError::Rasterize(_))));
    }

    #[test]
    fn rasterize_reports_missing_file_as_io() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let result = ResvgRasterizer::without_system_fonts().rasterize(&dir.path().join("nope.svg"), 32);

        assert!(matches!(result, Err(FaviconError::Io { .. })));
    }
}
