//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：单色矢量源的存在性检查排在任何解码工作之前，
//! 目标是尽快失败，不产生任何输出。
//!
//! ## 实现思路
//!
//! - 单色源：仅检查存在性，内容在拷贝阶段才读取。
//! - 彩色源：SVG 存在且光栅化能力可用 → 光栅化到工作分辨率；
//!   否则 PNG 存在 → 先读 header 尺寸做像素上限检查，再完整解码；
//!   两者都不可用 → 报错并列出两个可接受的文件名。
//! - 所有结果统一规范化为 RGBA。

use std::path::Path;

use image::ImageReader;

use super::config::{COLOR_PNG_FILE_NAME, COLOR_SVG_FILE_NAME};
use super::source::{SourceImage, SourceOrigin};
use super::{FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 检查必需的单色矢量源是否存在。
    pub fn ensure_monochrome_source(&self) -> Result<(), FaviconError> {
        let path = &self.config.mono_svg;
        if !path.is_file() {
            return Err(FaviconError::MissingMonochromeSource { path: path.clone() });
        }

        log::debug!("✅ 单色源存在：{}", path.display());
        Ok(())
    }

    /// 解析彩色工作图像（矢量优先，位图回退）。
    pub fn resolve_color_source(&self) -> Result<SourceImage, FaviconError> {
        let config = &self.config;

        if config.color_svg.is_file() {
            match self.rasterizer.as_deref() {
                Some(rasterizer) => {
                    log::info!("🖼️ 使用矢量彩色源：{}", config.color_svg.display());
                    let pixels = rasterizer.rasterize(&config.color_svg, config.raster_size)?;
                    return Ok(SourceImage::new(
                        pixels,
                        SourceOrigin::Vector(config.color_svg.clone()),
                    ));
                }
                None => {
                    log::debug!("矢量光栅化不可用，尝试位图回退源");
                }
            }
        }

        if config.color_png.is_file() {
            log::info!("🖼️ 使用位图彩色源：{}", config.color_png.display());
            let pixels = self.load_raster(&config.color_png)?;
            return Ok(SourceImage::new(
                pixels,
                SourceOrigin::Raster(config.color_png.clone()),
            ));
        }

        Err(FaviconError::MissingColorSource {
            svg: COLOR_SVG_FILE_NAME.to_string(),
            png: COLOR_PNG_FILE_NAME.to_string(),
            directory: config.brand_dir.clone(),
        })
    }

    /// 读取位图并转换为 RGBA；完整解码前先按 header 尺寸做像素上限检查。
    fn load_raster(&self, path: &Path) -> Result<image::RgbaImage, FaviconError> {
        let (width, height) = Self::open_reader(path)?
            .into_dimensions()
            .map_err(|e| FaviconError::Decode(format!("无法读取图片尺寸：{}", e)))?;
        self.validate_pixel_limits(width, height)?;

        let decoded = Self::open_reader(path)?
            .decode()
            .map_err(|e| FaviconError::Decode(format!("图片解码失败：{}", e)))?;

        log::debug!("✅ 位图解码成功：{}x{}", width, height);
        Ok(decoded.to_rgba8())
    }

    fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, FaviconError> {
        ImageReader::open(path)
            .map_err(|e| FaviconError::io(path, e))?
            .with_guessed_format()
            .map_err(|e| FaviconError::io(path, e))
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), FaviconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| FaviconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(FaviconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
