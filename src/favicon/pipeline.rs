//! # 缩放与居中流水线
//!
//! ## 设计思路
//!
//! 唯一的非平凡逻辑：等比缩放（contain，完整放入 `N x N`，不裁剪），
//! 再居中贴到全透明的 `N x N` 画布上。
//!
//! ## 实现思路
//!
//! 1. 按宽高比计算 contain 尺寸（短边取整时 .5 向偶数舍入，至少 1 像素）
//! 2. 优先用 `fast_image_resize` 卷积缩放，失败时回退 `image::imageops::resize`
//! 3. 偏移取 `floor((N - w) / 2)`、`floor((N - h) / 2)`
//! 4. 以缩放结果自身的 alpha 作为遮罩贴到画布：四个通道（含 alpha）统一按
//!    `src * a + dst * (255 - a)` 混合，因此半透明边缘在透明画布上会再乘一次 alpha
//!
//! 源图小于目标时同样放大到贴合边框（字面的 contain 语义，而非“不放大”）。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};

use super::FaviconError;

/// 计算 contain 尺寸：保持宽高比完整放入 `size x size`。
///
/// 长边恰好等于 `size`；短边按 .5 向偶数舍入，且不小于 1。
pub fn contain_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width == height {
        return (size, size);
    }

    if width > height {
        let scaled = (height as f64 * size as f64 / width as f64).round_ties_even() as u32;
        (size, scaled.clamp(1, size))
    } else {
        let scaled = (width as f64 * size as f64 / height as f64).round_ties_even() as u32;
        (scaled.clamp(1, size), size)
    }
}

/// 居中偏移：`floor((size - len) / 2)`。
pub fn center_offset(size: u32, len: u32) -> u32 {
    size.saturating_sub(len) / 2
}

/// 等比缩放并居中到全透明的 `size x size` 画布。
///
/// 相同输入与尺寸总是产出相同的字节。
///
/// # 示例
/// ```rust
/// use favicon_refresh::favicon::center_resized;
/// use image::imageops::FilterType;
/// use image::{Rgba, RgbaImage};
///
/// let wide = RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 255]));
/// let icon = center_resized(&wide, 16, FilterType::Lanczos3)?;
///
/// assert_eq!(icon.dimensions(), (16, 16));
/// assert_eq!(icon.get_pixel(0, 0)[3], 0);
/// # Ok::<(), favicon_refresh::favicon::FaviconError>(())
/// ```
pub fn center_resized(
    source: &RgbaImage,
    size: u32,
    filter: FilterType,
) -> Result<RgbaImage, FaviconError> {
    if size == 0 {
        return Err(FaviconError::ResourceLimit("目标边长必须为正数".to_string()));
    }

    let (src_width, src_height) = source.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(FaviconError::Decode(format!(
            "源图像尺寸无效：{}x{}",
            src_width, src_height
        )));
    }

    let (target_width, target_height) = contain_dimensions(src_width, src_height, size);
    let resized = resize_rgba(source, target_width, target_height, filter)?;

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let offset_x = center_offset(size, target_width);
    let offset_y = center_offset(size, target_height);
    paste_with_alpha_mask(&mut canvas, &resized, offset_x, offset_y);

    Ok(canvas)
}

/// 以 `top` 自身的 alpha 为遮罩贴到 `canvas` 的 `(x, y)` 处。
///
/// 遮罩作用于全部四个通道，超出画布的部分被裁掉。
fn paste_with_alpha_mask(canvas: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, src) in top.enumerate_pixels() {
        let (cx, cy) = (x + tx, y + ty);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let mask = src[3] as u32;
        let dst = canvas.get_pixel_mut(cx, cy);
        for channel in 0..4 {
            dst[channel] =
                div255(src[channel] as u32 * mask + dst[channel] as u32 * (255 - mask));
        }
    }
}

/// 四舍五入的整数 `value / 255`。
fn div255(value: u32) -> u8 {
    let tmp = value + 128;
    (((tmp >> 8) + tmp) >> 8) as u8
}

/// 缩放到精确尺寸；尺寸不变时直接复制。
fn resize_rgba(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, FaviconError> {
    if source.dimensions() == (target_width, target_height) {
        return Ok(source.clone());
    }

    convolve_resize(source, target_width, target_height, filter).or_else(|err| {
        log::warn!(
            "⚠️ 图标帧 {}x{} 卷积缩放失败，改用 image 内置缩放：{}",
            target_width,
            target_height,
            err
        );
        Ok(image::imageops::resize(
            source,
            target_width,
            target_height,
            filter,
        ))
    })
}

/// 使用 `fast_image_resize` 卷积缩放（带 alpha 预乘）。
fn convolve_resize(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, FaviconError> {
    let (width, height) = source.dimensions();
    let frame_error = |stage: &str, detail: String| {
        FaviconError::Decode(format!(
            "图标帧 {}x{} -> {}x{} {}：{}",
            width, height, target_width, target_height, stage, detail
        ))
    };

    let src = fr::images::Image::from_vec_u8(
        width,
        height,
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| frame_error("源缓冲无效", e.to_string()))?;
    let mut dst = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(convolution_filter(filter)));
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| frame_error("卷积失败", e.to_string()))?;

    RgbaImage::from_raw(target_width, target_height, dst.into_vec())
        .ok_or_else(|| frame_error("输出长度不符", "缓冲长度与尺寸不匹配".to_string()))
}

/// `image` 滤镜到 `fast_image_resize` 卷积核的对应关系。
fn convolution_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::Nearest => fr::FilterType::Box,
    }
}
