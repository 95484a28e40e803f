//! # 输出目录表
//!
//! 固定的 PNG 目标表（文件名 → 边长）与 ICO 内嵌尺寸。
//! 按消费方分组，声明顺序即写出顺序。

/// 单个 PNG 输出目标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngTarget {
    /// 输出文件名（位于输出目录下）。
    pub file_name: &'static str,
    /// 正方形边长（像素）。
    pub size: u32,
}

impl PngTarget {
    pub const fn new(file_name: &'static str, size: u32) -> Self {
        Self { file_name, size }
    }
}

pub const PNG_TARGETS: [PngTarget; 28] = [
    // Android Chrome
    PngTarget::new("android-chrome-192x192.png", 192),
    PngTarget::new("android-chrome-512x512.png", 512),
    PngTarget::new("android-icon-36x36.png", 36),
    PngTarget::new("android-icon-48x48.png", 48),
    PngTarget::new("android-icon-72x72.png", 72),
    PngTarget::new("android-icon-96x96.png", 96),
    PngTarget::new("android-icon-144x144.png", 144),
    PngTarget::new("android-icon-192x192.png", 192),
    // Apple touch icons
    PngTarget::new("apple-icon-57x57.png", 57),
    PngTarget::new("apple-icon-60x60.png", 60),
    PngTarget::new("apple-icon-72x72.png", 72),
    PngTarget::new("apple-icon-76x76.png", 76),
    PngTarget::new("apple-icon-114x114.png", 114),
    PngTarget::new("apple-icon-120x120.png", 120),
    PngTarget::new("apple-icon-144x144.png", 144),
    PngTarget::new("apple-icon-152x152.png", 152),
    PngTarget::new("apple-icon-180x180.png", 180),
    PngTarget::new("apple-icon.png", 180),
    PngTarget::new("apple-icon-precomposed.png", 180),
    PngTarget::new("apple-touch-icon.png", 180),
    // 通用 favicon
    PngTarget::new("favicon-16x16.png", 16),
    PngTarget::new("favicon-32x32.png", 32),
    PngTarget::new("favicon-96x96.png", 96),
    // Microsoft tiles
    PngTarget::new("ms-icon-70x70.png", 70),
    PngTarget::new("ms-icon-144x144.png", 144),
    PngTarget::new("ms-icon-150x150.png", 150),
    PngTarget::new("ms-icon-310x310.png", 310),
    PngTarget::new("mstile-150x150.png", 150),
];

/// `favicon.ico` 内嵌的帧尺寸。
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];
