//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有固定路径与“可调策略”集中到 `FaviconConfig`，由调用方构造后注入生成器，
//! 而不是散落在各处的全局常量。这样测试可以把项目根目录指向临时目录。
//!
//! ## 实现思路
//!
//! - `for_project_root` 从项目根目录推导全部输入/输出路径。
//! - 不读取任何配置文件、环境变量或命令行参数。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::catalog::{ICO_SIZES, PNG_TARGETS, PngTarget};

pub const COLOR_SVG_FILE_NAME: &str = "DarkOak_CL.svg";
pub const COLOR_PNG_FILE_NAME: &str = "DarkOak_CL.png";
pub const MONO_SVG_FILE_NAME: &str = "DarkOak_BW.svg";

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct FaviconConfig {
    /// 项目根目录；完成提示中的路径相对于它输出。
    pub project_root: PathBuf,
    /// 品牌素材目录（`public/assets/brand`）。
    pub brand_dir: PathBuf,
    /// 首选彩色源（矢量）。
    pub color_svg: PathBuf,
    /// 回退彩色源（位图）。
    pub color_png: PathBuf,
    /// 必需的单色矢量源。
    pub mono_svg: PathBuf,
    /// 输出目录（`public/favicons`）。
    pub output_dir: PathBuf,
    pub ico_file_name: String,
    pub pinned_tab_file_name: String,
    /// 矢量光栅化的工作分辨率（正方形边长）。
    pub raster_size: u32,
    /// 缩放滤镜，默认 Lanczos3。
    pub resize_filter: FilterType,
    /// 位图回退源解码前允许的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// PNG 目标表，按声明顺序写出。
    pub png_targets: Vec<PngTarget>,
    /// ICO 内嵌尺寸。
    pub ico_sizes: Vec<u32>,
}

impl FaviconConfig {
    /// 以给定项目根目录构造配置。
    ///
    /// # 示例
    /// ```rust
    /// use favicon_refresh::favicon::FaviconConfig;
    ///
    /// let config = FaviconConfig::for_project_root("/srv/app");
    /// assert!(config.mono_svg.ends_with("public/assets/brand/DarkOak_BW.svg"));
    /// assert!(config.output_dir.ends_with("public/favicons"));
    /// ```
    pub fn for_project_root(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let brand_dir = project_root.join("public").join("assets").join("brand");
        let output_dir = project_root.join("public").join("favicons");

        Self {
            color_svg: brand_dir.join(COLOR_SVG_FILE_NAME),
            color_png: brand_dir.join(COLOR_PNG_FILE_NAME),
            mono_svg: brand_dir.join(MONO_SVG_FILE_NAME),
            brand_dir,
            output_dir,
            project_root,
            ico_file_name: "favicon.ico".to_string(),
            pinned_tab_file_name: "safari-pinned-tab.svg".to_string(),
            raster_size: 1024,
            resize_filter: FilterType::Lanczos3,
            max_decoded_pixels: 40_000_000,
            png_targets: PNG_TARGETS.to_vec(),
            ico_sizes: ICO_SIZES.to_vec(),
        }
    }

    pub fn ico_path(&self) -> PathBuf {
        self.output_dir.join(&self.ico_file_name)
    }

    pub fn pinned_tab_path(&self) -> PathBuf {
        self.output_dir.join(&self.pinned_tab_file_name)
    }

    /// 将路径转换为相对项目根目录的显示形式；不在根目录下时原样返回。
    pub fn relative_to_root<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_derived_from_project_root() {
        let config = FaviconConfig::for_project_root("/tmp/site");

        assert_eq!(
            config.color_svg,
            PathBuf::from("/tmp/site/public/assets/brand/DarkOak_CL.svg")
        );
        assert_eq!(
            config.color_png,
            PathBuf::from("/tmp/site/public/assets/brand/DarkOak_CL.png")
        );
        assert_eq!(config.ico_path(), PathBuf::from("/tmp/site/public/favicons/favicon.ico"));
        assert_eq!(
            config.pinned_tab_path(),
            PathBuf::from("/tmp/site/public/favicons/safari-pinned-tab.svg")
        );
    }

    #[test]
    fn relative_to_root_strips_prefix() {
        let config = FaviconConfig::for_project_root("/tmp/site");
        let path = config.output_dir.join("favicon-16x16.png");

        assert_eq!(
            config.relative_to_root(&path),
            Path::new("public/favicons/favicon-16x16.png")
        );
        assert_eq!(config.relative_to_root(Path::new("/elsewhere/x.png")), Path::new("/elsewhere/x.png"));
    }

    #[test]
    fn for_project_root_uses_fixed_catalog() {
        let config = FaviconConfig::for_project_root(".");

        assert_eq!(config.raster_size, 1024);
        assert_eq!(config.png_targets.len(), 28);
        assert_eq!(config.ico_sizes, vec![16, 32, 48]);
        assert!(matches!(config.resize_filter, FilterType::Lanczos3));
    }
}
