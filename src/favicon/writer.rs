//! # 写出模块
//!
//! ## 设计思路
//!
//! 负责三类产物的落盘：PNG 目录表、多分辨率 ICO、单色矢量拷贝。
//! 每写出一个文件就立即输出一行完成提示（相对项目根目录），顺序即处理顺序。
//!
//! ## 实现思路
//!
//! - 写入前 `create_dir_all` 输出目录，已存在的同名文件直接覆盖。
//! - 任一写入失败立即向上返回；此前已写出的文件保留（不做事务回滚）。
//! - ICO 帧按边长从大到小排列，首帧即默认帧。

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::ImageFormat;

use super::pipeline::center_resized;
use super::source::{ArtifactKind, GeneratedArtifact, SourceImage};
use super::{FaviconError, FaviconGenerator};

/// ICO 格式单帧允许的最大边长。
const ICO_MAX_DIMENSION: u32 = 256;

impl FaviconGenerator {
    /// 按目录表顺序写出全部 PNG。
    pub fn generate_pngs(
        &self,
        source: &SourceImage,
    ) -> Result<Vec<GeneratedArtifact>, FaviconError> {
        let config = &self.config;
        let mut written = Vec::with_capacity(config.png_targets.len());

        for target in &config.png_targets {
            let destination = config.output_dir.join(target.file_name);
            Self::ensure_parent_dir(&destination)?;

            let icon = center_resized(source.pixels(), target.size, config.resize_filter)?;
            icon.save_with_format(&destination, ImageFormat::Png)
                .map_err(|e| FaviconError::from_image_write(&destination, e))?;

            let artifact = self.artifact(ArtifactKind::Png, destination, Some(target.size));
            Self::announce("Wrote", &artifact);
            written.push(artifact);
        }

        Ok(written)
    }

    /// 生成多分辨率 `favicon.ico`。
    pub fn generate_ico(&self, source: &SourceImage) -> Result<GeneratedArtifact, FaviconError> {
        let config = &self.config;
        let destination = config.ico_path();

        let mut sizes = config.ico_sizes.clone();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();

        if let Some(&size) = sizes
            .iter()
            .find(|&&size| size == 0 || size > ICO_MAX_DIMENSION)
        {
            return Err(FaviconError::ResourceLimit(format!(
                "ICO 帧边长必须在 1..={} 之间：{}",
                ICO_MAX_DIMENSION, size
            )));
        }

        let mut icon_dir = IconDir::new(ResourceType::Icon);
        for &size in &sizes {
            let frame = center_resized(source.pixels(), size, config.resize_filter)?;
            let image = IconImage::from_rgba_data(size, size, frame.into_raw());
            let entry = IconDirEntry::encode(&image)
                .map_err(|e| FaviconError::Encode(format!("ICO 帧 {size}x{size} 编码失败：{e}")))?;
            icon_dir.add_entry(entry);
            log::debug!("ICO 帧：{}x{}", size, size);
        }

        Self::ensure_parent_dir(&destination)?;
        let file = fs::File::create(&destination).map_err(|e| FaviconError::io(&destination, e))?;
        let mut writer = BufWriter::new(file);
        icon_dir
            .write(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| FaviconError::io(&destination, e))?;

        let artifact = self.artifact(ArtifactKind::Ico, destination, sizes.first().copied());
        Self::announce("Wrote", &artifact);
        Ok(artifact)
    }

    /// 逐字节拷贝单色矢量源，不做任何转换。
    pub fn copy_mono_svg(&self) -> Result<GeneratedArtifact, FaviconError> {
        let config = &self.config;
        let destination = config.pinned_tab_path();

        let bytes = fs::read(&config.mono_svg).map_err(|e| FaviconError::io(&config.mono_svg, e))?;
        Self::ensure_parent_dir(&destination)?;
        fs::write(&destination, &bytes).map_err(|e| FaviconError::io(&destination, e))?;

        let artifact = self.artifact(ArtifactKind::PinnedTabSvg, destination, None);
        Self::announce("Copied", &artifact);
        Ok(artifact)
    }

    fn artifact(&self, kind: ArtifactKind, path: PathBuf, size: Option<u32>) -> GeneratedArtifact {
        let relative_path = self.config.relative_to_root(&path).to_path_buf();
        GeneratedArtifact {
            kind,
            path,
            relative_path,
            size,
        }
    }

    fn ensure_parent_dir(path: &Path) -> Result<(), FaviconError> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| FaviconError::io(parent, e))
            }
            _ => Ok(()),
        }
    }

    /// 完成提示是工具的输出契约，直接写 stdout，不受日志级别影响。
    fn announce(verb: &str, artifact: &GeneratedArtifact) {
        println!("{} {}", verb, artifact.relative_path.display());
        log::debug!("{:?} {:?} -> {}", artifact.kind, artifact.size, artifact.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::source::SourceOrigin;
    use crate::favicon::{FaviconConfig, PngTarget};
    use image::{Rgba, RgbaImage};

    fn source() -> SourceImage {
        SourceImage::new(
            RgbaImage::from_pixel(64, 32, Rgba([200, 100, 50, 255])),
            SourceOrigin::Raster(PathBuf::from("logo.png")),
        )
    }

    fn generator(root: &Path) -> FaviconGenerator {
        let mut config = FaviconConfig::for_project_root(root);
        config.png_targets = vec![
            PngTarget::new("favicon-16x16.png", 16),
            PngTarget::new("nested/tile.png", 40),
        ];
        FaviconGenerator::with_rasterizer(config, None)
    }

    #[test]
    fn generate_pngs_creates_missing_directories_in_order() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = generator(dir.path());

        let written = generator.generate_pngs(&source()).expect("png generation should succeed");

        let relative: Vec<_> = written.iter().map(|a| a.relative_path.clone()).collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("public/favicons/favicon-16x16.png"),
                PathBuf::from("public/favicons/nested/tile.png"),
            ]
        );

        let tile = image::open(&written[1].path).expect("open tile failed").to_rgba8();
        assert_eq!(tile.dimensions(), (40, 40));
        assert_eq!(tile.get_pixel(0, 0)[3], 0);
        assert!(tile.get_pixel(20, 20)[3] > 200);
    }

    #[test]
    fn generate_pngs_overwrites_existing_files() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = generator(dir.path());
        let destination = generator.config().output_dir.join("favicon-16x16.png");
        fs::create_dir_all(&generator.config().output_dir).expect("create output dir failed");
        fs::write(&destination, b"stale").expect("write stale file failed");

        generator.generate_pngs(&source()).expect("png generation should succeed");

        let icon = image::open(&destination).expect("open icon failed");
        assert_eq!((icon.width(), icon.height()), (16, 16));
    }

    #[test]
    fn generate_ico_orders_frames_largest_first() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = generator(dir.path());

        let artifact = generator.generate_ico(&source()).expect("ico generation should succeed");
        assert_eq!(artifact.size, Some(48));

        let file = fs::File::open(&artifact.path).expect("open ico failed");
        let icon_dir = IconDir::read(file).expect("read ico failed");
        let widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(widths, vec![48, 32, 16]);
    }

    #[test]
    fn generate_ico_rejects_oversized_frames() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let mut generator = generator(dir.path());
        generator.config.ico_sizes = vec![16, 512];

        let result = generator.generate_ico(&source());

        assert!(matches!(result, Err(FaviconError::ResourceLimit(_))));
        assert!(!generator.config().ico_path().exists());
    }

    #[test]
    fn copy_mono_svg_is_byte_identical() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = generator(dir.path());
        let payload = b"<svg xmlns=\"http://www.w3.org/2000/svg\">\r\n<path d=\"M0 0h1\"/></svg>\n";
        fs::create_dir_all(&generator.config().brand_dir).expect("create brand dir failed");
        fs::write(&generator.config().mono_svg, payload).expect("write mono svg failed");

        let artifact = generator.copy_mono_svg().expect("copy should succeed");

        assert_eq!(fs::read(&artifact.path).expect("read copy failed"), payload.to_vec());
        assert_eq!(
            artifact.relative_path,
            PathBuf::from("public/favicons/safari-pinned-tab.svg")
        );
    }
}
