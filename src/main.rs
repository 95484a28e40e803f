//! # DarkOak 图标生成工具 — 程序入口
//!
//! 本文件仅负责日志初始化、确定项目根目录与退出码。
//! 业务逻辑分布在 `favicon` 子模块中，详见 `lib.rs` 架构文档。
//!
//! 不接受任何命令行参数；以当前工作目录作为项目根目录。

use favicon_refresh::error::AppError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("图标生成失败: {err}");
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let project_root = std::env::current_dir()?;
    log::info!("项目根目录: {}", project_root.display());

    favicon_refresh::run_in(&project_root)?;
    Ok(())
}
