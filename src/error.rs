//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义进程级的 `AppError` 枚举，入口函数只面对这一种错误，
//! 并由它决定退出码与错误输出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `FaviconError` 提供 `From` 转换，无需手动 map。
//! - 进程级 I/O（如获取当前目录）单独归为 `Io`。

use crate::favicon::FaviconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（校验 / 解析 / 写出）
    #[error("{0}")]
    Favicon(#[from] FaviconError),

    /// 进程级文件系统错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 进程退出码：任何失败都以非零状态结束。
    pub fn exit_code(&self) -> i32 {
        1
    }
}
