//! 错误类型定义
//!
//! 图操作本身不会失败：顶点或边不存在通过 `bool` / `Option` / 空集合返回。
//! 这里只覆盖真正可能出错的边界：调试输出的写入目标和配置校验。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的图配置: {0}")]
    InvalidConfig(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
