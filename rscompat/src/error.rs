//! 全局错误类型定义
use std::io::Error as IoError;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use rscompat_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RscompatError {
    // 输入文件相关错误（对单次调用致命，批量解析中跳过）
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("File is not valid UTF-8: {}", .path.display())]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    // 自定义规则存储错误
    #[error("Failed to save custom rules: {0}")]
    RuleSaveError(String),

    // 序列化/反序列化错误
    #[error("JSON error: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

// 全局Result类型
pub type RscResult<T> = Result<T, RscompatError>;
