// ==========================================
// 气体物料清单转换工具 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 格式错误的行与重复编码不是错误,只跳过
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件编码错误 ({path}): {message}")]
    Decode { path: String, message: String },

    #[error("生成文件写入失败 ({path}): {message}")]
    OutputWriteError { path: String, message: String },

    // ===== 配置错误 =====
    #[error("配置读取失败 ({path}): {message}")]
    ConfigReadError { path: String, message: String },

    #[error("配置值格式错误 (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
