// ==========================================
// 气体物料清单转换工具 - 行读取器实现
// ==========================================
// 职责: 整体读入源文件、UTF-8 解码、按行切分、表头剔除
// ==========================================

use crate::importer::article_importer_trait::LineReader;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub struct TextLineReader;

impl LineReader for TextLineReader {
    fn read_lines(&self, path: &Path) -> ImportResult<Vec<String>> {
        let path_str = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImportError::FileNotFound(path_str.clone()),
            _ => ImportError::FileReadError(format!("{}: {}", path_str, e)),
        })?;

        let content = String::from_utf8(bytes).map_err(|e| ImportError::Decode {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let lines = split_lines(&content);
        debug!(path = %path_str, lines = lines.len(), "源文件读取完成");

        Ok(lines)
    }
}

/// 按行切分,\r\n、\n 与单独的 \r 均视为换行
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

/// 首行包含表头标记时剔除首行
///
/// # 返回
/// - (剩余行, 是否剔除了表头)
///
/// # 说明
/// - 只检查首行
/// - marker 为空串时不剔除
pub fn strip_header(mut lines: Vec<String>, marker: &str) -> (Vec<String>, bool) {
    if marker.is_empty() {
        return (lines, false);
    }

    match lines.first() {
        Some(first) if first.contains(marker) => {
            lines.remove(0);
            (lines, true)
        }
        _ => (lines, false),
    }
}
