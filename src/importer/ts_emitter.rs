// ==========================================
// 气体物料清单转换工具 - TypeScript 生成器实现
// ==========================================
// 职责: 物料列表 → TypeScript 数据模块文本 → 写出文件
// 格式: 接口声明 + 导出常量数组（字段顺序 id/name/category）
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::article::Article;
use crate::importer::article_importer_trait::ArticleEmitter;
use crate::importer::error::{ImportError, ImportResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct TypeScriptEmitter {
    interface_name: String,
    constant_name: String,
    escape_strings: bool,
}

impl TypeScriptEmitter {
    pub fn new(
        interface_name: impl Into<String>,
        constant_name: impl Into<String>,
        escape_strings: bool,
    ) -> Self {
        Self {
            interface_name: interface_name.into(),
            constant_name: constant_name.into(),
            escape_strings,
        }
    }

    pub fn from_config<C: ImportConfigReader>(config: &C) -> Self {
        Self::new(
            config.interface_name(),
            config.constant_name(),
            config.escape_strings(),
        )
    }

    /// 渲染字符串字面量
    ///
    /// # 说明
    /// - escape_strings = true: 按 JSON 字符串规则转义（" \ 与控制字符）
    /// - escape_strings = false: 原样插入双引号之间
    fn string_literal(&self, value: &str) -> String {
        if self.escape_strings {
            serde_json::Value::from(value).to_string()
        } else {
            format!("\"{}\"", value)
        }
    }
}

impl Default for TypeScriptEmitter {
    fn default() -> Self {
        Self::new("Article", "ARTICLES", true)
    }
}

impl ArticleEmitter for TypeScriptEmitter {
    fn render(&self, articles: &[Article]) -> String {
        let mut content = String::new();

        // 接口声明
        let _ = write!(
            content,
            "export interface {} {{\n  id: string;\n  name: string;\n  category: string;\n}}\n\n",
            self.interface_name
        );

        // 导出常量
        let _ = writeln!(
            content,
            "export const {}: {}[] = [",
            self.constant_name, self.interface_name
        );

        for article in articles {
            let _ = write!(
                content,
                "  {{\n    \"id\": {},\n    \"name\": {},\n    \"category\": {}\n  }},\n",
                self.string_literal(&article.id),
                self.string_literal(&article.name),
                self.string_literal(article.category.as_str()),
            );
        }

        content.push_str("];\n");
        content
    }

    fn write(&self, path: &Path, content: &str) -> ImportResult<()> {
        let path_str = path.display().to_string();
        let to_write_error = |e: std::io::Error| ImportError::OutputWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(to_write_error)?;
            }
        }

        fs::write(path, content).map_err(to_write_error)?;
        debug!(path = %path_str, bytes = content.len(), "生成文件写出完成");
        Ok(())
    }
}
