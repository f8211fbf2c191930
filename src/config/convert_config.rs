// ==========================================
// 气体物料清单转换工具 - 转换配置
// ==========================================
// 职责: 配置加载（JSON 文件,可缺省）、默认值、校验
// 说明: 不读取命令行参数与环境变量
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// 配置默认值
// ==========================================
pub mod defaults {
    pub const INPUT_PATH: &str = "new_articles_raw.txt";
    pub const OUTPUT_PATH: &str = "src/data/articles.ts";
    pub const HEADER_MARKER: &str = "ArtikelCode";
    pub const INTERFACE_NAME: &str = "Article";
    pub const CONSTANT_NAME: &str = "ARTICLES";
    pub const CONFIG_FILE: &str = "convert_articles.json";
}

// ==========================================
// ConvertConfig - 转换配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input_path: String,
    pub output_path: String,
    pub header_marker: String,
    pub interface_name: String,
    pub constant_name: String,
    pub escape_strings: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: defaults::INPUT_PATH.to_string(),
            output_path: defaults::OUTPUT_PATH.to_string(),
            header_marker: defaults::HEADER_MARKER.to_string(),
            interface_name: defaults::INTERFACE_NAME.to_string(),
            constant_name: defaults::CONSTANT_NAME.to_string(),
            escape_strings: true,
        }
    }
}

impl ConvertConfig {
    /// 从 JSON 文件读取配置（缺失字段取默认值）
    ///
    /// # 返回
    /// - Ok(ConvertConfig): 读取并校验通过
    /// - Err: 文件不可读、JSON 格式错误、配置值非法
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| ImportError::ConfigReadError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let config: ConvertConfig =
            serde_json::from_str(&content).map_err(|e| ImportError::ConfigReadError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;
        debug!(path = %path_str, config = ?config, "配置文件读取完成");
        Ok(config)
    }

    /// 配置文件存在则读取,否则使用默认值
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!(path = %path.display(), "使用配置文件");
            Self::from_json_file(path)
        } else {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            Ok(Self::default())
        }
    }

    /// 校验配置值
    ///
    /// # 规则
    /// - interface_name / constant_name 必须是合法的 TypeScript 标识符
    /// - input_path / output_path 不能为空
    pub fn validate(&self) -> ImportResult<()> {
        for (key, value) in [
            ("input_path", &self.input_path),
            ("output_path", &self.output_path),
        ] {
            if value.trim().is_empty() {
                return Err(ImportError::ConfigValueError {
                    key: key.to_string(),
                    value: value.clone(),
                    message: "路径不能为空".to_string(),
                });
            }
        }

        for (key, value) in [
            ("interface_name", &self.interface_name),
            ("constant_name", &self.constant_name),
        ] {
            if !is_ts_identifier(value) {
                return Err(ImportError::ConfigValueError {
                    key: key.to_string(),
                    value: value.clone(),
                    message: "不是合法的 TypeScript 标识符".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ImportConfigReader for ConvertConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn header_marker(&self) -> &str {
        &self.header_marker
    }

    fn interface_name(&self) -> &str {
        &self.interface_name
    }

    fn constant_name(&self) -> &str {
        &self.constant_name
    }

    fn escape_strings(&self) -> bool {
        self.escape_strings
    }
}

fn is_ts_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConvertConfig::default();
        assert_eq!(config.input_path(), "new_articles_raw.txt");
        assert_eq!(config.output_path(), "src/data/articles.ts");
        assert_eq!(config.header_marker(), "ArtikelCode");
        assert_eq!(config.interface_name(), "Article");
        assert_eq!(config.constant_name(), "ARTICLES");
        assert!(config.escape_strings());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"input_path": "raw.txt", "escape_strings": false}}"#).unwrap();

        let config = ConvertConfig::from_json_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path, "raw.txt");
        assert!(!config.escape_strings);
        // 缺失字段取默认值
        assert_eq!(config.output_path, "src/data/articles.ts");
        assert_eq!(config.constant_name, "ARTICLES");
    }

    #[test]
    fn test_from_json_file_ignores_unknown_field() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"comment": "gas catalog", "constant_name": "GAS"}}"#).unwrap();

        let config = ConvertConfig::from_json_file(temp_file.path()).unwrap();
        assert_eq!(config.constant_name, "GAS");
        assert_eq!(config.input_path, "new_articles_raw.txt");
    }

    #[test]
    fn test_from_json_file_malformed_reports_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{ not json").unwrap();

        match ConvertConfig::from_json_file(temp_file.path()) {
            Err(ImportError::ConfigReadError { path, .. }) => {
                assert_eq!(path, temp_file.path().display().to_string());
            }
            other => panic!("expected ConfigReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_file_invalid_identifier() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"{{"constant_name": "1ARTICLES"}}"#).unwrap();

        let result = ConvertConfig::from_json_file(temp_file.path());
        assert!(matches!(result, Err(ImportError::ConfigValueError { .. })));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConvertConfig::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ConvertConfig::default());
    }

    #[test]
    fn test_is_ts_identifier() {
        assert!(is_ts_identifier("ARTICLES"));
        assert!(is_ts_identifier("_gas$List2"));
        assert!(!is_ts_identifier(""));
        assert!(!is_ts_identifier("my-list"));
        assert!(!is_ts_identifier("2x"));
    }
}
