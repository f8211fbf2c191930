// ==========================================
// 气体物料清单转换工具 - 配置层
// ==========================================
// 职责: 转换配置管理（默认值 + 可选 JSON 配置文件）
// ==========================================

pub mod convert_config;
pub mod import_config_trait;

// 重导出核心配置类型
pub use convert_config::{defaults, ConvertConfig};
pub use import_config_trait::ImportConfigReader;
