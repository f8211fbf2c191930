// ==========================================
// 气体物料清单转换工具 - 核心库
// ==========================================
// 职责: 制表符/空格分隔的气体物料清单 → 去重、分类后的 TypeScript 数据模块
// 流程: 行读取 → 行解析 → 类别判定 → 去重 + 生成
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 解析、分类、去重、生成
pub mod importer;

// 配置层 - 转换配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::{ConvertConfig, ImportConfigReader};
pub use domain::{Article, Category, ConversionReport, ParsedLine};
pub use importer::{ArticleImporter, ArticleImporterImpl, ImportError, ImportResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "气体物料清单转换工具";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
