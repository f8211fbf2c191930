// ==========================================
// 气体物料清单转换工具 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含文件读写逻辑,不含分类规则
// ==========================================

pub mod article;

// 重导出核心类型
pub use article::{Article, Category, ConversionReport, ParsedLine};
