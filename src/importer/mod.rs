// ==========================================
// 气体物料清单转换工具 - 导入层
// ==========================================
// 职责: 源文本 → 去重、分类后的物料目录 → TypeScript 数据模块
// 支持: 制表符分隔 / 空格分隔（回退）
// ==========================================

// 模块声明
pub mod article_importer_impl;
pub mod article_importer_trait;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod line_reader;
pub mod record_parser;
pub mod ts_emitter;

// 重导出核心类型
pub use article_importer_impl::{ArticleImporterImpl, LineOutcome};
pub use catalog::ArticleCatalog;
pub use classifier::{KeywordClassifier, DEFAULT_RULES};
pub use error::{ImportError, ImportResult};
pub use line_reader::{strip_header, TextLineReader};
pub use record_parser::{
    split_by_tab, split_by_whitespace_limit_2, split_with_fallback, LineParser,
};
pub use ts_emitter::TypeScriptEmitter;

// 重导出 Trait 接口
pub use article_importer_trait::{
    ArticleEmitter, ArticleImporter, Classifier, LineReader, RecordParser,
};
