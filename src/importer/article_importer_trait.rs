// ==========================================
// 气体物料清单转换工具 - 物料导入 Trait
// ==========================================
// 职责: 定义物料转换各阶段接口（不包含实现）
// 流程: 读取 → 表头剔除 → 行解析 → 分类 → 去重 → 生成 → 写出
// ==========================================

use crate::domain::article::{Article, Category, ConversionReport, ParsedLine};
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// ArticleImporter Trait
// ==========================================
// 用途: 物料转换主接口
// 实现者: ArticleImporterImpl
pub trait ArticleImporter {
    /// 将源文件转换为 TypeScript 数据模块
    ///
    /// # 参数
    /// - input: 源文件路径（制表符/空格分隔的文本）
    /// - output: 生成文件路径
    ///
    /// # 返回
    /// - Ok(ConversionReport): 转换结果（含写出数量、重复明细）
    /// - Err: 文件读取错误、编码错误、写出错误
    ///
    /// # 转换流程（4个阶段）
    /// 1. 读取全部行（首行含表头标记时剔除）
    /// 2. 逐行解析为 (id, name),无法解析的行跳过
    /// 3. 按名称关键字分类,按 id 去重（首次出现优先）
    /// 4. 生成 TypeScript 文本并写出
    fn convert(&self, input: &Path, output: &Path) -> ImportResult<ConversionReport>;
}

// ==========================================
// LineReader Trait
// ==========================================
// 用途: 行读取接口（阶段 1）
// 实现者: TextLineReader
pub trait LineReader {
    /// 读取文件的全部文本行（保持原始顺序）
    ///
    /// # 返回
    /// - Ok(Vec<String>): 行列表（已去掉换行符）
    /// - Err: 文件不存在、读取失败、非 UTF-8 编码
    fn read_lines(&self, path: &Path) -> ImportResult<Vec<String>>;
}

// ==========================================
// RecordParser Trait
// ==========================================
// 用途: 行解析接口（阶段 2）
// 实现者: LineParser
pub trait RecordParser {
    /// 将一行文本解析为 (id, name)
    ///
    /// # 参数
    /// - line: 原始行文本
    /// - line_number: 源文件行号
    ///
    /// # 返回
    /// - Some(ParsedLine): 解析成功
    /// - None: 字段不足,跳过该行（不报错）
    fn parse_line(&self, line: &str, line_number: usize) -> Option<ParsedLine>;
}

// ==========================================
// Classifier Trait
// ==========================================
// 用途: 类别判定接口（阶段 3）
// 实现者: KeywordClassifier
pub trait Classifier {
    /// 根据物料名称判定唯一类别（纯函数,同一名称总是得到同一类别）
    fn classify(&self, name: &str) -> Category;
}

// ==========================================
// ArticleEmitter Trait
// ==========================================
// 用途: 生成文件接口（阶段 4）
// 实现者: TypeScriptEmitter
pub trait ArticleEmitter {
    /// 将物料列表渲染为生成文件文本
    fn render(&self, articles: &[Article]) -> String;

    /// 写出生成文件
    ///
    /// # 说明
    /// - 非原子写入,失败时可能留下部分文件
    fn write(&self, path: &Path, content: &str) -> ImportResult<()>;
}
