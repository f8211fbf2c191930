// ==========================================
// 气体物料清单转换工具 - 物料领域模型
// ==========================================
// 职责: 定义物料记录、物料类别、解析中间结构与转换报告
// 红线: 类别为封闭集合,不允许出现集合外的标签
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

// ==========================================
// Category - 物料类别
// ==========================================
// 声明顺序即分类规则顺序（Gas 为兜底类别）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Stikstof,   // 氮气
    Zuurstof,   // 氧气
    Argon,      // 氩气
    Acetyleen,  // 乙炔
    #[serde(rename = "CO2")]
    Co2,        // 二氧化碳
    Weldmix,    // 焊接混合气
    Formeergas, // 成型气
    Helium,     // 氦气
    Propaan,    // 丙烷
    Waterstof,  // 氢气
    Gas,        // 其他气体（默认）
}

impl Category {
    /// 全部类别（按分类规则顺序）
    pub const ALL: [Category; 11] = [
        Category::Stikstof,
        Category::Zuurstof,
        Category::Argon,
        Category::Acetyleen,
        Category::Co2,
        Category::Weldmix,
        Category::Formeergas,
        Category::Helium,
        Category::Propaan,
        Category::Waterstof,
        Category::Gas,
    ];

    /// 输出到生成文件中的标签文本
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Stikstof => "Stikstof",
            Category::Zuurstof => "Zuurstof",
            Category::Argon => "Argon",
            Category::Acetyleen => "Acetyleen",
            Category::Co2 => "CO2",
            Category::Weldmix => "Weldmix",
            Category::Formeergas => "Formeergas",
            Category::Helium => "Helium",
            Category::Propaan => "Propaan",
            Category::Waterstof => "Waterstof",
            Category::Gas => "Gas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Article - 物料记录
// ==========================================
// 用途: 转换管道最终产物,写入生成文件
// 生命周期: 每条被接受的输入行构造一次,构造后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,         // 物料编码（自然主键,输出内唯一）
    pub name: String,       // 物料名称（自由文本,仅用于分类与展示）
    pub category: Category, // 物料类别（由名称派生）
}

impl Article {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }
}

// ==========================================
// ParsedLine - 解析中间结构体
// ==========================================
// 用途: 行解析 → 分类之间的中间产物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub line_number: usize, // 源文件行号（从 1 开始,含表头）
    pub id: String,
    pub name: String,
}

// ==========================================
// ConversionReport - 转换结果
// ==========================================
// 用途: 转换接口返回值,emitted 与生成文件中的对象数量一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub run_id: String,                              // 运行 ID（UUID）
    pub input_path: String,                          // 源文件路径
    pub output_path: String,                         // 生成文件路径
    pub total_lines: usize,                          // 数据行数（不含表头）
    pub header_skipped: bool,                        // 是否跳过了表头
    pub malformed_lines: usize,                      // 无法解析而跳过的行数
    pub duplicate_lines: Vec<(usize, String)>,       // 重复编码 (行号, id)
    pub emitted: usize,                              // 写入的物料数量
    pub category_counts: BTreeMap<Category, usize>,  // 各类别数量
    pub started_at: DateTime<Utc>,                   // 开始时间
    pub completed_at: DateTime<Utc>,                 // 完成时间
    pub elapsed: Duration,                           // 耗时
}

impl ConversionReport {
    /// 命令行输出的状态行
    pub fn status_line(&self) -> String {
        format!("Processed {} articles.", self.emitted)
    }
}
