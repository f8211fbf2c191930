// ==========================================
// 气体物料清单转换工具 - 行解析器实现
// ==========================================
// 职责: 单行文本 → (id, name)
// 策略: 优先按制表符切分,字段不足时退回按空白切分（最多 2 段）
// ==========================================

use crate::domain::article::ParsedLine;
use crate::importer::article_importer_trait::RecordParser;
use tracing::trace;

/// 切分策略: 一行文本 → 字段列表
pub type SplitStrategy = fn(&str) -> Vec<&str>;

/// 默认策略顺序
pub const DEFAULT_STRATEGIES: [SplitStrategy; 2] = [split_by_tab, split_by_whitespace_limit_2];

/// 按制表符切分（保留空字段）
pub fn split_by_tab(line: &str) -> Vec<&str> {
    line.split('\t').collect()
}

/// 按空白切分为最多 2 段: 首个 token 与剩余部分
///
/// # 说明
/// - 假定 id 不含空白,name 可含任意空白
/// - 剩余部分保留内部空白,仅去掉前导空白
pub fn split_by_whitespace_limit_2(line: &str) -> Vec<&str> {
    let line = line.trim_start();
    if line.is_empty() {
        return Vec::new();
    }

    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => {
            let rest = rest.trim_start();
            if rest.is_empty() {
                vec![head]
            } else {
                vec![head, rest]
            }
        }
        None => vec![line],
    }
}

/// 依次尝试各策略,返回第一个产出至少 2 个字段的结果
pub fn split_with_fallback<'a>(line: &'a str, strategies: &[SplitStrategy]) -> Option<Vec<&'a str>> {
    strategies
        .iter()
        .map(|split| split(line))
        .find(|fields| fields.len() >= 2)
}

pub struct LineParser {
    strategies: Vec<SplitStrategy>,
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            strategies: DEFAULT_STRATEGIES.to_vec(),
        }
    }

    /// 使用自定义策略顺序
    pub fn with_strategies(strategies: Vec<SplitStrategy>) -> Self {
        Self { strategies }
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for LineParser {
    fn parse_line(&self, line: &str, line_number: usize) -> Option<ParsedLine> {
        let stripped = line.trim();

        let Some(fields) = split_with_fallback(stripped, &self.strategies) else {
            trace!(line_number, "字段不足,跳过该行");
            return None;
        };

        // 多余的制表符字段忽略
        Some(ParsedLine {
            line_number,
            id: fields[0].trim().to_string(),
            name: fields[1].trim().to_string(),
        })
    }
}
