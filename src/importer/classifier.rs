// ==========================================
// 气体物料清单转换工具 - 类别判定器实现
// ==========================================
// 职责: 物料名称 → 唯一类别
// 规则: 名称转小写后按顺序做子串匹配,首个命中的规则生效
// ==========================================

use crate::domain::article::Category;
use crate::importer::article_importer_trait::Classifier;
use tracing::trace;

/// 分类规则: (关键字集合, 类别),任一关键字命中即生效
pub type KeywordRule = (&'static [&'static str], Category);

/// 默认规则表（顺序即优先级）
///
/// "lucht" 与 "alisol" 两条规则与兜底类别相同,保留以便核对规则顺序
pub const DEFAULT_RULES: &[KeywordRule] = &[
    (&["stikstof"], Category::Stikstof),
    (&["zuurstof"], Category::Zuurstof),
    (&["argon"], Category::Argon),
    (&["acetyleen"], Category::Acetyleen),
    (&["kooldioxide", "co2", "koolzuur"], Category::Co2),
    (&["weldmix"], Category::Weldmix),
    (&["formeergas"], Category::Formeergas),
    (&["helium"], Category::Helium),
    (&["propaan"], Category::Propaan),
    (&["waterstof"], Category::Waterstof),
    (&["lucht"], Category::Gas),
    (&["alisol"], Category::Gas),
];

pub struct KeywordClassifier {
    rules: &'static [KeywordRule],
    fallback: Category,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES,
            fallback: Category::Gas,
        }
    }

    /// 返回命中的规则序号（从 0 开始）,无命中返回 None
    pub fn matching_rule(&self, name: &str) -> Option<usize> {
        let lower_name = name.to_lowercase();
        self.rules.iter().position(|(keywords, _)| {
            keywords
                .iter()
                .any(|keyword| lower_name.contains(keyword))
        })
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, name: &str) -> Category {
        let rule = self.matching_rule(name);
        let category = rule.map(|idx| self.rules[idx].1).unwrap_or(self.fallback);
        trace!(name = %name, rule = ?rule, category = %category, "类别判定");
        category
    }
}
