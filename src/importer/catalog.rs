// ==========================================
// 气体物料清单转换工具 - 物料目录（去重器）实现
// ==========================================
// 职责: 按 id 去重,首次出现优先,保持首次出现顺序
// 红线: 输出中 id 两两不同;重复记录静默丢弃（仅记录行号）
// ==========================================

use crate::domain::article::{Article, Category, ParsedLine};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

#[derive(Debug, Default)]
pub struct ArticleCatalog {
    seen_ids: HashSet<String>,
    articles: Vec<Article>,
    duplicates: Vec<(usize, String)>, // (行号, id)
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// id 未出现过时分类并追加物料（去重规则唯一入口）
    ///
    /// # 参数
    /// - parsed: 解析后的行
    /// - classify: 类别判定,仅对首次出现的 id 调用
    ///
    /// # 返回
    /// - true: 已追加
    /// - false: 重复 id,已丢弃
    pub fn insert_with<F>(&mut self, parsed: ParsedLine, classify: F) -> bool
    where
        F: FnOnce(&str) -> Category,
    {
        if self.seen_ids.contains(&parsed.id) {
            debug!(line_number = parsed.line_number, id = %parsed.id, "重复物料编码,丢弃");
            self.duplicates.push((parsed.line_number, parsed.id));
            return false;
        }

        let category = classify(&parsed.name);
        self.seen_ids.insert(parsed.id.clone());
        self.articles.push(Article::new(parsed.id, parsed.name, category));
        true
    }

    /// 追加已分类的物料（id 未出现过时）
    pub fn insert(&mut self, line_number: usize, article: Article) -> bool {
        let category = article.category;
        let parsed = ParsedLine {
            line_number,
            id: article.id,
            name: article.name,
        };
        self.insert_with(parsed, |_| category)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen_ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn duplicates(&self) -> &[(usize, String)] {
        &self.duplicates
    }

    /// 各类别物料数量
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for article in &self.articles {
            *counts.entry(article.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }

    pub fn into_parts(self) -> (Vec<Article>, Vec<(usize, String)>) {
        (self.articles, self.duplicates)
    }
}
