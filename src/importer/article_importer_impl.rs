// ==========================================
// 气体物料清单转换工具 - 物料导入器实现
// ==========================================
// 职责: 整合转换流程,从源文本到 TypeScript 数据模块
// 流程: 读取 → 表头剔除 → 解析 → 去重 → 分类 → 生成 → 写出
// 说明: 单线程顺序执行,每个阶段消费上一阶段的完整输出
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::article::{Article, ConversionReport};
use crate::importer::article_importer_trait::{
    ArticleEmitter, ArticleImporter, Classifier, LineReader, RecordParser,
};
use crate::importer::catalog::ArticleCatalog;
use crate::importer::classifier::KeywordClassifier;
use crate::importer::error::ImportResult;
use crate::importer::line_reader::{strip_header, TextLineReader};
use crate::importer::record_parser::LineParser;
use crate::importer::ts_emitter::TypeScriptEmitter;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// LineOutcome - 内存转换结果
// ==========================================
#[derive(Debug)]
pub struct LineOutcome {
    pub catalog: ArticleCatalog,
    pub malformed_lines: usize,
}

// ==========================================
// ArticleImporterImpl - 物料导入器实现
// ==========================================
pub struct ArticleImporterImpl<C>
where
    C: ImportConfigReader,
{
    // 配置读取器
    config: C,

    // 转换组件
    line_reader: Box<dyn LineReader>,
    record_parser: Box<dyn RecordParser>,
    classifier: Box<dyn Classifier>,
    emitter: Box<dyn ArticleEmitter>,
}

impl<C> ArticleImporterImpl<C>
where
    C: ImportConfigReader,
{
    /// 创建新的 ArticleImporter 实例
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - line_reader: 行读取器
    /// - record_parser: 行解析器
    /// - classifier: 类别判定器
    /// - emitter: 生成器
    pub fn new(
        config: C,
        line_reader: Box<dyn LineReader>,
        record_parser: Box<dyn RecordParser>,
        classifier: Box<dyn Classifier>,
        emitter: Box<dyn ArticleEmitter>,
    ) -> Self {
        Self {
            config,
            line_reader,
            record_parser,
            classifier,
            emitter,
        }
    }

    /// 使用默认组件创建实例（生成器参数取自配置）
    pub fn with_defaults(config: C) -> Self {
        let emitter = TypeScriptEmitter::from_config(&config);
        Self::new(
            config,
            Box::new(TextLineReader),
            Box::new(LineParser::new()),
            Box::new(KeywordClassifier::new()),
            Box::new(emitter),
        )
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 按配置中的路径执行转换
    pub fn run(&self) -> ImportResult<ConversionReport> {
        let input = Path::new(self.config.input_path());
        let output = Path::new(self.config.output_path());
        self.convert(input, output)
    }

    /// 内存中执行 解析 → 去重 → 分类（不涉及文件）
    ///
    /// # 参数
    /// - lines: 已剔除表头的行
    /// - first_line_number: lines[0] 在源文件中的行号
    pub fn convert_lines(&self, lines: &[String], first_line_number: usize) -> LineOutcome {
        let mut catalog = ArticleCatalog::new();
        let mut malformed_lines = 0;

        for (offset, line) in lines.iter().enumerate() {
            let line_number = first_line_number + offset;

            let Some(parsed) = self.record_parser.parse_line(line, line_number) else {
                malformed_lines += 1;
                continue;
            };

            // 重复行不参与分类
            catalog.insert_with(parsed, |name| self.classifier.classify(name));
        }

        LineOutcome {
            catalog,
            malformed_lines,
        }
    }

    /// 渲染物料列表（不写文件）
    pub fn render(&self, articles: &[Article]) -> String {
        self.emitter.render(articles)
    }
}

impl<C> ArticleImporter for ArticleImporterImpl<C>
where
    C: ImportConfigReader,
{
    #[instrument(skip(self, input, output), fields(run_id))]
    fn convert(&self, input: &Path, output: &Path) -> ImportResult<ConversionReport> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let run_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("run_id", run_id.as_str());

        let input_str = input.display().to_string();
        let output_str = output.display().to_string();
        info!(input = %input_str, output = %output_str, "开始转换物料清单");

        // === 步骤 1: 读取源文件 ===
        debug!("步骤 1: 读取源文件");
        let lines = self.line_reader.read_lines(input)?;
        let (lines, header_skipped) = strip_header(lines, self.config.header_marker());
        info!(total_lines = lines.len(), header_skipped, "源文件读取完成");

        // === 步骤 2-3: 解析、去重、分类 ===
        debug!("步骤 2: 解析、去重、分类");
        let first_line_number = if header_skipped { 2 } else { 1 };
        let LineOutcome {
            catalog,
            malformed_lines,
        } = self.convert_lines(&lines, first_line_number);

        let category_counts = catalog.category_counts();
        info!(
            accepted = catalog.len(),
            malformed = malformed_lines,
            duplicates = catalog.duplicates().len(),
            "解析与去重完成"
        );
        for (category, count) in &category_counts {
            debug!(category = %category, count = *count, "类别统计");
        }

        // === 步骤 4: 生成并写出 ===
        debug!("步骤 3: 生成 TypeScript 数据模块");
        let (articles, duplicate_lines) = catalog.into_parts();
        let content = self.emitter.render(&articles);
        self.emitter.write(output, &content)?;

        let elapsed = start_time.elapsed();
        info!(
            emitted = articles.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "物料清单转换完成"
        );

        Ok(ConversionReport {
            run_id,
            input_path: input_str,
            output_path: output_str,
            total_lines: lines.len(),
            header_skipped,
            malformed_lines,
            duplicate_lines,
            emitted: articles.len(),
            category_counts,
            started_at,
            completed_at: Utc::now(),
            elapsed,
        })
    }
}
