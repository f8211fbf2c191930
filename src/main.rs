// ==========================================
// 气体物料清单转换工具 - 命令行入口
// ==========================================
// 用法: convert-articles（无参数）
// 输入: new_articles_raw.txt → 输出: src/data/articles.ts
// 可选: 工作目录下的 convert_articles.json 覆写默认配置
// 注意: 该文件存在时会改变输入/输出路径;文件无法解析或配置值非法时运行失败
//       未知字段忽略;不存在时使用上述默认路径
// ==========================================

use anyhow::Context;
use gas_article_converter::config::{defaults, ConvertConfig};
use gas_article_converter::{logging, ArticleImporterImpl};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::debug!(
        "{} v{}",
        gas_article_converter::APP_NAME,
        gas_article_converter::VERSION
    );

    let config = ConvertConfig::load_or_default(defaults::CONFIG_FILE)
        .context("加载转换配置失败")?;

    let importer = ArticleImporterImpl::with_defaults(config);
    let report = importer.run().with_context(|| {
        format!(
            "转换失败: {} → {}",
            importer.config().input_path,
            importer.config().output_path
        )
    })?;

    println!("{}", report.status_line());
    Ok(())
}
