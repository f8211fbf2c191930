// ==========================================
// ArticleImporter 集成测试
// ==========================================
// 测试目标: 验证从源文本到 TypeScript 数据模块的完整转换流程
// ==========================================


use gas_article_converter::importer::{
    ArticleImporter, ArticleImporterImpl, ImportError, KeywordClassifier, LineParser,
    TextLineReader, TypeScriptEmitter,
};
use gas_article_converter::{logging, Category, ConvertConfig};
use std::collections::HashSet;
use std::fs;
use test_helpers::{count_objects, create_input_file, emitted_ids, fixture_path};

/// 创建测试用的 ArticleImporter 实例
fn create_test_importer() -> ArticleImporterImpl<ConvertConfig> {
    ArticleImporterImpl::new(
        ConvertConfig::default(),
        Box::new(TextLineReader),
        Box::new(LineParser::new()),
        Box::new(KeywordClassifier::new()),
        Box::new(TypeScriptEmitter::default()),
    )
}

#[test]
fn test_convert_fixture() {
    logging::init_test();

    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = out_dir.path().join("src").join("data").join("articles.ts");

    let importer = create_test_importer();
    let result = importer.convert(&fixture_path(), &output);
    assert!(result.is_ok(), "Conversion should succeed: {:?}", result.err());

    let report = result.unwrap();
    assert!(report.header_skipped);
    assert_eq!(report.total_lines, 10, "Should have 10 data lines");
    assert_eq!(report.malformed_lines, 2);
    assert_eq!(report.duplicate_lines, vec![(4, "201105".to_string())]);
    assert_eq!(report.emitted, 7);
    assert_eq!(report.status_line(), "Processed 7 articles.");

    let content = fs::read_to_string(&output).expect("Output should exist");

    // 写出数量与报告一致
    assert_eq!(count_objects(&content), report.emitted);

    // 首次出现顺序
    assert_eq!(
        emitted_ids(&content),
        vec!["200616", "201105", "210020", "210030", "220040", "230050", "240060"]
    );

    // 表头不作为记录出现
    assert!(!content.contains("ArtikelCode"));

    // 类别统计
    assert_eq!(report.category_counts.get(&Category::Gas), Some(&2));
    assert_eq!(report.category_counts.get(&Category::Stikstof), Some(&1));
    assert_eq!(report.category_counts.get(&Category::Co2), Some(&1));
    assert_eq!(report.category_counts.values().sum::<usize>(), report.emitted);
}

#[test]
fn test_convert_space_delimited_fallback() {
    let (dir, input) = create_input_file("B002 Argon mengsel 20L\n").unwrap();
    let output = dir.path().join("articles.ts");

    let report = create_test_importer().convert(&input, &output).unwrap();
    assert!(!report.header_skipped);
    assert_eq!(report.emitted, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains(
        "  {\n    \"id\": \"B002\",\n    \"name\": \"Argon mengsel 20L\",\n    \"category\": \"Argon\"\n  },\n"
    ));
}

#[test]
fn test_convert_duplicate_keeps_first_classification() {
    let (dir, input) = create_input_file("A001\tStikstofgas\nA001\tZuurstofgas\n").unwrap();
    let output = dir.path().join("articles.ts");

    let report = create_test_importer().convert(&input, &output).unwrap();
    assert_eq!(report.emitted, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\"category\": \"Stikstof\""));
    assert!(!content.contains("Zuurstofgas"));
}

#[test]
fn test_convert_ids_pairwise_distinct() {
    let raw = "X1\tHelium\nX2\tArgon\nX1\tPropaan\nX3\tWaterstof\nX2\tLucht\nX4 Formeergas 95/5\n";
    let (dir, input) = create_input_file(raw).unwrap();
    let output = dir.path().join("articles.ts");

    let report = create_test_importer().convert(&input, &output).unwrap();
    let content = fs::read_to_string(&output).unwrap();
    let ids = emitted_ids(&content);

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(ids, vec!["X1", "X2", "X3", "X4"]);
    assert_eq!(report.duplicate_lines.len(), 2);
}

#[test]
fn test_convert_only_header() {
    let (dir, input) = create_input_file("ArtikelCode\tOmschrijving\n").unwrap();
    let output = dir.path().join("articles.ts");

    let report = create_test_importer().convert(&input, &output).unwrap();
    assert!(report.header_skipped);
    assert_eq!(report.emitted, 0);
    assert_eq!(report.status_line(), "Processed 0 articles.");

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.ends_with("export const ARTICLES: Article[] = [\n];\n"));
}

#[test]
fn test_convert_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("articles.ts");

    let result = create_test_importer().convert(&dir.path().join("absent.txt"), &output);
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_convert_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("new_articles_raw.txt");
    fs::write(&input, [0x41u8, 0x09, 0xc3, 0x28, 0x0a]).unwrap();

    let result = create_test_importer().convert(&input, &dir.path().join("articles.ts"));
    assert!(matches!(result, Err(ImportError::Decode { .. })));
}

#[test]
fn test_run_uses_config_paths() {
    let (dir, input) = create_input_file("Q1\tPropaan 11kg\n").unwrap();
    let output = dir.path().join("out").join("gas.ts");

    let config = ConvertConfig {
        input_path: input.display().to_string(),
        output_path: output.display().to_string(),
        constant_name: "GAS_PRODUCTS".to_string(),
        ..ConvertConfig::default()
    };

    let report = ArticleImporterImpl::with_defaults(config).run().unwrap();
    assert_eq!(report.emitted, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("export const GAS_PRODUCTS: Article[] = ["));
    assert!(content.contains("\"category\": \"Propaan\""));
}

#[test]
fn test_convert_classic_mac_line_endings() {
    let (dir, input) =
        create_input_file("ArtikelCode\tOmschrijving\rA001\tStikstof\rB002\tArgon\r").unwrap();
    let output = dir.path().join("articles.ts");

    let report = create_test_importer().convert(&input, &output).unwrap();
    assert!(report.header_skipped);
    assert_eq!(report.total_lines, 2);
    assert_eq!(report.emitted, 2);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(emitted_ids(&content), vec!["A001", "B002"]);
}
