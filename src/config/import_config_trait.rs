// ==========================================
// 气体物料清单转换工具 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入模块所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: 导入模块所需的配置读取接口
// 实现者: ConvertConfig
pub trait ImportConfigReader: Send + Sync {
    /// 源文件路径
    ///
    /// # 默认值
    /// - new_articles_raw.txt
    fn input_path(&self) -> &str;

    /// 生成文件路径
    ///
    /// # 默认值
    /// - src/data/articles.ts
    fn output_path(&self) -> &str;

    /// 表头标记（首行包含该子串时跳过首行,空串表示不跳过）
    ///
    /// # 默认值
    /// - ArtikelCode
    fn header_marker(&self) -> &str;

    /// 生成文件中的接口名
    ///
    /// # 默认值
    /// - Article
    fn interface_name(&self) -> &str;

    /// 生成文件中的常量名
    ///
    /// # 默认值
    /// - ARTICLES
    fn constant_name(&self) -> &str;

    /// 是否对字符串字面量进行转义
    ///
    /// # 默认值
    /// - true
    fn escape_strings(&self) -> bool;
}
