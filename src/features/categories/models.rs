use serde::{Deserialize, Serialize};

/// カテゴリ未指定時に割り当てる既定カテゴリ
pub const DEFAULT_CATEGORY: &str = "その他";

/// カテゴリ一覧（設定時に確定する閉じた集合）
///
/// レコードに付与できるカテゴリだけを保持する。一覧表示の「すべて」は
/// カテゴリではなく絞り込み条件のため、CategoryFilterとして別の型で扱う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// カテゴリ一覧を作成する
    ///
    /// # 引数
    /// * `names` - カテゴリ名の一覧（集計時の列挙順）
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// 指定した名前がカテゴリとして定義されているかを返す
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// カテゴリ名を定義順に返す
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// カテゴリ数を返す
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// カテゴリが1件もないかどうかを返す
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategorySet {
    /// 既定のカテゴリ一覧
    fn default() -> Self {
        Self::new(vec![
            "エンターテイメント".to_string(),
            "ソフトウェア".to_string(),
            "音楽".to_string(),
            "動画配信".to_string(),
            DEFAULT_CATEGORY.to_string(),
        ])
    }
}

/// 一覧表示のカテゴリ絞り込み条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// 全件
    All,
    /// 指定カテゴリのみ
    Category(String),
}

impl CategoryFilter {
    /// レコードのカテゴリが条件に一致するかを返す
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_set() {
        let categories = CategorySet::default();

        // 既定の5カテゴリが定義順で並ぶことを確認
        assert_eq!(categories.len(), 5);
        let names: Vec<&str> = categories.iter().collect();
        assert_eq!(
            names,
            vec!["エンターテイメント", "ソフトウェア", "音楽", "動画配信", "その他"]
        );
    }

    #[test]
    fn test_contains() {
        let categories = CategorySet::default();

        assert!(categories.contains("動画配信"));
        assert!(categories.contains("その他"));

        // 絞り込み用の値はカテゴリではない
        assert!(!categories.contains("すべて"));
        assert!(!categories.contains("all"));
    }

    #[test]
    fn test_category_filter_matches() {
        let all = CategoryFilter::All;
        assert!(all.matches("動画配信"));
        assert!(all.matches("音楽"));

        let filter = CategoryFilter::Category("音楽".to_string());
        assert!(filter.matches("音楽"));
        assert!(!filter.matches("動画配信"));
    }

    #[test]
    fn test_category_set_serialization() {
        let categories = CategorySet::new(vec!["音楽".to_string(), "その他".to_string()]);

        let json = serde_json::to_string(&categories).unwrap();
        let deserialized: CategorySet = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 2);
        assert!(deserialized.contains("音楽"));
    }
}
