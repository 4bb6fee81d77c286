//! カタログとフィルタのテスト
//!
//! 同梱データの不変条件とカテゴリ絞り込みの性質を検証

use fontpair_pro::{filter_pairings, Catalog, Category, CategoryFilter, FontPairError};
use std::collections::HashSet;

/// 同梱カタログは20件でIDが1..=20
#[test_log::test]
fn test_builtin_catalog_shape() {
    let catalog = Catalog::builtin().expect("同梱カタログの読み込み失敗");
    assert_eq!(catalog.len(), 20);

    let ids: HashSet<u32> = catalog.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=20).collect::<HashSet<u32>>());
}

/// 見出し・本文のペアは重複しない
#[test]
fn test_builtin_pairs_are_unique() {
    let catalog = Catalog::builtin().unwrap();
    let pairs: HashSet<(&str, &str)> = catalog
        .records()
        .iter()
        .map(|r| (r.heading.as_str(), r.body.as_str()))
        .collect();
    assert_eq!(pairs.len(), catalog.len());
}

/// 各フィールドの形式
#[test]
fn test_builtin_record_fields() {
    let catalog = Catalog::builtin().unwrap();
    for record in catalog.records() {
        assert!(!record.heading.is_empty());
        assert_eq!(record.heading.trim(), record.heading);
        assert!(!record.body.is_empty());
        assert_eq!(record.body.trim(), record.body);
        assert!(!record.tag.is_empty());
        assert!(record.desc.chars().count() > 10, "説明が短い: {}", record.id);
    }
}

/// Allは全件を元の順序で返す
#[test]
fn test_filter_all_returns_full_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let all = catalog.filter(CategoryFilter::All);
    let expected: Vec<_> = catalog.records().iter().collect();
    assert_eq!(all, expected);
}

/// カテゴリ指定は該当レコードのみを相対順序を保って返す
#[test]
fn test_filter_by_category_preserves_order() {
    let catalog = Catalog::builtin().unwrap();
    for filter in catalog.categories() {
        let CategoryFilter::Only(category) = filter else {
            continue;
        };
        let filtered = catalog.filter(filter);
        let expected: Vec<_> = catalog
            .records()
            .iter()
            .filter(|r| r.category == category)
            .collect();
        assert_eq!(filtered, expected, "カテゴリ: {}", category);
        assert!(!filtered.is_empty());
    }
}

/// 絞り込みは冪等
#[test]
fn test_filter_is_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    let filter = CategoryFilter::Only(Category::Classic);
    let once: Vec<_> = catalog.filter(filter).into_iter().cloned().collect();
    let twice: Vec<_> = filter_pairings(&once, filter).into_iter().cloned().collect();
    assert_eq!(once, twice);
}

/// Monospaceは3件
#[test]
fn test_monospace_records() {
    let catalog = Catalog::builtin().unwrap();
    let headings: Vec<&str> = catalog
        .filter(CategoryFilter::Only(Category::Monospace))
        .iter()
        .map(|r| r.heading.as_str())
        .collect();
    assert_eq!(headings, vec!["Space Mono", "JetBrains Mono", "IBM Plex Mono"]);
}

/// カテゴリ一覧はAll先頭で、すべてのレコードのカテゴリを含む
#[test]
fn test_categories_cover_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let categories = catalog.categories();
    assert_eq!(categories.first(), Some(&CategoryFilter::All));
    for record in catalog.records() {
        assert!(categories.contains(&CategoryFilter::Only(record.category)));
    }
}

/// 不正なJSONはエラー
#[test]
fn test_invalid_json_is_error() {
    let result = Catalog::from_json("[{\"id\": 1}]");
    assert!(matches!(result, Err(FontPairError::Json(_))));
}

/// 空のカタログはAllだけを持つ
#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_json("[]").expect("空配列は有効");
    assert!(catalog.is_empty());
    assert_eq!(catalog.categories(), vec![CategoryFilter::All]);
}
