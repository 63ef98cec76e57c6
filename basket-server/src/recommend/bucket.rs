//! Recommendation buckets
//!
//! 目录分类名映射到四个固定预算桶。映射是全函数：未识别的分类
//! 一律落入 `Other`，不会因拼写差异产生新桶。

use serde::{Deserialize, Serialize};

/// One of the four fixed budget buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Essentials,
    Cleaners,
    Produce,
    /// Catch-all for any unrecognized category name
    Other,
}

impl Bucket {
    /// Buckets in allocation order
    pub const ALL: [Bucket; 4] = [
        Bucket::Essentials,
        Bucket::Cleaners,
        Bucket::Produce,
        Bucket::Other,
    ];

    /// Map a category name to its bucket; case-insensitive, total
    pub fn from_category_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "essentials" => Bucket::Essentials,
            "cleaners" => Bucket::Cleaners,
            "produce" => Bucket::Produce,
            _ => Bucket::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_canonical_names() {
        assert_eq!(Bucket::from_category_name("essentials"), Bucket::Essentials);
        assert_eq!(Bucket::from_category_name("cleaners"), Bucket::Cleaners);
        assert_eq!(Bucket::from_category_name("produce"), Bucket::Produce);
        assert_eq!(Bucket::from_category_name("other"), Bucket::Other);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(Bucket::from_category_name("Essentials"), Bucket::Essentials);
        assert_eq!(Bucket::from_category_name("CLEANERS"), Bucket::Cleaners);
        assert_eq!(Bucket::from_category_name("ProDuce"), Bucket::Produce);
    }

    #[test]
    fn unknown_names_fall_into_other() {
        assert_eq!(Bucket::from_category_name("snacks"), Bucket::Other);
        assert_eq!(Bucket::from_category_name(""), Bucket::Other);
        // No trimming: near-misses are unknown names, not new buckets
        assert_eq!(Bucket::from_category_name(" essentials"), Bucket::Other);
    }
}
