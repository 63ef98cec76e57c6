//! Recommendation engine
//!
//! 预算分配算法：
//! 1. deal value = compare_at_price − price (无划线价时为 0)
//! 2. 按 deal desc、price asc、id asc 排序 (稳定全序)
//! 3. 按分类名划入四个桶
//! 4. 每桶日目标 target = monthly_budget × weight / budget_days
//! 5. 贪心：`s + price ≤ target + tolerance` 时收录；`s ≥ target`
//!    时停止扫描该桶 (未收录的商品不会终止扫描)
//! 6. 未选中的商品按排序顺序截取为 alternatives

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{HouseholdProfile, ProductWithCategory};

use super::Bucket;
use crate::cart_money::{to_decimal, to_f64};

/// Allocator constants, injected at engine construction.
///
/// Immutable after construction, so tests can run the engine with varied
/// configurations deterministically.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Budget share per bucket; shares sum to 1.0
    pub essentials_weight: f64,
    pub cleaners_weight: f64,
    pub produce_weight: f64,
    pub other_weight: f64,
    /// Fixed per-bucket overage tolerance (currency units)
    pub overage_tolerance: f64,
    /// Days the monthly budget is spread over
    pub budget_days: u32,
    /// Cap on the alternatives list
    pub max_alternatives: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            essentials_weight: 0.50,
            cleaners_weight: 0.20,
            produce_weight: 0.15,
            other_weight: 0.15,
            overage_tolerance: 10.0,
            budget_days: 30,
            max_alternatives: 60,
        }
    }
}

impl RecommendConfig {
    /// Budget weight for a bucket
    pub fn weight(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Essentials => self.essentials_weight,
            Bucket::Cleaners => self.cleaners_weight,
            Bucket::Produce => self.produce_weight,
            Bucket::Other => self.other_weight,
        }
    }
}

/// Engine output
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    /// Products admitted into the spending plan, in allocation order
    pub recommended: Vec<ProductWithCategory>,
    /// Unselected products in sort order, truncated to the configured cap
    pub alternatives: Vec<ProductWithCategory>,
    /// Sum of the admitted products' deal values, 2 decimal places
    pub estimated_savings: f64,
}

/// Sortable catalog entry with precomputed Decimal money fields
struct Entry {
    product: ProductWithCategory,
    deal: Decimal,
    price: Decimal,
}

/// Budget-constrained recommendation engine.
///
/// Pure function of (catalog, profile): no side effects, no error
/// conditions, safe to call concurrently and repeatedly.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Produce a spending plan for one household.
    ///
    /// An empty catalog yields empty outputs and zero savings.
    pub fn recommend(
        &self,
        catalog: Vec<ProductWithCategory>,
        profile: &HouseholdProfile,
    ) -> Recommendations {
        let mut entries: Vec<Entry> = catalog
            .into_iter()
            .map(|product| {
                let price = to_decimal(product.price);
                let reference = product.compare_at_price.map(to_decimal).unwrap_or(price);
                Entry {
                    deal: reference - price,
                    price,
                    product,
                }
            })
            .collect();

        // Deal desc, price asc, product id asc: a deterministic total order
        entries.sort_by(|a, b| {
            b.deal
                .cmp(&a.deal)
                .then(a.price.cmp(&b.price))
                .then(a.product.id.cmp(&b.product.id))
        });

        // Partition indices into buckets, keeping the sort order within each
        let mut by_bucket: [Vec<usize>; 4] = Default::default();
        for (idx, entry) in entries.iter().enumerate() {
            let bucket = Bucket::from_category_name(&entry.product.category_name);
            by_bucket[bucket as usize].push(idx);
        }

        let budget = to_decimal(profile.monthly_budget);
        let days = Decimal::from(self.config.budget_days);
        let tolerance = to_decimal(self.config.overage_tolerance);

        let mut selected = vec![false; entries.len()];
        let mut recommended = Vec::new();
        let mut savings = Decimal::ZERO;

        for bucket in Bucket::ALL {
            let target = budget * to_decimal(self.config.weight(bucket)) / days;
            let mut sum = Decimal::ZERO;

            for &idx in &by_bucket[bucket as usize] {
                let entry = &entries[idx];
                if sum + entry.price <= target + tolerance {
                    selected[idx] = true;
                    sum += entry.price;
                    savings += entry.deal.max(Decimal::ZERO);
                    recommended.push(entry.product.clone());
                }
                // An item that does not fit keeps the scan going; only
                // reaching the target ends it.
                if sum >= target {
                    break;
                }
            }
        }

        let alternatives: Vec<ProductWithCategory> = entries
            .iter()
            .enumerate()
            .filter(|(idx, _)| !selected[*idx])
            .map(|(_, entry)| entry.product.clone())
            .take(self.config.max_alternatives)
            .collect();

        Recommendations {
            recommended,
            alternatives,
            estimated_savings: to_f64(savings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(
        id: i64,
        category: &str,
        price: f64,
        compare_at_price: Option<f64>,
    ) -> ProductWithCategory {
        ProductWithCategory {
            id,
            name: format!("product-{id}"),
            category_id: 1,
            category_name: category.to_string(),
            price,
            compare_at_price,
            is_active: true,
            created_at: 0,
        }
    }

    fn profile(monthly_budget: f64) -> HouseholdProfile {
        HouseholdProfile {
            user_id: 1,
            family_size: 2,
            monthly_budget,
            updated_at: 0,
        }
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(RecommendConfig::default())
    }

    fn ids(products: &[ProductWithCategory]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_catalog_yields_empty_outputs() {
        let out = engine().recommend(vec![], &profile(600.0));
        assert!(out.recommended.is_empty());
        assert!(out.alternatives.is_empty());
        assert_eq!(out.estimated_savings, 0.0);
    }

    #[test]
    fn admits_within_target_plus_tolerance_only() {
        // Budget 600: essentials target 10, cleaners target 4.
        // 25 > 10+10 is rejected; 12 <= 4+10 is admitted.
        let catalog = vec![
            product(1, "essentials", 25.0, Some(32.0)),
            product(2, "cleaners", 12.0, Some(16.0)),
        ];
        let out = engine().recommend(catalog, &profile(600.0));
        assert_eq!(ids(&out.recommended), vec![2]);
        assert_eq!(ids(&out.alternatives), vec![1]);
        assert_eq!(out.estimated_savings, 4.0);
    }

    #[test]
    fn rejection_does_not_stop_the_bucket_scan() {
        // The 25-priced item busts the tolerance but the cheaper 18-priced
        // item behind it still fits and gets admitted.
        let catalog = vec![
            product(1, "essentials", 18.0, Some(22.0)),
            product(2, "essentials", 25.0, Some(32.0)),
        ];
        let out = engine().recommend(catalog, &profile(600.0));
        assert_eq!(ids(&out.recommended), vec![1]);
        assert_eq!(out.estimated_savings, 4.0);
    }

    #[test]
    fn reaching_the_target_stops_the_bucket_scan() {
        // After admitting the 18-priced item the running sum passes the
        // target (10), so the 1-priced item is never considered.
        let catalog = vec![
            product(1, "essentials", 18.0, Some(22.0)),
            product(2, "essentials", 1.0, Some(3.0)),
        ];
        let out = engine().recommend(catalog, &profile(600.0));
        assert_eq!(ids(&out.recommended), vec![1]);
        assert_eq!(ids(&out.alternatives), vec![2]);
    }

    #[test]
    fn sort_order_is_deal_desc_then_price_asc_then_id_asc() {
        let catalog = vec![
            product(3, "other", 10.0, Some(14.0)), // deal 4
            product(2, "other", 12.0, Some(16.0)), // deal 4, higher price
            product(4, "other", 10.0, Some(14.0)), // deal 4, same price as 3
            product(1, "other", 5.0, Some(12.0)),  // deal 7
        ];
        // Large budget so everything lands in alternatives order... except
        // the greedy pass; use a zero-tolerance, zero-budget-ish profile
        // instead: nothing is admitted, alternatives show the pure order.
        let config = RecommendConfig {
            overage_tolerance: 0.0,
            ..RecommendConfig::default()
        };
        let out = RecommendationEngine::new(config).recommend(catalog, &profile(0.3));
        assert!(out.recommended.is_empty());
        assert_eq!(ids(&out.alternatives), vec![1, 3, 4, 2]);
    }

    #[test]
    fn ordering_is_stable_across_runs() {
        let catalog = vec![
            product(5, "produce", 20.0, Some(25.0)),
            product(3, "essentials", 18.0, Some(22.0)),
            product(8, "cleaners", 12.0, Some(16.0)),
            product(1, "other", 10.0, Some(14.0)),
            product(2, "other", 10.0, Some(14.0)),
        ];
        let a = engine().recommend(catalog.clone(), &profile(600.0));
        let b = engine().recommend(catalog, &profile(600.0));
        assert_eq!(ids(&a.recommended), ids(&b.recommended));
        assert_eq!(ids(&a.alternatives), ids(&b.alternatives));
        assert_eq!(a.estimated_savings, b.estimated_savings);
    }

    #[test]
    fn bucket_sums_never_exceed_target_plus_tolerance() {
        let catalog: Vec<ProductWithCategory> = (1..=20)
            .map(|id| product(id, "essentials", 6.0, Some(8.0)))
            .chain((21..=30).map(|id| product(id, "cleaners", 3.0, Some(5.0))))
            .collect();
        let eng = engine();
        let out = eng.recommend(catalog, &profile(600.0));

        for bucket in Bucket::ALL {
            let target = 600.0 * eng.config().weight(bucket) / 30.0;
            let sum: f64 = out
                .recommended
                .iter()
                .filter(|p| Bucket::from_category_name(&p.category_name) == bucket)
                .map(|p| p.price)
                .sum();
            assert!(
                sum <= target + eng.config().overage_tolerance + 1e-9,
                "bucket {bucket:?} sum {sum} exceeds target {target} + tolerance"
            );
        }
    }

    #[test]
    fn savings_equal_the_admitted_deals() {
        let catalog = vec![
            product(1, "essentials", 18.0, Some(22.0)),
            product(2, "cleaners", 12.0, Some(16.0)),
            product(3, "produce", 2.0, None), // no deal, still admissible
            product(4, "other", 3.0, Some(5.0)),
        ];
        let out = engine().recommend(catalog, &profile(600.0));

        let expected: f64 = out
            .recommended
            .iter()
            .map(|p| (p.compare_at_price.unwrap_or(p.price) - p.price).max(0.0))
            .sum();
        assert_eq!(out.estimated_savings, expected);
    }

    #[test]
    fn recommended_and_alternatives_are_disjoint_and_cover_the_catalog() {
        let catalog: Vec<ProductWithCategory> = (1..=12)
            .map(|id| {
                let cat = match id % 4 {
                    0 => "essentials",
                    1 => "cleaners",
                    2 => "produce",
                    _ => "snacks",
                };
                product(id, cat, id as f64, Some(id as f64 + 2.0))
            })
            .collect();
        let out = engine().recommend(catalog, &profile(600.0));

        let rec = ids(&out.recommended);
        let alt = ids(&out.alternatives);
        assert!(rec.iter().all(|id| !alt.contains(id)));
        let mut union: Vec<i64> = rec.into_iter().chain(alt).collect();
        union.sort_unstable();
        assert_eq!(union, (1..=12).collect::<Vec<i64>>());
    }

    #[test]
    fn alternatives_are_truncated_to_the_cap() {
        // 70 "other" items priced 5: the first is admitted (5 <= 3+10 and
        // 5 >= 3 stops the scan), the remaining 69 truncate to 60.
        let catalog: Vec<ProductWithCategory> = (1..=70)
            .map(|id| product(id, "other", 5.0, Some(6.0)))
            .collect();
        let out = engine().recommend(catalog, &profile(600.0));
        assert_eq!(out.recommended.len(), 1);
        assert_eq!(out.alternatives.len(), 60);
    }

    #[test]
    fn unknown_and_case_variant_categories_share_buckets() {
        let catalog = vec![
            product(1, "ESSENTIALS", 18.0, Some(22.0)),
            product(2, "Snacks", 3.0, Some(5.0)),
        ];
        let out = engine().recommend(catalog, &profile(600.0));
        // Both admitted: 18 into essentials, 3 into the other bucket
        assert_eq!(ids(&out.recommended), vec![1, 2]);
        assert_eq!(out.estimated_savings, 6.0);
    }

    #[test]
    fn injected_config_changes_admission() {
        let catalog = vec![product(1, "essentials", 18.0, Some(22.0))];
        let config = RecommendConfig {
            overage_tolerance: 0.0,
            ..RecommendConfig::default()
        };
        let out = RecommendationEngine::new(config).recommend(catalog, &profile(600.0));
        // Without the tolerance, 18 > 10 is rejected
        assert!(out.recommended.is_empty());
        assert_eq!(out.estimated_savings, 0.0);
        assert_eq!(out.alternatives.len(), 1);
    }
}
