//! Aggregator service for merging sale records into table rows

use crate::types::{AggregatedProduct, ProductRecord};
use std::collections::HashMap;

/// Aggregator for the merge/sort/filter/total pipeline
pub struct Aggregator;

impl Aggregator {
    /// Merge records by exact product name, summing revenue contributions.
    ///
    /// Name matching is case-sensitive. Output order is first-occurrence
    /// order of each name, so the stable sort that follows keeps
    /// case-variant names ("Foo" / "FOO") in their original relative order.
    pub fn merge(records: &[ProductRecord]) -> Vec<AggregatedProduct> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut merged: Vec<AggregatedProduct> = Vec::new();

        for record in records {
            match index.get(&record.name) {
                Some(&slot) => merged[slot].revenue += record.revenue(),
                None => {
                    index.insert(record.name.clone(), merged.len());
                    merged.push(AggregatedProduct {
                        name: record.name.clone(),
                        revenue: record.revenue(),
                    });
                }
            }
        }

        merged
    }

    /// Sort rows by name, comparing uppercased on both sides.
    ///
    /// Stable: names that compare equal after uppercasing keep their
    /// relative order.
    pub fn sort_by_name(products: &mut [AggregatedProduct]) {
        products.sort_by(|a, b| a.name.to_uppercase().cmp(&b.name.to_uppercase()));
    }

    /// Merge then sort (the full aggregation step of the pipeline)
    pub fn merge_sorted(records: &[ProductRecord]) -> Vec<AggregatedProduct> {
        let mut merged = Self::merge(records);
        Self::sort_by_name(&mut merged);
        merged
    }

    /// Select rows whose lowercased name starts with the lowercased term.
    /// An empty term selects everything.
    pub fn filter_by_prefix<'a>(
        products: &'a [AggregatedProduct],
        term: &str,
    ) -> Vec<&'a AggregatedProduct> {
        let needle = term.to_lowercase();
        products
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Total revenue over a filtered set, recomputed from scratch
    pub fn total_revenue(products: &[&AggregatedProduct]) -> f64 {
        products.iter().map(|p| p.revenue).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, unit_price: f64, sold: f64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            unit_price,
            sold,
        }
    }

    // ========== merge() tests ==========

    #[test]
    fn test_merge_empty() {
        let result = Aggregator::merge(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_merge_single_record() {
        let records = vec![make_record("Apple", 10.0, 2.0)];

        let result = Aggregator::merge(&records);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Apple");
        assert!((result[0].revenue - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_sums_duplicate_names() {
        let records = vec![
            make_record("Apple", 10.0, 2.0),
            make_record("Banana", 3.0, 10.0),
            make_record("Apple", 5.0, 4.0),
        ];

        let result = Aggregator::merge(&records);

        assert_eq!(result.len(), 2);
        let apple = result.iter().find(|p| p.name == "Apple").unwrap();
        assert!((apple.revenue - 40.0).abs() < f64::EPSILON); // 20 + 20
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        let records = vec![
            make_record("Apple", 10.0, 2.0),
            make_record("apple", 5.0, 1.0),
        ];

        let result = Aggregator::merge(&records);

        // "Apple" and "apple" are distinct rows
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Apple");
        assert_eq!(result[1].name, "apple");
    }

    #[test]
    fn test_merge_preserves_first_occurrence_order() {
        let records = vec![
            make_record("Cherry", 1.0, 1.0),
            make_record("Apple", 1.0, 1.0),
            make_record("Cherry", 1.0, 1.0),
            make_record("Banana", 1.0, 1.0),
        ];

        let result = Aggregator::merge(&records);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Cherry", "Apple", "Banana"]);
    }

    #[test]
    fn test_merge_one_entry_per_distinct_name() {
        let records = vec![
            make_record("A", 1.0, 1.0),
            make_record("B", 1.0, 1.0),
            make_record("A", 1.0, 1.0),
            make_record("C", 1.0, 1.0),
            make_record("B", 1.0, 1.0),
        ];

        let result = Aggregator::merge(&records);

        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_merge_revenue_is_order_independent() {
        let forward = vec![
            make_record("Apple", 10.0, 2.0),
            make_record("Banana", 3.0, 10.0),
            make_record("Apple", 5.0, 4.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = Aggregator::merge(&forward);
        let b = Aggregator::merge(&reversed);

        for product in &a {
            let other = b.iter().find(|p| p.name == product.name).unwrap();
            assert!((product.revenue - other.revenue).abs() < 1e-9);
        }
    }

    // ========== sort_by_name() tests ==========

    #[test]
    fn test_sort_case_insensitive_order() {
        let records = vec![
            make_record("banana", 1.0, 1.0),
            make_record("Cherry", 1.0, 1.0),
            make_record("apple", 1.0, 1.0),
        ];

        let result = Aggregator::merge_sorted(&records);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_sort_is_stable_for_case_variants() {
        // "Foo" and "FOO" compare equal uppercased; first occurrence wins
        let records = vec![
            make_record("Foo", 1.0, 1.0),
            make_record("FOO", 2.0, 1.0),
            make_record("Bar", 1.0, 1.0),
        ];

        let result = Aggregator::merge_sorted(&records);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bar", "Foo", "FOO"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = vec![
            make_record("banana", 1.0, 1.0),
            make_record("Apple", 1.0, 1.0),
            make_record("cherry", 1.0, 1.0),
        ];

        let mut once = Aggregator::merge_sorted(&records);
        let twice = {
            let mut v = once.clone();
            Aggregator::sort_by_name(&mut v);
            v
        };
        Aggregator::sort_by_name(&mut once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sorted_output_is_non_decreasing() {
        let records = vec![
            make_record("pear", 1.0, 1.0),
            make_record("Fig", 1.0, 1.0),
            make_record("APRICOT", 1.0, 1.0),
            make_record("date", 1.0, 1.0),
        ];

        let result = Aggregator::merge_sorted(&records);

        for pair in result.windows(2) {
            assert!(pair[0].name.to_uppercase() <= pair[1].name.to_uppercase());
        }
    }

    // ========== filter/total tests ==========

    #[test]
    fn test_filter_empty_term_selects_all() {
        let records = vec![
            make_record("Apple", 1.0, 1.0),
            make_record("Banana", 1.0, 1.0),
        ];
        let products = Aggregator::merge_sorted(&records);

        let filtered = Aggregator::filter_by_prefix(&products, "");

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_is_prefix_not_substring() {
        let records = vec![make_record("Pineapple", 1.0, 1.0)];
        let products = Aggregator::merge_sorted(&records);

        // "apple" occurs inside the name but not as a prefix
        let filtered = Aggregator::filter_by_prefix(&products, "apple");

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_no_match_totals_zero() {
        let records = vec![make_record("Apple", 10.0, 2.0)];
        let products = Aggregator::merge_sorted(&records);

        let filtered = Aggregator::filter_by_prefix(&products, "zzz");

        assert!(filtered.is_empty());
        assert!((Aggregator::total_revenue(&filtered) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_matches_filtered_subset_exactly() {
        let records = vec![
            make_record("Apple", 10.0, 2.0),
            make_record("Avocado", 4.0, 5.0),
            make_record("Banana", 3.0, 10.0),
        ];
        let products = Aggregator::merge_sorted(&records);

        let filtered = Aggregator::filter_by_prefix(&products, "a");
        let total = Aggregator::total_revenue(&filtered);

        let expected: f64 = filtered.iter().map(|p| p.revenue).sum();
        assert!((total - expected).abs() < f64::EPSILON);
        assert!((total - 40.0).abs() < f64::EPSILON); // 20 + 20
    }

    // ========== end-to-end scenario ==========

    #[test]
    fn test_three_source_scenario() {
        // Source 1, 2, 3 concatenated in source order
        let records = vec![
            make_record("Apple", 10.0, 2.0),
            make_record("apple", 5.0, 1.0),
            make_record("Banana", 3.0, 10.0),
        ];

        let products = Aggregator::merge_sorted(&records);

        // Exact-match grouping keeps "Apple" and "apple" separate; sorted
        // case-insensitively both precede "Banana", original order preserved
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "apple", "Banana"]);
        assert!((products[0].revenue - 20.0).abs() < f64::EPSILON);
        assert!((products[1].revenue - 5.0).abs() < f64::EPSILON);
        assert!((products[2].revenue - 30.0).abs() < f64::EPSILON);

        let filtered = Aggregator::filter_by_prefix(&products, "ap");
        assert_eq!(filtered.len(), 2);
        assert!((Aggregator::total_revenue(&filtered) - 25.0).abs() < f64::EPSILON);
    }
}
