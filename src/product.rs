//! Identity-keyed entities with custom equality, hashing, and ordering.
//!
//! `Product` equality is decided by `id` alone: two products with the same
//! id are "the same product" even if their name, price, or rating differ.
//! `Hash` follows the same rule, so a `HashSet<Product>` deduplicates by id.
//!
//! Ordering is deliberately a separate concern. The comparators below rank
//! products without consulting `id`, so two distinct products can compare
//! as equal-order. That is why `Product` does not implement `Ord`: handing
//! std collections an order that disagrees with `==` invites subtle bugs,
//! while named comparator functions passed to `sort_by` make the intent
//! explicit at the call site.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable catalog entry. Construct with [`Product::new`]; there are
/// no mutation methods.
#[derive(Debug, Clone)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    rating: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            rating,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Natural catalog order: ascending price, ties broken by descending
    /// rating. Exact comparison, no epsilon. Use with a stable sort
    /// (`slice::sort_by`) so products that compare equal keep their
    /// insertion order.
    pub fn price_then_rating(a: &Product, b: &Product) -> Ordering {
        a.price
            .total_cmp(&b.price)
            .then_with(|| b.rating.total_cmp(&a.rating))
    }

    /// Alternate sort key: lexicographic ascending on `name`, plain
    /// codepoint order (no locale-aware collation).
    pub fn by_name(a: &Product, b: &Product) -> Ordering {
        a.name.cmp(&b.name)
    }
}

// Equality is identity-based: id only.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

// If a == b then hash(a) == hash(b), so hash must also look at id only.
impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - ${:.2} ({} stars)",
            self.id, self.name, self.price, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn hash_of(p: &Product) -> u64 {
        let mut hasher = DefaultHasher::new();
        p.hash(&mut hasher);
        hasher.finish()
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("P001", "Laptop", 999.99, 4.5),
            Product::new("P002", "Keyboard", 79.99, 4.7),
            Product::new("P003", "Mouse", 29.99, 4.3),
        ]
    }

    #[test]
    fn test_equality_ignores_everything_but_id() {
        let a = Product::new("P001", "Laptop", 999.99, 4.5);
        let b = Product::new("P001", "Gaming Laptop", 1099.99, 4.8);
        let c = Product::new("P002", "Laptop", 999.99, 4.5);

        assert_eq!(a, b);
        assert_ne!(a, c);
        // Reflexive and symmetric.
        assert_eq!(a, a);
        assert_eq!(b, a);
    }

    #[test]
    fn test_equal_ids_hash_identically() {
        let a = Product::new("P001", "Laptop", 999.99, 4.5);
        let b = Product::new("P001", "Gaming Laptop", 1099.99, 4.8);

        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_hashset_dedups_by_id() {
        let mut set = HashSet::new();
        assert!(set.insert(Product::new("P001", "Laptop", 999.99, 4.5)));
        assert!(!set.insert(Product::new("P001", "Gaming Laptop", 1099.99, 4.8)));

        assert_eq!(set.len(), 1);
        // The first insert wins; the duplicate is rejected wholesale.
        assert_eq!(set.iter().next().unwrap().name(), "Laptop");
    }

    #[test]
    fn test_price_order_with_rating_tiebreak() {
        let cheap_good = Product::new("A", "a", 10.0, 4.9);
        let cheap_bad = Product::new("B", "b", 10.0, 3.0);
        let pricey = Product::new("C", "c", 99.0, 5.0);

        assert_eq!(
            Product::price_then_rating(&cheap_good, &pricey),
            Ordering::Less
        );
        // Same price: higher rating sorts first.
        assert_eq!(
            Product::price_then_rating(&cheap_good, &cheap_bad),
            Ordering::Less
        );
        assert_eq!(
            Product::price_then_rating(&cheap_bad, &cheap_good),
            Ordering::Greater
        );
    }

    #[test]
    fn test_order_is_transitive() {
        let a = Product::new("A", "a", 5.0, 4.0);
        let b = Product::new("B", "b", 5.0, 3.0);
        let c = Product::new("C", "c", 7.0, 5.0);

        assert_eq!(Product::price_then_rating(&a, &b), Ordering::Less);
        assert_eq!(Product::price_then_rating(&b, &c), Ordering::Less);
        assert_eq!(Product::price_then_rating(&a, &c), Ordering::Less);
    }

    #[test]
    fn test_sorted_catalog_is_well_ordered() {
        let mut items = catalog();
        items.push(Product::new("P004", "Monitor", 199.99, 4.7));
        items.sort_by(Product::price_then_rating);

        for pair in items.windows(2) {
            assert!(pair[0].price() <= pair[1].price());
            if pair[0].price() == pair[1].price() {
                assert!(pair[0].rating() >= pair[1].rating());
            }
        }
    }

    #[test]
    fn test_equal_order_keeps_insertion_order() {
        // Same price and rating, distinct ids: sort_by is stable, so the
        // original sequence survives.
        let mut items = vec![
            Product::new("X", "first", 5.0, 4.0),
            Product::new("Y", "second", 5.0, 4.0),
            Product::new("Z", "third", 5.0, 4.0),
        ];
        items.sort_by(Product::price_then_rating);

        let ids: Vec<&str> = items.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ["X", "Y", "Z"]);
    }

    #[test]
    fn test_order_does_not_imply_equality() {
        let a = Product::new("A", "a", 5.0, 4.0);
        let b = Product::new("B", "b", 5.0, 4.0);

        assert_eq!(Product::price_then_rating(&a, &b), Ordering::Equal);
        assert_ne!(a, b);
    }

    #[test]
    fn test_by_name_sorts_lexicographically() {
        let mut items = catalog();
        items.sort_by(Product::by_name);

        let names: Vec<&str> = items.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["Keyboard", "Laptop", "Mouse"]);
    }

    #[test]
    fn test_end_to_end_catalog_scenario() {
        let entries = [
            Product::new("P001", "Laptop", 999.99, 4.5),
            Product::new("P002", "Keyboard", 79.99, 4.7),
            Product::new("P003", "Mouse", 29.99, 4.3),
            Product::new("P001", "Gaming Laptop", 1099.99, 4.8),
        ];

        let set: HashSet<Product> = entries.iter().cloned().collect();
        assert_eq!(set.len(), 3);

        let mut items: Vec<Product> = set.into_iter().collect();
        items.sort_by(Product::price_then_rating);

        assert_eq!(items[0].name(), "Mouse");
        assert_eq!(items[1].name(), "Keyboard");
        // Whichever P001 survived dedup, it is the most expensive item.
        assert_eq!(items[2].id(), "P001");
    }
}
