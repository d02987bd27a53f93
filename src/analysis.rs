//! Querying a catalog of earthquakes through a [`BinarySearchTree`]. Because quakes are ordered
//! by magnitude, the strongest one is the right-most node and an in-order walk lists them from
//! weakest to strongest without any explicit sort.

use crate::earthquake::Earthquake;
use crate::tree::BinarySearchTree;

/// Inserts every quake into a new tree, in the order given. Quakes sharing a magnitude with one
/// already inserted are dropped.
pub fn build_tree<I>(quakes: I) -> BinarySearchTree<Earthquake>
where
    I: IntoIterator<Item = Earthquake>,
{
    quakes.into_iter().collect()
}

/// The strongest quake in the tree, or `None` if it's empty.
pub fn find_largest_magnitude(tree: &BinarySearchTree<Earthquake>) -> Option<&Earthquake> {
    tree.find_max()
}

/// Every quake in the tree from weakest to strongest.
pub fn sorted_by_magnitude(tree: &BinarySearchTree<Earthquake>) -> Vec<Earthquake> {
    let mut result = Vec::with_capacity(tree.size());
    tree.in_order_traversal(&mut result);
    result
}

/// A handful of well known historical earthquakes, deliberately not in magnitude order.
pub fn sample_catalog() -> Vec<Earthquake> {
    [
        ("San Francisco, USA", 7.9, 1906),
        ("Valdivia, Chile", 9.5, 1960),
        ("Sumatra, Indonesia", 9.1, 2004),
        ("Haiti", 7.0, 2010),
        ("Tohoku, Japan", 9.0, 2011),
        ("Nepal", 7.8, 2015),
        ("Mexico City, Mexico", 8.0, 1985),
        ("Lisbon, Portugal", 8.7, 1755),
    ]
    .into_iter()
    .map(|(location, magnitude, year)| {
        Earthquake::new(location, magnitude, year).expect("sample magnitudes are finite")
    })
    .collect()
}
