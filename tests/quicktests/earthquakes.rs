use naive_bst::analysis;
use naive_bst::earthquake::Earthquake;
use quickcheck_macros::quickcheck;

/// Magnitudes from 0.0 to 10.0 in tenths, like a real catalog.
fn quakes_from(magnitudes: &[u8]) -> Vec<Earthquake> {
    magnitudes
        .iter()
        .enumerate()
        .map(|(i, m)| {
            Earthquake::new(format!("quake #{}", i), f64::from(m % 101) / 10.0, 2000).unwrap()
        })
        .collect()
}

#[quickcheck]
fn sorted_by_magnitude_is_sorted(magnitudes: Vec<u8>) -> bool {
    let tree = analysis::build_tree(quakes_from(&magnitudes));
    let sorted = analysis::sorted_by_magnitude(&tree);

    sorted.len() == tree.size()
        && sorted
            .windows(2)
            .all(|pair| pair[0].magnitude() < pair[1].magnitude())
}

#[quickcheck]
fn largest_is_the_strongest(magnitudes: Vec<u8>) -> bool {
    let quakes = quakes_from(&magnitudes);
    let strongest = quakes.iter().map(Earthquake::magnitude).fold(None, |max: Option<f64>, m| {
        Some(max.map_or(m, |max| max.max(m)))
    });
    let tree = analysis::build_tree(quakes);

    analysis::find_largest_magnitude(&tree).map(Earthquake::magnitude) == strongest
}
