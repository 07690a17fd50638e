/// Every combination taking one element from each list, in lexicographic
/// order of the input positions.
///
/// Any empty list makes the product empty.
pub fn cartesian_product<T: Clone>(lists: &[Vec<T>]) -> Vec<Vec<T>> {
    if lists.iter().any(Vec::is_empty) {
        return Vec::new();
    }
    lists.iter().fold(vec![Vec::new()], |acc, list| {
        acc.into_iter()
            .flat_map(|prefix| {
                list.iter().map(move |item| {
                    let mut tuple = prefix.clone();
                    tuple.push(item.clone());
                    tuple
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_in_order() {
        let product = cartesian_product(&[vec![1, 2], vec![3], vec![4, 5]]);
        assert_eq!(
            product,
            vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
        );
    }

    #[test]
    fn empty_position_yields_nothing() {
        assert!(cartesian_product(&[vec![1, 2], Vec::new()]).is_empty());
    }
}
