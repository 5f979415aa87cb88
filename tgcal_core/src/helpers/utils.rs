/// Splits `items` into consecutive rows of `size`. The last row may be shorter.
/// A zero `size` yields no rows.
pub fn slice_list<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }

    items.chunks(size).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_list() {
        let items: Vec<u32> = (1..=10).collect();
        let rows = slice_list(&items, 7);
        assert_eq!(rows, vec![vec![1, 2, 3, 4, 5, 6, 7], vec![8, 9, 10]]);

        let rows = slice_list(&items, 5);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_slice_list_edge_sizes() {
        let items = vec!["a", "b"];
        assert!(slice_list(&items, 0).is_empty());
        assert!(slice_list::<u8>(&[], 3).is_empty());
        assert_eq!(slice_list(&items, 10), vec![vec!["a", "b"]]);
    }
}
