pub mod add;
pub mod edit;
pub mod reorder;

use seimei::{SeimeiError, SeimeiResult};

/// Converts 1-based positions as displayed into store indices.
pub fn to_indices(positions: &[usize], len: usize) -> SeimeiResult<Vec<usize>> {
    positions
        .iter()
        .map(|&pos| {
            if pos == 0 || pos > len {
                Err(SeimeiError::IndexOutOfRange {
                    index: pos.wrapping_sub(1),
                    len,
                })
            } else {
                Ok(pos - 1)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_indices() {
        assert_eq!(to_indices(&[1, 3], 3).unwrap(), vec![0, 2]);
        assert!(matches!(
            to_indices(&[4], 3),
            Err(SeimeiError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            to_indices(&[0], 3),
            Err(SeimeiError::IndexOutOfRange { len: 3, .. })
        ));
        assert!(matches!(
            to_indices(&[1], 0),
            Err(SeimeiError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
