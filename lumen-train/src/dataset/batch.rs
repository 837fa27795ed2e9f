//! Leading batch dimension for sample fields

use std::ops::Index;

/// A non-empty sequence of values sharing a leading batch axis.
///
/// Single samples carry batches of size 1 so that renderer-side code can treat
/// one sample and a collated batch the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    items: Vec<T>,
}

impl<T> Batch<T> {
    /// A batch of size 1.
    pub fn single(item: T) -> Self {
        Self { items: vec![item] }
    }

    /// Build a batch from a vector. Returns `None` for an empty vector.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Concatenate batches along the batch axis.
    pub fn concat(batches: impl IntoIterator<Item = Batch<T>>) -> Option<Self> {
        let items: Vec<T> = batches.into_iter().flat_map(|b| b.items).collect();
        Self::from_vec(items)
    }

    /// Batch size.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn first(&self) -> &T {
        &self.items[0]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Index<usize> for Batch<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Batch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_has_size_one() {
        let batch = Batch::single(7);
        assert_eq!(batch.len(), 1);
        assert_eq!(*batch.first(), 7);
        assert_eq!(batch[0], 7);
    }

    #[test]
    fn test_empty_vec_is_rejected() {
        assert!(Batch::<u8>::from_vec(Vec::new()).is_none());
        assert!(Batch::<u8>::concat(Vec::new()).is_none());
    }

    #[test]
    fn test_concat_preserves_order() {
        let batch = Batch::concat([Batch::single(1), Batch::from_vec(vec![2, 3]).unwrap()]).unwrap();
        assert_eq!(batch.as_slice(), &[1, 2, 3]);
        assert_eq!(batch.iter().sum::<i32>(), 6);
    }
}
