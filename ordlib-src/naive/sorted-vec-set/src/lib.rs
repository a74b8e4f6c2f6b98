pub struct SortedVecSet<T>(Vec<T>);

impl<T: Ord> SortedVecSet<T> {
    pub fn new() -> Self { Self(vec![]) }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn as_slice(&self) -> &[T] { &self.0 }

    pub fn contains(&self, elt: &T) -> bool { self.0.binary_search(elt).is_ok() }

    pub fn insert(&mut self, elt: T) -> bool {
        match self.0.binary_search(&elt) {
            Ok(_) => false,
            Err(i) => {
                self.0.insert(i, elt);
                true
            }
        }
    }

    pub fn remove(&mut self, elt: &T) -> bool {
        match self.0.binary_search(elt) {
            Ok(i) => {
                self.0.remove(i);
                true
            }
            Err(_) => false,
        }
    }
}

impl<T: Ord> Default for SortedVecSet<T> {
    fn default() -> Self { Self::new() }
}

#[test]
fn sanity_check() {
    let mut set = SortedVecSet::new();
    assert!(set.is_empty());

    assert!(set.insert(3));
    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(!set.insert(1));
    assert_eq!(set.as_slice(), [1, 2, 3]);
    assert_eq!(set.len(), 3);

    assert!(set.contains(&2));
    assert!(set.remove(&2));
    assert!(!set.contains(&2));
    assert!(!set.remove(&2));
    assert_eq!(set.as_slice(), [1, 3]);
}
