/// Binary encoding of which schema symptoms were mentioned.
///
/// One slot per schema symptom, in schema order; a slot is `1` when the
/// symptom was present in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    slots: Vec<u8>,
}

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self {
            slots: vec![0; len],
        }
    }

    /// Mark the symptom at `index` as present. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = 1;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots set to 1.
    pub fn ones(&self) -> usize {
        self.slots.iter().filter(|&&v| v == 1).count()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.slots
    }
}

impl From<Vec<u8>> for FeatureVector {
    fn from(slots: Vec<u8>) -> Self {
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_idempotent() {
        let mut v = FeatureVector::zeros(4);
        v.set(1);
        v.set(1);
        assert_eq!(v.ones(), 1);
        assert_eq!(v.as_slice(), &[0, 1, 0, 0]);
    }

    #[test]
    fn out_of_range_set_is_ignored() {
        let mut v = FeatureVector::zeros(2);
        v.set(5);
        assert_eq!(v.ones(), 0);
        assert_eq!(v.len(), 2);
    }
}
