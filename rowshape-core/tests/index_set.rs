#[cfg(test)]
mod tests {
    use rowshape_core::{IndexSet, SequenceError, index_at};

    const PRIMES: IndexSet = IndexSet::from_static(&[2, 3, 5, 7]);
    const THIRD_PRIME: usize = index_at(&[2, 3, 5, 7], 2);

    #[test]
    fn identity() {
        assert_eq!(IndexSet::identity(0), IndexSet::empty());
        assert_eq!(IndexSet::identity(1).as_slice(), &[0]);
        assert_eq!(IndexSet::identity(4).as_slice(), &[0, 1, 2, 3]);
        assert!(IndexSet::identity(4).is_strictly_increasing());
        assert_eq!(IndexSet::identity(3), IndexSet::from_static(&[0, 1, 2]));
    }

    #[test]
    fn concat_keeps_argument_order() {
        let a = IndexSet::from(vec![0, 4]);
        let b = IndexSet::singleton(2);
        let c = IndexSet::empty();
        assert_eq!(IndexSet::concat([&a, &b, &c]).as_slice(), &[0, 4, 2]);
        assert_eq!(IndexSet::concat([&c, &b, &a]).as_slice(), &[2, 0, 4]);
        assert_eq!(IndexSet::concat([&c, &c]), IndexSet::empty());
        assert_eq!(IndexSet::concat(Vec::<&IndexSet>::new()), IndexSet::empty());

        let overlapping = IndexSet::concat([&a, &a]);
        assert_eq!(overlapping.as_slice(), &[0, 4, 0, 4]);
        assert!(!overlapping.is_strictly_increasing());
    }

    #[test]
    fn value_at() {
        assert_eq!(PRIMES.value_at(0), 2);
        assert_eq!(PRIMES.value_at(3), 7);
        assert_eq!(PRIMES.len(), 4);
        assert_eq!(THIRD_PRIME, 5);
        assert_eq!(PRIMES.get(4), None);
        assert_eq!(PRIMES.try_value_at(1).unwrap(), 3);
        let error = PRIMES.try_value_at(4).unwrap_err();
        assert_eq!(
            error.downcast_ref::<SequenceError>(),
            Some(&SequenceError::IndexOutOfRange {
                position: 4,
                len: 4
            })
        );
    }

    #[test]
    #[should_panic(expected = "Index out of range: position 4 in a set of length 4")]
    fn value_at_out_of_range() {
        PRIMES.value_at(4);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn value_at_on_empty() {
        IndexSet::empty().value_at(0);
    }

    #[test]
    fn display() {
        assert_eq!(IndexSet::empty().to_string(), "[]");
        assert_eq!(IndexSet::singleton(3).to_string(), "[3]");
        assert_eq!(PRIMES.to_string(), "[2, 3, 5, 7]");
        assert_eq!(
            PRIMES.iter().filter(|v| v % 2 == 1).collect::<IndexSet>(),
            IndexSet::from_static(&[3, 5, 7])
        );
        assert_eq!((&PRIMES).into_iter().sum::<usize>(), 17);
    }
}
