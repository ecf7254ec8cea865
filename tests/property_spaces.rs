use rust_gymnasium_spaces::{
    BoxSpace, Discrete, Element, MultiBinary, MultiDiscrete, SeedSpec, Space, Tuple,
};
use proptest::prelude::*;

/// A Tuple over Discrete(n) children, one per entry of `ns`.
fn discrete_tuple(ns: &[u32]) -> Tuple {
    Tuple::new(ns.iter().map(|&n| Box::new(Discrete::new(n)) as Box<dyn Space>))
}

fn mixed_tuple(n: u32, bits: usize, nvec: Vec<u32>) -> Tuple {
    Tuple::new([
        Box::new(Discrete::new(n)) as Box<dyn Space>,
        Box::new(MultiBinary::new(bits)),
        Box::new(Tuple::new([
            Box::new(MultiDiscrete::new(nvec)) as Box<dyn Space>,
            Box::new(BoxSpace::new(vec![-1.0, 0.0], vec![1.0, 10.0])),
        ])),
    ])
}

proptest! {
    // Length and indexing mirror the constructor arguments
    #[test]
    fn len_and_index_match_children(ns in proptest::collection::vec(1u32..50, 0..12)) {
        let t = discrete_tuple(&ns);
        prop_assert_eq!(t.len(), ns.len());
        for (i, &n) in ns.iter().enumerate() {
            let expected = Discrete::new(n);
            prop_assert_eq!(t[i].downcast_ref::<Discrete>(), Some(&expected));
        }
    }

    // Samples are always members, and equal seeds give equal streams
    #[test]
    fn tuple_sampling_contains_and_deterministic(
        n in 1u32..100,
        bits in 1usize..16,
        nvec in proptest::collection::vec(1u32..20, 1..5),
        seed in any::<u64>(),
    ) {
        let mut a = mixed_tuple(n, bits, nvec.clone());
        let mut b = mixed_tuple(n, bits, nvec);
        let seeds_a = a.seed(SeedSpec::Int(seed)).unwrap();
        let seeds_b = b.seed(SeedSpec::Int(seed)).unwrap();
        prop_assert_eq!(&seeds_a, &seeds_b);
        prop_assert_eq!(seeds_a.len(), 4);
        for _ in 0..20 {
            let v1 = a.sample();
            let v2 = b.sample();
            prop_assert!(a.contains(&v1));
            prop_assert_eq!(v1, v2);
        }
    }

    // Per-child seed lists behave exactly like seeding each child alone
    #[test]
    fn list_seeding_matches_children(
        ns in proptest::collection::vec(1u32..50, 1..8),
        base in any::<u32>(),
    ) {
        let seeds: Vec<u64> = (0..ns.len() as u64).map(|i| base as u64 + i).collect();
        let mut t = discrete_tuple(&ns);
        prop_assert_eq!(t.seed(SeedSpec::from(seeds.clone())).unwrap(), seeds.clone());

        let mut children: Vec<Discrete> = ns.iter().map(|&n| Discrete::new(n)).collect();
        for (child, &s) in children.iter_mut().zip(&seeds) {
            child.seed(SeedSpec::Int(s)).unwrap();
        }
        for _ in 0..5 {
            let expected = Element::Tuple(children.iter_mut().map(|c| c.sample()).collect());
            prop_assert_eq!(t.sample(), expected);
        }
    }

    // Column-major JSON round-trips, including through JSON text
    #[test]
    fn jsonable_round_trip(
        n in 1u32..100,
        bits in 1usize..8,
        nvec in proptest::collection::vec(1u32..20, 1..4),
        seed in any::<u64>(),
        batch_len in 0usize..10,
    ) {
        let mut t = mixed_tuple(n, bits, nvec);
        t.seed(SeedSpec::Int(seed)).unwrap();
        let batch: Vec<Element> = (0..batch_len).map(|_| t.sample()).collect();

        let data = t.to_jsonable(&batch).unwrap();
        prop_assert_eq!(data.as_array().map(Vec::len), Some(3));
        prop_assert_eq!(&t.from_jsonable(&data).unwrap(), &batch);

        let text = serde_json::to_string(&data).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(t.from_jsonable(&reparsed).unwrap(), batch);
    }

    // Any wrong arity or out-of-range element is rejected
    #[test]
    fn contains_rejects_bad_shapes(ns in proptest::collection::vec(1u32..50, 1..8), k in 0usize..8) {
        let t = discrete_tuple(&ns);
        let good: Vec<Element> = ns.iter().map(|&n| Element::Int(n as i64 - 1)).collect();
        prop_assert!(t.contains(&Element::Tuple(good.clone())));

        let mut longer = good.clone();
        longer.push(Element::Int(0));
        prop_assert!(!t.contains(&Element::Tuple(longer)));
        prop_assert!(!t.contains(&Element::Tuple(good[1..].to_vec())));

        let k = k % ns.len();
        let mut bad = good;
        bad[k] = Element::Int(ns[k] as i64);
        prop_assert!(!t.contains(&Element::Tuple(bad)));
    }
}
