use ifn_algebra::{
    capacity_to_ideal_flow, capacity_to_stochastic, entropy_ratio, equivalent_ifn, gen_complete,
    gen_cycle_with_chords, is_ideal_flow, is_irreducible, is_premagic, row_sums, total_flow,
};
use ifn_core::rng::RngHandle;
use proptest::prelude::*;

proptest! {
    #[test]
    fn generated_networks_are_strongly_connected(
        seed in any::<u64>(),
        nodes in 2usize..12,
        chords in 0usize..20,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let capacity = gen_cycle_with_chords(nodes, chords, 9, &mut rng).unwrap();
        prop_assert!(is_irreducible(&capacity));
    }

    #[test]
    fn complete_networks_are_strongly_connected(
        seed in any::<u64>(),
        nodes in 2usize..10,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let capacity = gen_complete(nodes, 9, &mut rng).unwrap();
        prop_assert!(is_irreducible(&capacity));
    }

    #[test]
    fn pipeline_conserves_flow_on_random_networks(
        seed in any::<u64>(),
        nodes in 2usize..12,
        chords in 0usize..16,
        kappa in 1.0f64..100.0,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let capacity = gen_cycle_with_chords(nodes, chords, 9, &mut rng).unwrap();
        let stochastic = capacity_to_stochastic(&capacity).unwrap();
        for total in row_sums(&stochastic).iter() {
            prop_assert!((total - 1.0).abs() < 1e-12);
        }
        let flow = capacity_to_ideal_flow(&capacity, kappa).unwrap();
        prop_assert!(is_premagic(&flow));
        prop_assert!(is_ideal_flow(&flow));
        prop_assert!((total_flow(&flow) - kappa).abs() < 1e-8 * kappa);

        let doubled = equivalent_ifn(&flow, 2.0);
        prop_assert!(is_premagic(&doubled));
        prop_assert!((total_flow(&doubled) - 2.0 * kappa).abs() < 2e-8 * kappa);
    }

    #[test]
    fn entropy_ratio_stays_in_unit_interval(
        seed in any::<u64>(),
        nodes in 2usize..12,
        chords in 0usize..16,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let capacity = gen_cycle_with_chords(nodes, chords, 9, &mut rng).unwrap();
        let stochastic = capacity_to_stochastic(&capacity).unwrap();
        let ratio = entropy_ratio(&stochastic).unwrap();
        prop_assert!(ratio > 0.0);
        prop_assert!(ratio <= 1.0 + 1e-12);
    }

    #[test]
    fn forked_streams_reproduce_networks(
        seed in any::<u64>(),
        nodes in 2usize..10,
    ) {
        let parent = RngHandle::from_seed(seed);
        let mut first = parent.fork(1);
        let mut second = parent.fork(1);
        let net_a = gen_cycle_with_chords(nodes, 4, 5, &mut first).unwrap();
        let net_b = gen_cycle_with_chords(nodes, 4, 5, &mut second).unwrap();
        prop_assert_eq!(net_a, net_b);
    }
}
