use super::*;
use crate::model::itemset::Itemset;
use crate::model::sequence::Sequence;

fn arena() -> Vec<Sequence<u32>> {
    vec![
        Sequence::from_nested(0, vec![vec![1, 2], vec![3], vec![4, 5]]),
        Sequence::from_nested(1, vec![vec![1], vec![3], vec![5]]),
    ]
}

#[test]
fn chained_projection_follows_first_instance() {
    let a = arena();
    let db: Vec<_> = (0..a.len()).map(PseudoSequence::new).collect();
    let after_1 = build_projected_database(&a, &db, &[0, 1], ExtensionKey::new(1, false), None);
    assert_eq!(after_1.len(), 2);
    assert_eq!(after_1[0].to_itemsets(&a)[0], Itemset::from([2]));
    assert!(after_1[0].is_postfix(0));
    assert!(!after_1[1].is_postfix(0));

    let last = Itemset::from([1]);
    let after_3 =
        build_projected_database(&a, &after_1, &[0, 1], ExtensionKey::new(3, false), Some(&last));
    let rest: Vec<_> = after_3.iter().map(|v| v.to_itemsets(&a)).collect();
    assert_eq!(
        rest,
        vec![vec![Itemset::from([4, 5])], vec![Itemset::from([5])]]
    );
}

#[test]
fn empty_regions_are_none() {
    let a = arena();
    let between = |from: Cut, to: Cut| PseudoSequence::trim_to_period(&a, 0, Some(from), Some(to));
    assert!(between(Cut::at_itemset(1), Cut::at_itemset(1)).is_none());
    assert!(between(Cut::at_itemset(2), Cut::at_itemset(1)).is_none());
    assert!(PseudoSequence::trim_to_period(&a, 0, Some(Cut::at_itemset(3)), None).is_none());
    let tail = between(Cut::new(0, 1), Cut::new(2, 1)).unwrap();
    assert_eq!(
        tail.to_itemsets(&a),
        vec![Itemset::from([2]), Itemset::from([3]), Itemset::from([4])]
    );
    assert!(tail.is_cut_at_right(&a, 2));
}
