//! Decides whether two completed tables describe the same structure up to a
//! renaming of the elements, by trying every renaming.

use crate::{error::GroupError, isomorphism::Permutation, tables::CompletedTable};
use itertools::Itertools;
use tracing::{debug, trace};

/// Returns true iff some permutation of the elements turns `g` into `h`, see
/// [`find_isomorphism`].
pub fn isomorphic(g: &CompletedTable, h: &CompletedTable) -> Result<bool, GroupError> {
    Ok(find_isomorphism(g, h)?.is_some())
}

/// Searches for a permutation `π` such that relabelling every entry of `g`
/// through `π` and then canonicalising the result gives the canonical form
/// of `h`. Tables that already follow the identity convention are their own
/// canonical form, so for them the relabelled table must equal `h` exactly.
///
/// All `n!` permutations are tried in lexicographic order and the first that
/// works is returned, so this is only practical for small orders.
///
/// ## Errors
/// Returns [`GroupError::OrderMismatch`] if the tables have different orders.
pub fn find_isomorphism(
    g: &CompletedTable,
    h: &CompletedTable,
) -> Result<Option<Permutation>, GroupError> {
    if g.order() != h.order() {
        return Err(GroupError::OrderMismatch {
            left: g.order(),
            right: h.order(),
        });
    }

    let order = g.order();
    let target = h.canonicalize();
    debug!(order, "searching for an isomorphism");
    for (tried, images) in (0..order).permutations(order).enumerate() {
        let permutation = Permutation::new_unchecked(images);
        let relabelled = g.relabel(&permutation)?.canonicalize();
        if relabelled == target {
            debug!(tried = tried + 1, witness = %permutation, "isomorphism found");
            return Ok(Some(permutation));
        }
        trace!(rejected = %permutation);
    }

    debug!(order, "tables are not isomorphic");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn order_four() -> [CompletedTable; 4] {
        [
            completed(&KLEIN_FOUR),
            completed(&CYCLIC_FOUR_A),
            completed(&CYCLIC_FOUR_B),
            completed(&CYCLIC_FOUR_C),
        ]
    }

    #[test]
    fn cyclic_tables_are_isomorphic_to_each_other() {
        let [_, g2, g3, g4] = order_four();
        assert!(isomorphic(&g2, &g3).unwrap());
        assert!(isomorphic(&g2, &g4).unwrap());
        assert!(isomorphic(&g3, &g4).unwrap());
    }

    #[test]
    fn cyclic_tables_are_not_isomorphic_to_klein_four() {
        let [g1, g2, g3, g4] = order_four();
        assert!(!isomorphic(&g2, &g1).unwrap());
        assert!(!isomorphic(&g3, &g1).unwrap());
        assert!(!isomorphic(&g4, &g1).unwrap());
    }

    #[test]
    fn isomorphism_is_reflexive_and_symmetric() {
        let tables = order_four();
        for g in &tables {
            assert!(isomorphic(g, g).unwrap());
            for h in &tables {
                assert_eq!(isomorphic(g, h).unwrap(), isomorphic(h, g).unwrap());
            }
        }
    }

    #[test]
    fn identity_is_the_first_witness_for_equal_tables() {
        let g = completed(&CYCLIC_FOUR_B);
        let witness = find_isomorphism(&g, &g).unwrap().unwrap();
        assert!(witness.is_identity());
    }

    #[test]
    fn witness_relabels_one_table_into_the_other() {
        let g = completed(&CYCLIC_FOUR_A);
        let h = completed(&CYCLIC_FOUR_C);
        let witness = find_isomorphism(&g, &h).unwrap().unwrap();
        assert_eq!(g.relabel(&witness).unwrap().canonicalize(), h);
    }

    #[test]
    fn tables_without_identity_layout_are_compared_by_canonical_form() {
        let g = completed(&[[1, 0], [0, 1]]);
        let h = completed(&[[0, 1], [1, 0]]);
        assert!(isomorphic(&g, &g).unwrap());
        assert!(isomorphic(&g, &h).unwrap());
        assert!(isomorphic(&h, &g).unwrap());
    }

    #[test]
    fn isomorphism_is_symmetric_on_arbitrary_latin_squares() {
        let tables = [
            completed(&[[0, 1, 2], [1, 2, 0], [2, 0, 1]]),
            completed(&[[1, 2, 0], [2, 0, 1], [0, 1, 2]]),
            completed(&[[2, 1, 0], [0, 2, 1], [1, 0, 2]]),
            completed(&[[0, 2, 1], [2, 1, 0], [1, 0, 2]]),
        ];
        for g in &tables {
            assert!(isomorphic(g, g).unwrap());
            for h in &tables {
                assert_eq!(isomorphic(g, h).unwrap(), isomorphic(h, g).unwrap());
            }
        }
    }

    #[test]
    fn rearranged_klein_four_is_not_cyclic() {
        // Klein four with rows listed in reverse order.
        let mut rows = KLEIN_FOUR;
        rows.reverse();
        let g = completed(&rows);
        assert!(!g.has_identity_convention());
        assert!(isomorphic(&g, &completed(&KLEIN_FOUR)).unwrap());
        assert!(!isomorphic(&g, &completed(&CYCLIC_FOUR_B)).unwrap());
        assert!(!isomorphic(&completed(&CYCLIC_FOUR_B), &g).unwrap());
    }

    #[test]
    fn trivial_tables_are_isomorphic() {
        let g = completed(&[[0]]);
        assert!(isomorphic(&g, &g).unwrap());
    }

    #[test]
    fn mismatched_orders_are_an_error() {
        let g = completed(&KLEIN_FOUR);
        let h = completed(&[[0, 1], [1, 0]]);
        assert!(matches!(
            isomorphic(&g, &h),
            Err(GroupError::OrderMismatch { left: 4, right: 2 })
        ));
    }
}
