//! The requirement calculator

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CalcError, Result},
    types::{EquipmentRatio, ItemSelection, MenuItem},
};

/// Aggregated requirements for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculations {
    /// Ingredient name -> total quantity (grams, or pieces for piece-based
    /// items)
    pub ingredients: BTreeMap<String, f64>,
    /// Equipment name -> unit count
    pub equipment: BTreeMap<String, f64>,
}

/// Derives ingredient and equipment requirements for a guest count.
///
/// Every ingredient of a selected item is credited the item's full scaled
/// quantity, `base_quantity × guests × variety`. This reproduces the
/// behavior the business runs on; it is a coarse approximation, not a
/// bill-of-materials split across ingredients.
///
/// Equipment needs scale with headcount alone: every ratio entry is
/// batched with `ceil(guests / people_per_batch) × units_per_batch`,
/// regardless of which items were chosen.
///
/// Selected ids that no longer exist in `items` contribute nothing and
/// raise no error; categories can be edited after an order references
/// them. Every call re-derives both totals from scratch; there is no
/// incremental path.
pub fn calculate(
    guest_count: i64,
    items: &[MenuItem],
    selections: &BTreeMap<i64, ItemSelection>,
    ratios: &[EquipmentRatio],
) -> Result<Calculations> {
    if guest_count <= 0 {
        return Err(CalcError::InvalidGuestCount(guest_count));
    }
    if !selections.values().any(|s| s.selected) {
        return Err(CalcError::EmptySelection);
    }

    let mut calc = Calculations::default();

    for (item_id, selection) in selections {
        if !selection.selected {
            continue;
        }
        let Some(item) = items.iter().find(|i| i.id == *item_id) else {
            continue;
        };

        let per_item_total =
            item.base_quantity * guest_count as f64 * f64::from(selection.multiplier());
        for ingredient in &item.ingredients {
            *calc.ingredients.entry(ingredient.clone()).or_insert(0.0) += per_item_total;
        }
    }

    for ratio in ratios {
        // Cannot batch by a non-positive headcount divisor
        if ratio.people_per_batch <= 0 {
            continue;
        }
        // Equivalent to `guest_count.div_ceil(people_per_batch)` for the
        // positive operands guaranteed above; `div_ceil` is not yet stable
        // on this toolchain.
        let batches = guest_count / ratio.people_per_batch
            + i64::from(guest_count % ratio.people_per_batch != 0);
        calc.equipment
            .insert(ratio.name.clone(), batches as f64 * ratio.units_per_batch);
    }

    Ok(calc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    fn item(id: i64, name: &str, ingredients: &[&str], base_quantity: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            base_quantity,
            kind: None,
        }
    }

    fn ratio(name: &str, units_per_batch: f64, people_per_batch: i64) -> EquipmentRatio {
        EquipmentRatio {
            name: name.to_string(),
            units_per_batch,
            people_per_batch,
        }
    }

    fn select(entries: &[(i64, bool, u32)]) -> BTreeMap<i64, ItemSelection> {
        entries
            .iter()
            .map(|(id, selected, variety)| (*id, ItemSelection::new(*selected, *variety)))
            .collect()
    }

    #[test]
    fn every_ingredient_gets_the_full_scaled_quantity() {
        let items = vec![item(1, "methi bhajiya", &["methi", "besan", "oil"], 100.0)];
        let selections = select(&[(1, true, 3)]);

        let calc = calculate(40, &items, &selections, &[]).unwrap();

        // base * guests * variety, identically for all n ingredients
        for ingredient in ["methi", "besan", "oil"] {
            assert_eq!(calc.ingredients[ingredient], 100.0 * 40.0 * 3.0);
        }
        assert_eq!(calc.ingredients.len(), 3);
    }

    #[test]
    fn shared_ingredients_accumulate_across_items() {
        let items = vec![
            item(1, "methi bhajiya", &["methi", "besan", "oil"], 100.0),
            item(2, "kanda bhajiya", &["onion", "besan", "oil"], 120.0),
        ];
        let selections = select(&[(1, true, 1), (2, true, 1)]);

        let calc = calculate(10, &items, &selections, &[]).unwrap();

        assert_eq!(calc.ingredients["methi"], 1000.0);
        assert_eq!(calc.ingredients["onion"], 1200.0);
        assert_eq!(calc.ingredients["besan"], 1000.0 + 1200.0);
        assert_eq!(calc.ingredients["oil"], 1000.0 + 1200.0);
    }

    #[test]
    fn concrete_scenario_from_the_order_flow() {
        // item {base 100, ingredients [A, B]}, 50 guests, variety 2
        let items = vec![item(1, "dish", &["A", "B"], 100.0)];
        let selections = select(&[(1, true, 2)]);

        let calc = calculate(50, &items, &selections, &[]).unwrap();

        assert_eq!(calc.ingredients["A"], 10000.0);
        assert_eq!(calc.ingredients["B"], 10000.0);
    }

    #[test]
    fn equipment_uses_ceiling_batches() {
        let ratios = vec![
            ratio("stove", 1.0, 50),
            ratio("table", 1.0, 8),
            ratio("plate", 1.0, 1),
        ];
        let items = vec![item(1, "dish", &["A"], 1.0)];

        let calc = calculate(120, &items, &select(&[(1, true, 1)]), &ratios).unwrap();
        assert_eq!(calc.equipment["stove"], 3.0); // ceil(120/50)
        assert_eq!(calc.equipment["table"], 15.0); // ceil(120/8)
        assert_eq!(calc.equipment["plate"], 120.0);

        let calc = calculate(50, &items, &select(&[(1, true, 1)]), &ratios).unwrap();
        assert_eq!(calc.equipment["stove"], 1.0);
        assert_eq!(calc.equipment["table"], 7.0); // ceil(50/8)
    }

    #[test]
    fn equipment_ignores_item_selection() {
        let items = vec![
            item(1, "dish a", &["A"], 100.0),
            item(2, "dish b", &["B"], 100.0),
        ];
        let ratios = vec![ratio("kadai", 1.0, 25)];

        let one = calculate(60, &items, &select(&[(1, true, 1)]), &ratios).unwrap();
        let both =
            calculate(60, &items, &select(&[(1, true, 1), (2, true, 1)]), &ratios).unwrap();

        assert_eq!(one.equipment, both.equipment);
    }

    #[test]
    fn units_per_batch_scales_the_batch_count() {
        let items = vec![item(1, "dish", &["A"], 1.0)];
        let ratios = vec![ratio("gas bottle", 2.0, 100)];

        let calc = calculate(150, &items, &select(&[(1, true, 1)]), &ratios).unwrap();
        assert_eq!(calc.equipment["gas bottle"], 4.0); // ceil(150/100) * 2
    }

    #[test]
    fn non_positive_divisor_is_skipped() {
        let items = vec![item(1, "dish", &["A"], 1.0)];
        let ratios = vec![ratio("broken", 1.0, 0), ratio("chair", 1.0, 1)];

        let calc = calculate(10, &items, &select(&[(1, true, 1)]), &ratios).unwrap();
        assert!(!calc.equipment.contains_key("broken"));
        assert_eq!(calc.equipment["chair"], 10.0);
    }

    #[test]
    fn zero_or_negative_guest_count_fails_before_computing() {
        let items = vec![item(1, "dish", &["A"], 100.0)];
        let selections = select(&[(1, true, 1)]);

        assert_eq!(
            calculate(0, &items, &selections, &[]),
            Err(CalcError::InvalidGuestCount(0))
        );
        assert_eq!(
            calculate(-5, &items, &selections, &[]),
            Err(CalcError::InvalidGuestCount(-5))
        );
    }

    #[test]
    fn empty_selection_fails() {
        let items = vec![item(1, "dish", &["A"], 100.0)];

        assert_eq!(
            calculate(50, &items, &BTreeMap::new(), &[]),
            Err(CalcError::EmptySelection)
        );
        // entries present but none actually selected
        assert_eq!(
            calculate(50, &items, &select(&[(1, false, 2)]), &[]),
            Err(CalcError::EmptySelection)
        );
    }

    #[test]
    fn stale_item_ids_contribute_nothing() {
        let items = vec![item(1, "dish", &["A"], 100.0)];
        let selections = select(&[(1, true, 1), (99, true, 4)]);

        let calc = calculate(10, &items, &selections, &[]).unwrap();
        assert_eq!(calc.ingredients["A"], 1000.0);
        assert_eq!(calc.ingredients.len(), 1);
    }

    #[test]
    fn all_selected_ids_stale_still_yields_equipment() {
        let items = vec![item(1, "dish", &["A"], 100.0)];
        let ratios = vec![ratio("table", 1.0, 8)];
        let selections = select(&[(99, true, 1)]);

        let calc = calculate(50, &items, &selections, &ratios).unwrap();
        assert!(calc.ingredients.is_empty());
        assert_eq!(calc.equipment["table"], 7.0);
    }

    #[test]
    fn unselected_items_are_ignored_even_with_a_variety() {
        let items = vec![
            item(1, "dish a", &["A"], 100.0),
            item(2, "dish b", &["B"], 100.0),
        ];
        let selections = select(&[(1, true, 1), (2, false, 5)]);

        let calc = calculate(10, &items, &selections, &[]).unwrap();
        assert!(!calc.ingredients.contains_key("B"));
    }

    #[test]
    fn zero_variety_is_clamped_to_one() {
        let items = vec![item(1, "dish", &["A"], 100.0)];
        let mut selections = BTreeMap::new();
        selections.insert(
            1,
            ItemSelection {
                selected: true,
                variety: 0,
            },
        );

        let calc = calculate(10, &items, &selections, &[]).unwrap();
        assert_eq!(calc.ingredients["A"], 1000.0);
    }

    #[test]
    fn item_kind_does_not_affect_totals() {
        let mut chaat = item(1, "dahi chaat", &["curd", "chana"], 150.0);
        chaat.kind = Some(ItemKind::Chaat);
        let plain = item(1, "dahi chaat", &["curd", "chana"], 150.0);
        let selections = select(&[(1, true, 2)]);

        assert_eq!(
            calculate(20, &[chaat], &selections, &[]),
            calculate(20, &[plain], &selections, &[])
        );
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let items = vec![
            item(1, "methi bhajiya", &["methi", "besan", "oil"], 100.0),
            item(2, "kanda bhajiya", &["onion", "besan", "oil"], 120.0),
        ];
        let ratios = vec![ratio("table", 1.0, 8), ratio("plate", 1.0, 1)];
        let selections = select(&[(1, true, 2), (2, true, 1)]);

        let first = calculate(75, &items, &selections, &ratios).unwrap();
        let second = calculate(75, &items, &selections, &ratios).unwrap();
        assert_eq!(first, second);
    }
}
