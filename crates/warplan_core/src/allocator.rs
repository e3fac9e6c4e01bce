//! Allocation policies and their cost model.
//!
//! The allocator assigns a budget of companies to products by walking the
//! catalog's priority orders and "paying" for each accepted product and its
//! raw materials out of the remaining budget. Two cost semantics exist and
//! are never mixed silently:
//!
//! - **Marginal** ([`marginal_cost`]): one company for the product plus the
//!   required quantity of each material the plan does not stock yet. The
//!   check is presence, not sufficiency: a single stocked unit of a
//!   material covers any later demand for it.
//! - **Full** ([`full_cost`]): one company for the product plus every
//!   material quantity, charged unconditionally on every step.
//!
//! The damage policy uses marginal costing for its food/ammo/boost phases
//! and full costing for the money phase; the eco policy uses full costing
//! throughout. With a validated catalog every money step therefore costs
//! exactly two companies.

use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::ParsePolicyError;
use crate::plan::Plan;

/// Allocation strategy selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Priority-ordered: one food, one ammo, one boost, remainder to money.
    Damage,
    /// Whole budget round-robin across money products.
    Eco,
}

impl FromStr for Policy {
    type Err = ParsePolicyError;

    /// Parse a mode string, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim();
        if mode.eq_ignore_ascii_case("damage") {
            Ok(Self::Damage)
        } else if mode.eq_ignore_ascii_case("eco") {
            Ok(Self::Eco)
        } else {
            Err(ParsePolicyError(mode.to_string()))
        }
    }
}

/// How the damage policy spends its money phase.
///
/// Both strategies appear in the wild; exhaustive makes better use of the
/// budget and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneyStrategy {
    /// Rescan the money list from the top until a full pass affords nothing.
    #[default]
    Exhaustive,
    /// Apply at most one money product, then stop.
    SinglePick,
}

/// Cost of adding one unit of `product`, skipping stocked materials.
#[must_use]
pub fn marginal_cost(plan: &Plan, catalog: &Catalog, product: &str) -> u32 {
    let materials: u32 = catalog
        .inputs(product)
        .iter()
        .filter(|input| plan.count(&input.material) == 0)
        .map(|input| input.quantity)
        .sum();
    1 + materials
}

/// Cost of adding one unit of `product`, charging all materials.
#[must_use]
pub fn full_cost(catalog: &Catalog, product: &str) -> u32 {
    let materials: u32 = catalog.inputs(product).iter().map(|input| input.quantity).sum();
    1 + materials
}

/// Add one unit of `product`, stocking only its missing materials.
fn apply_marginal(plan: &mut Plan, catalog: &Catalog, product: &str) {
    plan.add(product, 1);
    for input in catalog.inputs(product) {
        if plan.count(&input.material) == 0 {
            plan.add(&input.material, input.quantity);
        }
    }
}

/// Add one unit of `product` and one full set of its materials.
fn apply_full(plan: &mut Plan, catalog: &Catalog, product: &str) {
    plan.add(product, 1);
    for input in catalog.inputs(product) {
        plan.add(&input.material, input.quantity);
    }
}

/// First money product whose full cost fits the remaining budget.
fn first_affordable_money<'a>(catalog: &'a Catalog, remaining: u32) -> Option<(&'a str, u32)> {
    catalog
        .money_priority
        .iter()
        .map(|product| (product.as_str(), full_cost(catalog, product)))
        .find(|(_, cost)| *cost <= remaining)
}

/// Allocate `total_companies` with the damage policy.
///
/// Four phases in fixed order: one food product, one ammo product, the
/// boost product, then repeated money passes until nothing is affordable.
/// A phase whose candidates are all unaffordable contributes nothing and
/// leaves the budget for the phases after it.
#[must_use]
pub fn optimize_damage(catalog: &Catalog, total_companies: u32) -> Plan {
    optimize_damage_with(catalog, total_companies, MoneyStrategy::Exhaustive)
}

/// Allocate `total_companies` with the damage policy and an explicit
/// money-phase strategy.
#[must_use]
pub fn optimize_damage_with(
    catalog: &Catalog,
    total_companies: u32,
    strategy: MoneyStrategy,
) -> Plan {
    let mut plan = Plan::new();
    let mut remaining = total_companies;

    // 1. One food product, highest priority first.
    for food in &catalog.food_priority {
        let cost = marginal_cost(&plan, catalog, food);
        if cost <= remaining {
            apply_marginal(&mut plan, catalog, food);
            remaining -= cost;
            tracing::debug!(product = %food, cost, remaining, "food phase");
            break;
        }
    }

    // 2. One ammo product.
    for ammo in &catalog.ammo_priority {
        let cost = marginal_cost(&plan, catalog, ammo);
        if cost <= remaining {
            apply_marginal(&mut plan, catalog, ammo);
            remaining -= cost;
            tracing::debug!(product = %ammo, cost, remaining, "ammo phase");
            break;
        }
    }

    // 3. The boost product.
    let boost = catalog.boost_product.as_str();
    let cost = marginal_cost(&plan, catalog, boost);
    if cost <= remaining {
        apply_marginal(&mut plan, catalog, boost);
        remaining -= cost;
        tracing::debug!(product = %boost, cost, remaining, "boost phase");
    }

    // 4. Remainder to money products. Each pass restarts at the top of the
    // money list, unlike the eco policy's round-robin.
    match strategy {
        MoneyStrategy::Exhaustive => {
            while let Some((product, cost)) = first_affordable_money(catalog, remaining) {
                apply_full(&mut plan, catalog, product);
                remaining -= cost;
            }
        }
        MoneyStrategy::SinglePick => {
            if let Some((product, cost)) = first_affordable_money(catalog, remaining) {
                apply_full(&mut plan, catalog, product);
                remaining -= cost;
            }
        }
    }
    tracing::debug!(total = plan.total(), unspent = remaining, "damage plan complete");

    plan
}

/// Allocate `total_companies` with the eco policy.
///
/// True round-robin over the money list starting at the first product:
/// apply the current product at full cost, advance one position (wrapping)
/// after each application, stop as soon as the next candidate's cost
/// exceeds the remaining budget.
#[must_use]
pub fn optimize_eco(catalog: &Catalog, total_companies: u32) -> Plan {
    let mut plan = Plan::new();
    let mut remaining = total_companies;

    if catalog.money_priority.is_empty() {
        return plan;
    }

    let mut index = 0;
    loop {
        let product = catalog.money_priority[index].as_str();
        let cost = full_cost(catalog, product);
        if cost > remaining {
            break;
        }
        apply_full(&mut plan, catalog, product);
        remaining -= cost;
        index = (index + 1) % catalog.money_priority.len();
    }
    tracing::debug!(total = plan.total(), unspent = remaining, "eco plan complete");

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::warera()
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("damage".parse::<Policy>().unwrap(), Policy::Damage);
        assert_eq!("eco".parse::<Policy>().unwrap(), Policy::Eco);
        assert_eq!("  ECO  ".parse::<Policy>().unwrap(), Policy::Eco);
        assert_eq!("Damage".parse::<Policy>().unwrap(), Policy::Damage);

        let err = "turtle".parse::<Policy>().unwrap_err();
        assert_eq!(err, ParsePolicyError("turtle".to_string()));
    }

    #[test]
    fn test_marginal_cost_charges_missing_materials() {
        let catalog = catalog();
        let plan = Plan::new();

        assert_eq!(marginal_cost(&plan, &catalog, "Bread"), 2);
        assert_eq!(marginal_cost(&plan, &catalog, "Medium Ammo"), 3);
    }

    #[test]
    fn test_marginal_cost_skips_stocked_materials() {
        let catalog = catalog();
        let mut plan = Plan::new();
        plan.add("Steel", 1);

        // Presence, not sufficiency: one Steel covers the requirement.
        assert_eq!(marginal_cost(&plan, &catalog, "Medium Ammo"), 2);
    }

    #[test]
    fn test_unknown_product_costs_one() {
        let catalog = catalog();
        let plan = Plan::new();

        assert_eq!(marginal_cost(&plan, &catalog, "Plutonium"), 1);
        assert_eq!(full_cost(&catalog, "Plutonium"), 1);
    }

    #[test]
    fn test_full_cost_ignores_plan_state() {
        let catalog = catalog();
        assert_eq!(full_cost(&catalog, "Steel"), 2);
        assert_eq!(full_cost(&catalog, "Medium Ammo"), 3);
    }

    #[test]
    fn test_damage_zero_budget() {
        assert!(optimize_damage(&catalog(), 0).is_empty());
    }

    #[test]
    fn test_damage_one_company_buys_nothing() {
        // Every product costs at least two with an empty plan.
        assert!(optimize_damage(&catalog(), 1).is_empty());
    }

    #[test]
    fn test_damage_two_companies_buys_food_only() {
        let plan = optimize_damage(&catalog(), 2);

        assert_eq!(plan.count("Bread"), 1);
        assert_eq!(plan.count("Grain"), 1);
        assert_eq!(plan.total(), 2);
    }

    #[test]
    fn test_damage_four_companies_adds_top_ammo() {
        let plan = optimize_damage(&catalog(), 4);

        assert_eq!(plan.count("Bread"), 1);
        assert_eq!(plan.count("Grain"), 1);
        assert_eq!(plan.count("Heavy Ammo"), 1);
        assert_eq!(plan.count("Lead"), 1);
        assert_eq!(plan.total(), 4);
    }

    #[test]
    fn test_damage_six_companies_adds_boost() {
        let plan = optimize_damage(&catalog(), 6);

        assert_eq!(plan.count("Bread"), 1);
        assert_eq!(plan.count("Heavy Ammo"), 1);
        assert_eq!(plan.count("Pill"), 1);
        assert_eq!(plan.count("Mysterious Plant"), 1);
        assert_eq!(plan.total(), 6);
    }

    #[test]
    fn test_damage_ten_companies_spends_remainder_on_money() {
        let plan = optimize_damage(&catalog(), 10);

        assert_eq!(plan.count("Bread"), 1);
        assert_eq!(plan.count("Heavy Ammo"), 1);
        assert_eq!(plan.count("Pill"), 1);

        // Four companies left for money. Each pass restarts at the top of
        // the money list, so Steel wins both picks and Concrete gets none.
        assert_eq!(plan.count("Steel"), 2);
        assert_eq!(plan.count("Iron"), 2);
        assert_eq!(plan.count("Concrete"), 0);
        assert_eq!(plan.total(), 10);
    }

    #[test]
    fn test_damage_odd_budget_leaves_remainder_unspent() {
        let plan = optimize_damage(&catalog(), 5);

        assert_eq!(plan.count("Bread"), 1);
        assert_eq!(plan.count("Heavy Ammo"), 1);
        assert_eq!(plan.count("Pill"), 0);
        assert_eq!(plan.total(), 4);
    }

    #[test]
    fn test_damage_single_pick_money_strategy() {
        let plan = optimize_damage_with(&catalog(), 10, MoneyStrategy::SinglePick);

        // One money pick instead of two: the last two companies stay unspent.
        assert_eq!(plan.count("Steel"), 1);
        assert_eq!(plan.count("Iron"), 1);
        assert_eq!(plan.total(), 8);
    }

    #[test]
    fn test_damage_falls_through_to_cheaper_ammo() {
        let catalog = Catalog::new("Pill")
            .with_recipe("Pill", &[("Mysterious Plant", 1)])
            .with_recipe("Shell", &[("Lead", 1), ("Steel", 1), ("Copper", 1)])
            .with_recipe("Light Ammo", &[("Lead", 1)])
            .with_ammo_priority(&["Shell", "Light Ammo"]);

        // Shell costs 4, out of reach; the scan continues down the list.
        let plan = optimize_damage(&catalog, 2);
        assert_eq!(plan.count("Shell"), 0);
        assert_eq!(plan.count("Light Ammo"), 1);
        assert_eq!(plan.count("Lead"), 1);
        assert_eq!(plan.total(), 2);
    }

    #[test]
    fn test_damage_unaffordable_phase_preserves_budget_for_later_phases() {
        let catalog = Catalog::new("Pill")
            .with_recipe("Pill", &[("Mysterious Plant", 1)])
            .with_recipe("Feast", &[("Grain", 1), ("Livestock", 1), ("Fish", 1)])
            .with_food_priority(&["Feast"]);

        // Food (cost 4) and ammo (empty list) contribute nothing; the two
        // companies still reach the boost phase.
        let plan = optimize_damage(&catalog, 2);
        assert_eq!(plan.count("Feast"), 0);
        assert_eq!(plan.count("Pill"), 1);
        assert_eq!(plan.count("Mysterious Plant"), 1);
        assert_eq!(plan.total(), 2);
    }

    #[test]
    fn test_damage_money_phase_with_empty_money_list() {
        let catalog = Catalog::new("Pill").with_recipe("Pill", &[("Mysterious Plant", 1)]);

        let plan = optimize_damage(&catalog, 10);
        assert_eq!(plan.total(), 2);
    }

    #[test]
    fn test_eco_zero_budget() {
        assert!(optimize_eco(&catalog(), 0).is_empty());
    }

    #[test]
    fn test_eco_four_companies_buys_one_of_each() {
        let plan = optimize_eco(&catalog(), 4);

        assert_eq!(plan.count("Steel"), 1);
        assert_eq!(plan.count("Iron"), 1);
        assert_eq!(plan.count("Concrete"), 1);
        assert_eq!(plan.count("Limestone"), 1);
        assert_eq!(plan.total(), 4);
    }

    #[test]
    fn test_eco_eight_companies_buys_two_of_each() {
        let plan = optimize_eco(&catalog(), 8);

        assert_eq!(plan.count("Steel"), 2);
        assert_eq!(plan.count("Iron"), 2);
        assert_eq!(plan.count("Concrete"), 2);
        assert_eq!(plan.count("Limestone"), 2);
        assert_eq!(plan.total(), 8);
    }

    #[test]
    fn test_eco_round_robin_alternates_strictly() {
        // Ten companies: Steel, Concrete, Steel, Concrete, Steel.
        let plan = optimize_eco(&catalog(), 10);

        assert_eq!(plan.count("Steel"), 3);
        assert_eq!(plan.count("Iron"), 3);
        assert_eq!(plan.count("Concrete"), 2);
        assert_eq!(plan.count("Limestone"), 2);
        assert_eq!(plan.total(), 10);
    }

    #[test]
    fn test_eco_odd_budget_leaves_one_unspent() {
        let plan = optimize_eco(&catalog(), 3);

        assert_eq!(plan.count("Steel"), 1);
        assert_eq!(plan.count("Iron"), 1);
        assert_eq!(plan.total(), 2);
    }

    #[test]
    fn test_eco_charges_materials_every_time() {
        // Unlike marginal costing, round two still pays for Iron.
        let plan = optimize_eco(&catalog(), 6);

        assert_eq!(plan.count("Steel"), 2);
        assert_eq!(plan.count("Iron"), 2);
        assert_eq!(plan.count("Concrete"), 1);
        assert_eq!(plan.count("Limestone"), 1);
    }

    #[test]
    fn test_eco_empty_money_list() {
        let catalog = Catalog::new("Pill").with_recipe("Pill", &[("Mysterious Plant", 1)]);
        assert!(optimize_eco(&catalog, 10).is_empty());
    }

    #[test]
    fn test_plans_are_deterministic() {
        let catalog = catalog();
        for budget in [0, 1, 7, 42, 1000] {
            assert_eq!(
                optimize_damage(&catalog, budget),
                optimize_damage(&catalog, budget)
            );
            assert_eq!(optimize_eco(&catalog, budget), optimize_eco(&catalog, budget));
        }
    }
}
