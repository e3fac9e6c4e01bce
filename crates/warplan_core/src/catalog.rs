//! Recipe catalog and priority configuration.
//!
//! Defines which goods exist, the raw materials each good consumes, and the
//! priority orders the allocation policies walk. A catalog is plain data:
//! construct one in code with the builder methods or deserialize it from
//! RON text.
//!
//! **Note:** This module contains no IO - it only defines data types and
//! parsing. File loading is handled by the front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One raw-material requirement of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeInput {
    /// Name of the required material.
    pub material: String,

    /// Units of the material consumed per unit of product.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Default material quantity for inputs without an explicit one.
const fn default_quantity() -> u32 {
    1
}

/// Recipe catalog plus the priority configuration the policies walk.
///
/// Built once at startup and passed by reference into the allocator
/// functions. All containers are deterministic (`BTreeMap`/`Vec`), so a
/// catalog never introduces iteration-order nondeterminism.
///
/// # Example RON
///
/// ```ron
/// Catalog(
///     recipes: {
///         "Bread": [(material: "Grain", quantity: 1)],
///         "Pill": [(material: "Mysterious Plant", quantity: 1)],
///         "Steel": [(material: "Iron", quantity: 1)],
///         "Concrete": [(material: "Limestone", quantity: 1)],
///     },
///     food_priority: ["Bread"],
///     ammo_priority: [],
///     boost_product: "Pill",
///     money_priority: ["Steel", "Concrete"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Raw-material requirements keyed by product name.
    ///
    /// Products absent from this table require no materials.
    #[serde(default)]
    recipes: BTreeMap<String, Vec<RecipeInput>>,

    /// Food products, highest priority first.
    #[serde(default)]
    pub food_priority: Vec<String>,

    /// Ammo products, highest priority first.
    #[serde(default)]
    pub ammo_priority: Vec<String>,

    /// The single boost product.
    pub boost_product: String,

    /// Money-infrastructure products in cyclic order.
    #[serde(default)]
    pub money_priority: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog with the given boost product.
    #[must_use]
    pub fn new(boost_product: impl Into<String>) -> Self {
        Self {
            recipes: BTreeMap::new(),
            food_priority: Vec::new(),
            ammo_priority: Vec::new(),
            boost_product: boost_product.into(),
            money_priority: Vec::new(),
        }
    }

    /// The built-in WarEra catalog.
    ///
    /// Nine producible goods across four categories. Every good consumes
    /// one unit of a single raw material except Medium Ammo, which consumes
    /// two distinct materials.
    #[must_use]
    pub fn warera() -> Self {
        Self::new("Pill")
            .with_recipe("Light Ammo", &[("Lead", 1)])
            .with_recipe("Medium Ammo", &[("Lead", 1), ("Steel", 1)])
            .with_recipe("Heavy Ammo", &[("Lead", 1)])
            .with_recipe("Bread", &[("Grain", 1)])
            .with_recipe("Steak", &[("Livestock", 1)])
            .with_recipe("Cooked Fish", &[("Fish", 1)])
            .with_recipe("Pill", &[("Mysterious Plant", 1)])
            .with_recipe("Steel", &[("Iron", 1)])
            .with_recipe("Concrete", &[("Limestone", 1)])
            .with_food_priority(&["Bread", "Steak", "Cooked Fish"])
            .with_ammo_priority(&["Heavy Ammo", "Medium Ammo", "Light Ammo"])
            .with_money_priority(&["Steel", "Concrete"])
    }

    /// Register a recipe for `product`.
    #[must_use]
    pub fn with_recipe(mut self, product: impl Into<String>, inputs: &[(&str, u32)]) -> Self {
        let inputs = inputs
            .iter()
            .map(|(material, quantity)| RecipeInput {
                material: (*material).to_string(),
                quantity: *quantity,
            })
            .collect();
        self.recipes.insert(product.into(), inputs);
        self
    }

    /// Set the food priority order, highest priority first.
    #[must_use]
    pub fn with_food_priority(mut self, products: &[&str]) -> Self {
        self.food_priority = products.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the ammo priority order, highest priority first.
    #[must_use]
    pub fn with_ammo_priority(mut self, products: &[&str]) -> Self {
        self.ammo_priority = products.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the money product cycle.
    #[must_use]
    pub fn with_money_priority(mut self, products: &[&str]) -> Self {
        self.money_priority = products.iter().map(ToString::to_string).collect();
        self
    }

    /// Raw-material requirements of `product`.
    ///
    /// Never fails: a product with no recipe yields the empty slice and is
    /// treated as requiring no materials.
    #[must_use]
    pub fn inputs(&self, product: &str) -> &[RecipeInput] {
        self.recipes.get(product).map_or(&[], Vec::as_slice)
    }

    /// Check if `product` has a recipe entry.
    #[must_use]
    pub fn has_recipe(&self, product: &str) -> bool {
        self.recipes.contains_key(product)
    }

    /// Parse a catalog from RON text and validate it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the text is not valid RON or the
    /// catalog fails [`Catalog::validate`].
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let catalog: Self = ron::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate the catalog shape.
    ///
    /// Every priority entry and the boost product must have a recipe, and
    /// every money product must consume exactly one material unit so the
    /// money phases can price it at a fixed two companies per unit.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("food", &self.food_priority),
            ("ammo", &self.ammo_priority),
            ("money", &self.money_priority),
        ];
        for (list, products) in lists {
            for product in products {
                if !self.has_recipe(product) {
                    return Err(CatalogError::UnknownPriorityProduct {
                        list,
                        product: product.clone(),
                    });
                }
            }
        }
        if !self.has_recipe(&self.boost_product) {
            return Err(CatalogError::UnknownPriorityProduct {
                list: "boost",
                product: self.boost_product.clone(),
            });
        }
        for product in &self.money_priority {
            let units: u32 = self.inputs(product).iter().map(|input| input.quantity).sum();
            if units != 1 {
                return Err(CatalogError::MoneyRecipeShape {
                    product: product.clone(),
                    units,
                });
            }
        }
        Ok(())
    }
}
