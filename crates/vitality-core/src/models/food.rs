// ABOUTME: Food calorie reference catalog used to fill in diet entries
// ABOUTME: Provides food categories, a built-in catalog of common foods, and lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::diet::{DietEntry, MealType};
use crate::errors::{AppError, AppResult};

/// Broad food groups for the calorie reference catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Rice, noodles, bread and other staples
    Staple,
    /// Vegetables
    Vegetable,
    /// Fruit
    Fruit,
    /// Meat, fish and eggs
    Meat,
    /// Milk and milk products
    Dairy,
    /// Drinks
    Beverage,
    /// Snacks and sweets
    Snack,
}

/// Calorie density of a single food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCalorieReference {
    /// Food name, unique within a catalog (case-insensitive)
    pub food_name: String,
    /// Kilocalories per 100 g
    pub calories_per_100g: f64,
    /// Food group
    pub category: FoodCategory,
    /// Short description of the reference item
    pub description: String,
}

/// Lookup table of food calorie densities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalog {
    foods: Vec<FoodCalorieReference>,
}

/// (name, kcal per 100 g, category, description)
const DEFAULT_FOODS: &[(&str, f64, FoodCategory, &str)] = &[
    ("rice", 116.0, FoodCategory::Staple, "Cooked white rice"),
    ("noodles", 109.0, FoodCategory::Staple, "Cooked wheat noodles"),
    ("bread", 265.0, FoodCategory::Staple, "White bread"),
    ("steamed bun", 221.0, FoodCategory::Staple, "Plain steamed bun"),
    ("dumplings", 240.0, FoodCategory::Staple, "Pork dumplings"),
    ("pasta", 131.0, FoodCategory::Staple, "Cooked pasta"),
    ("cabbage", 17.0, FoodCategory::Vegetable, "Fresh napa cabbage"),
    ("tomato", 19.0, FoodCategory::Vegetable, "Fresh tomato"),
    ("cucumber", 15.0, FoodCategory::Vegetable, "Fresh cucumber"),
    ("carrot", 41.0, FoodCategory::Vegetable, "Fresh carrot"),
    ("potato", 76.0, FoodCategory::Vegetable, "Raw potato"),
    ("broccoli", 34.0, FoodCategory::Vegetable, "Fresh broccoli"),
    ("spinach", 23.0, FoodCategory::Vegetable, "Fresh spinach"),
    ("celery", 16.0, FoodCategory::Vegetable, "Fresh celery"),
    ("apple", 54.0, FoodCategory::Fruit, "Fresh apple"),
    ("banana", 89.0, FoodCategory::Fruit, "Fresh banana"),
    ("orange", 47.0, FoodCategory::Fruit, "Fresh orange"),
    ("grapes", 69.0, FoodCategory::Fruit, "Fresh grapes"),
    ("watermelon", 26.0, FoodCategory::Fruit, "Fresh watermelon"),
    ("strawberry", 32.0, FoodCategory::Fruit, "Fresh strawberries"),
    ("peach", 39.0, FoodCategory::Fruit, "Fresh peach"),
    ("pear", 57.0, FoodCategory::Fruit, "Fresh pear"),
    ("pork", 143.0, FoodCategory::Meat, "Lean pork"),
    ("beef", 125.0, FoodCategory::Meat, "Lean beef"),
    ("chicken", 167.0, FoodCategory::Meat, "Skinless chicken breast"),
    ("fish", 104.0, FoodCategory::Meat, "Freshwater fish"),
    ("egg", 144.0, FoodCategory::Meat, "Whole egg"),
    ("shrimp", 87.0, FoodCategory::Meat, "Fresh shrimp"),
    ("lamb", 118.0, FoodCategory::Meat, "Lean lamb"),
    ("milk", 54.0, FoodCategory::Dairy, "Whole milk"),
    ("yogurt", 72.0, FoodCategory::Dairy, "Plain yogurt"),
    ("cheese", 328.0, FoodCategory::Dairy, "Hard cheese"),
    ("low-fat yogurt", 43.0, FoodCategory::Dairy, "Low-fat yogurt"),
    ("skim milk", 34.0, FoodCategory::Dairy, "Skimmed milk"),
    ("cola", 43.0, FoodCategory::Beverage, "Carbonated soft drink"),
    ("juice", 45.0, FoodCategory::Beverage, "Mixed fruit juice"),
    ("beer", 32.0, FoodCategory::Beverage, "Regular beer"),
    ("water", 0.0, FoodCategory::Beverage, "Drinking water"),
    ("green tea", 1.0, FoodCategory::Beverage, "Unsweetened green tea"),
    ("coffee", 2.0, FoodCategory::Beverage, "Black coffee"),
    ("potato chips", 536.0, FoodCategory::Snack, "Fried potato chips"),
    ("chocolate", 546.0, FoodCategory::Snack, "Milk chocolate"),
    ("biscuits", 502.0, FoodCategory::Snack, "Plain biscuits"),
    ("nuts", 607.0, FoodCategory::Snack, "Mixed nuts"),
    ("popcorn", 382.0, FoodCategory::Snack, "Popcorn"),
];

impl FoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self { foods: Vec::new() }
    }

    /// Catalog pre-filled with common foods
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (name, kcal, category, description) in DEFAULT_FOODS {
            catalog.upsert(FoodCalorieReference {
                food_name: (*name).to_owned(),
                calories_per_100g: *kcal,
                category: *category,
                description: (*description).to_owned(),
            });
        }
        catalog
    }

    /// Insert a food, replacing an existing entry with the same name
    pub fn upsert(&mut self, food: FoodCalorieReference) {
        match self
            .foods
            .iter_mut()
            .find(|existing| existing.food_name.eq_ignore_ascii_case(&food.food_name))
        {
            Some(existing) => *existing = food,
            None => self.foods.push(food),
        }
    }

    /// Case-insensitive lookup by food name
    #[must_use]
    pub fn lookup(&self, food_name: &str) -> Option<&FoodCalorieReference> {
        let needle = food_name.trim();
        self.foods
            .iter()
            .find(|food| food.food_name.eq_ignore_ascii_case(needle))
    }

    /// All foods in a category
    pub fn by_category(
        &self,
        category: FoodCategory,
    ) -> impl Iterator<Item = &FoodCalorieReference> + '_ {
        self.foods
            .iter()
            .filter(move |food| food.category == category)
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog has no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl DietEntry {
    /// Build a diet entry whose calorie density comes from the catalog
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the food is not in the catalog and
    /// `InvalidInput` for a negative or non-finite portion.
    pub fn from_catalog(
        date: NaiveDate,
        meal_type: MealType,
        food_name: &str,
        portion_grams: f64,
        catalog: &FoodCatalog,
    ) -> AppResult<Self> {
        if !portion_grams.is_finite() || portion_grams < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Portion size must be a non-negative number of grams, got {portion_grams}"
            )));
        }
        let food = catalog
            .lookup(food_name)
            .ok_or_else(|| AppError::not_found(format!("Food '{food_name}'")))?;
        Ok(Self::new(
            date,
            meal_type,
            food.food_name.clone(),
            portion_grams,
            food.calories_per_100g,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_default_catalog_lookup_is_case_insensitive() {
        let catalog = FoodCatalog::with_defaults();
        assert_eq!(catalog.len(), DEFAULT_FOODS.len());
        let rice = catalog.lookup("  RICE ").unwrap();
        assert!((rice.calories_per_100g - 116.0).abs() < f64::EPSILON);
        assert_eq!(catalog.by_category(FoodCategory::Dairy).count(), 5);
    }

    #[test]
    fn test_upsert_replaces_existing_food() {
        let mut catalog = FoodCatalog::with_defaults();
        let before = catalog.len();
        catalog.upsert(FoodCalorieReference {
            food_name: "Rice".to_owned(),
            calories_per_100g: 130.0,
            category: FoodCategory::Staple,
            description: "Jasmine rice".to_owned(),
        });
        assert_eq!(catalog.len(), before);
        assert!((catalog.lookup("rice").unwrap().calories_per_100g - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_diet_entry_from_catalog() {
        let catalog = FoodCatalog::with_defaults();
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let entry = DietEntry::from_catalog(date, MealType::Breakfast, "Banana", 120.0, &catalog)
            .unwrap();
        assert_eq!(entry.food_name, "banana");
        assert!((entry.total_calories().unwrap() - 106.8).abs() < 1e-9);

        let missing = DietEntry::from_catalog(date, MealType::Snack, "durian", 100.0, &catalog)
            .unwrap_err();
        assert_eq!(missing.code, ErrorCode::ResourceNotFound);

        let negative = DietEntry::from_catalog(date, MealType::Snack, "apple", -1.0, &catalog)
            .unwrap_err();
        assert_eq!(negative.code, ErrorCode::InvalidInput);
    }
}
