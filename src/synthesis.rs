// ABOUTME: Validated, pure constructors for recipe-mutation statements
// ABOUTME: No statement is emitted while any referenced identifier is uncatalogued
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! # Recipe Synthesis
//!
//! One constructor per recipe family plus removal and item-replacement
//! operations. Each constructor is a pure transformation from typed
//! parameters to a [`RecipeStatement`]: deterministic, side-effect-free,
//! and structurally incapable of emitting a statement that references an
//! unvalidated identifier. The first failure aborts with an error naming
//! the offending identifier and its role; a partially-built statement
//! never escapes.
//!
//! Removal is the deliberate exception to identifier validation: removal
//! ids describe recipes, not items, and removing an already-absent recipe
//! is a no-op at apply time downstream, so ids are not required to
//! resolve here.

use crate::validator::IdentifierValidator;
use packsmith_core::constants::limits::{
    CRAFTING_GRID_HEIGHT, CRAFTING_GRID_SLOTS, CRAFTING_GRID_WIDTH, MIN_COOKING_TIME_TICKS,
};
use packsmith_core::errors::{AppError, AppResult};
use packsmith_core::ident::{Identifier, Ingredient, ItemStack};
use packsmith_core::recipe::{CookingMethod, RecipeId};
use packsmith_core::statement::RecipeStatement;
use std::collections::{BTreeMap, BTreeSet};

/// Validated constructor set for recipe-mutation statements
#[derive(Debug, Clone)]
pub struct RecipeSynthesizer {
    validator: IdentifierValidator,
}

impl RecipeSynthesizer {
    /// A synthesizer validating against the given catalog snapshot
    #[must_use]
    pub fn new(validator: IdentifierValidator) -> Self {
        Self { validator }
    }

    /// Build a shapeless crafting statement.
    ///
    /// # Errors
    ///
    /// `INVALID_INPUT` for an empty ingredient list, `VALUE_OUT_OF_RANGE`
    /// when counts are zero or the slot total exceeds the crafting grid,
    /// `UNKNOWN_IDENTIFIER` for any uncatalogued identifier.
    pub fn shapeless(
        &self,
        ingredients: Vec<Ingredient>,
        result: ItemStack,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        if ingredients.is_empty() {
            return Err(AppError::invalid_input(
                "a shapeless recipe needs at least one ingredient",
            ));
        }
        let mut slots: u32 = 0;
        for ingredient in &ingredients {
            if ingredient.count == 0 {
                return Err(AppError::value_out_of_range(format!(
                    "ingredient '{}' has a zero count",
                    ingredient.spec_string()
                )));
            }
            slots = slots.saturating_add(ingredient.count);
        }
        if slots > CRAFTING_GRID_SLOTS {
            return Err(AppError::value_out_of_range(format!(
                "{slots} ingredient slots exceed the {CRAFTING_GRID_SLOTS}-slot crafting grid"
            )));
        }
        for ingredient in &ingredients {
            for option in &ingredient.options {
                self.validator.require_known(option, "ingredient")?;
            }
        }
        let result = self.checked_result(result)?;

        Ok(RecipeStatement::AddShapeless {
            ingredients,
            result,
            comment,
        })
    }

    /// Build a shaped crafting statement.
    ///
    /// The pattern must be a rectangle within the crafting grid; every
    /// non-space symbol must be keyed, every key must be used, and a space
    /// always means an empty cell.
    ///
    /// # Errors
    ///
    /// `INVALID_INPUT` for pattern/key shape problems, `UNKNOWN_IDENTIFIER`
    /// for any uncatalogued identifier.
    pub fn shaped(
        &self,
        pattern: Vec<String>,
        key: BTreeMap<char, Identifier>,
        result: ItemStack,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        if pattern.is_empty() || pattern.len() > CRAFTING_GRID_HEIGHT {
            return Err(AppError::invalid_input(format!(
                "pattern must have 1 to {CRAFTING_GRID_HEIGHT} rows, got {}",
                pattern.len()
            )));
        }
        let width = pattern[0].chars().count();
        if width == 0 || width > CRAFTING_GRID_WIDTH {
            return Err(AppError::invalid_input(format!(
                "pattern rows must have 1 to {CRAFTING_GRID_WIDTH} columns, got {width}"
            )));
        }
        if pattern.iter().any(|row| row.chars().count() != width) {
            return Err(AppError::invalid_input(
                "pattern rows must all have the same width",
            ));
        }
        if key.contains_key(&' ') {
            return Err(AppError::invalid_input(
                "the space symbol is reserved for empty cells and cannot be keyed",
            ));
        }

        let mut used: BTreeSet<char> = BTreeSet::new();
        for symbol in pattern.iter().flat_map(|row| row.chars()) {
            if symbol == ' ' {
                continue;
            }
            if !key.contains_key(&symbol) {
                return Err(AppError::invalid_input(format!(
                    "pattern symbol '{symbol}' has no key entry"
                )));
            }
            used.insert(symbol);
        }
        if let Some(unused) = key.keys().find(|symbol| !used.contains(symbol)) {
            return Err(AppError::invalid_input(format!(
                "key symbol '{unused}' does not appear in the pattern"
            )));
        }

        for (symbol, id) in &key {
            self.validator
                .require_known(id, &format!("pattern key '{symbol}'"))?;
        }
        let result = self.checked_result(result)?;

        Ok(RecipeStatement::AddShaped {
            pattern,
            key,
            result,
            comment,
        })
    }

    /// Build a smithing statement.
    ///
    /// # Errors
    ///
    /// `UNKNOWN_IDENTIFIER` for any uncatalogued identifier.
    pub fn smithing(
        &self,
        template: Identifier,
        base: Identifier,
        addition: Identifier,
        result: Identifier,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        self.validator.require_known(&template, "template")?;
        self.validator.require_known(&base, "base")?;
        self.validator.require_known(&addition, "addition")?;
        self.validator.require_known(&result, "result")?;

        Ok(RecipeStatement::AddSmithing {
            template,
            base,
            addition,
            result,
            comment,
        })
    }

    /// Build a cooking statement.
    ///
    /// # Errors
    ///
    /// `VALUE_OUT_OF_RANGE` for negative (or non-finite) experience or a
    /// zero duration, `UNKNOWN_IDENTIFIER` for any uncatalogued
    /// identifier.
    pub fn cooking(
        &self,
        method: CookingMethod,
        input: Identifier,
        result: Identifier,
        experience: f32,
        cooking_time: u32,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        if !experience.is_finite() || experience < 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "experience must be a non-negative number, got {experience}"
            )));
        }
        if cooking_time < MIN_COOKING_TIME_TICKS {
            return Err(AppError::value_out_of_range(format!(
                "cooking time must be at least {MIN_COOKING_TIME_TICKS} tick(s), got {cooking_time}"
            )));
        }
        self.validator.require_known(&input, "input")?;
        self.validator.require_known(&result, "result")?;

        Ok(RecipeStatement::AddCooking {
            method,
            input,
            result,
            experience,
            cooking_time,
            comment,
        })
    }

    /// Build a stonecutting statement.
    ///
    /// # Errors
    ///
    /// `VALUE_OUT_OF_RANGE` for a zero result count, `UNKNOWN_IDENTIFIER`
    /// for any uncatalogued identifier.
    pub fn stonecutting(
        &self,
        input: Identifier,
        result: ItemStack,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        self.validator.require_known(&input, "input")?;
        let result = self.checked_result(result)?;

        Ok(RecipeStatement::AddStonecutting {
            input,
            result,
            comment,
        })
    }

    /// Build a removal statement for a set of recipe ids.
    ///
    /// Ids are deliberately not resolved against the corpus: the engine
    /// emits a syntactically valid removal instruction, it does not
    /// simulate the receiving runtime's state.
    ///
    /// # Errors
    ///
    /// `INVALID_INPUT` for an empty id set.
    pub fn remove(
        &self,
        ids: BTreeSet<RecipeId>,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        if ids.is_empty() {
            return Err(AppError::invalid_input(
                "remove_recipes needs at least one recipe id",
            ));
        }
        Ok(RecipeStatement::Remove { ids, comment })
    }

    /// Build an item-replacement statement for an existing recipe.
    ///
    /// Only the *new* identifiers are validated; old identifiers describe
    /// what is being matched, which may reference anything the existing
    /// recipe contains.
    ///
    /// # Errors
    ///
    /// `INVALID_INPUT` for an empty substitution map, `UNKNOWN_IDENTIFIER`
    /// for any uncatalogued replacement identifier.
    pub fn replace_items(
        &self,
        recipe_id: RecipeId,
        substitutions: BTreeMap<Identifier, Identifier>,
        comment: Option<String>,
    ) -> AppResult<RecipeStatement> {
        if substitutions.is_empty() {
            return Err(AppError::invalid_input(
                "replace_recipe_items needs at least one substitution",
            ));
        }
        for (old, new) in &substitutions {
            self.validator
                .require_known(new, &format!("replacement for '{old}'"))?;
        }
        Ok(RecipeStatement::ReplaceItems {
            recipe_id,
            substitutions,
            comment,
        })
    }

    fn checked_result(&self, result: ItemStack) -> AppResult<ItemStack> {
        if result.count == 0 {
            return Err(AppError::value_out_of_range(
                "result count must be at least 1",
            ));
        }
        self.validator.require_known(&result.item, "result")?;
        Ok(result)
    }
}
