// ABOUTME: Serializes recipe-mutation statements into the KubeJS script dialect
// ABOUTME: Each statement renders as one self-contained ServerEvents.recipes block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Statement-to-script rendering.
//!
//! Every statement becomes its own `ServerEvents.recipes(event => { ... })`
//! block, so blocks carry no references to each other and the runtime can
//! apply them independently. Ingredient counts use the `'Nx id'` prefix
//! form, written only when the count exceeds one.

use packsmith_core::statement::RecipeStatement;
use packsmith_core::recipe::CookingMethod;

/// Render one statement as a self-contained script block, ending with a
/// newline.
#[must_use]
pub fn render_statement(statement: &RecipeStatement) -> String {
    let mut out = String::new();
    if let Some(comment) = statement.comment() {
        for line in comment.lines() {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("ServerEvents.recipes(event => {\n");
    render_body(statement, &mut out);
    out.push_str("})\n");
    out
}

fn render_body(statement: &RecipeStatement, out: &mut String) {
    match statement {
        RecipeStatement::AddShapeless {
            ingredients,
            result,
            ..
        } => {
            out.push_str(&format!(
                "    event.shapeless(Item.of('{}', {}), [\n",
                escape(result.item.as_str()),
                result.count
            ));
            for (i, ingredient) in ingredients.iter().enumerate() {
                let spec = if ingredient.count > 1 {
                    format!("{}x {}", ingredient.count, ingredient.spec_string())
                } else {
                    ingredient.spec_string()
                };
                let separator = if i + 1 < ingredients.len() { "," } else { "" };
                out.push_str(&format!("        '{}'{}\n", escape(&spec), separator));
            }
            out.push_str("    ])\n");
        }
        RecipeStatement::AddShaped {
            pattern,
            key,
            result,
            ..
        } => {
            out.push_str(&format!(
                "    event.shaped(Item.of('{}', {}), [\n",
                escape(result.item.as_str()),
                result.count
            ));
            for (i, row) in pattern.iter().enumerate() {
                let separator = if i + 1 < pattern.len() { "," } else { "" };
                out.push_str(&format!("        '{}'{}\n", escape(row), separator));
            }
            out.push_str("    ], {\n");
            for (i, (symbol, id)) in key.iter().enumerate() {
                let separator = if i + 1 < key.len() { "," } else { "" };
                out.push_str(&format!(
                    "        {}: '{}'{}\n",
                    symbol,
                    escape(id.as_str()),
                    separator
                ));
            }
            out.push_str("    })\n");
        }
        RecipeStatement::AddSmithing {
            template,
            base,
            addition,
            result,
            ..
        } => {
            out.push_str(&format!(
                "    event.smithing('{}', '{}', '{}', '{}')\n",
                escape(result.as_str()),
                escape(template.as_str()),
                escape(base.as_str()),
                escape(addition.as_str())
            ));
        }
        RecipeStatement::AddCooking {
            method,
            input,
            result,
            experience,
            cooking_time,
            ..
        } => {
            out.push_str(&format!(
                "    event.{}('{}', '{}').xp({}).cookingTime({})\n",
                method_event(*method),
                escape(result.as_str()),
                escape(input.as_str()),
                experience,
                cooking_time
            ));
        }
        RecipeStatement::AddStonecutting { input, result, .. } => {
            out.push_str(&format!(
                "    event.stonecutting(Item.of('{}', {}), '{}')\n",
                escape(result.item.as_str()),
                result.count,
                escape(input.as_str())
            ));
        }
        RecipeStatement::Remove { ids, .. } => {
            for id in ids {
                out.push_str(&format!(
                    "    event.remove({{ id: '{}' }})\n",
                    escape(id.as_str())
                ));
            }
        }
        RecipeStatement::ReplaceItems {
            recipe_id,
            substitutions,
            ..
        } => {
            for (old, new) in substitutions {
                out.push_str(&format!(
                    "    event.replaceInput({{ id: '{}' }}, '{}', '{}')\n",
                    escape(recipe_id.as_str()),
                    escape(old.as_str()),
                    escape(new.as_str())
                ));
                out.push_str(&format!(
                    "    event.replaceOutput({{ id: '{}' }}, '{}', '{}')\n",
                    escape(recipe_id.as_str()),
                    escape(old.as_str()),
                    escape(new.as_str())
                ));
            }
        }
    }
}

const fn method_event(method: CookingMethod) -> &'static str {
    match method {
        CookingMethod::Smelting => "smelting",
        CookingMethod::Blasting => "blasting",
        CookingMethod::Smoking => "smoking",
        CookingMethod::CampfireCooking => "campfireCooking",
    }
}

/// Escape a value for inclusion in a single-quoted script string.
///
/// Identifiers are already restricted to a safe alphabet; this guards the
/// free-form strings (recipe ids from foreign registries).
fn escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'")
}
