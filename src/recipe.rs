//! Recipe aggregate: ingredients, steps, and the calorie-exceeded hook.

use crate::ingredient::Ingredient;
use std::fmt;
use std::io::{self, Write};

/// Totals strictly above this value notify every listener on print.
pub const CALORIE_THRESHOLD: i64 = 300;

type CaloriesListener = Box<dyn Fn(i64)>;

/// A named, ordered collection of ingredients and preparation steps.
///
/// Ingredients and steps keep insertion order; only [`Recipe::clear`]
/// removes them. Listeners registered with [`Recipe::subscribe`] are called
/// synchronously, in registration order, from [`Recipe::print_to`] whenever
/// the total exceeds [`CALORIE_THRESHOLD`].
pub struct Recipe {
    pub name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    listeners: Vec<CaloriesListener>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Append an ingredient. Duplicate names are allowed.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    pub fn add_step(&mut self, description: impl Into<String>) {
        self.steps.push(description.into());
    }

    /// Multiply every ingredient's current quantity by `factor`.
    ///
    /// Repeated calls compound. Zero and negative factors are accepted.
    pub fn scale(&mut self, factor: f64) {
        for ingredient in &mut self.ingredients {
            ingredient.scale(factor);
        }
    }

    /// Restore every ingredient to the quantity it was created with
    pub fn reset_quantities(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.reset_quantity();
        }
    }

    /// Drop all ingredients and steps. The name and listeners are kept.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.steps.clear();
    }

    /// Sum of each ingredient's `calories` field.
    ///
    /// Quantities are not taken into account: scaling a recipe leaves this
    /// value unchanged.
    pub fn total_calories(&self) -> i64 {
        self.ingredients.iter().map(|i| i64::from(i.calories)).sum()
    }

    /// Register a listener for totals above [`CALORIE_THRESHOLD`]
    pub fn subscribe(&mut self, listener: impl Fn(i64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Write the report to `out`, then notify listeners if the total
    /// calories exceed the threshold.
    ///
    /// Listeners run after the report has been fully written. A panicking
    /// listener is not caught.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()?;

        let total = self.total_calories();
        if total > CALORIE_THRESHOLD {
            for listener in &self.listeners {
                listener(total);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(
                f,
                "{} {} {}",
                ingredient.quantity(),
                ingredient.unit,
                ingredient.name
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Steps:")?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }

        writeln!(f, "Total Calories: {}", self.total_calories())
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.name)
            .field("ingredients", &self.ingredients)
            .field("steps", &self.steps)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
