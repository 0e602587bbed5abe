//! A single recipe component.

/// One ingredient line of a recipe.
///
/// `original_quantity` is captured at construction and never changes, so
/// any amount of scaling can be undone with [`Ingredient::reset_quantity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    quantity: f64,
    pub unit: String,
    pub calories: i32,
    pub food_group: String,
    original_quantity: f64,
}

impl Ingredient {
    /// Create an ingredient. Values are taken as given, without validation.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: i32,
        food_group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            calories,
            food_group: food_group.into(),
            original_quantity: quantity,
        }
    }

    /// Current quantity, after any scaling
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn original_quantity(&self) -> f64 {
        self.original_quantity
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        self.quantity *= factor;
    }

    /// Restore the quantity supplied at construction
    pub fn reset_quantity(&mut self) {
        self.quantity = self.original_quantity;
    }
}
