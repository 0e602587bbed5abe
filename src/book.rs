//! The caller-side collection of recipes.

use crate::recipe::Recipe;

/// Recipes created during a session, in creation order.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a recipe and return its index
    pub fn add(&mut self, recipe: Recipe) -> usize {
        self.recipes.push(recipe);
        self.recipes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Recipe> {
        self.recipes.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Indices and names ordered alphabetically by name.
    ///
    /// The sort is stable, so recipes sharing a name stay in creation order.
    pub fn names_sorted(&self) -> Vec<(usize, &str)> {
        let mut names: Vec<(usize, &str)> = self
            .recipes
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.name.as_str()))
            .collect();
        names.sort_by(|a, b| a.1.cmp(b.1));
        names
    }

    /// Indices and names in creation order
    pub fn names(&self) -> Vec<(usize, &str)> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(i, r)| (i, r.name.as_str()))
            .collect()
    }
}
