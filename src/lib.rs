//! Interactive recipe manager
//!
//! Recipes hold an ordered list of [`Ingredient`]s and preparation steps.
//! Quantities can be scaled and reset, and printing a recipe reports its
//! total calories, notifying subscribed listeners when the total is above
//! [`CALORIE_THRESHOLD`].
//!
//! # Example
//!
//! ```
//! use recipe_creator::{Ingredient, Recipe};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut soup = Recipe::new("Soup");
//! soup.add_ingredient(Ingredient::new("Carrot", 2.0, "pcs", 150, "Vegetable"));
//! soup.add_ingredient(Ingredient::new("Broth", 1.0, "liter", 200, "Liquid"));
//! soup.add_step("Simmer everything for 20 minutes");
//!
//! let warned = Rc::new(Cell::new(None));
//! let sink = Rc::clone(&warned);
//! soup.subscribe(move |total| sink.set(Some(total)));
//!
//! soup.scale(2.0);
//! let mut report = Vec::new();
//! soup.print_to(&mut report).unwrap();
//!
//! assert!(String::from_utf8(report).unwrap().contains("4 pcs Carrot"));
//! assert_eq!(warned.get(), Some(350));
//! ```
//!
//! # Modules
//!
//! - [`ingredient`] / [`recipe`] - the data model
//! - [`book`] - the session's recipe collection
//! - [`input`] - parsing of typed answers
//! - [`shell`] - the menu dialog
//! - [`config`] / [`output`] - settings and terminal status lines

pub mod book;
pub mod config;
pub mod ingredient;
pub mod input;
pub mod output;
pub mod recipe;
pub mod shell;

pub use book::RecipeBook;
pub use config::Config;
pub use ingredient::Ingredient;
pub use input::InputError;
pub use recipe::{CALORIE_THRESHOLD, Recipe};
pub use shell::Shell;
