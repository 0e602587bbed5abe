//! Interactive menu loop over a [`RecipeBook`].
//!
//! The shell is generic over its input and output so the same dialog can
//! run on a terminal, from a script file, or against in-memory buffers.

use crate::book::RecipeBook;
use crate::ingredient::Ingredient;
use crate::input::{self, InputError};
use crate::output;
use crate::recipe::{CALORIE_THRESHOLD, Recipe};
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Unwrap a prompt's value or return the non-value answer as is
macro_rules! value_or_return {
    ($answer:expr) => {
        match $answer {
            Answer::Value(v) => v,
            Answer::Invalid => return Ok(Answer::Invalid),
            Answer::Ended => return Ok(Answer::Ended),
        }
    };
}

/// Whether the current menu keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Leave,
    Exit,
}

/// Menu-driven session reading answers from `R` and writing to `W`.
pub struct Shell<R, W> {
    input: R,
    out: W,
    book: RecipeBook,
    sort_recipes: bool,
    alerts: Rc<RefCell<Vec<i64>>>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            book: RecipeBook::new(),
            sort_recipes: true,
            alerts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// List recipes alphabetically (default) or in creation order
    pub fn with_sorting(mut self, sort_recipes: bool) -> Self {
        self.sort_recipes = sort_recipes;
        self
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn into_parts(self) -> (RecipeBook, W) {
        (self.book, self.out)
    }

    /// Run the main menu until "Exit" is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "Recipe Creator:")?;
            writeln!(self.out, "1. Add Recipe")?;
            writeln!(self.out, "2. Select Recipe")?;
            writeln!(self.out, "3. Exit")?;
            self.out.flush()?;

            let flow = match self.ask(|line| input::parse_choice(&line))? {
                Answer::Value(1) => self.create_recipe()?,
                Answer::Value(2) => self.select_recipe()?,
                Answer::Value(3) => Flow::Exit,
                Answer::Value(_) => {
                    writeln!(self.out, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
                Answer::Invalid => Flow::Continue,
                Answer::Ended => Flow::Exit,
            };

            if flow == Flow::Exit {
                output::debug(&format!("leaving with {} recipe(s)", self.book.len()));
                self.out.flush()?;
                return Ok(());
            }
        }
    }

    fn create_recipe(&mut self) -> Result<Flow> {
        let name = match self.prompt("Enter recipe name: ", Ok)? {
            Answer::Value(name) => name,
            Answer::Invalid => return Ok(Flow::Continue),
            Answer::Ended => return Ok(Flow::Exit),
        };

        let mut recipe = Recipe::new(name);
        let alerts = Rc::clone(&self.alerts);
        recipe.subscribe(move |total| alerts.borrow_mut().push(total));

        let flow = self.edit_recipe(&mut recipe);
        output::debug(&format!("stored recipe '{}'", recipe.name));
        self.book.add(recipe);

        Ok(match flow? {
            Flow::Exit => Flow::Exit,
            _ => Flow::Continue,
        })
    }

    fn select_recipe(&mut self) -> Result<Flow> {
        if self.book.is_empty() {
            writeln!(self.out, "No recipes available.")?;
            return Ok(Flow::Continue);
        }

        let names = if self.sort_recipes {
            self.book.names_sorted()
        } else {
            self.book.names()
        };
        let listing: Vec<(usize, String)> = names
            .into_iter()
            .map(|(i, name)| (i, name.to_string()))
            .collect();

        writeln!(self.out, "Select a recipe:")?;
        for (n, (_, name)) in listing.iter().enumerate() {
            writeln!(self.out, "{}. {}", n + 1, name)?;
        }
        self.out.flush()?;

        let choice = match self.ask(|line| input::parse_choice(&line))? {
            Answer::Value(choice) => choice,
            Answer::Invalid => return Ok(Flow::Continue),
            Answer::Ended => return Ok(Flow::Exit),
        };

        let selected = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| listing.get(n))
            .and_then(|(index, _)| self.book.get(*index));

        match selected {
            Some(recipe) => {
                recipe.print_to(&mut self.out)?;
                self.report_alerts()?;
            }
            None => writeln!(self.out, "{INVALID_CHOICE}")?,
        }
        Ok(Flow::Continue)
    }

    fn edit_recipe(&mut self, recipe: &mut Recipe) -> Result<Flow> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "Add to Recipe:")?;
            writeln!(self.out, "1. Add Ingredients")?;
            writeln!(self.out, "2. Add Step")?;
            writeln!(self.out, "3. Print Recipe")?;
            writeln!(self.out, "4. Scale Recipe")?;
            writeln!(self.out, "5. Reset Quantities")?;
            writeln!(self.out, "6. Clear Recipe")?;
            writeln!(self.out, "7. Return to Recipe Creator")?;
            self.out.flush()?;

            let flow = match self.ask(|line| input::parse_choice(&line))? {
                Answer::Value(1) => match self.read_ingredient()? {
                    Answer::Value(ingredient) => {
                        output::debug(&format!(
                            "added ingredient '{}' to '{}'",
                            ingredient.name, recipe.name
                        ));
                        recipe.add_ingredient(ingredient);
                        Flow::Continue
                    }
                    Answer::Invalid => Flow::Continue,
                    Answer::Ended => Flow::Exit,
                },
                Answer::Value(2) => match self.prompt("Enter step description: ", Ok)? {
                    Answer::Value(step) => {
                        recipe.add_step(step);
                        Flow::Continue
                    }
                    Answer::Invalid => Flow::Continue,
                    Answer::Ended => Flow::Exit,
                },
                Answer::Value(3) => {
                    recipe.print_to(&mut self.out)?;
                    self.report_alerts()?;
                    Flow::Continue
                }
                Answer::Value(4) => {
                    match self.prompt("Enter scaling factor: ", |l| input::parse_number(&l))? {
                        Answer::Value(factor) => {
                            output::debug(&format!("scaling '{}' by {}", recipe.name, factor));
                            recipe.scale(factor);
                            Flow::Continue
                        }
                        Answer::Invalid => Flow::Continue,
                        Answer::Ended => Flow::Exit,
                    }
                }
                Answer::Value(5) => {
                    recipe.reset_quantities();
                    Flow::Continue
                }
                Answer::Value(6) => {
                    recipe.clear();
                    Flow::Continue
                }
                Answer::Value(7) => Flow::Leave,
                Answer::Value(_) => {
                    writeln!(self.out, "{INVALID_CHOICE}")?;
                    Flow::Continue
                }
                Answer::Invalid => Flow::Continue,
                Answer::Ended => Flow::Exit,
            };

            if flow != Flow::Continue {
                return Ok(flow);
            }
        }
    }

    /// Ask for every ingredient field; nothing is built unless all parse
    fn read_ingredient(&mut self) -> Result<Answer<Ingredient>> {
        let name = value_or_return!(self.prompt("Enter ingredient name: ", Ok)?);
        let quantity =
            value_or_return!(self.prompt("Enter quantity: ", |l| input::parse_number(&l))?);
        let unit = value_or_return!(self.prompt("Enter unit of measurement: ", Ok)?);
        let calories =
            value_or_return!(self.prompt("Enter calories: ", |l| input::parse_calories(&l))?);
        let food_group = value_or_return!(self.prompt("Enter food group: ", Ok)?);

        Ok(Answer::Value(Ingredient::new(
            name, quantity, unit, calories, food_group,
        )))
    }

    fn report_alerts(&mut self) -> Result<()> {
        let totals: Vec<i64> = self.alerts.borrow_mut().drain(..).collect();
        for total in totals {
            writeln!(
                self.out,
                "WARNING: This recipe exceeds {CALORIE_THRESHOLD} calories with a total of {total} calories!"
            )?;
        }
        Ok(())
    }

    fn prompt<T>(
        &mut self,
        text: &str,
        parse: impl FnOnce(String) -> Result<T, InputError>,
    ) -> Result<Answer<T>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        self.ask(parse)
    }

    /// Read one line and parse it.
    ///
    /// Parse failures are reported on the output and become
    /// [`Answer::Invalid`]; only I/O failures are returned as errors.
    fn ask<T>(&mut self, parse: impl FnOnce(String) -> Result<T, InputError>) -> Result<Answer<T>> {
        let parsed = input::read_line(&mut self.input).and_then(parse);
        match parsed {
            Ok(value) => Ok(Answer::Value(value)),
            Err(InputError::EndOfInput) => Ok(Answer::Ended),
            Err(InputError::Io(e)) => Err(anyhow!("Failed to read input: {e}")),
            Err(e) => {
                writeln!(self.out, "Invalid input: {e}")?;
                Ok(Answer::Invalid)
            }
        }
    }
}

/// Outcome of a single prompt
enum Answer<T> {
    Value(T),
    Invalid,
    Ended,
}
