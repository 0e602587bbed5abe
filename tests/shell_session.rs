//! End-to-end menu sessions driven from in-memory input.

use recipe_creator::{RecipeBook, Shell};
use std::io::Cursor;

const WARNING_350: &str = "WARNING: This recipe exceeds 300 calories with a total of 350 calories!";

fn session(lines: &[&str]) -> (RecipeBook, String) {
    let script = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    let mut shell = Shell::new(Cursor::new(script), Vec::new());
    shell.run().unwrap();
    let (book, out) = shell.into_parts();
    (book, String::from_utf8(out).unwrap())
}

/// Menu answers that add one ingredient
fn ingredient(name: &str, qty: &str, unit: &str, kcal: &str, group: &str) -> Vec<String> {
    ["1", name, qty, unit, kcal, group]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn soup_lines() -> Vec<String> {
    let mut lines = vec!["1".to_string(), "Soup".to_string()];
    lines.extend(ingredient("Carrot", "2", "pcs", "150", "Vegetable"));
    lines.extend(ingredient("Broth", "1", "liter", "200", "Liquid"));
    lines.push("2".into());
    lines.push("Simmer for 20 minutes".into());
    lines
}

fn run_lines(lines: Vec<String>) -> (RecipeBook, String) {
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    session(&refs)
}

#[test]
fn test_create_and_print_soup() {
    let mut lines = soup_lines();
    lines.extend(["3", "7", "3"].map(String::from));
    let (book, out) = run_lines(lines);

    assert_eq!(book.len(), 1);
    let soup = book.get(0).unwrap();
    assert_eq!(soup.ingredients().len(), 2);
    assert_eq!(soup.steps(), ["Simmer for 20 minutes"]);

    assert!(out.contains(
        "Recipe: Soup\nIngredients:\n2 pcs Carrot\n1 liter Broth\n\nSteps:\n1. Simmer for 20 minutes\nTotal Calories: 350\n"
    ));
    assert!(out.contains(WARNING_350));
}

#[test]
fn test_prompts_are_shown() {
    let mut lines = soup_lines();
    lines.extend(["4", "2", "7", "3"].map(String::from));
    let (_, out) = run_lines(lines);

    for prompt in [
        "Enter recipe name: ",
        "Enter ingredient name: ",
        "Enter quantity: ",
        "Enter unit of measurement: ",
        "Enter calories: ",
        "Enter food group: ",
        "Enter step description: ",
        "Enter scaling factor: ",
    ] {
        assert!(out.contains(prompt), "missing prompt {prompt:?}");
    }
    assert!(out.contains("Add to Recipe:\n1. Add Ingredients\n"));
    assert!(out.contains("7. Return to Recipe Creator\n"));
}

#[test]
fn test_scale_reset_through_menu() {
    let mut lines = soup_lines();
    lines.extend(["4", "2", "3", "5", "3", "7", "3"].map(String::from));
    let (book, out) = run_lines(lines);

    assert!(out.contains("4 pcs Carrot\n2 liter Broth\n"));
    assert!(out.contains("2 pcs Carrot\n1 liter Broth\n"));
    // Calories are not scaled with quantities.
    assert_eq!(out.matches("Total Calories: 350").count(), 2);
    assert_eq!(book.get(0).unwrap().ingredients()[0].quantity(), 2.0);
}

#[test]
fn test_clear_through_menu() {
    let mut lines = soup_lines();
    lines.extend(["6", "3", "7", "3"].map(String::from));
    let (book, out) = run_lines(lines);

    let soup = book.get(0).unwrap();
    assert_eq!(soup.name, "Soup");
    assert!(soup.ingredients().is_empty());
    assert!(soup.steps().is_empty());
    assert!(out.contains("Recipe: Soup\nIngredients:\n\nSteps:\nTotal Calories: 0\n"));
    assert!(!out.contains("WARNING"));
}

#[test]
fn test_select_lists_recipes_alphabetically() {
    let (book, out) = session(&[
        "1", "Soup", "7", "1", "Apple Pie", "7", "1", "Muffins", "7", "2", "1", "3",
    ]);

    assert_eq!(book.len(), 3);
    assert!(out.contains("Select a recipe:\n1. Apple Pie\n2. Muffins\n3. Soup\n"));
    assert!(out.contains("Recipe: Apple Pie\n"));
}

#[test]
fn test_select_in_creation_order_when_unsorted() {
    let script = "1\nSoup\n7\n1\nApple Pie\n7\n2\n1\n3\n";
    let mut shell = Shell::new(Cursor::new(script), Vec::new()).with_sorting(false);
    shell.run().unwrap();
    let (_, out) = shell.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Select a recipe:\n1. Soup\n2. Apple Pie\n"));
    assert!(out.contains("Recipe: Soup\n"));
}

#[test]
fn test_selected_recipe_still_warns() {
    let mut lines = soup_lines();
    lines.extend(["7", "2", "1", "3"].map(String::from));
    let (_, out) = run_lines(lines);

    assert_eq!(out.matches(WARNING_350).count(), 1);
}

#[test]
fn test_select_out_of_range() {
    let (_, out) = session(&["1", "Soup", "7", "2", "5", "2", "0", "2", "-1", "3"]);
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 3);
    assert!(!out.contains("Recipe: Soup"));
}

#[test]
fn test_unknown_edit_choice() {
    let (_, out) = session(&["1", "Soup", "8", "7", "3"]);
    assert!(out.contains("Invalid choice. Please try again."));
}

#[test]
fn test_malformed_calories_leave_recipe_untouched() {
    let (book, out) = session(&[
        "1", "Soup", "1", "Carrot", "2", "pcs", "many", "7", "3",
    ]);

    assert!(out.contains("Invalid input: 'many' is not a whole number"));
    assert!(book.get(0).unwrap().ingredients().is_empty());
}

#[test]
fn test_malformed_scale_factor_keeps_quantities() {
    let mut lines = soup_lines();
    lines.extend(["4", "double", "7", "3"].map(String::from));
    let (book, out) = run_lines(lines);

    assert!(out.contains("Invalid input: 'double' is not a number"));
    let quantities: Vec<f64> = book
        .get(0)
        .unwrap()
        .ingredients()
        .iter()
        .map(|i| i.quantity())
        .collect();
    assert_eq!(quantities, vec![2.0, 1.0]);
}

#[test]
fn test_input_ending_mid_recipe_keeps_recipe() {
    let (book, _) = session(&["1", "Soup", "2", "Boil water"]);
    assert_eq!(book.len(), 1);
    assert_eq!(book.get(0).unwrap().steps(), ["Boil water"]);
}

#[test]
fn test_input_ending_mid_ingredient_adds_nothing() {
    let (book, _) = session(&["1", "Soup", "1", "Carrot", "2"]);
    assert!(book.get(0).unwrap().ingredients().is_empty());
}

#[test]
fn test_empty_recipe_name_accepted() {
    let (book, out) = session(&["1", "", "7", "2", "1", "3"]);
    assert_eq!(book.get(0).unwrap().name, "");
    assert!(out.contains("Recipe: \n"));
}
