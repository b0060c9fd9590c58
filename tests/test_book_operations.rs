use cookstack::{CookStackError, Recipe, RecipeBook, RecipeBuilder};

fn recipe(name: &str) -> Recipe {
    RecipeBuilder::new()
        .name(name)
        .ingredient("Salt", "1", "tsp")
        .step("Mix everything together.")
        .build()
        .unwrap()
}

#[test]
fn test_add_and_find_exact_is_case_insensitive() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();

    let found = book.find_exact("toast").expect("recipe should be found");
    assert_eq!(found.name, "Toast");
    assert!(book.find_exact("TOAST").is_some());
    assert!(book.find_exact("stew").is_none());
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Apple Pie")).unwrap();

    let result = book.add(recipe("apple pie"));
    assert!(matches!(
        result,
        Err(CookStackError::DuplicateName { ref name }) if name == "apple pie"
    ));
    // The collection is unchanged by the failed add
    assert_eq!(book.len(), 1);
    assert_eq!(book.recipes()[0].name, "Apple Pie");
}

#[test]
fn test_remove_at_drops_recipe_and_index_entry() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    book.add(recipe("Stew")).unwrap();

    let removed = book.remove_at(0).unwrap();
    assert_eq!(removed.name, "Toast");
    assert_eq!(book.len(), 1);
    assert!(book.find_exact("toast").is_none());
    assert!(book.find_exact("stew").is_some());

    // The removed name can be re-added
    book.add(recipe("Toast")).unwrap();
    assert_eq!(book.len(), 2);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();

    let result = book.remove_at(5);
    assert!(matches!(
        result,
        Err(CookStackError::IndexOutOfRange { index: 5, len: 1 })
    ));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_remove_at_on_empty_book() {
    let mut book = RecipeBook::new("Lara");
    assert!(matches!(
        book.remove_at(0),
        Err(CookStackError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_replace_at_updates_index_on_rename() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    book.add(recipe("Stew")).unwrap();

    let previous = book.replace_at(0, recipe("French Toast")).unwrap();
    assert_eq!(previous.name, "Toast");
    assert!(book.find_exact("toast").is_none());
    assert_eq!(book.find_exact("french toast").unwrap().name, "French Toast");
    assert_eq!(book.len(), 2);
}

#[test]
fn test_replace_at_rejects_name_of_other_recipe() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    book.add(recipe("Stew")).unwrap();

    let result = book.replace_at(0, recipe("STEW"));
    assert!(matches!(result, Err(CookStackError::DuplicateName { .. })));
    assert_eq!(book.recipes()[0].name, "Toast");
}

#[test]
fn test_replace_at_allows_same_name_edit() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();

    let mut edited = recipe("Toast");
    edited.time_minutes = 7;
    book.replace_at(0, edited).unwrap();
    assert_eq!(book.find_exact("toast").unwrap().time_minutes, 7);
}

#[test]
fn test_add_to_front_changes_display_order_only() {
    use cookstack::{SortDirection, SortKey};

    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    book.add_to_front(recipe("Stew")).unwrap();

    // Displayed first, but still the newest addition
    assert_eq!(book.recipes()[0].name, "Stew");
    book.sort_by(SortKey::DateAdded, SortDirection::Ascending);
    assert_eq!(book.recipes()[0].name, "Toast");
    assert_eq!(book.recipes()[1].name, "Stew");
}

#[test]
fn test_add_to_front_rejects_duplicates() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    assert!(matches!(
        book.add_to_front(recipe("toast")),
        Err(CookStackError::DuplicateName { .. })
    ));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_recipe_names_listing() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    book.add(recipe("Stew")).unwrap();
    assert_eq!(book.recipe_names(), "Toast\nStew");
}

#[test]
fn test_display_includes_owner_title() {
    let book = RecipeBook::new("Lara");
    assert_eq!(book.to_string(), "Lara's CookBook");
}
