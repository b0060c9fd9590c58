use cookstack::{Recipe, RecipeBook, RecipeBuilder};

fn recipe(name: &str) -> Recipe {
    RecipeBuilder::new()
        .name(name)
        .ingredient("Eggs", "2", "pieces")
        .step("Cook.")
        .build()
        .unwrap()
}

fn found_names<'a>(results: &[&'a Recipe]) -> Vec<&'a str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_search_on_empty_book_returns_empty() {
    let book = RecipeBook::new("Lara");
    assert!(book.search("eggs").is_empty());
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Scrambled Eggs")).unwrap();
    book.add(recipe("Egg Salad")).unwrap();

    let results = book.search("");
    assert_eq!(found_names(&results), vec!["Scrambled Eggs", "Egg Salad"]);
    // Whitespace-only queries behave the same
    assert_eq!(book.search("   ").len(), 2);
}

#[test]
fn test_substring_search_is_case_insensitive() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Scrambled Eggs")).unwrap();
    book.add(recipe("Egg Salad")).unwrap();
    book.add(recipe("Toast")).unwrap();

    let results = book.search("EGG");
    assert_eq!(found_names(&results), vec!["Scrambled Eggs", "Egg Salad"]);
}

#[test]
fn test_exact_match_takes_precedence_over_substring() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Egg Salad Sandwich")).unwrap();
    book.add(recipe("Egg Salad")).unwrap();

    // "egg salad" is a substring of both names, but an exact match exists
    let results = book.search("egg salad");
    assert_eq!(found_names(&results), vec!["Egg Salad"]);
}

#[test]
fn test_search_preserves_live_order() {
    use cookstack::{SortDirection, SortKey};

    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Egg Salad")).unwrap();
    book.add(recipe("Deviled Eggs")).unwrap();

    book.sort_by(SortKey::Name, SortDirection::Ascending);
    let results = book.search("egg");
    assert_eq!(found_names(&results), vec!["Deviled Eggs", "Egg Salad"]);
}

#[test]
fn test_search_with_no_matches() {
    let mut book = RecipeBook::new("Lara");
    book.add(recipe("Toast")).unwrap();
    assert!(book.search("lasagna").is_empty());
}
