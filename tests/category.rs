//! Tests for categories and the enabled-category filter.

use catlog::{Category, CategoryFilter, Error};

#[test]
fn category_display() {
    assert_eq!(Category::Info.to_string(), "info");
    assert_eq!(Category::Debug.to_string(), "debug");
    assert_eq!(Category::Success.to_string(), "success");
    assert_eq!(Category::Error.to_string(), "error");
}

#[test]
fn category_from_str() {
    assert_eq!("INFO".parse::<Category>().unwrap(), Category::Info);
    assert_eq!("Debug".parse::<Category>().unwrap(), Category::Debug);
    assert_eq!("ok".parse::<Category>().unwrap(), Category::Success);
    assert_eq!("err".parse::<Category>().unwrap(), Category::Error);
}

#[test]
fn category_from_str_rejects_wildcard_and_unknown() {
    assert!(matches!(
        "all".parse::<Category>(),
        Err(Error::InvalidCategory(_))
    ));
    assert!("warn".parse::<Category>().is_err());
}

#[test]
fn default_filter_is_wildcard() {
    let filter = CategoryFilter::default();
    assert_eq!(filter, CategoryFilter::All);
    for category in Category::all() {
        assert!(filter.allows(category));
    }
}

#[test]
fn empty_filter_allows_nothing() {
    let filter = CategoryFilter::none();
    assert!(filter.is_empty());
    for category in Category::all() {
        assert!(!filter.allows(category));
    }
}

#[test]
fn only_filter_allows_members() {
    let filter = CategoryFilter::from([Category::Debug, Category::Error]);
    assert!(filter.allows(Category::Debug));
    assert!(filter.allows(Category::Error));
    assert!(!filter.allows(Category::Info));
    assert!(!filter.allows(Category::Success));
}

#[test]
fn explicit_full_list_differs_from_wildcard() {
    let explicit: CategoryFilter = Category::all().into_iter().collect();
    assert_ne!(explicit, CategoryFilter::All);
    for category in Category::all() {
        assert!(explicit.allows(category));
    }
}

#[test]
fn selectors_with_all_become_wildcard() {
    let filter = CategoryFilter::from_selectors(["info", "all"]).unwrap();
    assert_eq!(filter, CategoryFilter::All);
}

#[test]
fn selectors_empty_is_empty_filter() {
    let filter = CategoryFilter::from_selectors(Vec::<String>::new()).unwrap();
    assert!(filter.is_empty());
}

#[test]
fn selectors_unknown_name_errors() {
    let err = CategoryFilter::from_selectors(["info", "verbose"]).unwrap_err();
    assert!(matches!(err, Error::InvalidCategory(name) if name == "verbose"));
}

#[test]
fn filter_from_str_and_display() {
    let filter: CategoryFilter = "error, info".parse().unwrap();
    assert_eq!(filter.to_string(), "info,error");
    assert_eq!("ALL".parse::<CategoryFilter>().unwrap().to_string(), "all");
    assert!("".parse::<CategoryFilter>().unwrap().is_empty());
}
