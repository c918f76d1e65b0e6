//! Behaviour of [`storage::InMemoryUserStore`] through the [`storage::UserStore`] trait.

use storage::{Category, InMemoryUserStore, StorageError, UserStore, WishItem, DEFAULT_CATEGORY};

async fn registered(user_id: i64) -> InMemoryUserStore {
    let store = InMemoryUserStore::new();
    assert!(store.register(user_id).await.unwrap());
    store
}

#[tokio::test]
async fn test_register_twice_keeps_existing_data() {
    let store = registered(3).await;
    store.add_category(3, "Books").await.unwrap();

    assert!(!store.register(3).await.unwrap());

    let categories = store.list_items_by_category(3).await.unwrap();
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec![DEFAULT_CATEGORY, "Books"]);
}

#[tokio::test]
async fn test_add_category_unknown_user() {
    let store = InMemoryUserStore::new();
    assert!(!store.add_category(99, "Board Games").await.unwrap());
    assert!(store.is_empty().await);
    assert_eq!(
        store.list_items_by_category(99).await,
        Err(StorageError::UserNotFound(99))
    );
}

#[tokio::test]
async fn test_add_category_appends_empty_category() {
    let store = registered(1).await;
    assert!(store.add_category(1, "Board Games").await.unwrap());

    let categories = store.list_items_by_category(1).await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1], Category::new("Board Games"));
}

#[tokio::test]
async fn test_list_categories_hides_default_and_keeps_order() {
    let store = registered(1).await;
    for name in ["A", "B", "C"] {
        store.add_category(1, name).await.unwrap();
    }
    assert_eq!(store.list_categories(1).await.unwrap(), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_list_categories_unknown_user_is_empty() {
    let store = InMemoryUserStore::new();
    assert!(store.list_categories(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_item_default_path_matches_explicit_default() {
    let item = WishItem::new("Lego", "http://lego.example");

    let via_default = registered(1).await;
    assert!(via_default.add_item(1, item.clone()).await.unwrap());

    let via_name = registered(1).await;
    assert!(via_name
        .add_item_to_category(1, DEFAULT_CATEGORY, item.clone())
        .await
        .unwrap());

    assert_eq!(
        via_default.list_items_by_category(1).await.unwrap(),
        via_name.list_items_by_category(1).await.unwrap()
    );
    assert_eq!(
        via_default.list_items_by_category(1).await.unwrap()[0].items,
        vec![item]
    );
}

#[tokio::test]
async fn test_add_item_to_missing_category_reports_success_without_storing() {
    let store = registered(1).await;
    let before = store.list_items_by_category(1).await.unwrap();

    assert!(store
        .add_item_to_category(1, "Nope", WishItem::new("Dune", "http://dune"))
        .await
        .unwrap());

    assert_eq!(store.list_items_by_category(1).await.unwrap(), before);
}

#[tokio::test]
async fn test_add_item_unknown_user_reports_failure() {
    let store = InMemoryUserStore::new();
    assert!(!store
        .add_item(1, WishItem::new("Dune", "http://dune"))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_add_item_to_duplicated_category_appends_to_every_match() {
    let store = registered(1).await;
    store.add_category(1, "Books").await.unwrap();
    store.add_category(1, "Books").await.unwrap();

    let item = WishItem::new("Dune", "http://dune");
    store
        .add_item_to_category(1, "Books", item.clone())
        .await
        .unwrap();

    let categories = store.list_items_by_category(1).await.unwrap();
    assert_eq!(categories[1].items, vec![item.clone()]);
    assert_eq!(categories[2].items, vec![item]);
    assert_eq!(store.list_categories(1).await.unwrap(), vec!["Books", "Books"]);
}
