use car_marketplace::MarketplaceError;
use car_marketplace::db::{EntityKind, MarketplaceCreate, PhotoCreate, SaleCreate};

mod common;
use common::{TempDb, brand, car, model, user};

#[tokio::test]
async fn test_duplicate_login_is_unique_violation() {
    let db = TempDb::new("dup_login");
    let handle = car_marketplace::db::spawn(&db.url).await.unwrap();

    handle
        .create(MarketplaceCreate::User(user("alice")))
        .await
        .unwrap();
    let err = handle
        .create(MarketplaceCreate::User(user("alice")))
        .await
        .unwrap_err();
    assert!(
        matches!(err, MarketplaceError::UniqueViolation { .. }),
        "Expected UniqueViolation, got {err:?}"
    );

    // Same for brand names.
    handle
        .create(MarketplaceCreate::Brand(brand("Toyota")))
        .await
        .unwrap();
    let err = handle
        .create(MarketplaceCreate::Brand(brand("Toyota")))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::UniqueViolation { .. }));

    handle.stop().await.unwrap();
    db.cleanup().await;
}

#[tokio::test]
async fn test_second_sale_for_car_is_unique_violation() {
    let db = TempDb::new("dup_sale");
    let handle = car_marketplace::db::spawn(&db.url).await.unwrap();

    let seller = handle.create(MarketplaceCreate::User(user("seller"))).await.unwrap();
    let buyer = handle.create(MarketplaceCreate::User(user("buyer"))).await.unwrap();
    let other_buyer = handle.create(MarketplaceCreate::User(user("late"))).await.unwrap();
    let brand_id = handle.create(MarketplaceCreate::Brand(brand("Mazda"))).await.unwrap();
    let model_id = handle
        .create(MarketplaceCreate::Model(model(brand_id, "CX-5")))
        .await
        .unwrap();
    let car_id = handle
        .create(MarketplaceCreate::Car(car(seller, brand_id, model_id, None)))
        .await
        .unwrap();

    let sale = |buyer_id| SaleCreate {
        seller_id: seller,
        buyer_id,
        car_id,
        sale_price: Some(2_300_000.0),
        sale_date: None,
    };

    handle.create(MarketplaceCreate::Sale(sale(buyer))).await.unwrap();
    let err = handle
        .create(MarketplaceCreate::Sale(sale(other_buyer)))
        .await
        .unwrap_err();
    assert!(
        matches!(err, MarketplaceError::UniqueViolation { .. }),
        "Expected UniqueViolation, got {err:?}"
    );

    handle.stop().await.unwrap();
    db.cleanup().await;
}

#[tokio::test]
async fn test_car_with_unknown_catalog_refs_is_foreign_key_violation() {
    let db = TempDb::new("car_fk");
    let handle = car_marketplace::db::spawn(&db.url).await.unwrap();

    let owner = handle.create(MarketplaceCreate::User(user("owner"))).await.unwrap();
    let brand_id = handle.create(MarketplaceCreate::Brand(brand("Honda"))).await.unwrap();
    let model_id = handle
        .create(MarketplaceCreate::Model(model(brand_id, "Civic")))
        .await
        .unwrap();

    let err = handle
        .create(MarketplaceCreate::Car(car(owner, 9_999, model_id, None)))
        .await
        .unwrap_err();
    assert!(
        matches!(err, MarketplaceError::ForeignKeyViolation { .. }),
        "Expected ForeignKeyViolation for brand, got {err:?}"
    );

    let err = handle
        .create(MarketplaceCreate::Car(car(owner, brand_id, 9_999, None)))
        .await
        .unwrap_err();
    assert!(
        matches!(err, MarketplaceError::ForeignKeyViolation { .. }),
        "Expected ForeignKeyViolation for model, got {err:?}"
    );

    // A model must point at an existing brand as well.
    let err = handle
        .create(MarketplaceCreate::Model(model(9_999, "Ghost")))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::ForeignKeyViolation { .. }));

    // Photos reference cars.
    let err = handle
        .create(MarketplaceCreate::Photo(PhotoCreate {
            car_id: 9_999,
            photo_url: "https://cdn.example.com/p/1.jpg".to_string(),
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketplaceError::ForeignKeyViolation { .. }));

    assert!(handle.cars_of_brand(brand_id).await.unwrap().is_empty());

    handle.stop().await.unwrap();
    db.cleanup().await;
}

#[tokio::test]
async fn test_vin_unique_when_present_and_nulls_allowed() {
    let db = TempDb::new("vin");
    let handle = car_marketplace::db::spawn(&db.url).await.unwrap();

    let owner = handle.create(MarketplaceCreate::User(user("vin-owner"))).await.unwrap();
    let brand_id = handle.create(MarketplaceCreate::Brand(brand("Subaru"))).await.unwrap();
    let model_id = handle
        .create(MarketplaceCreate::Model(model(brand_id, "Outback")))
        .await
        .unwrap();

    let vin = "JF1BS9KC5FG000001";
    handle
        .create(MarketplaceCreate::Car(car(owner, brand_id, model_id, Some(vin))))
        .await
        .unwrap();
    let err = handle
        .create(MarketplaceCreate::Car(car(owner, brand_id, model_id, Some(vin))))
        .await
        .unwrap_err();
    assert!(
        matches!(err, MarketplaceError::UniqueViolation { .. }),
        "Expected UniqueViolation, got {err:?}"
    );

    for _ in 0..3 {
        handle
            .create(MarketplaceCreate::Car(car(owner, brand_id, model_id, None)))
            .await
            .unwrap();
    }

    let cars = handle.cars_of_user(owner).await.unwrap();
    assert_eq!(cars.len(), 4);
    assert_eq!(cars.iter().filter(|c| c.vin.is_none()).count(), 3);

    handle.stop().await.unwrap();
    db.cleanup().await;
}

#[tokio::test]
async fn test_brand_delete_blocked_by_dependents() {
    let db = TempDb::new("brand_delete");
    let handle = car_marketplace::db::spawn(&db.url).await.unwrap();

    let owner = handle.create(MarketplaceCreate::User(user("dealer"))).await.unwrap();
    let brand_id = handle.create(MarketplaceCreate::Brand(brand("Nissan"))).await.unwrap();
    let model_id = handle
        .create(MarketplaceCreate::Model(model(brand_id, "Leaf")))
        .await
        .unwrap();
    let car_id = handle
        .create(MarketplaceCreate::Car(car(owner, brand_id, model_id, None)))
        .await
        .unwrap();

    let err = handle.delete(EntityKind::Brand, brand_id).await.unwrap_err();
    assert!(
        matches!(err, MarketplaceError::ForeignKeyViolation { .. }),
        "Expected ForeignKeyViolation, got {err:?}"
    );

    // Nothing cascaded.
    assert_eq!(handle.models_of_brand(brand_id).await.unwrap().len(), 1);
    assert_eq!(handle.get_car(car_id).await.unwrap().brand_id, brand_id);

    // Model still has a car.
    let err = handle.delete(EntityKind::Model, model_id).await.unwrap_err();
    assert!(matches!(err, MarketplaceError::ForeignKeyViolation { .. }));

    handle.delete(EntityKind::Car, car_id).await.unwrap();
    handle.delete(EntityKind::Model, model_id).await.unwrap();
    handle.delete(EntityKind::Brand, brand_id).await.unwrap();

    let err = handle.get_brand(brand_id).await.unwrap_err();
    assert!(matches!(
        err,
        MarketplaceError::NotFound {
            entity: EntityKind::Brand,
            ..
        }
    ));

    let err = handle.delete(EntityKind::Brand, brand_id).await.unwrap_err();
    assert!(matches!(err, MarketplaceError::NotFound { .. }));

    handle.stop().await.unwrap();
    db.cleanup().await;
}
