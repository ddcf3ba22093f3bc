//! Runs the order write transactions against Postgres.
//!
//! Needs `DATABASE_URL` pointing at a server where a scratch database can be
//! created: `cargo test -p shared --test order_repository -- --ignored`.

use serde_json::{Map, Value, json};
use shared::{
    abstract_trait::{OrderCommandRepositoryTrait, StockRepositoryTrait},
    domain::requests::{NewOrderItem, UpdateOrderRequest},
    errors::RepositoryError,
    repository::{OrderRepository, StockRepository},
};
use sqlx::PgPool;

const SEED: &[&str] = &[
    "INSERT INTO brands (brand_id, brand_name) VALUES (1, 'Trek')",
    "INSERT INTO categories (category_id, category_name) VALUES (1, 'Mountain Bikes')",
    "INSERT INTO products (product_id, product_name, brand_id, category_id, model_year, list_price)
     VALUES (10, 'Trek 820 - 2016', 1, 1, 2016, 379.99)",
    "INSERT INTO stores (store_id, store_name) VALUES (1, 'Santa Cruz Bikes'), (2, 'Baldwin Bikes')",
    "INSERT INTO customers (customer_id, first_name, last_name) VALUES (1, 'Debra', 'Burks')",
    "INSERT INTO staffs (staff_id, first_name, last_name, email, store_id)
     VALUES (1, 'Fabiola', 'Jackson', 'fabiola.jackson@bikes.shop', 1)",
    "INSERT INTO stocks (store_id, product_id, quantity) VALUES (1, 10, 5)",
    "INSERT INTO orders (order_id, customer_id, order_status, store_id, staff_id)
     VALUES (1, 1, 1, 1, 1)",
];

async fn seed(pool: &PgPool) {
    for statement in SEED {
        sqlx::query(statement).execute(pool).await.unwrap();
    }
}

async fn stock_of(pool: &PgPool, store_id: i32, product_id: i32) -> Option<i32> {
    sqlx::query_scalar("SELECT quantity FROM stocks WHERE store_id = $1 AND product_id = $2")
        .bind(store_id)
        .bind(product_id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

async fn item_ids(pool: &PgPool, order_id: i32) -> Vec<i32> {
    sqlx::query_scalar("SELECT item_id FROM order_items WHERE order_id = $1 ORDER BY item_id")
        .bind(order_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

fn item(quantity: i32) -> NewOrderItem {
    NewOrderItem {
        order_id: 1,
        product_id: 10,
        quantity,
        list_price: 379.99,
        discount: 0.0,
    }
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[sqlx::test(migrations = "../storefront/migrations")]
#[ignore = "needs DATABASE_URL"]
async fn decrement_is_conditional_and_item_ids_follow_the_max(pool: PgPool) {
    seed(&pool).await;
    let orders = OrderRepository::new(pool.clone());

    assert_eq!(orders.command.add_order_item(&item(2)).await.unwrap(), 1);
    assert_eq!(stock_of(&pool, 1, 10).await, Some(3));

    let err = orders.command.add_order_item(&item(4)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::InsufficientStock));
    assert_eq!(stock_of(&pool, 1, 10).await, Some(3));
    assert_eq!(item_ids(&pool, 1).await, vec![1]);

    assert_eq!(orders.command.add_order_item(&item(3)).await.unwrap(), 2);
    assert_eq!(stock_of(&pool, 1, 10).await, Some(0));

    assert_eq!(orders.command.remove_order_item(1, 1).await.unwrap(), 1);
    assert_eq!(stock_of(&pool, 1, 10).await, Some(2));
    assert_eq!(orders.command.add_order_item(&item(1)).await.unwrap(), 3);
    assert_eq!(item_ids(&pool, 1).await, vec![2, 3]);
}

#[sqlx::test(migrations = "../storefront/migrations")]
#[ignore = "needs DATABASE_URL"]
async fn store_change_with_items_is_rolled_back(pool: PgPool) {
    seed(&pool).await;
    let orders = OrderRepository::new(pool.clone());
    orders.command.add_order_item(&item(2)).await.unwrap();

    let moved = UpdateOrderRequest {
        customer_id: 1,
        order_status: 2,
        order_date: None,
        required_date: None,
        shipped_date: None,
        store_id: 2,
        staff_id: 1,
    };
    let err = orders.command.update_order(1, &moved).await.unwrap_err();
    assert!(matches!(err, RepositoryError::OrderHasItems));

    let err = orders
        .command
        .patch_order(1, &fields(json!({ "store_id": 2 })))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::OrderHasItems));

    let (store_id, status): (i32, i32) =
        sqlx::query_as("SELECT store_id, order_status FROM orders WHERE order_id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!((store_id, status), (1, 1));

    orders.command.remove_order_item(1, 1).await.unwrap();
    assert_eq!(stock_of(&pool, 1, 10).await, Some(5));
    assert_eq!(stock_of(&pool, 2, 10).await, None);
}

#[sqlx::test(migrations = "../storefront/migrations")]
#[ignore = "needs DATABASE_URL"]
async fn restore_recreates_a_deleted_stock_row(pool: PgPool) {
    seed(&pool).await;
    let orders = OrderRepository::new(pool.clone());
    let stocks = StockRepository::new(pool.clone());
    orders.command.add_order_item(&item(2)).await.unwrap();
    orders.command.add_order_item(&item(1)).await.unwrap();

    assert_eq!(stocks.delete_stock(1, 10).await.unwrap(), 1);
    orders.command.remove_order_item(1, 1).await.unwrap();
    assert_eq!(stock_of(&pool, 1, 10).await, Some(2));

    stocks.delete_stock(1, 10).await.unwrap();
    assert_eq!(orders.command.delete_order(1).await.unwrap(), 1);
    assert_eq!(stock_of(&pool, 1, 10).await, Some(1));
}

#[sqlx::test(migrations = "../storefront/migrations")]
#[ignore = "needs DATABASE_URL"]
async fn patch_values_refused_by_postgres_are_invalid_input(pool: PgPool) {
    seed(&pool).await;
    let orders = OrderRepository::new(pool.clone());

    for patch in [
        json!({ "order_status": 9 }),
        json!({ "order_date": "nope" }),
        json!({ "staff_id": "first" }),
    ] {
        let err = orders
            .command
            .patch_order(1, &fields(patch.clone()))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidInput(_)), "{patch}: {err:?}");
    }
}
