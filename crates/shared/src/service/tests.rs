use super::*;
use crate::{
    abstract_trait::*,
    config::{Hashing, JwtConfig},
    domain::{
        requests::*,
        responses::{ApiResponse, ProductListResponse},
    },
    errors::{CacheError, RepositoryError, ServiceError},
    model::{
        Brand, Category, Customer, Order, OrderItem, Product, Staff, Stock, Store, User,
    },
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use serde_json::{Map, Value, json};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex as StdMutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};
use tokio::sync::Mutex;
use uuid::Uuid;

fn registry() -> Arc<Mutex<Registry>> {
    Arc::new(Mutex::new(Registry::default()))
}

// ---------------------------------------------------------------------------
// In-memory shop backing the order workflow
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ShopState {
    customers: HashMap<i32, Customer>,
    stores: HashMap<i32, Store>,
    staff: HashMap<i32, Staff>,
    products: HashMap<i32, (String, f64)>,
    stock: HashMap<(i32, i32), i32>,
    orders: HashMap<i32, CreateOrderRequest>,
    items: Vec<OrderItem>,
    next_order_id: i32,
}

#[derive(Default)]
struct Shop {
    state: StdMutex<ShopState>,
    stock_lookups: AtomicUsize,
}

impl Shop {
    fn seeded() -> Arc<Self> {
        let shop = Shop::default();
        {
            let mut state = shop.state.lock().unwrap();
            state.customers.insert(
                1,
                Customer {
                    customer_id: 1,
                    first_name: "Debra".into(),
                    last_name: "Burks".into(),
                    phone: None,
                    email: Some("debra.burks@yahoo.com".into()),
                    street: None,
                    city: Some("Orchard Park".into()),
                    state: Some("NY".into()),
                    zip_code: None,
                },
            );
            state.stores.insert(
                1,
                Store {
                    store_id: 1,
                    store_name: "Santa Cruz Bikes".into(),
                    phone: None,
                    email: None,
                    street: None,
                    city: Some("Santa Cruz".into()),
                    state: Some("CA".into()),
                    zip_code: None,
                },
            );
            state.staff.insert(
                1,
                Staff {
                    staff_id: 1,
                    first_name: "Fabiola".into(),
                    last_name: "Jackson".into(),
                    email: "fabiola.jackson@bikes.shop".into(),
                    phone: None,
                    active: true,
                    store_id: 1,
                    manager_id: None,
                    store_name: "Santa Cruz Bikes".into(),
                    store_phone: None,
                    store_email: None,
                    store_street: None,
                    store_city: None,
                    store_state: None,
                    store_zip_code: None,
                },
            );
            state.stores.insert(
                2,
                Store {
                    store_id: 2,
                    store_name: "Baldwin Bikes".into(),
                    phone: None,
                    email: None,
                    street: None,
                    city: Some("Baldwin".into()),
                    state: Some("NY".into()),
                    zip_code: None,
                },
            );
            state.products.insert(10, ("Trek 820 - 2016".into(), 379.99));
            state.products.insert(11, ("Ritchey Timberwolf".into(), 749.99));
            state.stock.insert((1, 10), 5);
            state.next_order_id = 1;
        }

        let shop = Arc::new(shop);
        let order_id = shop.insert_order(&order_request());
        assert_eq!(order_id, 1);
        shop
    }

    fn insert_order(&self, req: &CreateOrderRequest) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_order_id;
        state.next_order_id += 1;
        state.orders.insert(id, req.clone());
        id
    }

    fn stock_of(&self, store_id: i32, product_id: i32) -> Option<i32> {
        self.state
            .lock()
            .unwrap()
            .stock
            .get(&(store_id, product_id))
            .copied()
    }

    fn set_stock(&self, store_id: i32, product_id: i32, quantity: i32) {
        self.state
            .lock()
            .unwrap()
            .stock
            .insert((store_id, product_id), quantity);
    }

    fn item_ids(&self, order_id: i32) -> Vec<i32> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<i32> = state
            .items
            .iter()
            .filter(|i| i.order_id == order_id)
            .map(|i| i.item_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn order_row(state: &ShopState, id: i32) -> Option<Order> {
        let req = state.orders.get(&id)?;
        let customer = state.customers.get(&req.customer_id)?;
        let store = state.stores.get(&req.store_id)?;
        let staff = state.staff.get(&req.staff_id)?;

        Some(Order {
            order_id: id,
            customer_id: req.customer_id,
            order_status: req.order_status,
            order_date: req.order_date,
            required_date: req.required_date,
            shipped_date: req.shipped_date,
            store_id: req.store_id,
            staff_id: req.staff_id,
            customer_first_name: customer.first_name.clone(),
            customer_last_name: customer.last_name.clone(),
            customer_phone: customer.phone.clone(),
            customer_email: customer.email.clone(),
            customer_street: customer.street.clone(),
            customer_city: customer.city.clone(),
            customer_state: customer.state.clone(),
            customer_zip_code: customer.zip_code.clone(),
            store_name: store.store_name.clone(),
            store_phone: store.phone.clone(),
            store_email: store.email.clone(),
            store_street: store.street.clone(),
            store_city: store.city.clone(),
            store_state: store.state.clone(),
            store_zip_code: store.zip_code.clone(),
            staff_first_name: staff.first_name.clone(),
            staff_last_name: staff.last_name.clone(),
            staff_email: staff.email.clone(),
            staff_phone: staff.phone.clone(),
            staff_active: staff.active,
            staff_store_id: staff.store_id,
            staff_manager_id: staff.manager_id,
        })
    }

    /// Same rule the order write transaction enforces.
    fn ensure_store_kept(state: &ShopState, id: i32, store_id: i32) -> Result<(), RepositoryError> {
        let current = state.orders.get(&id).map(|o| o.store_id);
        let has_items = state.items.iter().any(|i| i.order_id == id);
        if current.is_some_and(|current| current != store_id) && has_items {
            return Err(RepositoryError::OrderHasItems);
        }
        Ok(())
    }

    /// Upserts like the restore statement: a removed stock row comes back.
    fn restock(state: &mut ShopState, store_id: i32, item: &OrderItem) {
        *state
            .stock
            .entry((store_id, item.product_id))
            .or_insert(0) += item.quantity;
    }
}

fn order_request() -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: 1,
        order_status: 1,
        order_date: None,
        required_date: None,
        shipped_date: None,
        store_id: 1,
        staff_id: 1,
    }
}

fn update_request() -> UpdateOrderRequest {
    UpdateOrderRequest {
        customer_id: 1,
        order_status: 4,
        order_date: None,
        required_date: None,
        shipped_date: None,
        store_id: 1,
        staff_id: 1,
    }
}

fn item_request(order_id: i32, product_id: i32, quantity: i32) -> CreateOrderItemRequest {
    CreateOrderItemRequest {
        order_id,
        product_id,
        quantity,
        list_price: None,
        discount: None,
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for Shop {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Order>, i64), RepositoryError> {
        let state = self.state.lock().unwrap();
        let orders: Vec<Order> = state
            .orders
            .keys()
            .filter_map(|id| Shop::order_row(&state, *id))
            .collect();
        let count = orders.len() as i64;
        Ok((orders, count))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(Shop::order_row(&self.state.lock().unwrap(), id))
    }

    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError> {
        let state = self.state.lock().unwrap();
        let mut items: Vec<OrderItem> = state
            .items
            .iter()
            .filter(|i| order_ids.contains(&i.order_id))
            .cloned()
            .collect();
        items.sort_by_key(|i| (i.order_id, i.item_id));
        Ok(items)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for Shop {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<i32, RepositoryError> {
        Ok(self.insert_order(req))
    }

    async fn update_order(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        Shop::ensure_store_kept(&state, id, req.store_id)?;
        let Some(order) = state.orders.get_mut(&id) else {
            return Ok(0);
        };
        *order = CreateOrderRequest {
            customer_id: req.customer_id,
            order_status: req.order_status,
            order_date: req.order_date,
            required_date: req.required_date,
            shipped_date: req.shipped_date,
            store_id: req.store_id,
            staff_id: req.staff_id,
        };
        Ok(1)
    }

    async fn patch_order(
        &self,
        id: i32,
        fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let store_id = fields
            .get("store_id")
            .and_then(|v| v.as_i64().or_else(|| v.as_str()?.parse().ok()))
            .map(|v| v as i32);
        if let Some(store_id) = store_id {
            Shop::ensure_store_kept(&state, id, store_id)?;
        }
        let Some(order) = state.orders.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(store_id) = store_id {
            order.store_id = store_id;
        }
        if let Some(status) = fields.get("order_status").and_then(Value::as_i64) {
            order.order_status = status as i32;
        }
        Ok(1)
    }

    async fn delete_order(&self, id: i32) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(order) = state.orders.remove(&id) else {
            return Ok(0);
        };
        let (removed, kept): (Vec<_>, Vec<_>) =
            state.items.drain(..).partition(|i| i.order_id == id);
        state.items = kept;
        for item in &removed {
            Shop::restock(&mut state, order.store_id, item);
        }
        Ok(1)
    }

    async fn add_order_item(&self, item: &NewOrderItem) -> Result<i32, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let store_id = state
            .orders
            .get(&item.order_id)
            .map(|o| o.store_id)
            .ok_or(RepositoryError::NotFound)?;

        match state.stock.get_mut(&(store_id, item.product_id)) {
            Some(quantity) if *quantity >= item.quantity => *quantity -= item.quantity,
            _ => return Err(RepositoryError::InsufficientStock),
        }

        let item_id = state
            .items
            .iter()
            .filter(|i| i.order_id == item.order_id)
            .map(|i| i.item_id)
            .max()
            .unwrap_or(0)
            + 1;

        state.items.push(OrderItem {
            order_id: item.order_id,
            item_id,
            product_id: item.product_id,
            quantity: item.quantity,
            list_price: item.list_price,
            discount: item.discount,
        });
        Ok(item_id)
    }

    async fn remove_order_item(
        &self,
        order_id: i32,
        item_id: i32,
    ) -> Result<u64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let Some(store_id) = state.orders.get(&order_id).map(|o| o.store_id) else {
            return Ok(0);
        };
        let Some(pos) = state
            .items
            .iter()
            .position(|i| i.order_id == order_id && i.item_id == item_id)
        else {
            return Ok(0);
        };
        let item = state.items.remove(pos);
        Shop::restock(&mut state, store_id, &item);
        Ok(1)
    }
}

#[async_trait]
impl StockRepositoryTrait for Shop {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Stock>, i64), RepositoryError> {
        unimplemented!("stock listing is not exercised here")
    }

    async fn find_by_id_product_stock(
        &self,
        store_id: i32,
        product_id: i32,
    ) -> Result<Option<Stock>, RepositoryError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);

        let state = self.state.lock().unwrap();
        let Some(quantity) = state.stock.get(&(store_id, product_id)) else {
            return Ok(None);
        };
        let store = &state.stores[&store_id];
        let (product_name, list_price) = state.products[&product_id].clone();

        Ok(Some(Stock {
            store_id,
            product_id,
            quantity: *quantity,
            store_name: store.store_name.clone(),
            store_phone: None,
            store_email: None,
            store_street: None,
            store_city: None,
            store_state: None,
            store_zip_code: None,
            product_name,
            brand_id: 1,
            category_id: 1,
            model_year: 2016,
            list_price,
        }))
    }

    async fn create_stock(&self, _req: &CreateStockRequest) -> Result<(i32, i32), RepositoryError> {
        unimplemented!()
    }

    async fn update_stock(
        &self,
        _store_id: i32,
        _product_id: i32,
        _req: &UpdateStockRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_stock(
        &self,
        _store_id: i32,
        _product_id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_stock(&self, store_id: i32, product_id: i32) -> Result<u64, RepositoryError> {
        let removed = self
            .state
            .lock()
            .unwrap()
            .stock
            .remove(&(store_id, product_id));
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl CustomerRepositoryTrait for Shop {
    async fn find_all(
        &self,
        _params: &ListParams,
    ) -> Result<(Vec<Customer>, i64), RepositoryError> {
        unimplemented!()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.state.lock().unwrap().customers.get(&id).cloned())
    }

    async fn create_customer(&self, _req: &CreateCustomerRequest) -> Result<i32, RepositoryError> {
        unimplemented!()
    }

    async fn update_customer(
        &self,
        _id: i32,
        _req: &UpdateCustomerRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_customer(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_customer(&self, _id: i32) -> Result<u64, RepositoryError> {
        unimplemented!()
    }
}

#[async_trait]
impl StoreRepositoryTrait for Shop {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Store>, i64), RepositoryError> {
        unimplemented!()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Store>, RepositoryError> {
        Ok(self.state.lock().unwrap().stores.get(&id).cloned())
    }

    async fn create_store(&self, _req: &CreateStoreRequest) -> Result<i32, RepositoryError> {
        unimplemented!()
    }

    async fn update_store(
        &self,
        _id: i32,
        _req: &UpdateStoreRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_store(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_store(&self, _id: i32) -> Result<u64, RepositoryError> {
        unimplemented!()
    }
}

#[async_trait]
impl StaffRepositoryTrait for Shop {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Staff>, i64), RepositoryError> {
        unimplemented!()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, RepositoryError> {
        Ok(self.state.lock().unwrap().staff.get(&id).cloned())
    }

    async fn create_staff(&self, _req: &CreateStaffRequest) -> Result<i32, RepositoryError> {
        unimplemented!()
    }

    async fn update_staff(
        &self,
        _id: i32,
        _req: &UpdateStaffRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_staff(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_staff(&self, _id: i32) -> Result<u64, RepositoryError> {
        unimplemented!()
    }
}

async fn order_service(shop: &Arc<Shop>) -> OrderService {
    OrderService::new(OrderServiceDeps {
        query: shop.clone() as DynOrderQueryRepository,
        command: shop.clone() as DynOrderCommandRepository,
        customer: shop.clone() as DynCustomerRepository,
        store: shop.clone() as DynStoreRepository,
        staff: shop.clone() as DynStaffRepository,
        stock: shop.clone() as DynStockRepository,
        registry: registry(),
    })
    .await
}

#[tokio::test]
async fn order_item_draws_from_store_stock_and_numbers_items_per_order() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let first = service
        .command
        .create_order_item(&item_request(1, 10, 2))
        .await
        .unwrap();
    assert_eq!(first.data.order_items.len(), 1);
    assert_eq!(first.data.order_items[0].item_id, 1);
    assert_eq!(first.data.order_items[0].list_price, 379.99);
    assert_eq!(first.data.order_items[0].discount, 0.0);
    assert_eq!(shop.stock_of(1, 10), Some(3));

    let mut priced = item_request(1, 10, 1);
    priced.list_price = Some(350.0);
    priced.discount = Some(0.2);
    let second = service.command.create_order_item(&priced).await.unwrap();

    let last = second.data.order_items.last().unwrap();
    assert_eq!(last.item_id, 2);
    assert_eq!(last.list_price, 350.0);
    assert_eq!(last.discount, 0.2);
    assert_eq!(shop.stock_of(1, 10), Some(2));
}

#[tokio::test]
async fn quantity_above_stock_is_rejected_without_writing() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let err = service
        .command
        .create_order_item(&item_request(1, 10, 6))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InsufficientStock));
    assert_eq!(shop.stock_of(1, 10), Some(5));
    assert!(shop.item_ids(1).is_empty());
}

#[tokio::test]
async fn empty_stock_row_cannot_be_ordered_from() {
    let shop = Shop::seeded();
    shop.set_stock(1, 10, 0);
    let service = order_service(&shop).await;

    let err = service
        .command
        .create_order_item(&item_request(1, 10, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InsufficientStock));
    assert!(shop.item_ids(1).is_empty());
}

#[tokio::test]
async fn exact_stock_quantity_can_be_ordered() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    service
        .command
        .create_order_item(&item_request(1, 10, 5))
        .await
        .unwrap();

    assert_eq!(shop.stock_of(1, 10), Some(0));
}

#[tokio::test]
async fn missing_order_is_reported_before_any_stock_lookup() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let err = service
        .command
        .create_order_item(&item_request(42, 10, 1))
        .await
        .unwrap_err();

    assert!(matches!(&err, ServiceError::NotFound(msg) if msg == "order with id 42 not found"));
    assert_eq!(shop.stock_lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_stock_row_is_not_found() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let err = service
        .command
        .create_order_item(&item_request(1, 11, 1))
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        ServiceError::NotFound(msg) if msg == "stock for store 1 and product 11 not found"
    ));
    assert!(shop.item_ids(1).is_empty());
}

#[tokio::test]
async fn removed_item_returns_stock_and_next_id_follows_current_max() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    for _ in 0..3 {
        service
            .command
            .create_order_item(&item_request(1, 10, 1))
            .await
            .unwrap();
    }
    assert_eq!(shop.item_ids(1), vec![1, 2, 3]);
    assert_eq!(shop.stock_of(1, 10), Some(2));

    service.command.delete_order_item(1, 3).await.unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(3));

    service
        .command
        .create_order_item(&item_request(1, 10, 1))
        .await
        .unwrap();
    assert_eq!(shop.item_ids(1), vec![1, 2, 3]);

    service.command.delete_order_item(1, 2).await.unwrap();
    service
        .command
        .create_order_item(&item_request(1, 10, 1))
        .await
        .unwrap();
    assert_eq!(shop.item_ids(1), vec![1, 3, 4]);
}

#[tokio::test]
async fn store_of_order_with_items_cannot_change() {
    let shop = Shop::seeded();
    shop.set_stock(2, 10, 0);
    let service = order_service(&shop).await;

    service
        .command
        .create_order_item(&item_request(1, 10, 2))
        .await
        .unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(3));

    let mut moved = update_request();
    moved.store_id = 2;
    let err = service.command.update_order(1, &moved).await.unwrap_err();
    assert!(matches!(err, ServiceError::OrderHasItems));

    for store_id in [json!(2), json!("2")] {
        let req: PatchRequest =
            serde_json::from_value(json!({ "fields": { "store_id": store_id } })).unwrap();
        let err = service.command.patch_order(1, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::OrderHasItems), "{store_id}");
    }

    service.command.delete_order_item(1, 1).await.unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(5));
    assert_eq!(shop.stock_of(2, 10), Some(0));
}

#[tokio::test]
async fn store_of_empty_order_can_change() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let mut moved = update_request();
    moved.store_id = 2;
    let updated = service.command.update_order(1, &moved).await.unwrap();

    assert_eq!(updated.data.store_id, 2);
    assert_eq!(updated.data.store_data.store_name, "Baldwin Bikes");
}

#[tokio::test]
async fn units_return_even_after_the_stock_row_was_deleted() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    service
        .command
        .create_order_item(&item_request(1, 10, 2))
        .await
        .unwrap();
    service
        .command
        .create_order_item(&item_request(1, 10, 1))
        .await
        .unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(2));

    assert_eq!(StockRepositoryTrait::delete_stock(&*shop, 1, 10).await.unwrap(), 1);
    service.command.delete_order_item(1, 1).await.unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(2));

    StockRepositoryTrait::delete_stock(&*shop, 1, 10).await.unwrap();
    service.command.delete_order(1).await.unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(1));
}

#[tokio::test]
async fn deleting_unknown_item_reports_no_rows() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let err = service.command.delete_order_item(1, 9).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoRowsAffected));
}

#[tokio::test]
async fn order_delete_restores_stock_of_every_item() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    service
        .command
        .create_order_item(&item_request(1, 10, 2))
        .await
        .unwrap();
    service
        .command
        .create_order_item(&item_request(1, 10, 3))
        .await
        .unwrap();
    assert_eq!(shop.stock_of(1, 10), Some(0));

    let deleted = service.command.delete_order(1).await.unwrap();

    assert_eq!(deleted.data, 1);
    assert_eq!(shop.stock_of(1, 10), Some(5));
    assert!(shop.item_ids(1).is_empty());
}

#[tokio::test]
async fn order_create_checks_customer_before_store_and_staff() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let mut req = order_request();
    req.customer_id = 9;
    req.store_id = 9;
    req.staff_id = 9;
    let err = service.command.create_order(&req).await.unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(msg) if msg == "customer with id 9 not found"));

    req.customer_id = 1;
    let err = service.command.create_order(&req).await.unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(msg) if msg == "store with id 9 not found"));

    req.store_id = 1;
    let err = service.command.create_order(&req).await.unwrap_err();
    assert!(matches!(&err, ServiceError::NotFound(msg) if msg == "staff with id 9 not found"));
}

#[tokio::test]
async fn created_order_is_returned_with_its_relations() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let created = service.command.create_order(&order_request()).await.unwrap();

    assert_eq!(created.status, "success");
    assert_eq!(created.data.order_id, 2);
    assert_eq!(created.data.customer_data.first_name, "Debra");
    assert_eq!(created.data.store_data.store_name, "Santa Cruz Bikes");
    assert_eq!(created.data.staff_data.last_name, "Jackson");
    assert!(created.data.order_items.is_empty());
}

#[tokio::test]
async fn update_of_deleted_order_reports_no_rows() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    service.command.delete_order(1).await.unwrap();

    let err = service
        .command
        .update_order(1, &update_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NoRowsAffected));

    let err = service.command.delete_order(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::NoRowsAffected));
}

#[tokio::test]
async fn order_patch_rejects_unknown_columns() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;

    let req: PatchRequest =
        serde_json::from_value(json!({ "fields": { "order_total": 10 } })).unwrap();
    let err = service.command.patch_order(1, &req).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let req: PatchRequest =
        serde_json::from_value(json!({ "fields": { "order_status": 3 } })).unwrap();
    let patched = service.command.patch_order(1, &req).await.unwrap();
    assert_eq!(patched.data.order_status, 3);
}

#[tokio::test]
async fn order_listing_attaches_items_to_their_orders() {
    let shop = Shop::seeded();
    let service = order_service(&shop).await;
    service.command.create_order(&order_request()).await.unwrap();
    service
        .command
        .create_order_item(&item_request(1, 10, 1))
        .await
        .unwrap();

    let listing = service
        .query
        .find_all(&ListParams::new(0, 10, None))
        .await
        .unwrap();

    assert_eq!(listing.data.count, 2);
    for order in &listing.data.orders {
        let expected = if order.order_id == 1 { 1 } else { 0 };
        assert_eq!(order.order_items.len(), expected);
    }
}

// ---------------------------------------------------------------------------
// Product listing cache
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Catalog {
    list_calls: AtomicUsize,
}

fn product(id: i32) -> Product {
    Product {
        product_id: id,
        product_name: "Trek 820 - 2016".into(),
        brand_id: 1,
        brand_name: "Trek".into(),
        category_id: 1,
        category_name: "Mountain Bikes".into(),
        model_year: 2016,
        list_price: 379.99,
    }
}

#[async_trait]
impl ProductRepositoryTrait for Catalog {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Product>, i64), RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok((vec![product(1)], 1))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(Some(product(id)))
    }

    async fn create_product(&self, _req: &CreateProductRequest) -> Result<i32, RepositoryError> {
        Ok(7)
    }

    async fn update_product(
        &self,
        _id: i32,
        _req: &UpdateProductRequest,
    ) -> Result<u64, RepositoryError> {
        Ok(0)
    }

    async fn patch_product(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        Ok(1)
    }

    async fn delete_product(&self, _id: i32) -> Result<u64, RepositoryError> {
        Ok(1)
    }
}

#[async_trait]
impl BrandRepositoryTrait for Catalog {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<Brand>, i64), RepositoryError> {
        unimplemented!()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Brand>, RepositoryError> {
        Ok((id == 1).then(|| Brand {
            brand_id: 1,
            brand_name: "Trek".into(),
        }))
    }

    async fn create_brand(&self, _req: &CreateBrandRequest) -> Result<i32, RepositoryError> {
        unimplemented!()
    }

    async fn update_brand(
        &self,
        _id: i32,
        _req: &UpdateBrandRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_brand(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_brand(&self, _id: i32) -> Result<u64, RepositoryError> {
        unimplemented!()
    }
}

#[async_trait]
impl CategoryRepositoryTrait for Catalog {
    async fn find_all(
        &self,
        _params: &ListParams,
    ) -> Result<(Vec<Category>, i64), RepositoryError> {
        unimplemented!()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError> {
        Ok((id == 1).then(|| Category {
            category_id: 1,
            category_name: "Mountain Bikes".into(),
        }))
    }

    async fn create_category(&self, _req: &CreateCategoryRequest) -> Result<i32, RepositoryError> {
        unimplemented!()
    }

    async fn update_category(
        &self,
        _id: i32,
        _req: &UpdateCategoryRequest,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn patch_category(
        &self,
        _id: i32,
        _fields: &Map<String, Value>,
    ) -> Result<u64, RepositoryError> {
        unimplemented!()
    }

    async fn delete_category(&self, _id: i32) -> Result<u64, RepositoryError> {
        unimplemented!()
    }
}

#[derive(Default)]
struct MemoryCache {
    pages: StdMutex<HashMap<ListParams, ProductListResponse>>,
    unreachable: AtomicBool,
    corrupted: AtomicBool,
}

impl MemoryCache {
    fn failure(&self) -> Result<(), CacheError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(CacheError::Miss("connection refused".into()))
        } else {
            Ok(())
        }
    }

    fn len(&self) -> usize {
        self.pages.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductCacheRepositoryTrait for MemoryCache {
    async fn exists(&self, params: &ListParams) -> Result<bool, CacheError> {
        self.failure()?;
        Ok(self.pages.lock().unwrap().contains_key(params))
    }

    async fn get_list(&self, params: &ListParams) -> Result<ProductListResponse, CacheError> {
        self.failure()?;
        if self.corrupted.load(Ordering::SeqCst) {
            return Err(serde_json::from_str::<ProductListResponse>("{").unwrap_err().into());
        }
        self.pages
            .lock()
            .unwrap()
            .get(params)
            .cloned()
            .ok_or_else(|| CacheError::Miss(format!("{params:?}")))
    }

    async fn create(
        &self,
        params: &ListParams,
        listing: &ProductListResponse,
    ) -> Result<(), CacheError> {
        self.failure()?;
        self.pages
            .lock()
            .unwrap()
            .insert(params.clone(), listing.clone());
        Ok(())
    }

    async fn delete(&self) -> Result<(), CacheError> {
        self.failure()?;
        self.pages.lock().unwrap().clear();
        Ok(())
    }
}

async fn product_service(catalog: &Arc<Catalog>, cache: &Arc<MemoryCache>) -> ProductService {
    ProductService::new(ProductServiceDeps {
        repository: catalog.clone() as DynProductRepository,
        brand: catalog.clone() as DynBrandRepository,
        category: catalog.clone() as DynCategoryRepository,
        cache: cache.clone() as DynProductCacheRepository,
        registry: registry(),
    })
    .await
}

fn product_request() -> CreateProductRequest {
    CreateProductRequest {
        product_name: "Trek Fuel EX 8 29 - 2016".into(),
        brand_id: 1,
        category_id: 1,
        model_year: 2016,
        list_price: 2899.99,
    }
}

#[tokio::test]
async fn second_product_page_read_is_served_from_cache() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;
    let params = ListParams::new(0, 10, Some("trek"));

    let first: ApiResponse<ProductListResponse> = service.find_all(&params).await.unwrap();
    let second = service.find_all(&params).await.unwrap();

    assert_eq!(first.data, second.data);
    assert_eq!(catalog.list_calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn distinct_queries_are_cached_separately() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;

    service.find_all(&ListParams::new(0, 10, None)).await.unwrap();
    service.find_all(&ListParams::new(10, 10, None)).await.unwrap();

    assert_eq!(catalog.list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn unreachable_cache_falls_through_to_database() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    cache.unreachable.store(true, Ordering::SeqCst);
    let service = product_service(&catalog, &cache).await;

    let listing = service
        .find_all(&ListParams::new(0, 10, None))
        .await
        .unwrap();

    assert_eq!(listing.data.count, 1);
    assert_eq!(catalog.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreadable_cached_page_falls_through_to_database() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;
    let params = ListParams::new(0, 10, None);

    service.find_all(&params).await.unwrap();
    cache.corrupted.store(true, Ordering::SeqCst);
    service.find_all(&params).await.unwrap();

    assert_eq!(catalog.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn product_writes_drop_cached_pages() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;

    service.find_all(&ListParams::new(0, 10, None)).await.unwrap();
    assert_eq!(cache.len(), 1);

    let created = service.create_product(&product_request()).await.unwrap();
    assert_eq!(created.data.product_id, 7);
    assert_eq!(cache.len(), 0);

    service.find_all(&ListParams::new(0, 10, None)).await.unwrap();
    service.delete_product(7).await.unwrap();
    assert_eq!(cache.len(), 0);
}

#[tokio::test]
async fn failed_invalidation_does_not_fail_the_write() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    cache.unreachable.store(true, Ordering::SeqCst);
    let service = product_service(&catalog, &cache).await;

    assert!(service.create_product(&product_request()).await.is_ok());
}

#[tokio::test]
async fn product_create_requires_known_brand() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;

    let mut req = product_request();
    req.brand_id = 5;
    let err = service.create_product(&req).await.unwrap_err();

    assert!(matches!(&err, ServiceError::NotFound(msg) if msg == "brand with id 5 not found"));
}

#[tokio::test]
async fn product_update_without_match_reports_no_rows() {
    let catalog = Arc::new(Catalog::default());
    let cache = Arc::new(MemoryCache::default());
    let service = product_service(&catalog, &cache).await;

    let req = UpdateProductRequest {
        product_name: "Trek 820 - 2016".into(),
        brand_id: 1,
        category_id: 1,
        model_year: 2016,
        list_price: 379.99,
    };
    let err = service.update_product(99, &req).await.unwrap_err();

    assert!(matches!(err, ServiceError::NoRowsAffected));
}

// ---------------------------------------------------------------------------
// Users and login
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Accounts {
    users: StdMutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepositoryTrait for Accounts {
    async fn find_all(&self, _params: &ListParams) -> Result<(Vec<User>, i64), RepositoryError> {
        let users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        let count = users.len() as i64;
        Ok((users, count))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn create_user(
        &self,
        req: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.users.lock().unwrap().insert(
            id,
            User {
                id,
                first_name: req.first_name.clone(),
                last_name: req.last_name.clone(),
                login: req.login.clone(),
                password: password_hash.to_string(),
                phone_number: req.phone_number.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn update_user(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
        password_hash: Option<&str>,
    ) -> Result<u64, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.get_mut(&id) else {
            return Ok(0);
        };
        user.login = req.login.clone();
        if let Some(hash) = password_hash {
            user.password = hash.to_string();
        }
        Ok(1)
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, RepositoryError> {
        Ok(self.users.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }
}

async fn auth_service(accounts: &Arc<Accounts>, jwt: &Arc<JwtConfig>) -> AuthService {
    let hash = Arc::new(Hashing::with_cost(4)) as DynHashing;
    let repository = accounts.clone() as DynUserRepository;
    let users = Arc::new(UserService::new(repository.clone(), hash.clone(), registry()).await)
        as DynUserService;

    AuthService::new(AuthServiceDeps {
        users,
        repository,
        hash,
        jwt: jwt.clone() as DynJwtService,
        registry: registry(),
    })
    .await
}

fn register_request() -> CreateUserRequest {
    CreateUserRequest {
        first_name: "Genna".into(),
        last_name: "Serrano".into(),
        login: "genna".into(),
        password: "s3cret-pass".into(),
        phone_number: None,
    }
}

#[tokio::test]
async fn registered_user_can_log_in() {
    let accounts = Arc::new(Accounts::default());
    let jwt = Arc::new(JwtConfig::new("test-secret"));
    let service = auth_service(&accounts, &jwt).await;

    let registered = service.register_user(&register_request()).await.unwrap();
    let stored = accounts.users.lock().unwrap()[&registered.data.id].clone();
    assert_ne!(stored.password, "s3cret-pass");

    let login = LoginRequest {
        login: "genna".into(),
        password: "s3cret-pass".into(),
    };
    let token = service.login_user(&login).await.unwrap();

    assert_eq!(
        jwt.verify_token(&token.data.access_token, "access").unwrap(),
        registered.data.id
    );
}

#[tokio::test]
async fn wrong_password_and_unknown_login_are_both_invalid_credentials() {
    let accounts = Arc::new(Accounts::default());
    let jwt = Arc::new(JwtConfig::new("test-secret"));
    let service = auth_service(&accounts, &jwt).await;
    service.register_user(&register_request()).await.unwrap();

    let wrong_password = LoginRequest {
        login: "genna".into(),
        password: "guess".into(),
    };
    let unknown_login = LoginRequest {
        login: "nobody".into(),
        password: "s3cret-pass".into(),
    };

    assert!(matches!(
        service.login_user(&wrong_password).await,
        Err(ServiceError::InvalidCredentials)
    ));
    assert!(matches!(
        service.login_user(&unknown_login).await,
        Err(ServiceError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn user_update_rehashes_a_new_password() {
    let accounts = Arc::new(Accounts::default());
    let hash = Arc::new(Hashing::with_cost(4)) as DynHashing;
    let service =
        UserService::new(accounts.clone() as DynUserRepository, hash.clone(), registry()).await;

    let created = service.create_user(&register_request()).await.unwrap();
    let id = created.data.id;
    let before = accounts.users.lock().unwrap()[&id].password.clone();

    let req = UpdateUserRequest {
        first_name: "Genna".into(),
        last_name: "Serrano".into(),
        login: "genna".into(),
        password: Some("another-pass".into()),
        phone_number: None,
    };
    service.update_user(id, &req).await.unwrap();

    let after = accounts.users.lock().unwrap()[&id].password.clone();
    assert_ne!(before, after);
    assert!(hash.compare_password(&after, "another-pass").await.is_ok());

    service.delete_user(id).await.unwrap();
    assert!(matches!(
        service.delete_user(id).await,
        Err(ServiceError::NoRowsAffected)
    ));
}
