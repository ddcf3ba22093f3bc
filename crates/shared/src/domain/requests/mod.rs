mod auth;
mod brand;
mod category;
mod customer;
mod order;
mod pagination;
mod patch;
mod product;
mod staff;
mod stock;
mod store;
mod user;

pub use self::auth::LoginRequest;
pub use self::brand::{CreateBrandRequest, UpdateBrandRequest};
pub use self::category::{CreateCategoryRequest, UpdateCategoryRequest};
pub use self::customer::{CreateCustomerRequest, UpdateCustomerRequest};
pub use self::order::{CreateOrderItemRequest, CreateOrderRequest, NewOrderItem, UpdateOrderRequest};
pub use self::pagination::{ListParams, ListQuery};
pub use self::patch::PatchRequest;
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::staff::{CreateStaffRequest, UpdateStaffRequest};
pub use self::stock::{CreateStockRequest, UpdateStockRequest};
pub use self::store::{CreateStoreRequest, UpdateStoreRequest};
pub use self::user::{CreateUserRequest, UpdateUserRequest};
