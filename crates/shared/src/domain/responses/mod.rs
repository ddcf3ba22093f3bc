mod api;
mod brand;
mod category;
mod customer;
mod order;
mod product;
mod staff;
mod stock;
mod store;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::brand::{BrandListResponse, BrandResponse};
pub use self::category::{CategoryListResponse, CategoryResponse};
pub use self::customer::{CustomerListResponse, CustomerResponse};
pub use self::order::{OrderItemResponse, OrderListResponse, OrderResponse};
pub use self::product::{ProductListResponse, ProductResponse};
pub use self::staff::{StaffListResponse, StaffResponse};
pub use self::stock::{StockKeyResponse, StockListResponse, StockResponse};
pub use self::store::{StoreListResponse, StoreResponse};
pub use self::token::TokenResponse;
pub use self::user::{UserListResponse, UserResponse};
