mod auth;
mod brand;
mod category;
mod customer;
mod order;
mod product;
mod staff;
mod stock;
mod store;
mod user;

#[cfg(test)]
mod tests;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::brand::BrandService;
pub use self::category::CategoryService;
pub use self::customer::CustomerService;
pub use self::order::{
    OrderCommandService, OrderCommandServiceDeps, OrderQueryService, OrderService,
    OrderServiceDeps,
};
pub use self::product::{ProductService, ProductServiceDeps};
pub use self::staff::StaffService;
pub use self::stock::StockService;
pub use self::store::StoreService;
pub use self::user::UserService;
