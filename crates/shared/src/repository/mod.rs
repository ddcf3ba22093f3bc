mod brand;
mod category;
mod customer;
mod order;
mod product;
mod sql;
mod staff;
mod stock;
mod store;
mod user;

pub use self::brand::BrandRepository;
pub use self::category::CategoryRepository;
pub use self::customer::CustomerRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::staff::StaffRepository;
pub use self::stock::StockRepository;
pub use self::store::StoreRepository;
pub use self::user::UserRepository;
