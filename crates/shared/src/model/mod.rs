mod brand;
mod category;
mod customer;
mod order;
mod product;
mod staff;
mod stock;
mod store;
mod user;

pub use self::brand::Brand;
pub use self::category::Category;
pub use self::customer::Customer;
pub use self::order::{Order, OrderItem};
pub use self::product::Product;
pub use self::staff::Staff;
pub use self::stock::Stock;
pub use self::store::Store;
pub use self::user::User;
