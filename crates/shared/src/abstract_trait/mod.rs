mod auth;
mod brand;
mod category;
mod customer;
mod hashing;
mod jwt;
mod order;
mod product;
mod staff;
mod stock;
mod store;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::brand::{BrandRepositoryTrait, BrandServiceTrait, DynBrandRepository, DynBrandService};
pub use self::category::{
    CategoryRepositoryTrait, CategoryServiceTrait, DynCategoryRepository, DynCategoryService,
};
pub use self::customer::{
    CustomerRepositoryTrait, CustomerServiceTrait, DynCustomerRepository, DynCustomerService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCacheRepository, DynProductRepository, DynProductService,
    ProductCacheRepositoryTrait, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::staff::{DynStaffRepository, DynStaffService, StaffRepositoryTrait, StaffServiceTrait};
pub use self::stock::{DynStockRepository, DynStockService, StockRepositoryTrait, StockServiceTrait};
pub use self::store::{DynStoreRepository, DynStoreService, StoreRepositoryTrait, StoreServiceTrait};
pub use self::user::{DynUserRepository, DynUserService, UserRepositoryTrait, UserServiceTrait};
