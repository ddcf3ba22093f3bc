use crate::{
    abstract_trait::{
        DynAuthService, DynBrandRepository, DynBrandService, DynCategoryRepository,
        DynCategoryService, DynCustomerRepository, DynCustomerService, DynHashing, DynJwtService,
        DynProductCacheRepository, DynProductRepository, DynProductService, DynStaffRepository,
        DynStaffService, DynStockRepository, DynStockService, DynStoreRepository, DynStoreService,
        DynUserRepository, DynUserService,
    },
    cache::{CacheStore, ProductCacheRepository},
    config::{ConnectionPool, RedisClient},
    repository::{
        BrandRepository, CategoryRepository, CustomerRepository, OrderRepository,
        ProductRepository, StaffRepository, StockRepository, StoreRepository, UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, BrandService, CategoryService, CustomerService,
        OrderService, OrderServiceDeps, ProductService, ProductServiceDeps, StaffService,
        StockService, StoreService, UserService,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub brand_service: DynBrandService,
    pub category_service: DynCategoryService,
    pub customer_service: DynCustomerService,
    pub store_service: DynStoreService,
    pub staff_service: DynStaffService,
    pub product_service: DynProductService,
    pub stock_service: DynStockService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &"<UserService>")
            .field("brand_service", &"<BrandService>")
            .field("category_service", &"<CategoryService>")
            .field("customer_service", &"<CustomerService>")
            .field("store_service", &"<StoreService>")
            .field("staff_service", &"<StaffService>")
            .field("product_service", &"<ProductService>")
            .field("stock_service", &"<StockService>")
            .field("order_service", &self.order_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub redis: RedisClient,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            registry,
            redis,
        } = deps;

        let brand_repository = Arc::new(BrandRepository::new(pool.clone())) as DynBrandRepository;
        let category_repository =
            Arc::new(CategoryRepository::new(pool.clone())) as DynCategoryRepository;
        let customer_repository =
            Arc::new(CustomerRepository::new(pool.clone())) as DynCustomerRepository;
        let store_repository = Arc::new(StoreRepository::new(pool.clone())) as DynStoreRepository;
        let staff_repository = Arc::new(StaffRepository::new(pool.clone())) as DynStaffRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let stock_repository = Arc::new(StockRepository::new(pool.clone())) as DynStockRepository;
        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let order_repository = OrderRepository::new(pool);

        let product_cache = Arc::new(ProductCacheRepository::new(CacheStore::new(
            redis.pool.clone(),
        ))) as DynProductCacheRepository;

        let user_service = Arc::new(
            UserService::new(user_repository.clone(), hash.clone(), registry.clone()).await,
        ) as DynUserService;

        let auth_service = Arc::new(
            AuthService::new(AuthServiceDeps {
                users: user_service.clone(),
                repository: user_repository,
                hash,
                jwt: jwt_config,
                registry: registry.clone(),
            })
            .await,
        ) as DynAuthService;

        let brand_service =
            Arc::new(BrandService::new(brand_repository.clone(), registry.clone()).await)
                as DynBrandService;

        let category_service =
            Arc::new(CategoryService::new(category_repository.clone(), registry.clone()).await)
                as DynCategoryService;

        let customer_service =
            Arc::new(CustomerService::new(customer_repository.clone(), registry.clone()).await)
                as DynCustomerService;

        let store_service =
            Arc::new(StoreService::new(store_repository.clone(), registry.clone()).await)
                as DynStoreService;

        let staff_service = Arc::new(
            StaffService::new(
                staff_repository.clone(),
                store_repository.clone(),
                registry.clone(),
            )
            .await,
        ) as DynStaffService;

        let product_service = Arc::new(
            ProductService::new(ProductServiceDeps {
                repository: product_repository.clone(),
                brand: brand_repository,
                category: category_repository,
                cache: product_cache,
                registry: registry.clone(),
            })
            .await,
        ) as DynProductService;

        let stock_service = Arc::new(
            StockService::new(
                stock_repository.clone(),
                store_repository.clone(),
                product_repository,
                registry.clone(),
            )
            .await,
        ) as DynStockService;

        let order_service = OrderService::new(OrderServiceDeps {
            query: order_repository.query,
            command: order_repository.command,
            customer: customer_repository,
            store: store_repository,
            staff: staff_repository,
            stock: stock_repository,
            registry,
        })
        .await;

        Self {
            auth_service,
            user_service,
            brand_service,
            category_service,
            customer_service,
            store_service,
            staff_service,
            product_service,
            stock_service,
            order_service,
        }
    }
}
