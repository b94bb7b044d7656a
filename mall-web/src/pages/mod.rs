pub mod account;
pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod home;
pub mod login;
pub mod not_found;
pub mod order_detail;
pub mod orders;
pub mod payment;
pub mod payment_result;
pub mod product_detail;

pub use account::AccountPage;
pub use admin::AdminPage;
pub use cart::CartPage;
pub use catalog::CatalogPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use order_detail::OrderDetailPage;
pub use orders::OrdersPage;
pub use payment::PaymentPage;
pub use payment_result::PaymentResultPage;
pub use product_detail::ProductDetailPage;

use mall_core::ApiError;

/// Lifecycle of remote data inside a view.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}
