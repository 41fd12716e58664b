mod about;
mod blog;
mod careers;
mod category;
mod contact;
mod distribution;
mod home;
mod login;
mod privacy_terms;
mod products;
mod retail_application;
mod retailers;
mod supplier_application;
mod suppliers;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use careers::{mailto, CareersPage};
pub use category::{
    BeautyPage, CategoryContent, CategoryPage, ProductCategory, ProfessionalCarePage, SkincarePage,
    WellnessPage,
};
pub use contact::ContactPage;
pub use distribution::DistributionPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use privacy_terms::PrivacyTermsPage;
pub use products::ProductsPage;
pub use retail_application::RetailApplicationPage;
pub use retailers::RetailersPage;
pub use supplier_application::SupplierApplicationPage;
pub use suppliers::SuppliersPage;
