pub mod approval_modal;
pub mod brand_title;
pub mod navbar;
pub mod page;
pub mod toaster;

pub use approval_modal::ApprovalModal;
pub use brand_title::BrandTitleButton;
pub use navbar::Navbar;
pub use page::Page;
pub use toaster::Toaster;
