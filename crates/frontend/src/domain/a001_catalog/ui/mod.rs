pub mod category_page;
pub mod filter_sidebar;
pub mod product_card;
