
pub(crate) const PRODUCT_PAGE: &str = include_str!("fixtures/product_page.html");
