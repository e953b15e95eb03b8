pub mod breadcrumbs;
pub mod table_checkbox;
