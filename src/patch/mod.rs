pub mod index_html;
pub mod root_import;
pub mod scaffold;
pub mod stylesheet;
