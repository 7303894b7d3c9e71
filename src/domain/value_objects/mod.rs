pub mod entity_name;
pub mod ids;
pub mod pagination;
