pub mod dom;
pub mod form_fields;
pub mod transition;
