pub mod copy_text;
pub mod delete_trigger;
