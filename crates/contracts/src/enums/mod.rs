pub mod trigger_type;
