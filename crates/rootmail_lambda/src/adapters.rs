pub mod buckets;
pub mod callback;
pub mod identity;
pub mod log_groups;
pub mod object_store;
pub mod ops_center;
pub mod parameter_store;
pub mod receipt_rules;
pub mod sleeper;
