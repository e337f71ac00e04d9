pub mod args;
pub mod keys;
pub mod serializers;
