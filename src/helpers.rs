pub mod share_parameters;
