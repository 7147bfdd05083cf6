pub mod boilerplate;
