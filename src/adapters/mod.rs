// Adapters: concrete implementations of the domain ports.

pub mod harvard;

pub use harvard::HarvardImageClient;
