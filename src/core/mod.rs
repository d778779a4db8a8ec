pub mod bundler;
