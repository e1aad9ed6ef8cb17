mod fetch;

pub use fetch::run_fetch;
