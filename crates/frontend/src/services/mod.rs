pub mod page;
pub mod storage;

pub use storage::LocalTokenStore;
