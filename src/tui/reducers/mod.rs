pub mod data_loading;
pub mod navigation;
pub mod roster;
pub mod transactions;

pub use data_loading::reduce_data_loading;
pub use navigation::reduce_navigation;
pub use roster::reduce_roster;
pub use transactions::reduce_transactions;
