//! Command implementations.

pub mod import;
pub mod list;
pub mod profile;
pub mod search;
pub mod tree;

pub use self::import::execute_import;
pub use self::list::execute_list;
pub use self::profile::execute_profile;
pub use self::search::execute_search;
pub use self::tree::execute_tree;
