pub mod complaint;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod preferences;
pub mod requests;

pub use complaint::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use preferences::*;
pub use requests::*;
