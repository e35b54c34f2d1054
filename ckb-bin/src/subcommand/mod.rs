mod build;
mod unique_id;

pub use self::build::build;
pub use self::unique_id::unique_id;
