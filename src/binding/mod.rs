mod host;
mod text_layout;
mod variant;
mod controller;

pub use self::host::*;
pub use self::text_layout::*;
pub use self::variant::*;
pub use self::controller::*;
