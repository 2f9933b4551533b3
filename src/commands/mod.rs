pub mod download;
pub mod gen_script;
pub mod verify;

pub use download::download;
pub use gen_script::gen_script;
pub use verify::verify;
