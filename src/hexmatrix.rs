pub mod codec;
pub mod io;
