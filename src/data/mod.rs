pub mod ascii;
pub mod channels;
pub mod decode;
pub mod metric;
pub mod scope;
pub mod triggers;
