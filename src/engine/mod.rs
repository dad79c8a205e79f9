pub mod decode;
pub mod thumbs;
